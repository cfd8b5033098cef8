//! Build script compiling the C lookup variants.

use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(c_implementation_active)");
    println!("cargo:rerun-if-changed=build.rs");

    let probe = cc::Build::new();
    let compiler = probe.get_compiler();

    let compiler_name = if compiler.is_like_clang() {
        // Apple Clang is the system compiler on macOS. Vanilla Clang shares the
        // LLVM backend with rustc, so it would not tell us anything new.
        let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
        if target_os != "macos" {
            println!("cargo:warning=Vanilla Clang detected. C lookup variants disabled (requires GCC, MSVC, or Apple Clang).");
            return;
        }
        "Apple Clang"
    } else if compiler.is_like_gnu() {
        "GCC"
    } else if compiler.is_like_msvc() {
        "MSVC"
    } else {
        println!("cargo:warning=C compiler is not compatible (needs GCC, Apple Clang, or MSVC). C lookup variants disabled.");
        return;
    };

    let mut build = cc::Build::new();

    let c_files = glob::glob("src/**/*.c")
        .expect("Failed to read glob pattern")
        .filter_map(|entry| entry.ok());

    let mut found = false;
    for file in c_files {
        println!("cargo:rerun-if-changed={}", file.display());
        build.file(file);
        found = true;
    }
    if !found {
        return;
    }

    let rustflags = env::var("RUSTFLAGS").unwrap_or_default();
    let encoded_rustflags = env::var("CARGO_ENCODED_RUSTFLAGS").unwrap_or_default();
    let is_rust_native =
        rustflags.contains("target-cpu=native") || encoded_rustflags.contains("target-cpu=native");

    build.opt_level(3);
    if is_rust_native {
        build.flag_if_supported("-march=native");
    }

    build.compile("enum_lookup_c");

    println!("cargo:rustc-cfg=c_implementation_active");
    println!("cargo:rustc-env=C_COMPILER_NAME={}", compiler_name);
}
