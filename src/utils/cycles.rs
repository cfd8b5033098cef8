//! CPU cycle counter.
//!
//! x86/x86_64 read the TSC fenced by LFENCE; aarch64 reads the virtual
//! counter CNTVCT_EL0, which ticks at a fixed frequency rather than per cycle.

#[inline(always)]
pub fn read_cycles() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        use core::arch::x86_64::{_mm_lfence, _rdtsc};
        // SAFETY: LFENCE and RDTSC are available on every x86_64 CPU.
        unsafe {
            _mm_lfence();
            let cycles = _rdtsc();
            _mm_lfence();
            cycles
        }
    }

    #[cfg(target_arch = "x86")]
    {
        use core::arch::x86::{_mm_lfence, _rdtsc};
        // SAFETY: requires SSE2, which every target this crate builds for has.
        unsafe {
            _mm_lfence();
            let cycles = _rdtsc();
            _mm_lfence();
            cycles
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        let val: u64;
        // SAFETY: CNTVCT_EL0 is readable from EL0 on all supported OSes.
        unsafe {
            core::arch::asm!("isb", "mrs {}, cntvct_el0", out(reg) val, options(nostack));
        }
        val
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    {
        compile_error!("cpu_cycles feature requires x86, x86_64, or aarch64; build with --features use_time");
    }
}

/// Cycles spent in `f`, with its result
#[inline(always)]
pub fn measure_cycles<F, R>(mut f: F) -> (u64, R)
where
    F: FnMut() -> R,
{
    let start = read_cycles();
    let result = f();
    (read_cycles().saturating_sub(start), result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hint::black_box;

    #[test]
    fn test_read_cycles_roughly_monotonic() {
        let c1 = read_cycles();
        let c2 = read_cycles();
        assert!(c2 >= c1 || c1 - c2 < 1000);
    }

    #[test]
    fn test_measure_cycles_returns_result() {
        let (_, sum) = measure_cycles(|| (0..1000u64).map(black_box).sum::<u64>());
        assert_eq!(sum, 499_500);
    }
}
