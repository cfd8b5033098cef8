//! Thread pinning for stable measurements.
//!
//! Pinning keeps the benchmark thread on one core so that a sample never
//! straddles a migration. Only Linux is supported (through `libc`); on other
//! platforms every call is a no-op and the guard reports "not pinned".

use std::sync::atomic::{AtomicBool, Ordering};

use log::warn;

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;

    thread_local! {
        static SAVED_MASK: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    pub fn current_cpu() -> Option<usize> {
        // SAFETY: no arguments, returns -1 on failure.
        let cpu = unsafe { libc::sched_getcpu() };
        usize::try_from(cpu).ok()
    }

    pub fn online_cpus() -> Option<usize> {
        // SAFETY: sysconf with a valid name has no preconditions.
        let n = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
        usize::try_from(n).ok().filter(|&n| n > 0)
    }

    pub fn pin(core_id: usize) -> bool {
        // SAFETY: cpu_set_t is plain data; the size passed matches the buffer.
        unsafe {
            let mut saved: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut saved) != 0 {
                return false;
            }

            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            if libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) != 0 {
                return false;
            }

            SAVED_MASK.with(|cell| *cell.borrow_mut() = Some(saved));
            true
        }
    }

    pub fn unpin() -> bool {
        SAVED_MASK.with(|cell| match cell.borrow_mut().take() {
            // SAFETY: `set` was filled by sched_getaffinity in `pin`.
            Some(set) => unsafe {
                libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
            },
            None => false,
        })
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn current_cpu() -> Option<usize> {
        None
    }
    pub fn online_cpus() -> Option<usize> {
        None
    }
    pub fn pin(_core_id: usize) -> bool {
        false
    }
    pub fn unpin() -> bool {
        false
    }
}

static WARNED: AtomicBool = AtomicBool::new(false);

/// Pin the current thread to the core it is running on (or core 0).
///
/// Returns the core pinned to.
pub fn pin_to_current_core() -> Option<usize> {
    let core = platform::current_cpu()
        .or_else(|| platform::online_cpus().map(|_| 0))
        .filter(|&core| platform::pin(core));

    if core.is_none() && !WARNED.swap(true, Ordering::Relaxed) {
        warn!("CPU pinning unavailable, measurements may include core migrations");
    }
    core
}

/// Restore the affinity saved by the last successful pin.
pub fn unpin() -> bool {
    platform::unpin()
}

/// RAII guard for CPU pinning - pins on creation, unpins on drop.
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        Self {
            pinned_core: pin_to_current_core(),
        }
    }

    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_some() {
            unpin();
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}
