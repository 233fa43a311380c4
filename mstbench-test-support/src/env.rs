//! Scoped environment-variable overrides for tests.
//!
//! The process environment is global, so every override must be made while
//! holding [`lock`]. Guards restore the previous value on drop.

use std::{
    env,
    sync::{Mutex, MutexGuard, PoisonError},
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serialises access to the process environment across tests.
///
/// A panicking test poisons the mutex; later tests still acquire it because
/// the guarded data is `()`.
pub fn lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Restores an environment variable to its prior state when dropped.
///
/// # Examples
/// ```
/// use mstbench_test_support::env::{self, EnvGuard};
///
/// let _lock = env::lock();
/// {
///     let _guard = EnvGuard::set("MSTBENCH_DOCTEST_VAR", "on");
///     assert_eq!(std::env::var("MSTBENCH_DOCTEST_VAR").as_deref(), Ok("on"));
/// }
/// assert!(std::env::var("MSTBENCH_DOCTEST_VAR").is_err());
/// ```
#[must_use = "the override is reverted as soon as the guard is dropped"]
pub struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    /// Sets `key` to `value` until the guard is dropped.
    pub fn set(key: &'static str, value: &str) -> Self {
        let original = env::var(key).ok();
        // SAFETY: callers hold `lock()` while the guard is alive.
        unsafe { env::set_var(key, value) };
        Self { key, original }
    }

    /// Removes `key` until the guard is dropped.
    pub fn unset(key: &'static str) -> Self {
        let original = env::var(key).ok();
        // SAFETY: callers hold `lock()` while the guard is alive.
        unsafe { env::remove_var(key) };
        Self { key, original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.original.take() {
            // SAFETY: callers hold `lock()` while the guard is alive.
            Some(value) => unsafe { env::set_var(self.key, value) },
            // SAFETY: as above.
            None => unsafe { env::remove_var(self.key) },
        }
    }
}
