//! Lock shim so the `std` and `alloc` builds share one locking API.

#[cfg(feature = "std")]
type Inner<T> = std::sync::Mutex<T>;
#[cfg(feature = "std")]
pub type Guard<'a, T> = std::sync::MutexGuard<'a, T>;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Inner<T> = spin::Mutex<T>;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub type Guard<'a, T> = spin::MutexGuard<'a, T>;

/// Mutual exclusion around session state.
///
/// A poisoned `std` lock is recovered rather than propagated: every critical
/// section in this crate leaves its data consistent before it can panic.
pub struct Mutex<T> {
    inner: Inner<T>,
}

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self {
            inner: Inner::new(value),
        }
    }

    #[cfg(feature = "std")]
    pub fn lock(&self) -> Guard<'_, T> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn lock(&self) -> Guard<'_, T> {
        self.inner.lock()
    }
}

impl<T: Clone> Mutex<T> {
    /// Copies the guarded value out without holding the lock afterwards.
    pub fn get_cloned(&self) -> T {
        self.lock().clone()
    }
}
