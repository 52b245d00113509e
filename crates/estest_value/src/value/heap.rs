//! Heap wrapper for reference-typed values.
//!
//! `Heap<T>` wraps `Arc<T>` and is the only way heap-backed `Value` variants
//! hold their data. The constructor is `pub(super)`, so allocation goes
//! through the factory methods on `Value`.
//!
//! Cloning a `Heap` shares the allocation. That is what gives arrays,
//! objects, symbols and functions their identity: two handles are the same
//! host object exactly when [`Heap::ptr_eq`] holds.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A shared, immutable heap allocation with observable identity.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    /// Allocate a new value. Only visible inside the value module.
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

/// Content equality. Identity is `ptr_eq`.
impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests;
