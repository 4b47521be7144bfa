#[cfg(feature = "heap")]
mod heap;
mod pool;

#[cfg(feature = "heap")]
pub use self::heap::Heap;
pub use self::pool::StaticPool;

use crate::error::InitError;
use crate::ring::{self, RingBuf};
use std::ops::DerefMut;

/// Where a ring's control structure lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Static,
    Dynamic,
}

/// Hands out ring buffer control structures over caller-owned storage.
///
/// An allocator only manages the control structure. The storage is borrowed
/// for `'a` and is never freed by the ring or by its allocator.
pub trait Allocator<'a> {
    type Handle: DerefMut<Target = RingBuf<'a>>;

    fn strategy(&self) -> Strategy;

    /// Creates an empty ring whose capacity is `storage.len()`.
    ///
    /// # Panics
    ///
    /// Panics if `storage` is empty.
    fn init(&self, storage: &'a mut [f32]) -> Result<Self::Handle, InitError>;

    /// Creates an empty ring over the first `capacity` slots of `storage`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or larger than `storage.len()`.
    fn init_with_capacity(
        &self,
        storage: &'a mut [f32],
        capacity: usize,
    ) -> Result<Self::Handle, InitError> {
        self.init(ring::prefix(storage, capacity))
    }
}
