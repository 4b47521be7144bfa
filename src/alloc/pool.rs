use super::{Allocator, Strategy};
use crate::error::InitError;
use crate::ring::RingBuf;
use log::{debug, warn};
use std::cell::{Cell, UnsafeCell};
use std::fmt;
use std::mem::MaybeUninit;

/// A fixed pool of `N` ring buffer control structures.
///
/// Every `init` claims the next unused slot and the returned handle borrows
/// the pool. Slots are never given back: once `N` rings have been created,
/// further `init` calls fail with [`InitError::CapacityExhausted`], even if
/// earlier handles have been dropped.
///
/// The pool is not `Sync`, so all rings must be created from one thread.
pub struct StaticPool<'a, const N: usize> {
    slots: [UnsafeCell<MaybeUninit<RingBuf<'a>>>; N],
    claimed: Cell<usize>,
}

impl<'a, const N: usize> StaticPool<'a, N> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| UnsafeCell::new(MaybeUninit::uninit())),
            claimed: Cell::new(0),
        }
    }

    pub fn pool_size(&self) -> usize {
        N
    }

    /// Number of slots handed out so far.
    pub fn claimed(&self) -> usize {
        self.claimed.get()
    }

    pub fn available(&self) -> usize {
        N - self.claimed()
    }

    /// Creates an empty ring over `storage` in the next free slot.
    ///
    /// # Panics
    ///
    /// Panics if `storage` is empty.
    ///
    /// # Errors
    ///
    /// Fails with [`InitError::CapacityExhausted`] once all `N` slots are
    /// claimed. The `storage` borrow is consumed even then, so the array
    /// stays borrowed for as long as the pool lives.
    #[allow(clippy::mut_from_ref)]
    pub fn init(&self, storage: &'a mut [f32]) -> Result<&mut RingBuf<'a>, InitError> {
        self.claim(RingBuf::new(storage))
    }

    /// Like [`StaticPool::init`], over the first `capacity` slots of `storage`.
    #[allow(clippy::mut_from_ref)]
    pub fn init_with_capacity(
        &self,
        storage: &'a mut [f32],
        capacity: usize,
    ) -> Result<&mut RingBuf<'a>, InitError> {
        self.claim(RingBuf::with_capacity(storage, capacity))
    }

    #[allow(clippy::mut_from_ref)]
    fn claim(&self, ring: RingBuf<'a>) -> Result<&mut RingBuf<'a>, InitError> {
        let idx = self.claimed.get();
        if idx == N {
            warn!("static ring pool exhausted, all {} slots in use", N);
            return Err(InitError::CapacityExhausted { pool_size: N });
        }
        self.claimed.set(idx + 1);

        debug!(
            "claimed static slot {}/{} for ring of capacity {}",
            idx + 1,
            N,
            ring.capacity()
        );

        // Safety: `claimed` only grows, so slot `idx` is handed out exactly
        // once and no other reference to it exists.
        let slot = unsafe { &mut *self.slots[idx].get() };
        Ok(slot.write(ring))
    }
}

impl<const N: usize> Default for StaticPool<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for StaticPool<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticPool")
            .field("pool_size", &N)
            .field("claimed", &self.claimed())
            .finish()
    }
}

impl<'p, 'a, const N: usize> Allocator<'a> for &'p StaticPool<'a, N> {
    type Handle = &'p mut RingBuf<'a>;

    fn strategy(&self) -> Strategy {
        Strategy::Static
    }

    fn init(&self, storage: &'a mut [f32]) -> Result<Self::Handle, InitError> {
        let pool: &'p StaticPool<'a, N> = self;
        pool.init(storage)
    }
}
