use super::{Allocator, Strategy};
use crate::error::InitError;
use crate::ring::RingBuf;
use log::debug;

/// Allocates every control structure on the heap.
///
/// Initialization never runs out of slots. Pair each `init` with
/// [`Heap::release`], which frees the control structure and leaves the
/// storage to its owner.
#[derive(Clone, Copy, Debug, Default)]
pub struct Heap;

impl Heap {
    pub fn release(&self, handle: Box<RingBuf<'_>>) {
        debug!("released heap ring of capacity {}", handle.capacity());
        drop(handle);
    }
}

impl<'a> Allocator<'a> for Heap {
    type Handle = Box<RingBuf<'a>>;

    fn strategy(&self) -> Strategy {
        Strategy::Dynamic
    }

    fn init(&self, storage: &'a mut [f32]) -> Result<Self::Handle, InitError> {
        let ring = Box::new(RingBuf::new(storage));
        debug!("allocated heap ring of capacity {}", ring.capacity());
        Ok(ring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_unbounded() {
        let mut storage = [[0.0; 2]; 16];
        let rings: Vec<_> = storage.iter_mut().map(|s| Heap.init(s).unwrap()).collect();

        assert_eq!(rings.len(), 16);
        assert!(rings.iter().all(|r| r.is_empty() && r.capacity() == 2));
    }

    #[test]
    fn release_keeps_storage() {
        let mut storage = [0.0; 3];
        let mut ring = Heap.init(&mut storage).unwrap();
        assert_eq!(Heap.strategy(), Strategy::Dynamic);

        ring.put_slice(&[1.0, 2.0, 3.0]);
        Heap.release(ring);

        assert_eq!(storage, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn init_with_capacity() {
        let mut storage = [0.0; 10];
        let ring = Heap.init_with_capacity(&mut storage, 5).unwrap();
        assert_eq!(ring.capacity(), 5);
        Heap.release(ring);
    }
}
