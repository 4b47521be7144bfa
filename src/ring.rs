use crate::error::{GetError, PeekError, TryPutError};
use log::{debug, trace};
use std::fmt;
use std::iter::FusedIterator;

/// Steps an index one slot forward, wrapping to zero at `cap`.
#[inline]
pub(crate) fn advance(idx: usize, cap: usize) -> usize {
    let next = idx + 1;
    if next == cap {
        0
    } else {
        next
    }
}

pub(crate) fn prefix(storage: &mut [f32], capacity: usize) -> &mut [f32] {
    assert!(
        capacity <= storage.len(),
        "capacity {} exceeds storage of {} samples",
        capacity,
        storage.len()
    );
    &mut storage[..capacity]
}

/// Fixed-capacity ring of `f32` samples over caller-owned storage.
///
/// The ring only borrows its storage: releasing or dropping the control
/// structure never frees or clears the samples. `head == tail` holds both
/// when the ring is empty and when it is full; the `full` flag tells the two
/// apart, so every slot of the storage is usable.
///
/// A ring is not meant to be shared between a producer and a consumer
/// thread. If it is ever wrapped for SPSC use, the producer must be limited
/// to [`RingBuf::try_put`]: [`RingBuf::put`] moves `tail` when it overwrites
/// and would race the consumer.
pub struct RingBuf<'a> {
    buf: &'a mut [f32],
    head: usize,
    tail: usize,
    full: bool,
}

impl<'a> RingBuf<'a> {
    /// Binds `storage` as the ring's slots and returns an empty ring whose
    /// capacity is `storage.len()`.
    ///
    /// # Panics
    ///
    /// Panics if `storage` is empty.
    pub fn new(storage: &'a mut [f32]) -> Self {
        assert!(!storage.is_empty(), "ring buffer storage must not be empty");
        Self {
            buf: storage,
            head: 0,
            tail: 0,
            full: false,
        }
    }

    /// Binds the first `capacity` slots of `storage`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or larger than `storage.len()`.
    pub fn with_capacity(storage: &'a mut [f32], capacity: usize) -> Self {
        Self::new(prefix(storage, capacity))
    }

    /// Empties the ring. Stored samples are left in place but can no longer
    /// be read.
    pub fn reset(&mut self) {
        debug!("reset ring of capacity {}", self.capacity());
        self.head = 0;
        self.tail = 0;
        self.full = false;
    }

    pub fn len(&self) -> usize {
        if self.full {
            self.capacity()
        } else if self.head >= self.tail {
            self.head - self.tail
        } else {
            self.capacity() + self.head - self.tail
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        !self.full && self.head == self.tail
    }

    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Inserts `value`, overwriting the oldest sample when the ring is full.
    ///
    /// This never fails. On a full ring the oldest sample is dropped without
    /// any error being reported; use [`RingBuf::try_put`] to keep it instead.
    pub fn put(&mut self, value: f32) {
        self.buf[self.head] = value;
        self.advance_head();
    }

    /// Overwrite-inserts every sample of `data` in order.
    pub fn put_slice(&mut self, data: &[f32]) {
        for &value in data {
            self.put(value);
        }
    }

    /// Inserts `value` only if there is room for it.
    pub fn try_put(&mut self, value: f32) -> Result<(), TryPutError> {
        if self.full {
            trace!(
                "rejected sample, ring of capacity {} is full",
                self.capacity()
            );
            return Err(TryPutError { val: value });
        }

        self.buf[self.head] = value;
        self.advance_head();
        Ok(())
    }

    /// Removes and returns the oldest sample.
    pub fn get(&mut self) -> Result<f32, GetError> {
        if self.is_empty() {
            return Err(GetError::BufferEmpty);
        }

        let value = self.buf[self.tail];
        self.tail = advance(self.tail, self.capacity());
        self.full = false;
        Ok(value)
    }

    /// Looks at the `count` oldest samples without removing them.
    ///
    /// Fails if the ring is empty, even for a `count` of zero, or if fewer
    /// than `count` samples are stored.
    pub fn peek(&self, count: usize) -> Result<Peek<'_>, PeekError> {
        let available = self.len();
        if self.is_empty() || count > available {
            return Err(PeekError::InsufficientData {
                requested: count,
                available,
            });
        }

        Ok(Peek {
            buf: &self.buf[..],
            pos: self.tail,
            remaining: count,
        })
    }

    /// Copies the `out.len()` oldest samples into `out`, oldest first.
    pub fn peek_into(&self, out: &mut [f32]) -> Result<(), PeekError> {
        let peek = self.peek(out.len())?;
        out.iter_mut().zip(peek).for_each(|(slot, value)| *slot = value);
        Ok(())
    }

    fn advance_head(&mut self) {
        let cap = self.capacity();
        if self.full {
            trace!("overwrote oldest sample at slot {}", self.tail);
            self.tail = advance(self.tail, cap);
        }

        self.head = advance(self.head, cap);
        self.full = self.head == self.tail;
    }
}

impl fmt::Debug for RingBuf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuf")
            .field("capacity", &self.capacity())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("full", &self.full)
            .finish()
    }
}

/// Iterator over samples returned by [`RingBuf::peek`], oldest first.
#[derive(Clone, Debug)]
pub struct Peek<'b> {
    buf: &'b [f32],
    pos: usize,
    remaining: usize,
}

impl Iterator for Peek<'_> {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.remaining == 0 {
            return None;
        }

        let value = self.buf[self.pos];
        self.pos = advance(self.pos, self.buf.len());
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Peek<'_> {}

impl FusedIterator for Peek<'_> {}
