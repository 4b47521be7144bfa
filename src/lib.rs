//! A fixed-capacity ring buffer of `f32` samples over caller-owned storage.
//!
//! The ring never allocates or frees sample storage. Its control structure
//! comes from an [`Allocator`]: a bounded [`StaticPool`], or the [`Heap`]
//! (behind the default `heap` feature).
//!
//! ```
//! use ring_buf_float::{DefaultPool, GetError};
//!
//! let mut storage = [0.0; 4];
//! let pool = DefaultPool::new();
//! let ring = pool.init(&mut storage).unwrap();
//!
//! ring.try_put(1.0).unwrap();
//! ring.put(2.0);
//! assert_eq!(ring.len(), 2);
//! assert_eq!(ring.get(), Ok(1.0));
//! assert_eq!(ring.get(), Ok(2.0));
//! assert_eq!(ring.get(), Err(GetError::BufferEmpty));
//! ```

mod alloc;
pub mod error;
mod ring;

#[cfg(feature = "heap")]
pub use crate::alloc::Heap;
pub use crate::alloc::{Allocator, StaticPool, Strategy};
pub use crate::error::{Error, GetError, InitError, PeekError, Result, TryPutError};
pub use crate::ring::{Peek, RingBuf};

/// Number of control structures in a [`DefaultPool`].
pub const MAX_RBUFS: usize = 2;

/// Static pool holding [`MAX_RBUFS`] rings.
pub type DefaultPool<'a> = StaticPool<'a, MAX_RBUFS>;
