use std::fmt;
use thiserror::Error;

/// Failure to hand out a ring buffer control structure.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum InitError {
    #[error("init failed because all {pool_size} pool slots are in use")]
    CapacityExhausted { pool_size: usize },
}

/// Returned by `try_put` when the ring is full. The rejected sample can be
/// taken back with [`TryPutError::into_inner`].
#[derive(Error, Clone, PartialEq)]
#[error("put failed because ring buffer is full")]
pub struct TryPutError {
    pub(crate) val: f32,
}

impl fmt::Debug for TryPutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryPutError")
            .field("kind", &"BufferFull")
            .finish()
    }
}

impl TryPutError {
    pub fn into_inner(self) -> f32 {
        self.val
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GetError {
    #[error("get failed because ring buffer is empty")]
    BufferEmpty,
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PeekError {
    #[error("cannot peek {requested} samples, {available} available")]
    InsufficientData { requested: usize, available: usize },
}

/// Any ring buffer failure, for callers chaining operations with `?`.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    CapacityExhausted(#[from] InitError),
    #[error("ring buffer is full")]
    BufferFull,
    #[error(transparent)]
    BufferEmpty(#[from] GetError),
    #[error(transparent)]
    InsufficientData(#[from] PeekError),
}

impl From<TryPutError> for Error {
    fn from(_: TryPutError) -> Self {
        Error::BufferFull
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
