use std::fmt;
use thiserror::Error;

/// What an insertion was allocating when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllocKind {
    /// The element record that is linked into the queue.
    Element,
    /// The owned copy of the string value.
    Value,
}

impl fmt::Display for AllocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocKind::Element => f.write_str("queue element"),
            AllocKind::Value => f.write_str("element value"),
        }
    }
}

/// An insertion could not allocate its storage. The queue it was inserting
/// into is left unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("failed to allocate {size} bytes for {kind}")]
pub struct AllocError {
    pub kind: AllocKind,
    pub size: usize,
}

impl AllocError {
    pub fn new(kind: AllocKind, size: usize) -> Self {
        Self { kind, size }
    }
}
