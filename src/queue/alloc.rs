use crate::error::{AllocError, AllocKind};
use crate::queue::Element;
use std::mem;

/// The allocator a [`Queue`](crate::Queue) draws its storage from.
///
/// Every insertion makes two requests: one for the element record, then one
/// for the owned copy of the value. If the second fails, the first is handed
/// back through [`release_element`](ElementAllocator::release_element) before
/// the error reaches the caller.
pub trait ElementAllocator {
    /// Reserve room for one element record.
    fn allocate_element(&mut self) -> Result<(), AllocError>;

    /// Give back a reservation made by `allocate_element` that was never
    /// linked into a queue. Only called right after a failed
    /// `allocate_value`, so a reservation is always outstanding.
    fn release_element(&mut self) {}

    /// Make an owned copy of `value`.
    fn allocate_value(&mut self, value: &str) -> Result<String, AllocError>;
}

/// The process allocator. Values use a fallible reservation, so a failed
/// copy is reported as an error.
///
/// Element records are boxed list nodes. `allocate_element` always succeeds
/// here, and if the `Box` allocation of the node itself fails the process
/// aborts like any other infallible Rust allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Global;

impl ElementAllocator for Global {
    fn allocate_element(&mut self) -> Result<(), AllocError> {
        Ok(())
    }

    fn allocate_value(&mut self, value: &str) -> Result<String, AllocError> {
        let mut copy = String::new();
        copy.try_reserve_exact(value.len())
            .map_err(|_| AllocError::new(AllocKind::Value, value.len()))?;
        copy.push_str(value);
        Ok(copy)
    }
}

/// An allocator that grants a fixed number of allocations and fails every
/// request after that. Released element records are refunded, but only
/// while one is reserved and not yet paired with a value.
///
/// It is meant for exercising the allocation-failure paths of a queue.
///
/// # Examples
///
/// ```
/// use cyclic_queue::{Budget, Queue};
///
/// // One element record plus one value.
/// let mut queue = Queue::with_allocator(Budget::new(2));
/// assert!(queue.insert_tail("a").is_ok());
/// assert!(queue.insert_tail("b").is_err());
/// assert_eq!(queue.size(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    remaining: usize,
    // Element records granted and still waiting for their value.
    reserved: usize,
}

impl Budget {
    pub fn new(allocations: usize) -> Self {
        Self {
            remaining: allocations,
            reserved: 0,
        }
    }

    /// Number of allocations still granted.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    fn take(&mut self, kind: AllocKind, size: usize) -> Result<(), AllocError> {
        if self.remaining == 0 {
            return Err(AllocError::new(kind, size));
        }
        self.remaining -= 1;
        Ok(())
    }
}

impl ElementAllocator for Budget {
    fn allocate_element(&mut self) -> Result<(), AllocError> {
        self.take(AllocKind::Element, mem::size_of::<Element>())?;
        self.reserved += 1;
        Ok(())
    }

    fn release_element(&mut self) {
        if self.reserved > 0 {
            self.reserved -= 1;
            self.remaining += 1;
        }
    }

    fn allocate_value(&mut self, value: &str) -> Result<String, AllocError> {
        self.take(AllocKind::Value, value.len())?;
        self.reserved = self.reserved.saturating_sub(1);
        Global.allocate_value(value)
    }
}
