//! A queue of owned strings on top of [`List`].
//!
//! Values are compared byte-wise (lexicographically), which is the order
//! `sort`, `merge` and the filters assume.

use crate::error::AllocError;
use crate::list::List;
use std::fmt;
use tracing::{debug, trace};

pub mod alloc;

pub use self::alloc::{Budget, ElementAllocator, Global};

/// A single queue entry owning its string value.
///
/// An `Element` is created by inserting into a [`Queue`] and handed back by
/// value on removal, after which the caller owns it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element {
    value: String,
}

impl Element {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }

    /// Copy the value into `buf` as a zero-terminated byte string, truncated
    /// to `buf.len() - 1` bytes. Returns the number of value bytes copied.
    ///
    /// Nothing is written to an empty buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_tail("gerbil").unwrap();
    /// let element = queue.remove_head(None).unwrap();
    ///
    /// let mut buf = [0xff; 4];
    /// assert_eq!(element.copy_to(&mut buf), 3);
    /// assert_eq!(&buf, b"ger\0");
    /// ```
    pub fn copy_to(&self, buf: &mut [u8]) -> usize {
        if buf.is_empty() {
            return 0;
        }
        let len = self.value.len().min(buf.len() - 1);
        buf[..len].copy_from_slice(&self.value.as_bytes()[..len]);
        buf[len] = 0;
        len
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// A double-ended queue of strings.
///
/// Every value is owned by the queue until it is removed. Reordering
/// operations (`sort`, `reverse`, `merge`, ...) only relink nodes; no value is
/// copied or reallocated.
///
/// # Examples
///
/// ```
/// use cyclic_queue::Queue;
///
/// let mut queue = Queue::new();
/// queue.insert_tail("b").unwrap();
/// queue.insert_head("c").unwrap();
/// queue.insert_tail("a").unwrap();
/// queue.sort();
/// assert_eq!(queue.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
/// ```
pub struct Queue<A: ElementAllocator = Global> {
    list: List<Element>,
    alloc: A,
}

impl Queue<Global> {
    /// Create an empty queue using the process allocator.
    pub fn new() -> Self {
        Self::with_allocator(Global)
    }
}

impl Default for Queue<Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ElementAllocator> Queue<A> {
    /// Create an empty queue drawing its storage from `alloc`.
    pub fn with_allocator(alloc: A) -> Self {
        Self {
            list: List::new(),
            alloc,
        }
    }

    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    fn new_element(&mut self, value: &str) -> Result<Element, AllocError> {
        if let Err(err) = self.alloc.allocate_element() {
            debug!(%err, "insert failed, no element record");
            return Err(err);
        }
        match self.alloc.allocate_value(value) {
            Ok(value) => Ok(Element { value }),
            Err(err) => {
                self.alloc.release_element();
                debug!(%err, "insert failed, element record released");
                Err(err)
            }
        }
    }

    /// Insert a copy of `value` at the head of the queue.
    ///
    /// On an allocation failure the queue is left untouched.
    pub fn insert_head(&mut self, value: &str) -> Result<(), AllocError> {
        let element = self.new_element(value)?;
        self.list.push_front(element);
        Ok(())
    }

    /// Insert a copy of `value` at the tail of the queue.
    ///
    /// On an allocation failure the queue is left untouched.
    pub fn insert_tail(&mut self, value: &str) -> Result<(), AllocError> {
        let element = self.new_element(value)?;
        self.list.push_back(element);
        Ok(())
    }

    /// Remove the head element and return it, or `None` if the queue is
    /// empty. If `buf` is given, the value is also copied into it, see
    /// [`Element::copy_to`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_tail("dolphin").unwrap();
    ///
    /// let mut buf = [0u8; 16];
    /// let element = queue.remove_head(Some(&mut buf)).unwrap();
    /// assert_eq!(element.value(), "dolphin");
    /// assert_eq!(&buf[..8], b"dolphin\0");
    /// assert!(queue.remove_head(None).is_none());
    /// ```
    pub fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Option<Element> {
        let element = self.list.pop_front()?;
        if let Some(buf) = buf {
            element.copy_to(buf);
        }
        Some(element)
    }

    /// Remove the tail element and return it, or `None` if the queue is
    /// empty. If `buf` is given, the value is also copied into it.
    pub fn remove_tail(&mut self, buf: Option<&mut [u8]>) -> Option<Element> {
        let element = self.list.pop_back()?;
        if let Some(buf) = buf {
            element.copy_to(buf);
        }
        Some(element)
    }

    /// Number of elements, counted by walking the queue.
    pub fn size(&self) -> usize {
        self.list.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn front(&self) -> Option<&str> {
        self.list.front().map(Element::value)
    }

    pub fn back(&self) -> Option<&str> {
        self.list.back().map(Element::value)
    }

    /// Iterate over the values from head to tail.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.list.iter().map(Element::value)
    }

    /// Delete the middle element, the one at index ⌊n/2⌋ (0-based) of a
    /// queue of size n. Returns `false` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// for value in ["a", "b", "c", "d"].iter() {
    ///     queue.insert_tail(value).unwrap();
    /// }
    /// assert!(queue.delete_mid());
    /// assert_eq!(queue.iter().collect::<Vec<_>>(), ["a", "b", "d"]);
    /// ```
    pub fn delete_mid(&mut self) -> bool {
        trace!("deleting middle element");
        self.list.remove_middle().is_some()
    }

    /// Delete every value that occurs more than once, the whole run of equal
    /// values included. The queue must be sorted in ascending order.
    /// Returns `false` if the queue is empty.
    pub fn delete_duplicate_runs(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        trace!("deleting duplicate runs");
        self.list.dedup_runs();
        true
    }

    /// Swap every two adjacent elements. A trailing odd element stays.
    pub fn swap_pairs(&mut self) {
        trace!("swapping pairs");
        self.list.swap_pairs();
    }

    /// Reverse the queue in place.
    pub fn reverse(&mut self) {
        trace!("reversing queue");
        self.list.reverse();
    }

    /// Reverse the queue in groups of `k`. A remainder shorter than `k` keeps
    /// its order, and `k <= 1` leaves the queue unchanged.
    pub fn reverse_k(&mut self, k: usize) {
        trace!(k, "reversing queue in groups");
        self.list.reverse_groups(k);
    }

    /// Sort the queue in ascending order. Equal values keep their relative
    /// order.
    pub fn sort(&mut self) {
        trace!("sorting queue");
        self.list.sort();
    }

    /// Merge the ascending queue `other` into this ascending queue, leaving
    /// `other` empty. On equal values, the elements of `self` come first.
    pub fn merge<B: ElementAllocator>(&mut self, other: &mut Queue<B>) {
        trace!("merging queues");
        self.list.merge(&mut other.list);
    }

    /// Keep only the elements that are not less than any element after them,
    /// and return the new size.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// for value in ["5", "2", "9", "3", "8"].iter() {
    ///     queue.insert_tail(value).unwrap();
    /// }
    /// assert_eq!(queue.filter_non_increasing(), 2);
    /// assert_eq!(queue.iter().collect::<Vec<_>>(), ["9", "8"]);
    /// ```
    pub fn filter_non_increasing(&mut self) -> usize {
        trace!("filtering to non-increasing");
        self.list.retain_suffix_max();
        self.size()
    }

    /// Keep only the elements that are not greater than any element after
    /// them, and return the new size.
    pub fn filter_non_decreasing(&mut self) -> usize {
        trace!("filtering to non-decreasing");
        self.list.retain_suffix_min();
        self.size()
    }
}

impl<A: ElementAllocator> fmt::Debug for Queue<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
