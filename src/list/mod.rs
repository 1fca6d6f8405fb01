//! The link layer beneath [`Queue`](crate::Queue): an owned, circular,
//! doubly-linked list closed by a sentinel.

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

mod algorithms;
pub mod iterator;

pub use self::iterator::{Iter, IterMut};

/// The `next`/`prev` pair. The sentinel is a bare `Link`; an element node
/// starts with one, so a pointer to its `Link` is a pointer to the node.
///
/// Links are read and written through raw places only. The sentinel must
/// never be turned into a reference to a `Node<T>`: it is smaller than one.
pub(crate) struct Link {
    next: NonNull<Link>,
    prev: NonNull<Link>,
}

#[repr(C)]
struct Node<T> {
    link: Link,
    element: T,
}

/// A list of owned elements in a ring of heap nodes.
///
/// Every node is one allocation holding its links and its element, so
/// moving an element around, or into another list, only rewires pointers.
/// With the `length` feature (on by default) the list also counts its
/// elements and [`List::len`] is O(1).
pub struct List<T> {
    sentinel: NonNull<Link>,
    #[cfg(feature = "length")]
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// Nodes `front..=back` cut out of a list. Their outer links are stale
/// until the segment is spliced somewhere.
pub(crate) struct Segment {
    front: NonNull<Link>,
    back: NonNull<Link>,
    #[cfg(feature = "length")]
    len: usize,
}

pub(crate) unsafe fn next_of(link: NonNull<Link>) -> NonNull<Link> {
    (*link.as_ptr()).next
}

pub(crate) unsafe fn prev_of(link: NonNull<Link>) -> NonNull<Link> {
    (*link.as_ptr()).prev
}

unsafe fn join(prev: NonNull<Link>, next: NonNull<Link>) {
    (*prev.as_ptr()).next = next;
    (*next.as_ptr()).prev = prev;
}

unsafe fn unlink(link: NonNull<Link>) {
    join(prev_of(link), next_of(link));
}

unsafe fn link_before(link: NonNull<Link>, anchor: NonNull<Link>) {
    join(prev_of(anchor), link);
    join(link, anchor);
}

/// Relink `link` right after `anchor`, in the same ring.
pub(crate) unsafe fn move_after(link: NonNull<Link>, anchor: NonNull<Link>) {
    debug_assert_ne!(link, anchor);
    unlink(link);
    link_before(link, next_of(anchor));
}

/// Relink `link` right before `anchor`, in the same ring.
pub(crate) unsafe fn move_before(link: NonNull<Link>, anchor: NonNull<Link>) {
    debug_assert_ne!(link, anchor);
    unlink(link);
    link_before(link, anchor);
}

/// The element of an element node. `link` must not be a sentinel.
pub(crate) unsafe fn element<'a, T>(link: NonNull<Link>) -> &'a T {
    &(*link.cast::<Node<T>>().as_ptr()).element
}

pub(crate) unsafe fn element_mut<'a, T>(link: NonNull<Link>) -> &'a mut T {
    &mut (*link.cast::<Node<T>>().as_ptr()).element
}

// Raw link surgery, shared by the algorithms.
impl<T> List<T> {
    pub(crate) fn sentinel(&self) -> NonNull<Link> {
        self.sentinel
    }

    pub(crate) fn first(&self) -> NonNull<Link> {
        // SAFETY: the sentinel is live for as long as the list.
        unsafe { next_of(self.sentinel) }
    }

    pub(crate) fn last(&self) -> NonNull<Link> {
        // SAFETY: as in `first`.
        unsafe { prev_of(self.sentinel) }
    }

    /// Box `element` into a new node linked in front of `anchor`.
    ///
    /// `anchor` must be the sentinel or a node of this list.
    unsafe fn attach_before(&mut self, element: T, anchor: NonNull<Link>) {
        let dangling = NonNull::dangling();
        let node = Box::new(Node {
            link: Link {
                next: dangling,
                prev: dangling,
            },
            element,
        });
        link_before(NonNull::from(Box::leak(node)).cast(), anchor);
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
    }

    /// Unlink an element node of this list, free it and return its element.
    pub(crate) unsafe fn detach(&mut self, link: NonNull<Link>) -> T {
        unlink(link);
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        let node = Box::from_raw(link.cast::<Node<T>>().as_ptr());
        node.element
    }

    /// Move the element node `link` of `other` in front of `anchor` in this
    /// list, without reallocating it.
    pub(crate) unsafe fn adopt_before(
        &mut self,
        other: &mut List<T>,
        link: NonNull<Link>,
        anchor: NonNull<Link>,
    ) {
        unlink(link);
        link_before(link, anchor);
        #[cfg(feature = "length")]
        {
            other.len -= 1;
            self.len += 1;
        }
        #[cfg(not(feature = "length"))]
        let _ = other;
    }

    /// Cut `front..=back` out of this list. `count` is the number of nodes in
    /// the range and is only kept with the `length` feature.
    pub(crate) unsafe fn cut(
        &mut self,
        front: NonNull<Link>,
        back: NonNull<Link>,
        count: usize,
    ) -> Segment {
        join(prev_of(front), next_of(back));
        #[cfg(feature = "length")]
        {
            self.len -= count;
        }
        #[cfg(not(feature = "length"))]
        let _ = count;
        Segment {
            front,
            back,
            #[cfg(feature = "length")]
            len: count,
        }
    }

    /// Link `segment` in front of `anchor`, the sentinel or a node of this list.
    pub(crate) unsafe fn splice_before(&mut self, segment: Segment, anchor: NonNull<Link>) {
        join(prev_of(anchor), segment.front);
        join(segment.back, anchor);
        #[cfg(feature = "length")]
        {
            self.len += segment.len;
        }
    }

    pub(crate) fn from_segment(segment: Segment) -> Self {
        let mut list = List::new();
        let sentinel = list.sentinel;
        // SAFETY: the new list is empty and the segment belongs to no list.
        unsafe { list.splice_before(segment, sentinel) };
        list
    }
}

impl<T> List<T> {
    pub fn new() -> Self {
        let sentinel = NonNull::from(Box::leak(Box::new(Link {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
        })));
        // SAFETY: freshly leaked, so nothing else points at it yet.
        unsafe { join(sentinel, sentinel) };
        Self {
            sentinel,
            #[cfg(feature = "length")]
            len: 0,
            _marker: PhantomData,
        }
    }

    /// `true` if the sentinel links back to itself.
    pub fn is_empty(&self) -> bool {
        self.first() == self.sentinel
    }

    /// The number of elements, kept with the `length` feature.
    #[cfg(feature = "length")]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: a non-empty list has an element node first.
        Some(unsafe { element(self.first()) })
    }

    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: a non-empty list has an element node last.
        Some(unsafe { element(self.last()) })
    }

    pub fn push_front(&mut self, element: T) {
        let first = self.first();
        // SAFETY: `first` is a node of this list or its sentinel.
        unsafe { self.attach_before(element, first) }
    }

    pub fn push_back(&mut self, element: T) {
        let sentinel = self.sentinel;
        // SAFETY: linking before the sentinel appends.
        unsafe { self.attach_before(element, sentinel) }
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let first = self.first();
        // SAFETY: `first` is an element node of this list.
        Some(unsafe { self.detach(first) })
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let last = self.last();
        // SAFETY: `last` is an element node of this list.
        Some(unsafe { self.detach(last) })
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Move every element of `other` to the back of this list in O(1),
    /// leaving `other` empty.
    pub fn append(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }
        #[cfg(feature = "length")]
        let count = other.len;
        #[cfg(not(feature = "length"))]
        let count = 0;
        let (front, back, sentinel) = (other.first(), other.last(), self.sentinel);
        // SAFETY: `front..=back` is the whole of `other`.
        unsafe {
            let segment = other.cut(front, back, count);
            self.splice_before(segment, sentinel);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
        // SAFETY: leaked from a box in `new`, and no node refers to it anymore.
        unsafe { drop(Box::from_raw(self.sentinel.as_ptr())) };
    }
}

// The list owns its elements like a `Box<T>` would.
unsafe impl<T: Send> Send for List<T> {}
unsafe impl<T: Sync> Sync for List<T> {}

#[cfg(test)]
mod tests {
    use super::{next_of, prev_of, List};
    use std::cell::RefCell;
    use std::iter::FromIterator;

    fn assert_ring<T>(list: &List<T>) {
        let sentinel = list.sentinel();
        let mut link = sentinel;
        unsafe {
            loop {
                let next = next_of(link);
                assert_eq!(prev_of(next), link);
                link = next;
                if link == sentinel {
                    break;
                }
            }
        }
    }

    #[test]
    fn push_and_pop_at_both_ends() {
        let mut list = List::new();
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.front(), None);

        list.push_back(String::from("b"));
        list.push_front(String::from("a"));
        list.push_back(String::from("c"));
        assert_ring(&list);
        assert_eq!(list.front().map(String::as_str), Some("a"));
        assert_eq!(list.back().map(String::as_str), Some("c"));

        assert_eq!(list.pop_back().as_deref(), Some("c"));
        assert_eq!(list.pop_front().as_deref(), Some("a"));
        assert_eq!(list.pop_front().as_deref(), Some("b"));
        assert!(list.is_empty());
        assert_ring(&list);
    }

    #[test]
    fn large_elements_link_through_sentinel() {
        // Elements much wider than a bare link; the sentinel stays a `Link`.
        let mut list = List::new();
        for i in 0..4u64 {
            list.push_back([i; 32]);
            list.push_front([i + 10; 32]);
        }
        assert_ring(&list);
        assert_eq!(list.front(), Some(&[13; 32]));
        assert_eq!(list.back(), Some(&[3; 32]));
        while list.pop_back().is_some() {}
        assert_ring(&list);
    }

    #[test]
    fn drop_frees_every_element() {
        struct Tracked<'a>(u32, &'a RefCell<Vec<u32>>);
        impl Drop for Tracked<'_> {
            fn drop(&mut self) {
                self.1.borrow_mut().push(self.0);
            }
        }
        let dropped = RefCell::new(Vec::new());
        let mut list = List::new();
        for i in 1..=3 {
            list.push_back(Tracked(i, &dropped));
        }
        drop(list);
        assert_eq!(*dropped.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn append_moves_everything() {
        fn check(left: &[i32], right: &[i32]) {
            let mut list = List::from_iter(left.iter().copied());
            let mut other = List::from_iter(right.iter().copied());
            list.append(&mut other);
            assert_ring(&list);
            assert!(other.is_empty());
            let expected: Vec<i32> = left.iter().chain(right).copied().collect();
            assert_eq!(list.iter().copied().collect::<Vec<_>>(), expected);
            #[cfg(feature = "length")]
            assert_eq!((list.len(), other.len()), (expected.len(), 0));
            other.push_back(7);
            assert_eq!(other.pop_front(), Some(7));
        }
        check(&[0, 1, 2], &[3, 4]);
        check(&[0, 1, 2], &[]);
        check(&[], &[3, 4]);
        check(&[], &[]);
    }
}
