use crate::list::{element, element_mut, next_of, prev_of, Link, List};
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// Borrowing iterator over a [`List`], front to back or back to front.
///
/// The unvisited nodes are `head..tail`, `tail` exclusive; both ends walk
/// toward each other and stop when they meet.
pub struct Iter<'a, T> {
    head: NonNull<Link>,
    tail: NonNull<Link>,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            head: list.first(),
            tail: list.sentinel(),
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.head == self.tail {
            return None;
        }
        // SAFETY: `head` is before `tail`, so it is an element node of the
        // borrowed list.
        unsafe {
            let current = self.head;
            self.head = next_of(current);
            Some(element(current))
        }
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.head == self.tail {
            return None;
        }
        // SAFETY: the node before `tail` is at or after `head`.
        unsafe {
            self.tail = prev_of(self.tail);
            Some(element(self.tail))
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over a [`List`] handing out mutable elements, front to back.
/// The links themselves cannot be changed through it.
pub struct IterMut<'a, T> {
    head: NonNull<Link>,
    end: NonNull<Link>,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self {
            head: list.first(),
            end: list.sentinel(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.head == self.end {
            return None;
        }
        // SAFETY: each element node is visited once, so the returned
        // references never alias.
        unsafe {
            let current = self.head;
            self.head = next_of(current);
            Some(element_mut(current))
        }
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        for element in iter {
            list.push_back(element);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn iter_meets_in_the_middle() {
        for len in 0..6 {
            for split in 0..=len {
                let list = List::from_iter(0..len);
                let mut iter = list.iter();
                let front: Vec<i32> = iter.by_ref().take(split as usize).copied().collect();
                let back: Vec<i32> = iter.rev().copied().collect();
                assert_eq!(front, Vec::from_iter(0..split));
                assert_eq!(back, Vec::from_iter((split..len).rev()));
            }
        }
    }

    #[test]
    fn iter_mut_edits_in_place() {
        let mut list = List::from_iter(vec![String::from("a"), String::from("b")]);
        for value in list.iter_mut() {
            value.push('!');
        }
        let values: Vec<&str> = list.iter().map(String::as_str).collect();
        assert_eq!(values, ["a!", "b!"]);
        let mut iter = list.iter();
        assert_eq!(iter.next_back().map(String::as_str), Some("b!"));
        assert_eq!(iter.clone().count(), 1);
        assert_eq!(iter.next().map(String::as_str), Some("a!"));
        assert_eq!(iter.next(), None);
    }
}
