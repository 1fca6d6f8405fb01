use crate::list::{element, move_after, move_before, next_of, prev_of, Link, List};
use std::ptr::NonNull;

mod sort;

impl<T> List<T> {
    /// Walk inwards from both ends until the two positions meet or sit side
    /// by side. Returns the back one, which is the node at index ⌊n/2⌋, and
    /// the number of steps taken; the back part `middle..=last` holds
    /// `steps + 1` nodes.
    fn middle(&self) -> Option<(NonNull<Link>, usize)> {
        if self.is_empty() {
            return None;
        }
        let (mut front, mut back) = (self.first(), self.last());
        let mut steps = 0;
        // SAFETY: both positions stay on element nodes and stop before they
        // cross, so neither reaches the sentinel.
        unsafe {
            while front != back && prev_of(back) != front {
                front = next_of(front);
                back = prev_of(back);
                steps += 1;
            }
        }
        Some((back, steps))
    }

    /// Cut the list at its middle, keeping the front half and returning
    /// `middle..=last` as a new list.
    pub(crate) fn split_at_middle(&mut self) -> Option<List<T>> {
        let (middle, steps) = self.middle()?;
        let last = self.last();
        // SAFETY: `middle..=last` is a range of this list of `steps + 1` nodes.
        let segment = unsafe { self.cut(middle, last, steps + 1) };
        Some(List::from_segment(segment))
    }

    /// Remove and return the element at index ⌊n/2⌋, without knowing `n`.
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3, 4, 7, 1, 2, 6]);
    /// assert_eq!(list.remove_middle(), Some(7));
    /// assert_eq!(List::<i32>::new().remove_middle(), None);
    /// ```
    pub fn remove_middle(&mut self) -> Option<T> {
        let (middle, _) = self.middle()?;
        // SAFETY: `middle` is an element node of this list.
        Some(unsafe { self.detach(middle) })
    }

    /// Drop every run of two or more equal neighbours, the whole run
    /// included. On a sorted list this keeps the values that occur once.
    pub fn dedup_runs(&mut self)
    where
        T: PartialEq,
    {
        let end = self.sentinel();
        let mut node = self.first();
        // Whether `node` equals the node before it.
        let mut in_run = false;
        // SAFETY: `next` is read before `node` may be freed, and only element
        // nodes are compared.
        unsafe {
            while node != end {
                let next = next_of(node);
                let repeated = next != end && element::<T>(node) == element::<T>(next);
                if repeated || in_run {
                    drop(self.detach(node));
                }
                in_run = repeated;
                node = next;
            }
        }
    }

    /// Swap each pair of neighbours by moving the second node in front of
    /// the first. A trailing odd node stays.
    pub fn swap_pairs(&mut self) {
        let end = self.sentinel();
        let mut first = self.first();
        // SAFETY: `first` and `second` are checked against the sentinel.
        unsafe {
            while first != end {
                let second = next_of(first);
                if second == end {
                    break;
                }
                move_before(second, first);
                first = next_of(first);
            }
        }
    }

    /// Reverse in place by moving every node, in order, to the front.
    pub fn reverse(&mut self) {
        let end = self.sentinel();
        let mut node = self.first();
        // SAFETY: the successor is read before `node` is moved.
        unsafe {
            while node != end {
                let next = next_of(node);
                move_after(node, end);
                node = next;
            }
        }
    }

    /// Reverse each full group of `k` nodes, left to right. A shorter tail is
    /// left alone and `k <= 1` changes nothing.
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(1..=5);
    /// list.reverse_groups(2);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 1, 4, 3, 5]);
    /// ```
    pub fn reverse_groups(&mut self, k: usize) {
        if k <= 1 {
            return;
        }
        let groups = self.iter().count() / k;
        let mut anchor = self.sentinel();
        let mut node = self.first();
        // SAFETY: there are at least `groups * k` element nodes after the
        // sentinel, so `node` never wraps around.
        unsafe {
            for _ in 0..groups {
                // The group's first node ends up last, anchoring the next group.
                let group_front = node;
                for _ in 0..k {
                    let next = next_of(node);
                    move_after(node, anchor);
                    node = next;
                }
                anchor = group_front;
            }
        }
    }

    /// Keep only the elements no smaller than everything after them.
    pub fn retain_suffix_max(&mut self)
    where
        T: Ord,
    {
        self.retain_from_back(|prev, curr| prev < curr)
    }

    /// Keep only the elements no greater than everything after them.
    pub fn retain_suffix_min(&mut self)
    where
        T: Ord,
    {
        self.retain_from_back(|prev, curr| prev > curr)
    }

    /// From the back: while `drop_prev` holds for the left neighbour of
    /// `curr`, free that neighbour; otherwise step left.
    fn retain_from_back<F>(&mut self, mut drop_prev: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let end = self.sentinel();
        let mut curr = self.last();
        // SAFETY: `curr` and `prev` are compared to the sentinel before use.
        unsafe {
            while curr != end {
                let prev = prev_of(curr);
                if prev == end {
                    break;
                }
                if drop_prev(element(prev), element(curr)) {
                    drop(self.detach(prev));
                } else {
                    curr = prev;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    fn to_vec<T: Clone>(list: &List<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn remove_middle_by_length() {
        for n in 1..10 {
            let mut list = List::from_iter(0..n);
            assert_eq!(list.remove_middle(), Some(n / 2));
            let expected: Vec<i32> = (0..n).filter(|&x| x != n / 2).collect();
            assert_eq!(to_vec(&list), expected);
            #[cfg(feature = "length")]
            assert_eq!(list.len(), expected.len());
        }
    }

    #[test]
    fn split_at_middle_halves() {
        for n in 1..10usize {
            let mut list = List::from_iter(0..n);
            let right = list.split_at_middle().unwrap();
            assert_eq!(to_vec(&list), Vec::from_iter(0..n / 2));
            assert_eq!(to_vec(&right), Vec::from_iter(n / 2..n));
            #[cfg(feature = "length")]
            assert_eq!((list.len(), right.len()), (n / 2, n - n / 2));
        }
        assert!(List::<i32>::new().split_at_middle().is_none());
    }

    #[test]
    fn dedup_runs_removes_whole_runs() {
        fn check(input: &[i32], expected: &[i32]) {
            let mut list = List::from_iter(input.iter().copied());
            list.dedup_runs();
            assert_eq!(to_vec(&list), expected);
            #[cfg(feature = "length")]
            assert_eq!(list.len(), expected.len());
        }
        check(&[], &[]);
        check(&[1], &[1]);
        check(&[1, 1], &[]);
        check(&[1, 1, 1, 2, 3], &[2, 3]);
        check(&[1, 2, 2, 3, 3, 3], &[1]);
        check(&[1, 2, 3, 3, 4, 4, 5], &[1, 2, 5]);
        check(&[1, 1, 2, 2], &[]);
    }

    #[test]
    fn swap_pairs_by_length() {
        for (n, expected) in [
            (0, vec![]),
            (1, vec![1]),
            (4, vec![2, 1, 4, 3]),
            (5, vec![2, 1, 4, 3, 5]),
        ]
        .iter()
        {
            let mut list = List::from_iter(1..=*n);
            list.swap_pairs();
            assert_eq!(&to_vec(&list), expected);
            assert_eq!(list.back(), expected.last());
        }
    }

    #[test]
    fn reverse_twice_restores() {
        let mut list = List::from_iter(0..7);
        list.reverse();
        assert_eq!(to_vec(&list), Vec::from_iter((0..7).rev()));
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), Vec::from_iter(0..7));
        list.reverse();
        assert_eq!(to_vec(&list), Vec::from_iter(0..7));
    }

    #[test]
    fn reverse_groups_cases() {
        fn check(n: i32, k: usize, expected: &[i32]) {
            let mut list = List::from_iter(1..=n);
            list.reverse_groups(k);
            assert_eq!(to_vec(&list), expected);
            let mut backward: Vec<i32> = list.iter().rev().copied().collect();
            backward.reverse();
            assert_eq!(backward, expected);
        }
        check(5, 2, &[2, 1, 4, 3, 5]);
        check(5, 3, &[3, 2, 1, 4, 5]);
        check(6, 3, &[3, 2, 1, 6, 5, 4]);
        check(5, 5, &[5, 4, 3, 2, 1]);
        check(5, 6, &[1, 2, 3, 4, 5]);
        check(5, 1, &[1, 2, 3, 4, 5]);
        check(5, 0, &[1, 2, 3, 4, 5]);
        check(0, 2, &[]);
    }

    #[test]
    fn retain_suffix_extremes() {
        let mut list = List::from_iter([5, 2, 13, 3, 8]);
        list.retain_suffix_max();
        assert_eq!(to_vec(&list), [13, 8]);

        let mut list = List::from_iter([5, 2, 13, 3, 8]);
        list.retain_suffix_min();
        assert_eq!(to_vec(&list), [2, 3, 8]);

        let mut list = List::from_iter([1, 1, 1]);
        list.retain_suffix_max();
        assert_eq!(to_vec(&list), [1, 1, 1]);

        let mut list = List::from_iter([1, 2, 3]);
        list.retain_suffix_max();
        assert_eq!(to_vec(&list), [3]);
        #[cfg(feature = "length")]
        assert_eq!(list.len(), 1);

        let mut list = List::<i32>::new();
        list.retain_suffix_min();
        assert!(list.is_empty());
    }
}
