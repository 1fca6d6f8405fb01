use crate::list::{element, next_of, List};

impl<T> List<T> {
    /// Merge the sorted `other` into this sorted list, leaving `other` empty.
    ///
    /// A node of `other` only overtakes a node of `self` when strictly
    /// smaller, so equal elements of `self` stay first. Nodes move between
    /// the lists as they are, nothing is copied.
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut left = List::from_iter([1, 4, 5]);
    /// let mut right = List::from_iter([2, 3, 6]);
    /// left.merge(&mut right);
    /// assert_eq!(left.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6]);
    /// assert!(right.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self)
    where
        T: Ord,
    {
        self.merge_by(other, &mut |a: &T, b: &T| a < b)
    }

    fn merge_by<F>(&mut self, other: &mut Self, less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let (end, other_end) = (self.sentinel(), other.sentinel());
        let (mut left, mut right) = (self.first(), other.first());
        // SAFETY: `left` and `right` are element nodes of their own list
        // whenever they are read.
        unsafe {
            while left != end && right != other_end {
                if less(element(right), element(left)) {
                    let next = next_of(right);
                    self.adopt_before(other, right, left);
                    right = next;
                } else {
                    left = next_of(left);
                }
            }
        }
        // Whatever is left in `other` sorts after all of `self`.
        self.append(other);
    }

    /// Stable merge sort: cut at the middle, sort both halves, merge.
    /// Only links change; O(*n* log *n*) time and O(log *n*) stack.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        merge_sort(self, &mut |a: &T, b: &T| a < b);
    }

    /// Like [`List::sort`], ordering by the key `f` extracts.
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        merge_sort(self, &mut |a: &T, b: &T| f(a) < f(b));
    }
}

fn merge_sort<T, F>(list: &mut List<T>, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if list.first() == list.last() {
        return;
    }
    let mut right = match list.split_at_middle() {
        Some(right) => right,
        None => return,
    };
    merge_sort(list, less);
    merge_sort(&mut right, less);
    list.merge_by(&mut right, less);
}
