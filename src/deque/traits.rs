//! Standard trait implementations for [`BlockDeque`].

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::{Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use super::{BlockDeque, IntoIter, Iter, IterMut};

impl<T, const W: usize>
Default for BlockDeque<T, W> {
    fn default() -> Self { Self::new() }
}

impl<T: Clone, const W: usize>
Clone for BlockDeque<T, W> {
    fn clone(&self) -> Self {
        let mut deque = Self::with_capacity(self.len);
        deque.extend(self.iter().cloned());
        deque
    }

    /// Reuses the blocks of `self` when they can hold `source` at the back; otherwise the
    /// copy is built in fresh storage first and then replaces `self`.
    /// Common elements are assigned in place, then the tail is truncated or appended.
    fn clone_from(&mut self, source: &Self) {
        if source.len > self.back_capacity() {
            *self = source.clone();
            return;
        }
        let common = self.len.min(source.len);
        for (dst, src) in self.iter_mut().zip(source.iter()) {
            dst.clone_from(src);
        }
        if source.len < self.len {
            self.truncate(source.len);
        } else {
            self.extend(source.iter().skip(common).cloned());
        }
    }
}

impl<T, const W: usize>
Index<usize> for BlockDeque<T, W> {
    type Output = T;

    /// Panics if `index >= len`.
    fn index(&self, index: usize) -> &T {
        let length = self.len;
        match self.get(index) {
            Some(value) => value,
            None => panic!("index out of bounds: the len is {length} but the index is {index}"),
        }
    }
}

impl<T, const W: usize>
IndexMut<usize> for BlockDeque<T, W> {
    /// Panics if `index >= len`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        let length = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("index out of bounds: the len is {length} but the index is {index}"),
        }
    }
}

////////////////////////////////////////////////////////////////////
// comparison

impl<T: PartialEq, const W: usize>
PartialEq for BlockDeque<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const W: usize>
Eq for BlockDeque<T, W> {}

impl<T: PartialEq, const W: usize>
PartialEq<[T]> for BlockDeque<T, W> {
    fn eq(&self, other: &[T]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq, const W: usize>
PartialEq<&[T]> for BlockDeque<T, W> {
    fn eq(&self, other: &&[T]) -> bool { *self == **other }
}

impl<T: PartialEq, const W: usize, const N: usize>
PartialEq<[T; N]> for BlockDeque<T, W> {
    fn eq(&self, other: &[T; N]) -> bool { *self == other[..] }
}

impl<T: PartialEq, const W: usize>
PartialEq<Vec<T>> for BlockDeque<T, W> {
    fn eq(&self, other: &Vec<T>) -> bool { *self == other[..] }
}

/// Lexicographic; a proper prefix orders first.
impl<T: PartialOrd, const W: usize>
PartialOrd for BlockDeque<T, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, const W: usize>
Ord for BlockDeque<T, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash, const W: usize>
Hash for BlockDeque<T, W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for elem in self {
            elem.hash(state);
        }
    }
}

impl<T: Debug, const W: usize>
Debug for BlockDeque<T, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

////////////////////////////////////////////////////////////////////
// conversion

impl<T, const W: usize>
Extend<T> for BlockDeque<T, W> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for elem in iter {
            self.push_back(elem);
        }
    }
}

impl<'a, T: Copy + 'a, const W: usize>
Extend<&'a T> for BlockDeque<T, W> {
    fn extend<I: IntoIterator<Item=&'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const W: usize>
FromIterator<T> for BlockDeque<T, W> {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T, const W: usize, const N: usize>
From<[T; N]> for BlockDeque<T, W> {
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

impl<T, const W: usize>
From<Vec<T>> for BlockDeque<T, W> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T, const W: usize>
IntoIterator for BlockDeque<T, W> {
    type Item = T;
    type IntoIter = IntoIter<T, W>;
    fn into_iter(self) -> IntoIter<T, W> { IntoIter::new(self) }
}

impl<'a, T, const W: usize>
IntoIterator for &'a BlockDeque<T, W> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, W>;
    fn into_iter(self) -> Iter<'a, T, W> { self.iter() }
}

impl<'a, T, const W: usize>
IntoIterator for &'a mut BlockDeque<T, W> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, W>;
    fn into_iter(self) -> IterMut<'a, T, W> { self.iter_mut() }
}
