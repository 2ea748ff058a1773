//! Front-to-back iterators over a [`BlockDeque`].
//!
//! The borrowing iterators walk the block index directly: a slice iterator over the slots of
//! the current front block, one over the slots of the last live block, and one over the full
//! blocks in between. Each step is a slice step, never an index computation.

use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;
use core::slice;

use crate::block::Block;

use super::BlockDeque;

////////////////////////////////////////////////////////////////////
// Iter

/// Iterator over references to the elements of a [`BlockDeque`], front to back.
/// Created by [`BlockDeque::iter`].
pub struct Iter<'a, T, const W: usize> {
    front: slice::Iter<'a, Option<T>>,
    blocks: slice::Iter<'a, Block<T, W>>,
    back: slice::Iter<'a, Option<T>>,
    remaining: usize,
}

impl<'a, T, const W: usize>
Iter<'a, T, W> {
    pub(super) fn new(deque: &'a BlockDeque<T, W>) -> Self {
        if deque.len == 0 {
            return Self {
                front: Default::default(),
                blocks: Default::default(),
                back: Default::default(),
                remaining: 0,
            };
        }
        let first = deque.head;
        let last = deque.head.forward(deque.len - 1);
        let live = &deque.map.blocks()[first.block()..=last.block()];
        match live.split_first() {
            Some((only, [])) => Self {
                front: only.slots()[first.offset()..=last.offset()].iter(),
                blocks: Default::default(),
                back: Default::default(),
                remaining: deque.len,
            },
            Some((head, rest)) => {
                let (tail, middle) = rest.split_last().unwrap_or_else(|| unreachable!());
                Self {
                    front: head.slots()[first.offset()..].iter(),
                    blocks: middle.iter(),
                    back: tail.slots()[..=last.offset()].iter(),
                    remaining: deque.len,
                }
            }
            None => unreachable!("a non-empty deque spans at least one block"),
        }
    }
}

impl<'a, T, const W: usize>
Iterator for Iter<'a, T, W> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(slot) = self.front.next() {
                self.remaining -= 1;
                return slot.as_ref();
            }
            match self.blocks.next() {
                Some(block) => self.front = block.slots().iter(),
                None => break,
            }
        }
        let slot = self.back.next()?;
        self.remaining -= 1;
        slot.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, const W: usize>
DoubleEndedIterator for Iter<'a, T, W> {
    fn next_back(&mut self) -> Option<&'a T> {
        loop {
            if let Some(slot) = self.back.next_back() {
                self.remaining -= 1;
                return slot.as_ref();
            }
            match self.blocks.next_back() {
                Some(block) => self.back = block.slots().iter(),
                None => break,
            }
        }
        let slot = self.front.next_back()?;
        self.remaining -= 1;
        slot.as_ref()
    }
}

impl<T, const W: usize>
ExactSizeIterator for Iter<'_, T, W> {}

impl<T, const W: usize>
FusedIterator for Iter<'_, T, W> {}

// Derived `Clone` would require `T: Clone`.
impl<T, const W: usize>
Clone for Iter<'_, T, W> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            blocks: self.blocks.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T: Debug, const W: usize>
Debug for Iter<'_, T, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<alloc::vec::Vec<_>>()).finish()
    }
}

////////////////////////////////////////////////////////////////////
// IterMut

/// Iterator over mutable references to the elements of a [`BlockDeque`], front to back.
/// Created by [`BlockDeque::iter_mut`].
pub struct IterMut<'a, T, const W: usize> {
    front: slice::IterMut<'a, Option<T>>,
    blocks: slice::IterMut<'a, Block<T, W>>,
    back: slice::IterMut<'a, Option<T>>,
    remaining: usize,
}

impl<'a, T, const W: usize>
IterMut<'a, T, W> {
    pub(super) fn new(deque: &'a mut BlockDeque<T, W>) -> Self {
        if deque.len == 0 {
            return Self {
                front: Default::default(),
                blocks: Default::default(),
                back: Default::default(),
                remaining: 0,
            };
        }
        let len = deque.len;
        let first = deque.head;
        let last = deque.head.forward(len - 1);
        let live = &mut deque.map.blocks_mut()[first.block()..=last.block()];
        match live.split_first_mut() {
            Some((only, [])) => Self {
                front: only.slots_mut()[first.offset()..=last.offset()].iter_mut(),
                blocks: Default::default(),
                back: Default::default(),
                remaining: len,
            },
            Some((head, rest)) => {
                let (tail, middle) = rest.split_last_mut().unwrap_or_else(|| unreachable!());
                Self {
                    front: head.slots_mut()[first.offset()..].iter_mut(),
                    blocks: middle.iter_mut(),
                    back: tail.slots_mut()[..=last.offset()].iter_mut(),
                    remaining: len,
                }
            }
            None => unreachable!("a non-empty deque spans at least one block"),
        }
    }
}

impl<'a, T, const W: usize>
Iterator for IterMut<'a, T, W> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        loop {
            if let Some(slot) = self.front.next() {
                self.remaining -= 1;
                return slot.as_mut();
            }
            match self.blocks.next() {
                Some(block) => self.front = block.slots_mut().iter_mut(),
                None => break,
            }
        }
        let slot = self.back.next()?;
        self.remaining -= 1;
        slot.as_mut()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, const W: usize>
DoubleEndedIterator for IterMut<'a, T, W> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        loop {
            if let Some(slot) = self.back.next_back() {
                self.remaining -= 1;
                return slot.as_mut();
            }
            match self.blocks.next_back() {
                Some(block) => self.back = block.slots_mut().iter_mut(),
                None => break,
            }
        }
        let slot = self.front.next_back()?;
        self.remaining -= 1;
        slot.as_mut()
    }
}

impl<T, const W: usize>
ExactSizeIterator for IterMut<'_, T, W> {}

impl<T, const W: usize>
FusedIterator for IterMut<'_, T, W> {}

impl<T: Debug, const W: usize>
Debug for IterMut<'_, T, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IterMut").field("remaining", &self.remaining).finish()
    }
}

////////////////////////////////////////////////////////////////////
// IntoIter

/// Owning iterator over the elements of a [`BlockDeque`], front to back.
/// Created by `into_iter` on the deque itself.
pub struct IntoIter<T, const W: usize> {
    deque: BlockDeque<T, W>,
}

impl<T, const W: usize>
IntoIter<T, W> {
    pub(super) fn new(deque: BlockDeque<T, W>) -> Self {
        Self { deque }
    }
}

impl<T, const W: usize>
Iterator for IntoIter<T, W> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.deque.pop_front() }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T, const W: usize>
DoubleEndedIterator for IntoIter<T, W> {
    fn next_back(&mut self) -> Option<T> { self.deque.pop_back() }
}

impl<T, const W: usize>
ExactSizeIterator for IntoIter<T, W> {}

impl<T, const W: usize>
FusedIterator for IntoIter<T, W> {}

impl<T: Debug, const W: usize>
Debug for IntoIter<T, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.deque).finish()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    type D4 = BlockDeque<i32, 4>;

    /// A deque whose head sits mid-block, so the first and last blocks are both partial.
    fn offset_deque(front: i32, back: i32) -> D4 {
        let mut v = D4::new();
        for i in 0..back {
            v.push_back(i);
        }
        for i in 1..=front {
            v.push_front(-i);
        }
        v
    }

    #[test]
    fn iter_empty() {
        let v = D4::new();
        assert_eq!(v.iter().next(), None);
        assert_eq!(v.iter().next_back(), None);
        assert_eq!(v.iter().len(), 0);
    }

    #[test]
    fn iter_within_one_block() {
        let v = offset_deque(0, 3);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), [0, 1, 2]);
        assert_eq!(v.iter().rev().copied().collect::<Vec<_>>(), [2, 1, 0]);
        let v = offset_deque(1, 2);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), [-1, 0, 1]);
    }

    #[test]
    fn iter_across_blocks_both_directions() {
        let v = offset_deque(6, 11);
        let expected: Vec<i32> = (-6..11).collect();
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), expected);
        let reversed: Vec<i32> = expected.iter().rev().copied().collect();
        assert_eq!(v.iter().rev().copied().collect::<Vec<_>>(), reversed);
    }

    #[test]
    fn iter_meets_in_the_middle() {
        let v = offset_deque(6, 11);
        let mut it = v.iter();
        let mut seen = Vec::new();
        loop {
            match it.next() {
                Some(&x) => seen.push(x),
                None => break,
            }
            assert_eq!(it.len() + seen.len(), 17);
            match it.next_back() {
                Some(&x) => seen.push(x),
                None => break,
            }
        }
        seen.sort();
        assert_eq!(seen, (-6..11).collect::<Vec<_>>());
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn iter_clone_is_independent() {
        let v = offset_deque(2, 5);
        let mut it = v.iter();
        it.next();
        let copy = it.clone();
        assert_eq!(it.count(), 6);
        assert_eq!(copy.len(), 6);
    }

    #[test]
    fn iter_mut_updates_in_place() {
        let mut v = offset_deque(5, 9);
        for x in v.iter_mut() {
            *x *= 10;
        }
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), (-5..9).map(|x| x * 10).collect::<Vec<_>>());
        if let Some(x) = v.iter_mut().next_back() {
            *x = 0;
        }
        assert_eq!(v.back(), Some(&0));
    }

    #[test]
    fn into_iter_from_both_ends() {
        let v = offset_deque(3, 3);
        let mut it = v.into_iter();
        assert_eq!(it.len(), 6);
        assert_eq!(it.next(), Some(-3));
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.collect::<Vec<_>>(), [-2, -1, 0, 1]);
    }
}
