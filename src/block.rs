//! Defines [`Block`]: one fixed-width unit of element storage.

use alloc::{boxed::Box, vec::Vec};
use core::{mem, ops::Range};

use crate::error::DequeError;

/// Storage for exactly `W` element slots.
///
/// A slot holds `None` until an element is constructed in it, and goes back to `None` when the
/// element is destroyed. A freshly allocated block is all `None`.
pub(crate) struct Block<T, const W: usize> {
    slots: Box<[Option<T>]>,
}

impl<T, const W: usize>
Block<T, W> {
    /// Allocates a block with every slot empty.
    pub(crate) fn try_new() -> Result<Self, DequeError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(W)
            .map_err(|_| DequeError::AllocationFailed { blocks: 1 })?;
        slots.resize_with(W, || None);
        Ok(Self { slots: slots.into_boxed_slice() })
    }

    pub(crate) fn slots(&self) -> &[Option<T>] { &self.slots }

    pub(crate) fn slots_mut(&mut self) -> &mut [Option<T>] { &mut self.slots }

    pub(crate) fn get(&self, offset: usize) -> Option<&T> {
        self.slots.get(offset)?.as_ref()
    }

    pub(crate) fn get_mut(&mut self, offset: usize) -> Option<&mut T> {
        self.slots.get_mut(offset)?.as_mut()
    }

    /// Constructs `value` in the empty slot at `offset`.
    pub(crate) fn construct(&mut self, offset: usize, value: T) {
        debug_assert!(self.slots[offset].is_none());
        self.slots[offset] = Some(value);
    }

    /// Destroys the element at `offset` (if any) and hands it back.
    pub(crate) fn take(&mut self, offset: usize) -> Option<T> {
        self.slots[offset].take()
    }

    /// Stores `value` at `offset` as-is; used to move a slot's content between positions.
    pub(crate) fn put(&mut self, offset: usize, value: Option<T>) {
        self.slots[offset] = value;
    }

    /// Constructs `f()` in every slot of `range`, front to back.
    ///
    /// If `f` panics, the elements this call already constructed are destroyed (back to front)
    /// before the panic propagates, leaving the whole range empty again.
    pub(crate) fn construct_range(&mut self, range: Range<usize>, mut f: impl FnMut() -> T) {
        let mut guard = ConstructGuard { slots: &mut self.slots[range], constructed: 0 };
        while guard.constructed < guard.slots.len() {
            let value = f();
            guard.slots[guard.constructed] = Some(value);
            guard.constructed += 1;
        }
        mem::forget(guard);
    }

    /// Destroys every element in `range`, back to front.
    pub(crate) fn destroy_range(&mut self, range: Range<usize>) {
        destroy_slots(&mut self.slots[range]);
    }
}

fn destroy_slots<T>(slots: &mut [Option<T>]) {
    for slot in slots.iter_mut().rev() {
        *slot = None;
    }
}

/// Rolls back a partially completed [`Block::construct_range`].
struct ConstructGuard<'a, T> {
    slots: &'a mut [Option<T>],
    constructed: usize,
}

impl<T> Drop for ConstructGuard<'_, T> {
    fn drop(&mut self) {
        destroy_slots(&mut self.slots[..self.constructed]);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::rc::Rc;

    use super::*;

    #[test]
    fn new_block_is_empty() {
        let block = Block::<u32, 20>::try_new().unwrap();
        assert_eq!(block.slots().len(), 20);
        assert!(block.slots().iter().all(Option::is_none));
    }

    #[test]
    fn construct_and_take() {
        let mut block = Block::<u32, 4>::try_new().unwrap();
        block.construct(2, 7);
        assert_eq!(block.get(2), Some(&7));
        assert_eq!(block.get(1), None);
        assert_eq!(block.get(4), None);
        *block.get_mut(2).unwrap() += 1;
        assert_eq!(block.take(2), Some(8));
        assert_eq!(block.take(2), None);
    }

    #[test]
    fn construct_and_destroy_ranges() {
        let mut block = Block::<u32, 8>::try_new().unwrap();
        let mut next = 0;
        block.construct_range(2..6, || { next += 1; next });
        assert_eq!(block.slots(), &[None, None, Some(1), Some(2), Some(3), Some(4), None, None]);
        block.destroy_range(3..5);
        assert_eq!(block.slots(), &[None, None, Some(1), None, None, Some(4), None, None]);
        let moved = block.take(5);
        block.put(0, moved);
        assert_eq!(block.get(0), Some(&4));
        assert_eq!(block.get(5), None);
    }

    #[test]
    fn destroy_range_releases_elements() {
        let shared = Rc::new(());
        let mut block = Block::<Rc<()>, 4>::try_new().unwrap();
        block.construct_range(0..4, || shared.clone());
        assert_eq!(Rc::strong_count(&shared), 5);
        block.destroy_range(1..4);
        assert_eq!(Rc::strong_count(&shared), 2);
        drop(block);
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn construct_range_rolls_back_on_panic() {
        let shared = Rc::new(());
        let mut block = Block::<Rc<()>, 6>::try_new().unwrap();
        let mut made = 0;
        let result = catch_unwind(AssertUnwindSafe(|| {
            block.construct_range(1..5, || {
                made += 1;
                if made == 3 {
                    panic!("element construction failed");
                }
                shared.clone()
            });
        }));
        assert!(result.is_err());
        assert!(block.slots().iter().all(Option::is_none));
        assert_eq!(Rc::strong_count(&shared), 1);
    }
}
