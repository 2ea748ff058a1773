//! Defines [`BlockMap`]: the growable index of blocks behind a deque.

use alloc::vec::Vec;

use crate::block::Block;
use crate::error::DequeError;
use crate::position::Position;

/// Which end of the live blocks needs the extra room.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Front,
    Back,
}

/// The block index: an ordered list of blocks, every one of them allocated.
///
/// The map only knows about blocks; which slots hold live elements is tracked by the deque.
/// Blocks outside the deque's live range are empty spares kept to absorb later growth.
pub(crate) struct BlockMap<T, const W: usize> {
    blocks: Vec<Block<T, W>>,
}

/// Allocates `count` empty blocks. On failure every block allocated so far is released.
fn allocate_blocks<T, const W: usize>(count: usize) -> Result<Vec<Block<T, W>>, DequeError> {
    let mut blocks = Vec::new();
    blocks
        .try_reserve_exact(count)
        .map_err(|_| DequeError::AllocationFailed { blocks: count })?;
    for _ in 0..count {
        blocks.push(Block::try_new()?);
    }
    Ok(blocks)
}

impl<T, const W: usize>
BlockMap<T, W> {
    /// Creates an empty map (no blocks allocated).
    pub(crate) const fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Creates a map of `count` empty blocks.
    pub(crate) fn try_with_blocks(count: usize) -> Result<Self, DequeError> {
        Ok(Self { blocks: allocate_blocks(count)? })
    }

    /// Returns the number of blocks (capacity in blocks).
    pub(crate) fn len(&self) -> usize { self.blocks.len() }

    pub(crate) fn is_empty(&self) -> bool { self.blocks.is_empty() }

    pub(crate) fn blocks(&self) -> &[Block<T, W>] { &self.blocks }

    pub(crate) fn blocks_mut(&mut self) -> &mut [Block<T, W>] { &mut self.blocks }

    /// Panics if `index` is not a block of this map.
    pub(crate) fn block_mut(&mut self, index: usize) -> &mut Block<T, W> {
        &mut self.blocks[index]
    }

    /// Returns the element at `position`; `None` for an empty slot or a block outside the map.
    pub(crate) fn slot(&self, position: Position<W>) -> Option<&T> {
        self.blocks.get(position.block())?.get(position.offset())
    }

    pub(crate) fn slot_mut(&mut self, position: Position<W>) -> Option<&mut T> {
        self.blocks.get_mut(position.block())?.get_mut(position.offset())
    }

    ////////////////////////////////////////////////////////////////////
    // growth

    /// Makes room for `add` more blocks next to the `live` blocks that start at block `start`,
    /// on the given side. Returns the block where the live blocks start afterwards.
    ///
    /// If the map is more than twice as large as needed, the blocks are rotated in place so the
    /// live ones sit in the middle. Otherwise a new index of
    /// `len + max(len, add) + 2` blocks is built; existing blocks move into it and the rest are
    /// freshly allocated. Either way no element is touched, only block handles move.
    ///
    /// Everything that can fail is allocated before the map is modified, so on error the map is
    /// unchanged.
    pub(crate) fn make_room(
        &mut self,
        start: usize,
        live: usize,
        add: usize,
        side: Side,
    ) -> Result<usize, DequeError> {
        debug_assert!(start + live <= self.blocks.len());
        let size = self.blocks.len();
        let needed = live.checked_add(add).ok_or(DequeError::CapacityOverflow)?;
        let lead = match side {
            Side::Front => add,
            Side::Back => 0,
        };

        if needed.checked_mul(2).is_some_and(|twice| size > twice) {
            let new_start = (size - needed) / 2 + lead;
            if new_start < start {
                self.blocks.rotate_left(start - new_start);
            } else {
                self.blocks.rotate_right(new_start - start);
            }
            tracing::trace!(blocks = size, live, start, new_start, "recentered block index");
            return Ok(new_start);
        }

        let new_size = size
            .checked_add(size.max(add))
            .and_then(|n| n.checked_add(2))
            .ok_or(DequeError::CapacityOverflow)?;
        if new_size.checked_mul(W).is_none() {
            return Err(DequeError::CapacityOverflow);
        }
        let new_start = (new_size - needed) / 2 + lead;

        let mut blocks = Vec::new();
        blocks
            .try_reserve_exact(new_size)
            .map_err(|_| DequeError::AllocationFailed { blocks: new_size })?;
        let fresh = allocate_blocks::<T, W>(new_size - size)?;

        // [live | spare | fresh], then rotate the live blocks into place.
        self.blocks.rotate_left(start);
        blocks.append(&mut self.blocks);
        blocks.extend(fresh);
        blocks.rotate_right(new_start);
        self.blocks = blocks;

        tracing::debug!(old_blocks = size, new_blocks = new_size, live, new_start, "reallocated block index");
        Ok(new_start)
    }

    /// Releases every block except the `live` blocks starting at `start`, which move to the
    /// front of the map.
    pub(crate) fn shrink_to(&mut self, start: usize, live: usize) {
        let before = self.blocks.len();
        self.blocks.truncate(start + live);
        self.blocks.drain(..start);
        self.blocks.shrink_to_fit();
        tracing::trace!(old_blocks = before, new_blocks = self.blocks.len(), "shrank block index");
    }
}
