//! Defines [`BlockDeque`]: a double-ended queue stored as an index of fixed-width blocks.

mod cursor;
mod iter;
mod traits;

use crate::error::DequeError;
use crate::map::{BlockMap, Side};
use crate::position::Position;

pub use self::{
    cursor::*,
    iter::*,
};

/// The block width used when none is given.
pub const DEFAULT_BLOCK_WIDTH: usize = 20;

/// A double-ended queue backed by a two-level structure: a growable index ("map") of blocks,
/// each block holding exactly `W` element slots.
///
/// Live elements occupy a contiguous run of slots starting at the head position. Only the first
/// and the last live block can be partially filled; every block in between is full. Blocks are
/// never shared and stay allocated until the block index is reallocated or shrunk, so pushing
/// and popping at either end is amortized O(1) and random access is O(1).
///
/// ## Summary of supported operations
///
/// - {push,pop} at {front,back} of the deque.
/// - Checked ([`Self::at`], [`Self::get`]) and panicking ([`core::ops::Index`]) random access.
/// - Insert and remove anywhere, shifting whichever side of the deque is shorter.
/// - Resize, truncate and clear; reserve at either end; shrink to fit.
/// - Positions ([`Position`]) and cursors ([`Cursor`], [`CursorMut`]) that jump by any signed
///   distance in O(1).
///
/// ## Invalidation
///
/// The deque does not track positions or cursors handed out earlier. Inserting, erasing,
/// growing the block index, swapping or assigning may move elements or blocks; afterwards an
/// old [`Position`] may point at a different element. This is a contract, not a runtime check;
/// the borrow checker already rules it out for cursors.
///
/// ## Precondition violations
///
/// Emptiness and bounds are reported rather than assumed: `pop_*`, `front`, `back` and `get`
/// return `Option`, [`Self::at`] returns [`DequeError::IndexOutOfBounds`]. Indexing with `[]`
/// and handing in a position outside the live range panic.
///
/// Example:
/// ```
/// use blockdeque::BlockDeque;
/// let mut v: BlockDeque<i32> = BlockDeque::from_elem(10, 100);
/// v.push_front(9);
/// assert_eq!(v.front(), Some(&9));
/// assert_eq!(v.back(), Some(&100));
/// assert_eq!(v.len(), 11);
/// let pos = v.begin() + 5;
/// v.insert_before(pos, 99);
/// assert_eq!(v[5], 99);
/// ```
///
pub struct BlockDeque<T, const W: usize = DEFAULT_BLOCK_WIDTH> {
    map: BlockMap<T, W>,
    /// position of the first element; for an empty deque, where the next element would go
    head: Position<W>,
    len: usize,
}

/// Panics with the error's message, the way `Vec` reports capacity overflow.
fn handle_reserve(result: Result<(), DequeError>) {
    if let Err(err) = result {
        panic!("{err}");
    }
}

impl<T, const W: usize>
BlockDeque<T, W> {
    const WIDTH_IS_POSITIVE: () = assert!(W > 0, "block width must be positive");

    /// The number of element slots in each block.
    pub const BLOCK_WIDTH: usize = W;

    ////////////////////////////////////////////////////////////////////
    // construction

    /// Creates an empty deque. Does not allocate.
    pub const fn new() -> Self {
        let () = Self::WIDTH_IS_POSITIVE;
        Self {
            map: BlockMap::new(),
            head: Position::new(0, 0),
            len: 0,
        }
    }

    /// Creates an empty deque with room for at least `capacity` elements at the back.
    /// Panics if the allocation fails.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(deque) => deque,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates an empty deque with room for at least `capacity` elements at the back.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::AllocationFailed` or `DequeError::CapacityOverflow` if the blocks
    /// cannot be allocated; nothing stays allocated in that case.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, DequeError> {
        let mut deque = Self::new();
        if capacity > 0 {
            // one spare block on each side of the requested ones
            let blocks = capacity.div_ceil(W).checked_add(2).ok_or(DequeError::CapacityOverflow)?;
            deque.map = BlockMap::try_with_blocks(blocks)?;
            deque.head = Position::new(1, 0);
        }
        debug_assert!(deque.valid());
        Ok(deque)
    }

    /// Creates a deque holding `n` clones of `value`.
    pub fn from_elem(n: usize, value: T) -> Self
        where
            T: Clone {
        let mut deque = Self::with_capacity(n);
        deque.resize(n, value);
        deque
    }

    ////////////////////////////////////////////////////////////////////
    // size

    /// Returns how many elements are currently in the deque.
    pub fn len(&self) -> usize { self.len }

    /// Returns if this deque is empty.
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns the number of element slots allocated, live or spare.
    pub fn capacity(&self) -> usize { self.map.len() * W }

    /// Returns the number of blocks in the block index.
    pub fn block_count(&self) -> usize { self.map.len() }

    /// Slots available from the head to the end of the block index.
    fn back_capacity(&self) -> usize {
        if self.map.is_empty() {
            0
        } else {
            (self.map.len() - self.head.block()) * W - self.head.offset()
        }
    }

    /// Slots available before the head.
    fn front_capacity(&self) -> usize {
        self.head.block() * W + self.head.offset()
    }

    /// Blocks spanned by the live elements, counting the head block even when empty.
    fn live_blocks(&self) -> usize {
        if self.map.is_empty() {
            0
        } else {
            (self.head.offset() + self.len).div_ceil(W).max(1)
        }
    }

    ////////////////////////////////////////////////////////////////////
    // reserve

    /// Makes sure `additional` more elements fit at the back without another reallocation.
    /// Panics if the allocation fails.
    pub fn reserve(&mut self, additional: usize) {
        handle_reserve(self.try_reserve(additional));
    }

    /// Makes sure `additional` more elements fit at the front without another reallocation.
    /// Panics if the allocation fails.
    pub fn reserve_front(&mut self, additional: usize) {
        handle_reserve(self.try_reserve_front(additional));
    }

    /// Makes sure `additional` more elements fit at the back without another reallocation.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::AllocationFailed` or `DequeError::CapacityOverflow`; the deque is
    /// unchanged in that case.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), DequeError> {
        let required = self.len.checked_add(additional).ok_or(DequeError::CapacityOverflow)?;
        if required <= self.back_capacity() {
            return Ok(());
        }
        let slots = self.head.offset().checked_add(required).ok_or(DequeError::CapacityOverflow)?;
        let live = self.live_blocks();
        let add = slots.div_ceil(W) - live;
        let start = self.map.make_room(self.head.block(), live, add, Side::Back)?;
        self.head = Position::new(start, self.head.offset());
        debug_assert!(self.valid());
        Ok(())
    }

    /// Makes sure `additional` more elements fit at the front without another reallocation.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::AllocationFailed` or `DequeError::CapacityOverflow`; the deque is
    /// unchanged in that case.
    pub fn try_reserve_front(&mut self, additional: usize) -> Result<(), DequeError> {
        if additional <= self.front_capacity() {
            return Ok(());
        }
        let add = (additional - self.head.offset()).div_ceil(W);
        let start = self.map.make_room(self.head.block(), self.live_blocks(), add, Side::Front)?;
        self.head = Position::new(start, self.head.offset());
        debug_assert!(self.valid());
        Ok(())
    }

    /// Releases every spare block. An empty deque gives up all of its storage.
    pub fn shrink_to_fit(&mut self) {
        if self.len == 0 {
            self.map.shrink_to(0, 0);
            self.head = Position::new(0, 0);
        } else {
            self.map.shrink_to(self.head.block(), self.live_blocks());
            self.head = Position::new(0, self.head.offset());
        }
        debug_assert!(self.valid());
    }

    /// Moves the head of an empty deque to the middle of the block index,
    /// so that both ends have room to grow again.
    fn rewind_head(&mut self) {
        debug_assert_eq!(self.len, 0);
        self.head = if self.map.is_empty() {
            Position::new(0, 0)
        } else {
            Position::new(self.map.len() / 2, W / 2)
        };
    }

    ////////////////////////////////////////////////////////////////////
    // get

    /// Returns the `index`-th element from the front; `None` if the index is out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.map.slot(self.head.forward(index))
    }

    /// Returns the `index`-th element from the front; `None` if the index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        self.map.slot_mut(self.head.forward(index))
    }

    /// Returns the `index`-th element from the front.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::IndexOutOfBounds` if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, DequeError> {
        let length = self.len;
        self.get(index).ok_or(DequeError::IndexOutOfBounds { index, length })
    }

    /// Returns the `index`-th element from the front.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::IndexOutOfBounds` if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, DequeError> {
        let length = self.len;
        self.get_mut(index).ok_or(DequeError::IndexOutOfBounds { index, length })
    }

    /// Returns the element at the front of the deque, or `None` if the deque is empty.
    pub fn front(&self) -> Option<&T> { self.get(0) }

    /// Returns the element at the back of the deque, or `None` if the deque is empty.
    pub fn back(&self) -> Option<&T> { self.get(self.len.checked_sub(1)?) }

    pub fn front_mut(&mut self) -> Option<&mut T> { self.get_mut(0) }

    pub fn back_mut(&mut self) -> Option<&mut T> { self.get_mut(self.len.checked_sub(1)?) }

    /// Returns the element at the front of the deque.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::Empty` if the deque is empty.
    pub fn try_front(&self) -> Result<&T, DequeError> {
        self.front().ok_or(DequeError::Empty)
    }

    /// Returns the element at the back of the deque.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::Empty` if the deque is empty.
    pub fn try_back(&self) -> Result<&T, DequeError> {
        self.back().ok_or(DequeError::Empty)
    }

    ////////////////////////////////////////////////////////////////////
    // push

    /// Pushes an element to the back of this deque.
    /// Panics if a needed allocation fails.
    pub fn push_back(&mut self, value: T) {
        self.reserve(1);
        let tail = self.head.forward(self.len);
        self.map.block_mut(tail.block()).construct(tail.offset(), value);
        self.len += 1;
        debug_assert!(self.valid());
    }

    /// Pushes an element to the front of this deque.
    /// Panics if a needed allocation fails.
    pub fn push_front(&mut self, value: T) {
        self.reserve_front(1);
        self.head.decrement();
        self.map.block_mut(self.head.block()).construct(self.head.offset(), value);
        self.len += 1;
        debug_assert!(self.valid());
    }

    ////////////////////////////////////////////////////////////////////
    // pop

    /// Removes the back element from this deque and returns it;
    /// `None` if the deque is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let last = self.head.forward(self.len);
        let value = self.map.block_mut(last.block()).take(last.offset());
        if self.len == 0 {
            self.rewind_head();
        }
        debug_assert!(self.valid());
        value
    }

    /// Removes the front element from this deque and returns it;
    /// `None` if the deque is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.map.block_mut(self.head.block()).take(self.head.offset());
        self.head.increment();
        self.len -= 1;
        if self.len == 0 {
            self.rewind_head();
        }
        debug_assert!(self.valid());
        value
    }

    /// Removes the back element from this deque and returns it.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::Empty` if the deque is empty.
    pub fn try_pop_back(&mut self) -> Result<T, DequeError> {
        self.pop_back().ok_or(DequeError::Empty)
    }

    /// Removes the front element from this deque and returns it.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::Empty` if the deque is empty.
    pub fn try_pop_front(&mut self) -> Result<T, DequeError> {
        self.pop_front().ok_or(DequeError::Empty)
    }

    ////////////////////////////////////////////////////////////////////
    // insert / remove

    /// Moves the content of logical slot `from` into logical slot `to`.
    fn shift(&mut self, from: usize, to: usize) {
        let from = self.head.forward(from);
        let value = self.map.block_mut(from.block()).take(from.offset());
        let to = self.head.forward(to);
        self.map.block_mut(to.block()).put(to.offset(), value);
    }

    /// Inserts `value` so that it becomes the `index`-th element,
    /// moving the shorter of the two sides by one slot.
    /// Panics if `index > len` or if a needed allocation fails.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(index <= self.len, "insertion index (is {index}) should be <= len (is {})", self.len);
        if index < self.len - index {
            self.reserve_front(1);
            self.head.decrement();
            self.len += 1;
            for i in 0..index {
                self.shift(i + 1, i);
            }
        } else {
            self.reserve(1);
            self.len += 1;
            for i in (index + 1..self.len).rev() {
                self.shift(i - 1, i);
            }
        }
        let at = self.head.forward(index);
        self.map.block_mut(at.block()).construct(at.offset(), value);
        debug_assert!(self.valid());
    }

    /// Removes the `index`-th element and returns it, closing the gap from the shorter side;
    /// `None` if the index is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let at = self.head.forward(index);
        let value = self.map.block_mut(at.block()).take(at.offset());
        if index < self.len - 1 - index {
            for i in (0..index).rev() {
                self.shift(i, i + 1);
            }
            self.head.increment();
        } else {
            for i in index + 1..self.len {
                self.shift(i, i - 1);
            }
        }
        self.len -= 1;
        if self.len == 0 {
            self.rewind_head();
        }
        debug_assert!(self.valid());
        value
    }

    ////////////////////////////////////////////////////////////////////
    // positions

    /// Returns the position of the first element (equal to [`Self::end`] when empty).
    pub fn begin(&self) -> Position<W> { self.head }

    /// Returns the position one past the last element. It does not address an element.
    pub fn end(&self) -> Position<W> { self.head.forward(self.len) }

    /// Returns the position of the `index`-th element; `None` if `index > len`.
    /// `index == len` gives [`Self::end`].
    pub fn position(&self, index: usize) -> Option<Position<W>> {
        (index <= self.len).then(|| self.head.forward(index))
    }

    /// Returns the logical index of `position`; `None` unless it lies in `begin..=end`.
    pub fn index_of(&self, position: Position<W>) -> Option<usize> {
        usize::try_from(position - self.head).ok().filter(|&index| index <= self.len)
    }

    /// Panics unless `position` lies in `begin..=end`.
    fn checked_index_of(&self, position: Position<W>) -> usize {
        match self.index_of(position) {
            Some(index) => index,
            None => panic!("position {position:?} is outside of the deque"),
        }
    }

    /// Returns the element at `position`; `None` if it is not in `begin..end`.
    pub fn get_at(&self, position: Position<W>) -> Option<&T> {
        self.get(self.index_of(position)?)
    }

    /// Returns the element at `position`; `None` if it is not in `begin..end`.
    pub fn get_at_mut(&mut self, position: Position<W>) -> Option<&mut T> {
        let index = self.index_of(position)?;
        self.get_mut(index)
    }

    /// Inserts `value` in front of the element at `position` (at the back for [`Self::end`]) and
    /// returns the position of the inserted element. Other positions are invalidated.
    /// Panics if `position` is outside `begin..=end`.
    pub fn insert_before(&mut self, position: Position<W>, value: T) -> Position<W> {
        let index = self.checked_index_of(position);
        self.insert(index, value);
        self.head.forward(index)
    }

    /// Drops the element at `position` and returns the position of the element that followed
    /// it ([`Self::end`] if it was the last). Other positions are invalidated.
    /// Panics if `position` is outside `begin..end`.
    pub fn erase(&mut self, position: Position<W>) -> Position<W> {
        let index = self.checked_index_of(position);
        assert!(index < self.len, "cannot erase the end position");
        drop(self.remove(index));
        self.head.forward(index)
    }

    /// Returns a read-only cursor at `position`.
    /// Panics if `position` is outside `begin..=end`.
    pub fn cursor(&self, position: Position<W>) -> Cursor<'_, T, W> {
        self.checked_index_of(position);
        Cursor::new(self, position)
    }

    /// Returns a read-only cursor at the first element.
    pub fn cursor_front(&self) -> Cursor<'_, T, W> { Cursor::new(self, self.begin()) }

    /// Returns a read-only cursor one past the last element.
    pub fn cursor_end(&self) -> Cursor<'_, T, W> { Cursor::new(self, self.end()) }

    /// Returns a mutable cursor at `position`.
    /// Panics if `position` is outside `begin..=end`.
    pub fn cursor_mut(&mut self, position: Position<W>) -> CursorMut<'_, T, W> {
        self.checked_index_of(position);
        CursorMut::new(self, position)
    }

    /// Returns a mutable cursor at the first element.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, W> {
        let position = self.begin();
        CursorMut::new(self, position)
    }

    /// Returns a mutable cursor one past the last element.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T, W> {
        let position = self.end();
        CursorMut::new(self, position)
    }

    ////////////////////////////////////////////////////////////////////
    // iterate

    /// Returns a front-to-back iterator over references to the elements.
    pub fn iter(&self) -> Iter<'_, T, W> { Iter::new(self) }

    /// Returns a front-to-back iterator over mutable references to the elements.
    pub fn iter_mut(&mut self) -> IterMut<'_, T, W> { IterMut::new(self) }

    ////////////////////////////////////////////////////////////////////
    // resize

    /// Appends `count` elements produced by `f`, filling block by block.
    /// If `f` panics, the elements appended so far stay in the deque.
    fn extend_with(&mut self, count: usize, mut f: impl FnMut() -> T) {
        self.reserve(count);
        let mut remaining = count;
        while remaining > 0 {
            let tail = self.head.forward(self.len);
            let filled = remaining.min(W - tail.offset());
            self.map
                .block_mut(tail.block())
                .construct_range(tail.offset()..tail.offset() + filled, &mut f);
            self.len += filled;
            remaining -= filled;
        }
        debug_assert!(self.valid());
    }

    /// Shortens the deque to `len` elements, dropping the rest back to front.
    /// No-op if the deque is not longer than `len`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let stop = self.head.forward(len);
        let mut end = self.head.forward(self.len);
        while end > stop {
            let (block, upper) = if end.offset() == 0 {
                (end.block() - 1, W)
            } else {
                (end.block(), end.offset())
            };
            let lower = if stop.block() == block { stop.offset() } else { 0 };
            self.map.block_mut(block).destroy_range(lower..upper);
            self.len -= upper - lower;
            end = Position::new(block, lower);
        }
        if self.len == 0 {
            self.rewind_head();
        }
        debug_assert!(self.valid());
    }

    /// Resizes the deque to `len` elements: grows by appending clones of `value`,
    /// shrinks by dropping elements at the back. No-op if `len` is the current length.
    pub fn resize(&mut self, len: usize, value: T)
        where
            T: Clone {
        if len <= self.len {
            self.truncate(len);
        } else {
            let added = len - self.len;
            self.extend_with(added - 1, || value.clone());
            self.push_back(value);
        }
    }

    /// Resizes the deque to `len` elements: grows by appending the results of `f`,
    /// shrinks by dropping elements at the back.
    pub fn resize_with(&mut self, len: usize, f: impl FnMut() -> T) {
        if len <= self.len {
            self.truncate(len);
        } else {
            self.extend_with(len - self.len, f);
        }
    }

    /// Drops every element. Equivalent to `truncate(0)`; the blocks are kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Exchanges the contents (elements and storage) of two deques in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    ////////////////////////////////////////////////////////////////////
    // consistency

    /// Checks the structural invariants: the live range lies inside the block index, the
    /// boundary elements exist, and the slots just outside the live range are empty.
    fn valid(&self) -> bool {
        if self.map.is_empty() {
            return self.len == 0 && self.head == Position::new(0, 0);
        }
        let fits = self.head.block() + self.live_blocks() <= self.map.len();
        let ends_present = self.len == 0
            || (self.map.slot(self.head).is_some()
                && self.map.slot(self.head.forward(self.len - 1)).is_some());
        let after_empty = self.map.slot(self.end()).is_none();
        let before_empty = match self.head.checked_sub(1) {
            Some(before) => self.map.slot(before).is_none(),
            None => true,
        };
        fits && ends_present && after_empty && before_empty
    }
}

impl<T, const W: usize>
Drop for BlockDeque<T, W> {
    fn drop(&mut self) {
        self.clear();
    }
}
