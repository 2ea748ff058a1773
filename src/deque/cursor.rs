//! Cursors: positions bound to the deque they walk.

use core::cmp::Ordering;
use core::fmt::{Debug, Formatter};
use core::ops::{Add, Sub};
use core::ptr;

use crate::position::Position;

use super::BlockDeque;

/// Panics unless `position` lies in `begin..=end` of `deque`; returns its index otherwise.
fn index_in<T, const W: usize>(deque: &BlockDeque<T, W>, position: Position<W>) -> usize {
    match deque.index_of(position) {
        Some(index) => index,
        None => panic!("cursor moved outside of the deque"),
    }
}

////////////////////////////////////////////////////////////////////
// Cursor

/// A read-only random-access cursor into a [`BlockDeque`].
///
/// A cursor sits on an element or on the one-past-the-end position, and moves by any signed
/// distance in O(1). Moving outside `begin..=end` panics. Two cursors compare equal only when
/// they walk the same deque and sit at the same position.
///
/// Example:
/// ```
/// use blockdeque::BlockDeque;
/// let v: BlockDeque<i32, 4> = (0..10).collect();
/// let mut c = v.cursor_front();
/// c.advance(6);
/// assert_eq!(c.get(), Some(&6));
/// c.move_prev();
/// assert_eq!(c.get(), Some(&5));
/// assert_eq!(v.cursor_end() - c, 5);
/// assert_eq!((c + 5).get(), None);
/// ```
pub struct Cursor<'a, T, const W: usize> {
    deque: &'a BlockDeque<T, W>,
    position: Position<W>,
}

impl<'a, T, const W: usize>
Cursor<'a, T, W> {
    pub(super) fn new(deque: &'a BlockDeque<T, W>, position: Position<W>) -> Self {
        Self { deque, position }
    }

    /// Returns the element under the cursor; `None` at the end.
    pub fn get(&self) -> Option<&'a T> { self.deque.get_at(self.position) }

    /// Returns the position of the cursor.
    pub fn position(&self) -> Position<W> { self.position }

    /// Returns the logical index of the cursor (`len` at the end).
    pub fn index(&self) -> usize { index_in(self.deque, self.position) }

    /// Moves to the next element. Panics at the end.
    pub fn move_next(&mut self) {
        assert!(self.position != self.deque.end(), "cursor moved past the end");
        self.position.increment();
    }

    /// Moves to the previous element. Panics at the first element.
    pub fn move_prev(&mut self) {
        assert!(self.position != self.deque.begin(), "cursor moved before the front");
        self.position.decrement();
    }

    /// Moves by `d` elements, backwards for negative `d`.
    /// Panics if the result is outside `begin..=end`.
    pub fn advance(&mut self, d: isize) {
        let target = self.position.checked_add(d);
        self.position = match target {
            Some(position) => position,
            None => panic!("cursor moved outside of the deque"),
        };
        index_in(self.deque, self.position);
    }

    /// Returns the signed number of elements from `origin` to this cursor.
    pub fn distance(&self, origin: &Self) -> isize {
        debug_assert!(ptr::eq(self.deque, origin.deque));
        self.position - origin.position
    }
}

// Derived `Clone`/`Copy` would require `T: Clone`.
impl<T, const W: usize>
Clone for Cursor<'_, T, W> {
    fn clone(&self) -> Self { *self }
}

impl<T, const W: usize>
Copy for Cursor<'_, T, W> {}

impl<T, const W: usize>
PartialEq for Cursor<'_, T, W> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.deque, other.deque) && self.position == other.position
    }
}

impl<T, const W: usize>
Eq for Cursor<'_, T, W> {}

/// Cursors into different deques are unordered.
impl<T, const W: usize>
PartialOrd for Cursor<'_, T, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        ptr::eq(self.deque, other.deque).then(|| self.position.cmp(&other.position))
    }
}

impl<T, const W: usize>
Add<isize> for Cursor<'_, T, W> {
    type Output = Self;
    fn add(mut self, d: isize) -> Self {
        self.advance(d);
        self
    }
}

impl<T, const W: usize>
Sub<isize> for Cursor<'_, T, W> {
    type Output = Self;
    fn sub(mut self, d: isize) -> Self {
        let back = match d.checked_neg() {
            Some(back) => back,
            None => panic!("cursor moved outside of the deque"),
        };
        self.advance(back);
        self
    }
}

impl<T, const W: usize>
Sub for Cursor<'_, T, W> {
    type Output = isize;
    fn sub(self, origin: Self) -> isize { self.distance(&origin) }
}

impl<T: Debug, const W: usize>
Debug for Cursor<'_, T, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Cursor").field(&self.position).field(&self.get()).finish()
    }
}

////////////////////////////////////////////////////////////////////
// CursorMut

/// A cursor with exclusive access to its [`BlockDeque`]: it can also change the element under
/// it, insert in front of it and remove it.
///
/// Example:
/// ```
/// use blockdeque::BlockDeque;
/// let mut v: BlockDeque<i32, 4> = (0..6).collect();
/// let mut c = v.cursor_front_mut();
/// c.advance(2);
/// c.insert_before(20);
/// assert_eq!(c.get(), Some(&20));
/// c.move_next();
/// assert_eq!(c.remove_current(), Some(2));
/// assert_eq!(c.get(), Some(&3));
/// assert_eq!(v.iter().copied().collect::<Vec<_>>(), [0, 1, 20, 3, 4, 5]);
/// ```
pub struct CursorMut<'a, T, const W: usize> {
    deque: &'a mut BlockDeque<T, W>,
    position: Position<W>,
}

impl<'a, T, const W: usize>
CursorMut<'a, T, W> {
    pub(super) fn new(deque: &'a mut BlockDeque<T, W>, position: Position<W>) -> Self {
        Self { deque, position }
    }

    /// Returns a read-only cursor at the same position, borrowing from this one.
    pub fn as_cursor(&self) -> Cursor<'_, T, W> {
        Cursor::new(self.deque, self.position)
    }

    /// Returns the element under the cursor; `None` at the end.
    pub fn get(&self) -> Option<&T> { self.deque.get_at(self.position) }

    /// Returns the element under the cursor; `None` at the end.
    pub fn get_mut(&mut self) -> Option<&mut T> { self.deque.get_at_mut(self.position) }

    /// Returns the position of the cursor.
    pub fn position(&self) -> Position<W> { self.position }

    /// Returns the logical index of the cursor (`len` at the end).
    pub fn index(&self) -> usize { index_in(self.deque, self.position) }

    /// Moves to the next element. Panics at the end.
    pub fn move_next(&mut self) {
        assert!(self.position != self.deque.end(), "cursor moved past the end");
        self.position.increment();
    }

    /// Moves to the previous element. Panics at the first element.
    pub fn move_prev(&mut self) {
        assert!(self.position != self.deque.begin(), "cursor moved before the front");
        self.position.decrement();
    }

    /// Moves by `d` elements, backwards for negative `d`.
    /// Panics if the result is outside `begin..=end`.
    pub fn advance(&mut self, d: isize) {
        let mut cursor = self.as_cursor();
        cursor.advance(d);
        self.position = cursor.position;
    }

    /// Returns the signed number of elements from `origin` to this cursor.
    pub fn distance(&self, origin: &Cursor<'_, T, W>) -> isize {
        self.position - origin.position
    }

    /// Inserts `value` in front of the element under the cursor (at the back when the cursor
    /// is at the end); the cursor then sits on the inserted element.
    pub fn insert_before(&mut self, value: T) {
        self.position = self.deque.insert_before(self.position, value);
    }

    /// Removes the element under the cursor and returns it; the cursor then sits on the
    /// element that followed. `None` (and nothing moves) when the cursor is at the end.
    pub fn remove_current(&mut self) -> Option<T> {
        let index = self.index();
        let value = self.deque.remove(index)?;
        self.position = self.deque.head.forward(index);
        Some(value)
    }
}

impl<T: Debug, const W: usize>
Debug for CursorMut<'_, T, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("CursorMut").field(&self.position).field(&self.get()).finish()
    }
}
