//! Defines [`Position`]: the `(block, offset)` coordinate of a slot in a block index.

use core::ops::{Add, AddAssign, Sub, SubAssign};

use num_traits::{Euclid, PrimInt, Signed};

/// Splits `n` into `(quotient, remainder)` with the quotient rounded toward negative infinity.
///
/// `d` must be positive; for a positive divisor the Euclidean division is the floored one, so
/// `-1 / 20 == -1` (not `0`) and `-20 / 20 == -1` (not `-2`).
fn floor_div_rem<I: PrimInt + Signed + Euclid>(n: I, d: I) -> (I, I) {
    debug_assert!(d > I::zero());
    (n.div_euclid(&d), n.rem_euclid(&d))
}

/// A slot coordinate inside a block index whose blocks are `W` slots wide.
///
/// A position is a plain value: it does not borrow the deque it was obtained from, and it is
/// only meaningful for that deque until the next operation that moves elements or blocks
/// (insert, erase, growth of the block index, swap, assignment). Using a stale position is not
/// undefined behavior; it simply addresses whatever slot now sits at the same coordinate, and
/// operations that take a position check that it lies inside the live range.
///
/// Positions order by `(block, offset)`, which is the logical order within one deque.
///
/// Example:
/// ```
/// use blockdeque::Position;
/// type P = Position<20>;
/// let p = P::new(3, 5);
/// assert_eq!(p + 15, P::new(4, 0));
/// assert_eq!(p - 6, P::new(2, 19));
/// assert_eq!((p + 40) - p, 40);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position<const W: usize> {
    block: usize,
    offset: usize,
}

impl<const W: usize>
Position<W> {
    /// Creates the position of slot `offset` in block `block`.
    /// Panics if `offset >= W`.
    pub const fn new(block: usize, offset: usize) -> Self {
        assert!(offset < W);
        Self { block, offset }
    }

    /// Returns the index of the block this position points into.
    pub const fn block(self) -> usize { self.block }

    /// Returns the slot index within the block, always in `0..W`.
    pub const fn offset(self) -> usize { self.offset }

    ////////////////////////////////////////////////////////////////////
    // stepping

    /// Moves to the following slot, crossing into the next block after slot `W - 1`.
    pub fn increment(&mut self) {
        if self.offset == W - 1 {
            self.block += 1;
            self.offset = 0;
        } else {
            self.offset += 1;
        }
    }

    /// Moves to the preceding slot, crossing into the previous block before slot `0`.
    /// Panics if this is slot `0` of block `0`.
    pub fn decrement(&mut self) {
        if self.offset == 0 {
            assert!(self.block > 0, "position moved before the first block");
            // one past the last slot of the previous block, corrected below
            self.block -= 1;
            self.offset = W;
        }
        self.offset -= 1;
    }

    /// Returns the position `n` slots after this one.
    pub(crate) fn forward(self, n: usize) -> Self {
        let target = self.offset + n;
        Self {
            block: self.block + target / W,
            offset: target % W,
        }
    }

    ////////////////////////////////////////////////////////////////////
    // random jumps

    /// Returns the position `d` slots away (backwards for negative `d`);
    /// `None` if it would fall before block `0` or overflow.
    pub fn checked_add(self, d: isize) -> Option<Self> {
        let width = isize::try_from(W).ok()?;
        let target = isize::try_from(self.offset).ok()?.checked_add(d)?;
        if (0..width).contains(&target) {
            return Some(Self { block: self.block, offset: target as usize });
        }
        let (block_delta, offset) = floor_div_rem(target, width);
        Some(Self {
            block: self.block.checked_add_signed(block_delta)?,
            offset: offset as usize,
        })
    }

    /// Returns the position `d` slots before this one; `None` if it would fall before block `0`.
    pub fn checked_sub(self, d: isize) -> Option<Self> {
        self.checked_add(d.checked_neg()?)
    }

    /// Returns the signed number of slots from `origin` to this position.
    pub fn distance(self, origin: Self) -> isize {
        let blocks = self.block as isize - origin.block as isize;
        let offsets = self.offset as isize - origin.offset as isize;
        blocks * W as isize + offsets
    }
}

impl<const W: usize>
Add<isize> for Position<W> {
    type Output = Self;

    /// Panics if the result would fall before block `0`.
    fn add(self, d: isize) -> Self {
        match self.checked_add(d) {
            Some(position) => position,
            None => panic!("position moved before the first block"),
        }
    }
}

impl<const W: usize>
Sub<isize> for Position<W> {
    type Output = Self;

    /// Panics if the result would fall before block `0`.
    fn sub(self, d: isize) -> Self {
        match self.checked_sub(d) {
            Some(position) => position,
            None => panic!("position moved before the first block"),
        }
    }
}

impl<const W: usize>
AddAssign<isize> for Position<W> {
    fn add_assign(&mut self, d: isize) { *self = *self + d; }
}

impl<const W: usize>
SubAssign<isize> for Position<W> {
    fn sub_assign(&mut self, d: isize) { *self = *self - d; }
}

impl<const W: usize>
Sub for Position<W> {
    type Output = isize;
    fn sub(self, origin: Self) -> isize { self.distance(origin) }
}
