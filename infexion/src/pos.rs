use std::fmt::{self, Display};

use arrayvec::ArrayVec;

use crate::direction::Direction;

/// Axial coordinate on an `N` by `N` hex grid.
/// Arithmetic wraps modulo `N` in both axes, so the board is a torus and a
/// spread ray can never leave it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexPos {
    pub r: usize,
    pub q: usize,
}

impl HexPos {
    pub const fn new(r: usize, q: usize) -> Self {
        HexPos { r, q }
    }

    /// Move one cell in the given direction, wrapping around the board edge.
    #[must_use]
    pub fn step<const N: usize>(self, direction: Direction) -> Self {
        let (dr, dq) = direction.offset();
        HexPos {
            r: (self.r as isize + dr as isize).rem_euclid(N as isize) as usize,
            q: (self.q as isize + dq as isize).rem_euclid(N as isize) as usize,
        }
    }

    /// The `len` cells reached by walking from this position, not including
    /// the starting cell. A ray is at most 6 cells because cell power is.
    pub fn ray<const N: usize>(self, direction: Direction, len: usize) -> ArrayVec<HexPos, 6> {
        let mut cells = ArrayVec::new();
        let mut current = self;
        for _ in 0..len {
            current = current.step::<N>(direction);
            cells.push(current);
        }
        cells
    }
}

impl Display for HexPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.q)
    }
}
