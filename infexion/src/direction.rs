use std::fmt::{self, Display};

/// The six axial hex unit vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    UpRight,
    DownRight,
    Down,
    DownLeft,
    UpLeft,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::UpRight,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::UpLeft,
    ];

    /// Axial (r, q) offset of one step in this direction.
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::Up => (1, 0),
            Direction::UpRight => (0, 1),
            Direction::DownRight => (-1, 1),
            Direction::Down => (-1, 0),
            Direction::DownLeft => (0, -1),
            Direction::UpLeft => (1, -1),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
