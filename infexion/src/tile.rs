use crate::color::Color;

/// Power above this clears a cell instead of growing it.
pub const MAX_POWER: u8 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub color: Color,
    pub power: u8,
}

impl Tile {
    /// A freshly placed token.
    pub const fn new(color: Color) -> Self {
        Tile { color, power: 1 }
    }

    /// The tile after a spread lands on it: ownership flips to the spreading
    /// color and power grows by one. `None` when the merged power would
    /// exceed [`MAX_POWER`], which removes the tile from the board entirely.
    #[must_use]
    pub fn captured_by(self, color: Color) -> Option<Tile> {
        let power = self.power + 1;
        if power > MAX_POWER {
            None
        } else {
            Some(Tile { color, power })
        }
    }
}
