use std::ops::{Index, IndexMut};

use crate::{color::Color, pos::HexPos, tile::Tile};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board<const N: usize> {
    data: [[Option<Tile>; N]; N],
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Board {
            data: [[None; N]; N],
        }
    }
}

impl<const N: usize> Index<HexPos> for Board<N> {
    type Output = Option<Tile>;

    fn index(&self, index: HexPos) -> &Self::Output {
        self.data.index(index.r).index(index.q)
    }
}

impl<const N: usize> IndexMut<HexPos> for Board<N> {
    fn index_mut(&mut self, index: HexPos) -> &mut Self::Output {
        self.data.index_mut(index.r).index_mut(index.q)
    }
}

impl<const N: usize> Board<N> {
    /// Iterate over the occupied cells in row-major scan order.
    pub fn iter(&self) -> impl Iterator<Item = (HexPos, Tile)> + '_ {
        self.data.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .copied()
                .enumerate()
                .filter_map(move |(q, tile)| tile.map(|tile| (HexPos::new(r, q), tile)))
        })
    }

    pub fn empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn total_power(&self, color: Color) -> u32 {
        self.iter()
            .filter(|(_, tile)| tile.color == color)
            .map(|(_, tile)| u32::from(tile.power))
            .sum()
    }

    /// Combined power of both sides, used by the spawn-suppression rule.
    pub fn total_power_all(&self) -> u32 {
        self.iter().map(|(_, tile)| u32::from(tile.power)).sum()
    }

    pub fn count_cells(&self, color: Color) -> usize {
        self.iter().filter(|(_, tile)| tile.color == color).count()
    }
}
