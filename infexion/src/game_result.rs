use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Winner(Color),
    Draw,
    Ongoing,
}
