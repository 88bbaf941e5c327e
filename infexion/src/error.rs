use std::{error::Error, fmt::Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayError {
    Occupied,
    EmptySource,
    NotOwned,
}

impl Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            PlayError::Occupied => "cannot spawn on a cell that is already occupied",
            PlayError::EmptySource => "cannot spread from an empty cell",
            PlayError::NotOwned => "cannot spread a cell that you do not own",
        })
    }
}

impl Error for PlayError {}
