use serde::{Deserialize, Serialize};

use crate::Wave;

/// Fixed four-color palette shared by every game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    pub const PALETTE: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
        }
    }
}

/// One cell of the board as seen by the engine and the presentation layer.
///
/// A cell carries at most one special: never both a bomb and a converter.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub color: Color,
    pub controlled: bool,
    pub has_bomb: bool,
    pub has_converter: bool,
    /// Capture-order tag for presentation, `None` until the cell is captured
    /// and reset at the start of every move.
    pub wave: Option<Wave>,
}

impl Cell {
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            controlled: false,
            has_bomb: false,
            has_converter: false,
            wave: None,
        }
    }
}
