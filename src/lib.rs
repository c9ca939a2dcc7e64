#![no_std]

extern crate alloc;

use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use explosion::*;
pub use flood::*;
pub use generator::*;
pub use scores::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod explosion;
mod flood;
mod generator;
mod scores;
mod types;

/// Reference board side used by the named difficulties.
pub const DEFAULT_SIDE: Coord = 20;

/// The corner owned by the player at the start of every game.
pub const START_CELL: Coord2 = (0, 0);

/// Generation parameters for one board.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub side: Coord,
    pub bombs: CellCount,
    pub converters: CellCount,
}

impl GridConfig {
    pub const fn new_unchecked(side: Coord, bombs: CellCount, converters: CellCount) -> Self {
        Self {
            side,
            bombs,
            converters,
        }
    }

    pub fn new(side: Coord, bombs: CellCount, converters: CellCount) -> Self {
        let side = side.clamp(1, Coord::MAX);
        Self::new_unchecked(side, bombs, converters)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.side, self.side)
    }

    /// Rejection sampling during generation only terminates when the specials
    /// and the starting cell all fit on the board.
    pub fn validate(&self) -> Result<()> {
        let occupied = self.bombs.saturating_add(self.converters).saturating_add(1);
        if occupied > self.total_cells() {
            Err(GameError::InfeasibleLayout)
        } else {
            Ok(())
        }
    }
}

/// A square board of cells. Owned by one `Game` and replaced wholesale on
/// every transition, so produced values never change under the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    pub fn from_cells(cells: Array2<Cell>) -> Result<Self> {
        let dim = cells.dim();
        if dim.0 == 0 || dim.0 != dim.1 || dim.0 > Coord::MAX as usize {
            return Err(GameError::InvalidGridShape);
        }
        Ok(Self { cells })
    }

    pub fn side(&self) -> Coord {
        self.cells.dim().0 as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.side(), self.side())
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub fn controlled_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.controlled).count() as CellCount
    }

    pub fn is_fully_controlled(&self) -> bool {
        self.cells.iter().all(|cell| cell.controlled)
    }

    /// Adjacency oracle: whether any of the up-to-4 orthogonal neighbors of
    /// `coords` is controlled.
    pub fn has_controlled_neighbor(&self, coords: Coord2) -> bool {
        self.cells
            .iter_neighbors(coords)
            .any(|pos| self.cells[pos.to_nd_index()].controlled)
    }

    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let side = self.side();
        (0..side).flat_map(move |row| (0..side).map(move |col| (row, col)))
    }

    pub(crate) fn iter_blast(&self, center: Coord2, radius: Coord) -> impl Iterator<Item = Coord2> + use<> {
        let side = self.side();
        types::iter_blast(center, radius, (side, side))
    }

    pub(crate) fn clear_waves(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.wave = None;
        }
    }

    pub(crate) fn recolor_controlled(&mut self, color: Color) {
        for cell in self.cells.iter_mut() {
            if cell.controlled {
                cell.color = color;
            }
        }
    }

    /// One-shot converter effect: recolor every uncontrolled cell of `from`
    /// to `to`. Controlled cells are untouched.
    pub(crate) fn recolor_uncontrolled(&mut self, from: Color, to: Color) -> CellCount {
        let mut changed = 0;
        for cell in self.cells.iter_mut() {
            if !cell.controlled && cell.color == from {
                cell.color = to;
                changed += 1;
            }
        }
        changed
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

/// Builds a board from one string per row: `r`/`g`/`b`/`y` pick the color,
/// uppercase marks the cell controlled.
#[cfg(test)]
pub(crate) fn grid_from_rows(rows: &[&str]) -> Grid {
    let side = rows.len();
    let cells = Array2::from_shape_fn((side, side), |(row, col)| {
        let ch = rows[row].as_bytes()[col] as char;
        let color = match ch.to_ascii_lowercase() {
            'r' => Color::Red,
            'g' => Color::Green,
            'b' => Color::Blue,
            'y' => Color::Yellow,
            other => panic!("unknown cell char {:?}", other),
        };
        let mut cell = Cell::new(color);
        cell.controlled = ch.is_ascii_uppercase();
        cell
    });
    Grid::from_cells(cells).unwrap()
}
