use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::*;

/// A bomb dislodged during capture, remembered with the wave that reached it.
pub type BombTrigger = (Coord2, Wave);

/// What one flood phase did to the grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FloodOutcome {
    pub captured: CellCount,
    pub converter_picked: bool,
    pub bombs: VecDeque<BombTrigger>,
}

impl FloodOutcome {
    pub fn bomb_triggered(&self) -> bool {
        !self.bombs.is_empty()
    }
}

/// Wave-based fixed-point capture of `color` cells touching the controlled
/// region. The grid must already have its controlled cells recolored.
///
/// Each wave evaluates the whole grid against the state as of the start of
/// the wave and only then applies the captures, so cells captured within a
/// wave are invisible to the adjacency checks of that same wave. Expansion is
/// therefore breadth-first and the wave tags record capture order.
pub fn flood_capture(grid: &mut Grid, color: Color) -> FloodOutcome {
    let mut outcome = FloodOutcome::default();
    let mut wave: Wave = 0;

    loop {
        let qualifying: Vec<Coord2> = grid
            .iter_coords()
            .filter(|&pos| {
                let cell = grid[pos];
                !cell.controlled && cell.color == color && grid.has_controlled_neighbor(pos)
            })
            .collect();

        if qualifying.is_empty() {
            break;
        }
        log::trace!("flood wave {}: capturing {} cells", wave, qualifying.len());

        for pos in qualifying {
            let cell = &mut grid[pos];
            cell.controlled = true;
            cell.wave = Some(wave);
            outcome.captured += 1;

            if cell.has_bomb {
                cell.has_bomb = false;
                outcome.bombs.push_back((pos, wave));
            }
            if cell.has_converter {
                cell.has_converter = false;
                outcome.converter_picked = true;
            }
        }

        wave += 1;
    }

    outcome
}
