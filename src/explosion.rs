use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::*;

/// What draining the bomb queue did to the grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlastOutcome {
    pub captured: CellCount,
    pub detonated: CellCount,
    pub converter_picked: bool,
}

impl BlastOutcome {
    pub fn exploded(&self) -> bool {
        self.detonated > 0
    }
}

/// Drains a FIFO queue of triggered bombs, force-capturing every in-bounds
/// uncontrolled cell within Manhattan `radius` of each bomb. Unlike flood
/// capture, a blast overwrites the cell color unconditionally.
///
/// Bombs uncovered by a blast re-enter the queue, so chains of any depth are
/// handled. A cell is only ever captured once, which bounds the whole drain
/// at `side * side` captures.
pub fn detonate(
    grid: &mut Grid,
    mut queue: VecDeque<BombTrigger>,
    color: Color,
    radius: Coord,
) -> BlastOutcome {
    let mut outcome = BlastOutcome::default();

    while let Some((center, triggering_wave)) = queue.pop_front() {
        let blast_wave = triggering_wave + 1;
        outcome.detonated += 1;
        log::debug!("bomb at {:?} detonates on wave {}", center, blast_wave);

        let targets: Vec<Coord2> = grid.iter_blast(center, radius).collect();
        for pos in targets {
            let cell = &mut grid[pos];
            if cell.controlled {
                continue;
            }
            cell.controlled = true;
            cell.color = color;
            cell.wave = Some(blast_wave);
            outcome.captured += 1;

            if cell.has_bomb {
                cell.has_bomb = false;
                queue.push_back((pos, blast_wave));
            }
            if cell.has_converter {
                cell.has_converter = false;
                outcome.converter_picked = true;
            }
        }
    }

    outcome
}
