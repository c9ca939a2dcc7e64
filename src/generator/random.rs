use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Purely random board honoring the placement rules: the starting corner is
/// controlled, its neighbors never share its color, and bombs and converters
/// land on distinct ordinary cells away from the start.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomGridGenerator {
    seed: u64,
}

impl RandomGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(self, config: GridConfig) -> Result<Grid> {
        config.validate()?;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let side = config.side as usize;
        let mut cells = Array2::from_shape_fn((side, side), |_| Cell::new(random_color(&mut rng)));

        cells[START_CELL.to_nd_index()].controlled = true;

        // make sure the first move can always capture something
        let start_color = cells[START_CELL.to_nd_index()].color;
        for pos in cells.iter_neighbors(START_CELL) {
            if cells[pos.to_nd_index()].color == start_color {
                cells[pos.to_nd_index()].color = random_color_excluding(&mut rng, start_color);
            }
        }

        let mut placed: CellCount = 0;
        while placed < config.bombs {
            let pos = random_coords(&mut rng, config.side);
            let cell = &mut cells[pos.to_nd_index()];
            if pos == START_CELL || cell.has_bomb {
                continue;
            }
            cell.has_bomb = true;
            placed += 1;
        }

        let mut placed: CellCount = 0;
        while placed < config.converters {
            let pos = random_coords(&mut rng, config.side);
            let cell = &mut cells[pos.to_nd_index()];
            if pos == START_CELL || cell.has_bomb || cell.has_converter {
                continue;
            }
            cell.has_converter = true;
            placed += 1;
        }

        Grid::from_cells(cells)
    }
}

fn random_coords(rng: &mut SmallRng, side: Coord) -> Coord2 {
    (rng.random_range(0..side), rng.random_range(0..side))
}

fn random_color(rng: &mut SmallRng) -> Color {
    Color::PALETTE[rng.random_range(0..Color::PALETTE.len())]
}

fn random_color_excluding(rng: &mut SmallRng, avoid: Color) -> Color {
    loop {
        let color = random_color(rng);
        if color != avoid {
            return color;
        }
    }
}
