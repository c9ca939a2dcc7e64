use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for cell counts and capture totals.
pub type CellCount = u16;

/// Capture-order tag assigned as the controlled region expands.
pub type Wave = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let dim = self.dim();
        let size = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        NeighborIter::new(index, size)
    }
}

// capture adjacency is orthogonal, diagonals never qualify
const DISPLACEMENTS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

/// All in-bounds cells within Manhattan distance `radius` of `center`, the
/// center itself included.
pub fn iter_blast(center: Coord2, radius: Coord, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    let radius = radius as isize;
    (-radius..=radius).flat_map(move |d_row| {
        let span = radius - d_row.abs();
        (-span..=span).filter_map(move |d_col| apply_delta(center, (d_row, d_col), bounds))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn neighbor_iter_respects_grid_edges() {
        let board: Array2<u8> = Array2::default([3, 3]);

        let corner: Vec<Coord2> = board.iter_neighbors((0, 0)).collect();
        assert_eq!(corner, [(0, 1), (1, 0)]);

        let center: Vec<Coord2> = board.iter_neighbors((1, 1)).collect();
        assert_eq!(center.len(), 4);
        assert!(!center.contains(&(0, 0)));
    }

    #[test]
    fn blast_covers_manhattan_disc() {
        let cells: Vec<Coord2> = iter_blast((2, 2), 1, (5, 5)).collect();
        assert_eq!(cells.len(), 5);
        assert!(cells.contains(&(2, 2)));
        assert!(cells.contains(&(1, 2)));
        assert!(!cells.contains(&(1, 1)));
    }

    #[test]
    fn blast_is_clipped_at_corners() {
        let cells: Vec<Coord2> = iter_blast((0, 0), 2, (5, 5)).collect();
        assert_eq!(cells.len(), 6);
    }
}
