use std::fmt;

use crate::Coord;
use rand::Rng;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Food,
    Snake,
}

#[derive(Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate outside the board reached `get`/`set`. Bounds are checked
    /// before indexing during normal play, so this indicates a bug.
    OutOfBounds(Coord),
    /// No empty cell left to place food on.
    NoEmptyCell,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds((row, col)) => {
                write!(f, "coordinate ({}, {}) is outside the grid", row, col)
            }
            GridError::NoEmptyCell => write!(f, "no empty cell left on the grid"),
        }
    }
}

impl std::error::Error for GridError {}

/// Fixed-size square board, one `Cell` per position, row-major.
pub struct Grid {
    size: u16,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: u16) -> Self {
        Grid { size, cells: vec![Cell::Empty; size as usize * size as usize] }
    }

    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::Empty;
        }
    }

    pub fn contains(&self, (row, col): Coord) -> bool {
        row < self.size && col < self.size
    }

    pub fn get(&self, coord: Coord) -> Result<Cell, GridError> {
        if !self.contains(coord) {
            return Err(GridError::OutOfBounds(coord));
        }
        Ok(self.cells[self.index(coord)])
    }

    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), GridError> {
        if !self.contains(coord) {
            return Err(GridError::OutOfBounds(coord));
        }
        let ix = self.index(coord);
        self.cells[ix] = cell;
        Ok(())
    }

    /// Uniformly random empty cell, by rejection sampling. The emptiness check
    /// up front keeps the retry loop finite on a full board.
    pub fn random_empty_cell(&self, rng: &mut impl Rng) -> Result<Coord, GridError> {
        if self.count(Cell::Empty) == 0 {
            return Err(GridError::NoEmptyCell);
        }

        loop {
            let coord = (rng.gen_range(0..self.size), rng.gen_range(0..self.size));
            if self.cells[self.index(coord)] == Cell::Empty {
                return Ok(coord);
            }
        }
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let size = self.size as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (((i / size) as u16, (i % size) as u16), cell))
    }

    fn index(&self, (row, col): Coord) -> usize {
        row as usize * self.size as usize + col as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_grid_is_all_empty() {
        let grid = Grid::new(10);
        assert_eq!(grid.count(Cell::Empty), 100);
        assert_eq!(grid.get((0, 0)), Ok(Cell::Empty));
        assert_eq!(grid.get((9, 9)), Ok(Cell::Empty));
    }

    #[test]
    fn set_and_get_roundtrip() {
        let mut grid = Grid::new(10);
        grid.set((3, 7), Cell::Food).unwrap();
        grid.set((5, 5), Cell::Snake).unwrap();

        assert_eq!(grid.get((3, 7)), Ok(Cell::Food));
        assert_eq!(grid.get((5, 5)), Ok(Cell::Snake));
        assert_eq!(grid.count(Cell::Food), 1);
        assert_eq!(grid.count(Cell::Snake), 1);
        assert_eq!(grid.count(Cell::Empty), 98);
    }

    #[test]
    fn out_of_bounds_access_fails() {
        let mut grid = Grid::new(10);
        assert_eq!(grid.get((10, 0)), Err(GridError::OutOfBounds((10, 0))));
        assert_eq!(grid.get((0, 10)), Err(GridError::OutOfBounds((0, 10))));
        assert_eq!(grid.set((10, 10), Cell::Food), Err(GridError::OutOfBounds((10, 10))));
    }

    #[test]
    fn reset_clears_everything() {
        let mut grid = Grid::new(4);
        grid.set((1, 1), Cell::Snake).unwrap();
        grid.set((2, 2), Cell::Food).unwrap();

        grid.reset();
        assert_eq!(grid.count(Cell::Empty), 16);
    }

    #[test]
    fn random_empty_cell_only_returns_empty_cells() {
        let mut grid = Grid::new(3);
        // Fill everything except (2, 1)
        for (coord, _) in Grid::new(3).cells() {
            if coord != (2, 1) {
                grid.set(coord, Cell::Snake).unwrap();
            }
        }

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(grid.random_empty_cell(&mut rng), Ok((2, 1)));
        }
    }

    #[test]
    fn random_empty_cell_on_full_grid_fails() {
        let mut grid = Grid::new(2);
        for (coord, _) in Grid::new(2).cells() {
            grid.set(coord, Cell::Snake).unwrap();
        }

        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(grid.random_empty_cell(&mut rng), Err(GridError::NoEmptyCell));
    }

    #[test]
    fn cells_iterates_in_row_major_order() {
        let mut grid = Grid::new(2);
        grid.set((1, 0), Cell::Food).unwrap();

        let all: Vec<_> = grid.cells().collect();
        assert_eq!(all, vec![
            ((0, 0), Cell::Empty),
            ((0, 1), Cell::Empty),
            ((1, 0), Cell::Food),
            ((1, 1), Cell::Empty),
        ]);
    }
}
