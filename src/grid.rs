//! The toroidal grid: cell storage, coordinate wrapping, and the
//! count-preserving mutation primitives.
//!
//! Neighbor counts are maintained incrementally: activating or deactivating a
//! cell adjusts the stored count of each of its 8 neighbors, so a generation
//! step never has to re-derive counts with a full 8-way rescan.

use crate::cell::{Direction, PackedCell};
use crate::error::{LifeError, LifeResult};

/// An in-range grid coordinate. `TorusGrid::wrap` is the only constructor
/// path for arbitrary integers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    #[inline]
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// A fixed-size grid whose edges wrap around. Owns every cell; entries are
/// only ever written through [`activate`](TorusGrid::activate) and
/// [`deactivate`](TorusGrid::deactivate), which keep the packed neighbor
/// counts exact.
#[derive(Debug)]
pub struct TorusGrid {
    rows: u32,
    cols: u32,
    cells: Vec<PackedCell>,
}

impl TorusGrid {
    /// Creates an all-dead grid. Fails if either dimension is zero.
    pub fn new(rows: u32, cols: u32) -> LifeResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![PackedCell::DEAD; rows as usize * cols as usize],
        })
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Whether no cell is alive.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Reduces any integer coordinates into range with true modulo, so
    /// `-1` wraps to `dim - 1` and `dim` wraps to `0`.
    #[inline]
    pub fn wrap(&self, row: i64, col: i64) -> Position {
        Position {
            row: row.rem_euclid(self.rows as i64) as u32,
            col: col.rem_euclid(self.cols as i64) as u32,
        }
    }

    /// The wrapped position one step from `pos` in `direction`.
    #[inline]
    pub fn neighbor_position(&self, pos: Position, direction: Direction) -> Position {
        let (dr, dc) = direction.offset();
        self.wrap(pos.row as i64 + dr, pos.col as i64 + dc)
    }

    #[inline]
    fn index(&self, pos: Position) -> usize {
        debug_assert!(pos.row < self.rows && pos.col < self.cols);
        pos.row as usize * self.cols as usize + pos.col as usize
    }

    #[inline]
    pub fn cell(&self, pos: Position) -> PackedCell {
        self.cells[self.index(pos)]
    }

    #[inline]
    pub fn is_alive(&self, pos: Position) -> bool {
        self.cell(pos).is_alive()
    }

    /// The cached count of live cells among the 8 neighbor visits.
    #[inline]
    pub fn neighbor_count(&self, pos: Position) -> u8 {
        self.cell(pos).neighbor_count()
    }

    /// Read-only row-major view of the cells, for snapshotting.
    #[inline]
    pub fn cells(&self) -> &[PackedCell] {
        &self.cells
    }

    /// Sets the cell alive and increments each neighbor's count. No-op if
    /// already alive.
    ///
    /// All 8 directions are visited exactly once each. On grids with a
    /// dimension of 1 or 2 several directions land on the same cell; each
    /// landing increments independently, which is what keeps `deactivate` an
    /// exact inverse.
    pub fn activate(&mut self, pos: Position) {
        let idx = self.index(pos);
        if self.cells[idx].is_alive() {
            return;
        }
        self.cells[idx] = self.cells[idx].set_alive();
        for direction in Direction::ALL {
            let nidx = self.index(self.neighbor_position(pos, direction));
            let cell = self.cells[nidx];
            self.cells[nidx] = cell.with_neighbor_count(cell.neighbor_count() + 1);
        }
    }

    /// Sets the cell dead and decrements each neighbor's count. No-op if
    /// already dead.
    pub fn deactivate(&mut self, pos: Position) {
        let idx = self.index(pos);
        if !self.cells[idx].is_alive() {
            return;
        }
        self.cells[idx] = self.cells[idx].set_dead();
        for direction in Direction::ALL {
            let nidx = self.index(self.neighbor_position(pos, direction));
            let cell = self.cells[nidx];
            debug_assert!(cell.neighbor_count() > 0);
            self.cells[nidx] = cell.with_neighbor_count(cell.neighbor_count() - 1);
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> u32 {
        self.cells.iter().filter(|cell| cell.is_alive()).count() as u32
    }

    /// Visits every live cell in row-major order.
    pub fn for_each_live<F: FnMut(Position)>(&self, mut f: F) {
        for (idx, cell) in self.cells.iter().enumerate() {
            if cell.is_alive() {
                f(Position {
                    row: (idx / self.cols as usize) as u32,
                    col: (idx % self.cols as usize) as u32,
                });
            }
        }
    }
}
