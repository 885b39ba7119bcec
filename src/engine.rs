//! Generation stepping.
//!
//! A step snapshots the packed cells before mutating anything: every
//! survive/death/birth decision reads the pre-step state, so processing order
//! cannot leak an update into a neighbor's decision within the same
//! generation. Mutations go through the grid's activate/deactivate
//! primitives, which keep the cached neighbor counts exact for the next step.

use log::trace;

use crate::cell::PackedCell;
use crate::grid::{Position, TorusGrid};

/// A cell that is alive after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiveCell {
    pub pos: Position,
    /// Whether this cell was born this generation (as opposed to surviving).
    pub born: bool,
}

/// Result of advancing one generation.
#[derive(Clone, Debug, Default)]
pub struct StepReport {
    /// Live cells after the step.
    pub alive: u32,
    /// Every cell alive after the step, in row-major order. Renderers repaint
    /// all of them each generation, so survivors are included alongside
    /// births.
    pub cells: Vec<LiveCell>,
}

/// Applies the B3/S23 rule one generation at a time.
pub struct Engine {
    generation: u64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self { generation: 0 }
    }

    /// Generations stepped so far.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances the grid one generation.
    pub fn step(&mut self, grid: &mut TorusGrid) -> StepReport {
        let snapshot: Vec<PackedCell> = grid.cells().to_vec();
        let cols = grid.cols() as usize;
        let mut report = StepReport::default();

        for (idx, &cell) in snapshot.iter().enumerate() {
            // Dead with zero neighbors: cannot change, and is the common case.
            if cell.is_untouched() {
                continue;
            }
            let pos = Position::new((idx / cols) as u32, (idx % cols) as u32);
            let count = cell.neighbor_count();
            if cell.is_alive() {
                if count == 2 || count == 3 {
                    report.alive += 1;
                    report.cells.push(LiveCell { pos, born: false });
                } else {
                    grid.deactivate(pos);
                }
            } else if count == 3 {
                grid.activate(pos);
                report.alive += 1;
                report.cells.push(LiveCell { pos, born: true });
            }
        }

        self.generation += 1;
        trace!(
            "generation {} complete: {} alive",
            self.generation, report.alive
        );
        report
    }

    /// Advances `n` generations, returning the last report.
    pub fn step_n(&mut self, grid: &mut TorusGrid, n: u64) -> StepReport {
        let mut report = StepReport::default();
        for _ in 0..n {
            report = self.step(grid);
        }
        report
    }
}
