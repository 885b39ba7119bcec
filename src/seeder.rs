//! Random and patterned seeding.
//!
//! Both seeders mutate the grid exclusively through `activate`, so neighbor
//! counts stay exact and repeated hits on the same cell are no-ops.

use log::debug;
use rand::Rng;

use crate::config::LifeConfig;
use crate::error::{LifeError, LifeResult};
use crate::grid::{Position, TorusGrid};
use crate::render::{Color, Renderer};

/// Activates uniformly random dead cells until
/// `floor(rows * cols * alive_ratio)` distinct cells are alive in total.
/// Returns the number of cells placed by this call.
///
/// The target counts the whole population, so seeding an already-populated
/// grid tops it up (and is a no-op once the population meets the target)
/// rather than chasing a count the grid cannot reach. Each successful draw
/// strictly shrinks the set of remaining dead cells, so this terminates
/// without an attempt cap; ratios near 1 degrade to a coupon collector but
/// stay correct.
pub fn seed<R: Rng + ?Sized>(
    grid: &mut TorusGrid,
    alive_ratio: f64,
    rng: &mut R,
) -> LifeResult<u32> {
    if !(0.0..=1.0).contains(&alive_ratio) {
        return Err(LifeError::InvalidRatio(alive_ratio));
    }

    let target =
        ((grid.rows() as u64 * grid.cols() as u64) as f64 * alive_ratio).floor() as u64;
    let mut alive = grid.population() as u64;
    let mut placed = 0u64;
    while alive < target {
        let pos = Position::new(
            rng.random_range(0..grid.rows()),
            rng.random_range(0..grid.cols()),
        );
        if !grid.is_alive(pos) {
            grid.activate(pos);
            alive += 1;
            placed += 1;
        }
    }
    debug!("seeded {placed} cells (ratio {alive_ratio})");
    Ok(placed as u32)
}

/// Injects circle-outline patterns when the population collapses.
#[derive(Clone, Copy, Debug)]
pub struct CircleSeeder {
    threshold: u32,
    max_radius: u32,
}

impl CircleSeeder {
    /// `threshold` is the population below which a ring is injected;
    /// `max_radius` is clamped to at least 1.
    pub fn new(threshold: u32, max_radius: u32) -> Self {
        Self {
            threshold,
            max_radius: max_radius.max(1),
        }
    }

    pub fn from_config(config: &LifeConfig) -> Self {
        Self::new(config.drop_threshold_cells(), config.effective_max_radius())
    }

    #[inline]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Rasterizes a circle outline onto the torus with the integer midpoint
    /// algorithm, activating every outline cell and reporting it to the
    /// renderer in `color`.
    ///
    /// All 8 octant-symmetric points are plotted per iteration; duplicates at
    /// octant boundaries collapse because `activate` is idempotent. Cells are
    /// only ever activated, never deactivated.
    pub fn draw_circle<R: Renderer>(
        grid: &mut TorusGrid,
        renderer: &mut R,
        color: Color,
        center: Position,
        radius: u32,
    ) {
        let (cr, cc) = (center.row as i64, center.col as i64);
        let mut x = radius as i64;
        let mut y = 0i64;
        let mut error = 1 - x;

        while x >= y {
            let points = [
                (cr + x, cc + y),
                (cr + x, cc - y),
                (cr - x, cc + y),
                (cr - x, cc - y),
                (cr + y, cc + x),
                (cr + y, cc - x),
                (cr - y, cc + x),
                (cr - y, cc - x),
            ];
            for (row, col) in points {
                let pos = grid.wrap(row, col);
                grid.activate(pos);
                renderer.set_color(pos, color);
            }
            y += 1;
            if error < 0 {
                error += 2 * y + 1;
            } else {
                x -= 1;
                error += 2 * (y - x + 1);
            }
        }
    }

    /// Draws two concentric circles (radius `r` and `r + 2`, `r` uniform in
    /// `[1, max_radius]`) at a random center if the population is above zero
    /// but under the threshold. The ring gap tends to reintroduce gliders and
    /// oscillators. Returns whether anything was drawn.
    pub fn maybe_seed<G, R>(
        &self,
        grid: &mut TorusGrid,
        renderer: &mut R,
        rng: &mut G,
        color: Color,
        alive_count: u32,
    ) -> bool
    where
        G: Rng + ?Sized,
        R: Renderer,
    {
        if alive_count == 0 || alive_count >= self.threshold {
            return false;
        }
        let radius = rng.random_range(1..=self.max_radius);
        let center = Position::new(
            rng.random_range(0..grid.rows()),
            rng.random_range(0..grid.cols()),
        );
        debug!(
            "population {alive_count} under threshold {}: injecting ring at \
             ({}, {}) radius {radius}",
            self.threshold, center.row, center.col
        );
        Self::draw_circle(grid, renderer, color, center, radius);
        Self::draw_circle(grid, renderer, color, center, radius + 2);
        true
    }
}
