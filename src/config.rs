//! Simulation configuration.

/// Recognized simulation options. Grid dimensions are decided externally
/// (e.g. from a surface size and a cell-size unit); this type just carries
/// them.
#[derive(Clone, Copy, Debug)]
pub struct LifeConfig {
    pub rows: u32,
    pub cols: u32,
    /// Fraction of cells activated by the initial seed, in `[0, 1]`.
    pub alive_ratio: f64,
    /// Fraction of the initial seed count below which a ring is injected.
    pub circle_drop_threshold: f64,
    /// Largest circle radius `maybe_seed` will pick. `0` means "derive from
    /// the grid": rows / 5, at least 1.
    pub max_circle_radius: u32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: 128,
            cols: 128,
            alive_ratio: 0.12,
            circle_drop_threshold: 0.25,
            max_circle_radius: 0,
        }
    }
}

impl LifeConfig {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn alive_ratio(mut self, ratio: f64) -> Self {
        self.alive_ratio = ratio;
        self
    }

    pub fn circle_drop_threshold(mut self, threshold: f64) -> Self {
        self.circle_drop_threshold = threshold;
        self
    }

    pub fn max_circle_radius(mut self, radius: u32) -> Self {
        self.max_circle_radius = radius;
        self
    }

    /// Number of cells the initial seed targets.
    pub fn seed_target(&self) -> u64 {
        ((self.rows as u64 * self.cols as u64) as f64 * self.alive_ratio).floor() as u64
    }

    /// Population below which `maybe_seed` injects a ring.
    pub fn drop_threshold_cells(&self) -> u32 {
        (self.seed_target() as f64 * self.circle_drop_threshold).floor() as u32
    }

    /// The configured max radius, or the grid-derived default.
    pub fn effective_max_radius(&self) -> u32 {
        if self.max_circle_radius > 0 {
            self.max_circle_radius
        } else {
            (self.rows / 5).max(1)
        }
    }
}
