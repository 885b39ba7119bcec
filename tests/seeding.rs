use rand::SeedableRng;
use torus_life::{
    CircleSeeder, Color, LifeConfig, LifeError, Position, Renderer, TorusGrid, seed,
};

/// Renderer that records every paint request.
#[derive(Default)]
struct RecordingRenderer {
    painted: Vec<(Position, Color)>,
}

impl Renderer for RecordingRenderer {
    fn set_color(&mut self, pos: Position, color: Color) {
        self.painted.push((pos, color));
    }

    fn clear(&mut self) {
        self.painted.clear();
    }
}

#[test]
fn seed_places_exactly_the_target_count() {
    let mut grid = TorusGrid::new(20, 30).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5EED);

    let placed = seed(&mut grid, 0.25, &mut rng).unwrap();

    // floor(20 * 30 * 0.25) = 150
    assert_eq!(placed, 150);
    assert_eq!(grid.population(), 150);
}

#[test]
fn seed_ratio_bounds_are_inclusive() {
    let mut grid = TorusGrid::new(4, 4).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);

    assert_eq!(seed(&mut grid, 0.0, &mut rng).unwrap(), 0);
    assert!(grid.is_empty());

    assert_eq!(seed(&mut grid, 1.0, &mut rng).unwrap(), 16);
    assert_eq!(grid.population(), 16);
}

#[test]
fn seed_tops_up_a_prepopulated_grid() {
    // The target is the total population, so seeding a grid that already has
    // live cells terminates even at ratio 1.0 instead of hunting for more
    // dead cells than exist.
    let mut grid = TorusGrid::new(4, 4).unwrap();
    grid.activate(Position::new(1, 1));
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    let placed = seed(&mut grid, 1.0, &mut rng).unwrap();

    assert_eq!(placed, 15);
    assert_eq!(grid.population(), 16);
}

#[test]
fn seed_is_a_noop_when_population_already_meets_target() {
    let mut grid = TorusGrid::new(4, 4).unwrap();
    for col in 0..4 {
        grid.activate(Position::new(0, col));
    }
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    // floor(16 * 0.25) = 4, already alive.
    let placed = seed(&mut grid, 0.25, &mut rng).unwrap();

    assert_eq!(placed, 0);
    assert_eq!(grid.population(), 4);
}

#[test]
fn seed_rejects_out_of_range_ratios() {
    let mut grid = TorusGrid::new(4, 4).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);

    assert_eq!(
        seed(&mut grid, -0.1, &mut rng).unwrap_err(),
        LifeError::InvalidRatio(-0.1)
    );
    assert_eq!(
        seed(&mut grid, 1.5, &mut rng).unwrap_err(),
        LifeError::InvalidRatio(1.5)
    );
    assert!(grid.is_empty());
}

#[test]
fn seed_is_deterministic_for_a_fixed_rng_seed() {
    let run = || {
        let mut grid = TorusGrid::new(16, 16).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(0xF17ED);
        seed(&mut grid, 0.2, &mut rng).unwrap();
        let mut live = Vec::new();
        grid.for_each_live(|pos| live.push(pos));
        live
    };
    assert_eq!(run(), run());
}

#[test]
fn draw_circle_never_lowers_population() {
    let mut grid = TorusGrid::new(24, 24).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    seed(&mut grid, 0.3, &mut rng).unwrap();
    let before = grid.population();

    let mut renderer = RecordingRenderer::default();
    CircleSeeder::draw_circle(
        &mut grid,
        &mut renderer,
        Color::new(0, 255, 0),
        Position::new(12, 12),
        5,
    );

    assert!(grid.population() >= before);
    assert!(!renderer.painted.is_empty());
}

#[test]
fn draw_circle_paints_every_activated_outline_cell() {
    let mut grid = TorusGrid::new(32, 32).unwrap();
    let mut renderer = RecordingRenderer::default();
    let color = Color::new(255, 0, 0);
    CircleSeeder::draw_circle(&mut grid, &mut renderer, color, Position::new(16, 16), 6);

    // Every live cell was painted, in the requested color.
    let mut live = Vec::new();
    grid.for_each_live(|pos| live.push(pos));
    assert!(!live.is_empty());
    for pos in &live {
        assert!(
            renderer.painted.iter().any(|&(p, c)| p == *pos && c == color),
            "outline cell ({}, {}) was never painted",
            pos.row,
            pos.col
        );
    }

    // The outline is 8-fold symmetric around the center.
    for pos in &live {
        let dr = pos.row as i64 - 16;
        let dc = pos.col as i64 - 16;
        let mirrored = grid.wrap(16 - dr, 16 + dc);
        assert!(
            grid.is_alive(mirrored),
            "missing mirror of ({}, {})",
            pos.row,
            pos.col
        );
    }
}

#[test]
fn draw_circle_radius_one_wraps_on_tiny_grid() {
    let mut grid = TorusGrid::new(3, 3).unwrap();
    let mut renderer = RecordingRenderer::default();
    CircleSeeder::draw_circle(
        &mut grid,
        &mut renderer,
        Color::default(),
        Position::new(0, 0),
        1,
    );

    // The four axis-adjacent cells, wrapped.
    assert!(grid.is_alive(Position::new(1, 0)));
    assert!(grid.is_alive(Position::new(2, 0)));
    assert!(grid.is_alive(Position::new(0, 1)));
    assert!(grid.is_alive(Position::new(0, 2)));
    assert!(!grid.is_alive(Position::new(0, 0)));
}

#[test]
fn maybe_seed_fires_only_between_zero_and_threshold() {
    let seeder = CircleSeeder::new(50, 4);
    let color = Color::default();

    let mut grid = TorusGrid::new(20, 20).unwrap();
    let mut renderer = RecordingRenderer::default();
    let mut rng = rand::rngs::StdRng::seed_from_u64(11);

    // Extinct population: no injection.
    assert!(!seeder.maybe_seed(&mut grid, &mut renderer, &mut rng, color, 0));
    assert!(grid.is_empty());

    // At or above threshold: no injection.
    assert!(!seeder.maybe_seed(&mut grid, &mut renderer, &mut rng, color, 50));
    assert!(!seeder.maybe_seed(&mut grid, &mut renderer, &mut rng, color, 200));
    assert!(grid.is_empty());

    // Under threshold: two concentric rings appear.
    assert!(seeder.maybe_seed(&mut grid, &mut renderer, &mut rng, color, 10));
    assert!(grid.population() > 0);
    assert!(!renderer.painted.is_empty());
}

#[test]
fn from_config_derives_threshold_and_radius() {
    let config = LifeConfig::new(100, 100)
        .alive_ratio(0.1)
        .circle_drop_threshold(0.2);

    // floor(100 * 100 * 0.1) = 1000 seed cells; threshold = floor(1000 * 0.2).
    assert_eq!(config.seed_target(), 1000);
    assert_eq!(config.drop_threshold_cells(), 200);
    assert_eq!(config.effective_max_radius(), 20);

    let seeder = CircleSeeder::from_config(&config);
    assert_eq!(seeder.threshold(), 200);
}
