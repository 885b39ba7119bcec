#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::time::Instant;

use log::info;
use rand::SeedableRng;
use torus_life::{CircleSeeder, Color, Engine, LifeConfig, NullRenderer, TorusGrid};

const CHECK_INTERVAL: u64 = 100;

struct MainArgs {
    config: LifeConfig,
    generations: u64,
    seed: u64,
}

fn parse_args() -> MainArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut config = LifeConfig::default();
    let mut generations = 1000u64;
    let mut seed = 0x5EED_0F11_FE00_D00Du64;
    let next_arg = |i: usize, flag: &str| -> &str {
        args.get(i)
            .map(String::as_str)
            .unwrap_or_else(|| panic!("{flag} requires a value"))
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rows" => {
                i += 1;
                config.rows = next_arg(i, "--rows")
                    .parse()
                    .expect("--rows requires a positive integer");
            }
            "--cols" => {
                i += 1;
                config.cols = next_arg(i, "--cols")
                    .parse()
                    .expect("--cols requires a positive integer");
            }
            "--ratio" => {
                i += 1;
                let ratio: f64 = next_arg(i, "--ratio")
                    .parse()
                    .expect("--ratio requires a float in [0, 1]");
                config = config.alive_ratio(ratio);
            }
            "--drop-threshold" => {
                i += 1;
                let threshold: f64 = next_arg(i, "--drop-threshold")
                    .parse()
                    .expect("--drop-threshold requires a float");
                config = config.circle_drop_threshold(threshold);
            }
            "--max-radius" => {
                i += 1;
                let radius: u32 = next_arg(i, "--max-radius")
                    .parse()
                    .expect("--max-radius requires an integer");
                config = config.max_circle_radius(radius);
            }
            "--generations" => {
                i += 1;
                generations = next_arg(i, "--generations")
                    .parse()
                    .expect("--generations requires an integer");
            }
            "--seed" => {
                i += 1;
                let v = next_arg(i, "--seed");
                seed = if let Some(hex) = v.strip_prefix("0x") {
                    u64::from_str_radix(hex, 16).expect("--seed hex parse failed")
                } else {
                    v.parse().expect("--seed expects u64")
                };
            }
            other => panic!(
                "unknown argument: {other}\nusage: torus-life [--rows N] [--cols N] \
                 [--ratio F] [--drop-threshold F] [--max-radius N] [--generations N] \
                 [--seed N]"
            ),
        }
        i += 1;
    }
    MainArgs {
        config,
        generations,
        seed,
    }
}

fn main() {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .expect("init logger");

    let args = parse_args();
    let config = args.config;

    let mut grid = TorusGrid::new(config.rows, config.cols).expect("grid dimensions");
    let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
    let placed =
        torus_life::seed(&mut grid, config.alive_ratio, &mut rng).expect("alive ratio");
    info!(
        "seeded {placed} cells on a {}x{} torus",
        config.rows, config.cols
    );

    let mut engine = Engine::new();
    let mut renderer = NullRenderer;
    let circle_seeder = CircleSeeder::from_config(&config);
    let color = Color::new(0xff, 0xff, 0xff);
    let mut rings = 0u64;

    let start = Instant::now();
    let mut alive = placed;
    for _ in 0..args.generations {
        let report = engine.step(&mut grid);
        alive = report.alive;
        if circle_seeder.maybe_seed(&mut grid, &mut renderer, &mut rng, color, alive) {
            rings += 1;
            alive = grid.population();
        }
        if engine.generation() % CHECK_INTERVAL == 0 {
            println!(
                "Generation {}: population = {alive}, rings injected = {rings}",
                engine.generation()
            );
        }
    }
    let elapsed = start.elapsed();
    let total_ms = elapsed.as_secs_f64() * 1000.0;
    let avg_ms = total_ms / args.generations.max(1) as f64;

    println!("\n--- Summary ({} generations) ---", args.generations);
    println!("Final population: {alive}");
    println!("Rings injected: {rings}");
    println!("{total_ms:.3} ms total, {avg_ms:.6} ms/gen");
}
