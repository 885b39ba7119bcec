#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::env;
use std::time::Instant;

use rand::SeedableRng;
use torus_life::{Engine, TorusGrid};

#[derive(Clone, Debug)]
struct BenchConfig {
    rows: u32,
    cols: u32,
    density: f64,
    warmup: u64,
    iters: u64,
    seed: u64,
    json: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            rows: 512,
            cols: 512,
            density: 0.3,
            warmup: 3,
            iters: 200,
            seed: 0x5EED_1234_ABCD_EF01,
            json: false,
        }
    }
}

fn parse_args() -> BenchConfig {
    let mut cfg = BenchConfig::default();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--rows" => {
                if let Some(v) = args.next() {
                    cfg.rows = v.parse().expect("--rows expects u32");
                }
            }
            "--cols" => {
                if let Some(v) = args.next() {
                    cfg.cols = v.parse().expect("--cols expects u32");
                }
            }
            "--density" => {
                if let Some(v) = args.next() {
                    cfg.density = v.parse().expect("--density expects f64");
                }
            }
            "--warmup" => {
                if let Some(v) = args.next() {
                    cfg.warmup = v.parse().expect("--warmup expects u64");
                }
            }
            "--iters" => {
                if let Some(v) = args.next() {
                    cfg.iters = v.parse().expect("--iters expects u64");
                }
            }
            "--seed" => {
                if let Some(v) = args.next() {
                    cfg.seed = if let Some(hex) = v.strip_prefix("0x") {
                        u64::from_str_radix(hex, 16).expect("--seed hex parse failed")
                    } else {
                        v.parse().expect("--seed expects u64")
                    };
                }
            }
            "--json" => {
                cfg.json = true;
            }
            other => panic!("unknown arg: {other}"),
        }
    }
    cfg
}

fn main() {
    let cfg = parse_args();

    let mut grid = TorusGrid::new(cfg.rows, cfg.cols).expect("grid dimensions");
    let mut rng = rand::rngs::StdRng::seed_from_u64(cfg.seed);
    torus_life::seed(&mut grid, cfg.density, &mut rng).expect("density in [0, 1]");

    let mut engine = Engine::new();
    if cfg.warmup > 0 {
        engine.step_n(&mut grid, cfg.warmup);
    }

    let start = Instant::now();
    let report = engine.step_n(&mut grid, cfg.iters);
    let elapsed = start.elapsed();
    let total_ms = elapsed.as_secs_f64() * 1000.0;
    let avg_ms = total_ms / cfg.iters as f64;
    let population = report.alive;

    if cfg.json {
        println!(
            "{{\"rows\":{},\"cols\":{},\"density\":{},\"warmup\":{},\"iters\":{},\"seed\":{},\"total_ms\":{:.6},\"avg_ms\":{:.6},\"population\":{}}}",
            cfg.rows, cfg.cols, cfg.density, cfg.warmup, cfg.iters, cfg.seed, total_ms, avg_ms, population,
        );
    } else {
        println!(
            "rows={},cols={},density={},warmup={},iters={},seed={},total_ms={:.6},avg_ms={:.6},population={}",
            cfg.rows, cfg.cols, cfg.density, cfg.warmup, cfg.iters, cfg.seed, total_ms, avg_ms, population,
        );
    }
}
