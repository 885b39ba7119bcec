//! Toroidal Conway's Game of Life engine (B3/S23) with packed per-cell
//! neighbor counts.
//!
//! Each cell caches its live-neighbor count next to its alive bit, and the
//! grid's activate/deactivate primitives keep those counts exact
//! incrementally, so a generation step is a single scan over a snapshot
//! instead of an 8-way recount per cell. Seeding (random fill and
//! midpoint-circle rings) reuses the same wrapping and mutation primitives.

pub mod cell;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod render;
pub mod seeder;

pub use cell::{Direction, PackedCell};
pub use config::LifeConfig;
pub use engine::{Engine, LiveCell, StepReport};
pub use error::{LifeError, LifeResult};
pub use grid::{Position, TorusGrid};
pub use render::{Color, NullRenderer, Renderer};
pub use seeder::{CircleSeeder, seed};
