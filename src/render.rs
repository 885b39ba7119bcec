//! The rendering boundary.
//!
//! The core never reads pixel state back; it only pushes "paint this cell in
//! this color" and "clear the surface" requests through this trait.

use crate::grid::Position;

/// An RGB color, already converted from whatever color model the frontend
/// cycles through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Something that can paint grid cells.
pub trait Renderer {
    /// Paints one cell's visual slot.
    fn set_color(&mut self, pos: Position, color: Color);

    /// Erases the visual surface.
    fn clear(&mut self);
}

/// Discards all draw requests. Used by headless binaries and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn set_color(&mut self, _pos: Position, _color: Color) {}

    fn clear(&mut self) {}
}
