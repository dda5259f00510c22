//! Drawing surface capability
//!
//! A surface is anything that can be sized, told which font to use, and asked
//! to draw a single character at a pixel position. Grid math never depends on
//! a concrete backend; `draw_on` only talks to this trait.

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use super::svg::SvgSurface;
use super::text::TextSurface;
use super::types::FontSpec;

/// Common behavior for all drawing backends
#[enum_dispatch]
pub trait Surface {
    /// Set the drawable area in pixels. Clears anything drawn so far.
    fn resize(&mut self, size: DVec2);

    /// Font used by subsequent `draw_glyph` calls
    fn set_font(&mut self, font: &FontSpec);

    /// Draw `ch` horizontally centered on `at.x`, with its baseline at `at.y`
    fn draw_glyph(&mut self, ch: char, at: DVec2);
}

/// Built-in backends, for callers that pick one at runtime
#[enum_dispatch(Surface)]
#[derive(Debug, Clone)]
pub enum SurfaceKind {
    Svg(SvgSurface),
    Text(TextSurface),
}
