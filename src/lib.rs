//! Rectangular boxes drawn with box-drawing corners and ASCII borders.
//!
//! ```
//! let grid = asciibox::BoxGrid::create(3, 3).unwrap();
//! assert_eq!(grid.to_text(), "┌ - ┐\n|   |\n└ - ┘\n");
//! ```
//!
//! A box can also be projected to pixel coordinates and drawn on any
//! [`Surface`], such as the bundled [`SvgSurface`] and [`TextSurface`].

pub mod errors;
pub mod grid;
#[doc(hidden)]
pub mod log;
pub mod render;
pub mod types;

pub use errors::{BoxError, RenderError};
pub use grid::BoxGrid;
pub use render::{
    FontSpec, PlacedGlyph, ProjectionConfig, RenderOptions, Surface, SurfaceKind, SvgSurface,
    TextSurface, draw_on,
};
pub use types::{Axis, RawDimension};

/// Build a box and return its text form.
///
/// Returns the text on success, or an error with diagnostics.
pub fn render_text(
    width: impl Into<RawDimension>,
    height: impl Into<RawDimension>,
) -> Result<String, miette::Report> {
    let grid = BoxGrid::create(width, height)?;
    Ok(grid.to_text())
}
