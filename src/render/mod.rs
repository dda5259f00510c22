//! Projecting a box onto drawing surfaces
//!
//! This module is organized into submodules:
//! - `defaults`: Default cell size, dash offset and font
//! - `types`: PlacedGlyph, ProjectionConfig, FontSpec, RenderOptions
//! - `surface`: the Surface capability and the SurfaceKind dispatch enum
//! - `svg`: SVG backend
//! - `text`: character raster backend

pub mod defaults;
pub mod surface;
pub mod svg;
pub mod text;
pub mod types;

// Re-export commonly used items
pub use surface::{Surface, SurfaceKind};
pub use svg::SvgSurface;
pub use text::TextSurface;
pub use types::*;

use crate::errors::RenderError;
use crate::grid::BoxGrid;

/// Draw `grid` onto `surface`.
///
/// The surface is resized to fit the box plus a one-cell margin, handed the
/// font, then receives one `draw_glyph` call per cell in row-major order.
/// Returns the glyphs that were drawn.
pub fn draw_on<S: Surface + ?Sized>(
    grid: &BoxGrid,
    surface: &mut S,
    options: &RenderOptions,
) -> Result<Vec<PlacedGlyph>, RenderError> {
    let projection = &options.projection;
    if !projection.cell_size.is_finite() || projection.cell_size <= 0.0 {
        return Err(RenderError::InvalidCellSize {
            value: projection.cell_size,
        });
    }
    if !projection.dash_y_offset.is_finite() {
        return Err(RenderError::InvalidDashOffset {
            value: projection.dash_y_offset,
        });
    }

    let size = grid.surface_size(projection.cell_size);
    let glyphs = grid.project(projection);
    crate::log::debug!(
        surface_w = size.x,
        surface_h = size.y,
        glyphs = glyphs.len(),
        font = %options.font,
        "drawing box"
    );

    surface.resize(size);
    surface.set_font(&options.font);
    for glyph in &glyphs {
        surface.draw_glyph(glyph.ch, glyph.pos);
    }
    Ok(glyphs)
}

/// Render a box as an SVG document with default options
pub fn to_svg(grid: &BoxGrid) -> Result<String, RenderError> {
    let mut surface = SvgSurface::new();
    draw_on(grid, &mut surface, &RenderOptions::default())?;
    surface.finish()
}
