//! Core types for projecting a box onto a drawing surface

use std::fmt;

use glam::{DVec2, dvec2};

use super::defaults;

/// A character paired with the pixel position it is drawn at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph {
    pub ch: char,
    /// Horizontal center and baseline of the glyph
    pub pos: DVec2,
}

impl PlacedGlyph {
    pub fn new(ch: char, pos_x: f64, pos_y: f64) -> Self {
        Self {
            ch,
            pos: dvec2(pos_x, pos_y),
        }
    }

    #[inline]
    pub fn pos_x(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn pos_y(&self) -> f64 {
        self.pos.y
    }
}

/// How grid cells map to pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// Distance between neighbouring cells, in pixels
    pub cell_size: f64,
    /// Added to the y coordinate of every `-` glyph
    pub dash_y_offset: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            cell_size: defaults::CELL_SIZE,
            dash_y_offset: defaults::DASH_Y_OFFSET,
        }
    }
}

impl ProjectionConfig {
    pub fn new(cell_size: f64, dash_y_offset: f64) -> Self {
        Self {
            cell_size,
            dash_y_offset,
        }
    }

    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_dash_y_offset(mut self, dash_y_offset: f64) -> Self {
        self.dash_y_offset = dash_y_offset;
        self
    }

    /// Pixel position of the cell at (`row`, `col`) holding `ch`
    pub fn place(&self, row: usize, col: usize, ch: char) -> PlacedGlyph {
        let pos_x = (col + 1) as f64 * self.cell_size;
        let mut pos_y = (row + 1) as f64 * self.cell_size;
        if ch == '-' {
            pos_y += self.dash_y_offset;
        }
        PlacedGlyph::new(ch, pos_x, pos_y)
    }
}

/// Font directive handed to a surface before drawing
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub size_px: f64,
    pub family: String,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::monospace(defaults::FONT_SIZE_PX)
    }
}

impl FontSpec {
    pub fn new(size_px: f64, family: impl Into<String>) -> Self {
        Self {
            size_px,
            family: family.into(),
        }
    }

    pub fn monospace(size_px: f64) -> Self {
        Self::new(size_px, defaults::FONT_FAMILY)
    }
}

/// CSS font shorthand, e.g. `12px monospace`
impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}", self.size_px, self.family)
    }
}

/// Everything `draw_on` needs besides the grid and the surface
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderOptions {
    pub projection: ProjectionConfig,
    pub font: FontSpec,
}

impl RenderOptions {
    pub fn with_projection(mut self, projection: ProjectionConfig) -> Self {
        self.projection = projection;
        self
    }

    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.font = font;
        self
    }
}
