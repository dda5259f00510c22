//! Character raster backend
//!
//! Snaps every glyph to the nearest cell of a fixed-size grid, which turns a
//! projection back into a compact picture suitable for a terminal.

use glam::DVec2;

use super::surface::Surface;
use super::types::FontSpec;
use crate::types::MAX_CELLS;

#[derive(Debug, Clone)]
pub struct TextSurface {
    cell_size: f64,
    cols: usize,
    rows: usize,
    cells: Vec<char>,
    font: Option<FontSpec>,
}

impl TextSurface {
    /// `cell_size` must match the projection that produced the glyphs
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            cols: 0,
            rows: 0,
            cells: Vec::new(),
            font: None,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Last font directive received. Recorded only; a raster has one face.
    pub fn font(&self) -> Option<&FontSpec> {
        self.font.as_ref()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// One line per raster row, each ending in `\n`
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for line in self.cells.chunks(self.cols.max(1)).take(self.rows) {
            out.extend(line);
            out.push('\n');
        }
        out
    }

    /// Cells along one axis for a surface of `extent` pixels, minus the margin cell
    fn cells_along(&self, extent: f64) -> usize {
        let n = (extent / self.cell_size).round();
        if n.is_finite() && n >= 1.0 {
            n as usize - 1
        } else {
            0
        }
    }

    fn cell_index(&self, coord: f64) -> Option<usize> {
        let n = (coord / self.cell_size).round();
        if n.is_finite() && n >= 1.0 {
            Some(n as usize - 1)
        } else {
            None
        }
    }
}

impl Surface for TextSurface {
    fn resize(&mut self, size: DVec2) {
        let cols = self.cells_along(size.x);
        let rows = self.cells_along(size.y);
        match cols.checked_mul(rows) {
            Some(len) if len <= MAX_CELLS => {
                self.cols = cols;
                self.rows = rows;
                self.cells = vec![' '; len];
            }
            _ => {
                crate::log::warn!(cols, rows, "text surface too large, drawing nothing");
                self.cols = 0;
                self.rows = 0;
                self.cells = Vec::new();
            }
        }
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.font = Some(font.clone());
    }

    fn draw_glyph(&mut self, ch: char, at: DVec2) {
        match (self.cell_index(at.y), self.cell_index(at.x)) {
            (Some(row), Some(col)) if row < self.rows && col < self.cols => {
                self.cells[row * self.cols + col] = ch;
            }
            _ => {
                crate::log::warn!(?ch, x = at.x, y = at.y, "glyph outside text surface");
            }
        }
    }
}
