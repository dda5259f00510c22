//! The box itself: validated dimensions plus the character grid

use std::fmt;
use std::io;

use glam::{DVec2, dvec2};

use crate::errors::BoxError;
use crate::render::{PlacedGlyph, ProjectionConfig};
use crate::types::{RawDimension, validate_dimensions};

pub const TOP_LEFT: char = '┌';
pub const TOP_RIGHT: char = '┐';
pub const BOTTOM_LEFT: char = '└';
pub const BOTTOM_RIGHT: char = '┘';
pub const HORIZONTAL: char = '-';
pub const VERTICAL: char = '|';
pub const INTERIOR: char = ' ';

/// A rectangular box of border and fill characters.
///
/// The grid is computed once in the constructor and never changes, so every
/// projection of the same box yields the same result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxGrid {
    width: usize,
    height: usize,
    rows: Vec<Vec<char>>,
}

impl BoxGrid {
    /// Build a box from loosely typed dimensions.
    ///
    /// Fails with [`BoxError::InvalidDimensionType`] if either value is not a
    /// whole number, then with [`BoxError::InvalidDimensionRange`] if either
    /// is smaller than 2.
    pub fn create(
        width: impl Into<RawDimension>,
        height: impl Into<RawDimension>,
    ) -> Result<Self, BoxError> {
        let (width, height) = validate_dimensions(&width.into(), &height.into())?;
        crate::log::debug!(width, height, "building box grid");

        let mut rows = Vec::with_capacity(height);
        rows.push(row(TOP_LEFT, HORIZONTAL, TOP_RIGHT, width));
        for _ in 2..height {
            rows.push(row(VERTICAL, INTERIOR, VERTICAL, width));
        }
        rows.push(row(BOTTOM_LEFT, HORIZONTAL, BOTTOM_RIGHT, width));

        Ok(Self {
            width,
            height,
            rows,
        })
    }

    /// Build a box from already-typed dimensions
    pub fn new(width: usize, height: usize) -> Result<Self, BoxError> {
        Self::create(width, height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Rows top to bottom, each `width` characters long
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row)?.get(col).copied()
    }

    /// Characters in a row separated by a space, one line per row, each line
    /// ending in `\n`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Write [`to_text`](Self::to_text) to a caller-chosen sink
    pub fn write_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// One glyph per cell in row-major order
    pub fn project(&self, config: &ProjectionConfig) -> Vec<PlacedGlyph> {
        let mut glyphs = Vec::with_capacity(self.width * self.height);
        for (r, chars) in self.rows.iter().enumerate() {
            for (c, &ch) in chars.iter().enumerate() {
                glyphs.push(config.place(r, c, ch));
            }
        }
        glyphs
    }

    /// Surface size that leaves one empty cell of margin on every side
    pub fn surface_size(&self, cell_size: f64) -> DVec2 {
        dvec2(
            (self.width + 1) as f64 * cell_size,
            (self.height + 1) as f64 * cell_size,
        )
    }
}

impl fmt::Display for BoxGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chars in &self.rows {
            for (i, ch) in chars.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{ch}")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// `first`, then `width - 2` copies of `fill`, then `last`
fn row(first: char, fill: char, last: char, width: usize) -> Vec<char> {
    let mut chars = Vec::with_capacity(width);
    chars.push(first);
    chars.extend(std::iter::repeat_n(fill, width.saturating_sub(2)));
    chars.push(last);
    chars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_of_two_has_no_fill() {
        assert_eq!(row('┌', '-', '┐', 2), vec!['┌', '┐']);
        assert_eq!(row('|', ' ', '|', 4), vec!['|', ' ', ' ', '|']);
    }

    #[test]
    fn grid_matches_dimensions() {
        let grid = BoxGrid::new(31, 120).unwrap();
        assert_eq!(grid.rows().len(), 120);
        assert!(grid.rows().iter().all(|r| r.len() == 31));
    }

    #[test]
    fn corners_and_borders() {
        let grid = BoxGrid::new(4, 3).unwrap();
        assert_eq!(grid.get(0, 0), Some(TOP_LEFT));
        assert_eq!(grid.get(0, 3), Some(TOP_RIGHT));
        assert_eq!(grid.get(2, 0), Some(BOTTOM_LEFT));
        assert_eq!(grid.get(2, 3), Some(BOTTOM_RIGHT));
        assert_eq!(grid.get(1, 0), Some(VERTICAL));
        assert_eq!(grid.get(1, 1), Some(INTERIOR));
        assert_eq!(grid.get(0, 2), Some(HORIZONTAL));
        assert_eq!(grid.get(3, 0), None);
    }

    #[test]
    fn height_two_has_no_interior() {
        let grid = BoxGrid::new(5, 2).unwrap();
        assert_eq!(grid.rows().len(), 2);
        assert!(!grid.rows().iter().flatten().any(|&c| c == INTERIOR));
    }

    #[test]
    fn write_to_matches_to_text() {
        let grid = BoxGrid::new(3, 3).unwrap();
        let mut out = Vec::new();
        grid.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), grid.to_text());
    }

    #[test]
    fn surface_leaves_a_cell_of_margin() {
        let grid = BoxGrid::new(3, 9).unwrap();
        assert_eq!(grid.surface_size(40.0), dvec2(160.0, 400.0));
    }
}
