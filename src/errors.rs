//! Error types with diagnostics using miette
//!
//! Construction errors say which axis was rejected and with what value, so a
//! caller echoing user input back can point at the bad field.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::Axis;

// ============================================================================
// Construction Errors
// ============================================================================

/// Errors that occur while validating box dimensions
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum BoxError {
    #[error("The box dimensions have to be integers ({axis} was {value:?}).")]
    #[diagnostic(
        code(asciibox::dimension::invalid_type),
        help("pass a whole number such as 3 or \"12\"")
    )]
    InvalidDimensionType { axis: Axis, value: String },

    #[error("The box dimensions have to be bigger than 1 ({axis} was {value}).")]
    #[diagnostic(
        code(asciibox::dimension::out_of_range),
        help("a box needs at least two columns and two rows for its corners")
    )]
    InvalidDimensionRange { axis: Axis, value: i64 },

    #[error("The box is too large: {width} x {height} exceeds {max} cells.")]
    #[diagnostic(code(asciibox::dimension::too_large))]
    TooManyCells {
        width: usize,
        height: usize,
        max: usize,
    },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while driving a drawing surface
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("invalid cell size: {value}")]
    #[diagnostic(
        code(asciibox::render::invalid_cell_size),
        help("the cell size must be a finite number greater than zero")
    )]
    InvalidCellSize { value: f64 },

    #[error("invalid dash offset: {value}")]
    #[diagnostic(code(asciibox::render::invalid_dash_offset))]
    InvalidDashOffset { value: f64 },

    #[error("failed to serialize SVG: {message}")]
    #[diagnostic(code(asciibox::render::svg))]
    Svg { message: String },
}
