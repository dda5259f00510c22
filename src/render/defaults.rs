//! Default projection and font settings (pixels)

/// Distance between neighbouring glyphs on a surface
pub const CELL_SIZE: f64 = 40.0;
/// Vertical nudge applied to `-` so it lines up with the corner glyphs.
/// Tuned for a 12px monospace face; other fonts may need a different value.
pub const DASH_Y_OFFSET: f64 = -1.25;
pub const FONT_SIZE_PX: f64 = 12.0;
pub const FONT_FAMILY: &str = "monospace";
