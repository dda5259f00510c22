//! Conditional logging macros.
//!
//! When the `tracing` feature is enabled, these re-export `tracing` macros.
//! When disabled, they expand to no-ops for zero runtime overhead.
//!
//! Events emitted by this crate:
//! - debug `building box grid` with `width`, `height`
//! - debug `drawing box` with the surface size, glyph count and font
//! - warn `glyph outside text surface` when a raster drops a glyph
//! - warn `text surface too large, drawing nothing` when a raster refuses a resize

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
