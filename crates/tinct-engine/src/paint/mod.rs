//! Paint model shared between the editor and the rasterizer.
//!
//! Scope:
//! - color representation (straight sRGB + alpha)
//! - gradient definitions (kind, start/end colors, extra stops)
//!
//! Rasterization lives in `raster`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, Gradient, GradientKind, Ramp};
