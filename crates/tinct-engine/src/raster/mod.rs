//! CPU rasterization of gradient definitions.
//!
//! Responsibilities:
//! - own an in-memory RGBA surface ([`Pixmap`])
//! - fill it from a gradient definition ([`render_gradient`])
//! - produce selector thumbnails ([`render_thumbnail`])
//!
//! Output is a pure function of the definition and the target dimensions.

mod fill;
mod pixmap;

pub use fill::{render_gradient, render_thumbnail, THUMBNAIL_HEIGHT, THUMBNAIL_WIDTH};
pub use pixmap::Pixmap;
