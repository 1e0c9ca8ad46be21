//! Tinct engine crate.
//!
//! This crate owns the gradient paint model and the CPU raster pieces used
//! by the editor layer: definitions in [`paint`], rasterization in
//! [`raster`], logger bootstrap in [`logging`].

pub mod logging;
pub mod paint;
pub mod raster;
