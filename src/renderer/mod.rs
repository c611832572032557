//! Rendering module
//!
//! Everything draws through [`RenderSurface`]; the browser adapter wraps a
//! Canvas 2D context, the recorder captures commands for headless runs.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod demo;
pub mod recorder;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recorder::{DrawCommand, Recorder};
pub use surface::RenderSurface;
