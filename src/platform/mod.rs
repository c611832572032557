//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame scheduling (requestAnimationFrame on web, manual pumping elsewhere)
//! - Game-over presentation in the DOM

pub mod scheduler;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use scheduler::{FrameHandle, ManualScheduler, Scheduler};
#[cfg(target_arch = "wasm32")]
pub use web::{DomGameOver, RafScheduler};
