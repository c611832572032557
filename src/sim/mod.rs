//! Sandbox simulation
//!
//! Entities, input and the frame loop. Nothing here touches the browser:
//! drawing goes through `RenderSurface`, timing through `Scheduler`.

pub mod collision;
pub mod entity;
pub mod game_loop;
pub mod input;

pub use collision::{Aabb, overlaps};
pub use entity::{Circle, Entity, Obstacle, Square};
pub use game_loop::{FrameOutcome, GameLoop, GameOverSink, LogSink, LoopPhase, LoopState};
pub use input::{Direction, InputState, Key};
