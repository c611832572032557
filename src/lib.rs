//! Canvas Sandbox - shape demos and a keyboard-driven animation loop
//!
//! Core modules:
//! - `sim`: Entities, input state, collision and the frame loop state machine
//! - `renderer`: Drawing surface abstraction, command recorder, shape demos
//! - `platform`: Frame scheduling and browser bindings
//! - `settings`: Entity layout and logging configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::SandboxConfig;

/// Default layout constants (match the classic sandbox page)
pub mod consts {
    /// Headless surface extent
    pub const SURFACE_WIDTH: f32 = 600.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    /// Continuously moving square
    pub const SQUARE_X: f32 = 502.0;
    pub const SQUARE_Y: f32 = 52.0;
    pub const SQUARE_SIZE: f32 = 46.0;
    pub const SQUARE_SPEED: f32 = 2.0;
    pub const SQUARE_COLOR: &str = "orange";

    /// Step-moved circle
    pub const CIRCLE_X: f32 = 200.0;
    pub const CIRCLE_Y: f32 = 40.0;
    pub const CIRCLE_RADIUS: f32 = 17.0;
    pub const CIRCLE_STEP: f32 = 10.0;
    pub const CIRCLE_COLOR: &str = "cadetblue";

    /// Obstacle - hit it and the session ends
    pub const OBSTACLE_X: f32 = 250.0;
    pub const OBSTACLE_Y: f32 = 250.0;
    pub const OBSTACLE_SIZE: f32 = 100.0;
    pub const OBSTACLE_COLOR: &str = "black";

    /// Shown when the square crashes into the obstacle
    pub const GAME_OVER_MESSAGE: &str = "YOU ARE DEAD YOU SHOULD NOT HAVE CRASHED INTO THAT";
}
