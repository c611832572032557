//! Frame loop state machine
//!
//! Each frame runs in a fixed order: move the square from held input, clear
//! the surface, draw square/circle/obstacle, then test square vs obstacle.
//! No collision schedules the next frame; a collision ends the session.
//!
//! Frames are delivered by handle. A tick whose handle is not the pending one
//! (cancelled by stop, or left over from an earlier run) draws nothing.

use super::collision::overlaps;
use super::entity::{Circle, Entity, Obstacle, Square};
use super::input::{InputState, Key};
use crate::consts::GAME_OVER_MESSAGE;
use crate::platform::{FrameHandle, Scheduler};
use crate::renderer::RenderSurface;
use crate::settings::SandboxConfig;

/// Current phase of the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopPhase {
    /// Not animating (initial state, or after stop)
    #[default]
    Idle,
    /// A frame is pending
    Running,
    /// Square hit the obstacle; nothing further is scheduled
    GameOver,
}

/// Scheduling state for one session
///
/// `frame_handle` is set exactly while `phase` is `Running`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopState {
    pub phase: LoopPhase,
    pub frame_handle: Option<FrameHandle>,
}

impl LoopState {
    pub fn is_running(&self) -> bool {
        self.phase == LoopPhase::Running
    }
}

/// Receives the game-over notification
pub trait GameOverSink {
    /// Called once when a session ends in a collision
    fn game_over(&mut self);
    /// Called when a new session starts after a game over
    fn reset(&mut self) {}
}

/// Sink that logs the message and counts notifications
#[derive(Debug, Default)]
pub struct LogSink {
    pub notified: u32,
}

impl GameOverSink for LogSink {
    fn game_over(&mut self) {
        self.notified += 1;
        log::warn!("{}", GAME_OVER_MESSAGE);
    }
}

/// What a call to [`GameLoop::on_frame`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Frame drawn, next one scheduled
    Continued,
    /// Frame drawn, collision ended the session
    GameOver,
    /// Frame drawn, but the next one could not be scheduled; loop is idle
    Stalled,
    /// Handle was stale or the loop isn't running; nothing drawn
    Skipped,
}

/// The sandbox: entities, input and the loop that animates them
pub struct GameLoop<R, S, G> {
    config: SandboxConfig,
    square: Square,
    circle: Circle,
    obstacle: Obstacle,
    input: InputState,
    state: LoopState,
    surface: R,
    scheduler: S,
    sink: G,
    /// Frames drawn this session
    frames: u64,
}

impl<R: RenderSurface, S: Scheduler, G: GameOverSink> GameLoop<R, S, G> {
    /// Create an idle loop with entities placed from `config`
    pub fn new(config: SandboxConfig, surface: R, scheduler: S, sink: G) -> Self {
        Self {
            square: config.square.clone(),
            circle: config.circle.clone(),
            obstacle: config.obstacle.clone(),
            config,
            input: InputState::default(),
            state: LoopState::default(),
            surface,
            scheduler,
            sink,
            frames: 0,
        }
    }

    /// Draw every entity once without clearing (initial paint)
    pub fn draw_all(&mut self) {
        self.square.draw(&mut self.surface);
        self.circle.draw(&mut self.surface);
        self.obstacle.draw(&mut self.surface);
    }

    /// Start animating
    ///
    /// Runs the first frame immediately. Ignored while already running. After a
    /// game over, the session is reset (entities back to their configured
    /// positions, input released) before starting again.
    pub fn start(&mut self) {
        match self.state.phase {
            LoopPhase::Running => {
                log::info!("already running, start ignored");
                return;
            }
            LoopPhase::GameOver => {
                self.reset_session();
                log::info!("new session after game over");
            }
            LoopPhase::Idle => {}
        }

        log::info!("loop started");
        self.state.phase = LoopPhase::Running;
        self.advance();
    }

    /// Stop animating, cancelling the pending frame. Does not touch the surface.
    pub fn stop(&mut self) {
        if !self.state.is_running() {
            log::debug!("stop ignored in {:?}", self.state.phase);
            return;
        }

        if let Some(handle) = self.state.frame_handle.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.state.phase = LoopPhase::Idle;
        log::info!("loop stopped after {} frames", self.frames);
    }

    /// Run one scheduled frame
    pub fn on_frame(&mut self, handle: FrameHandle) -> FrameOutcome {
        if !self.state.is_running() || self.state.frame_handle != Some(handle) {
            log::debug!("skipping stale frame {:?}", handle);
            return FrameOutcome::Skipped;
        }

        self.state.frame_handle = None;
        self.advance()
    }

    /// Handle a key-down event by its `KeyboardEvent.key` identifier
    pub fn key_down(&mut self, key: &str) {
        match Key::from_key(key) {
            Some(Key::Hold(_)) => self.input.set_direction(key),
            Some(Key::Step(dir)) => {
                self.circle.step(dir, &mut self.surface);
            }
            Some(Key::Restart) => {
                if self.state.is_running() {
                    log::info!("nope");
                } else {
                    self.start();
                }
            }
            Some(Key::Stop) => self.stop(),
            None => {}
        }
    }

    /// Handle a key-up event
    pub fn key_up(&mut self, key: &str) {
        if let Some(Key::Hold(_)) = Key::from_key(key) {
            self.input.unset_direction(key);
        }
    }

    /// Frame body: move, clear, redraw, collide, reschedule
    fn advance(&mut self) -> FrameOutcome {
        self.square.move_held(&self.input);

        self.surface.clear_all();
        self.square.draw(&mut self.surface);
        self.circle.draw(&mut self.surface);
        self.obstacle.draw(&mut self.surface);
        self.frames += 1;

        if self.collided() {
            self.state.phase = LoopPhase::GameOver;
            self.state.frame_handle = None;
            log::info!("game over after {} frames", self.frames);
            self.sink.game_over();
            return FrameOutcome::GameOver;
        }

        match self.scheduler.request_frame() {
            Some(handle) => {
                self.state.frame_handle = Some(handle);
                FrameOutcome::Continued
            }
            None => {
                log::warn!("next frame could not be scheduled, loop idle");
                self.state.phase = LoopPhase::Idle;
                FrameOutcome::Stalled
            }
        }
    }

    fn collided(&self) -> bool {
        match (self.square.bounds(), self.obstacle.bounds()) {
            (Some(a), Some(b)) => overlaps(&a, &b),
            _ => false,
        }
    }

    /// Fresh LoopState and entity positions for a new session
    fn reset_session(&mut self) {
        self.square = self.config.square.clone();
        self.circle = self.config.circle.clone();
        self.obstacle = self.config.obstacle.clone();
        self.input = InputState::default();
        self.state = LoopState::default();
        self.frames = 0;
        self.sink.reset();
    }

    pub fn phase(&self) -> LoopPhase {
        self.state.phase
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn square(&self) -> &Square {
        &self.square
    }

    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    pub fn obstacle(&self) -> &Obstacle {
        &self.obstacle
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn sink(&self) -> &G {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::consts::*;
    use crate::platform::ManualScheduler;
    use crate::renderer::{DrawCommand, Recorder};

    type TestLoop = GameLoop<Recorder, ManualScheduler, LogSink>;

    fn new_loop() -> TestLoop {
        GameLoop::new(
            SandboxConfig::default(),
            Recorder::new(SURFACE_WIDTH, SURFACE_HEIGHT),
            ManualScheduler::new(),
            LogSink::default(),
        )
    }

    /// Pump one due frame into the loop
    fn pump(game: &mut TestLoop) -> Option<FrameOutcome> {
        let handle = game.scheduler_mut().pump()?;
        Some(game.on_frame(handle))
    }

    #[test]
    fn test_start_runs_first_frame_and_schedules() {
        let mut game = new_loop();
        assert_eq!(game.phase(), LoopPhase::Idle);
        assert_eq!(game.state().frame_handle, None);

        game.start();
        assert_eq!(game.phase(), LoopPhase::Running);
        assert_eq!(game.frames(), 1);
        assert_eq!(game.scheduler().pending(), 1);
        let handle = game.state().frame_handle.unwrap();
        assert!(game.scheduler().is_pending(handle));
    }

    #[test]
    fn test_frame_draw_order() {
        let mut game = new_loop();
        game.start();
        game.surface_mut().take();

        assert_eq!(pump(&mut game), Some(FrameOutcome::Continued));
        let surface = game.surface();
        assert!(matches!(surface.commands()[0], DrawCommand::Clear { .. }));
        assert_eq!(surface.clear_count(), 1);
        assert_eq!(
            surface.fill_colors(),
            vec![SQUARE_COLOR, CIRCLE_COLOR, OBSTACLE_COLOR]
        );
    }

    #[test]
    fn test_input_sampled_each_frame() {
        let mut game = new_loop();
        game.start();
        let start = game.square().pos;

        game.key_down("a");
        pump(&mut game);
        pump(&mut game);
        game.key_up("a");
        pump(&mut game);

        assert_eq!(game.square().pos, start - Vec2::new(2.0 * SQUARE_SPEED, 0.0));
    }

    #[test]
    fn test_collision_ends_session() {
        let mut game = new_loop();
        game.start();
        game.key_down("s");
        game.key_down("a");

        let mut last = FrameOutcome::Continued;
        let mut ticks = 0;
        while let Some(outcome) = pump(&mut game) {
            last = outcome;
            ticks += 1;
            assert!(ticks < 1000, "square never reached the obstacle");
        }

        assert_eq!(last, FrameOutcome::GameOver);
        assert_eq!(game.phase(), LoopPhase::GameOver);
        assert_eq!(game.state().frame_handle, None);
        assert_eq!(game.sink().notified, 1);

        // Game over happened on the first overlapping frame
        let sq = game.square().bounds().unwrap();
        let prev = crate::sim::Aabb {
            pos: sq.pos - Vec2::new(-SQUARE_SPEED, SQUARE_SPEED),
            size: sq.size,
        };
        assert!(overlaps(&sq, &game.obstacle().bounds().unwrap()));
        assert!(!overlaps(&prev, &game.obstacle().bounds().unwrap()));

        // No further frame requested
        let requested = game.scheduler().requested;
        assert_eq!(pump(&mut game), None);
        assert_eq!(game.scheduler().requested, requested);
    }

    #[test]
    fn test_stop_cancels_pending_frame() {
        let mut game = new_loop();
        game.start();
        let handle = game.state().frame_handle.unwrap();

        game.stop();
        assert_eq!(game.phase(), LoopPhase::Idle);
        assert_eq!(game.state().frame_handle, None);
        assert!(!game.scheduler().is_pending(handle));
        assert_eq!(game.scheduler().cancelled, 1);

        let frames = game.frames();
        assert_eq!(pump(&mut game), None);
        // Delivering the cancelled handle anyway draws nothing
        game.surface_mut().take();
        assert_eq!(game.on_frame(handle), FrameOutcome::Skipped);
        assert!(game.surface().commands().is_empty());
        assert_eq!(game.frames(), frames);
    }

    #[test]
    fn test_stale_handle_after_restart_skipped() {
        let mut game = new_loop();
        game.start();
        let old = game.state().frame_handle.unwrap();
        game.stop();
        game.key_down("1");

        let current = game.state().frame_handle.unwrap();
        assert_ne!(old, current);
        assert_eq!(game.on_frame(old), FrameOutcome::Skipped);
        assert_eq!(game.on_frame(current), FrameOutcome::Continued);
    }

    #[test]
    fn test_restart_while_running_is_noop() {
        let mut game = new_loop();
        game.start();
        let handle = game.state().frame_handle;

        game.key_down("1");
        game.start();
        assert_eq!(game.scheduler().pending(), 1);
        assert_eq!(game.scheduler().requested, 1);
        assert_eq!(game.state().frame_handle, handle);
        assert_eq!(game.frames(), 1);
    }

    #[test]
    fn test_stop_when_not_running_is_noop() {
        let mut game = new_loop();
        game.key_down("2");
        assert_eq!(game.phase(), LoopPhase::Idle);
        assert_eq!(game.scheduler().cancelled, 0);
        assert!(game.surface().commands().is_empty());
    }

    #[test]
    fn test_stop_key() {
        let mut game = new_loop();
        game.key_down("1");
        assert_eq!(game.phase(), LoopPhase::Running);
        game.key_down("2");
        assert_eq!(game.phase(), LoopPhase::Idle);
        assert_eq!(game.scheduler().pending(), 0);
    }

    #[test]
    fn test_restart_after_game_over_resets() {
        let mut config = SandboxConfig::default();
        // Square starts overlapping the obstacle
        config.square.pos = Vec2::new(260.0, 260.0);
        let mut game = GameLoop::new(
            config,
            Recorder::new(SURFACE_WIDTH, SURFACE_HEIGHT),
            ManualScheduler::new(),
            LogSink::default(),
        );

        game.key_down("d");
        game.start();
        assert_eq!(game.phase(), LoopPhase::GameOver);
        assert_eq!(game.scheduler().pending(), 0);
        assert_eq!(game.sink().notified, 1);

        // Stop after game over does nothing
        game.stop();
        assert_eq!(game.phase(), LoopPhase::GameOver);

        game.start();
        assert!(game.input().is_idle());
        assert_eq!(game.square().pos, Vec2::new(260.0, 260.0));
        assert_eq!(game.phase(), LoopPhase::GameOver);
        assert_eq!(game.sink().notified, 2);
    }

    #[test]
    fn test_restart_after_game_over_runs_again() {
        let mut game = new_loop();
        game.start();
        game.key_down("s");
        game.key_down("a");
        while pump(&mut game).is_some() {}
        assert_eq!(game.phase(), LoopPhase::GameOver);

        game.key_down("1");
        assert_eq!(game.phase(), LoopPhase::Running);
        assert_eq!(game.square().pos, Vec2::new(SQUARE_X, SQUARE_Y));
        assert_eq!(game.frames(), 1);
        assert_eq!(game.scheduler().pending(), 1);
    }

    #[test]
    fn test_step_key_moves_circle_outside_loop() {
        let mut game = new_loop();
        game.key_down("ArrowDown");
        assert_eq!(game.circle().center, Vec2::new(CIRCLE_X, CIRCLE_Y + CIRCLE_STEP));
        assert_eq!(game.phase(), LoopPhase::Idle);
        assert_eq!(game.surface().fill_colors(), vec![CIRCLE_COLOR]);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut game = new_loop();
        game.key_down("Enter");
        game.key_up("ArrowUp");
        game.key_up("q");
        assert!(game.input().is_idle());
        assert!(game.surface().commands().is_empty());
    }

    #[test]
    fn test_draw_all_initial_paint() {
        let mut game = new_loop();
        game.draw_all();
        assert_eq!(game.surface().clear_count(), 0);
        assert_eq!(
            game.surface().fill_colors(),
            vec![SQUARE_COLOR, CIRCLE_COLOR, OBSTACLE_COLOR]
        );
    }

    #[test]
    fn test_step_while_running_survives_next_frame() {
        let mut game = new_loop();
        game.start();
        game.key_down("ArrowRight");
        game.surface_mut().take();

        assert_eq!(pump(&mut game), Some(FrameOutcome::Continued));
        let arcs: Vec<_> = game
            .surface()
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Arc { x, y, .. } => Some(Vec2::new(*x, *y)),
                _ => None,
            })
            .collect();
        assert_eq!(arcs, vec![Vec2::new(CIRCLE_X + CIRCLE_STEP, CIRCLE_Y)]);
    }

    /// Host that never grants a frame
    struct RefusingScheduler;

    impl Scheduler for RefusingScheduler {
        fn request_frame(&mut self) -> Option<FrameHandle> {
            None
        }

        fn cancel_frame(&mut self, _handle: FrameHandle) {}
    }

    #[test]
    fn test_unschedulable_frame_goes_idle() {
        let mut game = GameLoop::new(
            SandboxConfig::default(),
            Recorder::new(SURFACE_WIDTH, SURFACE_HEIGHT),
            RefusingScheduler,
            LogSink::default(),
        );

        game.start();
        assert_eq!(game.phase(), LoopPhase::Idle);
        assert_eq!(game.state().frame_handle, None);
        assert_eq!(game.frames(), 1);
        assert_eq!(game.sink().notified, 0);

        // Start is accepted again once idle
        game.key_down("1");
        assert_eq!(game.frames(), 2);
        assert_eq!(game.phase(), LoopPhase::Idle);
    }
}
