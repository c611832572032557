//! Sandbox entities
//!
//! Three shapes with independent movement policies:
//! - [`Square`]: moves every frame while a direction is held
//! - [`Circle`]: moves one step per arrow key press, never leaves the surface
//! - [`Obstacle`]: never moves

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::input::{Direction, InputState};
use crate::consts::*;
use crate::renderer::RenderSurface;

/// Shared entity behaviour
pub trait Entity {
    /// Anchor position (top-left for rectangles, center for circles)
    fn position(&self) -> Vec2;

    /// Draw onto the surface. Never clears.
    fn draw(&self, surface: &mut dyn RenderSurface);

    /// Bounding box used for collision, if the entity takes part in it
    fn bounds(&self) -> Option<Aabb> {
        None
    }
}

/// Issue one filled rectangle path
fn fill_rect(surface: &mut dyn RenderSurface, pos: Vec2, size: Vec2, color: &str) {
    surface.begin_path();
    surface.rect(pos.x, pos.y, size.x, size.y);
    surface.set_fill_color(color);
    surface.fill();
}

/// The continuously moving square
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Square {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: String,
    /// Pixels per frame along each held axis
    pub speed: f32,
}

impl Default for Square {
    fn default() -> Self {
        Self {
            pos: Vec2::new(SQUARE_X, SQUARE_Y),
            size: Vec2::splat(SQUARE_SIZE),
            color: SQUARE_COLOR.to_string(),
            speed: SQUARE_SPEED,
        }
    }
}

impl Square {
    /// Advance one frame from the held directions
    ///
    /// Diagonals are not normalized (√2 faster than axial) and the square may
    /// leave the surface.
    pub fn move_held(&mut self, input: &InputState) {
        if input.is_held(Direction::Up) {
            self.pos.y -= self.speed;
        }
        if input.is_held(Direction::Right) {
            self.pos.x += self.speed;
        }
        if input.is_held(Direction::Down) {
            self.pos.y += self.speed;
        }
        if input.is_held(Direction::Left) {
            self.pos.x -= self.speed;
        }
    }
}

impl Entity for Square {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        fill_rect(surface, self.pos, self.size, &self.color);
    }

    fn bounds(&self) -> Option<Aabb> {
        Some(Aabb {
            pos: self.pos,
            size: self.size,
        })
    }
}

/// The step-moved circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub color: String,
    /// Pixels per key press
    pub speed: f32,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            center: Vec2::new(CIRCLE_X, CIRCLE_Y),
            radius: CIRCLE_RADIUS,
            color: CIRCLE_COLOR.to_string(),
            speed: CIRCLE_STEP,
        }
    }
}

impl Circle {
    /// Whether a full step in `dir` keeps the circle strictly inside the surface
    pub fn can_step(&self, dir: Direction, width: f32, height: f32) -> bool {
        let reach = self.radius + self.speed;
        match dir {
            Direction::Down => self.center.y + reach < height,
            Direction::Up => self.center.y - reach > 0.0,
            Direction::Left => self.center.x - reach > 0.0,
            Direction::Right => self.center.x + reach < width,
        }
    }

    /// Step once in `dir`, then clear the surface and redraw this circle alone
    ///
    /// A step that would cross an edge is dropped, not clamped. The redraw
    /// happens either way. Returns whether the step was applied.
    pub fn step(&mut self, dir: Direction, surface: &mut dyn RenderSurface) -> bool {
        let moved = self.can_step(dir, surface.width(), surface.height());
        if moved {
            match dir {
                Direction::Down => self.center.y += self.speed,
                Direction::Up => self.center.y -= self.speed,
                Direction::Left => self.center.x -= self.speed,
                Direction::Right => self.center.x += self.speed,
            }
        } else {
            log::debug!("circle step {:?} blocked at {:?}", dir, self.center);
        }

        surface.clear_all();
        self.draw(surface);
        moved
    }
}

impl Entity for Circle {
    fn position(&self) -> Vec2 {
        self.center
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        surface.begin_path();
        surface.arc(self.center.x, self.center.y, self.radius, 0.0, TAU);
        surface.set_fill_color(&self.color);
        surface.fill();
    }
}

/// Static obstacle - touching it ends the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: String,
}

impl Default for Obstacle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(OBSTACLE_X, OBSTACLE_Y),
            size: Vec2::splat(OBSTACLE_SIZE),
            color: OBSTACLE_COLOR.to_string(),
        }
    }
}

impl Entity for Obstacle {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        fill_rect(surface, self.pos, self.size, &self.color);
    }

    fn bounds(&self) -> Option<Aabb> {
        Some(Aabb {
            pos: self.pos,
            size: self.size,
        })
    }
}
