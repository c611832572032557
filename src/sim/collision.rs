//! Axis-aligned bounding box overlap
//!
//! The only collision test in the sandbox: square vs obstacle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, `pos` is the top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Check whether two boxes overlap
///
/// Edges that merely touch do not count. Only defined for positive extents.
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    let hit = a.right() > b.pos.x
        && a.pos.x < b.right()
        && b.pos.y < a.bottom()
        && b.bottom() > a.pos.y;
    if hit {
        log::debug!("collision at ({}, {})", a.pos.x, a.pos.y);
    }
    hit
}
