//! One-shot shape demos
//!
//! Each demo issues a fixed set of primitives and leaves the surface as-is;
//! styles set here stick until something else changes them.

use std::f32::consts::TAU;

use super::surface::RenderSurface;

/// Spacing between grid lines
pub const GRID_SPACING: f32 = 50.0;

/// Two crossed blue lines
pub fn draw_x(surface: &mut dyn RenderSurface) {
    surface.begin_path();
    surface.move_to(100.0, 100.0);
    surface.line_to(300.0, 300.0);
    surface.set_stroke_color("blue");
    surface.set_line_width(6.0);
    surface.stroke();

    surface.begin_path();
    surface.move_to(100.0, 300.0);
    surface.line_to(300.0, 100.0);
    surface.stroke();
}

/// 1px black grid covering the whole surface
pub fn draw_grid(surface: &mut dyn RenderSurface) {
    surface.set_stroke_color("black");
    surface.set_line_width(1.0);

    let (width, height) = (surface.width(), surface.height());

    // Vertical lines
    let mut i = 0.0;
    while i <= width {
        surface.begin_path();
        surface.move_to(i, 0.0);
        surface.line_to(i, height);
        surface.stroke();
        i += GRID_SPACING;
    }

    // Horizontal lines
    let mut i = 0.0;
    while i <= height {
        surface.begin_path();
        surface.move_to(0.0, i);
        surface.line_to(width, i);
        surface.stroke();
        i += GRID_SPACING;
    }
}

/// A maroon outlined rectangle and a green filled one
pub fn draw_rectangles(surface: &mut dyn RenderSurface) {
    surface.begin_path();
    surface.rect(300.0, 300.0, 80.0, 180.0);
    surface.set_stroke_color("maroon");
    surface.set_line_width(4.0);
    surface.stroke();

    surface.begin_path();
    surface.rect(70.0, 120.0, 170.0, 40.0);
    surface.set_fill_color("green");
    surface.fill();
}

/// A red disc and an olive circle outline
pub fn draw_circles(surface: &mut dyn RenderSurface) {
    surface.begin_path();
    surface.arc(75.0, 525.0, 71.0, 0.0, TAU);
    surface.set_fill_color("#ff0000");
    surface.fill();

    surface.begin_path();
    surface.arc(75.0, 325.0, 71.0, 0.0, TAU);
    surface.set_stroke_color("#999900");
    surface.stroke();
}

/// Wipe everything
pub fn clear(surface: &mut dyn RenderSurface) {
    surface.clear_all();
}
