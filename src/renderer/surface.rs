//! 2D drawing surface abstraction
//!
//! Mirrors the subset of the Canvas 2D path API the sandbox needs. Colors are
//! any CSS color string ("orange", "#ff0000", ...).

/// A surface that can be cleared and drawn on with paths
pub trait RenderSurface {
    /// Surface width in pixels
    fn width(&self) -> f32;
    /// Surface height in pixels
    fn height(&self) -> f32;

    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Arc around center (x, y), angles in radians
    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32);
    fn set_stroke_color(&mut self, color: &str);
    fn set_fill_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f32);
    fn stroke(&mut self);
    fn fill(&mut self);

    /// Clear the whole surface
    fn clear_all(&mut self) {
        let (w, h) = (self.width(), self.height());
        self.clear(0.0, 0.0, w, h);
    }
}
