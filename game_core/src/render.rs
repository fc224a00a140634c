use glam::Vec2;

use crate::hud::HudText;
use crate::shape::{ColoredPolygon, Rgba};

/// Drawing sink provided by the host
///
/// Polygons arrive back to front, already in play-area coordinates.
pub trait Renderer {
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba);

    /// Font rendering is optional; the default drops the text
    fn draw_text(&mut self, _text: &HudText) {}
}

/// Feed a draw list to a renderer in order
pub fn draw_all(renderer: &mut dyn Renderer, shapes: &[ColoredPolygon]) {
    for shape in shapes {
        renderer.fill_polygon(shape.polygon.points(), shape.color);
    }
}
