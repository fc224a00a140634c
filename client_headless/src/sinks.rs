use std::collections::HashMap;

use game_core::{Audio, Cue, HudText, Renderer, Rgba, Track};
use glam::Vec2;

/// Renderer that counts what it is asked to draw
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub polygons: u64,
    pub vertices: u64,
    pub texts: u64,
}

impl Renderer for LogRenderer {
    fn fill_polygon(&mut self, points: &[Vec2], _color: Rgba) {
        self.polygons += 1;
        self.vertices += points.len() as u64;
    }

    fn draw_text(&mut self, text: &HudText) {
        self.texts += 1;
        tracing::trace!(text = %text.text, line = text.line, "hud");
    }
}

/// Audio sink that logs cues and track switches instead of playing them
#[derive(Debug, Default)]
pub struct LogAudio {
    pub cues: HashMap<Cue, u32>,
    pub track: Option<Track>,
}

impl LogAudio {
    pub fn count(&self, cue: Cue) -> u32 {
        self.cues.get(&cue).copied().unwrap_or(0)
    }
}

impl Audio for LogAudio {
    fn play(&mut self, cue: Cue) {
        tracing::debug!(?cue, "cue");
        *self.cues.entry(cue).or_insert(0) += 1;
    }

    fn set_track(&mut self, track: Track, looping: bool) {
        tracing::info!(?track, looping, "music");
        self.track = Some(track);
    }
}
