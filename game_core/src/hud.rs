//! Text overlays
//!
//! The core decides what to say and where; the host's font system draws it.

use crate::shape::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Big,
    Medium,
    Small,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Center,
    TopLeft,
}

/// A block of text; `line` counts rows down from the anchor
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub text: String,
    pub color: Rgba,
    pub size: TextSize,
    pub anchor: Anchor,
    pub line: u8,
}

impl HudText {
    pub fn new(text: impl Into<String>, color: Rgba, size: TextSize, anchor: Anchor, line: u8) -> Self {
        Self {
            text: text.into(),
            color,
            size,
            anchor,
            line,
        }
    }
}

pub const TITLE: &str = "Asteroids";
const PROMPT_STEP: u8 = 5;

/// Button name shown in prompts
pub fn start_button(connected: bool) -> &'static str {
    if connected {
        "Start"
    } else {
        "P"
    }
}

/// Prompt colour walking around the hue wheel one step per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptColor(pub Rgba);

impl PromptColor {
    pub fn new() -> Self {
        Self(Rgba::RED)
    }

    pub fn color(&self) -> Rgba {
        self.0
    }

    /// red → magenta → blue → cyan → green → yellow → red
    pub fn advance(&mut self) {
        let Rgba { mut r, mut g, mut b, .. } = self.0;
        if r == 255 && g == 0 {
            b = b.wrapping_add(PROMPT_STEP);
        }
        if b == 255 && g == 0 {
            r = r.wrapping_sub(PROMPT_STEP);
        }
        if b == 255 && r == 0 {
            g = g.wrapping_add(PROMPT_STEP);
        }
        if g == 255 && r == 0 {
            b = b.wrapping_sub(PROMPT_STEP);
        }
        if g == 255 && b == 0 {
            r = r.wrapping_add(PROMPT_STEP);
        }
        if r == 255 && b == 0 {
            g = g.wrapping_sub(PROMPT_STEP);
        }
        self.0 = Rgba::rgb(r, g, b);
    }
}

impl Default for PromptColor {
    fn default() -> Self {
        Self::new()
    }
}
