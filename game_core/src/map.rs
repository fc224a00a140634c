use glam::Vec2;

use crate::error::ConfigError;

/// Which play-area edges a bounding circle crosses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundProximity {
    pub left: bool,
    pub right: bool,
    pub top: bool,    // y = 0
    pub bottom: bool, // y = height
}

impl BoundProximity {
    /// Number of crossed edges; 2 means a corner
    pub fn sum(&self) -> usize {
        [self.left, self.right, self.top, self.bottom]
            .iter()
            .filter(|near| **near)
            .count()
    }
}

/// Toroidal play rectangle with its origin at the top-left corner
///
/// Supplied by the host every tick; the core never keeps a copy across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        let area = Self { width, height };
        if area.is_valid() {
            Ok(area)
        } else {
            Err(ConfigError::PlayAreaNotPositive { width, height })
        }
    }

    /// Both sides positive and finite; a minimised window reports 0x0
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Edges inclusive: a point sitting on the boundary is still inside
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    /// Fold a point that stepped over an edge back in from the opposite edge
    pub fn wrap(&self, point: Vec2) -> Vec2 {
        let mut wrapped = point;
        if wrapped.x > self.width {
            wrapped.x -= self.width;
        }
        if wrapped.x < 0.0 {
            wrapped.x += self.width;
        }
        if wrapped.y > self.height {
            wrapped.y -= self.height;
        }
        if wrapped.y < 0.0 {
            wrapped.y += self.height;
        }
        wrapped
    }

    pub fn proximity(&self, center: Vec2, radius: f32) -> BoundProximity {
        BoundProximity {
            left: center.x - radius < 0.0,
            right: center.x + radius > self.width,
            top: center.y - radius < 0.0,
            bottom: center.y + radius > self.height,
        }
    }

    /// Translations of the toroidal images that can touch the far side
    ///
    /// One per crossed edge plus the diagonal image when a corner is crossed.
    pub fn mirror_offsets(&self, proximity: BoundProximity) -> Vec<Vec2> {
        let mut xs = Vec::with_capacity(2);
        if proximity.left {
            xs.push(self.width);
        }
        if proximity.right {
            xs.push(-self.width);
        }
        let mut ys = Vec::with_capacity(2);
        if proximity.top {
            ys.push(self.height);
        }
        if proximity.bottom {
            ys.push(-self.height);
        }

        let mut offsets = Vec::new();
        for &dx in &xs {
            offsets.push(Vec2::new(dx, 0.0));
        }
        for &dy in &ys {
            offsets.push(Vec2::new(0.0, dy));
        }
        for &dx in &xs {
            for &dy in &ys {
                offsets.push(Vec2::new(dx, dy));
            }
        }
        offsets
    }
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: crate::params::Params::DEFAULT_WIDTH,
            height: crate::params::Params::DEFAULT_HEIGHT,
        }
    }
}
