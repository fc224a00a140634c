use crate::error::ConfigError;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub fade_frames: u32,
    pub ship_max_speed: f32,
    pub ship_decay: f32,
    pub ship_turn_rate: f32,
    pub bullet_speed: f32,
    pub max_bullets: usize,
    pub medium_per_large: u32,
    pub small_per_medium: u32,
    pub points_per_life: u32,
    pub start_lives: u32,
    pub start_rocks: u32,
    pub wave_delay_secs: f32,
    pub star_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fade_frames: Params::FADE_FRAMES,
            ship_max_speed: Params::SHIP_MAX_SPEED,
            ship_decay: Params::SHIP_DECAY,
            ship_turn_rate: Params::SHIP_TURN_RATE,
            bullet_speed: Params::BULLET_SPEED,
            max_bullets: Params::MAX_BULLETS,
            medium_per_large: Params::MEDIUM_PER_LARGE,
            small_per_medium: Params::SMALL_PER_MEDIUM,
            points_per_life: Params::POINTS_PER_LIFE,
            start_lives: Params::START_LIVES,
            start_rocks: Params::START_ROCKS,
            wave_delay_secs: Params::WAVE_DELAY_SECS,
            star_count: Params::STAR_COUNT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the values keep the simulation well-formed
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_lives == 0 {
            return Err(ConfigError::ZeroStartLives);
        }
        if self.max_bullets == 0 {
            return Err(ConfigError::ZeroBulletCap);
        }
        if self.wave_delay_secs.is_nan() || self.wave_delay_secs <= 0.0 {
            return Err(ConfigError::WaveDelayNotPositive {
                secs: self.wave_delay_secs,
            });
        }
        if self.points_per_life == 0 {
            return Err(ConfigError::ZeroPointsPerLife);
        }
        if self.medium_per_large == 0 {
            return Err(ConfigError::ZeroSplitChildren { tier: "large" });
        }
        if self.small_per_medium == 0 {
            return Err(ConfigError::ZeroSplitChildren { tier: "medium" });
        }
        Ok(())
    }

    /// Rotation applied this frame for a horizontal axis value
    pub fn turn_for_axis(&self, axis_x: f32) -> f32 {
        axis_x.clamp(-1.0, 1.0) * self.ship_turn_rate
    }
}
