/// Game tuning parameters for Asteroids
///
/// Distances are in pixels, speeds in pixels per frame, angles in degrees.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Frame
    pub const FRAME_MS: u64 = 17; // ~60 Hz
    pub const MAX_CATCH_UP_MS: u64 = 250; // Clamp to prevent spiral of death

    // Fade (invulnerability flash)
    pub const FADE_FRAMES: u32 = 100;
    pub const FADE_ALPHA: u8 = 64;
    pub const FADE_FLASH_BIT: u32 = 7; // toggles every 128ms

    // Ship
    pub const SHIP_SCALE: f32 = 5.0;
    pub const SHIP_MAX_SPEED: f32 = 2.0;
    pub const SHIP_DECAY: f32 = 0.05;
    pub const SHIP_TURN_RATE: f32 = 5.0; // degrees per frame at full axis
    pub const SHIP_RADIUS: f32 = Self::SHIP_SCALE * 5.0;
    pub const GUN_PORT_DISTANCE: f32 = Self::SHIP_SCALE * 5.0;

    // Bullet
    pub const BULLET_SCALE: f32 = 2.0;
    pub const BULLET_SPEED: f32 = 10.0;
    pub const BULLET_RADIUS: f32 = Self::BULLET_SCALE * 2.0;
    pub const MAX_BULLETS: usize = 8;

    // Rock
    pub const ROCK_SIZE_SCALE: f32 = 10.0;
    pub const ROCK_MIN_VERTICES: usize = 4;
    pub const ROCK_MAX_VERTICES: usize = 12; // exclusive
    pub const ROCK_MAX_SPIN: f32 = 3.0;
    pub const ROCK_MAX_DRIFT: f32 = 2.5;
    pub const MEDIUM_PER_LARGE: u32 = 2;
    pub const SMALL_PER_MEDIUM: u32 = 3;

    // Score
    pub const LARGE_ROCK_POINTS: u32 = 100;
    pub const MEDIUM_ROCK_POINTS: u32 = 200;
    pub const SMALL_ROCK_POINTS: u32 = 300;
    pub const POINTS_PER_LIFE: u32 = 10_000;

    // Session
    pub const START_LIVES: u32 = 3;
    pub const START_ROCKS: u32 = 5;
    pub const WAVE_DELAY_SECS: f32 = 30.0;

    // Background
    pub const STAR_COUNT: usize = 50;
    pub const STAR_SIZE: f32 = 2.0;

    // Default window size
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;
}
