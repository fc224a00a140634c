use crate::params::Params;

/// Time resource for tracking simulation time
///
/// Advanced by the host with real elapsed time; also serves as the shared
/// animation clock for fade flashing, so it is never reset. Elapsed time is
/// kept in whole milliseconds so a long session does not drift.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,         // Seconds covered by this tick
    pub elapsed_ms: u64, // Total elapsed milliseconds
}

impl Time {
    pub fn new(dt: f32, elapsed_ms: u64) -> Self {
        Self { dt, elapsed_ms }
    }

    pub fn advance(&mut self, dt: f32) {
        self.dt = dt;
        self.elapsed_ms += (dt.max(0.0) * 1000.0).round() as u64;
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Flash phase: on while the fade bit of the millisecond count is set
    pub fn flash_on(&self) -> bool {
        self.elapsed_ms & (1 << Params::FADE_FLASH_BIT) != 0
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: Params::FRAME_MS as f32 / 1000.0,
            elapsed_ms: 0,
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Per-game counters, reset when a new game starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    pub score: u32,
    pub lives: u32,
    pub life_counter: u32, // multiples of points-per-life already paid out, plus one
    pub spawn_count: u32,  // rocks in the next wave
    pub wave_elapsed: f32, // seconds since the last wave
}

impl Session {
    pub fn new(start_lives: u32) -> Self {
        Self {
            score: 0,
            lives: start_lives,
            life_counter: 1,
            spawn_count: 1,
            wave_elapsed: 0.0,
        }
    }

    /// Extra-life check: `score / (points_per_life * life_counter) > 1`
    ///
    /// Re-evaluated every frame rather than on crossing, so at most one life
    /// is granted per call.
    pub fn try_award_life(&mut self, points_per_life: u32) -> bool {
        let threshold = points_per_life as f32 * self.life_counter as f32;
        if self.score as f32 / threshold > 1.0 {
            self.lives += 1;
            self.life_counter += 1;
            true
        } else {
            false
        }
    }

    /// Accumulate wave time; true once the delay has been exceeded
    pub fn wave_due(&mut self, dt: f32, delay: f32) -> bool {
        self.wave_elapsed += dt;
        self.wave_elapsed > delay
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Params::START_LIVES)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub shots_fired: u32,
    pub rocks_destroyed: u32,
    pub ship_hit: bool,
    pub bonus_life: bool,
    pub lives_exhausted: bool,
    pub wave_spawned: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
