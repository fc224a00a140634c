/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Laser,
    Explosion,
    BonusLife,
    GameOver,
    Confirm,
}

/// Background music
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    Calm,   // menu
    Battle, // in game
}

/// Fire-and-forget audio sink provided by the host
pub trait Audio {
    fn play(&mut self, cue: Cue);
    fn set_track(&mut self, track: Track, looping: bool);
}

/// Audio sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Audio for Silent {
    fn play(&mut self, _cue: Cue) {}
    fn set_track(&mut self, _track: Track, _looping: bool) {}
}
