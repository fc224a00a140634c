use core::fmt;

/// Rejected configuration or play-area values
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    PlayAreaNotPositive { width: f32, height: f32 },
    ZeroStartLives,
    ZeroBulletCap,
    WaveDelayNotPositive { secs: f32 },
    ZeroPointsPerLife,
    ZeroSplitChildren { tier: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayAreaNotPositive { width, height } => {
                write!(f, "play area must be positive, got {width}x{height}")
            }
            Self::ZeroStartLives => write!(f, "start lives must be at least 1"),
            Self::ZeroBulletCap => write!(f, "bullet cap must be at least 1"),
            Self::WaveDelayNotPositive { secs } => {
                write!(f, "wave delay must be positive, got {secs}s")
            }
            Self::ZeroPointsPerLife => write!(f, "points per life must be at least 1"),
            Self::ZeroSplitChildren { tier } => {
                write!(f, "{tier} rocks must split into at least one child")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
