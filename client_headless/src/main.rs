use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{Config, Cue, Game, GamePhase, Params, PlayArea};
use tracing_subscriber::EnvFilter;

mod script;
mod sinks;

use script::Autopilot;
use sinks::{LogAudio, LogRenderer};

#[derive(Parser, Debug)]
#[command(name = "client-headless")]
#[command(about = "Run the Asteroids core with a scripted player, no window or sound card")]
struct Cli {
    /// Frames to simulate
    #[arg(long, default_value_t = 3_600)]
    frames: u64,
    /// Seed for rock shapes, drift and placement
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    #[arg(long, default_value_t = Params::DEFAULT_WIDTH)]
    width: f32,
    #[arg(long, default_value_t = Params::DEFAULT_HEIGHT)]
    height: f32,
    /// Seconds between rock waves
    #[arg(long, default_value_t = Params::WAVE_DELAY_SECS)]
    wave_delay_secs: f32,
    /// Pace frames against the wall clock instead of running flat out
    #[arg(long, default_value_t = false)]
    realtime: bool,
    /// Log every cue and state change
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let area = PlayArea::new(cli.width, cli.height).context("invalid play area")?;
    let config = Config {
        wave_delay_secs: cli.wave_delay_secs,
        ..Config::default()
    };
    let mut game = Game::new(config, cli.seed, area).context("invalid game configuration")?;

    let mut pilot = Autopilot::new();
    let mut audio = LogAudio::default();
    let mut renderer = LogRenderer::default();

    let frame = Duration::from_millis(Params::FRAME_MS);
    let max_catch_up = Duration::from_millis(Params::MAX_CATCH_UP_MS);
    let mut accumulator = Duration::ZERO;
    let mut last = Instant::now();
    let mut frames_run = 0u64;
    let mut games_played = 0u32;
    let mut best_score = 0u32;
    let mut phase = game.phase();

    tracing::info!(frames = cli.frames, seed = cli.seed, width = cli.width, height = cli.height, "starting");

    while frames_run < cli.frames {
        let elapsed = if cli.realtime {
            let now = Instant::now();
            let elapsed = now - last;
            last = now;
            elapsed
        } else {
            frame
        };
        // Wall time past the clamp is dropped; ticks always see the fixed dt
        accumulator += elapsed.min(max_catch_up);

        while accumulator >= frame && frames_run < cli.frames {
            accumulator -= frame;

            let input = pilot.sample(&game);
            game.tick(&input, area, frame.as_secs_f32(), &mut audio);
            game.render(&mut renderer);
            frames_run += 1;

            if game.phase() != phase {
                tracing::debug!(from = ?phase, to = ?game.phase(), frame = frames_run, "phase");
                if game.phase() == GamePhase::Gameover {
                    games_played += 1;
                    best_score = best_score.max(game.session.score);
                    tracing::info!(
                        game = games_played,
                        score = game.session.score,
                        frame = frames_run,
                        "game over"
                    );
                }
                phase = game.phase();
            }
        }

        if cli.realtime {
            thread::sleep(frame.saturating_sub(accumulator));
        }
    }

    if game.phase() == GamePhase::Started {
        best_score = best_score.max(game.session.score);
    }

    tracing::info!(
        frames = frames_run,
        games = games_played,
        best_score,
        phase = ?game.phase(),
        score = game.session.score,
        lives = game.session.lives,
        polygons = renderer.polygons,
        vertices = renderer.vertices,
        texts = renderer.texts,
        lasers = audio.count(Cue::Laser),
        explosions = audio.count(Cue::Explosion),
        bonus_lives = audio.count(Cue::BonusLife),
        track = ?audio.track,
        "finished"
    );

    Ok(())
}
