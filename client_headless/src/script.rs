use game_core::{Body, Game, GamePhase, InputState, Kind};
use glam::Vec2;

/// Degrees of aiming error tolerated before turning
const AIM_DEADZONE: f32 = 4.0;
/// Frames between trigger presses
const FIRE_PERIOD: u64 = 8;
/// Boost when the nearest rock is further than this
const CHASE_DISTANCE: f32 = 200.0;
/// One pause/resume cycle every this many frames of play
const PAUSE_PERIOD: u64 = 1_200;

/// Scripted player: starts games, aims at the nearest rock, shoots, and
/// comes back for another round after a game over
#[derive(Debug, Default)]
pub struct Autopilot {
    frame: u64,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, game: &Game) -> InputState {
        self.frame += 1;
        let even = self.frame % 2 == 0;

        let mut input = InputState::default();
        match game.phase() {
            // Press and release on alternate frames so every press is an edge
            GamePhase::Menu | GamePhase::Gameover | GamePhase::Paused => {
                input.start = even;
            }
            GamePhase::Started => {
                input.start = self.frame % PAUSE_PERIOD == 0;
                if let Some((turn, distance)) = aim(game) {
                    input.axis_x = turn;
                    input.boost = distance > CHASE_DISTANCE;
                }
                input.fire = self.frame % FIRE_PERIOD < FIRE_PERIOD / 2;
            }
        }
        input
    }
}

/// Turn direction toward the nearest live rock, and how far away it is
fn aim(game: &Game) -> Option<(f32, f32)> {
    let ship = game.ship()?;
    let ship = *game.world.get::<&Body>(ship).ok()?;

    let target = game
        .world
        .query::<(&Body, &Kind)>()
        .iter()
        .filter(|(_e, (body, kind))| matches!(kind, Kind::Rock(_)) && !body.dead)
        .map(|(_e, (body, _kind))| body.pos)
        .min_by(|a, b| a.distance(ship.pos).total_cmp(&b.distance(ship.pos)))?;

    let to_target: Vec2 = target - ship.pos;
    let desired = to_target.y.atan2(to_target.x).to_degrees();
    let diff = (desired - ship.heading + 180.0).rem_euclid(360.0) - 180.0;

    let turn = if diff > AIM_DEADZONE {
        1.0
    } else if diff < -AIM_DEADZONE {
        -1.0
    } else {
        0.0
    };
    Some((turn, to_target.length()))
}
