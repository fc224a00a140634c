pub mod audio;
pub mod components;
pub mod config;
pub mod error;
pub mod fsm;
pub mod game;
pub mod hud;
pub mod input;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod shape;
pub mod systems;

pub use audio::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use fsm::*;
pub use game::*;
pub use hud::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use shape::*;

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use systems::*;

/// Run one frame of live gameplay
///
/// Order: ship controls, motion, mirrors, collisions, bonus lives, purge,
/// waves. Returns this frame's mirrors so the caller can draw them.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    ship: Option<Entity>,
    input: &InputState,
    edges: &Edges,
    time: &Time,
    area: &PlayArea,
    config: &Config,
    session: &mut Session,
    events: &mut Events,
    rng: &mut GameRng,
) -> Vec<Mirror> {
    // 1. Player input
    if let Some(ship) = ship {
        apply_ship_controls(world, ship, input, edges, config, events);
    }

    // 2. Integrate, wrap, expire bullets
    move_bodies(world, area);

    // 3. Toroidal images for this frame only
    let mirrors = generate_mirrors(world, area);

    // 4. Game rules
    resolve_collisions(world, &mirrors, ship, config, session, events, rng);

    // 5. Extra lives
    award_lives(session, config, events);

    // 6. Drop the dead, and any mirror that pointed at them
    gc(world);
    let mirrors: Vec<Mirror> = mirrors
        .into_iter()
        .filter(|mirror| world.contains(mirror.source))
        .collect();

    // 7. Difficulty ramp
    spawn_waves(world, time, area, config, session, events, rng);

    mirrors
}

/// Helper to create the player ship
pub fn create_ship(world: &mut World, pos: Vec2, fade: u32) -> Entity {
    let mut body = Body::new(pos, Params::SHIP_RADIUS);
    body.fade = fade;
    world.spawn((body, Kind::Ship(Ship::new(Rgba::RED))))
}

/// Helper to create a rock with a random shape, drift and spin
pub fn create_rock(
    world: &mut World,
    rng: &mut GameRng,
    pos: Vec2,
    size: RockSize,
    fade: u32,
) -> Entity {
    let mut body = Body::new(pos, size.radius());
    body.heading = rng.0.gen_range(0.0..360.0);
    body.spin = rng.0.gen_range(-Params::ROCK_MAX_SPIN..Params::ROCK_MAX_SPIN);
    body.vel = Vec2::new(
        rng.0.gen_range(-Params::ROCK_MAX_DRIFT..Params::ROCK_MAX_DRIFT),
        rng.0.gen_range(-Params::ROCK_MAX_DRIFT..Params::ROCK_MAX_DRIFT),
    );
    body.fade = fade;
    let rock = Rock::new(size, &mut rng.0);
    world.spawn((body, Kind::Rock(rock)))
}

/// Helper to create a bullet travelling along `heading`
pub fn create_bullet(world: &mut World, pos: Vec2, heading: f32, speed: f32) -> Entity {
    let mut body = Body::new(pos, Params::BULLET_RADIUS);
    body.heading = heading;
    body.set_speed(speed);
    world.spawn((body, Kind::Bullet))
}

pub fn create_star(world: &mut World, pos: Vec2) -> Entity {
    world.spawn((Body::new(pos, Params::STAR_SIZE), Kind::Star))
}
