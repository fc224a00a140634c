use hecs::{Entity, World};

use crate::input::{Edges, InputState};
use crate::{create_bullet, Body, Config, Events, Kind, Ship};

/// Bullets that are on screen and not yet marked for removal
pub fn live_bullets(world: &World) -> usize {
    world
        .query::<(&Body, &Kind)>()
        .iter()
        .filter(|(_e, (body, kind))| matches!(kind, Kind::Bullet) && !body.dead)
        .count()
}

/// Apply player input to the ship: fire, boost or coast, then turn
pub fn apply_ship_controls(
    world: &mut World,
    ship: Entity,
    input: &InputState,
    edges: &Edges,
    config: &Config,
    events: &mut Events,
) {
    let muzzle = match world.get::<&Body>(ship) {
        Ok(body) => (Ship::gun_port(&body), body.heading),
        Err(_) => {
            debug_assert!(false, "ship entity {ship:?} missing");
            tracing::warn!(?ship, "ship entity missing, ignoring input");
            return;
        }
    };

    // Debounced by the edge, throttled by the cap
    if edges.fire && live_bullets(world) < config.max_bullets {
        let (pos, heading) = muzzle;
        create_bullet(world, pos, heading, config.bullet_speed);
        events.shots_fired += 1;
    }

    if let Ok((body, kind)) = world.query_one_mut::<(&mut Body, &mut Kind)>(ship) {
        if let Kind::Ship(state) = kind {
            if input.boost {
                state.boost(body, config.ship_max_speed);
            } else {
                state.decay(body, config.ship_decay);
            }
        }
        body.heading += config.turn_for_axis(input.axis_x);
    }
}
