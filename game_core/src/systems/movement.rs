use hecs::World;

use crate::{Body, Kind, PlayArea};

/// Integrate motion for one frame
///
/// Everything except bullets wraps around the play area; a bullet that
/// leaves it is marked dead instead. Stars never move.
pub fn move_bodies(world: &mut World, area: &PlayArea) {
    for (_entity, (body, kind)) in world.query_mut::<(&mut Body, &Kind)>() {
        if matches!(kind, Kind::Star) {
            continue;
        }

        body.pos += body.vel;
        body.heading += body.spin;

        if matches!(kind, Kind::Bullet) {
            if !area.contains(body.pos) {
                body.dead = true;
            }
        } else {
            body.pos = area.wrap(body.pos);
        }

        if body.fade > 0 {
            body.fade -= 1;
        }
    }
}
