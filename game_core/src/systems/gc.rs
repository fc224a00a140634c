use hecs::World;

use crate::components::*;

/// Garbage collection: despawn entities marked dead this frame
pub fn gc(world: &mut World) {
    let to_remove: Vec<_> = world
        .query::<&Body>()
        .iter()
        .filter(|(_entity, body)| body.dead)
        .map(|(entity, _body)| entity)
        .collect();

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}

/// Remove everything but the background stars
pub fn clear_play_field(world: &mut World) {
    let to_remove: Vec<_> = world
        .query::<&Kind>()
        .iter()
        .filter(|(_entity, kind)| !matches!(kind, Kind::Star))
        .map(|(entity, _kind)| entity)
        .collect();

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}
