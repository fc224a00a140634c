use glam::Vec2;
use hecs::{Entity, World};

use crate::systems::spawning::split_rock;
use crate::systems::wrap::Mirror;
use crate::{Body, Config, Events, GameRng, Kind, KindTag, RockSize, Session};

/// A live entity or one of its mirrors, as seen by the collision pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Image {
    pub entity: Entity,
    pub tag: KindTag,
    pub offset: Vec2,
    pub body: Body,
}

/// Live entities plus this frame's mirrors, sorted Ship, Bullet, Rock
pub fn collect_images(world: &World, mirrors: &[Mirror]) -> Vec<Image> {
    let mut images: Vec<Image> = world
        .query::<(&Body, &Kind)>()
        .iter()
        .filter(|(_e, (_body, kind))| kind.tag() != KindTag::Star)
        .map(|(entity, (body, kind))| Image {
            entity,
            tag: kind.tag(),
            offset: Vec2::ZERO,
            body: *body,
        })
        .collect();

    for mirror in mirrors {
        let found = world
            .query_one::<(&Body, &Kind)>(mirror.source)
            .ok()
            .and_then(|mut q| q.get().map(|(body, kind)| (mirror.body(body), kind.tag())));
        match found {
            Some((body, tag)) => images.push(Image {
                entity: mirror.source,
                tag,
                offset: mirror.offset,
                body,
            }),
            None => {
                debug_assert!(false, "mirror source {:?} missing", mirror.source);
                tracing::warn!(source = ?mirror.source, "mirror without source, skipped");
            }
        }
    }

    images.sort_by_key(|image| image.tag);
    images
}

/// Pairs of differing kinds whose bounding circles overlap
///
/// Each pair is ordered by precedence, so the second member is the one of
/// lower priority (a rock whenever a rock is involved).
pub fn close_pairs(images: &[Image]) -> Vec<(Image, Image)> {
    let mut pairs = Vec::new();
    for i in 0..images.len() {
        for j in (i + 1)..images.len() {
            let (a, b) = (&images[i], &images[j]);
            if a.tag != b.tag && a.body.near(&b.body) {
                pairs.push((*a, *b));
            }
        }
    }
    pairs
}

/// Exact test on the filled outlines of two images
pub fn images_intersect(world: &World, a: &Image, b: &Image) -> bool {
    let shape_a = world
        .get::<&Kind>(a.entity)
        .ok()
        .and_then(|kind| kind.hit_polygon(&a.body));
    let shape_b = world
        .get::<&Kind>(b.entity)
        .ok()
        .and_then(|kind| kind.hit_polygon(&b.body));
    match (shape_a, shape_b) {
        (Some(pa), Some(pb)) => pa.intersects(&pb),
        _ => false,
    }
}

fn source_state(world: &World, entity: Entity) -> Option<(bool, u32)> {
    world.get::<&Body>(entity).ok().map(|b| (b.dead, b.fade))
}

/// Find every colliding pair and apply the game rules to it
pub fn resolve_collisions(
    world: &mut World,
    mirrors: &[Mirror],
    ship: Option<Entity>,
    config: &Config,
    session: &mut Session,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let images = collect_images(world, mirrors);
    let pairs = close_pairs(&images);
    tracing::trace!(images = images.len(), pairs = pairs.len(), "collision pass");

    let mut splits: Vec<(Vec2, RockSize)> = Vec::new();

    for (a, b) in pairs {
        // Only rocks interact with anything
        if b.tag != KindTag::Rock {
            continue;
        }

        // State may have changed earlier in this pass
        let (Some((a_dead, a_fade)), Some((b_dead, b_fade))) =
            (source_state(world, a.entity), source_state(world, b.entity))
        else {
            debug_assert!(false, "collision participant vanished");
            tracing::warn!(a = ?a.entity, b = ?b.entity, "collision participant vanished, skipped");
            continue;
        };
        if a_dead || b_dead {
            continue;
        }

        if !images_intersect(world, &a, &b) {
            continue;
        }

        match a.tag {
            KindTag::Bullet => {
                let rock = world
                    .get::<&Kind>(b.entity)
                    .ok()
                    .and_then(|kind| kind.as_rock().map(|rock| rock.size));
                let Some(size) = rock else {
                    debug_assert!(false, "rock {:?} has no rock data", b.entity);
                    tracing::warn!(rock = ?b.entity, "rock lookup failed, skipped");
                    continue;
                };

                // Kill the original, never the mirror
                let origin = {
                    let mut rock_body = match world.get::<&mut Body>(b.entity) {
                        Ok(body) => body,
                        Err(_) => continue,
                    };
                    rock_body.dead = true;
                    rock_body.pos
                };
                if let Ok(mut bullet_body) = world.get::<&mut Body>(a.entity) {
                    bullet_body.dead = true;
                }

                session.score += size.points();
                events.rocks_destroyed += 1;
                splits.push((origin, size));
            }
            KindTag::Ship => {
                if a_fade != 0 || b_fade != 0 {
                    continue;
                }
                debug_assert_eq!(Some(a.entity), ship, "ship image from a second ship");
                if let Ok(mut ship_body) = world.get::<&mut Body>(a.entity) {
                    ship_body.fade = config.fade_frames;
                }
                session.lives = session.lives.saturating_sub(1);
                events.ship_hit = true;
                if session.lives == 0 {
                    events.lives_exhausted = true;
                }
            }
            _ => {}
        }
    }

    for (origin, size) in splits {
        split_rock(world, rng, config, origin, size);
    }
}
