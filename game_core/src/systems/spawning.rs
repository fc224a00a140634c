use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::{create_rock, create_star, Config, Events, GameRng, PlayArea, RockSize, Session, Time};

pub fn random_point(rng: &mut GameRng, area: &PlayArea) -> Vec2 {
    Vec2::new(
        rng.0.gen_range(0.0..area.width),
        rng.0.gen_range(0.0..area.height),
    )
}

/// Scatter `count` rocks of one size across the play area
pub fn spawn_rocks(
    world: &mut World,
    rng: &mut GameRng,
    area: &PlayArea,
    count: u32,
    size: RockSize,
    fade: u32,
) {
    if !area.is_valid() {
        tracing::debug!(?area, "no room to place rocks");
        return;
    }
    for _ in 0..count {
        let pos = random_point(rng, area);
        create_rock(world, rng, pos, size, fade);
    }
}

pub fn spawn_stars(world: &mut World, rng: &mut GameRng, area: &PlayArea, count: usize) {
    if !area.is_valid() {
        return;
    }
    for _ in 0..count {
        let pos = random_point(rng, area);
        create_star(world, pos);
    }
}

/// Break a destroyed rock into the next size down at its position
pub fn split_rock(world: &mut World, rng: &mut GameRng, config: &Config, origin: Vec2, size: RockSize) {
    let Some(child) = size.split() else {
        return;
    };
    let count = match size {
        RockSize::Large => config.medium_per_large,
        RockSize::Medium => config.small_per_medium,
        RockSize::Small => 0,
    };
    tracing::debug!(?size, ?child, count, "rock split");
    for _ in 0..count {
        create_rock(world, rng, origin, child, 0);
    }
}

/// Timed waves: every delay, drop in a growing batch of large rocks
pub fn spawn_waves(
    world: &mut World,
    time: &Time,
    area: &PlayArea,
    config: &Config,
    session: &mut Session,
    events: &mut Events,
    rng: &mut GameRng,
) {
    if !session.wave_due(time.dt, config.wave_delay_secs) {
        return;
    }
    tracing::debug!(count = session.spawn_count, "wave spawned");
    spawn_rocks(
        world,
        rng,
        area,
        session.spawn_count,
        RockSize::Large,
        config.fade_frames,
    );
    session.wave_elapsed = 0.0;
    session.spawn_count += 1;
    events.wave_spawned = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Body, Kind};

    fn count_rocks(world: &World, size: RockSize) -> usize {
        world
            .query::<&Kind>()
            .iter()
            .filter(|(_e, kind)| kind.as_rock().map(|r| r.size) == Some(size))
            .count()
    }

    #[test]
    fn test_spawn_rocks_inside_area() {
        let mut world = World::new();
        let mut rng = GameRng::new(5);
        let area = PlayArea::new(800.0, 600.0).unwrap();

        spawn_rocks(&mut world, &mut rng, &area, 20, RockSize::Large, 100);

        assert_eq!(count_rocks(&world, RockSize::Large), 20);
        for (_e, body) in world.query::<&Body>().iter() {
            assert!(area.contains(body.pos));
            assert_eq!(body.fade, 100);
        }
    }

    #[test]
    fn test_full_descent_of_one_large_rock() {
        let mut world = World::new();
        let mut rng = GameRng::new(5);
        let config = Config::new();
        let origin = Vec2::new(100.0, 100.0);

        split_rock(&mut world, &mut rng, &config, origin, RockSize::Large);
        assert_eq!(count_rocks(&world, RockSize::Medium), 2);

        for _ in 0..2 {
            split_rock(&mut world, &mut rng, &config, origin, RockSize::Medium);
        }
        assert_eq!(count_rocks(&world, RockSize::Small), 6);

        let before = world.len();
        split_rock(&mut world, &mut rng, &config, origin, RockSize::Small);
        assert_eq!(world.len(), before, "small rocks are terminal");
    }

    #[test]
    fn test_wave_spawns_growing_batches() {
        let mut world = World::new();
        let mut rng = GameRng::new(5);
        let config = Config {
            wave_delay_secs: 1.0,
            ..Config::default()
        };
        let area = PlayArea::new(800.0, 600.0).unwrap();
        let mut session = Session::new(3);
        let mut events = Events::new();
        let time = Time::new(0.6, 0);

        spawn_waves(&mut world, &time, &area, &config, &mut session, &mut events, &mut rng);
        assert_eq!(world.len(), 0);
        spawn_waves(&mut world, &time, &area, &config, &mut session, &mut events, &mut rng);
        assert_eq!(world.len(), 1);
        assert!(events.wave_spawned);
        assert_eq!(session.spawn_count, 2);
        assert_eq!(session.wave_elapsed, 0.0);

        spawn_waves(&mut world, &time, &area, &config, &mut session, &mut events, &mut rng);
        spawn_waves(&mut world, &time, &area, &config, &mut session, &mut events, &mut rng);
        assert_eq!(world.len(), 3, "second wave brings two rocks");
        assert_eq!(session.spawn_count, 3);
    }

    #[test]
    fn test_empty_area_places_nothing() {
        let mut world = World::new();
        let mut rng = GameRng::new(5);
        let area = PlayArea {
            width: 0.0,
            height: 0.0,
        };

        spawn_rocks(&mut world, &mut rng, &area, 4, RockSize::Large, 100);
        spawn_stars(&mut world, &mut rng, &area, 10);

        assert_eq!(world.len(), 0);
    }
}
