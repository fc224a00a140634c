use crate::{Config, Events, Session};

/// Grant an extra life each time the score passes another multiple of
/// the points-per-life threshold
pub fn award_lives(session: &mut Session, config: &Config, events: &mut Events) {
    if session.try_award_life(config.points_per_life) {
        tracing::debug!(score = session.score, lives = session.lives, "bonus life");
        events.bonus_life = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_at_threshold_multiples() {
        let config = Config::new();
        let mut session = Session::new(3);
        let mut events = Events::new();

        session.score = 9_999;
        award_lives(&mut session, &config, &mut events);
        assert!(!events.bonus_life);

        session.score = 10_001;
        award_lives(&mut session, &config, &mut events);
        assert!(events.bonus_life);
        assert_eq!(session.lives, 4);
        assert_eq!(session.life_counter, 2);

        events.clear();
        session.score = 20_100;
        award_lives(&mut session, &config, &mut events);
        assert!(events.bonus_life);
        assert_eq!(session.lives, 5);
        assert_eq!(session.life_counter, 3);
    }

    #[test]
    fn test_big_jump_pays_one_life_per_frame() {
        let config = Config::new();
        let mut session = Session::new(3);
        let mut events = Events::new();

        session.score = 35_000;
        award_lives(&mut session, &config, &mut events);
        assert_eq!(session.lives, 4);
        award_lives(&mut session, &config, &mut events);
        award_lives(&mut session, &config, &mut events);
        assert_eq!(session.lives, 6, "catches up over later frames");
        award_lives(&mut session, &config, &mut events);
        assert_eq!(session.lives, 6);
    }
}
