use hecs::{Entity, World};

use crate::audio::{Audio, Cue, Track};
use crate::error::ConfigError;
use crate::fsm::{GameAction, GameFsm, GamePhase};
use crate::hud::{start_button, Anchor, HudText, PromptColor, TextSize, TITLE};
use crate::input::{EdgeDetector, Edges, InputState};
use crate::render::{draw_all, Renderer};
use crate::shape::{ColoredPolygon, Rgba};
use crate::systems::{clear_play_field, spawn_rocks, spawn_stars, Mirror};
use crate::{create_ship, step, Body, Config, Events, GameRng, Kind, PlayArea, RockSize, Session, Time};

/// One player's game session: world, rules state and the state machine
///
/// The host drives it with [`Game::tick`] at a fixed interval and paints it
/// with [`Game::render`]. The play area is passed on every tick and never
/// kept, so a resize takes effect on the next frame.
pub struct Game {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub session: Session,
    pub events: Events,
    pub rng: GameRng,
    fsm: GameFsm,
    edges: EdgeDetector,
    prompt: PromptColor,
    ship: Option<Entity>,
    mirrors: Vec<Mirror>,
    music: Option<Track>,
    connected: bool,
}

impl Game {
    pub fn new(config: Config, seed: u64, area: PlayArea) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        // Background, kept for the whole session
        spawn_stars(&mut world, &mut rng, &area, config.star_count);

        Ok(Self {
            world,
            time: Time::default(),
            session: Session::new(config.start_lives),
            config,
            events: Events::new(),
            rng,
            fsm: GameFsm::new(),
            edges: EdgeDetector::new(),
            prompt: PromptColor::new(),
            ship: None,
            mirrors: Vec::new(),
            music: None,
            connected: false,
        })
    }

    /// Advance one frame of `dt` seconds
    pub fn tick(&mut self, input: &InputState, area: PlayArea, dt: f32, audio: &mut dyn Audio) {
        self.time.advance(dt);
        self.connected = input.connected;
        self.events.clear();
        let edges = self.edges.update(input);

        // Nothing can be placed or wrapped in an empty area
        if !area.is_valid() {
            tracing::trace!(?area, "frame skipped");
            self.sync_music(audio);
            return;
        }

        match self.fsm.state() {
            GamePhase::Menu => self.prompt.advance(),
            GamePhase::Gameover => {
                self.prompt.advance();
                clear_play_field(&mut self.world);
                self.ship = None;
                self.mirrors.clear();
            }
            GamePhase::Started | GamePhase::Paused => {}
        }

        if edges.start {
            let action = self.fsm.start_action();
            let result = self.fsm.transition(action);
            if result.success {
                if matches!(
                    (result.from_state, result.to_state),
                    (GamePhase::Menu, GamePhase::Started)
                ) {
                    self.begin(&area);
                }
                audio.play(Cue::Confirm);
            }
        } else if self.fsm.is_playing() {
            self.play_frame(input, &edges, &area, audio);
        }

        self.sync_music(audio);
    }

    fn begin(&mut self, area: &PlayArea) {
        clear_play_field(&mut self.world);
        self.session = Session::new(self.config.start_lives);
        self.ship = Some(create_ship(
            &mut self.world,
            area.center(),
            self.config.fade_frames,
        ));
        spawn_rocks(
            &mut self.world,
            &mut self.rng,
            area,
            self.config.start_rocks,
            RockSize::Large,
            self.config.fade_frames,
        );
        self.mirrors.clear();
        tracing::info!(lives = self.session.lives, "game started");
    }

    fn play_frame(&mut self, input: &InputState, edges: &Edges, area: &PlayArea, audio: &mut dyn Audio) {
        self.mirrors = step(
            &mut self.world,
            self.ship,
            input,
            edges,
            &self.time,
            area,
            &self.config,
            &mut self.session,
            &mut self.events,
            &mut self.rng,
        );

        for _ in 0..self.events.shots_fired {
            audio.play(Cue::Laser);
        }
        for _ in 0..self.events.rocks_destroyed {
            audio.play(Cue::Explosion);
        }
        if self.events.ship_hit {
            audio.play(Cue::Explosion);
        }
        if self.events.lives_exhausted && self.fsm.transition(GameAction::LivesExhausted).success {
            audio.play(Cue::GameOver);
            tracing::info!(score = self.session.score, "game over");
        }
        if self.events.bonus_life {
            audio.play(Cue::BonusLife);
        }
    }

    fn sync_music(&mut self, audio: &mut dyn Audio) {
        let desired = match self.fsm.state() {
            GamePhase::Menu => Track::Calm,
            _ => Track::Battle,
        };
        if self.music != Some(desired) {
            tracing::debug!(track = ?desired, "music");
            audio.set_track(desired, true);
            self.music = Some(desired);
        }
    }

    /// Every polygon for this frame, back to front
    ///
    /// Stars are always drawn; the play field only while the game is live.
    pub fn draw_list(&self) -> Vec<ColoredPolygon> {
        let flash_on = self.time.flash_on();
        let mut shapes = Vec::new();

        for (_e, (body, kind)) in self.world.query::<(&Body, &Kind)>().iter() {
            if matches!(kind, Kind::Star) {
                shapes.extend(kind.shapes(body, flash_on));
            }
        }

        if !self.fsm.is_playing() {
            return shapes;
        }

        for mirror in &self.mirrors {
            let (Ok(body), Ok(kind)) = (
                self.world.get::<&Body>(mirror.source),
                self.world.get::<&Kind>(mirror.source),
            ) else {
                continue;
            };
            shapes.extend(kind.shapes(&mirror.body(&body), flash_on));
        }

        for (_e, (body, kind)) in self.world.query::<(&Body, &Kind)>().iter() {
            if !matches!(kind, Kind::Star) {
                shapes.extend(kind.shapes(body, flash_on));
            }
        }

        shapes
    }

    /// Text overlays for the current state
    pub fn hud(&self) -> Vec<HudText> {
        let button = start_button(self.connected);
        match self.fsm.state() {
            GamePhase::Menu => vec![
                HudText::new(TITLE, Rgba::LIGHT_GRAY, TextSize::Big, Anchor::Center, 0),
                HudText::new(
                    format!("Press {button} to begin!"),
                    self.prompt.color(),
                    TextSize::Medium,
                    Anchor::Center,
                    3,
                ),
            ],
            GamePhase::Started => vec![
                HudText::new(
                    format!("Score: {}", self.session.score),
                    Rgba::LIGHT_GRAY,
                    TextSize::Small,
                    Anchor::TopLeft,
                    0,
                ),
                HudText::new(
                    format!("Lives: {}", self.session.lives),
                    Rgba::LIGHT_GRAY,
                    TextSize::Small,
                    Anchor::TopLeft,
                    1,
                ),
            ],
            GamePhase::Paused => vec![
                HudText::new(TITLE, Rgba::LIGHT_GRAY, TextSize::Big, Anchor::Center, 0),
                HudText::new("Paused", Rgba::RED, TextSize::Medium, Anchor::Center, 3),
            ],
            GamePhase::Gameover => vec![
                HudText::new(
                    format!("Final score: {}", self.session.score),
                    Rgba::RED,
                    TextSize::Medium,
                    Anchor::Center,
                    0,
                ),
                HudText::new(
                    format!("Press {button} to continue"),
                    self.prompt.color(),
                    TextSize::Medium,
                    Anchor::Center,
                    2,
                ),
            ],
        }
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        draw_all(renderer, &self.draw_list());
        for text in self.hud() {
            renderer.draw_text(&text);
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.fsm.state()
    }

    pub fn ship(&self) -> Option<Entity> {
        self.ship
    }

    pub fn mirrors(&self) -> &[Mirror] {
        &self.mirrors
    }

    pub fn music(&self) -> Option<Track> {
        self.music
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Silent;
    use crate::Params;
    use glam::Vec2;

    fn area() -> PlayArea {
        PlayArea::new(800.0, 600.0).unwrap()
    }

    fn game() -> Game {
        Game::new(Config::new(), 7, area()).unwrap()
    }

    fn press_start() -> InputState {
        InputState {
            start: true,
            ..InputState::default()
        }
    }

    fn tick(game: &mut Game, input: InputState) {
        game.tick(&input, area(), Params::FRAME_MS as f32 / 1000.0, &mut Silent);
    }

    #[test]
    fn test_new_game_has_only_stars() {
        let game = game();
        assert_eq!(game.world.len() as usize, Params::STAR_COUNT);
        assert_eq!(game.phase(), GamePhase::Menu);
        assert!(game.ship().is_none());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = Config {
            start_lives: 0,
            ..Config::default()
        };
        assert!(Game::new(config, 1, area()).is_err());
    }

    #[test]
    fn test_start_spawns_ship_and_rocks() {
        let mut game = game();
        tick(&mut game, press_start());

        assert_eq!(game.phase(), GamePhase::Started);
        let ship = game.ship().unwrap();
        let body = *game.world.get::<&Body>(ship).unwrap();
        assert_eq!(body.pos, Vec2::new(400.0, 300.0));
        assert_eq!(body.fade, Params::FADE_FRAMES);

        let rocks = game
            .world
            .query::<&Kind>()
            .iter()
            .filter(|(_e, kind)| kind.as_rock().map(|r| r.size) == Some(RockSize::Large))
            .count();
        assert_eq!(rocks, Params::START_ROCKS as usize);
        assert_eq!(game.session.lives, 3);
        assert_eq!(game.session.score, 0);
    }

    #[test]
    fn test_held_start_triggers_once() {
        let mut game = game();
        for _ in 0..10 {
            tick(&mut game, press_start());
        }
        assert_eq!(game.phase(), GamePhase::Started);

        tick(&mut game, InputState::default());
        tick(&mut game, press_start());
        assert_eq!(game.phase(), GamePhase::Paused);
    }

    #[test]
    fn test_pause_freezes_the_world() {
        let mut game = game();
        tick(&mut game, press_start());
        tick(&mut game, InputState::default());
        tick(&mut game, press_start());
        assert_eq!(game.phase(), GamePhase::Paused);

        let before: Vec<Body> = game.world.query::<&Body>().iter().map(|(_e, b)| *b).collect();
        for _ in 0..20 {
            tick(&mut game, InputState::default());
        }
        let after: Vec<Body> = game.world.query::<&Body>().iter().map(|(_e, b)| *b).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_menu_draws_stars_only() {
        let game = game();
        assert_eq!(game.draw_list().len(), Params::STAR_COUNT);
        let hud = game.hud();
        assert_eq!(hud[0].text, TITLE);
        assert_eq!(hud[1].text, "Press P to begin!");
    }

    #[test]
    fn test_prompt_names_controller_button() {
        let mut game = game();
        tick(
            &mut game,
            InputState {
                connected: true,
                ..InputState::default()
            },
        );
        assert_eq!(game.hud()[1].text, "Press Start to begin!");
    }

    #[test]
    fn test_started_hud_shows_score_and_lives() {
        let mut game = game();
        tick(&mut game, press_start());
        let hud = game.hud();
        assert_eq!(hud[0].text, "Score: 0");
        assert_eq!(hud[1].text, "Lives: 3");
    }

    #[test]
    fn test_music_follows_state() {
        let mut game = game();
        tick(&mut game, InputState::default());
        assert_eq!(game.music(), Some(Track::Calm));
        tick(&mut game, press_start());
        assert_eq!(game.music(), Some(Track::Battle));
    }

    #[test]
    fn test_wrap_images_survive_a_pause() {
        let mut game = game();
        tick(&mut game, press_start());
        let ship = game.ship().unwrap();
        game.world.get::<&mut Body>(ship).unwrap().pos = Vec2::new(5.0, 300.0);
        tick(&mut game, InputState::default());

        let before = game.mirrors().to_vec();
        assert!(before.iter().any(|m| m.source == ship));

        tick(&mut game, press_start());
        assert_eq!(game.phase(), GamePhase::Paused);
        tick(&mut game, InputState::default());
        tick(&mut game, press_start());
        assert_eq!(game.phase(), GamePhase::Started);

        assert_eq!(game.mirrors(), before.as_slice());
    }

    #[test]
    fn test_empty_area_skips_frames_through_a_wave() {
        let config = Config {
            wave_delay_secs: 0.05,
            ..Config::default()
        };
        let mut game = Game::new(config, 7, area()).unwrap();
        tick(&mut game, press_start());
        let population = game.world.len();

        let minimised = PlayArea {
            width: 0.0,
            height: 0.0,
        };
        for _ in 0..5 {
            game.tick(&InputState::default(), minimised, 0.017, &mut Silent);
        }
        assert_eq!(game.phase(), GamePhase::Started);
        assert_eq!(game.world.len(), population);

        for _ in 0..5 {
            tick(&mut game, InputState::default());
        }
        assert!(game.world.len() > population, "waves resume once the area is back");
    }
}
