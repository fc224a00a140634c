use glam::Vec2;
use rand::Rng;

use crate::params::Params;
use crate::shape::{self, ColoredPolygon, Polygon, Rgba, Transform2D};

/// Motion state shared by every entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub heading: f32, // degrees, 0 = +x
    pub spin: f32,    // degrees per frame
    pub radius: f32,  // coarse bound only, polygons decide actual hits
    pub fade: u32,    // frames of flashing left, 0 = normal
    pub dead: bool,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            heading: 0.0,
            spin: 0.0,
            radius,
            fade: 0,
            dead: false,
        }
    }

    pub fn heading_dir(&self) -> Vec2 {
        let rad = self.heading.to_radians();
        Vec2::new(rad.cos(), rad.sin())
    }

    /// Re-derive the velocity vector from a linear speed along the heading
    pub fn set_speed(&mut self, linear_speed: f32) {
        self.vel = self.heading_dir() * linear_speed;
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.pos += offset;
    }

    /// Coarse circle-circle overlap used before any polygon test
    pub fn near(&self, other: &Body) -> bool {
        self.pos.distance(other.pos) < self.radius + other.radius
    }
}

/// Rock size tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RockSize {
    Small,
    Medium,
    Large,
}

impl RockSize {
    pub fn radius(self) -> f32 {
        let tier = match self {
            RockSize::Small => 1.0,
            RockSize::Medium => 2.0,
            RockSize::Large => 3.0,
        };
        Params::ROCK_SIZE_SCALE * tier
    }

    pub fn points(self) -> u32 {
        match self {
            RockSize::Large => Params::LARGE_ROCK_POINTS,
            RockSize::Medium => Params::MEDIUM_ROCK_POINTS,
            RockSize::Small => Params::SMALL_ROCK_POINTS,
        }
    }

    /// Next tier down, if a rock of this size breaks into pieces
    pub fn split(self) -> Option<RockSize> {
        match self {
            RockSize::Large => Some(RockSize::Medium),
            RockSize::Medium => Some(RockSize::Small),
            RockSize::Small => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub color: Rgba,
    pub linear_speed: f32,
}

impl Ship {
    pub fn new(color: Rgba) -> Self {
        Self {
            color,
            linear_speed: 0.0,
        }
    }

    /// Muzzle position, a fixed distance ahead of the ship's centre
    pub fn gun_port(body: &Body) -> Vec2 {
        body.pos + body.heading_dir() * Params::GUN_PORT_DISTANCE
    }

    /// Jam the booster: full speed along the current heading
    pub fn boost(&mut self, body: &mut Body, max_speed: f32) {
        self.linear_speed = max_speed;
        body.set_speed(self.linear_speed);
    }

    /// Coast: bleed off a fixed amount of speed per frame
    pub fn decay(&mut self, body: &mut Body, decay: f32) {
        if self.linear_speed > 0.0 {
            self.linear_speed = (self.linear_speed - decay).max(0.0);
        }
        body.set_speed(self.linear_speed);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rock {
    pub size: RockSize,
    pub model: Polygon, // generated once at spawn
}

impl Rock {
    pub fn new<R: Rng>(size: RockSize, rng: &mut R) -> Self {
        Self {
            size,
            model: shape::make_rock_polygon(rng, size.radius()),
        }
    }
}

/// Precedence tag; the derive order is the collision sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KindTag {
    Ship,
    Bullet,
    Rock,
    Star,
}

/// What an entity is, with the per-variant data it needs
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    Ship(Ship),
    Rock(Rock),
    Bullet,
    Star,
}

impl Kind {
    pub fn tag(&self) -> KindTag {
        match self {
            Kind::Ship(_) => KindTag::Ship,
            Kind::Bullet => KindTag::Bullet,
            Kind::Rock(_) => KindTag::Rock,
            Kind::Star => KindTag::Star,
        }
    }

    pub fn as_rock(&self) -> Option<&Rock> {
        match self {
            Kind::Rock(rock) => Some(rock),
            _ => None,
        }
    }

    /// World-space polygons in draw order, back to front
    ///
    /// `flash_on` is the shared animation clock's flash phase; it only
    /// matters while the body's fade is counting down.
    pub fn shapes(&self, body: &Body, flash_on: bool) -> Vec<ColoredPolygon> {
        let faded = body.fade > 0 && flash_on;
        match self {
            Kind::Ship(ship) => {
                let hull_color = if faded {
                    ship.color.with_alpha(Params::FADE_ALPHA)
                } else {
                    ship.color
                };
                let main = Transform2D::new(Params::SHIP_SCALE, body.heading, body.pos);
                let mut shapes = vec![
                    ColoredPolygon::new(shape::ship_hull().transformed(&main), hull_color),
                    ColoredPolygon::new(shape::ship_window().transformed(&main), Rgba::LIGHT_BLUE),
                ];
                if ship.linear_speed > 0.0 {
                    let throttle = ship.linear_speed / Params::SHIP_MAX_SPEED;
                    let booster = shape::ship_booster()
                        .scaled(Vec2::new(1.0, throttle))
                        .transformed(&main);
                    shapes.push(ColoredPolygon::new(booster, Rgba::GOLDENROD));
                }
                shapes
            }
            Kind::Rock(rock) => {
                let color = if faded {
                    Rgba::GRAY.with_alpha(Params::FADE_ALPHA)
                } else {
                    Rgba::GRAY
                };
                let transform = Transform2D::new(1.0, body.heading, body.pos);
                vec![ColoredPolygon::new(rock.model.transformed(&transform), color)]
            }
            Kind::Bullet => {
                let transform = Transform2D::new(Params::BULLET_SCALE, body.heading, body.pos);
                vec![ColoredPolygon::new(
                    shape::bullet_model().transformed(&transform),
                    Rgba::YELLOW,
                )]
            }
            Kind::Star => vec![ColoredPolygon::new(
                shape::ellipse(body.pos, Vec2::splat(Params::STAR_SIZE), 8),
                Rgba::WHITE,
            )],
        }
    }

    /// The polygon used for exact hit tests (the outermost one)
    pub fn hit_polygon(&self, body: &Body) -> Option<Polygon> {
        self.shapes(body, false)
            .into_iter()
            .next()
            .map(|shape| shape.polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_rock_split_chain() {
        assert_eq!(RockSize::Large.split(), Some(RockSize::Medium));
        assert_eq!(RockSize::Medium.split(), Some(RockSize::Small));
        assert_eq!(RockSize::Small.split(), None);
    }

    #[test]
    fn test_rock_radius_by_tier() {
        assert_eq!(RockSize::Small.radius(), 10.0);
        assert_eq!(RockSize::Medium.radius(), 20.0);
        assert_eq!(RockSize::Large.radius(), 30.0);
    }

    #[test]
    fn test_kind_tag_order() {
        assert!(KindTag::Ship < KindTag::Bullet);
        assert!(KindTag::Bullet < KindTag::Rock);
        assert!(KindTag::Rock < KindTag::Star);
    }

    #[test]
    fn test_near_is_symmetric() {
        let a = Body::new(Vec2::new(0.0, 0.0), 10.0);
        let b = Body::new(Vec2::new(25.0, 0.0), 20.0);
        let c = Body::new(Vec2::new(100.0, 0.0), 5.0);
        assert!(a.near(&b) && b.near(&a));
        assert!(!a.near(&c) && !c.near(&a));
    }

    #[test]
    fn test_boost_and_decay() {
        let mut body = Body::new(Vec2::ZERO, Params::SHIP_RADIUS);
        body.heading = 90.0;
        let mut ship = Ship::new(Rgba::RED);

        ship.boost(&mut body, 2.0);
        assert_eq!(ship.linear_speed, 2.0);
        assert!((body.vel - Vec2::new(0.0, 2.0)).length() < 1e-5);

        for _ in 0..100 {
            ship.decay(&mut body, 0.05);
        }
        assert_eq!(ship.linear_speed, 0.0, "decay bottoms out at zero");
        assert!(body.vel.length() < 1e-6);
    }

    #[test]
    fn test_gun_port_ahead_of_ship() {
        let mut body = Body::new(Vec2::new(400.0, 300.0), Params::SHIP_RADIUS);
        body.heading = 0.0;
        assert_eq!(Ship::gun_port(&body), Vec2::new(425.0, 300.0));
    }

    #[test]
    fn test_ship_shapes_layering() {
        let body = Body::new(Vec2::new(100.0, 100.0), Params::SHIP_RADIUS);
        let mut ship = Ship::new(Rgba::RED);
        let kind = Kind::Ship(ship.clone());
        let shapes = kind.shapes(&body, false);
        assert_eq!(shapes.len(), 2, "no booster while coasting at zero speed");
        assert_eq!(shapes[0].color, Rgba::RED);
        assert_eq!(shapes[1].color, Rgba::LIGHT_BLUE);

        ship.linear_speed = 1.0;
        let shapes = Kind::Ship(ship).shapes(&body, false);
        assert_eq!(shapes.len(), 3);
        assert_eq!(shapes[2].color, Rgba::GOLDENROD);
    }

    #[test]
    fn test_faded_ship_flashes() {
        let mut body = Body::new(Vec2::ZERO, Params::SHIP_RADIUS);
        body.fade = 10;
        let kind = Kind::Ship(Ship::new(Rgba::RED));
        assert_eq!(kind.shapes(&body, true)[0].color.a, Params::FADE_ALPHA);
        assert_eq!(kind.shapes(&body, false)[0].color.a, 255);
        body.fade = 0;
        assert_eq!(kind.shapes(&body, true)[0].color.a, 255);
    }

    #[test]
    fn test_rock_shape_follows_body() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let kind = Kind::Rock(Rock::new(RockSize::Large, &mut rng));
        let body = Body::new(Vec2::new(50.0, 60.0), RockSize::Large.radius());
        let polygon = kind.hit_polygon(&body).unwrap();
        for p in polygon.points() {
            assert!(p.distance(body.pos) <= RockSize::Large.radius() + 1e-3);
        }
    }
}
