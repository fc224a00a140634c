//! Polygon primitives
//!
//! Local-space models, the scale → rotate → translate transform, procedural
//! rock outlines and exact filled-polygon intersection.

use glam::{Affine2, Vec2};
use rand::Rng;

use crate::params::Params;

/// Straight-alpha RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Self = Self::rgb(211, 211, 211);
    pub const LIGHT_BLUE: Self = Self::rgb(173, 216, 230);
    pub const GOLDENROD: Self = Self::rgb(218, 165, 32);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Closed polygon; the last vertex connects back to the first
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon(pub Vec<Vec2>);

impl Polygon {
    pub fn points(&self) -> &[Vec2] {
        &self.0
    }

    pub fn transformed(&self, transform: &Transform2D) -> Polygon {
        let affine = transform.affine();
        Polygon(self.0.iter().map(|p| affine.transform_point2(*p)).collect())
    }

    /// Scale along the local axes only, before any other transform
    pub fn scaled(&self, scale: Vec2) -> Polygon {
        Polygon(self.0.iter().map(|p| *p * scale).collect())
    }

    fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.0.len();
        (0..n).map(move |i| (self.0[i], self.0[(i + 1) % n]))
    }

    /// Even-odd point containment
    pub fn contains(&self, point: Vec2) -> bool {
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > point.y) != (b.y > point.y) {
                let x_cross = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if point.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// True when the filled regions share any area or boundary
    pub fn intersects(&self, other: &Polygon) -> bool {
        if self.0.len() < 3 || other.0.len() < 3 {
            return false;
        }
        for (a1, a2) in self.edges() {
            for (b1, b2) in other.edges() {
                if segments_intersect(a1, a2, b1, b2) {
                    return true;
                }
            }
        }
        // No edge crossings: either disjoint or one nested in the other
        other.contains(self.0[0]) || self.contains(other.0[0])
    }
}

fn cross(o: Vec2, a: Vec2, b: Vec2) -> f32 {
    (a - o).perp_dot(b - o)
}

fn on_segment(a: Vec2, b: Vec2, p: Vec2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

fn segments_intersect(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> bool {
    let d1 = cross(b1, b2, a1);
    let d2 = cross(b1, b2, a2);
    let d3 = cross(a1, a2, b1);
    let d4 = cross(a1, a2, b2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(b1, b2, a1))
        || (d2 == 0.0 && on_segment(b1, b2, a2))
        || (d3 == 0.0 && on_segment(a1, a2, b1))
        || (d4 == 0.0 && on_segment(a1, a2, b2))
}

/// World-space polygon with its fill colour
#[derive(Debug, Clone, PartialEq)]
pub struct ColoredPolygon {
    pub polygon: Polygon,
    pub color: Rgba,
}

impl ColoredPolygon {
    pub fn new(polygon: Polygon, color: Rgba) -> Self {
        Self { polygon, color }
    }
}

/// Scale, then rotate (degrees), then translate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub scale: Vec2,
    pub rotation_deg: f32,
    pub translation: Vec2,
}

impl Transform2D {
    pub fn new(scale: f32, rotation_deg: f32, translation: Vec2) -> Self {
        Self {
            scale: Vec2::splat(scale),
            rotation_deg,
            translation,
        }
    }

    pub fn affine(&self) -> Affine2 {
        Affine2::from_scale_angle_translation(
            self.scale,
            self.rotation_deg.to_radians(),
            self.translation,
        )
    }
}

/// Irregular rock outline: `n` spokes at even angles, each shortened by a
/// random amount of up to half the radius
pub fn make_rock_polygon<R: Rng>(rng: &mut R, radius: f32) -> Polygon {
    let vertices = rng.gen_range(Params::ROCK_MIN_VERTICES..Params::ROCK_MAX_VERTICES);
    let variance = radius / 2.0;
    let points = (0..vertices)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / vertices as f32;
            let length = radius - rng.gen_range(0.0..variance);
            Vec2::new(angle.cos(), angle.sin()) * length
        })
        .collect();
    Polygon(points)
}

pub fn ship_hull() -> Polygon {
    Polygon(vec![
        Vec2::new(4.0, 0.0),
        Vec2::new(3.0, -1.0),
        Vec2::new(0.0, -2.0),
        Vec2::new(0.0, -5.0),
        Vec2::new(-2.0, -5.0),
        Vec2::new(-3.0, -2.0),
        Vec2::new(-4.0, -1.0),
        Vec2::new(-4.0, 1.0),
        Vec2::new(-3.0, 2.0),
        Vec2::new(-2.0, 5.0),
        Vec2::new(0.0, 5.0),
        Vec2::new(0.0, 2.0),
        Vec2::new(3.0, 1.0),
    ])
}

pub fn ship_window() -> Polygon {
    Polygon(vec![
        Vec2::new(2.0, 0.0),
        Vec2::new(0.0, -1.0),
        Vec2::new(0.0, 1.0),
    ])
}

pub fn ship_booster() -> Polygon {
    Polygon(vec![
        Vec2::new(-4.0, -1.0),
        Vec2::new(-4.0, 1.0),
        Vec2::new(-6.0, 0.0),
    ])
}

const TIP_SEGMENTS: usize = 6;

/// Flat-backed slug with a rounded nose pointing along +x
pub fn bullet_model() -> Polygon {
    let mut points = vec![Vec2::new(0.0, -1.0), Vec2::new(0.0, 1.0)];
    points.extend(cubic_bezier(
        Vec2::new(2.0, 1.0),
        Vec2::new(3.0, 1.0),
        Vec2::new(3.0, -1.0),
        Vec2::new(2.0, -1.0),
        TIP_SEGMENTS,
    ));
    Polygon(points)
}

/// Sampled ellipse inscribed in the box at `top_left` with `size`
pub fn ellipse(top_left: Vec2, size: Vec2, segments: usize) -> Polygon {
    let radii = size * 0.5;
    let center = top_left + radii;
    let points = (0..segments)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / segments as f32;
            center + Vec2::new(angle.cos(), angle.sin()) * radii
        })
        .collect();
    Polygon(points)
}

fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, segments: usize) -> Vec<Vec2> {
    (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let u = 1.0 - t;
            p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn square(center: Vec2, half: f32) -> Polygon {
        Polygon(vec![
            center + Vec2::new(-half, -half),
            center + Vec2::new(half, -half),
            center + Vec2::new(half, half),
            center + Vec2::new(-half, half),
        ])
    }

    #[test]
    fn test_transform_order_is_scale_rotate_translate() {
        let t = Transform2D::new(2.0, 90.0, Vec2::new(10.0, 0.0));
        let p = Polygon(vec![Vec2::new(1.0, 0.0)]).transformed(&t);
        // (1,0) -> scale (2,0) -> rotate 90° (0,2) -> translate (10,2)
        assert!((p.0[0] - Vec2::new(10.0, 2.0)).length() < 1e-5);
    }

    #[test]
    fn test_overlapping_squares_intersect() {
        let a = square(Vec2::ZERO, 1.0);
        let b = square(Vec2::new(1.5, 0.0), 1.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_disjoint_squares_do_not_intersect() {
        let a = square(Vec2::ZERO, 1.0);
        let b = square(Vec2::new(3.0, 0.0), 1.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_nested_polygon_intersects() {
        let outer = square(Vec2::ZERO, 10.0);
        let inner = square(Vec2::ZERO, 1.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_concave_notch_does_not_intersect() {
        // The hull has a notch between the wings at x in [0, 3], |y| in [1, 2]
        let hull = ship_hull();
        let in_notch = square(Vec2::new(1.5, 3.0), 0.2);
        assert!(!hull.intersects(&in_notch));
        assert!(hull.contains(Vec2::new(-1.0, 0.0)));
    }

    #[test]
    fn test_rock_polygon_vertex_count_and_radius() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let rock = make_rock_polygon(&mut rng, 30.0);
            let n = rock.points().len();
            assert!((Params::ROCK_MIN_VERTICES..Params::ROCK_MAX_VERTICES).contains(&n));
            for p in rock.points() {
                let r = p.length();
                assert!(r > 15.0 - 1e-4 && r <= 30.0 + 1e-4, "radius {r}");
            }
        }
    }

    #[test]
    fn test_bullet_model_reaches_tip() {
        let model = bullet_model();
        let max_x = model.points().iter().map(|p| p.x).fold(f32::MIN, f32::max);
        assert!(max_x > 2.5 && max_x <= 3.0);
        assert!(model.contains(Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn test_ellipse_stays_in_box() {
        let e = ellipse(Vec2::new(10.0, 20.0), Vec2::splat(2.0), 8);
        for p in e.points() {
            assert!(p.x >= 10.0 - 1e-5 && p.x <= 12.0 + 1e-5);
            assert!(p.y >= 20.0 - 1e-5 && p.y <= 22.0 + 1e-5);
        }
    }
}
