//! 2D shape primitives
//!
//! Every visible entity - bubbles, the player token, UI buttons, art
//! tiles, confetti - is a `Shape`: a position, size and velocity plus a
//! color, with the concrete geometry carried by a `ShapeKind` tag.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA color, all channels in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::opaque(0.0, 0.0, 0.0);
    pub const RED: Rgba = Rgba::opaque(1.0, 0.0, 0.0);
    pub const BLUE: Rgba = Rgba::opaque(0.0, 0.0, 1.0);
    pub const YELLOW: Rgba = Rgba::opaque(1.0, 1.0, 0.0);
    pub const GRAY: Rgba = Rgba::opaque(0.7, 0.7, 0.7);
    pub const PURPLE: Rgba = Rgba::opaque(0.8, 0.0, 0.8);
    pub const MAGENTA: Rgba = Rgba::opaque(1.0, 0.0, 1.0);
    pub const CYAN: Rgba = Rgba::opaque(0.0, 1.0, 1.0);
    /// Fully transparent
    pub const CLEAR: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

/// Concrete geometry of a [`Shape`]
///
/// Replaces runtime downcasting with an explicit tag: overlap tests
/// switch on both tags instead of inspecting concrete types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle { radius: f32 },
    Rect,
}

/// A 2D body with position, size, velocity and color
///
/// `pos` is the center; rect edges are `pos +/- size / 2`. For circles,
/// `size == (2r, 2r)` always holds (maintained by the constructors and
/// `set_radius`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub color: Rgba,
}

impl Shape {
    /// A circle at rest
    pub fn circle(pos: Vec2, radius: f32, color: Rgba) -> Self {
        Self {
            kind: ShapeKind::Circle { radius },
            pos,
            size: Vec2::splat(radius * 2.0),
            vel: Vec2::ZERO,
            color,
        }
    }

    /// A moving circle
    pub fn moving_circle(pos: Vec2, radius: f32, vel: Vec2, color: Rgba) -> Self {
        let mut c = Self::circle(pos, radius, color);
        c.vel = vel;
        c
    }

    /// An axis-aligned rectangle at rest
    pub fn rect(pos: Vec2, size: Vec2, color: Rgba) -> Self {
        Self {
            kind: ShapeKind::Rect,
            pos,
            size,
            vel: Vec2::ZERO,
            color,
        }
    }

    /// A square rectangle
    pub fn square(pos: Vec2, side: f32, color: Rgba) -> Self {
        Self::rect(pos, Vec2::splat(side), color)
    }

    /// Circle radius, or `None` for rects
    pub fn radius(&self) -> Option<f32> {
        match self.kind {
            ShapeKind::Circle { radius } => Some(radius),
            ShapeKind::Rect => None,
        }
    }

    /// Resize a circle, keeping `size` in sync; no-op for rects
    pub fn set_radius(&mut self, radius: f32) {
        if let ShapeKind::Circle { radius: r } = &mut self.kind {
            *r = radius;
            self.size = Vec2::splat(radius * 2.0);
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    /// Whether a point (e.g. the cursor) lies within the bounding box
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.bottom() && p.y <= self.top()
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    /// Overrides only the alpha channel
    pub fn set_opacity(&mut self, opacity: f32) {
        self.color.a = opacity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_size_tracks_radius() {
        let mut c = Shape::circle(Vec2::new(10.0, 10.0), 5.0, Rgba::WHITE);
        assert_eq!(c.size, Vec2::splat(10.0));

        c.set_radius(8.0);
        assert_eq!(c.radius(), Some(8.0));
        assert_eq!(c.size, Vec2::splat(16.0));
    }

    #[test]
    fn rect_edges_derive_from_center() {
        let r = Shape::rect(Vec2::new(100.0, 50.0), Vec2::new(20.0, 10.0), Rgba::RED);
        assert_eq!(r.left(), 90.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 45.0);
        assert_eq!(r.top(), 55.0);
    }

    #[test]
    fn contains_point_includes_edges() {
        let r = Shape::square(Vec2::new(0.0, 0.0), 10.0, Rgba::WHITE);
        assert!(r.contains_point(Vec2::new(5.0, 5.0)));
        assert!(r.contains_point(Vec2::ZERO));
        assert!(!r.contains_point(Vec2::new(5.1, 0.0)));
    }

    #[test]
    fn set_radius_is_noop_for_rects() {
        let mut r = Shape::square(Vec2::ZERO, 10.0, Rgba::WHITE);
        r.set_radius(99.0);
        assert_eq!(r.kind, ShapeKind::Rect);
        assert_eq!(r.size, Vec2::splat(10.0));
    }
}
