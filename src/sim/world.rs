//! Per-frame physics for the bubble field
//!
//! Integrates bubble positions, reflects them off the field edges,
//! resolves bubble-bubble bounces and reports player hits.

use glam::Vec2;

use super::collision::{bounce, circle_overlaps_rect, circles_overlap};
use super::shape::{Shape, ShapeKind};
use crate::consts::{GRACE_PERIOD, HIT_SKIP_AT, HIT_SKIP_WINDOW};

/// Emitted when a bubble touches the player token
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerHit {
    /// Level clock reading at the moment of the hit
    pub time_survived: f32,
}

/// Owns the active bubbles and the field bounds
#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    bounds: Vec2,
    pub bubbles: Vec<Shape>,
}

impl PhysicsWorld {
    pub fn new(bounds: Vec2) -> Self {
        Self {
            bounds,
            bubbles: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Replace the field wholesale (level start)
    pub fn set_bubbles(&mut self, bubbles: Vec<Shape>) {
        self.bubbles = bubbles;
    }

    /// Discard the field wholesale (level end)
    pub fn clear(&mut self) {
        self.bubbles.clear();
    }

    /// Advance the field by one frame
    ///
    /// Returns the first player hit detected this frame, if any. The
    /// scan stops at the first overlapping bubble so a frame can never
    /// cost more than one life. Hits are suppressed during the spawn
    /// grace period, inside the near-expiry skip window and while god
    /// mode is on.
    pub fn update(
        &mut self,
        dt: f32,
        elapsed_in_level: f32,
        player: &Shape,
        god_mode: bool,
    ) -> Option<PlayerHit> {
        for bubble in &mut self.bubbles {
            integrate_and_reflect(bubble, self.bounds, dt);
        }

        self.resolve_pairs();

        if !hit_check_active(elapsed_in_level) || god_mode {
            return None;
        }
        for bubble in &self.bubbles {
            if let ShapeKind::Circle { radius } = bubble.kind
                && circle_overlaps_rect(bubble.pos, radius, player)
            {
                return Some(PlayerHit {
                    time_survived: elapsed_in_level,
                });
            }
        }
        None
    }

    /// Full double iteration with self-exclusion
    ///
    /// An overlapping pair may be resolved twice in one frame, once from
    /// each side; the second pass only fires if the first left them
    /// still overlapping, which helps convergence in dense fields.
    fn resolve_pairs(&mut self) {
        let n = self.bubbles.len();
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let (a, b) = if i < j {
                    let (lo, hi) = self.bubbles.split_at_mut(j);
                    (&mut lo[i], &mut hi[0])
                } else {
                    let (lo, hi) = self.bubbles.split_at_mut(i);
                    (&mut hi[0], &mut lo[j])
                };
                let overlapping = match (a.kind, b.kind) {
                    (ShapeKind::Circle { radius: ra }, ShapeKind::Circle { radius: rb }) => {
                        circles_overlap(a.pos, ra, b.pos, rb)
                    }
                    _ => false,
                };
                if overlapping {
                    bounce(a, b);
                }
            }
        }
    }
}

/// Whether player-bubble hits are evaluated at this level clock reading
fn hit_check_active(elapsed: f32) -> bool {
    if elapsed < GRACE_PERIOD {
        return false;
    }
    // One-frame blind spot just before the level expires
    !(HIT_SKIP_AT..HIT_SKIP_AT + HIT_SKIP_WINDOW).contains(&elapsed)
}

/// Advance one bubble and bounce it off the field edges
///
/// Each axis reflects independently: the position is clamped to the
/// boundary and that component of the velocity is negated, with no
/// energy loss.
fn integrate_and_reflect(bubble: &mut Shape, bounds: Vec2, dt: f32) {
    let ShapeKind::Circle { radius } = bubble.kind else {
        return;
    };

    let mut pos = bubble.pos + bubble.vel * dt;
    let mut vel = bubble.vel;

    if pos.x - radius <= 0.0 {
        pos.x = radius;
        vel.x = -vel.x;
    }
    if pos.x + radius >= bounds.x {
        pos.x = bounds.x - radius;
        vel.x = -vel.x;
    }
    if pos.y - radius <= 0.0 {
        pos.y = radius;
        vel.y = -vel.y;
    }
    if pos.y + radius >= bounds.y {
        pos.y = bounds.y - radius;
        vel.y = -vel.y;
    }

    bubble.pos = pos;
    bubble.vel = vel;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::shape::Rgba;
    use proptest::prelude::*;

    const BOUNDS: Vec2 = Vec2::new(1600.0, 1200.0);

    fn bubble(x: f32, y: f32, radius: f32, vel: Vec2) -> Shape {
        Shape::moving_circle(Vec2::new(x, y), radius, vel, Rgba::WHITE)
    }

    fn player_at(x: f32, y: f32) -> Shape {
        Shape::square(Vec2::new(x, y), 20.0, Rgba::WHITE)
    }

    #[test]
    fn wall_bounce_reverses_one_component() {
        let mut b = bubble(5.0, 600.0, 10.0, Vec2::new(-30.0, 12.0));
        integrate_and_reflect(&mut b, BOUNDS, 0.5);
        // Left wall: x clamped to radius, x velocity reversed, y untouched
        assert_eq!(b.pos.x, 10.0);
        assert_eq!(b.vel, Vec2::new(30.0, 12.0));
    }

    #[test]
    fn corner_bounce_reverses_both_components() {
        let mut b = bubble(3.0, 3.0, 10.0, Vec2::new(-20.0, -20.0));
        integrate_and_reflect(&mut b, BOUNDS, 0.1);
        assert_eq!(b.pos, Vec2::new(10.0, 10.0));
        assert_eq!(b.vel, Vec2::new(20.0, 20.0));
    }

    #[test]
    fn hit_reports_level_clock_reading() {
        let mut world = PhysicsWorld::new(BOUNDS);
        world.set_bubbles(vec![bubble(800.0, 600.0, 15.0, Vec2::ZERO)]);
        let player = player_at(800.0, 600.0);

        let hit = world.update(0.0, 10.0, &player, false);
        assert_eq!(hit, Some(PlayerHit { time_survived: 10.0 }));
    }

    #[test]
    fn at_most_one_hit_per_frame() {
        let mut world = PhysicsWorld::new(BOUNDS);
        // Three bubbles all overlapping the player at once
        world.set_bubbles(vec![
            bubble(800.0, 600.0, 15.0, Vec2::ZERO),
            bubble(802.0, 600.0, 15.0, Vec2::ZERO),
            bubble(800.0, 602.0, 15.0, Vec2::ZERO),
        ]);
        let player = player_at(800.0, 600.0);

        let hits = world.update(0.0, 5.0, &player, false);
        assert!(hits.is_some());
    }

    #[test]
    fn grace_period_suppresses_hits() {
        let mut world = PhysicsWorld::new(BOUNDS);
        world.set_bubbles(vec![bubble(800.0, 600.0, 15.0, Vec2::ZERO)]);
        let player = player_at(800.0, 600.0);

        assert!(world.update(0.0, 1.0, &player, false).is_none());
        assert!(world.update(0.0, 1.5, &player, false).is_some());
    }

    #[test]
    fn near_expiry_window_suppresses_hits() {
        let mut world = PhysicsWorld::new(BOUNDS);
        world.set_bubbles(vec![bubble(800.0, 600.0, 15.0, Vec2::ZERO)]);
        let player = player_at(800.0, 600.0);

        assert!(world.update(0.0, 19.5, &player, false).is_none());
        assert!(world.update(0.0, 19.6, &player, false).is_some());
    }

    #[test]
    fn god_mode_suppresses_hits() {
        let mut world = PhysicsWorld::new(BOUNDS);
        world.set_bubbles(vec![bubble(800.0, 600.0, 15.0, Vec2::ZERO)]);
        let player = player_at(800.0, 600.0);

        assert!(world.update(0.0, 10.0, &player, true).is_none());
    }

    #[test]
    fn overlapping_bubbles_separate() {
        let mut world = PhysicsWorld::new(BOUNDS);
        world.set_bubbles(vec![
            bubble(800.0, 600.0, 10.0, Vec2::new(5.0, 0.0)),
            bubble(812.0, 600.0, 10.0, Vec2::new(-5.0, 0.0)),
        ]);
        let player = player_at(100.0, 100.0);

        let before = world.bubbles[0].pos.distance(world.bubbles[1].pos);
        world.update(0.0, 10.0, &player, false);
        let after = world.bubbles[0].pos.distance(world.bubbles[1].pos);
        assert!(after > before);
    }

    proptest! {
        #[test]
        fn bubbles_never_escape_the_field(
            x in 0.0f32..1600.0, y in 0.0f32..1200.0,
            vx in -200.0f32..200.0, vy in -200.0f32..200.0,
            radius in 5.0f32..25.0,
            dt in 0.001f32..0.1,
        ) {
            let mut b = bubble(
                x.clamp(radius, 1600.0 - radius),
                y.clamp(radius, 1200.0 - radius),
                radius,
                Vec2::new(vx, vy),
            );
            for _ in 0..50 {
                integrate_and_reflect(&mut b, BOUNDS, dt);
                prop_assert!(b.pos.x >= radius && b.pos.x <= 1600.0 - radius);
                prop_assert!(b.pos.y >= radius && b.pos.y <= 1200.0 - radius);
            }
        }

        #[test]
        fn wall_reflection_preserves_speed(
            x in 0.0f32..1600.0, y in 0.0f32..1200.0,
            vx in -200.0f32..200.0, vy in -200.0f32..200.0,
            radius in 5.0f32..25.0,
        ) {
            let mut b = bubble(
                x.clamp(radius, 1600.0 - radius),
                y.clamp(radius, 1200.0 - radius),
                radius,
                Vec2::new(vx, vy),
            );
            let speed = b.vel.length();
            integrate_and_reflect(&mut b, BOUNDS, 0.05);
            prop_assert!((b.vel.length() - speed).abs() < 1e-3);
        }
    }
}
