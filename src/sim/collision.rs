//! Collision predicates and elastic bounce resolution
//!
//! Pure geometry: overlap tests consumed by the physics world, plus the
//! mass-proportional bounce used to resolve bubble-bubble contacts.

use std::f32::consts::PI;

use glam::Vec2;

use super::shape::{Shape, ShapeKind};

/// True iff the circles overlap (touching circles do not count)
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    a_pos.distance(b_pos) < a_radius + b_radius
}

/// True iff a circle overlaps an axis-aligned rect
///
/// Clamps the circle center to the rect to find the nearest point; this
/// covers both "center inside the rect" and "center near an edge or
/// corner" with a single distance test.
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Shape) -> bool {
    let nearest = Vec2::new(
        center.x.clamp(rect.left(), rect.right()),
        center.y.clamp(rect.bottom(), rect.top()),
    );
    center.distance(nearest) < radius
}

/// Overlap test dispatching on both shape tags
///
/// Rect-rect is never exercised by the game and reports no overlap.
pub fn shapes_overlap(a: &Shape, b: &Shape) -> bool {
    match (a.kind, b.kind) {
        (ShapeKind::Circle { radius: ra }, ShapeKind::Circle { radius: rb }) => {
            circles_overlap(a.pos, ra, b.pos, rb)
        }
        (ShapeKind::Circle { radius }, ShapeKind::Rect) => {
            circle_overlaps_rect(a.pos, radius, b)
        }
        (ShapeKind::Rect, ShapeKind::Circle { radius }) => {
            circle_overlaps_rect(b.pos, radius, a)
        }
        (ShapeKind::Rect, ShapeKind::Rect) => false,
    }
}

/// Area of a circle, used as its mass
fn mass(radius: f32) -> f32 {
    PI * radius * radius
}

/// Resolve an overlapping circle pair with a mass-proportional elastic
/// bounce
///
/// Positions separate along the center-to-center axis, each circle
/// moving a fraction of the overlap given by its own mass share.
/// Velocities exchange momentum along the collision normal:
/// `dv_a = -2*mb/(ma+mb) * (relvel . n) n`, symmetric for `b`.
///
/// No-op unless both shapes are circles with positive overlap.
pub fn bounce(a: &mut Shape, b: &mut Shape) {
    let (ShapeKind::Circle { radius: ra }, ShapeKind::Circle { radius: rb }) = (a.kind, b.kind)
    else {
        return;
    };

    let delta = b.pos - a.pos;
    let dist = delta.length();
    let overlap = 0.5 * (ra + rb - dist);
    // Coincident centers have no defined normal
    if overlap <= 0.0 || dist <= f32::EPSILON {
        return;
    }

    let mass_a = mass(ra);
    let mass_b = mass(rb);
    let total = mass_a + mass_b;
    let normal = delta / dist;

    a.pos -= overlap * (mass_a / total) * normal;
    b.pos += overlap * (mass_b / total) * normal;

    let rel_vel = a.vel - b.vel;
    let along_normal = rel_vel.dot(normal) * normal;

    a.vel -= 2.0 * mass_b / total * along_normal;
    b.vel += 2.0 * mass_a / total * along_normal;
}
