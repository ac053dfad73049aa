//! Per-level spawn configuration and bubble generation
//!
//! The five difficulty profiles are a data table indexed by level; the
//! generator draws positions, radii, velocities and palette colors from
//! the caller's RNG.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::shape::{Rgba, Shape};

/// Opacity band for spawned bubbles (135..255 in 8-bit alpha units)
const OPACITY_MIN: f32 = 135.0 / 255.0;
const OPACITY_MAX: f32 = 1.0;

/// Color distribution for one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    GreenWhite,
    BluePurple,
    Purple,
    YellowWhite,
    Red,
}

impl Palette {
    /// Draw one bubble color, opacity included
    pub fn sample(self, rng: &mut impl Rng) -> Rgba {
        let (r, g, b) = match self {
            Palette::GreenWhite => (
                rng.random_range(0.7..0.92),
                rng.random_range(0.9..1.0),
                rng.random_range(0.6..0.78),
            ),
            Palette::BluePurple => (
                rng.random_range(0.3..0.69),
                rng.random_range(0.0..0.16),
                rng.random_range(0.6..1.0),
            ),
            Palette::Purple => (
                rng.random_range(0.0..0.16),
                rng.random_range(0.3..0.61),
                rng.random_range(0.8..1.0),
            ),
            Palette::YellowWhite => (1.0, 1.0, rng.random_range(0.0..1.0)),
            Palette::Red => (
                1.0,
                rng.random_range(0.2..0.7),
                rng.random_range(0.2..0.7),
            ),
        };
        Rgba::new(r, g, b, rng.random_range(OPACITY_MIN..OPACITY_MAX))
    }
}

/// Spawn configuration for one level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelProfile {
    pub count: u32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub max_speed: f32,
    pub palette: Palette,
}

/// The five difficulty profiles; count, max radius and max speed grow
/// with the level index
const PROFILES: [LevelProfile; 5] = [
    LevelProfile {
        count: 75,
        min_radius: 5.0,
        max_radius: 15.0,
        max_speed: 35.0,
        palette: Palette::GreenWhite,
    },
    LevelProfile {
        count: 80,
        min_radius: 5.0,
        max_radius: 18.0,
        max_speed: 40.0,
        palette: Palette::BluePurple,
    },
    LevelProfile {
        count: 85,
        min_radius: 5.0,
        max_radius: 20.0,
        max_speed: 45.0,
        palette: Palette::Purple,
    },
    LevelProfile {
        count: 90,
        min_radius: 5.0,
        max_radius: 23.0,
        max_speed: 50.0,
        palette: Palette::YellowWhite,
    },
    LevelProfile {
        count: 95,
        min_radius: 5.0,
        max_radius: 25.0,
        max_speed: 55.0,
        palette: Palette::Red,
    },
];

/// Profile for a 1-based level index, clamped to the table
pub fn profile(level: u32) -> &'static LevelProfile {
    let index = level.clamp(1, PROFILES.len() as u32) - 1;
    &PROFILES[index as usize]
}

/// Spawn the bubble field for a level
///
/// Positions are uniform over the field rectangle, radii over
/// `[min, max)`, and each velocity component independently over
/// `[0, max_speed)` - speeds are axis-bounded, not magnitude-bounded.
pub fn generate(level: u32, bounds: Vec2, rng: &mut impl Rng) -> Vec<Shape> {
    let profile = profile(level);
    log::debug!(
        "level {level}: spawning {} bubbles (r {}..{}, v 0..{})",
        profile.count,
        profile.min_radius,
        profile.max_radius,
        profile.max_speed
    );

    (0..profile.count)
        .map(|_| {
            let pos = Vec2::new(
                rng.random_range(0.0..bounds.x),
                rng.random_range(0.0..bounds.y),
            );
            let radius = rng.random_range(profile.min_radius..profile.max_radius);
            let vel = Vec2::new(
                rng.random_range(0.0..profile.max_speed),
                rng.random_range(0.0..profile.max_speed),
            );
            Shape::moving_circle(pos, radius, vel, profile.palette.sample(rng))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const BOUNDS: Vec2 = Vec2::new(1600.0, 1200.0);

    #[test]
    fn level_one_spawns_to_profile() {
        let mut rng = Pcg32::seed_from_u64(7);
        let bubbles = generate(1, BOUNDS, &mut rng);

        assert_eq!(bubbles.len(), 75);
        for b in &bubbles {
            let r = b.radius().unwrap();
            assert!((5.0..15.0).contains(&r), "radius {r} out of range");
            assert!((0.0..35.0).contains(&b.vel.x));
            assert!((0.0..35.0).contains(&b.vel.y));
            assert!(b.pos.x >= 0.0 && b.pos.x < 1600.0);
            assert!(b.pos.y >= 0.0 && b.pos.y < 1200.0);
        }
    }

    #[test]
    fn profiles_grow_monotonically() {
        for level in 1..5u32 {
            let a = profile(level);
            let b = profile(level + 1);
            assert!(b.count >= a.count);
            assert!(b.max_radius >= a.max_radius);
            assert!(b.max_speed >= a.max_speed);
        }
    }

    #[test]
    fn out_of_range_levels_clamp_to_table() {
        assert_eq!(profile(0), profile(1));
        assert_eq!(profile(9), profile(5));
    }

    #[test]
    fn opacity_stays_in_band() {
        let mut rng = Pcg32::seed_from_u64(11);
        for level in 1..=5 {
            for b in generate(level, BOUNDS, &mut rng) {
                assert!(b.color.a >= OPACITY_MIN && b.color.a < OPACITY_MAX);
            }
        }
    }
}
