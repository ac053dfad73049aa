//! Gameplay simulation module
//!
//! All game logic lives here. The sim is a pure function of
//! `(session, input, dt)`:
//! - One `dt`/elapsed computation per frame, threaded in as parameters
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod session;
pub mod shape;
pub mod world;

pub use collision::{bounce, circle_overlaps_rect, circles_overlap, shapes_overlap};
pub use level::{LevelProfile, generate, profile};
pub use session::{FrameInput, GameClock, GameSession, PlayerColor, Screen};
pub use shape::{Rgba, Shape, ShapeKind};
pub use world::{PhysicsWorld, PlayerHit};
