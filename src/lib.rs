//! Bubble Dodge - an arcade survival game
//!
//! Core modules:
//! - `sim`: Gameplay simulation (shapes, collisions, physics world, levels, session)
//! - `render`: Draw-list contract consumed by an external renderer
//! - `art`: Line-oriented pixel-art tile loader for the end screens

pub mod art;
pub mod render;
pub mod sim;

pub use sim::{FrameInput, GameSession, PlayerColor, Screen};

/// Game configuration constants
pub mod consts {
    /// Play-field dimensions in pixels
    pub const FIELD_WIDTH: f32 = 1600.0;
    pub const FIELD_HEIGHT: f32 = 1200.0;

    /// Seconds a level must be survived
    pub const LEVEL_DURATION: f32 = 20.0;
    /// Seconds after a level starts during which player hits are ignored
    pub const GRACE_PERIOD: f32 = 1.5;
    /// Start of the near-expiry window where the hit check is skipped,
    /// an explicit one-frame window rather than an equality test on the
    /// level clock.
    pub const HIT_SKIP_AT: f32 = 19.5;
    /// Width of the near-expiry skip window (one nominal frame at 30 Hz)
    pub const HIT_SKIP_WINDOW: f32 = 1.0 / 30.0;

    /// Pre-play countdown after the color is chosen
    pub const START_DELAY: f32 = 4.0;

    /// Number of levels; surviving the last one wins the game
    pub const MAX_LEVEL: u32 = 5;
    /// Lives per session
    pub const STARTING_LIVES: u32 = 3;

    /// Player token side length
    pub const PLAYER_SIZE: f32 = 20.0;
    /// Player movement per frame while a direction key is held
    pub const MOVE_STEP: f32 = 1.1;
    /// Additional movement per frame while the boost key is also held
    pub const BOOST_STEP: f32 = 1.3;

    /// Side length of one pixel-art tile
    pub const TILE_SIDE: f32 = 20.0;
    /// Confetti circles spawned for the win screen
    pub const CONFETTI_COUNT: usize = 150;

    /// Selection button dimensions
    pub const BUTTON_WIDTH: f32 = 100.0;
    pub const BUTTON_HEIGHT: f32 = 80.0;
}
