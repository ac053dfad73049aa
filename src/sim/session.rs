//! Game session and screen state machine
//!
//! `GameSession` owns everything mutable for one run: the current
//! screen, level index, lives, clocks, the player token, the physics
//! world and the presentation props (selection buttons, confetti,
//! end-screen artwork). `advance` is the single per-frame entry point;
//! input events only apply in the screens that define them and are
//! no-ops everywhere else.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level;
use super::shape::{Rgba, Shape};
use super::world::PhysicsWorld;
use crate::art;
use crate::consts::*;

/// Path of the game-over pixel art
pub const GAME_OVER_ART: &str = "assets/art/game_over.txt";
/// Path of the victory pixel art
pub const VICTORY_ART: &str = "assets/art/victory.txt";

/// Current screen of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Rules and objective
    Start,
    /// Player color choice, then the pre-play countdown
    Selection,
    /// Active gameplay
    Play,
    /// Between-level rest screen
    LevelUp,
    /// A life was lost; retry or fall through to Over
    Lost,
    /// Out of lives (terminal)
    Over,
    /// Survived level five (terminal, confetti)
    Win,
}

/// Selectable player colors, one per button and hotkey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerColor {
    White,
    Red,
    Blue,
    Yellow,
    Gray,
    Purple,
}

impl PlayerColor {
    pub const ALL: [PlayerColor; 6] = [
        PlayerColor::White,
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Yellow,
        PlayerColor::Gray,
        PlayerColor::Purple,
    ];

    pub fn rgba(self) -> Rgba {
        match self {
            PlayerColor::White => Rgba::WHITE,
            PlayerColor::Red => Rgba::RED,
            PlayerColor::Blue => Rgba::BLUE,
            PlayerColor::Yellow => Rgba::YELLOW,
            PlayerColor::Gray => Rgba::GRAY,
            PlayerColor::Purple => Rgba::PURPLE,
        }
    }

    /// Darker fill shown while the cursor hovers the button
    pub fn hover_rgba(self) -> Rgba {
        match self {
            PlayerColor::White => Rgba::opaque(0.8, 0.8, 0.8),
            PlayerColor::Red => Rgba::opaque(0.8, 0.0, 0.0),
            PlayerColor::Blue => Rgba::opaque(0.0, 0.0, 0.8),
            PlayerColor::Yellow => Rgba::opaque(0.8, 0.8, 0.0),
            PlayerColor::Gray => Rgba::opaque(0.5, 0.5, 0.5),
            PlayerColor::Purple => Rgba::opaque(0.5, 0.0, 0.5),
        }
    }

    /// Button label shown on the selection screen
    pub fn label(self) -> &'static str {
        match self {
            PlayerColor::White => "W",
            PlayerColor::Red => "R",
            PlayerColor::Blue => "B",
            PlayerColor::Yellow => "Y",
            PlayerColor::Gray => "G",
            PlayerColor::Purple => "P",
        }
    }
}

/// One selection button
#[derive(Debug, Clone)]
pub struct ColorButton {
    pub color: PlayerColor,
    pub shape: Shape,
}

/// Elapsed-time accumulators, advanced once per frame by `dt`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GameClock {
    /// Seconds since the current level started
    pub level_elapsed: f32,
    /// Seconds since the pre-play countdown started
    pub countdown_elapsed: f32,
}

/// Input events for a single frame
///
/// Movement keys and the boost modifier are held states; `advance` is
/// the continue/retry key edge; the cursor arrives with the y axis
/// already inverted by the platform layer.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub boost: bool,
    /// Continue (Start, LevelUp) / retry (Lost) key
    pub advance: bool,
    /// Color-select hotkey pressed this frame
    pub color_hotkey: Option<PlayerColor>,
    /// Easter-egg hotkey (rainbow player)
    pub easter_egg: bool,
    pub quit: bool,
    pub cursor: Vec2,
    /// Left mouse button held; the session derives press/release edges
    pub mouse_down: bool,
}

/// All mutable state for one run
#[derive(Debug, Clone)]
pub struct GameSession {
    pub screen: Screen,
    /// 1-based level index
    pub level: u32,
    pub lives: u32,
    pub clock: GameClock,
    /// Level clock reading recorded at the last hit
    pub time_survived: f32,
    pub god_mode: bool,
    /// Rainbow easter egg; recolors the player but never affects hits
    pub rainbow: bool,
    /// `Some` once a color has been picked this session
    pub chosen_color: Option<PlayerColor>,
    /// Whether the pre-play countdown is running
    pub countdown_running: bool,
    pub player: Shape,
    /// Preview token shown on the selection screen
    pub preview: Shape,
    pub buttons: Vec<ColorButton>,
    /// Hidden god-mode toggle region (drawn fully transparent)
    pub god_button: Shape,
    pub world: PhysicsWorld,
    pub confetti: Vec<Shape>,
    /// End-screen pixel-art tiles; empty when the asset failed to load
    pub artwork: Vec<Shape>,
    pub quit_requested: bool,
    rng: Pcg32,
    mouse_was_down: bool,
}

impl GameSession {
    pub fn new(seed: u64) -> Self {
        let bounds = Vec2::new(FIELD_WIDTH, FIELD_HEIGHT);
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut world = PhysicsWorld::new(bounds);
        world.set_bubbles(level::generate(1, bounds, &mut rng));

        let confetti = spawn_confetti(bounds, &mut rng);

        Self {
            screen: Screen::Start,
            level: 1,
            lives: STARTING_LIVES,
            clock: GameClock::default(),
            time_survived: 0.0,
            god_mode: false,
            rainbow: false,
            chosen_color: None,
            countdown_running: false,
            player: Shape::square(bounds / 2.0, PLAYER_SIZE, Rgba::WHITE),
            preview: Shape::square(bounds / 2.0, PLAYER_SIZE, Rgba::WHITE),
            buttons: selection_buttons(),
            god_button: Shape::rect(
                Vec2::new(FIELD_WIDTH / 10.0, FIELD_HEIGHT / 20.1),
                Vec2::new(BUTTON_WIDTH, BUTTON_HEIGHT),
                Rgba::CLEAR,
            ),
            world,
            confetti,
            artwork: Vec::new(),
            quit_requested: false,
            rng,
            mouse_was_down: false,
        }
    }

    /// Seconds left on the level clock, floored at zero for display
    pub fn time_remaining(&self) -> f32 {
        (LEVEL_DURATION - self.clock.level_elapsed).max(0.0)
    }

    /// Seconds left on the pre-play countdown
    pub fn countdown_remaining(&self) -> f32 {
        (START_DELAY - self.clock.countdown_elapsed).max(0.0)
    }

    /// Advance the session by one frame
    pub fn advance(&mut self, input: &FrameInput, dt: f32) {
        if input.quit {
            self.quit_requested = true;
        }

        // Button transition edges against the previous frame
        let released = self.mouse_was_down && !input.mouse_down;
        let pressed = !self.mouse_was_down && input.mouse_down;

        match self.screen {
            Screen::Start => {
                if input.advance {
                    self.screen = Screen::Selection;
                }
            }
            Screen::Selection => self.advance_selection(input, released, dt),
            Screen::Play => self.advance_play(input, pressed, dt),
            Screen::LevelUp => {
                if input.advance {
                    self.clock.level_elapsed = 0.0;
                    self.screen = Screen::Play;
                }
            }
            Screen::Lost => {
                if self.lives == 0 {
                    self.load_artwork(GAME_OVER_ART);
                    self.screen = Screen::Over;
                } else if input.advance {
                    // Step the attempted level back so the following
                    // survival's increment re-runs the level that was
                    // lost; the in-flight bubble field is kept
                    self.level = self.level.saturating_sub(1);
                    self.clock.level_elapsed = 0.0;
                    self.screen = Screen::Play;
                }
            }
            Screen::Over => {}
            Screen::Win => self.animate_confetti(),
        }

        self.mouse_was_down = input.mouse_down;
    }

    fn advance_selection(&mut self, input: &FrameInput, released: bool, dt: f32) {
        // Hover feedback stops once a color is locked in
        if self.chosen_color.is_none() {
            for button in &mut self.buttons {
                if button.shape.contains_point(input.cursor) {
                    button.shape.set_color(button.color.hover_rgba());
                    self.preview.set_color(button.color.rgba());
                } else {
                    button.shape.set_color(button.color.rgba());
                }
            }

            let clicked = released
                .then(|| {
                    self.buttons
                        .iter()
                        .find(|b| b.shape.contains_point(input.cursor))
                        .map(|b| b.color)
                })
                .flatten();

            if let Some(color) = clicked.or(input.color_hotkey) {
                self.chosen_color = Some(color);
                self.player.set_color(color.rgba());
                self.preview.set_color(color.rgba());
                self.countdown_running = true;
                self.clock.countdown_elapsed = 0.0;
                log::info!("player color chosen: {color:?}");
            }
        }

        // The easter egg starts the countdown even without a color
        if input.easter_egg && !self.rainbow {
            self.rainbow = true;
            self.countdown_running = true;
            self.clock.countdown_elapsed = 0.0;
            log::info!("rainbow easter egg armed");
        }

        if self.countdown_running {
            self.clock.countdown_elapsed += dt;
            // Zero counts as expired
            if self.countdown_remaining() <= 0.0 {
                self.clock.level_elapsed = 0.0;
                self.screen = Screen::Play;
                log::info!("level {} starting", self.level);
            }
        }
    }

    fn advance_play(&mut self, input: &FrameInput, pressed: bool, dt: f32) {
        if pressed && self.god_button.contains_point(input.cursor) {
            self.god_mode = !self.god_mode;
            log::info!("god mode: {}", self.god_mode);
        }

        self.move_player(input);

        self.clock.level_elapsed += dt;
        if self.clock.level_elapsed >= LEVEL_DURATION {
            self.level_survived();
            return;
        }

        let hit = self.world.update(
            dt,
            self.clock.level_elapsed,
            &self.player,
            self.god_mode,
        );
        if let Some(hit) = hit {
            self.lives = self.lives.saturating_sub(1);
            self.time_survived = hit.time_survived;
            self.screen = Screen::Lost;
            log::info!(
                "player hit at {:.1}s, {} lives left",
                hit.time_survived,
                self.lives
            );
            return;
        }

        // Rainbow and god mode both force a random player color; the
        // chosen color is restored when neither is active
        if self.rainbow || self.god_mode {
            let c = random_color(&mut self.rng);
            self.player.set_color(c);
        } else if let Some(color) = self.chosen_color {
            self.player.set_color(color.rgba());
        }
    }

    /// Level clock expired: advance, then either win or rest
    fn level_survived(&mut self) {
        self.level += 1;
        if self.level > MAX_LEVEL {
            log::info!("level {MAX_LEVEL} survived: game won");
            self.load_artwork(VICTORY_ART);
            self.screen = Screen::Win;
        } else {
            log::info!("level survived, next is {}", self.level);
            let bounds = self.world.bounds();
            self.world.clear();
            self.world
                .set_bubbles(level::generate(self.level, bounds, &mut self.rng));
            self.clock.level_elapsed = 0.0;
            self.screen = Screen::LevelUp;
        }
    }

    /// Fixed-step movement, clamped so the token's bounding box stays
    /// inside the field
    fn move_player(&mut self, input: &FrameInput) {
        let step = if input.boost {
            MOVE_STEP + BOOST_STEP
        } else {
            MOVE_STEP
        };
        let mut delta = Vec2::ZERO;
        if input.move_up {
            delta.y += step;
        }
        if input.move_down {
            delta.y -= step;
        }
        if input.move_left {
            delta.x -= step;
        }
        if input.move_right {
            delta.x += step;
        }
        self.player.translate(delta);

        let half = self.player.size / 2.0;
        let bounds = self.world.bounds();
        self.player.pos = self
            .player
            .pos
            .clamp(half, bounds - half);
    }

    fn animate_confetti(&mut self) {
        let bounds = self.world.bounds();
        for c in &mut self.confetti {
            let fall = c.size.y / 5.0;
            c.translate(Vec2::new(0.0, -fall));
            if c.pos.y < 0.0 {
                c.pos = Vec2::new(
                    self.rng.random_range(0.0..bounds.x),
                    bounds.y + c.size.y,
                );
            }
        }
    }

    /// Loading the end-screen art is non-fatal; on failure the grid
    /// stays empty and the screen renders without it
    fn load_artwork(&mut self, path: &str) {
        match art::load_tile_grid(path) {
            Ok(tiles) => self.artwork = tiles,
            Err(err) => {
                log::warn!("failed to load artwork {path}: {err}");
                self.artwork.clear();
            }
        }
    }

    /// Random color for the rainbow/god-mode player and the HUD easter
    /// egg; channels are drawn in tenths
    pub fn random_color(&mut self) -> Rgba {
        random_color(&mut self.rng)
    }
}

fn random_color(rng: &mut Pcg32) -> Rgba {
    Rgba::opaque(
        rng.random_range(0..10) as f32 / 10.0,
        rng.random_range(0..10) as f32 / 10.0,
        rng.random_range(0..10) as f32 / 10.0,
    )
}

/// The six selection buttons, laid out in two rows around the center
fn selection_buttons() -> Vec<ColorButton> {
    let size = Vec2::new(BUTTON_WIDTH, BUTTON_HEIGHT);
    let (w, h) = (FIELD_WIDTH, FIELD_HEIGHT);
    let positions = [
        (PlayerColor::Red, Vec2::new(w / 2.4, h / 2.4)),
        (PlayerColor::White, Vec2::new(w / 2.0, h / 2.4)),
        (PlayerColor::Blue, Vec2::new(w / 2.0 + 130.0, h / 2.4)),
        (PlayerColor::Yellow, Vec2::new(w / 2.4, h / 3.0)),
        (PlayerColor::Gray, Vec2::new(w / 2.0, h / 3.0)),
        (PlayerColor::Purple, Vec2::new(w / 2.0 + 130.0, h / 3.0)),
    ];
    positions
        .into_iter()
        .map(|(color, pos)| ColorButton {
            color,
            shape: Shape::rect(pos, size, color.rgba()),
        })
        .collect()
}

/// Confetti starts above the top edge and rains down on the win screen
fn spawn_confetti(bounds: Vec2, rng: &mut Pcg32) -> Vec<Shape> {
    (0..CONFETTI_COUNT)
        .map(|_| {
            let pos = Vec2::new(
                rng.random_range(0.0..bounds.x),
                bounds.y + 2.0 + rng.random_range(0.0..bounds.y),
            );
            let radius = 1.0 + rng.random_range(0..5) as f32 / 5.0;
            Shape::circle(pos, radius, random_color(rng))
        })
        .collect()
}
