//! Bubble Dodge entry point
//!
//! Window creation and raw input polling belong to the host platform;
//! this binary runs the simulation headless with a scripted input feed
//! and logs the screen transitions.

use std::time::{Duration, Instant};

use bubble_dodge::render;
use bubble_dodge::sim::{FrameInput, GameSession, PlayerColor, Screen};

/// Nominal frame pacing for the demo loop
const FRAME: Duration = Duration::from_millis(16);
/// Demo cap so the loop always terminates
const MAX_FRAMES: u32 = 60 * 150;

fn main() {
    env_logger::init();

    let seed: u64 = rand::random();
    log::info!("bubble-dodge starting (seed {seed})");

    let mut session = GameSession::new(seed);
    let mut last_screen = session.screen;
    let mut last = Instant::now();

    for frame in 0..MAX_FRAMES {
        // Single clock read per frame; dt feeds the clocks and physics
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;

        let input = scripted_input(&session, frame);
        session.advance(&input, dt);

        if session.screen != last_screen {
            log::info!("screen: {last_screen:?} -> {:?}", session.screen);
            last_screen = session.screen;
        }
        if session.quit_requested || matches!(session.screen, Screen::Over | Screen::Win) {
            break;
        }

        std::thread::sleep(FRAME);
    }

    let scene = render::scene(&mut session);
    log::info!(
        "demo finished on {:?} (level {}, {} lives): {} draw commands, {} text overlays",
        session.screen,
        session.level,
        session.lives,
        scene.commands.len(),
        scene.texts.len()
    );
}

/// Stand-in for a real input poller: continue through the menus, pick a
/// color, then weave around the field
fn scripted_input(session: &GameSession, frame: u32) -> FrameInput {
    let mut input = FrameInput::default();
    match session.screen {
        Screen::Start | Screen::LevelUp | Screen::Lost => input.advance = true,
        Screen::Selection => input.color_hotkey = Some(PlayerColor::Blue),
        Screen::Play => {
            // Change heading every couple of seconds
            match (frame / 120) % 4 {
                0 => input.move_right = true,
                1 => input.move_up = true,
                2 => input.move_left = true,
                _ => input.move_down = true,
            }
            input.boost = (frame / 60) % 2 == 0;
        }
        Screen::Over | Screen::Win => {}
    }
    input
}
