//! Draw-list contract for the external renderer
//!
//! The sim never talks to a GPU. Each frame the renderer asks for a
//! `Scene`: filled primitives (circle fans and quads) plus positioned
//! text overlays, already selected and colored for the current screen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_HEIGHT as H, FIELD_WIDTH as W};
use crate::sim::{GameSession, Rgba, Screen, Shape, ShapeKind};

/// Fill primitive understood by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Primitive {
    CircleFan,
    Quad,
}

/// One filled shape to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub primitive: Primitive,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Rgba,
}

impl DrawCommand {
    fn from_shape(shape: &Shape) -> Self {
        let primitive = match shape.kind {
            ShapeKind::Circle { .. } => Primitive::CircleFan,
            ShapeKind::Rect => Primitive::Quad,
        };
        Self {
            primitive,
            pos: shape.pos,
            size: shape.size,
            color: shape.color,
        }
    }
}

/// One positioned text string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextOverlay {
    pub text: String,
    pub pos: Vec2,
    pub color: Rgba,
}

/// Everything to draw for one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
    pub texts: Vec<TextOverlay>,
}

impl Scene {
    fn shape(&mut self, shape: &Shape) {
        self.commands.push(DrawCommand::from_shape(shape));
    }

    fn text(&mut self, text: impl Into<String>, anchor_x: f32, y: f32, color: Rgba) {
        let text = text.into();
        // Nudge left by half a glyph per character to center on the anchor
        let x = anchor_x - GLYPH_HALF_WIDTH * text.len() as f32;
        self.texts.push(TextOverlay {
            text,
            pos: Vec2::new(x, y),
            color,
        });
    }
}

const GLYPH_HALF_WIDTH: f32 = 12.0;

/// Build the draw list for the session's current screen
///
/// Takes the session mutably: the easter egg and the win screen pull
/// random text colors from the session RNG.
pub fn scene(session: &mut GameSession) -> Scene {
    let mut scene = Scene::default();
    match session.screen {
        Screen::Start => start_screen(&mut scene),
        Screen::Selection => selection_screen(session, &mut scene),
        Screen::Play => play_screen(session, &mut scene),
        Screen::LevelUp => level_up_screen(session, &mut scene),
        Screen::Lost => lost_screen(session, &mut scene),
        Screen::Over => over_screen(session, &mut scene),
        Screen::Win => win_screen(session, &mut scene),
    }
    scene
}

fn start_screen(scene: &mut Scene) {
    let breaker = "******************";
    scene.text(breaker, W / 2.0, H / 1.1, Rgba::WHITE);
    scene.text("* BUBBLE DODGE *", W / 2.0, H / 1.15, Rgba::WHITE);
    scene.text(breaker, W / 2.0, H / 1.2, Rgba::WHITE);
    scene.text(
        "Avoid the bubbles & survive 20 seconds to reach the next level",
        W / 2.0,
        H / 1.3,
        Rgba::WHITE,
    );
    scene.text("Beat level 5 to win the game!", W / 2.0, H / 1.4, Rgba::WHITE);
    scene.text("[Use Arrow Keys To Move]", W / 2.0, H / 1.8, Rgba::YELLOW);
    scene.text("[Use Space Bar As A Boost]", W / 2.0, H / 2.15, Rgba::YELLOW);
    scene.text("[You Have 3 Lives]", W / 2.0, H / 2.8, Rgba::YELLOW);
    scene.text("- PRESS C TO CONTINUE -", W / 2.0, H / 5.8, Rgba::WHITE);
}

fn selection_screen(session: &GameSession, scene: &mut Scene) {
    scene.text(
        "PICK YOUR PLAYER COLOR TO START",
        W / 2.0,
        H / 1.5,
        Rgba::WHITE,
    );

    for button in &session.buttons {
        scene.shape(&button.shape);
        scene.text(
            button.color.label(),
            button.shape.pos.x,
            button.shape.pos.y - 5.0,
            Rgba::BLACK,
        );
    }
    scene.shape(&session.preview);

    if session.countdown_running {
        scene.text("GAME STARTS IN: ", W / 2.2, H / 1.8, Rgba::WHITE);
        let remaining = session.countdown_remaining() as i32;
        scene.text(format!("{remaining}s"), W / 1.6, H / 1.8, Rgba::WHITE);
    }
}

fn play_screen(session: &mut GameSession, scene: &mut Scene) {
    scene.shape(&session.player);
    for bubble in &session.world.bubbles {
        scene.commands.push(DrawCommand::from_shape(bubble));
    }
    // Hidden toggle region, drawn fully transparent
    scene.shape(&session.god_button);

    let hud_color = if session.rainbow {
        session.random_color()
    } else {
        Rgba::WHITE
    };
    scene.text(format!("LVL {}", session.level), W / 10.0, H / 1.1, hud_color);
    let remaining = session.time_remaining() as i32;
    scene.text(format!("{remaining}s"), W / 1.06, H / 1.1, hud_color);
    scene.text(lives_text(session.lives), W / 10.0, H / 20.1, hud_color);
}

fn level_up_screen(session: &GameSession, scene: &mut Scene) {
    scene.text("YOU SURVIVED THAT ROUND!", W / 2.0, H / 1.25, Rgba::WHITE);
    scene.text(
        format!("NEXT LEVEL IS {}", session.level),
        W / 2.0,
        H / 1.4,
        Rgba::WHITE,
    );
    scene.text("PRESS S TO PLAY", W / 2.0, H / 3.0, Rgba::WHITE);
    scene.text("OR", W / 2.0, H / 4.0, Rgba::WHITE);
    scene.text("PRESS ESC TO GIVE UP", W / 2.0, H / 6.0, Rgba::WHITE);
    scene.shape(&session.player);
}

fn lost_screen(session: &GameSession, scene: &mut Scene) {
    scene.text("YOU DIED", W / 2.0, H / 1.25, Rgba::WHITE);
    scene.text(
        format!("YOU REACHED LEVEL {}", session.level),
        W / 2.0,
        H / 1.4,
        Rgba::WHITE,
    );
    scene.text(
        format!("YOU SURVIVED {:.1}s", session.time_survived),
        W / 2.0,
        H / 2.0,
        Rgba::YELLOW,
    );
    scene.text(
        format!("YOU HAVE {} LIVES LEFT", session.lives),
        W / 2.0,
        H / 3.5,
        Rgba::WHITE,
    );
    scene.text("PRESS S TO TRY AGAIN", W / 2.0, H / 6.0, Rgba::WHITE);
}

fn over_screen(session: &GameSession, scene: &mut Scene) {
    scene.text("GAME OVER YOU LOST", W / 2.0, H / 1.15, Rgba::WHITE);
    scene.text(
        format!("YOU REACHED LEVEL {}", session.level),
        W / 2.0,
        H / 1.3,
        Rgba::WHITE,
    );
    scene.text("PRESS ESCAPE TO EXIT", W / 2.0, H / 6.0, Rgba::WHITE);

    for tile in &session.artwork {
        scene.commands.push(DrawCommand::from_shape(tile));
    }
}

fn win_screen(session: &mut GameSession, scene: &mut Scene) {
    for c in &session.confetti {
        scene.commands.push(DrawCommand::from_shape(c));
    }

    let color = session.random_color();
    scene.text("YOU WON", W / 2.0, H / 1.25, color);
    scene.text("YOU BEAT LEVEL 5", W / 2.0, H / 1.4, color);

    for tile in &session.artwork {
        scene.commands.push(DrawCommand::from_shape(tile));
    }
}

fn lives_text(lives: u32) -> String {
    if lives == 1 {
        "1 LIFE".to_string()
    } else {
        format!("{lives} LIVES")
    }
}
