//! Line-oriented pixel-art tile loader
//!
//! End-screen artwork is a text file read character by character, left
//! to right, top to bottom. Each recognized letter becomes one fixed
//! color tile, a space becomes a fully transparent tile, and any other
//! byte (newlines included) ends the row: the column resets and the row
//! cursor drops one tile height.

use std::fs;
use std::io;
use std::path::Path;

use glam::Vec2;

use crate::consts::{FIELD_HEIGHT, TILE_SIDE};
use crate::sim::{Rgba, Shape};

/// Color for one art letter, `None` for row terminators
fn tile_color(letter: char) -> Option<Rgba> {
    match letter {
        'r' => Some(Rgba::RED),
        'g' => Some(Rgba::opaque(0.25, 0.25, 0.25)),
        'b' => Some(Rgba::BLUE),
        'y' => Some(Rgba::YELLOW),
        'm' => Some(Rgba::MAGENTA),
        'c' => Some(Rgba::CYAN),
        'w' => Some(Rgba::WHITE),
        ' ' => Some(Rgba::CLEAR),
        _ => None,
    }
}

/// Build the tile grid from art text
///
/// Tiles are squares positioned at their centers, the first row flush
/// with the top edge of the field.
pub fn parse_tiles(text: &str) -> Vec<Shape> {
    let mut tiles = Vec::new();
    let mut x = 0.0;
    let mut y = FIELD_HEIGHT - TILE_SIDE;

    for letter in text.chars() {
        match tile_color(letter) {
            Some(color) => {
                let center = Vec2::new(x + TILE_SIDE / 2.0, y + TILE_SIDE / 2.0);
                tiles.push(Shape::square(center, TILE_SIDE, color));
                x += TILE_SIDE;
            }
            None => {
                x = 0.0;
                y -= TILE_SIDE;
            }
        }
    }
    tiles
}

/// Read an art file into a tile grid
///
/// A missing file is a presentation problem, not a game failure; the
/// caller logs the error and renders without artwork.
pub fn load_tile_grid(path: impl AsRef<Path>) -> io::Result<Vec<Shape>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_tiles(&text))
}
