//! Fill colors for balls and blocks
//!
//! Presentation data only: the collision core carries colors through hit
//! events (a removed block recolors the ball that struck it) but never
//! interprets them.

use serde::{Deserialize, Serialize};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const GRAY: Color = Color::rgb(0x80, 0x80, 0x80);
    pub const RED: Color = Color::rgb(0xe5, 0x39, 0x35);
    pub const GREEN: Color = Color::rgb(0x43, 0xa0, 0x47);
    pub const BLUE: Color = Color::rgb(0x1e, 0x88, 0xe5);
    pub const YELLOW: Color = Color::rgb(0xfd, 0xd8, 0x35);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}
