//! Fruit color palette. Single source of truth for sim color indices and the
//! materials built from them.

use bevy::prelude::*;

/// SRGB palette fruit colors are drawn from at spawn.
pub const FRUIT_COLORS: [Color; 3] = [
    Color::srgb(1.0, 0.0, 0.0), // red
    Color::srgb(0.0, 1.0, 0.0), // green
    Color::srgb(1.0, 1.0, 0.0), // yellow
];

/// Color for an arbitrary index, wrapping around the palette.
#[inline]
pub fn color_for_index(i: usize) -> Color {
    FRUIT_COLORS[i % FRUIT_COLORS.len()]
}
