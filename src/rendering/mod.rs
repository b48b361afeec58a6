pub mod camera;
pub mod fruit_visual;
pub mod hud;

use bevy::prelude::*;

/// Field pixels (origin top-left, y down) to world coordinates (origin at the
/// field center, y up). The window is sized 1:1 to the field.
pub(crate) fn field_to_world(p: IVec2, field: Vec2, z: f32) -> Vec3 {
    Vec3::new(p.x as f32 - field.x * 0.5, field.y * 0.5 - p.y as f32, z)
}
