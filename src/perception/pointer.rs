use bevy::prelude::*;

use super::Perception;
use crate::core::sim::PerceptionSample;

/// Stand-in hand tracker: the window cursor is the fingertip (window
/// coordinates are already field coordinates) and a held digit key 1-5 is the
/// open-finger count. A camera/landmark backend would replace this plugin and
/// write the same resource.
pub struct PointerPerceptionPlugin;

impl Plugin for PointerPerceptionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Perception>()
            .add_systems(PreUpdate, sample_pointer);
    }
}

fn sample_pointer(
    windows: Query<&Window>,
    keys: Res<ButtonInput<KeyCode>>,
    mut perception: ResMut<Perception>,
) {
    let fingertip = windows
        .single()
        .ok()
        .and_then(|w| w.cursor_position())
        .map(|p| IVec2::new(p.x.round() as i32, p.y.round() as i32));
    perception.0 = PerceptionSample {
        fingertip,
        finger_count: held_finger_count(&keys),
    };
}

fn held_finger_count(keys: &ButtonInput<KeyCode>) -> u8 {
    const DIGITS: [(KeyCode, u8); 5] = [
        (KeyCode::Digit1, 1),
        (KeyCode::Digit2, 2),
        (KeyCode::Digit3, 3),
        (KeyCode::Digit4, 4),
        (KeyCode::Digit5, 5),
    ];
    // Highest held digit wins so mashing 2 while releasing 5 behaves.
    DIGITS
        .iter()
        .rev()
        .find(|(key, _)| keys.pressed(*key))
        .map(|(_, count)| *count)
        .unwrap_or(0)
}
