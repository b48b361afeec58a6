use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    // Default 2D projection; with the window sized to the field, one world
    // unit is one field pixel.
    commands.spawn(Camera2d);
}
