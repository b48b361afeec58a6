// This file is part of Finger Ninja.
// Copyright (C) 2025 the Finger Ninja contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::app::auto_close::AutoClosePlugin;
use crate::gameplay::session::SessionPlugin;
use crate::perception::PointerPerceptionPlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::fruit_visual::FruitVisualPlugin;
use crate::rendering::hud::HudPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            CameraPlugin,
            PointerPerceptionPlugin,
            SessionPlugin,
            FruitVisualPlugin,
            HudPlugin,
            AutoClosePlugin,
        ));
    }
}
