use bevy::prelude::*;

/// Presentation mirror of [`crate::core::sim::Mode`], kept as a Bevy state so
/// HUD and overlay systems can use `run_if` / `OnEnter` hooks. Written only by
/// the session driver.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameMode {
    #[default]
    Playing,
    GameOver,
}
