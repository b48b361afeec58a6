use bevy::prelude::*;

use crate::app::state::GameMode;
use crate::core::config::GameConfig;
use crate::core::rng::GameRng;
use crate::core::sim::{FruitRules, GameSim, Transition};
use crate::perception::Perception;

/// Fixed-rate driver: one [`GameSim::tick`] per `FixedUpdate`, fed with the
/// latest perception sample. Also mirrors the sim mode into the [`GameMode`]
/// state so presentation can hook `OnEnter`/`run_if`; the sim resource stays
/// the single source of truth.
pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameMode>()
            .init_resource::<GameSim>()
            .init_resource::<Perception>()
            .add_systems(FixedUpdate, advance_session);
    }
}

fn advance_session(
    mut sim: ResMut<GameSim>,
    perception: Res<Perception>,
    mut rng: ResMut<GameRng>,
    cfg: Res<GameConfig>,
    mut next_mode: ResMut<NextState<GameMode>>,
) {
    let rules = FruitRules::from_config(&cfg);
    let report = sim.tick(&perception.0, &mut rng.0, &rules);

    match report.transition {
        Some(Transition::Stopped) => {
            info!(
                target: "session",
                "round over at score {}; show {} fingers to restart",
                sim.score, rules.restart_fingers
            );
            next_mode.set(GameMode::GameOver);
        }
        Some(Transition::Restarted) => {
            info!(target: "session", "round restarted");
            next_mode.set(GameMode::Playing);
        }
        None => {}
    }
    if report.cut > 0 {
        debug!(target: "session", "cut {} fruit, score now {}", report.cut, sim.score);
    }
    if report.missed > 0 {
        debug!(target: "session", "{} fruit fell through", report.missed);
    }
}
