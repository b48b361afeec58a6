use bevy::prelude::*;

use crate::app::state::GameMode;
use crate::core::config::GameConfig;
use crate::core::sim::GameSim;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_score_text)
            .add_systems(Update, update_score_text.run_if(in_state(GameMode::Playing)))
            .add_systems(OnEnter(GameMode::GameOver), show_game_over)
            .add_systems(OnExit(GameMode::GameOver), clear_game_over);
    }
}

#[derive(Component)]
struct ScoreText;

#[derive(Component)]
struct GameOverOverlay;

fn setup_score_text(mut commands: Commands) {
    commands.spawn((
        Text::new("Score: 0"),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        ScoreText,
    ));
}

fn update_score_text(sim: Res<GameSim>, mut query: Query<&mut Text, With<ScoreText>>) {
    if !sim.is_changed() {
        return;
    }
    for mut text in &mut query {
        text.0 = format!("Score: {}", sim.score);
    }
}

fn show_game_over(mut commands: Commands, sim: Res<GameSim>, cfg: Res<GameConfig>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(8.0),
                ..default()
            },
            GameOverOverlay,
        ))
        .with_children(|overlay| {
            overlay.spawn((
                Text::new(format!(
                    "Game over! Show {} fingers to restart",
                    cfg.controls.restart_fingers
                )),
                TextFont {
                    font_size: 30.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            overlay.spawn((
                Text::new(format!("Your score: {}", sim.score)),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 0.0)),
            ));
        });
}

fn clear_game_over(mut commands: Commands, overlays: Query<Entity, With<GameOverOverlay>>) {
    for entity in &overlays {
        commands.entity(entity).despawn();
    }
}
