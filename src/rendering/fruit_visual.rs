//! Mirrors sim fruit into circle-mesh entities and tracks the fingertip
//! marker. Purely derived from [`GameSim`] / [`Perception`] each frame.

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::palette;
use crate::core::sim::GameSim;
use crate::perception::Perception;
use crate::rendering::field_to_world;

const MARKER_RADIUS: f32 = 10.0;
const FRUIT_Z: f32 = 0.0;
const MARKER_Z: f32 = 1.0;

pub struct FruitVisualPlugin;

impl Plugin for FruitVisualPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_fruit_assets)
            .add_systems(Update, (sync_fruit_visuals, update_fingertip_marker));
        #[cfg(feature = "debug")]
        app.add_systems(Update, draw_debug_outlines);
    }
}

/// Shared unit-circle mesh plus one material per palette entry.
#[derive(Resource)]
struct FruitAssets {
    circle: Handle<Mesh>,
    materials: Vec<Handle<ColorMaterial>>,
}

#[derive(Component)]
struct FruitVisual {
    id: u64,
}

#[derive(Component)]
struct FingertipMarker;

fn setup_fruit_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let circle = meshes.add(Circle::new(1.0));
    let fruit_materials = palette::FRUIT_COLORS
        .iter()
        .map(|&color| materials.add(color))
        .collect();
    let marker_material = materials.add(Color::srgb(0.0, 1.0, 1.0));

    // One marker entity for the whole run, hidden until a hand shows up.
    commands.spawn((
        Mesh2d(circle.clone()),
        MeshMaterial2d(marker_material),
        Transform::from_scale(Vec3::splat(MARKER_RADIUS)),
        Visibility::Hidden,
        FingertipMarker,
    ));
    commands.insert_resource(FruitAssets {
        circle,
        materials: fruit_materials,
    });
}

/// Diff visual entities against live sim ids: move survivors, spawn entities
/// for new fruit, despawn the cut and the fallen.
fn sync_fruit_visuals(
    mut commands: Commands,
    sim: Res<GameSim>,
    cfg: Res<GameConfig>,
    assets: Res<FruitAssets>,
    mut visuals: Query<(Entity, &FruitVisual, &mut Transform)>,
) {
    let field = Vec2::new(cfg.window.width as f32, cfg.window.height as f32);
    let by_id: HashMap<u64, IVec2> = sim.fruits.iter().map(|f| (f.id, f.pos)).collect();

    let mut mirrored = HashSet::new();
    for (entity, visual, mut tf) in visuals.iter_mut() {
        match by_id.get(&visual.id) {
            Some(&pos) => {
                tf.translation = field_to_world(pos, field, FRUIT_Z);
                mirrored.insert(visual.id);
            }
            None => commands.entity(entity).despawn(),
        }
    }

    for fruit in sim.fruits.iter().filter(|f| !mirrored.contains(&f.id)) {
        commands.spawn((
            Mesh2d(assets.circle.clone()),
            MeshMaterial2d(assets.materials[fruit.color % assets.materials.len()].clone()),
            Transform {
                translation: field_to_world(fruit.pos, field, FRUIT_Z),
                scale: Vec3::splat(fruit.radius as f32),
                ..default()
            },
            FruitVisual { id: fruit.id },
        ));
    }
}

fn update_fingertip_marker(
    perception: Res<Perception>,
    cfg: Res<GameConfig>,
    mut marker: Query<(&mut Transform, &mut Visibility), With<FingertipMarker>>,
) {
    let Ok((mut tf, mut vis)) = marker.single_mut() else {
        return;
    };
    match perception.0.fingertip {
        Some(tip) => {
            let field = Vec2::new(cfg.window.width as f32, cfg.window.height as f32);
            tf.translation = field_to_world(tip, field, MARKER_Z);
            *vis = Visibility::Visible;
        }
        None => *vis = Visibility::Hidden,
    }
}

#[cfg(feature = "debug")]
fn draw_debug_outlines(mut gizmos: Gizmos, sim: Res<GameSim>, cfg: Res<GameConfig>) {
    let field = Vec2::new(cfg.window.width as f32, cfg.window.height as f32);
    gizmos.rect_2d(Vec2::ZERO, field, Color::srgb(0.3, 0.3, 0.3));
    for fruit in &sim.fruits {
        gizmos.circle_2d(
            field_to_world(fruit.pos, field, 0.0).truncate(),
            fruit.radius as f32,
            Color::WHITE,
        );
    }
}
