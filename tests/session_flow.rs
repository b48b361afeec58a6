//! Headless round-flow tests: the session plugin wired into a minimal app,
//! fixed ticks driven by hand, perception scripted through the resource.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use finger_ninja::gameplay::session::SessionPlugin;
use finger_ninja::{GameConfig, GameMode, GameRng, GameSim, Mode, Perception, PerceptionSample};

fn test_app(spawn_one_in: u32) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    let mut cfg = GameConfig::default();
    cfg.fruit.spawn_one_in = spawn_one_in;
    app.insert_resource(cfg);
    app.insert_resource(GameRng::from_seed_opt(Some(42)));
    // Park the fixed timestep so ticks only happen via run_schedule below.
    app.insert_resource(Time::<Fixed>::from_seconds(1e9));
    app.add_plugins(SessionPlugin);
    app.update(); // run Startup, settle initial state
    app
}

fn set_sample(app: &mut App, fingertip: Option<IVec2>, finger_count: u8) {
    app.world_mut().resource_mut::<Perception>().0 = PerceptionSample {
        fingertip,
        finger_count,
    };
}

fn tick(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
}

fn sim(app: &App) -> &GameSim {
    app.world().resource::<GameSim>()
}

fn mode_state(app: &App) -> GameMode {
    *app.world().resource::<State<GameMode>>().get()
}

fn disable_spawning(app: &mut App) {
    app.world_mut()
        .resource_mut::<GameConfig>()
        .fruit
        .spawn_one_in = 0;
}

#[test]
fn spawned_fruit_is_cut_at_predicted_position() {
    let mut app = test_app(1); // guaranteed spawn on the first tick
    tick(&mut app);
    let fruit = sim(&app).fruits[0];
    disable_spawning(&mut app);

    // Aim exactly where the fruit will be after its next advance.
    let predicted = IVec2::new(fruit.pos.x, fruit.pos.y + fruit.speed);
    set_sample(&mut app, Some(predicted), 0);
    tick(&mut app);

    let sim = sim(&app);
    assert_eq!(sim.score, 1);
    assert!(sim.fruits.is_empty());
}

#[test]
fn unattended_fruit_falls_through_without_scoring() {
    let mut app = test_app(1);
    tick(&mut app);
    disable_spawning(&mut app);
    set_sample(&mut app, None, 0);

    let mut remaining = 200;
    while !sim(&app).fruits.is_empty() && remaining > 0 {
        tick(&mut app);
        remaining -= 1;
    }
    assert!(sim(&app).fruits.is_empty(), "fruit should fall off the field");
    assert_eq!(sim(&app).score, 0);
}

#[test]
fn five_fingers_freezes_and_mirrors_game_over() {
    let mut app = test_app(1);
    for _ in 0..3 {
        tick(&mut app);
    }
    let before = sim(&app).clone();
    assert_eq!(before.fruits.len(), 3);

    set_sample(&mut app, None, 5);
    tick(&mut app);

    assert_eq!(sim(&app).mode, Mode::GameOver);
    assert_eq!(sim(&app).score, before.score);
    assert_eq!(sim(&app).fruits, before.fruits, "frozen, not cleared");

    // The state mirror applies on the next frame.
    app.update();
    assert_eq!(mode_state(&app), GameMode::GameOver);
}

#[test]
fn two_fingers_restarts_a_fresh_round() {
    let mut app = test_app(1);
    for _ in 0..4 {
        tick(&mut app);
    }
    set_sample(&mut app, None, 5);
    tick(&mut app);
    app.update();
    assert_eq!(mode_state(&app), GameMode::GameOver);

    // Holding 5 (or anything but 2) keeps the round held.
    for n in [0u8, 1, 3, 4, 5] {
        set_sample(&mut app, None, n);
        let held = sim(&app).clone();
        tick(&mut app);
        assert_eq!(*sim(&app), held);
    }

    set_sample(&mut app, None, 2);
    tick(&mut app);
    let sim = sim(&app);
    assert_eq!(sim.mode, Mode::Playing);
    assert_eq!(sim.score, 0);
    assert!(sim.fruits.is_empty(), "reset clears the collection");

    app.update();
    assert_eq!(mode_state(&app), GameMode::Playing);
}
