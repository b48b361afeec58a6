use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Play-field width in pixels; the window is sized to match.
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            title: "Finger Ninja".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TickConfig {
    /// Fixed simulation rate in ticks per second.
    pub rate_hz: f64,
}
impl Default for TickConfig {
    fn default() -> Self {
        Self { rate_hz: 30.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FruitConfig {
    pub radius: i32,
    /// Fall speed is drawn uniformly from [speed_min, speed_max], px/tick.
    pub speed_min: i32,
    pub speed_max: i32,
    /// Spawn x keeps this distance from both field edges.
    pub spawn_margin: i32,
    /// Spawn row, above the visible field.
    pub spawn_y: i32,
    /// Each tick spawns one fruit with probability 1 in this many. 0 disables spawning.
    pub spawn_one_in: u32,
}
impl Default for FruitConfig {
    fn default() -> Self {
        Self {
            radius: 30,
            speed_min: 4,
            speed_max: 7,
            spawn_margin: 50,
            spawn_y: -50,
            spawn_one_in: 20,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ControlsConfig {
    /// Open-finger count that ends the round.
    pub stop_fingers: u8,
    /// Open-finger count that restarts a held round.
    pub restart_fingers: u8,
}
impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            stop_fingers: 5,
            restart_fingers: 2,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub tick: TickConfig,
    pub fruit: FruitConfig,
    pub controls: ControlsConfig,
    /// Seed for the spawn RNG; omitted = fresh entropy each run.
    pub rng_seed: Option<u64>,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            tick: Default::default(),
            fruit: Default::default(),
            controls: Default::default(),
            rng_seed: None,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Validate the configuration returning a list of human-readable warning
    /// strings. Suspicious values, not hard errors; log each with `warn!` at
    /// startup.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width == 0 || self.window.height == 0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.tick.rate_hz <= 0.0 {
            w.push("tick.rate_hz must be > 0".into());
        } else if self.tick.rate_hz > 240.0 {
            w.push(format!(
                "tick.rate_hz {} very high; fruit speeds are per-tick and will scale with it",
                self.tick.rate_hz
            ));
        }
        let f = &self.fruit;
        if f.radius <= 0 {
            w.push("fruit.radius must be > 0".into());
        } else if f.radius * 2 >= self.window.width as i32 {
            w.push(format!(
                "fruit.radius {} leaves no horizontal room in a {}px field",
                f.radius, self.window.width
            ));
        }
        if f.speed_min <= 0 {
            w.push("fruit.speed_min must be > 0 (fruit must fall)".into());
        }
        if f.speed_min > f.speed_max {
            w.push(format!(
                "fruit speed range inverted: min {} > max {}",
                f.speed_min, f.speed_max
            ));
        }
        if f.spawn_margin * 2 >= self.window.width as i32 {
            w.push(format!(
                "fruit.spawn_margin {} swallows the whole {}px field width",
                f.spawn_margin, self.window.width
            ));
        }
        if f.spawn_one_in == 0 {
            w.push("fruit.spawn_one_in is 0; spawning disabled".into());
        }
        if f.spawn_y >= self.window.height as i32 {
            w.push(format!(
                "fruit.spawn_y {} is below the field; fruit are culled on their first tick",
                f.spawn_y
            ));
        }
        let c = &self.controls;
        if c.stop_fingers == c.restart_fingers {
            w.push(format!(
                "controls.stop_fingers == controls.restart_fingers ({}); round will flap",
                c.stop_fingers
            ));
        }
        if c.stop_fingers > 5 {
            w.push(format!(
                "controls.stop_fingers {} unreachable; perception reports at most 5",
                c.stop_fingers
            ));
        }
        if c.restart_fingers > 5 {
            w.push(format!(
                "controls.restart_fingers {} unreachable; perception reports at most 5",
                c.restart_fingers
            ));
        }
        if c.stop_fingers == 0 {
            w.push("controls.stop_fingers 0 ends the round whenever no hand is visible".into());
        }
        if c.restart_fingers == 0 {
            w.push("controls.restart_fingers 0 restarts whenever no hand is visible".into());
        }
        w
    }
}
