//! Falling-fruit simulation: the fruit entity, the per-tick input sample and
//! the two-state round machine. Pure data + arithmetic; no engine dependency
//! beyond `IVec2` and the `Resource` derive, so everything here unit-tests
//! without a window or a perception backend.

use bevy::prelude::*;
use rand::Rng;

use crate::core::config::GameConfig;
use crate::core::palette;

/// A falling circular target. `radius`, `speed` and `color` are fixed at
/// creation; only `pos.y` mutates, monotonically increasing. Coordinates are
/// field pixels: origin top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fruit {
    /// Stable handle for the renderer to mirror sim fruit into entities.
    /// Never reused within a process.
    pub id: u64,
    pub pos: IVec2,
    pub radius: i32,
    /// Pixels per tick, positive.
    pub speed: i32,
    /// Index into the fruit palette.
    pub color: usize,
}

impl Fruit {
    fn spawn(id: u64, rules: &FruitRules, rng: &mut impl Rng) -> Self {
        let lo = rules.spawn_margin;
        let hi = (rules.field.x - rules.spawn_margin).max(lo);
        Fruit {
            id,
            pos: IVec2::new(rng.gen_range(lo..=hi), rules.spawn_y),
            radius: rules.radius,
            speed: rng.gen_range(rules.speed_min..=rules.speed_max.max(rules.speed_min)),
            color: rng.gen_range(0..rules.palette_len.max(1)),
        }
    }

    /// One tick of fall. No bounds check; culling is the caller's job.
    pub fn advance(&mut self) {
        self.pos.y += self.speed;
    }

    /// Inclusive distance test: a fingertip exactly `radius` away still cuts.
    /// Squared i64 math so far-away tip coordinates cannot overflow.
    pub fn is_hit(&self, tip: IVec2) -> bool {
        let d = self.pos.as_i64vec2() - tip.as_i64vec2();
        let r = self.radius as i64;
        d.length_squared() <= r * r
    }
}

/// Per-tick output of the perception collaborator. An absent hand is a `None`
/// fingertip with count 0 — never an error. Not retained by the sim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerceptionSample {
    /// Fingertip in field pixels, present only while a hand is tracked.
    pub fingertip: Option<IVec2>,
    /// Open fingers this frame, 0..=5 from a well-behaved backend.
    pub finger_count: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Playing,
    GameOver,
}

/// Mode edge taken by a tick, for logging and presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stopped,
    Restarted,
}

/// What a single tick did. Carries no sim state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub cut: u32,
    pub missed: u32,
    pub spawned: bool,
    pub transition: Option<Transition>,
}

/// The recognized knobs of the round, flattened out of [`GameConfig`] so the
/// sim never touches window or presentation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FruitRules {
    /// Play-field size in pixels.
    pub field: IVec2,
    pub radius: i32,
    pub speed_min: i32,
    pub speed_max: i32,
    /// Spawn x is uniform in [margin, field.x - margin].
    pub spawn_margin: i32,
    /// Spawn y, above the visible area.
    pub spawn_y: i32,
    /// Per-tick spawn chance is 1 in this many; 0 disables spawning.
    pub spawn_one_in: u32,
    pub stop_fingers: u8,
    pub restart_fingers: u8,
    pub palette_len: usize,
}

impl FruitRules {
    pub fn from_config(cfg: &GameConfig) -> Self {
        FruitRules {
            field: IVec2::new(cfg.window.width as i32, cfg.window.height as i32),
            radius: cfg.fruit.radius,
            speed_min: cfg.fruit.speed_min,
            speed_max: cfg.fruit.speed_max,
            spawn_margin: cfg.fruit.spawn_margin,
            spawn_y: cfg.fruit.spawn_y,
            spawn_one_in: cfg.fruit.spawn_one_in,
            stop_fingers: cfg.controls.stop_fingers,
            restart_fingers: cfg.controls.restart_fingers,
            palette_len: palette::FRUIT_COLORS.len(),
        }
    }
}

/// Round state: live fruit, score and mode. The single source of truth;
/// rendering mirrors it and never feeds back.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct GameSim {
    pub fruits: Vec<Fruit>,
    pub score: u32,
    pub mode: Mode,
    next_id: u64,
}

impl Default for GameSim {
    fn default() -> Self {
        GameSim {
            fruits: Vec::new(),
            score: 0,
            mode: Mode::Playing,
            next_id: 0,
        }
    }
}

impl GameSim {
    /// Advance one tick. Total over (state, sample): no panics, no error paths;
    /// finger counts outside 0..=5 simply match no threshold.
    ///
    /// Order per tick:
    /// 1. Playing + stop count -> GameOver, everything frozen, nothing else runs.
    /// 2. GameOver + restart count -> fresh round, nothing else runs.
    /// 3. Playing: maybe spawn one fruit, then advance/resolve every fruit
    ///    (including the one just spawned). Hit is checked before the bottom
    ///    cull and is exclusive with it.
    /// 4. GameOver otherwise: held for display, no mutation.
    pub fn tick(
        &mut self,
        sample: &PerceptionSample,
        rng: &mut impl Rng,
        rules: &FruitRules,
    ) -> TickReport {
        let mut report = TickReport::default();

        match self.mode {
            Mode::Playing if sample.finger_count == rules.stop_fingers => {
                self.mode = Mode::GameOver;
                report.transition = Some(Transition::Stopped);
                return report;
            }
            Mode::GameOver if sample.finger_count == rules.restart_fingers => {
                self.reset();
                report.transition = Some(Transition::Restarted);
                return report;
            }
            Mode::GameOver => return report,
            Mode::Playing => {}
        }

        if rules.spawn_one_in > 0 && rng.gen_range(1..=rules.spawn_one_in) == 1 {
            let id = self.next_id;
            self.next_id += 1;
            self.fruits.push(Fruit::spawn(id, rules, rng));
            report.spawned = true;
        }

        // Two-phase update: drain the snapshot, rebuild the survivors. No
        // mutation-while-iterating, and a fruit resolves exactly once.
        let mut kept = Vec::with_capacity(self.fruits.len());
        for mut fruit in self.fruits.drain(..) {
            fruit.advance();
            if let Some(tip) = sample.fingertip {
                if fruit.is_hit(tip) {
                    self.score += 1;
                    report.cut += 1;
                    continue;
                }
            }
            if fruit.pos.y > rules.field.y {
                report.missed += 1;
                continue;
            }
            kept.push(fruit);
        }
        self.fruits = kept;
        report
    }

    /// Back to the initial round. Fruit ids keep counting; they are never reused.
    pub fn reset(&mut self) {
        self.fruits.clear();
        self.score = 0;
        self.mode = Mode::Playing;
    }
}
