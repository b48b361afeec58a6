pub mod app;
pub mod core;
pub mod gameplay;
pub mod perception;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::app::state::GameMode;
pub use crate::core::config::GameConfig;
pub use crate::core::rng::GameRng;
pub use crate::core::sim::{Fruit, GameSim, Mode, PerceptionSample};
pub use crate::perception::Perception;
