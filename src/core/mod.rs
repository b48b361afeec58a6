pub mod config;
pub mod palette;
pub mod rng;
pub mod sim;
