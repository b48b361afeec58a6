use bevy::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

/// Spawn randomness as an explicit resource rather than thread-local state, so
/// a seed makes a whole run (and any test) reproducible.
#[derive(Resource)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => GameRng(StdRng::seed_from_u64(s)),
            None => GameRng(StdRng::from_entropy()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = GameRng::from_seed_opt(Some(99));
        let mut b = GameRng::from_seed_opt(Some(99));
        let seq_a: Vec<u32> = (0..8).map(|_| a.0.gen_range(1..=20)).collect();
        let seq_b: Vec<u32> = (0..8).map(|_| b.0.gen_range(1..=20)).collect();
        assert_eq!(seq_a, seq_b);
    }
}
