//! Secret code generation.
//!
//! Two strategies, both drawing from `GameConfig::digit_alphabet` only:
//! - `RejectionSampling`: draw a digit, drop it if already held, repeat.
//!   Expected O(1) for the classic 4-of-9 game.
//! - `PartialShuffle`: partial Fisher-Yates, exactly `code_length` draws.
//!
//! Draw order is position order.

use tracing::trace;

use crate::core::{Digits, GameConfig, GameRng, SecretCode, SecretStrategy};

impl SecretStrategy {
    /// Generate a secret for `config`.
    ///
    /// `config` must already have passed `GameConfig::validate`; otherwise
    /// rejection sampling would never finish.
    pub fn generate(self, config: &GameConfig, rng: &mut GameRng) -> SecretCode {
        let digits = match self {
            SecretStrategy::RejectionSampling => rejection_sample(config, rng),
            SecretStrategy::PartialShuffle => partial_shuffle(config, rng),
        };
        trace!(strategy = ?self, secret = ?digits, "generated secret");
        SecretCode::from_digits_unchecked(digits)
    }
}

/// Generate a secret using the configured strategy.
pub fn generate_secret(config: &GameConfig, rng: &mut GameRng) -> SecretCode {
    config.secret_strategy.generate(config, rng)
}

fn rejection_sample(config: &GameConfig, rng: &mut GameRng) -> Digits {
    let alphabet = &config.digit_alphabet;
    let mut digits = Digits::new();

    while digits.len() < config.code_length {
        let candidate = alphabet[rng.gen_range_usize(0..alphabet.len())];
        if !digits.contains(&candidate) {
            digits.push(candidate);
        }
    }

    digits
}

fn partial_shuffle(config: &GameConfig, rng: &mut GameRng) -> Digits {
    let mut pool: Digits = config.digit_alphabet.iter().copied().collect();
    let n = pool.len();

    for i in 0..config.code_length {
        let j = rng.gen_range_usize(i..n);
        pool.swap(i, j);
    }

    pool.truncate(config.code_length);
    pool
}
