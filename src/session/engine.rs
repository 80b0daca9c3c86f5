//! The game engine: configuration, RNG and the current session.
//!
//! Callers see two operations:
//! - `new_session`: discard the current game and draw a fresh secret
//! - `submit_guess`: play one guess in the current game
//!
//! ```
//! use number_baseball::{GameConfig, GameEngine, GuessOutcome, ScoreResult, SessionStatus};
//!
//! let mut engine = GameEngine::with_secret(GameConfig::default(), "1234", 42)?;
//!
//! assert_eq!(
//!     engine.submit_guess("1243")?,
//!     GuessOutcome::Feedback(ScoreResult::new(2, 2)),
//! );
//! assert_eq!(engine.submit_guess("1234")?, GuessOutcome::Win);
//! assert_eq!(engine.status(), SessionStatus::Won);
//!
//! engine.new_session();
//! assert_eq!(engine.status(), SessionStatus::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use tracing::{info, instrument};

use super::state::{SessionState, SessionStatus};
use crate::core::{GameConfig, GameRng, GameRngState, SecretCode};
use crate::error::{ConfigError, SubmitError};
use crate::rules::{generate_secret, GuessOutcome};

/// Owns one session at a time.
///
/// Multiple concurrent games need multiple engines.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    rng: GameRng,
    session: SessionState,
    sessions_started: u64,
}

impl GameEngine {
    /// Create an engine with a seeded RNG and start the first session.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `config` fails validation.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create an engine seeded from OS randomness.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `config` fails validation.
    pub fn from_entropy(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Create an engine whose first session uses a caller-chosen secret.
    ///
    /// Later sessions draw from an RNG seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `config` fails validation or `secret` does
    /// not fit it.
    pub fn with_secret(config: GameConfig, secret: &str, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let secret = SecretCode::parse(secret, &config)?;
        let session = SessionState::new(secret, config.max_attempts);
        info!(seed, "session started with fixed secret");

        Ok(Self {
            config,
            rng: GameRng::new(seed),
            session,
            sessions_started: 1,
        })
    }

    /// Create an engine from a saved RNG state.
    ///
    /// Reproduces the secret sequence of the engine the state was taken from.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `config` fails validation.
    pub fn from_rng_state(config: GameConfig, state: &GameRngState) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::from_state(state))
    }

    fn with_rng(config: GameConfig, mut rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let session = Self::start(&config, &mut rng);

        Ok(Self {
            config,
            rng,
            session,
            sessions_started: 1,
        })
    }

    fn start(config: &GameConfig, rng: &mut GameRng) -> SessionState {
        let secret = generate_secret(config, rng);
        info!(
            seed = rng.seed(),
            code_length = config.code_length,
            max_attempts = config.max_attempts,
            "session started"
        );
        SessionState::new(secret, config.max_attempts)
    }

    /// Discard the current session and start a new one.
    ///
    /// Unconditional: an in-progress game is abandoned.
    #[instrument(skip(self), fields(previous = %self.session.status()))]
    pub fn new_session(&mut self) {
        self.session = Self::start(&self.config, &mut self.rng);
        self.sessions_started += 1;
    }

    /// Play one guess in the current session.
    ///
    /// # Errors
    ///
    /// - `SubmitError::Invalid` for malformed or repeated guesses. No attempt is used.
    /// - `SubmitError::SessionOver` if the session already ended.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, SubmitError> {
        self.session.submit_guess(raw)
    }

    /// The current session.
    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Status of the current session.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.session.status()
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the engine's RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// RNG state, for replaying the secrets of future sessions.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Sessions started so far, including the current one.
    #[must_use]
    pub fn sessions_started(&self) -> u64 {
        self.sessions_started
    }
}
