//! Number baseball in the terminal.
//!
//! Reads guesses from stdin and prints the engine's answers. All game
//! rules live in the library; this binary only renders.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use number_baseball::{GameConfig, GameEngine, GuessOutcome, SecretStrategy, SessionStatus, SubmitError};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Guess the secret code. Strike: right digit, right place. Ball: right digit, wrong place.
#[derive(Parser, Debug)]
#[command(name = "number-baseball")]
#[command(version)]
struct Cli {
    /// RNG seed, for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Accepted guesses allowed per game
    #[arg(long, default_value_t = number_baseball::core::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Digits in the secret code
    #[arg(long, default_value_t = number_baseball::core::DEFAULT_CODE_LENGTH)]
    code_length: usize,

    /// Draw secrets with a partial shuffle instead of rejection sampling
    #[arg(long)]
    shuffle: bool,
}

impl Cli {
    fn config(&self) -> GameConfig {
        let strategy = if self.shuffle {
            SecretStrategy::PartialShuffle
        } else {
            SecretStrategy::RejectionSampling
        };

        GameConfig::new()
            .with_max_attempts(self.max_attempts)
            .with_code_length(self.code_length)
            .with_secret_strategy(strategy)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    let mut engine = match cli.seed {
        Some(seed) => GameEngine::new(config, seed),
        None => GameEngine::from_entropy(config),
    }
    .context("invalid game configuration")?;

    info!(seed = engine.seed(), "engine ready");
    play(&mut engine, io::stdin().lock(), io::stdout().lock())
}

/// Run games until the player declines another or input ends.
fn play(engine: &mut GameEngine, input: impl BufRead, mut out: impl Write) -> Result<()> {
    let mut lines = input.lines();

    loop {
        let config = engine.config();
        writeln!(
            out,
            "Guess the {}-digit code. You have {} tries.",
            config.code_length, config.max_attempts
        )?;

        while !engine.status().is_terminal() {
            write!(out, "[{}/{}] > ", engine.session().attempts_used() + 1, engine.session().max_attempts())?;
            out.flush()?;

            let Some(line) = lines.next().transpose().context("failed to read guess")? else {
                return Ok(());
            };
            // `lines()` keeps the '\r' of a CRLF ending; the engine would reject it as whitespace.
            let guess = line.strip_suffix('\r').unwrap_or(&line);

            match engine.submit_guess(guess) {
                Ok(GuessOutcome::Win) => writeln!(out, "Home run! You got it.")?,
                Ok(outcome) => writeln!(out, "{guess} : {outcome}")?,
                Err(SubmitError::Invalid(err)) => writeln!(out, "Try again: {err}")?,
                Err(err @ SubmitError::SessionOver { .. }) => return Err(err.into()),
            }
        }

        if engine.status() == SessionStatus::Lost {
            if let Some(secret) = engine.session().revealed_secret() {
                writeln!(out, "Out of tries. The code was {secret}.")?;
            }
        }

        write!(out, "Play again? [y/N] ")?;
        out.flush()?;
        let again = lines.next().transpose().context("failed to read answer")?;
        if !matches!(again.as_deref().map(str::trim), Some("y" | "Y" | "yes" | "again")) {
            return Ok(());
        }

        engine.new_session();
    }
}
