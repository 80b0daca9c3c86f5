//! Session bookkeeping: attempt history, the win/loss state machine, and
//! the engine that owns the current session.

pub mod engine;
pub mod history;
pub mod state;

pub use engine::GameEngine;
pub use history::{History, HistoryEntry};
pub use state::{SessionState, SessionStatus};
