// Library surface for the binary and for headless/integration tests.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod render;
pub mod runtime;
pub mod ui;
pub mod words;

pub use engine::{GameEngine, GameEvent, GuessOutcome, Phase, RejectReason, Verdict};
pub use error::{ConfigError, Error};

/// Interval between ticks of the game loop.
pub const TICK_RATE_MS: u64 = 100;
