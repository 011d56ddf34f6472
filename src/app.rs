use tracing::trace;

use crate::config::Config;
use crate::engine::{GameEngine, GuessOutcome};
use crate::error::ConfigError;
use crate::render::{BoardView, Cue, Renderer};

/// Binds the engine to the board: guesses go in, events come out drawn.
#[derive(Debug)]
pub struct App {
    pub engine: GameEngine,
    pub board: BoardView,
    pub bell: bool,
}

impl App {
    /// Builds the app and deals the first round.
    pub fn new(config: Config, seed: Option<u64>) -> Result<Self, ConfigError> {
        let Config { game, labels } = config;
        let max_wrong_guesses = game.max_wrong_guesses;
        let engine = match seed {
            Some(seed) => GameEngine::seeded(game, seed)?,
            None => GameEngine::new(game)?,
        };

        let mut app = Self {
            engine,
            board: BoardView::new(labels, max_wrong_guesses),
            bell: false,
        };
        let started = app.engine.start_round();
        app.board.render(&started);
        Ok(app)
    }

    pub fn with_bell(mut self, bell: bool) -> Self {
        self.bell = bell;
        self
    }

    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let outcome = self.engine.submit_guess(letter);
        trace!(?outcome, "guess played");

        match &outcome {
            GuessOutcome::Rejected { letter, reason } => self.board.reject(*letter, *reason),
            GuessOutcome::Accepted { events, .. } => self.board.render_all(events),
        }
        outcome
    }

    /// Ages the status message. Returns whether the screen needs redrawing.
    pub fn on_tick(&mut self) -> bool {
        let showing = self.board.message.is_some();
        self.board.on_tick();
        showing
    }

    /// Whether the host should ring the terminal bell for the last input.
    pub fn take_bell(&mut self) -> bool {
        let cue = self.board.take_cue();
        self.bell && matches!(cue, Some(Cue::BadKey | Cue::Wrong | Cue::Lost))
    }
}
