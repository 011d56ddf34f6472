//! The hangman state machine.
//!
//! [`GameEngine`] knows nothing about terminals. Every state change comes
//! back to the caller as [`GameEvent`]s, which a [`Renderer`] turns into
//! something visible.
//!
//! [`Renderer`]: crate::render::Renderer

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::ConfigError;

/// What happened to the game, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted { word_length: usize },
    Correct { letter: char, positions: Vec<usize> },
    Wrong { letter: char, guesses_remaining: usize },
    Won { total_wins: u32, word: String },
    Lost { word: String },
}

/// The headline result of an accepted guess. A round-ending guess reports
/// `Won`/`Lost` rather than `Correct`/`Wrong`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum Verdict {
    Correct,
    Wrong,
    Won,
    Lost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum RejectReason {
    #[strum(serialize = "not a letter")]
    NotALetter,
    #[strum(serialize = "already guessed")]
    AlreadyGuessed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Nothing changed.
    Rejected { letter: char, reason: RejectReason },
    Accepted {
        verdict: Verdict,
        events: Vec<GameEvent>,
    },
}

impl GuessOutcome {
    pub fn events(&self) -> &[GameEvent] {
        match self {
            GuessOutcome::Rejected { .. } => &[],
            GuessOutcome::Accepted { events, .. } => events,
        }
    }

    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            GuessOutcome::Rejected { .. } => None,
            GuessOutcome::Accepted { verdict, .. } => Some(*verdict),
        }
    }
}

/// Externally visible engine states. A finished round is replaced by a new
/// one before control returns, so there is no terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RoundEnd {
    Won,
    Lost,
}

/// Per-round bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundState {
    word: Vec<char>,
    mask: Vec<Option<char>>,
    wrong_letters: Vec<char>,
    guesses_remaining: usize,
    filled: usize,
}

impl RoundState {
    fn new(word: &str, max_wrong_guesses: usize) -> Self {
        let word: Vec<char> = word.chars().collect();
        Self {
            mask: vec![None; word.len()],
            word,
            wrong_letters: Vec::new(),
            guesses_remaining: max_wrong_guesses,
            filled: 0,
        }
    }

    pub fn word_length(&self) -> usize {
        self.word.len()
    }

    pub fn mask(&self) -> &[Option<char>] {
        &self.mask
    }

    pub fn wrong_letters(&self) -> &[char] {
        &self.wrong_letters
    }

    pub fn guesses_remaining(&self) -> usize {
        self.guesses_remaining
    }

    /// Number of mask slots revealed so far.
    pub fn filled(&self) -> usize {
        self.filled
    }

    pub fn unrevealed(&self) -> usize {
        self.mask.iter().filter(|slot| slot.is_none()).count()
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.mask.contains(&Some(letter)) || self.wrong_letters.contains(&letter)
    }

    /// The word with unrevealed letters shown as `_`.
    pub fn masked_word(&self) -> String {
        self.mask.iter().map(|slot| slot.unwrap_or('_')).collect()
    }

    fn is_solved(&self) -> bool {
        self.filled >= self.word.len()
    }

    fn reveal(&mut self, letter: char) -> Vec<usize> {
        let positions: Vec<usize> = self
            .word
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == letter)
            .map(|(idx, _)| idx)
            .collect();

        for &idx in &positions {
            self.mask[idx] = Some(letter);
        }
        self.filled += positions.len();

        positions
    }

    fn miss(&mut self, letter: char) {
        self.wrong_letters.push(letter);
        self.guesses_remaining = self.guesses_remaining.saturating_sub(1);
    }

    fn word(&self) -> String {
        self.word.iter().collect()
    }
}

#[derive(Debug)]
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    candidates: Vec<String>,
    rng: R,
    total_wins: u32,
    round: Option<RoundState>,
}

impl GameEngine<StdRng> {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        let candidates = config.qualifying_words()?;
        debug!(words = candidates.len(), "engine configured");

        Ok(Self {
            config,
            candidates,
            rng,
            total_wins: 0,
            round: None,
        })
    }

    /// Swaps the configuration. Only possible before the first round.
    pub fn configure(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        if self.round.is_some() {
            return Err(ConfigError::AlreadyStarted);
        }
        self.candidates = config.qualifying_words()?;
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        match self.round {
            None => Phase::NotStarted,
            Some(_) => Phase::InProgress,
        }
    }

    pub fn total_wins(&self) -> u32 {
        self.total_wins
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn start_round(&mut self) -> GameEvent {
        let round = self.pick_round();
        let word_length = round.word_length();
        self.round = Some(round);

        GameEvent::RoundStarted { word_length }
    }

    fn pick_round(&mut self) -> RoundState {
        // never empty: qualifying_words() refuses an empty set
        let idx = self.rng.gen_range(0..self.candidates.len());
        let word = &self.candidates[idx];
        debug!(word = %word, "selected word");

        RoundState::new(word, self.config.max_wrong_guesses)
    }

    /// Plays one letter. A valid letter on an engine that has not started
    /// yet starts the first round before being played.
    pub fn submit_guess(&mut self, letter: char) -> GuessOutcome {
        if !letter.is_ascii_lowercase() {
            return GuessOutcome::Rejected {
                letter,
                reason: RejectReason::NotALetter,
            };
        }

        let mut events = Vec::new();
        let mut round = match self.round.take() {
            Some(round) => round,
            None => {
                let round = self.pick_round();
                events.push(GameEvent::RoundStarted {
                    word_length: round.word_length(),
                });
                round
            }
        };

        if round.has_guessed(letter) {
            self.round = Some(round);
            return GuessOutcome::Rejected {
                letter,
                reason: RejectReason::AlreadyGuessed,
            };
        }

        let positions = round.reveal(letter);
        let verdict = if !positions.is_empty() {
            events.push(GameEvent::Correct { letter, positions });
            if round.is_solved() {
                self.finish_round(round, RoundEnd::Won, &mut events);
                Verdict::Won
            } else {
                self.round = Some(round);
                Verdict::Correct
            }
        } else {
            round.miss(letter);
            let guesses_remaining = round.guesses_remaining();
            events.push(GameEvent::Wrong {
                letter,
                guesses_remaining,
            });
            if guesses_remaining == 0 {
                self.finish_round(round, RoundEnd::Lost, &mut events);
                Verdict::Lost
            } else {
                self.round = Some(round);
                Verdict::Wrong
            }
        };

        GuessOutcome::Accepted { verdict, events }
    }

    fn finish_round(&mut self, round: RoundState, end: RoundEnd, events: &mut Vec<GameEvent>) {
        let word = round.word();

        match end {
            RoundEnd::Won => {
                self.total_wins += 1;
                info!(word = %word, total_wins = self.total_wins, "round won");
                events.push(GameEvent::Won {
                    total_wins: self.total_wins,
                    word,
                });
            }
            RoundEnd::Lost => {
                info!(word = %word, "round lost");
                events.push(GameEvent::Lost { word });
            }
        }

        events.push(self.start_round());
    }
}
