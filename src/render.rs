use crate::config::Labels;
use crate::engine::{GameEvent, RejectReason, Verdict};

/// Number of parts in the gallows drawing, from empty gallows to a full figure.
pub const GALLOWS_STAGES: usize = 7;

/// How many ticks a status message stays on screen.
pub const MESSAGE_TICKS: u16 = 20;

/// Consumer of engine events.
pub trait Renderer {
    fn render(&mut self, event: &GameEvent);

    /// Called for keys the engine turned down.
    fn reject(&mut self, _letter: char, _reason: RejectReason) {}

    fn render_all(&mut self, events: &[GameEvent]) {
        for event in events {
            self.render(event);
        }
    }
}

/// Feedback the host may turn into a sound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum Cue {
    BadKey,
    Correct,
    Wrong,
    Won,
    Lost,
}

/// What the drawing area shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Figure {
    /// Gallows with this many parts drawn.
    Gallows(usize),
    /// The figure walks free after a won round.
    Freed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub ticks_left: u16,
}

/// Everything the terminal draws, rebuilt purely from engine events.
#[derive(Clone, Debug)]
pub struct BoardView {
    pub labels: Labels,
    pub max_wrong_guesses: usize,
    pub slots: Vec<Option<char>>,
    pub wrong_letters: Vec<char>,
    pub guesses_remaining: usize,
    pub total_wins: u32,
    pub last_word: Option<String>,
    /// How the previous round ended. Survives the automatic restart and is
    /// cleared by the first accepted guess of the new round.
    pub last_result: Option<Verdict>,
    pub message: Option<StatusMessage>,
    pub started: bool,
    cue: Option<Cue>,
}

impl BoardView {
    pub fn new(labels: Labels, max_wrong_guesses: usize) -> Self {
        Self {
            labels,
            max_wrong_guesses,
            slots: Vec::new(),
            wrong_letters: Vec::new(),
            guesses_remaining: max_wrong_guesses,
            total_wins: 0,
            last_word: None,
            last_result: None,
            message: None,
            started: false,
            cue: None,
        }
    }

    /// The masked word with a space between slots.
    pub fn masked_word(&self) -> String {
        itertools::join(self.slots.iter().map(|slot| slot.unwrap_or('_')), " ")
    }

    pub fn wrong_guesses(&self) -> usize {
        self.max_wrong_guesses.saturating_sub(self.guesses_remaining)
    }

    /// Gallows parts to draw for the current number of wrong guesses,
    /// spread evenly over the allowed misses.
    pub fn gallows_stage(&self) -> usize {
        if self.max_wrong_guesses == 0 {
            return GALLOWS_STAGES;
        }
        let wrong = self.wrong_guesses().min(self.max_wrong_guesses);
        (wrong * GALLOWS_STAGES).div_ceil(self.max_wrong_guesses)
    }

    /// The drawing for this frame. Right after a round ends the board shows
    /// that round's outcome, even though the next round has already begun.
    pub fn figure(&self) -> Figure {
        match self.last_result {
            Some(Verdict::Won) => Figure::Freed,
            Some(Verdict::Lost) => Figure::Gallows(GALLOWS_STAGES),
            _ => Figure::Gallows(self.gallows_stage()),
        }
    }

    /// Returns the pending cue, clearing it.
    pub fn take_cue(&mut self) -> Option<Cue> {
        self.cue.take()
    }

    pub fn on_tick(&mut self) {
        if let Some(message) = self.message.as_mut() {
            message.ticks_left = message.ticks_left.saturating_sub(1);
            if message.ticks_left == 0 {
                self.message = None;
            }
        }
    }

    fn say(&mut self, text: String) {
        self.message = Some(StatusMessage {
            text,
            ticks_left: MESSAGE_TICKS,
        });
    }
}

impl Renderer for BoardView {
    fn render(&mut self, event: &GameEvent) {
        match event {
            GameEvent::RoundStarted { word_length } => {
                self.started = true;
                self.slots = vec![None; *word_length];
                self.wrong_letters.clear();
                self.guesses_remaining = self.max_wrong_guesses;
            }
            GameEvent::Correct { letter, positions } => {
                for &idx in positions {
                    if let Some(slot) = self.slots.get_mut(idx) {
                        *slot = Some(*letter);
                    }
                }
                self.last_result = None;
                self.cue = Some(Cue::Correct);
            }
            GameEvent::Wrong {
                letter,
                guesses_remaining,
            } => {
                self.wrong_letters.push(*letter);
                self.guesses_remaining = *guesses_remaining;
                self.last_result = None;
                self.cue = Some(Cue::Wrong);
            }
            GameEvent::Won { total_wins, word } => {
                self.total_wins = *total_wins;
                self.last_word = Some(word.clone());
                self.last_result = Some(Verdict::Won);
                self.say(format!("You won! The word was '{word}'."));
                self.cue = Some(Cue::Won);
            }
            GameEvent::Lost { word } => {
                self.last_word = Some(word.clone());
                self.last_result = Some(Verdict::Lost);
                self.say(format!("You lost. The word was '{word}'."));
                self.cue = Some(Cue::Lost);
            }
        }
    }

    fn reject(&mut self, letter: char, reason: RejectReason) {
        let shown = if letter.is_control() {
            "that key".to_string()
        } else {
            format!("'{letter}'")
        };
        self.say(format!("{shown}: {reason}"));
        self.cue = Some(Cue::BadKey);
    }
}
