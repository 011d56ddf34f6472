use directories::ProjectDirs;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::ConfigError;

pub const DEFAULT_MIN_WORD_LENGTH: usize = 5;
pub const DEFAULT_MAX_WORD_LENGTH: usize = 10;
pub const DEFAULT_MAX_WRONG_GUESSES: usize = 10;

const DEFAULT_WORDS: [&str; 10] = [
    "vacation",
    "occupation",
    "depth",
    "hamlet",
    "automobile",
    "music",
    "pencil",
    "professor",
    "truck",
    "inertia",
];

/// Rules of the game handed to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub word_list: Vec<String>,
    pub min_word_length: usize,
    pub max_word_length: usize,
    pub max_wrong_guesses: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_list: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            max_wrong_guesses: DEFAULT_MAX_WRONG_GUESSES,
        }
    }
}

impl GameConfig {
    /// Checks the config and returns the distinct words a round may use.
    ///
    /// Words are trimmed and lowercased. A word with anything but `a`-`z` in
    /// it could never be completed, so it is left out with a warning.
    pub fn qualifying_words(&self) -> Result<Vec<String>, ConfigError> {
        if self.max_wrong_guesses == 0 {
            return Err(ConfigError::NoGuessesAllowed);
        }
        if self.min_word_length > self.max_word_length {
            return Err(ConfigError::InvertedBounds {
                min: self.min_word_length,
                max: self.max_word_length,
            });
        }

        let words = self
            .word_list
            .iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| {
                let playable = !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase());
                if !playable {
                    warn!(word = %w, "skipping word with non a-z characters");
                }
                playable
            })
            .filter(|w| (self.min_word_length..=self.max_word_length).contains(&w.chars().count()))
            .unique()
            .collect::<Vec<String>>();

        if words.is_empty() {
            return Err(ConfigError::NoQualifyingWord {
                min: self.min_word_length,
                max: self.max_word_length,
            });
        }

        Ok(words)
    }
}

/// Text shown by the terminal front end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Labels {
    pub title: String,
    pub start_message: String,
    pub wins: String,
    pub current_word: String,
    pub wrong_letters: String,
    pub guesses_remaining: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Hangman".to_string(),
            start_message: "Press any key to get started!".to_string(),
            wins: "Games won:".to_string(),
            current_word: "Guess this word:".to_string(),
            wrong_letters: "Letters you've guessed:".to_string(),
            guesses_remaining: "Guesses Remaining:".to_string(),
        }
    }
}

/// Everything the config file can hold.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub game: GameConfig,
    pub labels: Labels,
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> crate::error::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "hangterm") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("hangterm_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            return Config::default();
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "ignoring unreadable config file");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> crate::error::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
