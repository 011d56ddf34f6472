use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Result};

static LISTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/words/lists");

/// Names of the word lists compiled into the binary.
pub const BUILTIN_LISTS: &[&str] = &["classic", "extended"];

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct WordList {
    pub name: String,
    pub words: Vec<String>,
}

impl WordList {
    pub fn builtin(name: &str) -> Result<Self> {
        let file = LISTS_DIR
            .get_file(format!("{name}.json"))
            .ok_or_else(|| ConfigError::UnknownWordList(name.to_string()))?;

        // Embedded files are always utf-8 json; anything else is a packaging bug
        let contents = file
            .contents_utf8()
            .ok_or_else(|| ConfigError::UnknownWordList(name.to_string()))?;

        Ok(from_str(contents)?)
    }

    /// Reads a plain text list: one word per line, `#` starts a comment line.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "custom".to_string());

        Ok(Self {
            name,
            words: parse_lines(&text),
        })
    }
}

fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn classic_list_has_ten_words() {
        let list = WordList::builtin("classic").unwrap();

        assert_eq!(list.name, "classic");
        assert_eq!(list.words.len(), 10);
        assert!(list.words.contains(&"hamlet".to_string()));
        assert!(list.words.contains(&"automobile".to_string()));
    }

    #[test]
    fn every_builtin_list_loads() {
        for name in BUILTIN_LISTS {
            let list = WordList::builtin(name).unwrap();
            assert_eq!(&list.name, name);
            assert!(!list.words.is_empty());
        }
    }

    #[test]
    fn unknown_builtin_is_a_config_error() {
        let err = WordList::builtin("nonexistent").unwrap_err();
        assert_matches!(err, Error::Config(ConfigError::UnknownWordList(name)) if name == "nonexistent");
    }

    #[test]
    fn reads_plain_text_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "# animals").unwrap();
        writeln!(file, "giraffe").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  walrus  ").unwrap();

        let list = WordList::from_path(file.path()).unwrap();
        assert_eq!(list.words, vec!["giraffe", "walrus"]);
        assert!(!list.name.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = WordList::from_path(dir.path().join("missing.txt")).unwrap_err();
        assert_matches!(err, Error::Io(_));
    }
}
