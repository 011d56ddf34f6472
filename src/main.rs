use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use hangterm::{
    app::App,
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    logging,
    runtime::{Runner, TerminalInput},
    words::WordList,
    TICK_RATE_MS,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin, Write},
    path::PathBuf,
    time::Duration,
};
use tracing::info;

/// hangman in your terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Guess the word one letter at a time before the gallows fill up. Rounds follow each other until you quit with Esc."
)]
pub struct Cli {
    /// built-in word list to draw words from
    #[clap(short = 'l', long, value_enum)]
    word_list: Option<BuiltinList>,

    /// file with one word per line to draw words from
    #[clap(short = 'f', long, conflicts_with = "word_list")]
    word_file: Option<PathBuf>,

    /// shortest word that may be picked
    #[clap(long)]
    min_length: Option<usize>,

    /// longest word that may be picked
    #[clap(long)]
    max_length: Option<usize>,

    /// wrong guesses allowed per round
    #[clap(short = 'g', long)]
    max_wrong_guesses: Option<usize>,

    /// config file to read (defaults to the platform config dir)
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// write the effective settings back to the config file
    #[clap(long)]
    save_config: bool,

    /// seed for word selection, for reproducible games
    #[clap(long)]
    seed: Option<u64>,

    /// ring the terminal bell on bad keys, wrong guesses and lost rounds
    #[clap(long)]
    bell: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum BuiltinList {
    Classic,
    Extended,
}

impl Cli {
    fn store(&self) -> FileConfigStore {
        match self.config {
            Some(ref path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }

    /// Layers command line flags over the loaded config.
    fn apply(&self, mut config: Config) -> hangterm::error::Result<Config> {
        if let Some(list) = self.word_list {
            config.game.word_list = WordList::builtin(&list.to_string())?.words;
        }
        if let Some(ref path) = self.word_file {
            config.game.word_list = WordList::from_path(path)?.words;
        }
        if let Some(min) = self.min_length {
            config.game.min_word_length = min;
        }
        if let Some(max) = self.max_length {
            config.game.max_word_length = max;
        }
        if let Some(max) = self.max_wrong_guesses {
            config.game.max_wrong_guesses = max;
        }
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(path) = AppDirs::log_path() {
        // logging is best effort, the game runs without it
        let _ = logging::init_tracing(&path);
    }

    let store = cli.store();
    let config = match cli.apply(store.load()) {
        Ok(config) => config,
        Err(err) => Cli::command().error(ErrorKind::InvalidValue, err).exit(),
    };

    let app = match App::new(config.clone(), cli.seed) {
        Ok(app) => app.with_bell(cli.bell),
        Err(err) => Cli::command().error(ErrorKind::ValueValidation, err).exit(),
    };

    if cli.save_config {
        store.save(&config)?;
        info!(path = %store.path().display(), "saved config");
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = app;
    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(total_wins = app.engine.total_wins(), "session over");
    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let mut runner = Runner::new(TerminalInput::spawn(), Duration::from_millis(TICK_RATE_MS));

    runner.run(app, |app| -> Result<(), Box<dyn Error>> {
        if app.take_bell() {
            let mut out = io::stdout();
            out.write_all(b"\x07")?;
            out.flush()?;
        }
        terminal.draw(|f| ui(app, f))?;
        Ok(())
    })
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(&app.board, f.area());
}

#[cfg(test)]
mod tests {
    use super::*;
    use hangterm::config::GameConfig;
    use ratatui::backend::TestBackend;
    use std::io::Write as _;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["hangterm"]);

        assert_eq!(cli.word_list, None);
        assert_eq!(cli.word_file, None);
        assert_eq!(cli.min_length, None);
        assert_eq!(cli.max_length, None);
        assert_eq!(cli.max_wrong_guesses, None);
        assert!(!cli.save_config);
        assert!(!cli.bell);
    }

    #[test]
    fn test_cli_defaults_keep_config() {
        let cli = Cli::parse_from(["hangterm"]);
        let config = cli.apply(Config::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "hangterm",
            "--min-length",
            "3",
            "--max-length",
            "6",
            "-g",
            "4",
            "--seed",
            "9",
        ]);
        let config = cli.apply(Config::default()).unwrap();

        assert_eq!(config.game.min_word_length, 3);
        assert_eq!(config.game.max_word_length, 6);
        assert_eq!(config.game.max_wrong_guesses, 4);
        assert_eq!(cli.seed, Some(9));
    }

    #[test]
    fn test_cli_builtin_word_list() {
        let cli = Cli::parse_from(["hangterm", "-l", "extended"]);
        let config = cli.apply(Config::default()).unwrap();
        assert!(config.game.word_list.len() > GameConfig::default().word_list.len());
    }

    #[test]
    fn test_cli_word_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lantern\nwalrus").unwrap();

        let cli = Cli::parse_from(["hangterm", "--word-file", file.path().to_str().unwrap()]);
        let config = cli.apply(Config::default()).unwrap();
        assert_eq!(config.game.word_list, vec!["lantern", "walrus"]);
    }

    #[test]
    fn test_cli_word_list_and_file_conflict() {
        let result = Cli::try_parse_from(["hangterm", "-l", "classic", "-f", "words.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_builtin_list_display() {
        assert_eq!(BuiltinList::Classic.to_string(), "classic");
        assert_eq!(BuiltinList::Extended.to_string(), "extended");
    }

    #[test]
    fn test_ui_draws_board() {
        let app = App::new(Config::default(), Some(1)).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| ui(&app, f)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Hangman"));
        assert!(text.contains("Guesses Remaining: 10"));
    }
}
