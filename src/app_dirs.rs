use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    /// Where the log file goes.
    ///
    /// The TUI owns the terminal while it runs, so logs are written to a file.
    /// A log is disposable runtime state, not configuration or user data, which
    /// makes the XDG state directory (`$HOME/.local/state`) its home rather
    /// than the config directory holding `config.json`. Without `HOME`, the
    /// platform's local data directory is used.
    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("hangterm");
            Some(state_dir.join("hangterm.log"))
        } else {
            ProjectDirs::from("", "", "hangterm")
                .map(|proj_dirs| proj_dirs.data_local_dir().join("hangterm.log"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_ends_with_log_file() {
        if let Some(path) = AppDirs::log_path() {
            assert_eq!(path.file_name().unwrap(), "hangterm.log");
            assert!(path.to_string_lossy().contains("hangterm"));
        }
    }

    #[test]
    fn log_path_is_under_state_dir_when_home_is_set() {
        let Ok(home) = std::env::var("HOME") else {
            return;
        };
        let path = AppDirs::log_path().unwrap();
        assert_eq!(
            path,
            PathBuf::from(home).join(".local/state/hangterm/hangterm.log")
        );
    }
}
