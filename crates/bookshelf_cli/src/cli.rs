//! Command-line arguments and the runtime configuration built from them.

use bookshelf_core::default_log_level;
use clap::Parser;
use std::path::PathBuf;

/// Interactive book catalog backed by a JSON file.
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Catalog file; created with an empty catalog if missing
    #[arg(value_name = "DATA_FILE", default_value = "library.json")]
    pub data_file: PathBuf,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rolling log files; logging is off when omitted
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

/// Resolved settings handed to startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub log_level: String,
    /// Absolute when set.
    pub log_dir: Option<PathBuf>,
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        Self {
            data_file: args.data_file,
            log_level: args
                .log_level
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: args
                .log_dir
                .map(|dir| std::path::absolute(&dir).unwrap_or(dir)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, Args};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn defaults_to_library_json_without_logging() {
        let config = AppConfig::from(Args::parse_from(["bookshelf"]));

        assert_eq!(config.data_file, PathBuf::from("library.json"));
        assert_eq!(config.log_dir, None);
        assert!(!config.log_level.is_empty());
    }

    #[test]
    fn relative_log_dir_is_made_absolute() {
        let config = AppConfig::from(Args::parse_from([
            "bookshelf",
            "books.json",
            "--log-level",
            "warn",
            "--log-dir",
            "logs",
        ]));

        assert_eq!(config.data_file, PathBuf::from("books.json"));
        assert_eq!(config.log_level, "warn");
        let log_dir = config.log_dir.unwrap();
        assert!(log_dir.is_absolute());
        assert!(log_dir.ends_with("logs"));
    }
}
