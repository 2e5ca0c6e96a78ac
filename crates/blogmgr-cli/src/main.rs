//! blogmgr CLI
//!
//! Interactive, line-oriented blog post manager backed by SQLite

use blogmgr_core::errors::{BlogError, BlogErrorKind};
use blogmgr_core::logging_facility::{self, Profile};
use blogmgr_store::BlogStore;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

mod render;
mod repl;

#[derive(Debug, Parser)]
#[command(name = "blogmgr")]
#[command(about = "blogmgr - create, list, view and search blog posts", long_about = None)]
struct Cli {
    /// SQLite database file (created if missing)
    #[arg(long, env = "BLOGMGR_DB", default_value = ".blogmgr/blog.db")]
    db: PathBuf,

    /// Log format, written to stderr
    #[arg(long, env = "BLOGMGR_LOG", value_enum, default_value_t = LogFormat::Dev)]
    log: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Human-readable
    Dev,
    /// One JSON object per event
    Json,
    /// No logging
    Off,
}

fn main() {
    let cli = Cli::parse();

    match cli.log {
        LogFormat::Dev => logging_facility::init(Profile::Development),
        LogFormat::Json => logging_facility::init(Profile::Production),
        LogFormat::Off => {}
    }

    let store = match open_store(&cli) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error connecting to database: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = repl::Session::new(stdin.lock(), stdout.lock()).run(store) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn open_store(cli: &Cli) -> Result<BlogStore, BlogError> {
    ensure_parent_dir(&cli.db)?;
    BlogStore::open(&cli.db)
}

/// Create the directory that will hold the database file
fn ensure_parent_dir(db: &Path) -> Result<(), BlogError> {
    let Some(parent) = db.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    std::fs::create_dir_all(parent).map_err(|e| {
        BlogError::new(BlogErrorKind::Io)
            .with_op("open_store")
            .with_message(format!("cannot create {}: {}", parent.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["blogmgr"]).unwrap();
        assert_eq!(cli.log, LogFormat::Dev);
        assert!(cli.db.ends_with("blog.db"));
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli =
            Cli::try_parse_from(["blogmgr", "--db", "/tmp/x.db", "--log", "json"]).unwrap();
        assert_eq!(cli.db, PathBuf::from("/tmp/x.db"));
        assert_eq!(cli.log, LogFormat::Json);
    }

    #[test]
    fn test_parent_dir_failure_is_io_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"").unwrap();

        let err = ensure_parent_dir(&blocker.join("blog.db")).unwrap_err();

        assert_eq!(err.kind(), BlogErrorKind::Io);
        assert_eq!(err.op(), Some("open_store"));
    }

    #[test]
    fn test_bare_file_name_needs_no_directory() {
        assert!(ensure_parent_dir(Path::new("blog.db")).is_ok());
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["blogmgr", "create"]).is_err());
    }
}
