//! Database path resolution
//!
//! Priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. OS-dependent compiled default (fallback)

use std::path::PathBuf;

/// Resolve the SQLite database file path.
///
/// Checks the CLI argument first, then the named environment variable,
/// then falls back to `topshelf.db` under the platform data directory.
pub fn resolve_database_path(cli_arg: Option<&str>, env_var_name: &str) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: OS-dependent compiled default
    default_database_path()
}

/// Get OS-dependent default database path
fn default_database_path() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/topshelf/topshelf.db
        dirs::data_local_dir()
            .map(|d| d.join("topshelf"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/topshelf"))
            .join("topshelf.db")
    } else if cfg!(target_os = "macos") {
        // ~/Library/Application Support/topshelf/topshelf.db
        dirs::data_dir()
            .map(|d| d.join("topshelf"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/topshelf"))
            .join("topshelf.db")
    } else if cfg!(target_os = "windows") {
        // %LOCALAPPDATA%\topshelf\topshelf.db
        dirs::data_local_dir()
            .map(|d| d.join("topshelf"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\topshelf"))
            .join("topshelf.db")
    } else {
        PathBuf::from("./topshelf_data").join("topshelf.db")
    }
}
