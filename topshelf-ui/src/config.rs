//! Configuration for topshelf-ui
//!
//! Service credentials and the flash secret come from the environment
//! (or CLI flags); the database path resolves CLI → env → OS data dir.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable consulted for the database path
pub const DATABASE_ENV_VAR: &str = "TOPSHELF_DATABASE";

/// Command-line and environment configuration
#[derive(Parser, Debug, Clone)]
#[command(name = "topshelf-ui", about = "Personal media catalogue web service")]
pub struct Config {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:5780")]
    pub bind: SocketAddr,

    /// SQLite database file path (default: TOPSHELF_DATABASE, then OS data dir)
    #[arg(long)]
    pub database: Option<String>,

    /// Video platform API key
    #[arg(long, env = "YT_API_KEY", hide_env_values = true)]
    pub yt_api_key: String,

    /// Film metadata service API key
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    pub tmdb_api_key: String,

    /// Secret used to sign flash cookies
    #[arg(long, env = "SECRET_KEY", hide_env_values = true)]
    pub secret_key: String,
}

impl Config {
    /// Resolve the database file path through the standard priority order
    pub fn database_path(&self) -> PathBuf {
        topshelf_common::config::resolve_database_path(self.database.as_deref(), DATABASE_ENV_VAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_without_environment() {
        let config = Config::try_parse_from([
            "topshelf-ui",
            "--yt-api-key",
            "yt-key",
            "--tmdb-api-key",
            "tmdb-key",
            "--secret-key",
            "s3cret",
            "--database",
            "/tmp/test.db",
        ])
        .expect("parse failed");

        assert_eq!(config.bind, "127.0.0.1:5780".parse().unwrap());
        assert_eq!(config.database_path(), PathBuf::from("/tmp/test.db"));
    }
}
