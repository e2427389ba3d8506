mod config;
pub mod database;
pub mod kv;
pub mod profile_store;

pub use config::{ActivitiesConfig, Config, SuggestionsConfig, WatchConfig};
pub use database::Database;
pub use kv::{KeyValueStore, MemoryStore};
pub use profile_store::{ProfileStore, ACTIVITIES_KEY, COMPLETED_ACTIVITIES_KEY, USER_KEY};

use std::path::PathBuf;

use crate::error::Result;

/// Returns the directory holding `kairaku.db` and `config.toml`.
///
/// `KAIRAKU_DATA_DIR` wins when set. Otherwise `~/.config/kairaku[-dev]/`,
/// with the `-dev` suffix when `KAIRAKU_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("KAIRAKU_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("KAIRAKU_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("kairaku-dev")
            } else {
                base_dir.join("kairaku")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
