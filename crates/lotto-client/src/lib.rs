//! Collaborators around the lotto engine.
//!
//! Loads configuration, fetches the latest draw over HTTP and persists the
//! weight table in a key-value store.

use std::{path::PathBuf, str::FromStr, sync::LazyLock};

pub mod api;
pub mod config;
pub mod store;

pub use api::draw::{fetch_latest_draw, try_fetch_latest_draw};
pub use config::ClientConfig;
pub use store::weights::{WEIGHTS_KEY, WeightStore};
pub use store::{JsonFileStore, KvStore, MemoryStore};

/// Location of the loaded `.env` file, if any
pub static ENV_GUARD: LazyLock<anyhow::Result<PathBuf>> =
    LazyLock::new(|| dotenvy::dotenv().map_err(|e| anyhow::anyhow!(e)));

/// Read and parse an environment variable, `None` if unset or unparsable
pub fn parse_from_env<T: FromStr>(key: &str) -> Option<T> {
    let value = std::env::var(key).ok()?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log::warn!("Ignoring unparsable value for {key}: {value:?}");
            None
        }
    }
}

/// Load `.env` and initialise logging. `RUST_LOG` wins over `level`.
pub fn setup(level: Option<log::LevelFilter>) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level.unwrap_or(log::LevelFilter::Info));
    builder.parse_default_env();
    if builder.try_init().is_err() {
        log::debug!("Logger already initialised");
    }

    match ENV_GUARD.as_ref() {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) => log::debug!("No .env file loaded: {e}"),
    }
}
