//! Configuration loading and representation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use spicerack_shelving::ShelfCount;

pub const ENV_ADDR: &str = "SPICERACK_ADDR";
pub const ENV_DATA_PATH: &str = "SPICERACK_DATA_PATH";
pub const ENV_SHELVES: &str = "SPICERACK_SHELVES";
pub const ENV_IGNORE_DUPLICATES: &str = "SPICERACK_IGNORE_DUPLICATES";
pub const ENV_AUTOSAVE_MS: &str = "SPICERACK_AUTOSAVE_MS";
pub const ENV_SEARCH_LIMIT: &str = "SPICERACK_SEARCH_LIMIT";

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_SHELVES: i64 = 4;
const DEFAULT_AUTOSAVE_MS: u64 = 750;
const DEFAULT_SEARCH_LIMIT: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Process-level settings for the organizer service.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub data_path: PathBuf,
    pub shelf_count: ShelfCount,
    pub ignore_duplicates: bool,
    pub autosave_debounce: Duration,
    pub search_limit: usize,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup. Unset keys fall
    /// back to defaults; set but malformed keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let addr = match get(ENV_ADDR) {
            Some(raw) => parse(ENV_ADDR, raw)?,
            None => parse(ENV_ADDR, DEFAULT_ADDR.to_string())?,
        };

        let data_path = get(ENV_DATA_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_path);

        let shelf_count = match get(ENV_SHELVES) {
            Some(raw) => ShelfCount::clamped(parse::<i64>(ENV_SHELVES, raw)?),
            None => ShelfCount::clamped(DEFAULT_SHELVES),
        };

        let ignore_duplicates = match get(ENV_IGNORE_DUPLICATES) {
            Some(raw) => parse_bool(ENV_IGNORE_DUPLICATES, raw)?,
            None => false,
        };

        let autosave_ms = match get(ENV_AUTOSAVE_MS) {
            Some(raw) => parse(ENV_AUTOSAVE_MS, raw)?,
            None => DEFAULT_AUTOSAVE_MS,
        };

        let search_limit = match get(ENV_SEARCH_LIMIT) {
            Some(raw) => parse(ENV_SEARCH_LIMIT, raw)?,
            None => DEFAULT_SEARCH_LIMIT,
        };

        Ok(Self {
            addr,
            data_path,
            shelf_count,
            ignore_duplicates,
            autosave_debounce: Duration::from_millis(autosave_ms),
            search_limit,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            data_path: default_data_path(),
            shelf_count: ShelfCount::clamped(DEFAULT_SHELVES),
            ignore_duplicates: false,
            autosave_debounce: Duration::from_millis(DEFAULT_AUTOSAVE_MS),
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

fn parse<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value }),
    }
}

/// `{app_data_dir}/spicerack/snapshot.json`, or a file in the working
/// directory when the platform has no data dir.
fn default_data_path() -> PathBuf {
    match dirs::data_dir().or_else(|| {
        dirs::home_dir().map(|mut h| {
            h.push(".local");
            h.push("share");
            h
        })
    }) {
        Some(mut dir) => {
            dir.push("spicerack");
            dir.push("snapshot.json");
            dir
        }
        None => PathBuf::from("spicerack-snapshot.json"),
    }
}
