use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/talks.json";
const DEFAULT_STATIC_DIR: &str = "static";

/// Runtime configuration, resolved once at startup from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: port_or_default(env::var("TALKS_API_PORT").ok()),
            data_path: PathBuf::from(
                env::var("TALKS_API_DATA").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string()),
            ),
            static_dir: PathBuf::from(
                env::var("TALKS_API_STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string()),
            ),
        }
    }
}

fn port_or_default(raw: Option<String>) -> u16 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT)
}
