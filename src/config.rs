//! Application configuration.
//!
//! Paths resolve from environment variables with hard defaults, so
//! embedding applications and tests can redirect them.

use std::env;
use std::path::PathBuf;

use crate::error::AcaraError;

const ROOT_ENV: &str = "ACARA_ROOT";
const MANIFEST_ENV: &str = "ACARA_MANIFEST";
const DEFAULT_MANIFEST_NAME: &str = "listeners.cfg";

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Application root, stripped from closure paths in reports.
    pub root: PathBuf,
    /// Path of the event wiring manifest.
    pub manifest_path: PathBuf,
}

impl Config {
    /// Resolve configuration from the environment.
    ///
    /// `ACARA_ROOT` overrides the application root (default: current
    /// directory); `ACARA_MANIFEST` overrides the manifest path
    /// (default: `listeners.cfg` under the root).
    pub fn load() -> Result<Self, AcaraError> {
        let root = match env::var(ROOT_ENV) {
            Ok(val) => PathBuf::from(val),
            Err(_) => env::current_dir().map_err(|e| {
                AcaraError::Config(format!("cannot determine current directory: {}", e))
            })?,
        };

        let manifest_path = env::var(MANIFEST_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| root.join(DEFAULT_MANIFEST_NAME));

        Ok(Config {
            root,
            manifest_path,
        })
    }
}
