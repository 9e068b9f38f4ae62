//! Dispatcher configuration.
//!
//! Configuration is a JSON object, e.g. `{"protect": false}`. Missing fields
//! take their defaults and unknown fields are rejected. The environment
//! variable [`PROTECT_ENV`] overrides whatever the file says.

use std::path::Path as FsPath;

use serde::{Deserialize, Serialize};

use crate::{Error, Resolver, Result};

/// Environment variable overriding [`DispatchConfig::protect`].
pub const PROTECT_ENV: &str = "OBJDISPATCH_PROTECT";

/// Settings for building a [`Resolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchConfig {
    /// Reject private (`_`-prefixed) names and built-in routines.
    pub protect: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self { protect: true }
    }
}

impl DispatchConfig {
    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<FsPath>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    /// Apply overrides from the process environment.
    pub fn with_env(self) -> Result<Self> {
        self.with_env_value(std::env::var(PROTECT_ENV).ok().as_deref())
    }

    /// Apply an override value as if read from [`PROTECT_ENV`].
    pub fn with_env_value(mut self, value: Option<&str>) -> Result<Self> {
        if let Some(value) = value {
            self.protect = parse_flag(value)?;
        }
        Ok(self)
    }

    /// Build the configured resolver.
    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.protect)
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::Config {
            message: format!("{} must be a boolean, got {:?}", PROTECT_ENV, value),
        }),
    }
}
