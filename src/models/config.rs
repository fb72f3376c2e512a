//! Serializable configuration surface of an intake surface.

use serde::{Deserialize, Serialize};

use super::ClassnameSet;
use crate::core::error::ConfigError;

/// Static configuration of one intake surface.
///
/// Keys follow the camelCase naming used by host pages, so the same value
/// can be supplied as JSON (`data-config` attribute) or TOML.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntakeConfig {
    /// Comma-separated extension allow-list; absent accepts everything.
    pub accept: Option<String>,
    /// Forwarded to the picker; drops are never limited.
    pub multiple: bool,
    /// Gates all file-accepting behavior.
    pub disabled: bool,
    pub classnames: ClassnameSet,
}

impl IntakeConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }
}
