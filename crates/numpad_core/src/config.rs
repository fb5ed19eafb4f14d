//! Keyboard configuration.
//!
//! [`KeyboardConfig`] is the plain-struct replacement for a builder: fields
//! to bind plus the knobs. [`KeyboardSettings`] is its serializable half and
//! can be loaded from TOML:
//!
//! ```toml
//! max_length = 6
//! haptic_feedback = false
//! repeat_interval_ms = 50
//! backspace_label = "⌫"
//! ```

use crate::edit::MaxLength;
use crate::key::DEFAULT_BACKSPACE_LABEL;
use crate::repeat::DEFAULT_REPEAT_INTERVAL;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug)]
pub enum ConfigError {
    Parse(toml::de::Error),
    InvalidRepeatInterval,
    EmptyBackspaceLabel,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "invalid keyboard settings: {err}"),
            ConfigError::InvalidRepeatInterval => {
                write!(f, "repeat_interval_ms must be greater than zero")
            }
            ConfigError::EmptyBackspaceLabel => write!(f, "backspace_label must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Serializable keyboard settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct KeyboardSettings {
    /// Absent or `0` means unbounded.
    pub max_length: Option<usize>,
    pub haptic_feedback: bool,
    pub repeat_interval_ms: u64,
    pub backspace_label: String,
}

impl Default for KeyboardSettings {
    fn default() -> Self {
        Self {
            max_length: None,
            haptic_feedback: true,
            repeat_interval_ms: DEFAULT_REPEAT_INTERVAL.as_millis() as u64,
            backspace_label: DEFAULT_BACKSPACE_LABEL.to_owned(),
        }
    }
}

impl KeyboardSettings {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repeat_interval_ms == 0 {
            return Err(ConfigError::InvalidRepeatInterval);
        }
        if self.backspace_label.is_empty() {
            return Err(ConfigError::EmptyBackspaceLabel);
        }
        Ok(())
    }

    /// Pair these settings with the fields to bind.
    pub fn into_config<F>(self, fields: Vec<F>) -> KeyboardConfig<F> {
        KeyboardConfig {
            fields,
            max_length: self.max_length.into(),
            haptic_feedback: self.haptic_feedback,
            repeat_interval: Duration::from_millis(self.repeat_interval_ms),
            backspace_label: self.backspace_label,
        }
    }
}

/// Everything needed to build a ready-to-use [`NumKeyboard`](crate::NumKeyboard).
#[derive(Clone, Debug)]
pub struct KeyboardConfig<F> {
    pub fields: Vec<F>,
    /// Applied to every field in `fields`.
    pub max_length: MaxLength,
    pub haptic_feedback: bool,
    pub repeat_interval: Duration,
    pub backspace_label: String,
}

impl<F> Default for KeyboardConfig<F> {
    fn default() -> Self {
        KeyboardSettings::default().into_config(Vec::new())
    }
}
