//! Board session configuration.
//!
//! # Responsibility
//! - Hold default labels for appended nodes, the id strategy, and whether a
//!   session starts from the sample board.
//! - Resolve overrides from `DRAGBOARD_*` environment variables.
//!
//! # Invariants
//! - Blank environment values fall back to defaults.
//! - A validated config never carries blank labels.

use crate::engine::id::{IdProvider, SequentialIds, UuidIds};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_PARENT_LABEL: &str = "New Parent Item";
pub const DEFAULT_SUB_ITEM_LABEL: &str = "New SubItem";

pub const ENV_PARENT_LABEL: &str = "DRAGBOARD_PARENT_LABEL";
pub const ENV_SUB_ITEM_LABEL: &str = "DRAGBOARD_SUB_ITEM_LABEL";
pub const ENV_ID_STRATEGY: &str = "DRAGBOARD_ID_STRATEGY";
pub const ENV_SEED_SAMPLE: &str = "DRAGBOARD_SEED_SAMPLE";

/// How fresh node ids are generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Monotonic counter ids.
    #[default]
    Sequential,
    /// Random v4 UUID ids.
    Uuid,
}

impl IdStrategy {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sequential" | "counter" => Ok(Self::Sequential),
            "uuid" => Ok(Self::Uuid),
            other => Err(ConfigError::UnknownIdStrategy(other.to_string())),
        }
    }

    /// Builds a provider for this strategy.
    pub fn provider(self) -> Box<dyn IdProvider + Send> {
        match self {
            Self::Sequential => Box::new(SequentialIds::new()),
            Self::Uuid => Box::new(UuidIds),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Label is blank after trim.
    BlankLabel(&'static str),
    /// Id strategy name is not `sequential|uuid`.
    UnknownIdStrategy(String),
    /// Boolean setting is not `true|false|1|0|yes|no`.
    InvalidFlag { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankLabel(field) => write!(f, "{field} must not be blank"),
            Self::UnknownIdStrategy(value) => write!(
                f,
                "unsupported id strategy `{value}`; expected sequential|uuid"
            ),
            Self::InvalidFlag { key, value } => {
                write!(f, "{key} must be true or false, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Settings for one board session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Label given to items created by `add_parent`.
    pub parent_label: String,
    /// Label given to sub-items created by `add_sub_item`.
    pub sub_item_label: String,
    pub id_strategy: IdStrategy,
    /// Start UI sessions from `sample_board()` instead of an empty board.
    pub seed_sample: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            parent_label: DEFAULT_PARENT_LABEL.to_string(),
            sub_item_label: DEFAULT_SUB_ITEM_LABEL.to_string(),
            id_strategy: IdStrategy::default(),
            seed_sample: true,
        }
    }
}

impl BoardConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves overrides through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = non_blank(lookup(ENV_PARENT_LABEL)) {
            config.parent_label = value;
        }
        if let Some(value) = non_blank(lookup(ENV_SUB_ITEM_LABEL)) {
            config.sub_item_label = value;
        }
        if let Some(value) = non_blank(lookup(ENV_ID_STRATEGY)) {
            config.id_strategy = IdStrategy::parse(&value)?;
        }
        if let Some(value) = non_blank(lookup(ENV_SEED_SAMPLE)) {
            config.seed_sample = parse_flag(ENV_SEED_SAMPLE, value)?;
        }
        Ok(config)
    }

    /// Trims labels and rejects blank ones.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        self.parent_label = normalize_label(self.parent_label, "parent_label")?;
        self.sub_item_label = normalize_label(self.sub_item_label, "sub_item_label")?;
        Ok(self)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { key, value }),
    }
}

fn normalize_label(value: String, field: &'static str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::BlankLabel(field));
    }
    Ok(trimmed.to_string())
}
