//! Tunable settings, optionally loaded from a TOML file.

use crate::config::ConfigError;
use crate::labels::LabelSpec;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Settings that shape labels, pacing and paging.
///
/// Every field has a default, so an empty file (or no file at all) is valid:
///
/// ```toml
/// request-timeout-secs = 30
/// rate-limit-wait-secs = 5
/// creation-delay-ms = 300
/// page-size = 50
///
/// [[base-labels]]
/// name = "Tipo:feature"
/// color = "3BA55D"
/// description = "Tarefas de implementação"
///
/// [label-colors]
/// week = "7289DA"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SeedSettings {
    /// Labels ensured once before any row is processed.
    pub base_labels: Vec<LabelSpec>,

    /// Colors of the per-row category labels.
    pub label_colors: LabelColors,

    /// Connect and read timeout for each API request.
    pub request_timeout_secs: u64,

    /// Pause before the single retry of a rate-limited request.
    pub rate_limit_wait_secs: u64,

    /// Pause after each created issue.
    pub creation_delay_ms: u64,

    /// Page size used when listing issues by seed label.
    pub page_size: u8,
}

/// Colors for each kind of dynamic label, as 6-digit hex without `#`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct LabelColors {
    pub week: String,
    pub squad: String,
    pub role: String,
    pub ai_assist: String,
    pub student: String,
    pub seed: String,
}

impl Default for LabelColors {
    fn default() -> Self {
        Self {
            week: "7289DA".to_string(),
            squad: "99AAB5".to_string(),
            role: "FEE75C".to_string(),
            ai_assist: "FAA61A".to_string(),
            student: "57F287".to_string(),
            seed: "99AAB5".to_string(),
        }
    }
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            base_labels: default_base_labels(),
            label_colors: LabelColors::default(),
            request_timeout_secs: 30,
            rate_limit_wait_secs: 5,
            creation_delay_ms: 300,
            page_size: 50,
        }
    }
}

pub(crate) fn default_base_labels() -> Vec<LabelSpec> {
    vec![
        LabelSpec::new("Tipo:feature", "3BA55D").with_description("Tarefas de implementação"),
        LabelSpec::new("Tipo:bug", "ED4245").with_description("Correções"),
    ]
}

impl SeedSettings {
    /// Loads settings from `path`, or returns the defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid TOML,
    /// or fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        debug!(path = %path.display(), "Loading settings");
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        settings.validate(path)?;
        Ok(settings)
    }

    /// Validates colors, label names and paging bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] describing the first problem found.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError {
            path: path.display().to_string(),
            message,
        };

        if self.page_size == 0 || self.page_size > 100 {
            return Err(invalid(format!(
                "page-size must be between 1 and 100, got {}",
                self.page_size
            )));
        }

        for label in &self.base_labels {
            if label.name.trim().is_empty() {
                return Err(invalid("base label name must not be empty".to_string()));
            }
            if !is_hex_color(&label.color) {
                return Err(invalid(format!(
                    "base label '{}' has invalid color '{}'",
                    label.name, label.color
                )));
            }
        }

        let colors = &self.label_colors;
        for (kind, color) in [
            ("week", &colors.week),
            ("squad", &colors.squad),
            ("role", &colors.role),
            ("ai-assist", &colors.ai_assist),
            ("student", &colors.student),
            ("seed", &colors.seed),
        ] {
            if !is_hex_color(color) {
                return Err(invalid(format!(
                    "label-colors.{kind} has invalid color '{color}'"
                )));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn rate_limit_wait(&self) -> Duration {
        Duration::from_secs(self.rate_limit_wait_secs)
    }

    #[must_use]
    pub fn creation_delay(&self) -> Duration {
        Duration::from_millis(self.creation_delay_ms)
    }
}

fn is_hex_color(color: &str) -> bool {
    color.len() == 6 && color.chars().all(|c| c.is_ascii_hexdigit())
}
