//! Observability configuration read from environment variables.

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_VAR: &str = "GEARBAG_LOG_FORMAT";

/// Filter directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Log line layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Parse a format name; `None` for anything unrecognized.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub format: LogFormat,
    /// Set when the configured format was not recognized; reported once the
    /// subscriber is installed.
    pub rejected_format: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            rejected_format: None,
        }
    }
}

impl ObservabilityConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_format_var(std::env::var(LOG_FORMAT_VAR).ok().as_deref())
    }

    /// Build configuration from the raw value of [`LOG_FORMAT_VAR`].
    pub fn from_format_var(raw: Option<&str>) -> Self {
        match raw {
            None => Self::default(),
            Some(value) => match LogFormat::parse(value) {
                Some(format) => Self {
                    format,
                    rejected_format: None,
                },
                None => Self {
                    format: LogFormat::Pretty,
                    rejected_format: Some(value.to_string()),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_var_uses_pretty() {
        let config = ObservabilityConfig::from_format_var(None);
        assert_eq!(config, ObservabilityConfig::default());
    }

    #[test]
    fn json_is_case_insensitive() {
        let config = ObservabilityConfig::from_format_var(Some(" JSON "));
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.rejected_format.is_none());
    }

    #[test]
    fn unknown_format_falls_back_and_is_remembered() {
        let config = ObservabilityConfig::from_format_var(Some("xml"));
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.rejected_format.as_deref(), Some("xml"));
    }
}
