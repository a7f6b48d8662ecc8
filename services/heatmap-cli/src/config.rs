//! Environment configuration for the heatmap binaries.

use std::str::FromStr;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log output format on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Settings read from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// `EnvFilter` directives.
    pub log_filter: String,
    pub log_format: LogFormat,
    /// Log the alt-text description after rendering.
    pub alt_text: bool,
    /// Values that could not be parsed, reported once logging is up.
    pub warnings: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::default(),
            alt_text: true,
            warnings: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Read configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `RUST_LOG` | `warn` |
    /// | `HEATMAP_LOG_FORMAT` | `compact` |
    /// | `HEATMAP_ALT_TEXT` | `true` |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(filter) = lookup("RUST_LOG").filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        if let Some(format) = lookup("HEATMAP_LOG_FORMAT") {
            match format.parse() {
                Ok(format) => config.log_format = format,
                Err(e) => config
                    .warnings
                    .push(format!("HEATMAP_LOG_FORMAT: {}, using compact", e)),
            }
        }

        if let Some(value) = lookup("HEATMAP_ALT_TEXT") {
            match parse_bool(&value) {
                Some(enabled) => config.alt_text = enabled,
                None => config
                    .warnings
                    .push(format!("HEATMAP_ALT_TEXT: invalid boolean '{}', using true", value)),
            }
        }

        config
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(lookup(&[]));
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_filter, "warn");
        assert!(config.alt_text);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = CliConfig::from_lookup(lookup(&[
            ("RUST_LOG", "renderer=debug"),
            ("HEATMAP_LOG_FORMAT", "JSON"),
            ("HEATMAP_ALT_TEXT", "off"),
        ]));
        assert_eq!(config.log_filter, "renderer=debug");
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(!config.alt_text);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_unknown_values_fall_back_with_warning() {
        let config = CliConfig::from_lookup(lookup(&[
            ("HEATMAP_LOG_FORMAT", "xml"),
            ("HEATMAP_ALT_TEXT", "maybe"),
        ]));
        assert_eq!(config.log_format, LogFormat::Compact);
        assert!(config.alt_text);
        assert_eq!(config.warnings.len(), 2);
    }

    #[test]
    fn test_blank_rust_log_uses_default() {
        let config = CliConfig::from_lookup(lookup(&[("RUST_LOG", "  ")]));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
