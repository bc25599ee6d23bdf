use std::str::FromStr;

const ENV_OUTPUT_FORMAT: &str = "NETCONFIG_FORMAT";

/// Output selection for the demo shell binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain-text export (banner, facts, steps).
    #[default]
    Text,
    /// The full `ParsedResponse` as JSON.
    Json,
    /// The topology diagram as an SVG document.
    Svg,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown output format '{0}' (expected text, json or svg)")]
    UnknownFormat(String),
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "svg" => Ok(OutputFormat::Svg),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

/// Shell configuration. The analysis pipeline itself takes no ambient state;
/// this only steers the demo binary around it.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults on
    /// invalid values.
    pub fn from_env() -> Self {
        let format = match std::env::var(ENV_OUTPUT_FORMAT) {
            Ok(raw) => match raw.parse() {
                Ok(format) => format,
                Err(e) => {
                    tracing::warn!(error = %e, "Invalid {ENV_OUTPUT_FORMAT}, using default");
                    OutputFormat::default()
                }
            },
            Err(_) => OutputFormat::default(),
        };

        Self { format }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_formats() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("svg".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
    }

    #[test]
    fn test_parse_unknown_format() {
        let err = "html".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("html"));
    }
}
