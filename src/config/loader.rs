//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::SiteConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `listener.port`.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Env { name: &'static str, value: String },
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Env { name, value } => {
                write!(f, "Invalid value '{}' for environment variable {}", value, name)
            }
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// Load configuration: TOML file when given (defaults otherwise), then
/// environment overrides, then validation.
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    let config = match path {
        Some(path) => parse_config(&fs::read_to_string(path).map_err(ConfigError::Io)?)?,
        None => SiteConfig::default(),
    };
    let config = apply_env_overrides(config, |name| std::env::var(name).ok())?;

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Parse a TOML document into a configuration without validating it.
pub fn parse_config(content: &str) -> Result<SiteConfig, ConfigError> {
    toml::from_str(content).map_err(ConfigError::Parse)
}

/// Apply environment overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(mut config: SiteConfig, lookup: F) -> Result<SiteConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(PORT_ENV).filter(|v| !v.trim().is_empty()) {
        config.listener.port = value.trim().parse().map_err(|_| ConfigError::Env {
            name: PORT_ENV,
            value,
        })?;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_env_overrides_file() {
        let config = parse_config("[listener]\nport = 3000\n").unwrap();
        let config = apply_env_overrides(config, |name| {
            (name == PORT_ENV).then(|| "9123".to_string())
        })
        .unwrap();
        assert_eq!(config.listener.port, 9123);
    }

    #[test]
    fn test_missing_or_blank_port_keeps_config() {
        let config = apply_env_overrides(SiteConfig::default(), |_| None).unwrap();
        assert_eq!(config.listener.port, 8000);

        let config = apply_env_overrides(SiteConfig::default(), |_| Some(" ".to_string())).unwrap();
        assert_eq!(config.listener.port, 8000);
    }

    #[test]
    fn test_invalid_port_env() {
        let err = apply_env_overrides(SiteConfig::default(), |_| Some("eighty".to_string()))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value 'eighty' for environment variable PORT"
        );
    }

    #[test]
    fn test_unknown_sort_is_a_parse_error() {
        let err = parse_config("[[listings]]\npath = \"/x\"\nsort = \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Some(Path::new("/nonexistent/squad-page.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
