// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::builder::filetype::default_filetypes;
use crate::builder::Builder;
use crate::error::ConfigError;

/// Connection details for one Thumbor server
///
/// ```yaml
/// server: "http://thumbor.example.com"
/// secret: "${THUMBOR_SECRET}"
/// filetypes: [webp, jpeg, jpg, gif, png]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumborConfig {
    /// Base URL of the Thumbor server, without trailing slash
    pub server: String,

    /// Shared signing key; empty means unsigned (`unsafe`) URLs
    #[serde(default)]
    pub secret: String,

    /// Extensions routed through the proxy (default: webp, jpeg, jpg, gif, png)
    #[serde(default = "default_filetypes")]
    pub filetypes: Vec<String>,
}

impl ThumborConfig {
    pub fn new(server: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            secret: secret.into(),
            filetypes: default_filetypes(),
        }
    }

    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, ConfigError> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        // First, check that all referenced environment variables exist
        for caps in re.captures_iter(yaml) {
            let var_name = &caps[1];
            if std::env::var(var_name).is_err() {
                return Err(ConfigError::MissingEnvVar(var_name.to_string()));
            }
        }

        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        let config: ThumborConfig = serde_yaml::from_str(&substituted)?;
        config.validate()?;

        tracing::debug!(
            server = %config.server,
            signed = !config.secret.is_empty(),
            filetypes = config.filetypes.len(),
            "Thumbor configuration loaded"
        );

        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "Server URL cannot be empty".to_string(),
            ));
        }

        if self.server.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid(format!(
                "Server URL '{}' contains whitespace",
                self.server
            )));
        }

        for filetype in &self.filetypes {
            if filetype.is_empty() {
                return Err(ConfigError::Invalid(
                    "Filetype entries cannot be empty".to_string(),
                ));
            }
            if filetype.starts_with('.') {
                return Err(ConfigError::Invalid(format!(
                    "Filetype '{}' must not start with '.'",
                    filetype
                )));
            }
        }

        Ok(())
    }

    /// Start a builder for `original` using this server, secret and whitelist
    pub fn url(&self, original: impl Into<String>) -> Builder {
        Builder::construct(self.server.clone(), self.secret.clone(), original)
            .with_filetypes(self.filetypes.iter().cloned())
    }
}
