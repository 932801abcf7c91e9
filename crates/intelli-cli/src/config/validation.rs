use crate::cli::parse_identifier;
use crate::config::IntelliConfig;
use crate::error::{ConfigError, Result};

impl IntelliConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() || self.separator.contains(['\n', '\r']) {
            return Err(ConfigError::InvalidValue {
                field: "separator".to_string(),
                value: format!("{:?}", self.separator),
                hint: "Separator must be a non-empty token on a single line".to_string(),
            }
            .into());
        }

        if parse_identifier(&self.prefix).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "prefix".to_string(),
                value: self.prefix.clone(),
                hint: "Prefix must be a valid start of a JavaScript identifier, e.g. '_'"
                    .to_string(),
            }
            .into());
        }

        for name in &self.globals {
            if let Err(reason) = parse_identifier(name) {
                return Err(ConfigError::InvalidValue {
                    field: "globals".to_string(),
                    value: name.clone(),
                    hint: reason,
                }
                .into());
            }
        }

        if self.output == self.template {
            return Err(ConfigError::ConflictingOptions(
                "output and template point at the same file".to_string(),
            )
            .into());
        }

        if self.output == self.intermediate || self.input == self.intermediate {
            return Err(ConfigError::ConflictingOptions(
                "intermediate must differ from input and output".to_string(),
            )
            .into());
        }

        Ok(())
    }
}
