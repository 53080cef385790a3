use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Plain text summary widgets
pub static TEXT: &str = "text";

/// Machine readable JSON
pub static JSON: &str = "json";

/// Available output formats
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Text
    #[default]
    Text,

    /// JSON
    Json,
}

impl TryFrom<&str> for OutputFormat {
    type Error = FormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            v if v == TEXT => Ok(OutputFormat::Text),
            v if v == JSON => Ok(OutputFormat::Json),
            _ => Err(FormatError::Unknown(value.to_string())),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Text => TEXT,
            OutputFormat::Json => JSON,
        };

        write!(f, "{}", name)
    }
}

/// Format Error
#[derive(thiserror::Error, Debug)]
pub enum FormatError {
    /// No format found for the given string
    #[error("no output format found for {0}")]
    Unknown(String),
}
