use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{cli::OutputFormat, lexicon, summaries::GroupBy};

/// Settings for a classification run
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// A custom lexicon file. The built-in lexicon is used when absent.
    pub lexicon: Option<PathBuf>,

    /// How evaluation records are grouped
    pub group_by: GroupBy,

    /// The output format
    pub format: OutputFormat,
}

impl Config {
    /// Load a config file. JSON when the extension is `.json`, YAML otherwise.
    pub async fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Unable to read config file {}: {}", path.display(), e))?;

        let config = if lexicon::is_json(path) {
            serde_json::from_str(&contents)
                .map_err(|e| anyhow!("Unable to parse config file {}: {}", path.display(), e))?
        } else {
            serde_yaml::from_str(&contents)
                .map_err(|e| anyhow!("Unable to parse config file {}: {}", path.display(), e))?
        };

        Ok(config)
    }

    /// Resolve the lexicon named by this config
    pub async fn lexicon(&self) -> anyhow::Result<lexicon::Lexicon> {
        match &self.lexicon {
            Some(path) => lexicon::Lexicon::load(path).await,
            None => Ok(lexicon::BUILTIN.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = serde_yaml::from_str("group_by: subject\n").unwrap();

        assert_eq!(
            config,
            Config {
                lexicon: None,
                group_by: GroupBy::Subject,
                format: OutputFormat::Text,
            }
        );
    }

    #[test]
    fn parses_json() {
        let config: Config =
            serde_json::from_str(r#"{"lexicon": "words.yaml", "format": "json"}"#).unwrap();

        assert_eq!(config.lexicon, Some(PathBuf::from("words.yaml")));
        assert_eq!(config.group_by, GroupBy::Instructor);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[tokio::test]
    async fn builtin_lexicon_without_a_path() {
        let lexicon = Config::default().lexicon().await.unwrap();

        assert!(lexicon.is_positive("helpful"));
    }
}
