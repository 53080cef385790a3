use std::fmt::Display;

/// Remark Sentiment
pub mod remark_sentiment;

/// Available Pipelines
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Pipeline {
    /// Remark Sentiment
    #[default]
    RemarkSentiment,
}

impl Pipeline {
    /// Get the unique string token that identifies this pipeline
    pub fn as_str(&self) -> &str {
        match self {
            Pipeline::RemarkSentiment => remark_sentiment::PIPELINE,
        }
    }
}

impl TryFrom<&str> for Pipeline {
    type Error = PipelineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.to_lowercase() == remark_sentiment::PIPELINE {
            Ok(Pipeline::RemarkSentiment)
        } else {
            Err(PipelineError::Unknown(value.to_string()))
        }
    }
}

impl Display for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pipeline Error
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// No pipeline found for the given string
    #[error("no pipeline found for {0}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pipeline_names() {
        assert_eq!(
            Pipeline::try_from("Remark-Sentiment").ok(),
            Some(Pipeline::RemarkSentiment)
        );
        assert!(Pipeline::try_from("text-classification").is_err());
        assert_eq!(Pipeline::default().to_string(), "remark-sentiment");
    }
}
