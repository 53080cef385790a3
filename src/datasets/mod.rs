use std::{fmt::Display, path::Path};

use async_trait::async_trait;

/// Evaluation records exported from the evaluations table
pub mod evaluations;

/// Plain remark lists, one remark per line
pub mod remarks;

/// A dataset which can be loaded from a file
#[async_trait]
pub trait LoadableDataset: Sized {
    /// Load the dataset
    async fn load(path: &Path) -> anyhow::Result<Self>;
}

/// The Dataset enum
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Dataset {
    /// Evaluation records in CSV form
    Evaluations,

    /// One remark per line
    Remarks,
}

impl Dataset {
    /// Pick the dataset kind for a file based on its extension
    pub fn detect(path: &Path) -> Self {
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            Dataset::Evaluations
        } else {
            Dataset::Remarks
        }
    }
}

impl TryFrom<&str> for Dataset {
    type Error = DatasetError;

    /// Try to convert a string to a Dataset
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            v if v == evaluations::DATASET => Ok(Dataset::Evaluations),
            v if v == remarks::DATASET => Ok(Dataset::Remarks),
            _ => Err(Self::Error::Unknown(value.to_string())),
        }
    }
}

impl Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Dataset::Evaluations => evaluations::DATASET,
            Dataset::Remarks => remarks::DATASET,
        };

        write!(f, "{}", name)
    }
}

/// Dataset Error
#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    /// No dataset found for the given string
    #[error("no dataset found for {0}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_csv_files() {
        assert_eq!(
            Dataset::detect(Path::new("data/evaluations.CSV")),
            Dataset::Evaluations
        );
        assert_eq!(Dataset::detect(Path::new("remarks.txt")), Dataset::Remarks);
        assert_eq!(Dataset::detect(Path::new("remarks")), Dataset::Remarks);
    }

    #[test]
    fn parses_dataset_names() {
        assert_eq!(
            Dataset::try_from("Evaluations").ok(),
            Some(Dataset::Evaluations)
        );
        assert!(Dataset::try_from("grades").is_err());
    }
}
