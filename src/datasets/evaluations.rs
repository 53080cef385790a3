use std::path::Path;

use async_trait::async_trait;
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::pipelines::remark_sentiment;

use super::LoadableDataset;

/// The name of the evaluations dataset
pub static DATASET: &str = "evaluations";

/// A single evaluation row
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, new)]
pub struct Record {
    /// The instructor being evaluated
    pub instructor: String,

    /// The subject the evaluation was filed under
    pub subject: String,

    /// The class section, when recorded
    #[serde(default)]
    pub section: Option<String>,

    /// The student's free-text remark. Nullable in the evaluations table.
    #[serde(default)]
    pub remarks: Option<String>,
}

impl remark_sentiment::Item for Record {
    fn remark(&self) -> Option<&str> {
        self.remarks.as_deref()
    }
}

/// Evaluation records loaded from a CSV export
#[derive(Clone, Debug, Default)]
pub struct Evaluations {
    records: Vec<Record>,
}

impl Evaluations {
    /// Parse records from CSV with a header row
    pub fn from_reader<R: std::io::Read>(reader: R) -> csv::Result<Self> {
        let records = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader)
            .deserialize()
            .collect::<csv::Result<Vec<Record>>>()?;

        Ok(Self { records })
    }

    /// The loaded records
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<Record>> for Evaluations {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl LoadableDataset for Evaluations {
    async fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = tokio::fs::read(path)
            .await
            .map_err(|e| anyhow!("Unable to read evaluations file {}: {}", path.display(), e))?;

        let evaluations = Self::from_reader(contents.as_slice())
            .map_err(|e| anyhow!("Unable to parse evaluations file {}: {}", path.display(), e))?;

        log::info!(
            "Loaded {} evaluations from {}",
            evaluations.len(),
            path.display()
        );

        Ok(evaluations)
    }
}
