//! Per-instructor and per-subject sentiment summaries over evaluation records

use std::{collections::BTreeMap, fmt::Display};

use serde::{Deserialize, Serialize};

use crate::{
    datasets::evaluations::Record,
    lexicon::Lexicon,
    pipelines::remark_sentiment::{classify_items, Item, Tally},
};

/// Text and JSON reports
pub mod report;

/// The key used when every record lands in a single group
pub static ALL: &str = "all";

/// How evaluation records are grouped before classification
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    /// One summary per instructor
    #[default]
    Instructor,

    /// One summary per subject
    Subject,

    /// A single summary across all records
    All,
}

impl GroupBy {
    /// The group key for a record
    pub fn key<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            GroupBy::Instructor => record.instructor.trim(),
            GroupBy::Subject => record.subject.trim(),
            GroupBy::All => ALL,
        }
    }
}

impl TryFrom<&str> for GroupBy {
    type Error = GroupByError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "instructor" => Ok(GroupBy::Instructor),
            "subject" => Ok(GroupBy::Subject),
            "all" => Ok(GroupBy::All),
            _ => Err(GroupByError::Unknown(value.to_string())),
        }
    }
}

impl Display for GroupBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GroupBy::Instructor => "instructor",
            GroupBy::Subject => "subject",
            GroupBy::All => ALL,
        };

        write!(f, "{}", name)
    }
}

/// GroupBy Error
#[derive(thiserror::Error, Debug)]
pub enum GroupByError {
    /// No grouping found for the given string
    #[error("no grouping found for {0}")]
    Unknown(String),
}

/// The sentiment summary for one group of evaluations
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The instructor, subject or source the summary covers
    pub key: String,

    /// How many evaluations were in the group
    pub evaluations: usize,

    /// How many of those carried a non-blank remark
    pub remarks: usize,

    /// The tally, or `None` when no remarks were left
    pub tally: Option<Tally>,
}

impl Summary {
    /// Summarize a group of items under the given key
    pub fn from_items<I: Item>(key: impl Into<String>, items: &[I], lexicon: &Lexicon) -> Self {
        let tally = classify_items(items, lexicon);

        Self {
            key: key.into(),
            evaluations: items.len(),
            remarks: tally.map(|t| t.total()).unwrap_or(0),
            tally,
        }
    }
}

/// Group records and classify each group's remarks, ordered by key
pub fn summarize(records: &[Record], group_by: GroupBy, lexicon: &Lexicon) -> Vec<Summary> {
    let mut groups: BTreeMap<&str, Vec<&Record>> = BTreeMap::new();

    for record in records {
        groups.entry(group_by.key(record)).or_default().push(record);
    }

    log::debug!(
        "Summarizing {} evaluations into {} groups by {}",
        records.len(),
        groups.len(),
        group_by
    );

    groups
        .into_iter()
        .map(|(key, group)| Summary::from_items(key, &group, lexicon))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::lexicon::BUILTIN;

    fn record(instructor: &str, subject: &str, remarks: Option<&str>) -> Record {
        Record::new(
            instructor.to_string(),
            subject.to_string(),
            None,
            remarks.map(str::to_string),
        )
    }

    fn records() -> Vec<Record> {
        vec![
            record("Santos", "IT 101", Some("Excellent teacher")),
            record("Reyes", "IT 101", Some("Terrible explanations")),
            record("Santos", "IT 102", Some("It was fine")),
            record("Reyes", "IT 102", None),
            record("Garcia", "IT 103", Some("  ")),
        ]
    }

    #[test]
    fn groups_by_instructor_in_key_order() {
        let summaries = summarize(&records(), GroupBy::Instructor, &BUILTIN);

        assert_eq!(
            summaries,
            vec![
                Summary {
                    key: "Garcia".to_string(),
                    evaluations: 1,
                    remarks: 0,
                    tally: None,
                },
                Summary {
                    key: "Reyes".to_string(),
                    evaluations: 2,
                    remarks: 1,
                    tally: Some(Tally::new(0, 1, 0)),
                },
                Summary {
                    key: "Santos".to_string(),
                    evaluations: 2,
                    remarks: 2,
                    tally: Some(Tally::new(1, 0, 1)),
                },
            ]
        );
    }

    #[test]
    fn groups_by_subject() {
        let summaries = summarize(&records(), GroupBy::Subject, &BUILTIN);

        let keys: Vec<&str> = summaries.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["IT 101", "IT 102", "IT 103"]);
        assert_eq!(summaries[0].tally, Some(Tally::new(1, 1, 0)));
    }

    #[test]
    fn single_group_covers_everything() {
        let summaries = summarize(&records(), GroupBy::All, &BUILTIN);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].evaluations, 5);
        assert_eq!(summaries[0].tally, Some(Tally::new(1, 1, 1)));
    }

    #[test]
    fn no_records_means_no_summaries() {
        assert!(summarize(&[], GroupBy::Instructor, &BUILTIN).is_empty());
    }

    #[test]
    fn parses_grouping_names() {
        assert_eq!(GroupBy::try_from("Subject").ok(), Some(GroupBy::Subject));
        assert!(GroupBy::try_from("section").is_err());
    }
}
