//! # ProEv Remarks
#![forbid(unsafe_code)]

/// Sentiment lexicon
pub mod lexicon;

/// Pipelines
pub mod pipelines;

/// Datasets
pub mod datasets;

/// Aggregated views over evaluation records
pub mod summaries;

/// Configuration
pub mod config;

/// Utilities
pub mod utils;

/// CLI indexes and utilities
pub mod cli;

/// Error macros
#[macro_use]
extern crate anyhow;
