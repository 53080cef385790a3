/// Whitespace tokenizer
pub mod tokenizer;

/// Per-remark and batch classification
pub mod classifier;

/// Aggregate counts
pub mod tally;

/// Remark Items
pub mod item;

pub use classifier::{classify, classify_items, classify_remark, is_negated, Polarity};
pub use item::Item;
pub use tally::Tally;
pub use tokenizer::tokenize;

/// The unique string token that identifies this pipeline
pub static PIPELINE: &str = "remark-sentiment";

/// How many preceding tokens are checked for a negation word
pub const NEGATION_WINDOW: usize = 3;
