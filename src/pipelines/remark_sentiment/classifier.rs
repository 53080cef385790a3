use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

use super::{tokenize, Item, Tally, NEGATION_WINDOW};

/// The sentiment assigned to a single remark
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Only favourable keywords were found
    Positive,
    /// Only unfavourable keywords were found
    Negative,
    /// No keywords, or both kinds
    Neutral,
}

impl Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
            Polarity::Neutral => "neutral",
        };

        write!(f, "{}", name)
    }
}

/// Check the `NEGATION_WINDOW` tokens before `index` for a negation word
pub fn is_negated<S: AsRef<str>>(tokens: &[S], index: usize, lexicon: &Lexicon) -> bool {
    let start = index.saturating_sub(NEGATION_WINDOW);

    tokens
        .get(start..index)
        .unwrap_or_default()
        .iter()
        .any(|token| lexicon.is_negation(token.as_ref()))
}

/// Classify a single remark against the lexicon
pub fn classify_remark(remark: &str, lexicon: &Lexicon) -> Polarity {
    let tokens = tokenize(remark);

    let mut has_positive = false;
    let mut has_negative = false;

    for (i, token) in tokens.iter().enumerate() {
        let positive = if lexicon.is_positive(token) {
            true
        } else if lexicon.is_negative(token) {
            false
        } else {
            continue;
        };

        // A negated keyword counts toward the opposite polarity
        if positive != is_negated(&tokens, i, lexicon) {
            has_positive = true;
        } else {
            has_negative = true;
        }
    }

    match (has_positive, has_negative) {
        (true, false) => Polarity::Positive,
        (false, true) => Polarity::Negative,
        _ => Polarity::Neutral,
    }
}

/// Classify a batch of remarks. Returns `None` when there are no remarks to count.
///
/// Blank remarks are not filtered here; they have no tokens and count as neutral.
pub fn classify<S: AsRef<str>>(remarks: &[S], lexicon: &Lexicon) -> Option<Tally> {
    if remarks.is_empty() {
        return None;
    }

    let tally: Tally = remarks
        .iter()
        .map(|remark| classify_remark(remark.as_ref(), lexicon))
        .collect();

    log::trace!(
        "Classified {} remarks: {} positive, {} negative, {} neutral",
        tally.total(),
        tally.positive,
        tally.negative,
        tally.neutral
    );

    Some(tally)
}

/// Classify the remarks carried by a set of items, skipping missing and blank remarks
pub fn classify_items<I: Item>(items: &[I], lexicon: &Lexicon) -> Option<Tally> {
    let remarks = items
        .iter()
        .filter_map(|item| item.remark())
        .filter(|remark| !remark.trim().is_empty())
        .collect::<Vec<_>>();

    classify(&remarks, lexicon)
}
