use std::ops::{Add, AddAssign};

use derive_new::new;
use serde::{Deserialize, Serialize};

use super::Polarity;

/// Positive, negative and neutral counts for a batch of remarks
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize, new)]
pub struct Tally {
    /// Remarks classified as positive
    pub positive: usize,

    /// Remarks classified as negative
    pub negative: usize,

    /// Remarks classified as neutral
    pub neutral: usize,
}

impl Tally {
    /// Count one remark with the given polarity
    pub fn record(&mut self, polarity: Polarity) {
        match polarity {
            Polarity::Positive => self.positive += 1,
            Polarity::Negative => self.negative += 1,
            Polarity::Neutral => self.neutral += 1,
        }
    }

    /// The number of remarks counted
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// The count for a single polarity
    pub fn count(&self, polarity: Polarity) -> usize {
        match polarity {
            Polarity::Positive => self.positive,
            Polarity::Negative => self.negative,
            Polarity::Neutral => self.neutral,
        }
    }
}

impl Add for Tally {
    type Output = Tally;

    fn add(mut self, rhs: Tally) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Tally) {
        self.positive += rhs.positive;
        self.negative += rhs.negative;
        self.neutral += rhs.neutral;
    }
}

impl FromIterator<Polarity> for Tally {
    fn from_iter<I: IntoIterator<Item = Polarity>>(iter: I) -> Self {
        let mut tally = Tally::default();

        for polarity in iter {
            tally.record(polarity);
        }

        tally
    }
}
