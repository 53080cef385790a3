use std::{collections::HashSet, path::Path};

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Built-in keyword lists
pub mod words;

lazy_static! {
    /// The built-in lexicon, shared read-only by every caller that does not load its own
    pub static ref BUILTIN: Lexicon = Lexicon::builtin();
}

/// The positive word set
pub static POSITIVE: &str = "positive";

/// The negative word set
pub static NEGATIVE: &str = "negative";

/// The negation word set
pub static NEGATION: &str = "negation";

/// The on-disk shape of a lexicon file
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Words {
    /// Positive keywords
    #[serde(default)]
    pub positive: Vec<String>,

    /// Negative keywords
    #[serde(default)]
    pub negative: Vec<String>,

    /// Negation words
    #[serde(default)]
    pub negation: Vec<String>,
}

/// Three disjoint sets of lowercase tokens used to score remarks
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
    negation: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon, normalizing every word and rejecting words found in more than one set
    pub fn new<P, N, G, S>(positive: P, negative: N, negation: G) -> Result<Self, LexiconError>
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let positive = normalize(positive);
        let negative = normalize(negative);
        let negation = normalize(negation);

        let sets = [
            (POSITIVE, &positive),
            (NEGATIVE, &negative),
            (NEGATION, &negation),
        ];

        for (i, (first, words)) in sets.iter().enumerate() {
            for (second, other) in &sets[i + 1..] {
                // Sorted so the reported word is stable across runs
                let mut shared: Vec<&String> = words.intersection(other).collect();
                shared.sort();

                if let Some(word) = shared.first() {
                    return Err(LexiconError::Overlap {
                        word: word.to_string(),
                        first: *first,
                        second: *second,
                    });
                }
            }
        }

        Ok(Self {
            positive,
            negative,
            negation,
        })
    }

    /// The lexicon compiled into the crate
    pub fn builtin() -> Self {
        Self {
            positive: normalize(words::POSITIVE),
            negative: normalize(words::NEGATIVE),
            negation: normalize(words::NEGATION),
        }
    }

    /// Build a lexicon from deserialized word lists
    pub fn from_words(words: Words) -> Result<Self, LexiconError> {
        Self::new(words.positive, words.negative, words.negation)
    }

    /// Load a lexicon file. JSON when the extension is `.json`, YAML otherwise.
    pub async fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Unable to read lexicon file {}: {}", path.display(), e))?;

        let words: Words = if is_json(path) {
            serde_json::from_str(&contents)
                .map_err(|e| anyhow!("Unable to parse lexicon file {}: {}", path.display(), e))?
        } else {
            serde_yaml::from_str(&contents)
                .map_err(|e| anyhow!("Unable to parse lexicon file {}: {}", path.display(), e))?
        };

        let lexicon = Self::from_words(words)?;

        log::debug!(
            "Loaded lexicon from {} ({} words)",
            path.display(),
            lexicon.len()
        );

        Ok(lexicon)
    }

    /// Check whether the token is a positive keyword
    pub fn is_positive(&self, token: &str) -> bool {
        self.positive.contains(token)
    }

    /// Check whether the token is a negative keyword
    pub fn is_negative(&self, token: &str) -> bool {
        self.negative.contains(token)
    }

    /// Check whether the token is a negation word
    pub fn is_negation(&self, token: &str) -> bool {
        self.negation.contains(token)
    }

    /// The total number of words across all three sets
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len() + self.negation.len()
    }

    /// Whether the lexicon holds no words at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

/// Check the file extension for JSON, case-insensitively
pub(crate) fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

fn normalize<I, S>(words: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| word.as_ref().trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Lexicon Error
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LexiconError {
    /// A word was listed in two sets
    #[error("\"{word}\" appears in both the {first} and {second} word lists")]
    Overlap {
        /// The offending word
        word: String,
        /// The first set containing the word
        first: &'static str,
        /// The second set containing the word
        second: &'static str,
    },
}
