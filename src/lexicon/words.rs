//! The built-in ProEv keyword lists, tuned for student feedback on instructors

/// Words that signal a favourable remark
pub static POSITIVE: &[&str] = &[
    "amazing",
    "approachable",
    "awesome",
    "best",
    "brilliant",
    "caring",
    "clear",
    "competent",
    "considerate",
    "dedicated",
    "effective",
    "encouraging",
    "engaging",
    "enjoy",
    "enjoyable",
    "enjoyed",
    "enthusiastic",
    "excellent",
    "exceptional",
    "fair",
    "friendly",
    "fun",
    "good",
    "great",
    "helpful",
    "informative",
    "inspiring",
    "interesting",
    "kind",
    "knowledgeable",
    "love",
    "loved",
    "motivating",
    "nice",
    "organized",
    "outstanding",
    "passionate",
    "patient",
    "prepared",
    "punctual",
    "recommend",
    "respectful",
    "responsive",
    "supportive",
    "thorough",
    "understandable",
    "understanding",
    "well",
    "wonderful",
];

/// Words that signal an unfavourable remark
pub static NEGATIVE: &[&str] = &[
    "absent",
    "annoying",
    "arrogant",
    "awful",
    "bad",
    "boring",
    "careless",
    "confused",
    "confusing",
    "difficult",
    "disorganized",
    "disrespectful",
    "dull",
    "frustrating",
    "hate",
    "hated",
    "horrible",
    "impatient",
    "inconsistent",
    "late",
    "lazy",
    "monotonous",
    "poor",
    "rude",
    "slow",
    "strict",
    "terrible",
    "unapproachable",
    "unclear",
    "unfair",
    "unhelpful",
    "unprepared",
    "useless",
    "waste",
    "worst",
];

/// Words that flip the polarity of a keyword within the negation window
pub static NEGATION: &[&str] = &[
    "not",
    "no",
    "never",
    "neither",
    "nor",
    "none",
    "nobody",
    "nothing",
    "hardly",
    "barely",
    "scarcely",
    "rarely",
    "without",
    "cannot",
    "can't",
    "cant",
    "don't",
    "dont",
    "doesn't",
    "doesnt",
    "didn't",
    "didnt",
    "isn't",
    "isnt",
    "wasn't",
    "wasnt",
    "aren't",
    "weren't",
    "won't",
    "wouldn't",
    "shouldn't",
    "couldn't",
];
