/// Lowercase a remark and split it on whitespace. Punctuation stays attached to its word.
pub fn tokenize(remark: &str) -> Vec<String> {
    remark
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
