use std::path::Path;

use pretty_assertions::assert_eq;
use proev_remarks::{
    config::Config,
    datasets::{evaluations::Evaluations, LoadableDataset},
    lexicon::{Lexicon, BUILTIN},
    pipelines::remark_sentiment::{classify, Tally},
    summaries::{report, summarize, GroupBy},
};

fn data(file: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(file)
}

#[tokio::test]
async fn summarizes_sample_evaluations_by_instructor() {
    let evaluations = Evaluations::load(&data("evaluations.csv")).await.unwrap();
    let summaries = summarize(evaluations.records(), GroupBy::Instructor, &BUILTIN);

    let tallies: Vec<(&str, Option<Tally>)> = summaries
        .iter()
        .map(|s| (s.key.as_str(), s.tally))
        .collect();

    assert_eq!(
        tallies,
        vec![
            ("Garcia", None),
            ("Reyes", Some(Tally::new(0, 2, 0))),
            ("Santos", Some(Tally::new(2, 0, 1))),
        ]
    );
}

#[tokio::test]
async fn custom_lexicon_changes_the_verdict() {
    let lexicon = Lexicon::load(data("lexicon.yaml")).await.unwrap();

    // "kind" is only in the built-in lexicon
    let remarks = ["Very kind"];

    assert_eq!(classify(&remarks, &BUILTIN), Some(Tally::new(1, 0, 0)));
    assert_eq!(classify(&remarks, &lexicon), Some(Tally::new(0, 0, 1)));
}

#[tokio::test]
async fn config_resolves_lexicon_path() {
    let config = Config {
        lexicon: Some(data("lexicon.yaml")),
        ..Config::default()
    };

    let lexicon = config.lexicon().await.unwrap();

    assert!(lexicon.is_negation("never"));
    assert!(!lexicon.is_positive("kind"));
}

#[tokio::test]
async fn renders_the_empty_state_for_blank_groups() {
    let evaluations = Evaluations::load(&data("evaluations.csv")).await.unwrap();
    let summaries = summarize(evaluations.records(), GroupBy::Subject, &BUILTIN);

    let output = report::render(&summaries, Default::default()).unwrap();

    assert!(output.contains("== IT 103 ==\nNo remarks to analyze (1 evaluations)"));
    assert!(output.contains("== IT 101 ==\nPositive: 2\nNegative: 1\nNeutral:  0"));
}

#[test]
fn missing_lexicon_file_is_an_error() {
    let runtime = tokio::runtime::Runtime::new().unwrap();

    let result = runtime.block_on(Lexicon::load(data("missing.yaml")));

    assert!(result.is_err());
}
