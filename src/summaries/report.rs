use serde::Serialize;

use crate::{cli::OutputFormat, utils::renderer};

use super::Summary;

/// The text widget for each summary
pub static TEMPLATE: &str = "\
{% for summary in summaries %}== {{ summary.key }} ==
{% if summary.tally %}Positive: {{ summary.tally.positive }}
Negative: {{ summary.tally.negative }}
Neutral:  {{ summary.tally.neutral }}
({{ summary.remarks }} of {{ summary.evaluations }} evaluations had remarks)
{% else %}No remarks to analyze ({{ summary.evaluations }} evaluations)
{% endif %}{% endfor %}";

#[derive(Serialize)]
struct Context<'a> {
    summaries: &'a [Summary],
}

/// Render summaries in the requested format
pub fn render(summaries: &[Summary], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => renderer::render(TEMPLATE, &Context { summaries }),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summaries)?),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::pipelines::remark_sentiment::Tally;

    fn summaries() -> Vec<Summary> {
        vec![
            Summary {
                key: "Garcia".to_string(),
                evaluations: 2,
                remarks: 0,
                tally: None,
            },
            Summary {
                key: "Santos".to_string(),
                evaluations: 3,
                remarks: 3,
                tally: Some(Tally::new(1, 1, 1)),
            },
        ]
    }

    #[test]
    fn renders_text_widgets() {
        let output = render(&summaries(), OutputFormat::Text).unwrap();

        assert_eq!(
            output,
            "\
== Garcia ==
No remarks to analyze (2 evaluations)
== Santos ==
Positive: 1
Negative: 1
Neutral:  1
(3 of 3 evaluations had remarks)
"
        );
    }

    #[test]
    fn renders_json_with_null_tally() {
        let output = render(&summaries(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value[0]["tally"], serde_json::Value::Null);
        assert_eq!(value[1]["tally"]["negative"], 1);
    }
}
