//! Topic frequencies for the word cloud.
//!
//! Topic lists usually arrive as Python-style list literals encoded in a
//! string (`"['rust', 'cli']"`). They are read by swapping single quotes for
//! double quotes and parsing the result as JSON.

use std::collections::HashMap;

use api::Record;
use serde_json::Value;

pub const WORD_CLOUD_LIMIT: usize = 100;
pub const WORD_CLOUD_COMPACT_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub text: String,
    pub value: usize,
}

/// The `limit` most frequent topics, by frequency then alphabetically.
/// Unparseable lists are skipped with a warning.
pub fn topic_frequencies<'a, I>(records: I, field: &str, limit: usize) -> Vec<WordCount>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();

    for (index, record) in records.into_iter().enumerate() {
        let Some(raw) = topic_value(record, field) else {
            continue;
        };
        let topics = match parse_topics(raw) {
            Ok(topics) => topics,
            Err(err) => {
                tracing::warn!(index, %err, "skipping unparseable topic list");
                continue;
            }
        };
        for topic in topics {
            *counts.entry(topic).or_insert(0) += 1;
        }
    }

    let mut words: Vec<WordCount> = counts
        .into_iter()
        .map(|(text, value)| WordCount { text, value })
        .collect();
    words.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.text.cmp(&b.text)));
    words.truncate(limit);
    words
}

fn topic_value<'r>(record: &'r Record, field: &str) -> Option<&'r Value> {
    if field == api::fields::TOPICS {
        record.topics.as_ref()
    } else {
        record.extra.get(field)
    }
}

fn parse_topics(raw: &Value) -> Result<Vec<String>, serde_json::Error> {
    let items = match raw {
        Value::Array(items) => items.clone(),
        Value::String(encoded) if encoded.trim().is_empty() => Vec::new(),
        Value::String(encoded) => serde_json::from_str::<Vec<Value>>(&encoded.replace('\'', "\""))?,
        _ => Vec::new(),
    };

    Ok(items
        .iter()
        .filter_map(|item| item.as_str())
        .map(str::trim)
        .filter(|topic| !topic.is_empty() && !topic.eq_ignore_ascii_case("unknown"))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::fields;
    use serde_json::json;

    fn topics(raw: Value) -> Record {
        Record {
            topics: Some(raw),
            ..Record::default()
        }
    }

    #[test]
    fn python_style_lists_are_counted() {
        let records = vec![
            topics(json!("['rust', 'cli']")),
            topics(json!("['rust', ' web ', 'Unknown']")),
            topics(json!(["cli", "rust"])),
            topics(json!("[]")),
        ];
        let words = topic_frequencies(&records, fields::TOPICS, WORD_CLOUD_LIMIT);
        assert_eq!(
            words,
            vec![
                WordCount { text: "rust".into(), value: 3 },
                WordCount { text: "cli".into(), value: 2 },
                WordCount { text: "web".into(), value: 1 },
            ]
        );
    }

    #[test]
    fn malformed_list_is_skipped_without_panicking() {
        let mut records: Vec<Record> = (0..9).map(|_| topics(json!("['data']"))).collect();
        records.insert(4, topics(json!("['broken")));

        let words = topic_frequencies(&records, fields::TOPICS, WORD_CLOUD_LIMIT);
        assert_eq!(words, vec![WordCount { text: "data".into(), value: 9 }]);
    }

    #[test]
    fn limit_keeps_the_most_frequent() {
        let records = vec![
            topics(json!("['a', 'b', 'c']")),
            topics(json!("['c', 'b']")),
            topics(json!("['c']")),
        ];
        let words = topic_frequencies(&records, fields::TOPICS, 2);
        let texts: Vec<_> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, ["c", "b"]);
    }

    #[test]
    fn records_without_topics_are_ignored() {
        assert!(topic_frequencies(&[Record::default()], fields::TOPICS, 10).is_empty());
    }
}
