//! One row of the dataset. Known columns are typed; every other column is kept
//! verbatim so alternate datasets stay readable through the generic accessors.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::fields;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(
        rename = "Country",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub country: Option<String>,

    #[serde(
        rename = "Account Created At",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,

    #[serde(
        rename = "Most Used Language",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub language: Option<String>,

    #[serde(
        rename = "Hireable",
        default,
        deserialize_with = "lenient_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub hireable: Option<bool>,

    #[serde(
        rename = "Repositories Count",
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub repositories: Option<f64>,

    /// Usually a string-encoded list (`"['rust', 'cli']"`); decoded lazily by
    /// the topic aggregator.
    #[serde(
        rename = "Unique Topics",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub topics: Option<Value>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Record {
    /// Text view of any column. Blank strings read as missing.
    pub fn text(&self, field: &str) -> Option<String> {
        match field {
            fields::COUNTRY => non_blank(&self.country),
            fields::CREATED_AT => non_blank(&self.created_at),
            fields::LANGUAGE => non_blank(&self.language),
            fields::HIREABLE => self.hireable.map(|flag| flag.to_string()),
            fields::REPOSITORIES => self.repositories.map(format_number),
            fields::TOPICS => self.topics.as_ref().and_then(value_text),
            other => self.extra.get(other).and_then(value_text),
        }
    }

    /// Numeric view of any column; numeric strings are accepted.
    pub fn number(&self, field: &str) -> Option<f64> {
        match field {
            fields::REPOSITORIES => self.repositories,
            fields::COUNTRY | fields::CREATED_AT | fields::LANGUAGE | fields::HIREABLE => None,
            fields::TOPICS => None,
            other => self.extra.get(other).and_then(value_number),
        }
    }

    pub fn flag(&self, field: &str) -> Option<bool> {
        match field {
            fields::HIREABLE => self.hireable,
            other => self.extra.get(other).and_then(value_flag),
        }
    }
}

fn non_blank(text: &Option<String>) -> Option<String> {
    let trimmed = text.as_deref()?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

pub(crate) fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(raw) => {
            let trimmed = raw.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => number.as_f64().map(format_number),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

pub(crate) fn value_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

pub(crate) fn value_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => number.as_i64().and_then(|n| match n {
            0 => Some(false),
            1 => Some(true),
            _ => None,
        }),
        Value::String(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_text))
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_number))
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_flag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_columns_are_lenient() {
        let record: Record = serde_json::from_value(json!({
            "Country": "  Japan ",
            "Account Created At": "2014-03-02T10:00:00Z",
            "Most Used Language": "",
            "Hireable": "True",
            "Repositories Count": "12",
            "Unique Topics": "['rust', 'cli']"
        }))
        .unwrap();

        assert_eq!(record.country.as_deref(), Some("Japan"));
        assert_eq!(record.language, None);
        assert_eq!(record.hireable, Some(true));
        assert_eq!(record.repositories, Some(12.0));
        assert_eq!(record.text(fields::REPOSITORIES).as_deref(), Some("12"));
        assert!(record.extra.is_empty());
    }

    #[test]
    fn unknown_columns_land_in_extra() {
        let record: Record = serde_json::from_value(json!({
            "SepalLengthCm": 5.1,
            "SepalWidthCm": "3.5",
            "Species": "Iris-setosa"
        }))
        .unwrap();

        assert_eq!(record.number(fields::SEPAL_LENGTH), Some(5.1));
        assert_eq!(record.number(fields::SEPAL_WIDTH), Some(3.5));
        assert_eq!(record.text(fields::SPECIES).as_deref(), Some("Iris-setosa"));
        assert_eq!(record.number(fields::SPECIES), None);
    }

    #[test]
    fn nulls_and_garbage_read_as_missing() {
        let record: Record = serde_json::from_value(json!({
            "Country": null,
            "Hireable": "maybe",
            "Repositories Count": "lots"
        }))
        .unwrap();

        assert_eq!(record.country, None);
        assert_eq!(record.hireable, None);
        assert_eq!(record.repositories, None);
    }
}
