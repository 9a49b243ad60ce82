//! Year based series: account growth and per-language trends.

use std::collections::BTreeMap;

use api::{fields, Record};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use super::categorical::{count_by, Missing};

/// Calendar year of a creation timestamp. Accepts RFC 3339, local ISO
/// datetimes with a `T` or a space separator and optional fractional
/// seconds, a plain date, or a bare year.
pub fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(stamp) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(stamp.year());
    }
    let local = [
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]"),
    ];
    if let Some(stamp) = local
        .iter()
        .find_map(|description| PrimitiveDateTime::parse(raw, *description).ok())
    {
        return Some(stamp.year());
    }
    if let Ok(date) = Date::parse(raw, format_description!("[year]-[month]-[day]")) {
        return Some(date.year());
    }
    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.parse().ok();
    }
    None
}

pub(crate) fn record_year(record: &Record) -> Option<i32> {
    record.created_at.as_deref().and_then(parse_year)
}

/// Records per creation year, ascending. Unparseable dates are left out.
pub fn yearly_counts<'a, I>(records: I) -> BTreeMap<i32, usize>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts = BTreeMap::new();
    for year in records.into_iter().filter_map(record_year) {
        *counts.entry(year).or_insert(0) += 1;
    }
    counts
}

/// Running total of accounts by year, ascending.
pub fn cumulative_by_year<'a, I>(records: I) -> Vec<(i32, usize)>
where
    I: IntoIterator<Item = &'a Record>,
{
    yearly_counts(records)
        .into_iter()
        .scan(0usize, |total, (year, count)| {
            *total += count;
            Some((year, *total))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LanguageTrend {
    /// `None` only when no record names a language.
    pub language: Option<String>,
    pub series: Vec<(i32, usize)>,
}

/// Yearly (non-cumulative) account counts for one language. Without an
/// explicit language the most used one is charted, ties going to the name
/// that sorts first.
pub fn language_trend<'a, I>(records: I, language: Option<&str>) -> LanguageTrend
where
    I: IntoIterator<Item = &'a Record>,
{
    let records: Vec<&Record> = records.into_iter().collect();

    let subject = match language {
        Some(language) => Some(language.to_string()),
        None => count_by(
            records.iter().copied(),
            fields::LANGUAGE,
            Missing::Drop,
        )
        .into_iter()
        // Equal counts: the earlier name wins.
        .max_by(|(a_name, a), (b_name, b)| a.cmp(b).then_with(|| b_name.cmp(a_name)))
        .map(|(name, _)| name),
    };

    let Some(subject) = subject else {
        return LanguageTrend::default();
    };

    let series = yearly_counts(
        records
            .into_iter()
            .filter(|record| record.language.as_deref() == Some(subject.as_str())),
    )
    .into_iter()
    .collect();

    LanguageTrend {
        language: Some(subject),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(created_at: Option<&str>, language: Option<&str>) -> Record {
        Record {
            created_at: created_at.map(str::to_string),
            language: language.map(str::to_string),
            ..Record::default()
        }
    }

    #[test]
    fn parses_supported_timestamp_shapes() {
        assert_eq!(parse_year("2012-05-01T10:00:00Z"), Some(2012));
        assert_eq!(parse_year("2015-09-09T08:30:00+09:00"), Some(2015));
        assert_eq!(parse_year("2018-01-31 23:59:59"), Some(2018));
        assert_eq!(parse_year("2015-09-09T08:30:00"), Some(2015));
        assert_eq!(parse_year("2015-09-09T08:30:00.000"), Some(2015));
        assert_eq!(parse_year("2018-01-31 23:59:59.5"), Some(2018));
        assert_eq!(parse_year("2015-09-09T25:30:00"), None);
        assert_eq!(parse_year("2020-02-29"), Some(2020));
        assert_eq!(parse_year(" 2009 "), Some(2009));
        assert_eq!(parse_year("yesterday"), None);
        assert_eq!(parse_year("2020-13-01"), None);
        assert_eq!(parse_year(""), None);
    }

    #[test]
    fn local_datetimes_count_towards_growth() {
        let records = vec![
            user(Some("2011-04-02T10:00:00+00:00"), None),
            user(Some("2015-09-09T08:30:00.000"), None),
        ];
        assert_eq!(cumulative_by_year(&records), vec![(2011, 1), (2015, 2)]);
    }

    #[test]
    fn cumulative_series_is_monotonic_and_complete() {
        let records = vec![
            user(Some("2014-01-01"), None),
            user(Some("2012-06-01T00:00:00Z"), None),
            user(Some("2014-03-03 10:00:00"), None),
            user(Some("not a date"), None),
            user(None, None),
            user(Some("2013-12-31"), None),
        ];

        let series = cumulative_by_year(&records);
        assert_eq!(series, vec![(2012, 1), (2013, 2), (2014, 4)]);
        assert!(series.windows(2).all(|pair| pair[0].1 <= pair[1].1));

        let parseable = records.iter().filter(|r| record_year(r).is_some()).count();
        assert_eq!(series.last().map(|(_, total)| *total), Some(parseable));
    }

    #[test]
    fn empty_input_gives_empty_series() {
        assert!(cumulative_by_year(&[] as &[Record]).is_empty());
        assert_eq!(language_trend(&[] as &[Record], None), LanguageTrend::default());
    }

    #[test]
    fn trend_follows_requested_language() {
        let records = vec![
            user(Some("2012-01-01"), Some("Go")),
            user(Some("2013-01-01"), Some("Go")),
            user(Some("2013-05-01"), Some("Go")),
            user(Some("2013-01-01"), Some("Rust")),
        ];
        let trend = language_trend(&records, Some("Go"));
        assert_eq!(trend.language.as_deref(), Some("Go"));
        assert_eq!(trend.series, vec![(2012, 1), (2013, 2)]);
    }

    #[test]
    fn trend_defaults_to_most_used_with_name_tiebreak() {
        let records = vec![
            user(Some("2012-01-01"), Some("Rust")),
            user(Some("2013-01-01"), Some("Go")),
            user(Some("2014-01-01"), Some("Rust")),
            user(Some("2015-01-01"), Some("Go")),
        ];
        let trend = language_trend(&records, None);
        assert_eq!(trend.language.as_deref(), Some("Go"));
        assert_eq!(trend.series, vec![(2013, 1), (2015, 1)]);
    }
}
