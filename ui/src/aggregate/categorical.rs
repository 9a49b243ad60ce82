use std::collections::BTreeMap;

use api::{fields, Record};

/// Donut slices smaller than this are merged into "Others".
pub const DONUT_OTHERS_THRESHOLD: usize = 50;

pub const OTHERS_LABEL: &str = "Others";
pub const HIREABLE_LABEL: &str = "Hireable";
pub const NOT_HIREABLE_LABEL: &str = "Not hireable";

/// What to do with records that lack the grouped field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing<'l> {
    Drop,
    Bucket(&'l str),
}

/// Count records per distinct value of `field`.
pub fn count_by<'a, I>(records: I, field: &str, missing: Missing<'_>) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts = BTreeMap::new();
    for record in records {
        let key = match (record.text(field), missing) {
            (Some(value), _) => value,
            (None, Missing::Bucket(label)) => label.to_string(),
            (None, Missing::Drop) => continue,
        };
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Hireable versus not, records without the flag dropped.
pub fn hireable_split<'a, I>(records: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts = BTreeMap::new();
    for flag in records.into_iter().filter_map(|record| record.flag(fields::HIREABLE)) {
        let label = if flag { HIREABLE_LABEL } else { NOT_HIREABLE_LABEL };
        *counts.entry(label.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Percentage of flagged records that are hireable.
pub fn hireable_share<'a, I>(records: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Record>,
{
    let split = hireable_split(records);
    let hireable = split.get(HIREABLE_LABEL).copied().unwrap_or(0);
    let total: usize = split.values().sum();
    (total > 0).then(|| hireable as f64 / total as f64 * 100.0)
}

/// Merge categories below `threshold` into a trailing "Others" entry. The
/// rest are ordered by count descending, then name.
pub fn collapse_small(counts: &BTreeMap<String, usize>, threshold: usize) -> Vec<(String, usize)> {
    let mut kept: Vec<(String, usize)> = Vec::new();
    let mut others = 0usize;

    for (name, &count) in counts {
        if count < threshold {
            others += count;
        } else {
            kept.push((name.clone(), count));
        }
    }

    kept.sort_by(|(a_name, a), (b_name, b)| b.cmp(a).then_with(|| a_name.cmp(b_name)));
    if others > 0 {
        kept.push((OTHERS_LABEL.to_string(), others));
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(value: Option<&str>) -> Record {
        Record {
            language: value.map(str::to_string),
            ..Record::default()
        }
    }

    #[test]
    fn dropped_counts_sum_to_defined_records() {
        let records = vec![
            lang(Some("Go")),
            lang(None),
            lang(Some("Rust")),
            lang(Some("  ")),
            lang(Some("Go")),
        ];
        let counts = count_by(&records, fields::LANGUAGE, Missing::Drop);

        let defined = records.iter().filter(|r| r.text(fields::LANGUAGE).is_some()).count();
        assert_eq!(counts.values().sum::<usize>(), defined);
        assert_eq!(counts.get("Go"), Some(&2));
        assert_eq!(counts.get("Rust"), Some(&1));
    }

    #[test]
    fn missing_values_can_be_bucketed() {
        let records = vec![lang(None), lang(Some("Go")), lang(None)];
        let counts = count_by(&records, fields::LANGUAGE, Missing::Bucket("Unknown"));
        assert_eq!(counts.get("Unknown"), Some(&2));
        assert_eq!(counts.values().sum::<usize>(), records.len());
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(count_by(&[] as &[Record], fields::COUNTRY, Missing::Drop).is_empty());
        assert!(collapse_small(&BTreeMap::new(), DONUT_OTHERS_THRESHOLD).is_empty());
        assert_eq!(hireable_share(&[] as &[Record]), None);
    }

    #[test]
    fn small_categories_collapse_into_others() {
        let counts = BTreeMap::from([
            ("A".to_string(), 10),
            ("B".to_string(), 60),
            ("C".to_string(), 5),
        ]);
        assert_eq!(
            collapse_small(&counts, 50),
            vec![("B".to_string(), 60), ("Others".to_string(), 15)]
        );
    }

    #[test]
    fn empty_categories_do_not_create_others() {
        let counts = BTreeMap::from([("Go".to_string(), 70), ("Zig".to_string(), 0)]);
        assert_eq!(collapse_small(&counts, 50), vec![("Go".to_string(), 70)]);
    }

    #[test]
    fn others_is_absent_when_nothing_collapses() {
        let counts = BTreeMap::from([("Go".to_string(), 70), ("C".to_string(), 70), ("Rust".to_string(), 90)]);
        assert_eq!(
            collapse_small(&counts, 50),
            vec![
                ("Rust".to_string(), 90),
                ("C".to_string(), 70),
                ("Go".to_string(), 70),
            ]
        );
    }

    #[test]
    fn hireable_share_ignores_unknown_flags() {
        let records = vec![
            Record { hireable: Some(true), ..Record::default() },
            Record { hireable: Some(false), ..Record::default() },
            Record { hireable: Some(true), ..Record::default() },
            Record { hireable: None, ..Record::default() },
        ];
        let split = hireable_split(&records);
        assert_eq!(split.get(HIREABLE_LABEL), Some(&2));
        assert_eq!(split.get(NOT_HIREABLE_LABEL), Some(&1));

        let share = hireable_share(&records).unwrap();
        assert!((share - 66.666).abs() < 0.01);
    }
}
