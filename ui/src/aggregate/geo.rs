use std::collections::BTreeMap;

use api::{fields, Record};

/// Dataset country names that differ from the world atlas feature names.
const ALIASES: &[(&str, &str)] = &[("United States", "United States of America")];

/// Atlas feature name for a dataset country.
pub fn map_country(name: &str) -> &str {
    ALIASES
        .iter()
        .find(|&&(dataset, _)| dataset == name)
        .map_or(name, |&(_, atlas)| atlas)
}

/// Dataset country for an atlas feature name, used when a map click becomes
/// a selection.
pub fn display_country(feature: &str) -> &str {
    ALIASES
        .iter()
        .find(|&&(_, atlas)| atlas == feature)
        .map_or(feature, |&(dataset, _)| dataset)
}

/// Users per atlas country name.
pub fn country_counts<'a, I>(records: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts = BTreeMap::new();
    for country in records.into_iter().filter_map(|record| record.text(fields::COUNTRY)) {
        *counts.entry(map_country(&country).to_string()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from(country: &str) -> Record {
        Record {
            country: Some(country.to_string()),
            ..Record::default()
        }
    }

    #[test]
    fn united_states_is_aliased_both_ways() {
        let records = vec![from("United States"), from("France"), from("United States")];
        let counts = country_counts(&records);
        assert_eq!(counts.get("United States of America"), Some(&2));
        assert_eq!(counts.get("France"), Some(&1));
        assert!(!counts.contains_key("United States"));

        assert_eq!(display_country("United States of America"), "United States");
        assert_eq!(display_country("France"), "France");
    }
}
