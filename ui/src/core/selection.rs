//! Cross-chart filter state.
//!
//! A [`Selection`] is only ever changed by reducing a [`SelectionAction`], so
//! every update that crosses charts goes through [`Selection::apply`].

use std::fmt;

use api::Record;

use crate::aggregate::parse_year;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub country: Option<String>,
    pub year: Option<i32>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    SelectCountry(String),
    SelectYear(i32),
    SelectLanguage(String),
    ResetCountry,
    ResetYear,
    ResetLanguage,
    ResetAll,
}

/// One filterable axis of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Country,
    Year,
    Language,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Country, Dimension::Year, Dimension::Language];

    pub fn reset(self) -> SelectionAction {
        match self {
            Dimension::Country => SelectionAction::ResetCountry,
            Dimension::Year => SelectionAction::ResetYear,
            Dimension::Language => SelectionAction::ResetLanguage,
        }
    }
}

/// Selecting the value that is already selected clears it.
fn toggle<T: PartialEq>(slot: &mut Option<T>, value: T) {
    if slot.as_ref() == Some(&value) {
        *slot = None;
    } else {
        *slot = Some(value);
    }
}

impl Selection {
    pub fn apply(&mut self, action: SelectionAction) {
        match action {
            SelectionAction::SelectCountry(country) => toggle(&mut self.country, country),
            SelectionAction::SelectYear(year) => toggle(&mut self.year, year),
            SelectionAction::SelectLanguage(language) => toggle(&mut self.language, language),
            SelectionAction::ResetCountry => self.country = None,
            SelectionAction::ResetYear => self.year = None,
            SelectionAction::ResetLanguage => self.language = None,
            SelectionAction::ResetAll => *self = Selection::default(),
        }
    }

    pub fn reduce(mut self, action: SelectionAction) -> Self {
        self.apply(action);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.country.is_none() && self.year.is_none() && self.language.is_none()
    }

    pub fn is_active(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Country => self.country.is_some(),
            Dimension::Year => self.year.is_some(),
            Dimension::Language => self.language.is_some(),
        }
    }

    /// Active dimensions in display order.
    pub fn active(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|dimension| self.is_active(*dimension))
            .collect()
    }

    /// The same selection with `dimension` cleared. Charts filter by
    /// everything except the dimension they drive.
    pub fn without(&self, dimension: Dimension) -> Selection {
        let mut rest = self.clone();
        rest.apply(dimension.reset());
        rest
    }

    /// Only the given dimensions kept.
    pub fn only(&self, dimensions: &[Dimension]) -> Selection {
        Dimension::ALL
            .into_iter()
            .filter(|dimension| !dimensions.contains(dimension))
            .fold(self.clone(), |rest, dimension| rest.without(dimension))
    }

    pub fn matches(&self, record: &Record) -> bool {
        let country = self.country.as_deref().map_or(true, |country| {
            record.country.as_deref().map(str::trim) == Some(country)
        });
        let year = self.year.map_or(true, |year| {
            record.created_at.as_deref().and_then(parse_year) == Some(year)
        });
        let language = self.language.as_deref().map_or(true, |language| {
            record.language.as_deref().map(str::trim) == Some(language)
        });
        country && year && language
    }

    pub fn filter<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|record| self.matches(record)).collect()
    }

    /// Records matching every active filter. With one dimension reset the
    /// total reflects the filters still active, not the whole dataset.
    pub fn total(&self, records: &[Record]) -> usize {
        records.iter().filter(|record| self.matches(record)).count()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dimension::Country => "country",
            Dimension::Year => "year",
            Dimension::Language => "language",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{count_by, Missing};
    use api::fields;

    fn user(country: &str, language: &str, created_at: &str) -> Record {
        Record {
            country: Some(country.into()),
            language: Some(language.into()),
            created_at: Some(created_at.into()),
            ..Record::default()
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            user("France", "Go", "2012-01-01"),
            user("France", "Go", "2014-01-01"),
            user("Japan", "Rust", "2014-06-01"),
        ]
    }

    #[test]
    fn selecting_twice_toggles_off() {
        let selection = Selection::default()
            .reduce(SelectionAction::SelectCountry("Japan".into()))
            .reduce(SelectionAction::SelectCountry("Japan".into()));
        assert_eq!(selection, Selection::default());

        let selection = Selection::default()
            .reduce(SelectionAction::SelectYear(2014))
            .reduce(SelectionAction::SelectYear(2015));
        assert_eq!(selection.year, Some(2015));
    }

    #[test]
    fn resets_clear_single_dimensions() {
        let mut selection = Selection {
            country: Some("France".into()),
            year: Some(2014),
            language: Some("Go".into()),
        };
        selection.apply(SelectionAction::ResetYear);
        assert_eq!(selection.active(), vec![Dimension::Country, Dimension::Language]);

        selection.apply(SelectionAction::ResetAll);
        assert!(selection.is_empty());
    }

    #[test]
    fn country_filter_then_reset() {
        let records = sample();
        let mut selection = Selection::default();

        selection.apply(SelectionAction::SelectCountry("France".into()));
        let languages = count_by(selection.filter(&records), fields::LANGUAGE, Missing::Drop);
        assert_eq!(languages.into_iter().collect::<Vec<_>>(), vec![("Go".to_string(), 2)]);

        selection.apply(SelectionAction::ResetCountry);
        let languages = count_by(selection.filter(&records), fields::LANGUAGE, Missing::Drop);
        assert_eq!(
            languages.into_iter().collect::<Vec<_>>(),
            vec![("Go".to_string(), 2), ("Rust".to_string(), 1)]
        );
    }

    #[test]
    fn total_counts_remaining_filters() {
        let records = sample();
        let selection = Selection {
            country: Some("France".into()),
            year: Some(2014),
            language: None,
        };
        assert_eq!(selection.total(&records), 1);
        assert_eq!(selection.without(Dimension::Year).total(&records), 2);
        assert_eq!(
            selection.without(Dimension::Year).without(Dimension::Country).total(&records),
            records.len()
        );
    }

    #[test]
    fn only_keeps_requested_dimensions() {
        let selection = Selection {
            country: Some("Japan".into()),
            year: Some(2014),
            language: Some("Rust".into()),
        };
        let country_only = selection.only(&[Dimension::Country]);
        assert_eq!(country_only.active(), vec![Dimension::Country]);
    }
}
