//! Every locale bundle must define the same message ids as the en-US
//! fallback, and no bundle may define an id twice.

use std::collections::BTreeSet;

const EN_US: &str = include_str!("../i18n/en-US/gitscope-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/gitscope-ui.ftl");

/// Message ids in definition order. Comments, terms (`-brand`), attributes
/// and indented continuation lines are not messages.
fn message_ids(src: &str) -> Vec<&str> {
    src.lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(['#', '-', '.']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && !id.contains(char::is_whitespace))
        .collect()
}

fn duplicates<'a>(ids: &[&'a str]) -> BTreeSet<&'a str> {
    let mut seen = BTreeSet::new();
    ids.iter().copied().filter(|id| !seen.insert(*id)).collect()
}

#[test]
fn fallback_bundle_is_well_formed() {
    let ids = message_ids(EN_US);
    assert!(!ids.is_empty(), "en-US defines no messages");
    assert!(duplicates(&ids).is_empty(), "en-US duplicates: {:?}", duplicates(&ids));
}

#[test]
fn locales_match_fallback() {
    let fallback: BTreeSet<&str> = message_ids(EN_US).into_iter().collect();

    for (locale, src) in [("es-ES", ES_ES)] {
        let ids = message_ids(src);
        let dups = duplicates(&ids);
        assert!(dups.is_empty(), "{locale} duplicates: {dups:?}");

        let defined: BTreeSet<&str> = ids.into_iter().collect();
        let missing: Vec<_> = fallback.difference(&defined).collect();
        let extra: Vec<_> = defined.difference(&fallback).collect();
        assert!(missing.is_empty(), "{locale} is missing: {missing:?}");
        assert!(extra.is_empty(), "{locale} defines unknown ids: {extra:?}");
    }
}
