//! Every `t!("...")` id used in the crate sources must exist in the fallback
//! bundle, and each locale folder must ship the canonical file.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "gitscope-ui.ftl";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn defined_ids(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter(|line| !line.starts_with(['#', '-', '.']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim().to_string())
        .filter(|id| !id.is_empty() && id.chars().all(is_id_char))
        .collect()
}

fn is_id_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

/// Literal first arguments of `t!(` invocations.
fn referenced_ids(src: &str) -> impl Iterator<Item = String> + '_ {
    src.match_indices("t!(\"").filter_map(|(at, needle)| {
        let rest = &src[at + needle.len()..];
        let id = &rest[..rest.find('"')?];
        id.chars().all(is_id_char).then(|| id.to_string())
    })
}

#[test]
fn referenced_ids_exist_in_fallback() {
    let root = crate_root();
    let fallback = fs::read_to_string(root.join("i18n/en-US").join(FTL_FILENAME))
        .expect("fallback bundle is readable");
    let defined = defined_ids(&fallback);

    let mut files = Vec::new();
    rust_sources(&root.join("src"), &mut files);
    assert!(!files.is_empty());

    let missing: BTreeSet<String> = files
        .iter()
        .filter_map(|path| fs::read_to_string(path).ok())
        .flat_map(|src| referenced_ids(&src).collect::<Vec<_>>())
        .filter(|id| !defined.contains(id))
        .collect();
    assert!(missing.is_empty(), "ids missing from en-US: {missing:?}");
}

#[test]
fn every_locale_folder_ships_the_bundle() {
    let i18n = crate_root().join("i18n");
    let locales: Vec<PathBuf> = fs::read_dir(&i18n)
        .expect("i18n folder exists")
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();

    assert!(locales.iter().any(|path| path.ends_with("en-US")));
    for locale in locales {
        assert!(locale.join(FTL_FILENAME).exists(), "{locale:?} lacks {FTL_FILENAME}");
    }
}
