//! Localization for `gitscope-ui`.
//!
//! Bundles live under `i18n/<locale>/gitscope-ui.ftl` and are embedded at
//! compile time. `en-US` is the fallback and the reference for the key set;
//! `es-ES` ships alongside it.
//!
//! Call [`init`] once at startup (it is idempotent), then look messages up
//! with the [`t!`](crate::t) macro:
//! ```ignore
//! let title = ui::t!("dashboard-title");
//! let filter = ui::t!("filters-country", value = "Japan");
//! ```
//!
//! Browsers pick the initial language from `navigator.languages`; native
//! test runs use the OS locale list.
use std::sync::Once;

use dioxus::prelude::{try_use_context, Readable, Signal};
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::{langid, LanguageIdentifier};

pub use i18n_embed_fl::fl;

/// Message lookup with optional named arguments, routed through [`LOADER`].
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the bundle filename in every locale folder.
const DOMAIN: &str = "gitscope-ui";

const FALLBACK: LanguageIdentifier = langid!("en-US");

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, FALLBACK));

/// Load bundles for `languages`. Isolation is a per-bundle setting, so it is
/// switched off after every load; the marks would leak into canvas text and
/// tooltips.
fn load(languages: &[LanguageIdentifier]) -> Result<(), i18n_embed::I18nEmbedError> {
    i18n_embed::select(&*LOADER, &Localizations, languages)?;
    LOADER.set_use_isolating(false);
    Ok(())
}

static INIT: Once = Once::new();

pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = load(&requested) {
            tracing::warn!(%err, "language selection failed, using fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!(tag, "ignoring invalid language tag");
        return Ok(());
    };
    load(&[lang])
}

/// Tag of the language messages are currently resolved in.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Embedded locale folders, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Language tag signal provided by the app shell, if any. Reading it inside a
/// memo or render makes that scope follow language switches.
pub fn use_language() -> Option<Signal<String>> {
    try_use_context::<Signal<String>>()
}

/// Subscribe the current reactive scope to `language`.
pub fn track(language: Option<Signal<String>>) {
    if let Some(language) = language {
        let _ = language.read();
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // The loader is process-wide; tests that switch languages take turns.
    static LANGUAGE: Mutex<()> = Mutex::new(());

    fn exclusive() -> MutexGuard<'static, ()> {
        LANGUAGE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn both_bundles_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "es-ES"));
    }

    #[test]
    fn fallback_lookup() {
        let _guard = exclusive();
        init();
        let _ = set_language("en-US");
        assert_eq!(fl!(&*LOADER, "nav-users"), "Users");
        assert_eq!(
            fl!(&*LOADER, "filters-country", value = "Japan"),
            "Country: Japan"
        );
    }

    #[test]
    fn switching_language_keeps_arguments_unisolated() {
        let _guard = exclusive();
        init();
        set_language("es-ES").unwrap();
        assert_eq!(current_language(), "es-ES");
        assert_eq!(fl!(&*LOADER, "filters-year", value = "2014"), "Año: 2014");

        set_language("en-US").unwrap();
        assert_eq!(fl!(&*LOADER, "filters-year", value = "2014"), "Year: 2014");
    }

    #[test]
    fn invalid_tag_keeps_current_language() {
        let _guard = exclusive();
        init();
        let before = fl!(&*LOADER, "nav-users");
        let _ = set_language("not a tag");
        assert_eq!(fl!(&*LOADER, "nav-users"), before);
    }
}
