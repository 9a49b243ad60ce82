use dioxus::prelude::*;

use crate::core::selection::{Dimension, SelectionAction};
use crate::i18n;
use crate::state::use_selection_store;
use crate::t;

/// Active filters as removable chips, plus a reset-all button.
#[component]
pub fn FilterBar() -> Element {
    let store = use_selection_store();
    i18n::track(i18n::use_language());

    let selection = store.selection.read().clone();
    let chips: Vec<(Dimension, String)> = selection
        .active()
        .into_iter()
        .map(|dimension| {
            let label = match dimension {
                Dimension::Country => {
                    t!("filters-country", value = selection.country.clone().unwrap_or_default())
                }
                Dimension::Year => t!(
                    "filters-year",
                    value = selection.year.map(|y| y.to_string()).unwrap_or_default()
                ),
                Dimension::Language => {
                    t!("filters-language", value = selection.language.clone().unwrap_or_default())
                }
            };
            (dimension, label)
        })
        .collect();

    if chips.is_empty() {
        return rsx! {
            div { class: "filters",
                span { class: "filters__empty", {t!("filters-none")} }
            }
        };
    }

    rsx! {
        div { class: "filters",
            for (dimension, label) in chips {
                span { key: "{dimension}", class: "filter-chip",
                    "{label}"
                    button {
                        class: "filter-chip__reset",
                        title: t!("filters-reset"),
                        aria_label: t!("filters-reset"),
                        onclick: move |_| store.dispatch(dimension.reset()),
                        "×"
                    }
                }
            }
            button {
                class: "filters__reset-all",
                onclick: move |_| store.dispatch(SelectionAction::ResetAll),
                {t!("filters-reset-all")}
            }
        }
    }
}
