use dioxus::prelude::*;

use crate::aggregate::hireable_share;
use crate::core::format::{format_number, format_percent};
use crate::data::use_data;
use crate::i18n;
use crate::state::use_selection_store;
use crate::t;

/// Users matching the active filters, with the country and year in scope.
#[component]
pub fn TotalsCard() -> Element {
    let data = use_data();
    let store = use_selection_store();
    i18n::track(i18n::use_language());

    let selection = store.selection.read();
    let total = data
        .read()
        .data
        .as_ref()
        .map(|dataset| selection.total(dataset))
        .unwrap_or(0);

    let scope = selection.country.clone().unwrap_or_else(|| t!("card-world"));
    let year = match selection.year {
        Some(year) => year.to_string(),
        None => t!("card-no-year"),
    };

    rsx! {
        div { class: "card card--total",
            h3 { class: "card__title", {t!("card-total-title")} }
            p { class: "card__value", "{format_number(total as f64)}" }
            p { class: "card__meta", "{scope} · {year}" }
        }
    }
}

const RING_RADIUS: f64 = 40.0;

/// Share of filtered users marked hireable, drawn as a progress ring.
#[component]
pub fn HireableCard() -> Element {
    let data = use_data();
    let store = use_selection_store();
    i18n::track(i18n::use_language());

    let share = use_memo(move || {
        let state = data.read();
        let dataset = state.data.as_ref()?;
        hireable_share(store.selection.read().filter(dataset))
    });

    let percent = share().unwrap_or(0.0);
    let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;
    let dash = circumference * percent / 100.0;

    rsx! {
        div { class: "card card--hireable",
            h3 { class: "card__title", {t!("card-hireable-title")} }
            svg {
                class: "card__ring",
                width: "100",
                height: "100",
                view_box: "0 0 100 100",
                circle {
                    class: "card__ring-track",
                    cx: "50",
                    cy: "50",
                    r: "{RING_RADIUS}",
                    fill: "none",
                    stroke_width: "10",
                }
                circle {
                    class: "card__ring-value",
                    cx: "50",
                    cy: "50",
                    r: "{RING_RADIUS}",
                    fill: "none",
                    stroke_width: "10",
                    stroke_linecap: "round",
                    stroke_dasharray: "{dash} {circumference}",
                    transform: "rotate(-90 50 50)",
                }
                text {
                    class: "card__ring-label",
                    x: "50",
                    y: "55",
                    text_anchor: "middle",
                    "{format_percent(percent)}"
                }
            }
        }
    }
}
