use dioxus::prelude::*;

use crate::charts::{ChartCanvas, ChartSpec, Pick};
use crate::data::use_data;
use crate::t;

#[component]
pub fn ChartPanel(title: String, #[props(default)] wide: bool, children: Element) -> Element {
    let class = if wide { "panel panel--wide" } else { "panel" };
    rsx! {
        section { class: "{class}",
            h2 { class: "panel__title", "{title}" }
            div { class: "panel__body", {children} }
        }
    }
}

#[component]
pub fn StatusMessage(text: String, #[props(default)] error: bool) -> Element {
    let class = if error {
        "panel__status panel__status--error"
    } else {
        "panel__status"
    };
    rsx! {
        p { class: "{class}", role: if error { "alert" } else { "status" }, "{text}" }
    }
}

/// The chart, or a placeholder while the dataset loads, after it failed, or
/// when the aggregate is empty.
#[component]
pub fn ChartBody(
    #[props(!optional)] spec: Option<ChartSpec>,
    #[props(default = 640)] width: u32,
    #[props(default = 320)] height: u32,
    #[props(default)] on_pick: Option<EventHandler<Pick>>,
    label: String,
) -> Element {
    let data = use_data();
    let state = data.read();

    if let Some(err) = &state.error {
        return rsx! {
            StatusMessage { text: t!("state-error", message = err.to_string()), error: true }
        };
    }
    if state.is_loading {
        return rsx! {
            StatusMessage { text: t!("state-loading") }
        };
    }

    match spec {
        Some(spec) if !spec.is_empty() => match on_pick {
            Some(on_pick) => rsx! {
                ChartCanvas { spec, width, height, on_pick, label }
            },
            None => rsx! {
                ChartCanvas { spec, width, height, label }
            },
        },
        _ => rsx! {
            StatusMessage { text: t!("state-empty") }
        },
    }
}
