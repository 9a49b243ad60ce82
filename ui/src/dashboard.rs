//! Page-level containers. Each dashboard owns its own selection store.

use api::fields;
use dioxus::prelude::*;

use crate::components::{
    CategoryBarChart, CountryMap, FilterBar, GrowthChart, HireableCard, LanguageDonut,
    LanguageTrendChart, RepoHistogram, ScatterPlot, TopicCloud, TotalsCard,
};
use crate::i18n;
use crate::state::use_selection_provider;
use crate::t;

/// Header cards and filters above the grid of user charts.
#[component]
pub fn UsersDashboard() -> Element {
    use_selection_provider();
    i18n::track(i18n::use_language());

    rsx! {
        section { class: "page dashboard",
            header { class: "dashboard__header",
                h1 { class: "dashboard__title", {t!("dashboard-title")} }
                div { class: "dashboard__cards",
                    TotalsCard {}
                    HireableCard {}
                }
                FilterBar {}
            }
            div { class: "dashboard__grid",
                CountryMap {}
                GrowthChart {}
                LanguageDonut {}
                LanguageTrendChart {}
                RepoHistogram {}
                TopicCloud {}
            }
        }
    }
}

/// Measurement datasets such as Iris: class counts and a feature scatter.
#[component]
pub fn SamplesDashboard() -> Element {
    i18n::track(i18n::use_language());

    rsx! {
        section { class: "page dashboard",
            header { class: "dashboard__header",
                h1 { class: "dashboard__title", {t!("samples-title")} }
            }
            div { class: "dashboard__grid",
                CategoryBarChart {
                    field: fields::SPECIES.to_string(),
                    title: t!("chart-species-title"),
                }
                ScatterPlot {
                    x_field: fields::SEPAL_LENGTH.to_string(),
                    y_field: fields::SEPAL_WIDTH.to_string(),
                    x_label: t!("chart-scatter-x"),
                    y_label: t!("chart-scatter-y"),
                    title: t!("chart-scatter-title"),
                }
            }
        }
    }
}
