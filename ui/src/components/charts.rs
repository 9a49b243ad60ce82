//! Dashboard chart components. Each one filters the dataset by every active
//! selection dimension except the one it drives, memoizes its aggregate and
//! turns clicks into selection actions.

use api::fields;
use dioxus::prelude::*;

use crate::aggregate::{
    collapse_small, count_by, country_counts, cumulative_by_year, histogram, language_trend,
    scatter_points, topic_frequencies, Bins, Missing, DONUT_OTHERS_THRESHOLD, OTHERS_LABEL,
    WORD_CLOUD_COMPACT_LIMIT, WORD_CLOUD_LIMIT,
};
use crate::charts::map::MAP_SIZE;
use crate::charts::{ChartSpec, Labels, Pick};
use crate::components::panel::{ChartBody, ChartPanel, StatusMessage};
use crate::core::selection::{Dimension, SelectionAction};
use crate::data::{use_data, use_world_atlas};
use crate::i18n;
use crate::state::use_selection_store;
use crate::t;

/// Cumulative account growth; clicking a year selects it.
#[component]
pub fn GrowthChart() -> Element {
    let data = use_data();
    let store = use_selection_store();
    let language = i18n::use_language();

    let spec = use_memo(move || {
        i18n::track(language);
        let state = data.read();
        let dataset = state.data.as_ref()?;
        let selection = store.selection.read();
        let series = cumulative_by_year(selection.without(Dimension::Year).filter(dataset));
        let labels = Labels {
            series: t!("chart-growth-series"),
            category: t!("chart-year"),
            ..Labels::default()
        };
        Some(ChartSpec::growth(&series, selection.year, labels))
    });

    let on_pick = move |pick: Pick| {
        if let Pick::Year(year) = pick {
            store.dispatch(SelectionAction::SelectYear(year));
        }
    };

    rsx! {
        ChartPanel { title: t!("chart-growth-title"), wide: true,
            ChartBody { spec: spec(), width: 900, height: 320, on_pick, label: t!("chart-growth-title") }
        }
    }
}

/// Yearly sign-ups for the selected language, or the most used one.
#[component]
pub fn LanguageTrendChart() -> Element {
    let data = use_data();
    let store = use_selection_store();
    let language = i18n::use_language();

    let chart = use_memo(move || {
        i18n::track(language);
        let state = data.read();
        let dataset = state.data.as_ref()?;
        let selection = store.selection.read();
        let filtered = selection.only(&[Dimension::Country]).filter(dataset);
        let trend = language_trend(filtered, selection.language.as_deref());
        let subject = trend.language.clone().unwrap_or_default();

        let title = if selection.language.is_some() {
            t!("chart-trend-title-selected", language = subject.clone())
        } else {
            t!("chart-trend-title-top", language = subject.clone())
        };
        let labels = Labels {
            series: subject,
            category: t!("chart-year"),
            ..Labels::default()
        };
        Some((title, ChartSpec::trend(&trend.series, labels)))
    });

    let (title, spec) = match chart() {
        Some((title, spec)) => (title, Some(spec)),
        None => (t!("chart-trend-title-none"), None),
    };

    rsx! {
        ChartPanel { title: title.clone(),
            ChartBody { spec, label: title }
        }
    }
}

/// Most used languages; clicking a slice or legend entry selects it.
#[component]
pub fn LanguageDonut() -> Element {
    let data = use_data();
    let store = use_selection_store();

    let spec = use_memo(move || {
        let state = data.read();
        let dataset = state.data.as_ref()?;
        let selection = store.selection.read();
        let counts = count_by(
            selection.without(Dimension::Language).filter(dataset),
            fields::LANGUAGE,
            Missing::Drop,
        );
        let slices = collapse_small(&counts, DONUT_OTHERS_THRESHOLD);
        Some(ChartSpec::donut(slices, selection.language.clone(), &[OTHERS_LABEL]))
    });

    let title = match store.selection.read().country.clone() {
        Some(country) => t!("chart-languages-title-country", country = country),
        None => t!("chart-languages-title-global"),
    };

    let on_pick = move |pick: Pick| {
        if let Pick::Category(language) = pick {
            store.dispatch(SelectionAction::SelectLanguage(language));
        }
    };

    rsx! {
        ChartPanel { title: title.clone(),
            ChartBody { spec: spec(), width: 520, height: 320, on_pick, label: title }
        }
    }
}

/// Distribution of repository counts over fixed bins.
#[component]
pub fn RepoHistogram() -> Element {
    let data = use_data();
    let store = use_selection_store();
    let language = i18n::use_language();

    let spec = use_memo(move || {
        i18n::track(language);
        let state = data.read();
        let dataset = state.data.as_ref()?;
        let selection = store.selection.read();
        let bins = histogram(selection.filter(dataset), fields::REPOSITORIES, &Bins::repositories());
        let labels = Labels {
            series: t!("chart-count"),
            category: String::new(),
            x_axis: Some(t!("chart-repos-x")),
            y_axis: Some(t!("chart-repos-y")),
        };
        Some(ChartSpec::histogram(&bins, labels))
    });

    rsx! {
        ChartPanel { title: t!("chart-repos-title"),
            ChartBody { spec: spec(), label: t!("chart-repos-title") }
        }
    }
}

/// Topic word cloud. `compact` keeps fewer words for small panels.
#[component]
pub fn TopicCloud(#[props(default)] compact: bool) -> Element {
    let data = use_data();
    let store = use_selection_store();
    let language = i18n::use_language();
    let limit = if compact {
        WORD_CLOUD_COMPACT_LIMIT
    } else {
        WORD_CLOUD_LIMIT
    };

    let spec = use_memo(use_reactive((&limit,), move |(limit,)| {
        i18n::track(language);
        let state = data.read();
        let dataset = state.data.as_ref()?;
        let selection = store.selection.read();
        let words = topic_frequencies(selection.filter(dataset), fields::TOPICS, limit);
        let labels = Labels {
            series: t!("chart-topics-frequency"),
            ..Labels::default()
        };
        Some(ChartSpec::word_cloud(&words, labels))
    }));

    rsx! {
        ChartPanel { title: t!("chart-topics-title"),
            ChartBody { spec: spec(), width: 640, height: 360, label: t!("chart-topics-title") }
        }
    }
}

/// Users per country on a world map; clicking a country selects it and a
/// second click clears it.
#[component]
pub fn CountryMap() -> Element {
    let data = use_data();
    let atlas = use_world_atlas();
    let store = use_selection_store();
    let language = i18n::use_language();

    let spec = use_memo(move || {
        i18n::track(language);
        let world = atlas.read().data.clone()?;
        let state = data.read();
        let dataset = state.data.as_ref()?;
        let selection = store.selection.read();
        let counts = country_counts(selection.without(Dimension::Country).filter(dataset));
        let labels = Labels {
            series: t!("chart-map-legend"),
            ..Labels::default()
        };
        Some(ChartSpec::choropleth(world, counts, selection.country.clone(), labels))
    });

    let on_pick = move |pick: Pick| {
        if let Pick::Country(country) = pick {
            store.dispatch(SelectionAction::SelectCountry(country));
        }
    };

    let atlas_state = atlas.read();
    let body = if let Some(err) = &atlas_state.error {
        rsx! {
            StatusMessage { text: t!("state-error", message = err.to_string()), error: true }
        }
    } else if atlas_state.data.is_none() {
        rsx! {
            StatusMessage { text: t!("map-loading") }
        }
    } else {
        rsx! {
            ChartBody {
                spec: spec(),
                width: MAP_SIZE.width as u32,
                height: MAP_SIZE.height as u32,
                on_pick,
                label: t!("chart-map-title"),
            }
        }
    };

    rsx! {
        ChartPanel { title: t!("chart-map-title"), wide: true, {body} }
    }
}

/// Record counts per category of `field` over the whole dataset.
#[component]
pub fn CategoryBarChart(field: String, title: String) -> Element {
    let data = use_data();
    let language = i18n::use_language();

    let spec = use_memo(use_reactive((&field,), move |(field,)| {
        i18n::track(language);
        let state = data.read();
        let dataset = state.data.as_ref()?;
        let counts = count_by(dataset.iter(), &field, Missing::Drop);
        let labels = Labels {
            series: t!("chart-count"),
            ..Labels::default()
        };
        Some(ChartSpec::bar(&counts, labels))
    }));

    rsx! {
        ChartPanel { title: title.clone(),
            ChartBody { spec: spec(), label: title }
        }
    }
}

/// Two numeric fields plotted against each other.
#[component]
pub fn ScatterPlot(x_field: String, y_field: String, x_label: String, y_label: String, title: String) -> Element {
    let data = use_data();

    let spec = use_memo(use_reactive(
        (&x_field, &y_field, &x_label, &y_label),
        move |(x_field, y_field, x_label, y_label)| {
            let state = data.read();
            let dataset = state.data.as_ref()?;
            let points = scatter_points(dataset.iter(), &x_field, &y_field);
            let labels = Labels {
                x_axis: Some(x_label),
                y_axis: Some(y_label),
                ..Labels::default()
            };
            Some(ChartSpec::scatter(points, labels))
        },
    ));

    rsx! {
        ChartPanel { title: title.clone(),
            ChartBody { spec: spec(), width: 560, height: 360, label: title }
        }
    }
}
