//! Remote documents shared through context: the dataset and the world
//! geometry. Each is fetched at most once per page.

use std::cell::Cell;
use std::rc::Rc;

use api::{ApiError, DataClient, Dataset, WorldAtlas};
use dioxus::prelude::*;

use crate::core::config;

/// State of one remote document.
#[derive(Debug, Clone, PartialEq)]
pub struct Remote<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<ApiError>,
}

pub type DataState = Remote<Dataset>;
pub type AtlasState = Remote<WorldAtlas>;

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            error: None,
        }
    }
}

impl<T> Remote<T> {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    pub fn ready(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    pub fn failed(error: ApiError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::ready(data),
            Err(error) => Self::failed(error),
        }
    }

    /// Nothing requested yet.
    pub fn is_idle(&self) -> bool {
        self.data.is_none() && !self.is_loading && self.error.is_none()
    }
}

#[derive(Clone)]
struct AtlasSource {
    state: Signal<AtlasState>,
    url: String,
    requested: Rc<Cell<bool>>,
}

/// Loads the dataset once and shares it with every descendant.
///
/// An injected `dataset` skips the network entirely; so does an injected
/// `atlas` for the map geometry.
#[component]
pub fn DataProvider(
    #[props(default)] dataset: Option<Dataset>,
    #[props(default)] atlas: Option<WorldAtlas>,
    #[props(default)] base_url: Option<String>,
    children: Element,
) -> Element {
    let base_url = base_url.unwrap_or_else(|| config::api_base_url().to_string());

    let mut state = use_context_provider(|| {
        Signal::new(match &dataset {
            Some(dataset) => DataState::ready(dataset.clone()),
            None => DataState::loading(),
        })
    });
    let atlas_state = use_signal(|| atlas.clone().map(AtlasState::ready).unwrap_or_default());
    use_context_provider(|| AtlasSource {
        state: atlas_state,
        url: config::atlas_url().to_string(),
        requested: Rc::new(Cell::new(atlas.is_some())),
    });

    use_hook(|| {
        if dataset.is_some() {
            tracing::debug!("dataset injected, skipping fetch");
            return;
        }
        let client = DataClient::new(base_url.clone());
        spawn(async move {
            tracing::info!(url = %client.data_url(), "fetching dataset");
            let result = client.fetch_dataset().await;
            if let Err(err) = &result {
                tracing::error!(%err, "dataset fetch failed");
            }
            state.set(DataState::from_result(result));
        });
    });

    rsx! { {children} }
}

pub fn use_data() -> Signal<DataState> {
    use_context::<Signal<DataState>>()
}

/// World geometry for the choropleth, requested on first use.
pub fn use_world_atlas() -> Signal<AtlasState> {
    let source = use_context::<AtlasSource>();
    let state = source.state;
    use_hook(move || {
        if source.requested.replace(true) {
            return;
        }
        let mut state = source.state;
        let url = source.url;
        // Root scope task; it survives the map unmounting.
        spawn_forever(async move {
            state.set(AtlasState::loading());
            tracing::info!(%url, "fetching world atlas");
            let result = DataClient::new(config::api_base_url()).fetch_world(&url).await;
            if let Err(err) = &result {
                tracing::error!(%err, "world atlas fetch failed");
            }
            state.set(AtlasState::from_result(result));
        });
    });
    state
}
