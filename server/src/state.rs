use std::sync::Arc;

use api::Dataset;

pub type SharedState = Arc<AppState>;

/// Everything a request needs. The dataset is loaded once and never mutated.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: Dataset,
    pub message: String,
}

impl AppState {
    pub fn new(dataset: Dataset, message: impl Into<String>) -> Self {
        Self {
            dataset,
            message: message.into(),
        }
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}
