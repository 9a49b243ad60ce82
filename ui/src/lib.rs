//! Shared UI crate for GitScope: data loading, aggregation, chart rendering
//! and the dashboards built from them.

pub mod aggregate;
pub mod charts;
pub mod components;
pub mod core;
pub mod dashboard;
pub mod data;
pub mod i18n;
pub mod state;

pub use dashboard::{SamplesDashboard, UsersDashboard};
pub use data::{use_data, DataProvider};

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
