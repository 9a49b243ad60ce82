//! Dashboard building blocks: panels, charts, cards and the navbar.

pub mod app_navbar;
pub mod cards;
pub mod charts;
pub mod filters;
pub mod panel;

pub use app_navbar::{register_nav, AppNavbar, NavBuilder};
pub use cards::{HireableCard, TotalsCard};
pub use charts::{
    CategoryBarChart, CountryMap, GrowthChart, LanguageDonut, LanguageTrendChart, RepoHistogram,
    ScatterPlot, TopicCloud,
};
pub use filters::FilterBar;
pub use panel::{ChartBody, ChartPanel, StatusMessage};
