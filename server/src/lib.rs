//! Local dataset server for GitScope. Loads one dataset file at startup and
//! serves it read-only at `GET /api/data`.

pub mod config;
pub mod loader;
mod routes;
mod state;

pub use routes::router;
pub use state::{AppState, SharedState};
