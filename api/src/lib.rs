//! Typed access to the GitScope dataset: record model, wire bodies, the HTTP
//! data client and the world geometry decoder used by the choropleth.

mod client;
mod dataset;
mod error;
pub mod fields;
mod record;
pub mod topo;

pub use client::DataClient;
pub use dataset::{decode_dataset, Dataset, DatasetEnvelope};
pub use error::ApiError;
pub use record::Record;
pub use topo::{Feature, Topology, WorldAtlas};
