//! Column names shared by the client, the server and the aggregators.

pub const COUNTRY: &str = "Country";
pub const CREATED_AT: &str = "Account Created At";
pub const LANGUAGE: &str = "Most Used Language";
pub const HIREABLE: &str = "Hireable";
pub const REPOSITORIES: &str = "Repositories Count";
pub const TOPICS: &str = "Unique Topics";

// Measurement datasets (Iris layout).
pub const SPECIES: &str = "Species";
pub const SEPAL_LENGTH: &str = "SepalLengthCm";
pub const SEPAL_WIDTH: &str = "SepalWidthCm";
