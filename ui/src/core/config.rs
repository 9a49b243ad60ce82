//! Build-time configuration. Both URLs can be overridden through environment
//! variables when compiling (`GITSCOPE_API_URL=... dx build`).

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_ATLAS_URL: &str = "https://cdn.jsdelivr.net/npm/world-atlas@2/countries-110m.json";

pub fn api_base_url() -> &'static str {
    option_env!("GITSCOPE_API_URL").unwrap_or(DEFAULT_API_URL)
}

pub fn atlas_url() -> &'static str {
    option_env!("GITSCOPE_ATLAS_URL").unwrap_or(DEFAULT_ATLAS_URL)
}
