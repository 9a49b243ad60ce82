//! Pure reductions from records to chart-ready summaries. Every function
//! accepts an empty input and returns an empty summary.
//!
//! Inputs are any iterator of record references, so callers can pass a whole
//! dataset (`&dataset[..]`) or a filtered view (`&filtered`) without copying.

mod categorical;
mod geo;
mod histogram;
mod scatter;
mod timeline;
mod topics;

pub use categorical::{
    collapse_small, count_by, hireable_share, hireable_split, Missing, DONUT_OTHERS_THRESHOLD,
    HIREABLE_LABEL, NOT_HIREABLE_LABEL, OTHERS_LABEL,
};
pub use geo::{country_counts, display_country, map_country};
pub use histogram::{histogram, Bin, Bins, REPO_BINS};
pub use scatter::{scatter_points, ScatterPoint};
pub use timeline::{cumulative_by_year, language_trend, parse_year, yearly_counts, LanguageTrend};
pub use topics::{topic_frequencies, WordCount, WORD_CLOUD_COMPACT_LIMIT, WORD_CLOUD_LIMIT};
