//! Declarative description of every chart kind.
//!
//! A [`ChartSpec`] is built by a pure constructor from an aggregate and the
//! bits of selection state the chart highlights. Rendering only ever sees the
//! spec, so charts re-render exactly when their spec changes.

use std::collections::BTreeMap;

use api::WorldAtlas;

use crate::aggregate::{ScatterPoint, WordCount};
use crate::core::format::format_share;

use super::color;

/// Selected-year marker radius on the growth line.
pub const SELECTED_POINT_RADIUS: f64 = 6.0;
pub const LINE_TENSION: f64 = 0.4;
pub const MAX_Y_TICKS: usize = 6;
/// Donut slices at or below this share of the total are left unlabelled.
pub const SLICE_LABEL_MIN_SHARE: f64 = 0.05;

/// Localized strings a chart draws or shows in tooltips.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Labels {
    /// Series name, used in tooltips (`"Total Users"`).
    pub series: String,
    /// Prefix for the category in tooltips (`"Year"`).
    pub category: String,
    pub x_axis: Option<String>,
    pub y_axis: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSpec {
    pub points: Vec<(i32, f64)>,
    pub highlight: Option<i32>,
    /// Radius of points that are not highlighted.
    pub point_radius: f64,
    pub tension: f64,
    /// `K`/`M` suffixes on ticks and tooltips.
    pub compact: bool,
    /// Clicking a year selects it.
    pub pickable: bool,
    pub color: &'static str,
    pub labels: Labels,
}

impl LineSpec {
    pub fn radius_at(&self, year: i32) -> f64 {
        if self.highlight == Some(year) {
            SELECTED_POINT_RADIUS
        } else {
            self.point_radius
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    pub bars: Vec<(String, f64)>,
    pub color: &'static str,
    pub pickable: bool,
    pub labels: Labels,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSpec {
    pub slices: Vec<(String, usize)>,
    pub selected: Option<String>,
    /// Slices that cannot become a selection ("Others").
    pub inert: Vec<String>,
}

impl DonutSpec {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|(_, count)| count).sum()
    }

    /// `"Go (42.0%)"` for slices above the label threshold.
    pub fn slice_label(&self, index: usize) -> Option<String> {
        let (name, count) = self.slices.get(index)?;
        let total = self.total() as f64;
        let share = *count as f64 / total;
        (total > 0.0 && share > SLICE_LABEL_MIN_SHARE)
            .then(|| format!("{name} ({}%)", format_share(*count as f64, total)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CloudWord {
    pub text: String,
    pub value: usize,
    pub font_px: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CloudSpec {
    pub words: Vec<CloudWord>,
    /// Seeds rotation choices so a word list always lays out the same way.
    pub seed: u64,
    pub labels: Labels,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapSpec {
    pub atlas: WorldAtlas,
    pub counts: BTreeMap<String, usize>,
    pub selected: Option<String>,
    pub labels: Labels,
}

impl MapSpec {
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0).max(1)
    }

    pub fn fill_for(&self, feature: &str) -> String {
        match self.counts.get(feature) {
            Some(&count) if count > 0 => color::sequential_blue(count as f64 / self.max_count() as f64),
            _ => color::NO_DATA.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    pub points: Vec<ScatterPoint>,
    pub labels: Labels,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Line(LineSpec),
    Trend(LineSpec),
    Bar(BarSpec),
    Histogram(BarSpec),
    Donut(DonutSpec),
    WordCloud(CloudSpec),
    Choropleth(MapSpec),
    Scatter(ScatterSpec),
}

impl ChartSpec {
    /// Cumulative account growth; the selected year gets a visible marker.
    pub fn growth(series: &[(i32, usize)], selected_year: Option<i32>, labels: Labels) -> Self {
        ChartSpec::Line(LineSpec {
            points: series.iter().map(|&(year, total)| (year, total as f64)).collect(),
            highlight: selected_year,
            point_radius: 0.0,
            tension: LINE_TENSION,
            compact: true,
            pickable: true,
            color: color::LINE,
            labels,
        })
    }

    pub fn trend(series: &[(i32, usize)], labels: Labels) -> Self {
        ChartSpec::Trend(LineSpec {
            points: series.iter().map(|&(year, count)| (year, count as f64)).collect(),
            highlight: None,
            point_radius: 3.0,
            tension: LINE_TENSION,
            compact: false,
            pickable: false,
            color: color::TEAL,
            labels,
        })
    }

    pub fn bar(counts: &BTreeMap<String, usize>, labels: Labels) -> Self {
        ChartSpec::Bar(BarSpec {
            bars: counts.iter().map(|(name, &count)| (name.clone(), count as f64)).collect(),
            color: color::TEAL_FILL,
            pickable: false,
            labels,
        })
    }

    pub fn histogram(bins: &[(String, usize)], labels: Labels) -> Self {
        ChartSpec::Histogram(BarSpec {
            bars: bins.iter().map(|(label, count)| (label.clone(), *count as f64)).collect(),
            color: color::TEAL_FILL,
            pickable: false,
            labels,
        })
    }

    pub fn donut(slices: Vec<(String, usize)>, selected: Option<String>, inert: &[&str]) -> Self {
        ChartSpec::Donut(DonutSpec {
            slices,
            selected,
            inert: inert.iter().map(|name| name.to_string()).collect(),
        })
    }

    /// Font sizes scale linearly from 25px (rarest) to 75px (most frequent);
    /// colours follow the same normalised frequency.
    pub fn word_cloud(words: &[WordCount], labels: Labels) -> Self {
        let min = words.iter().map(|w| w.value).min().unwrap_or(0) as f64;
        let max = words.iter().map(|w| w.value).max().unwrap_or(0) as f64;
        let normalise = |value: usize| {
            if max > min {
                (value as f64 - min) / (max - min)
            } else {
                1.0
            }
        };

        let words: Vec<CloudWord> = words
            .iter()
            .map(|word| {
                let t = normalise(word.value);
                CloudWord {
                    text: word.text.clone(),
                    value: word.value,
                    font_px: t * 50.0 + 25.0,
                    color: color::word_color(t * 100.0),
                }
            })
            .collect();

        ChartSpec::WordCloud(CloudSpec {
            seed: word_seed(&words),
            words,
            labels,
        })
    }

    pub fn choropleth(
        atlas: WorldAtlas,
        counts: BTreeMap<String, usize>,
        selected: Option<String>,
        labels: Labels,
    ) -> Self {
        ChartSpec::Choropleth(MapSpec {
            atlas,
            counts,
            selected,
            labels,
        })
    }

    pub fn scatter(points: Vec<ScatterPoint>, labels: Labels) -> Self {
        ChartSpec::Scatter(ScatterSpec { points, labels })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ChartSpec::Line(_) => "line",
            ChartSpec::Trend(_) => "trend",
            ChartSpec::Bar(_) => "bar",
            ChartSpec::Histogram(_) => "histogram",
            ChartSpec::Donut(_) => "donut",
            ChartSpec::WordCloud(_) => "word-cloud",
            ChartSpec::Choropleth(_) => "choropleth",
            ChartSpec::Scatter(_) => "scatter",
        }
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        match self {
            ChartSpec::Line(line) | ChartSpec::Trend(line) => line.points.is_empty(),
            ChartSpec::Bar(bar) | ChartSpec::Histogram(bar) => bar.bars.is_empty(),
            ChartSpec::Donut(donut) => donut.total() == 0,
            ChartSpec::WordCloud(cloud) => cloud.words.is_empty(),
            ChartSpec::Choropleth(map) => map.atlas.is_empty(),
            ChartSpec::Scatter(scatter) => scatter.points.is_empty(),
        }
    }
}

/// FNV-1a over the word texts.
fn word_seed(words: &[CloudWord]) -> u64 {
    words
        .iter()
        .flat_map(|word| word.text.bytes().chain(std::iter::once(0)))
        .fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
            (hash ^ byte as u64).wrapping_mul(0x0100_0000_01b3)
        })
}
