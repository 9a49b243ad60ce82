//! Chart rendering: declarative specs, per-kind painters, hit testing and
//! the canvas component that hosts them.

pub mod bar;
mod canvas;
pub mod cloud;
pub mod color;
pub mod donut;
mod frame;
pub mod geometry;
pub mod handle;
pub mod hit;
pub mod line;
pub mod map;
pub mod paint;
pub mod scale;
pub mod scatter;
pub mod spec;

pub use canvas::ChartCanvas;
pub use handle::{ChartHandle, RenderError, Surface};
pub use hit::{HitMap, Pick};
pub use paint::{Painter, Recording};
pub use spec::{ChartSpec, Labels};

/// Paint `spec` and return its interactive regions.
pub fn render(painter: &mut dyn Painter, spec: &ChartSpec) -> HitMap {
    match spec {
        ChartSpec::Line(line) | ChartSpec::Trend(line) => line::paint(painter, line),
        ChartSpec::Bar(bar) | ChartSpec::Histogram(bar) => bar::paint(painter, bar),
        ChartSpec::Donut(donut) => donut::paint(painter, donut),
        ChartSpec::WordCloud(cloud) => cloud::paint(painter, cloud),
        ChartSpec::Choropleth(map) => map::paint(painter, map),
        ChartSpec::Scatter(scatter) => scatter::paint(painter, scatter),
    }
}
