use super::color;
use super::frame::{tick_style, value_frame};
use super::geometry::{Path, Point};
use super::hit::{HitMap, HitShape};
use super::paint::{Align, Painter};
use super::scale::{nice_ticks, LinearScale};
use super::spec::ScatterSpec;
use crate::core::format::format_number;

const DOT_RADIUS: f64 = 4.0;
const X_TICKS: usize = 8;

pub fn paint(painter: &mut dyn Painter, spec: &ScatterSpec) -> HitMap {
    let mut hits = HitMap::new();
    if spec.points.is_empty() {
        return hits;
    }

    let (x_min, x_max) = extent(spec.points.iter().map(|p| p.x));
    let (y_min, y_max) = extent(spec.points.iter().map(|p| p.y));
    let frame = value_frame(painter, y_min, y_max, false, &spec.labels);
    let plot = frame.plot;

    let ticks = nice_ticks(x_min, x_max, X_TICKS);
    let domain = match (ticks.first(), ticks.last()) {
        (Some(&low), Some(&high)) => (low, high),
        _ => (x_min, x_max),
    };
    let x = LinearScale::new(domain, (plot.x, plot.right()));

    let style = tick_style().align(Align::Center);
    for tick in &ticks {
        painter.text(&format_number(*tick), Point::new(x.map(*tick), plot.bottom() + 14.0), &style);
    }

    for point in &spec.points {
        let center = Point::new(x.map(point.x), frame.y.map(point.y));
        painter.fill_path(&Path::circle(center, DOT_RADIUS), color::SCATTER);

        let x_name = spec.labels.x_axis.as_deref().unwrap_or("x");
        let y_name = spec.labels.y_axis.as_deref().unwrap_or("y");
        hits.push(
            HitShape::Circle {
                center,
                radius: DOT_RADIUS + 2.0,
            },
            None,
            format!(
                "{x_name}: {}\n{y_name}: {}",
                format_number(point.x),
                format_number(point.y)
            ),
        );
    }

    hits
}

/// Min and max, ignoring non-finite values; `(0, 0)` when there are none.
fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values
        .filter(|v| v.is_finite())
        .fold(None, |range: Option<(f64, f64)>, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((0.0, 0.0))
}
