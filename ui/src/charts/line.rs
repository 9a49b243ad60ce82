//! Line charts: cumulative growth and yearly trends.

use super::color;
use super::frame::{category_labels, format_value, value_frame};
use super::geometry::{Path, Point};
use super::hit::{HitMap, HitShape, Pick};
use super::paint::{Painter, Stroke};
use super::spec::LineSpec;

pub fn paint(painter: &mut dyn Painter, spec: &LineSpec) -> HitMap {
    let mut hits = HitMap::new();
    let max = spec.points.iter().map(|(_, value)| *value).fold(0.0, f64::max);
    let frame = value_frame(painter, 0.0, max, spec.compact, &spec.labels);
    let plot = frame.plot;

    let count = spec.points.len();
    let slot = if count > 1 {
        plot.width / (count - 1) as f64
    } else {
        plot.width
    };
    let x_at = |index: usize| {
        if count > 1 {
            plot.x + slot * index as f64
        } else {
            plot.center().x
        }
    };

    let points: Vec<Point> = spec
        .points
        .iter()
        .enumerate()
        .map(|(index, (_, value))| Point::new(x_at(index), frame.y.map(*value)))
        .collect();

    let years: Vec<String> = spec.points.iter().map(|(year, _)| year.to_string()).collect();
    let centers: Vec<(f64, &str)> = points
        .iter()
        .zip(&years)
        .map(|(point, year)| (point.x, year.as_str()))
        .collect();
    category_labels(painter, &plot, &centers, slot);

    if !points.is_empty() {
        painter.stroke_path(&spline(&points, spec.tension), &Stroke::new(spec.color, 2.0));
    }

    for (point, (year, _)) in points.iter().zip(&spec.points) {
        let radius = spec.radius_at(*year);
        if radius > 0.0 {
            let marker = Path::circle(*point, radius);
            painter.fill_path(&marker, spec.color);
            painter.stroke_path(&marker, &Stroke::new(color::AXIS_TEXT, 1.0));
        }
    }

    // Index-mode tooltips: the whole column around a point answers.
    for (index, (year, value)) in spec.points.iter().enumerate() {
        let center = x_at(index);
        let half = if count > 1 { slot / 2.0 } else { plot.width / 2.0 };
        let tooltip = format!(
            "{}: {year}\n{}: {}",
            spec.labels.category,
            spec.labels.series,
            format_value(*value, spec.compact)
        );
        hits.push(
            HitShape::Column {
                left: center - half,
                right: center + half,
            },
            spec.pickable.then_some(Pick::Year(*year)),
            tooltip,
        );
    }

    hits
}

/// Smooth curve through `points`. Each interior point gets control points
/// along the line joining its neighbours, scaled by `tension` and split by
/// the relative distance to each neighbour.
pub fn spline(points: &[Point], tension: f64) -> Path {
    let Some(first) = points.first() else {
        return Path::new();
    };
    if tension <= 0.0 || points.len() < 3 {
        return Path::polyline(points);
    }

    let controls: Vec<(Point, Point)> = (0..points.len())
        .map(|i| {
            let current = points[i];
            let previous = if i == 0 { current } else { points[i - 1] };
            let next = points.get(i + 1).copied().unwrap_or(current);
            control_points(previous, current, next, tension)
        })
        .collect();

    let mut path = Path::new().move_to(*first);
    for i in 1..points.len() {
        path = path.cubic_to(controls[i - 1].1, controls[i].0, points[i]);
    }
    path
}

fn control_points(previous: Point, current: Point, next: Point, tension: f64) -> (Point, Point) {
    let d01 = previous.distance(current);
    let d12 = current.distance(next);
    let total = d01 + d12;
    let (s01, s12) = if total > 0.0 {
        (d01 / total, d12 / total)
    } else {
        (0.0, 0.0)
    };
    let fa = tension * s01;
    let fb = tension * s12;
    let dx = next.x - previous.x;
    let dy = next.y - previous.y;
    (
        Point::new(current.x - fa * dx, current.y - fa * dy),
        Point::new(current.x + fb * dx, current.y + fb * dy),
    )
}
