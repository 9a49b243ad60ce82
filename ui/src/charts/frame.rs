//! Shared cartesian frame: plot area, value axis, grid and axis titles.

use std::f64::consts::FRAC_PI_2;

use super::color;
use super::geometry::{Insets, Path, Point, Rect};
use super::paint::{Align, Painter, Stroke, TextStyle};
use super::scale::{nice_ticks, LinearScale};
use super::spec::{Labels, MAX_Y_TICKS};
use crate::core::format::{format_compact, format_number};

pub const TICK_FONT: f64 = 11.0;
pub const TITLE_FONT: f64 = 12.0;

pub struct Frame {
    pub plot: Rect,
    pub y: LinearScale,
}

pub fn tick_style() -> TextStyle {
    TextStyle::new(TICK_FONT, color::AXIS_TEXT)
}

pub fn format_value(value: f64, compact: bool) -> String {
    if compact {
        format_compact(value)
    } else {
        format_number(value)
    }
}

/// Lay out the plot area and paint the value axis for values in `[min, max]`.
pub fn value_frame(painter: &mut dyn Painter, min: f64, max: f64, compact: bool, labels: &Labels) -> Frame {
    let size = painter.size();
    let insets = Insets {
        top: 16.0,
        right: 16.0,
        bottom: if labels.x_axis.is_some() { 52.0 } else { 32.0 },
        left: if labels.y_axis.is_some() { 64.0 } else { 48.0 },
    };
    let plot = Rect::new(0.0, 0.0, size.width, size.height).inset(insets);

    let ticks = nice_ticks(min.min(0.0), max, MAX_Y_TICKS);
    let (low, high) = match (ticks.first(), ticks.last()) {
        (Some(&low), Some(&high)) => (low, high),
        _ => (0.0, 1.0),
    };
    let y = LinearScale::new((low, high), (plot.bottom(), plot.y));

    let grid = Stroke::new(color::GRID, 1.0);
    let style = tick_style().align(Align::Right);
    for tick in &ticks {
        let at = y.map(*tick);
        painter.stroke_path(
            &Path::polyline(&[Point::new(plot.x, at), Point::new(plot.right(), at)]),
            &grid,
        );
        painter.text(&format_value(*tick, compact), Point::new(plot.x - 6.0, at), &style);
    }

    let title = TextStyle::new(TITLE_FONT, color::AXIS_TEXT).align(Align::Center);
    if let Some(x_title) = &labels.x_axis {
        painter.text(x_title, Point::new(plot.center().x, size.height - 10.0), &title);
    }
    if let Some(y_title) = &labels.y_axis {
        painter.text(
            y_title,
            Point::new(14.0, plot.center().y),
            &title.clone().rotated(-FRAC_PI_2),
        );
    }

    Frame { plot, y }
}

/// Category labels under the plot; rotated when they would overlap.
pub fn category_labels(painter: &mut dyn Painter, plot: &Rect, centers: &[(f64, &str)], slot: f64) {
    let style = tick_style().align(Align::Center);
    let widest = centers
        .iter()
        .map(|(_, label)| painter.measure_text(label, &style))
        .fold(0.0, f64::max);

    if widest + 4.0 <= slot {
        for (x, label) in centers {
            painter.text(label, Point::new(*x, plot.bottom() + 14.0), &style);
        }
    } else {
        let rotated = tick_style().align(Align::Right).rotated(-FRAC_PI_2 / 2.0);
        for (x, label) in centers {
            painter.text(label, Point::new(*x, plot.bottom() + 10.0), &rotated);
        }
    }
}
