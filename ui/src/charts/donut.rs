//! Donut chart with a clickable legend.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::color;
use super::geometry::{Path, Point, Rect};
use super::hit::{HitMap, HitShape, Pick};
use super::paint::{Align, Painter, Stroke, TextStyle};
use super::spec::DonutSpec;

const CUTOUT: f64 = 0.5;
/// How far the selected slice is pulled out of the ring.
const SELECTED_OFFSET: f64 = 8.0;
const LEGEND_ROW: f64 = 20.0;
const LEGEND_SWATCH: f64 = 12.0;

pub fn paint(painter: &mut dyn Painter, spec: &DonutSpec) -> HitMap {
    let mut hits = HitMap::new();
    let size = painter.size();
    let total = spec.total() as f64;
    if total <= 0.0 {
        return hits;
    }

    // Ring on the left two thirds, legend in the remaining column.
    let legend_x = size.width * 0.66;
    let center = Point::new(legend_x / 2.0, size.height / 2.0);
    let outer = (legend_x.min(size.height) / 2.0 - SELECTED_OFFSET - 4.0).max(10.0);
    let inner = outer * CUTOUT;

    let mut angle = -FRAC_PI_2;
    for (index, (name, count)) in spec.slices.iter().enumerate() {
        let sweep = *count as f64 / total * TAU;
        let (start, end) = (angle, angle + sweep);
        angle = end;

        let selected = spec.selected.as_deref() == Some(name.as_str());
        let shift = if selected { SELECTED_OFFSET } else { 0.0 };
        let middle = (start + end) / 2.0;
        let origin = Point::new(center.x + shift * middle.cos(), center.y + shift * middle.sin());

        let fill = color::categorical(index);
        let slice = sector_path(origin, inner, outer, start, end);
        painter.fill_path(&slice, fill);
        painter.stroke_path(&slice, &Stroke::new(color::AXIS_TEXT, if selected { 2.0 } else { 1.0 }));

        if let Some(label) = spec.slice_label(index) {
            let radius = (inner + outer) / 2.0;
            painter.text(
                &label,
                Point::new(origin.x + radius * middle.cos(), origin.y + radius * middle.sin()),
                &TextStyle::new(11.0, "#ffffff").align(Align::Center).bold(),
            );
        }

        let pick = pick_for(spec, name);
        hits.push(
            HitShape::Sector {
                center: origin,
                inner,
                outer,
                start,
                end,
            },
            pick.clone(),
            format!("{name}: {count}"),
        );

        let row = Rect::new(legend_x, 16.0 + LEGEND_ROW * index as f64, size.width - legend_x, LEGEND_ROW);
        if row.bottom() > size.height {
            continue;
        }
        painter.fill_rect(
            Rect::new(row.x, row.center().y - LEGEND_SWATCH / 2.0, LEGEND_SWATCH, LEGEND_SWATCH),
            fill,
        );
        let mut style = TextStyle::new(12.0, color::AXIS_TEXT);
        if selected {
            style = style.bold();
        }
        painter.text(name, Point::new(row.x + LEGEND_SWATCH + 6.0, row.center().y), &style);
        hits.push(HitShape::Rect(row), pick, format!("{name}: {count}"));
    }

    hits
}

fn pick_for(spec: &DonutSpec, name: &str) -> Option<Pick> {
    (!spec.inert.iter().any(|inert| inert == name)).then(|| Pick::Category(name.to_string()))
}

fn sector_path(center: Point, inner: f64, outer: f64, start: f64, end: f64) -> Path {
    Path::new()
        .move_to(Point::new(center.x + outer * start.cos(), center.y + outer * start.sin()))
        .arc(center, outer, start, end, false)
        .line_to(Point::new(center.x + inner * end.cos(), center.y + inner * end.sin()))
        .arc(center, inner, end, start, true)
        .close()
}
