//! Choropleth world map on the Natural Earth projection.

use api::topo::Ring;

use super::color;
use super::geometry::{Path, Point, Rect, Size};
use super::hit::{HitMap, HitShape, Pick};
use super::paint::{Align, Painter, Stroke, TextStyle};
use super::spec::MapSpec;
use crate::aggregate::display_country;

/// Reference canvas the projection scale is tuned for.
pub const MAP_SIZE: Size = Size::new(800.0, 500.0);
const BASE_SCALE: f64 = 150.0;
const LEGEND_WIDTH: f64 = 300.0;
const LEGEND_HEIGHT: f64 = 10.0;
const LEGEND_STOPS: usize = 9;

/// Natural Earth I projection of `[lon, lat]` in degrees, unscaled.
pub fn natural_earth(lon: f64, lat: f64) -> (f64, f64) {
    let lambda = lon.to_radians();
    let phi = lat.to_radians();
    let phi2 = phi * phi;
    let phi4 = phi2 * phi2;
    let x = lambda
        * (0.8707 - 0.131979 * phi2 + phi4 * (-0.013791 + phi4 * (0.003971 * phi2 - 0.001529 * phi4)));
    let y = phi
        * (1.007226
            + phi2 * (0.015085 + phi4 * (-0.044475 + 0.028874 * phi2 - 0.005916 * phi4)));
    (x, y)
}

/// Projection fitted to a canvas: scaled with the canvas and centred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub scale: f64,
    pub translate: Point,
}

impl Projection {
    pub fn fit(size: Size) -> Self {
        let factor = (size.width / MAP_SIZE.width).min(size.height / MAP_SIZE.height);
        Self {
            scale: BASE_SCALE * factor,
            translate: Point::new(size.width / 2.0, size.height / 2.0),
        }
    }

    pub fn project(&self, [lon, lat]: [f64; 2]) -> Point {
        let (x, y) = natural_earth(lon, lat);
        Point::new(self.translate.x + x * self.scale, self.translate.y - y * self.scale)
    }

    fn ring(&self, ring: &Ring) -> Vec<Point> {
        ring.iter().map(|position| self.project(*position)).collect()
    }
}

pub fn paint(painter: &mut dyn Painter, spec: &MapSpec) -> HitMap {
    let mut hits = HitMap::new();
    let size = painter.size();
    let projection = Projection::fit(size);

    for feature in spec.atlas.iter() {
        let rings: Vec<Vec<Point>> = feature
            .polygons
            .iter()
            .flatten()
            .map(|ring| projection.ring(ring))
            .filter(|ring| ring.len() >= 3)
            .collect();
        if rings.is_empty() {
            continue;
        }

        let mut outline = Path::new();
        for ring in &rings {
            outline.extend(Path::polyline(ring).close());
        }

        let selected = spec
            .selected
            .as_deref()
            .is_some_and(|country| display_country(&feature.name) == country);
        painter.fill_path(&outline, &spec.fill_for(&feature.name));
        painter.stroke_path(&outline, &Stroke::new(color::BORDER, if selected { 2.0 } else { 0.5 }));

        let count = spec.counts.get(&feature.name).copied().unwrap_or(0);
        hits.push(
            HitShape::Polygon(rings),
            Some(Pick::Country(display_country(&feature.name).to_string())),
            format!("{}\n{}: {count}", feature.name, spec.labels.series),
        );
    }

    paint_legend(painter, spec, size);
    hits
}

fn paint_legend(painter: &mut dyn Painter, spec: &MapSpec, size: Size) {
    let bar = Rect::new(
        size.width - LEGEND_WIDTH - 20.0,
        size.height - 40.0,
        LEGEND_WIDTH,
        LEGEND_HEIGHT,
    );
    let stops: Vec<(f64, String)> = (0..LEGEND_STOPS)
        .map(|i| {
            let t = i as f64 / (LEGEND_STOPS - 1) as f64;
            (t, color::sequential_blue(t))
        })
        .collect();
    painter.fill_gradient(bar, &stops);

    let style = TextStyle::new(12.0, "#ffffff");
    painter.text(
        &spec.labels.series,
        Point::new(bar.center().x, bar.y - 8.0),
        &style.clone().align(Align::Center),
    );
    painter.text("0", Point::new(bar.x, bar.bottom() + 12.0), &style);
    painter.text(
        &spec.max_count().to_string(),
        Point::new(bar.right(), bar.bottom() + 12.0),
        &style.align(Align::Right),
    );
}
