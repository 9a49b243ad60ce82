//! Word cloud layout.
//!
//! Words are placed largest first along an Archimedean spiral from the
//! centre, each at the first position where its box overlaps nothing already
//! placed. When words are left over the whole layout is retried at a smaller
//! scale.

use std::f64::consts::FRAC_PI_2;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::geometry::{Point, Rect, Size};
use super::hit::{HitMap, HitShape};
use super::paint::{Align, Painter, TextStyle};
use super::spec::CloudSpec;

const WORD_PADDING: f64 = 3.0;
const SPIRAL_STEP: f64 = 0.1;
const MAX_SPIRAL_STEPS: usize = 4_000;
const FIT_ATTEMPTS: usize = 8;
const SHRINK: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct Placed {
    pub index: usize,
    pub bounds: Rect,
    pub rotated: bool,
    pub font_px: f64,
}

pub fn paint(painter: &mut dyn Painter, spec: &CloudSpec) -> HitMap {
    let mut hits = HitMap::new();
    let placed = layout(painter, spec);

    for item in &placed {
        let word = &spec.words[item.index];
        let mut style = TextStyle::new(item.font_px, word.color).align(Align::Center).bold();
        if item.rotated {
            style = style.rotated(FRAC_PI_2);
        }
        painter.text(&word.text, item.bounds.center(), &style);
        hits.push(
            HitShape::Rect(item.bounds),
            None,
            format!("{}: {} {}", word.text, spec.labels.series, word.value),
        );
    }

    if placed.len() < spec.words.len() {
        tracing::debug!(
            placed = placed.len(),
            total = spec.words.len(),
            "word cloud dropped words that did not fit"
        );
    }
    hits
}

pub fn layout(painter: &mut dyn Painter, spec: &CloudSpec) -> Vec<Placed> {
    let size = painter.size();
    let mut scale = 1.0;
    let mut best = Vec::new();

    for _ in 0..FIT_ATTEMPTS {
        let placed = layout_at(painter, spec, size, scale);
        let complete = placed.len() == spec.words.len();
        if placed.len() >= best.len() {
            best = placed;
        }
        if complete {
            break;
        }
        scale *= SHRINK;
    }
    best
}

fn layout_at(painter: &mut dyn Painter, spec: &CloudSpec, size: Size, scale: f64) -> Vec<Placed> {
    let mut rng = StdRng::seed_from_u64(spec.seed);
    let area = Rect::new(0.0, 0.0, size.width, size.height);
    let center = area.center();
    let mut placed: Vec<Placed> = Vec::with_capacity(spec.words.len());

    let mut order: Vec<usize> = (0..spec.words.len()).collect();
    order.sort_by(|&a, &b| spec.words[b].font_px.total_cmp(&spec.words[a].font_px));

    for index in order {
        let word = &spec.words[index];
        let font_px = word.font_px * scale;
        let rotated = rng.gen_bool(0.5);
        let style = TextStyle::new(font_px, word.color).bold();
        let width = painter.measure_text(&word.text, &style) + WORD_PADDING * 2.0;
        let height = font_px + WORD_PADDING * 2.0;
        let (w, h) = if rotated { (height, width) } else { (width, height) };

        let position = spiral(center, size).take(MAX_SPIRAL_STEPS).find_map(|at| {
            let candidate = Rect::new(at.x - w / 2.0, at.y - h / 2.0, w, h);
            let inside = candidate.x >= area.x
                && candidate.y >= area.y
                && candidate.right() <= area.right()
                && candidate.bottom() <= area.bottom();
            (inside && !placed.iter().any(|p| p.bounds.intersects(&candidate))).then_some(candidate)
        });

        if let Some(bounds) = position {
            placed.push(Placed {
                index,
                bounds,
                rotated,
                font_px,
            });
        }
    }
    placed
}

/// Points on an Archimedean spiral, stretched to the canvas aspect ratio.
fn spiral(center: Point, size: Size) -> impl Iterator<Item = Point> {
    let aspect = if size.height > 0.0 { size.width / size.height } else { 1.0 };
    (0..).map(move |step| {
        let t = step as f64 * SPIRAL_STEP;
        let radius = t * 2.0;
        Point::new(center.x + aspect * radius * t.cos(), center.y + radius * t.sin())
    })
}
