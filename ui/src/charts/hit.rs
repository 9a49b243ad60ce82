//! Hit testing for clicks and hover tooltips.

use std::f64::consts::TAU;

use super::geometry::{Point, Rect};

/// What a click on a chart element selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pick {
    Country(String),
    Year(i32),
    Category(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum HitShape {
    Rect(Rect),
    Circle { center: Point, radius: f64 },
    /// Annulus slice; angles in radians, clockwise from 3 o'clock.
    Sector {
        center: Point,
        inner: f64,
        outer: f64,
        start: f64,
        end: f64,
    },
    /// Rings of one or more polygons, tested with the even-odd rule.
    Polygon(Vec<Vec<Point>>),
    /// Full-height vertical band, as used by line charts' index tooltips.
    Column { left: f64, right: f64 },
}

impl HitShape {
    pub fn contains(&self, point: Point) -> bool {
        match self {
            HitShape::Rect(rect) => rect.contains(point),
            HitShape::Circle { center, radius } => center.distance(point) <= *radius,
            HitShape::Sector {
                center,
                inner,
                outer,
                start,
                end,
            } => {
                let distance = center.distance(point);
                if distance < *inner || distance > *outer {
                    return false;
                }
                let angle = (point.y - center.y).atan2(point.x - center.x);
                let offset = (angle - start).rem_euclid(TAU);
                offset <= (end - start)
            }
            HitShape::Polygon(rings) => {
                rings.iter().filter(|ring| ring_contains(ring, point)).count() % 2 == 1
            }
            HitShape::Column { left, right } => point.x >= *left && point.x < *right,
        }
    }
}

/// Ray casting point-in-ring test.
fn ring_contains(ring: &[Point], point: Point) -> bool {
    let mut inside = false;
    let mut j = ring.len().wrapping_sub(1);
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        if (a.y > point.y) != (b.y > point.y)
            && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[derive(Debug, Clone, PartialEq)]
pub struct HitRegion {
    pub shape: HitShape,
    pub pick: Option<Pick>,
    pub tooltip: String,
}

/// Interactive regions of one painted chart, in paint order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitMap {
    regions: Vec<HitRegion>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: HitShape, pick: Option<Pick>, tooltip: impl Into<String>) {
        self.regions.push(HitRegion {
            shape,
            pick,
            tooltip: tooltip.into(),
        });
    }

    /// Topmost region under `point`; later regions are painted above earlier ones.
    pub fn hit(&self, point: Point) -> Option<&HitRegion> {
        self.regions.iter().rev().find(|region| region.shape.contains(point))
    }

    pub fn pick_at(&self, point: Point) -> Option<Pick> {
        self.hit(point).and_then(|region| region.pick.clone())
    }

    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
