//! Owned rendering state of one chart.
//!
//! A [`ChartHandle`] is acquired when a chart first paints onto a
//! [`Surface`] and owns that surface until it is dropped. Dropping releases
//! the surface (clearing it), so replacing a handle always tears the old
//! chart down before the new one paints.

use thiserror::Error;

use super::geometry::Point;
use super::hit::{HitMap, HitRegion, Pick};
use super::paint::Painter;
use super::render;
use super::spec::ChartSpec;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("canvas `{0}` not found")]
    MissingCanvas(String),

    #[error("2D context unavailable for `{0}`")]
    NoContext(String),

    #[error("canvas rendering is not available on this platform")]
    Unsupported,
}

/// Something a chart can be painted onto and later released.
pub trait Surface {
    fn painter(&mut self) -> &mut dyn Painter;

    /// Map a pointer position in element (CSS) pixels into surface pixels.
    fn to_surface(&self, point: Point) -> Point {
        point
    }

    fn release(&mut self) {
        self.painter().clear();
    }
}

pub struct ChartHandle<S: Surface> {
    surface: S,
    kind: &'static str,
    hits: HitMap,
}

impl<S: Surface> ChartHandle<S> {
    /// Paint `spec` onto a fresh surface and take ownership of it.
    pub fn acquire(mut surface: S, spec: &ChartSpec) -> Self {
        let painter = surface.painter();
        painter.clear();
        let hits = render(painter, spec);
        tracing::trace!(kind = spec.kind(), regions = hits.len(), "chart painted");
        Self {
            surface,
            kind: spec.kind(),
            hits,
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    /// Region under a pointer given in element pixels.
    pub fn region_at(&self, css: Point) -> Option<&HitRegion> {
        self.hits.hit(self.surface.to_surface(css))
    }

    pub fn pick_at(&self, css: Point) -> Option<Pick> {
        self.region_at(css).and_then(|region| region.pick.clone())
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: Surface> Drop for ChartHandle<S> {
    fn drop(&mut self) {
        tracing::trace!(kind = self.kind, "chart released");
        self.surface.release();
    }
}
