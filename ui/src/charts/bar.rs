//! Vertical bar charts; histograms are bar charts over bin labels.

use super::frame::{category_labels, format_value, value_frame};
use super::geometry::Rect;
use super::hit::{HitMap, HitShape, Pick};
use super::paint::Painter;
use super::scale::BandScale;
use super::spec::BarSpec;

/// Share of each slot left empty around a bar.
const BAR_PADDING: f64 = 0.2;

pub fn paint(painter: &mut dyn Painter, spec: &BarSpec) -> HitMap {
    let mut hits = HitMap::new();
    let max = spec.bars.iter().map(|(_, value)| *value).fold(0.0, f64::max);
    let frame = value_frame(painter, 0.0, max, false, &spec.labels);
    let plot = frame.plot;

    let bands = BandScale::new(spec.bars.len(), (plot.x, plot.right()), BAR_PADDING);
    let centers: Vec<(f64, &str)> = spec
        .bars
        .iter()
        .enumerate()
        .map(|(index, (label, _))| (bands.center(index), label.as_str()))
        .collect();
    category_labels(painter, &plot, &centers, bands.step());

    let baseline = frame.y.map(0.0);
    for (index, (label, value)) in spec.bars.iter().enumerate() {
        let top = frame.y.map(*value);
        let bar = Rect::new(bands.start(index), top, bands.bandwidth(), baseline - top);
        if bar.height > 0.0 {
            painter.fill_rect(bar, spec.color);
        }

        let tooltip = format!("{label}\n{}: {}", spec.labels.series, format_value(*value, false));
        // The full slot answers so short bars stay easy to hover.
        let slot = Rect::new(bands.start(index), plot.y, bands.bandwidth(), plot.height);
        hits.push(
            HitShape::Rect(slot),
            spec.pickable.then(|| Pick::Category(label.clone())),
            tooltip,
        );
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::geometry::{Point, Size};
    use crate::charts::paint::{DrawOp, Recording};
    use crate::charts::spec::{ChartSpec, Labels};

    fn histogram_spec() -> BarSpec {
        let bins = vec![("1-3".to_string(), 4), ("4-6".to_string(), 0), ("7-9".to_string(), 2)];
        let labels = Labels {
            series: "Count".into(),
            x_axis: Some("Repositories Count Range".into()),
            ..Labels::default()
        };
        match ChartSpec::histogram(&bins, labels) {
            ChartSpec::Histogram(bar) => bar,
            other => panic!("unexpected {}", other.kind()),
        }
    }

    #[test]
    fn empty_bins_draw_no_bar_but_keep_a_tooltip() {
        let mut painter = Recording::new(Size::new(400.0, 240.0));
        let hits = paint(&mut painter, &histogram_spec());

        let bars = painter
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::FillRect { .. }))
            .count();
        assert_eq!(bars, 2);
        assert_eq!(hits.len(), 3);
        assert_eq!(hits.regions()[0].tooltip, "1-3\nCount: 4");
        assert!(painter.texts().contains(&"Repositories Count Range"));
    }

    #[test]
    fn bars_are_ordered_left_to_right() {
        let mut painter = Recording::new(Size::new(400.0, 240.0));
        let hits = paint(&mut painter, &histogram_spec());
        let middle = |index: usize| match &hits.regions()[index].shape {
            HitShape::Rect(rect) => rect.center(),
            _ => Point::default(),
        };
        assert!(middle(0).x < middle(1).x && middle(1).x < middle(2).x);
        assert_eq!(hits.pick_at(middle(0)), None);
    }
}
