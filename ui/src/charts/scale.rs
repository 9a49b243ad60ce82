//! Axis scales and tick generation.

/// Maps a numeric domain onto a pixel range; ranges may be inverted
/// (y axes run bottom to top).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (d1 - d0).abs() < f64::EPSILON {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Evenly spaced slots for categories, with `padding` as a share of each slot
/// left empty around the bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    pub count: usize,
    pub range: (f64, f64),
    pub padding: f64,
}

impl BandScale {
    pub fn new(count: usize, range: (f64, f64), padding: f64) -> Self {
        Self {
            count,
            range,
            padding: padding.clamp(0.0, 0.9),
        }
    }

    pub fn step(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.range.1 - self.range.0) / self.count as f64
        }
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Left edge of band `index`.
    pub fn start(&self, index: usize) -> f64 {
        self.range.0 + self.step() * index as f64 + self.step() * self.padding / 2.0
    }

    pub fn center(&self, index: usize) -> f64 {
        self.range.0 + self.step() * (index as f64 + 0.5)
    }

    /// Band under pixel `x`, if any.
    pub fn index_at(&self, x: f64) -> Option<usize> {
        let step = self.step();
        if step <= 0.0 || x < self.range.0 || x >= self.range.1 {
            return None;
        }
        Some((((x - self.range.0) / step) as usize).min(self.count - 1))
    }
}

/// Round tick values from `min` up to at least `max`, at most `max_ticks` of
/// them, stepping by 1, 2 or 5 times a power of ten.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max_ticks < 2 {
        return Vec::new();
    }
    if max <= min {
        return vec![min, min + 1.0];
    }

    let raw_step = (max - min) / (max_ticks - 1) as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|factor| factor * magnitude)
        .find(|step| ((max - min) / step).ceil() as usize + 1 <= max_ticks)
        .unwrap_or(10.0 * magnitude);

    let start = (min / step).floor() * step;
    let mut ticks = Vec::with_capacity(max_ticks);
    let mut value = start;
    while ticks.len() < max_ticks {
        ticks.push(value);
        if value >= max {
            break;
        }
        value = start + step * ticks.len() as f64;
    }
    ticks
}
