//! Palettes and colour scales.

/// Nine-step sequential blues, light to dark.
pub const BLUES: [&str; 9] = [
    "#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5", "#08519c",
    "#08306b",
];

pub const NO_DATA: &str = "#c0c0c0";
pub const BORDER: &str = "#333333";
pub const LINE: &str = "#4bc0c0";
pub const TEAL_FILL: &str = "rgba(75, 192, 192, 0.6)";
pub const TEAL: &str = "rgba(75, 192, 192, 1)";
pub const SCATTER: &str = "#4682b4";
pub const AXIS_TEXT: &str = "#e5e7eb";
pub const GRID: &str = "rgba(255, 255, 255, 0.12)";

/// Categorical slice colours, reused cyclically.
pub const CATEGORICAL: [&str; 12] = [
    "#4bc0c0", "#ff6384", "#36a2eb", "#ffce56", "#9966ff", "#ff9f40", "#2ecc71", "#e74c3c",
    "#8e44ad", "#f1c40f", "#1abc9c", "#95a5a6",
];

pub fn categorical(index: usize) -> &'static str {
    CATEGORICAL[index % CATEGORICAL.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn parse_hex(hex: &str) -> Option<Rgb> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |at: usize| u8::from_str_radix(hex.get(at..at + 2)?, 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Blue for `t` in `[0, 1]`, interpolated piecewise across [`BLUES`].
pub fn sequential_blue(t: f64) -> String {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let stops: Vec<Rgb> = BLUES.iter().filter_map(|hex| Rgb::parse_hex(hex)).collect();
    let segments = (stops.len() - 1) as f64;
    let position = t * segments;
    let index = (position.floor() as usize).min(stops.len() - 2);
    stops[index].lerp(stops[index + 1], position - index as f64).to_hex()
}

/// Word colour from its frequency normalised to `0..=100`.
pub fn word_color(percent: f64) -> &'static str {
    match percent {
        p if p > 80.0 => "#8B0000",
        p if p > 60.0 => "#B22222",
        p if p > 50.0 => "#FF4500",
        p if p > 40.0 => "#FF8C00",
        p if p > 30.0 => "#32CD32",
        p if p > 20.0 => "#00FA9A",
        p if p > 10.0 => "#1E90FF",
        _ => "#87CEFA",
    }
}
