//! Formatting helpers for presenting counts.

/// `1250` → `1.3K`, `2_400_000` → `2.4M`; smaller values are printed as-is.
/// Halves round away from zero.
pub fn format_compact(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", round_tenths(value / 1_000_000.0))
    } else if value >= 1_000.0 {
        format!("{:.1}K", round_tenths(value / 1_000.0))
    } else {
        format_number(value)
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Whole numbers without a fraction, everything else with up to two decimals.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "—".into();
    }
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{}%", value.round() as i64)
    } else {
        "—".into()
    }
}

/// Share of `total` with one decimal (`12.5`), used for slice labels.
pub fn format_share(value: f64, total: f64) -> String {
    if total <= 0.0 {
        return "0.0".into();
    }
    format!("{:.1}", round_tenths(value / total * 100.0))
}
