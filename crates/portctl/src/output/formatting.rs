//! Shared formatting utilities for CLI output.
//!
//! # Example
//!
//! ```
//! use portctl::output::formatting::{convert_bps, format_general, format_speed, mw_to_dbm};
//!
//! assert_eq!(convert_bps(1_000_000_000.0), (1.0, "Gbps"));
//! assert_eq!(format_speed(Some(100_000)), "100 Gbps");
//! assert_eq!(format_speed(None), "-");
//! assert_eq!(format_general(mw_to_dbm(1.0), 4), "0.0");
//! ```

/// Decimal unit prefixes, in ascending order, with their power of ten.
const BPS_UNITS: [(i32, &str); 4] = [(0, "bps"), (3, "Kbps"), (6, "Mbps"), (9, "Gbps")];

/// Convert a bit rate into a value and a unit suffix.
///
/// Picks the largest unit for which the scaled value stays below 1000,
/// with Gbps as the largest unit.
///
/// # Example
///
/// ```
/// use portctl::output::formatting::convert_bps;
///
/// assert_eq!(convert_bps(999.0), (999.0, "bps"));
/// assert_eq!(convert_bps(500_000.0), (500.0, "Kbps"));
/// assert_eq!(convert_bps(1_000_000.0), (1.0, "Mbps"));
/// assert_eq!(convert_bps(4_000_000_000_000.0), (4000.0, "Gbps"));
/// ```
pub fn convert_bps(bps: f64) -> (f64, &'static str) {
    const LARGEST: usize = BPS_UNITS.len() - 1;

    let mut value = bps;
    for &(exp, unit) in &BPS_UNITS[..LARGEST] {
        if value < 1000.0 {
            return (bps / 10f64.powi(exp), unit);
        }
        value /= 1000.0;
    }
    let (exp, unit) = BPS_UNITS[LARGEST];
    (bps / 10f64.powi(exp), unit)
}

/// Format a configured port speed (in Mbps) for display.
///
/// Missing or zero speeds render as `-`.
pub fn format_speed(speed_mbps: Option<u32>) -> String {
    match speed_mbps {
        Some(mbps) if mbps > 0 => {
            let (value, unit) = convert_bps(f64::from(mbps) * 1e6);
            format!("{:.0} {}", value, unit)
        }
        _ => "-".to_string(),
    }
}

/// Convert optical power from milliwatts to dBm.
///
/// Zero power is reported as 0.0 rather than negative infinity.
pub fn mw_to_dbm(mw: f64) -> f64 {
    if mw == 0.0 { 0.0 } else { 10.0 * mw.log10() }
}

/// Format a value with `precision` significant digits.
///
/// Trailing zeros are dropped; fixed-point output keeps at least one
/// digit after the decimal point. Very small or very large magnitudes
/// switch to exponent notation.
///
/// # Example
///
/// ```
/// use portctl::output::formatting::format_general;
///
/// assert_eq!(format_general(35.1234, 4), "35.12");
/// assert_eq!(format_general(3.3, 4), "3.3");
/// assert_eq!(format_general(0.0, 4), "0.0");
/// assert_eq!(format_general(0.00001, 4), "1e-05");
/// ```
pub fn format_general(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let precision = precision.max(1);

    // Exponent after rounding to the requested number of digits.
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        let fixed = format!("{:.*}", decimals, value);
        let trimmed = trim_zeros(&fixed);
        if trimmed.contains('.') {
            trimmed.to_string()
        } else {
            format!("{}.0", trimmed)
        }
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Terminal color hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Red,
}

impl Color {
    fn code(&self) -> &'static str {
        match self {
            Self::Green => "\x1b[32m",
            Self::Red => "\x1b[31m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Right-align `text` in `width` columns, wrapped in `color` when enabled.
///
/// Padding is applied to the visible text, so colored and plain cells
/// line up in the same column.
pub fn paint_right(text: &str, width: usize, color: Option<Color>, enabled: bool) -> String {
    let padded = format!("{:>width$}", text, width = width);
    match color {
        Some(c) if enabled => format!("{}{}{}", c.code(), padded, RESET),
        _ => padded,
    }
}
