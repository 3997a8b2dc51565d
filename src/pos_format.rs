//! Genomic position formatters for X-axis tick labels and cursor readouts.
//!
//! The main entry point is [`PosFormatter`], set on
//! [`crate::config::TrackConfig::pos_formatter`]. The default (`Auto`)
//! picks a unit based on the magnitude of the visible range.

use once_cell::sync::Lazy;

/// Unit in which genomic positions are labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosUnit {
    /// Plain base pairs: `1,234 bp`.
    Bases,
    /// Kilobases: `1.234 kb`.
    Kilobases,
    /// Megabases: `12.3 Mb`.
    Megabases,
}

/// `(divisor, suffix)` per unit, coarsest last.
static UNIT_TABLE: Lazy<Vec<(PosUnit, f64, &'static str)>> = Lazy::new(|| {
    vec![
        (PosUnit::Bases, 1.0, "bp"),
        (PosUnit::Kilobases, 1_000.0, "kb"),
        (PosUnit::Megabases, 1_000_000.0, "Mb"),
    ]
});

impl PosUnit {
    pub fn divisor(&self) -> f64 {
        UNIT_TABLE
            .iter()
            .find(|(u, _, _)| u == self)
            .map(|(_, d, _)| *d)
            .unwrap_or(1.0)
    }

    pub fn suffix(&self) -> &'static str {
        UNIT_TABLE
            .iter()
            .find(|(u, _, _)| u == self)
            .map(|(_, _, s)| *s)
            .unwrap_or("bp")
    }

    /// Pick the coarsest unit whose divisor does not dwarf the span.
    pub fn for_span(span_bp: f64) -> PosUnit {
        let span = span_bp.abs();
        if span >= 2_000_000.0 {
            PosUnit::Megabases
        } else if span >= 2_000.0 {
            PosUnit::Kilobases
        } else {
            PosUnit::Bases
        }
    }
}

/// Selects how genomic positions are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosFormatter {
    /// Pick the unit automatically from the visible span.
    Auto,
    /// Force a fixed unit.
    Fixed(PosUnit),
}

impl Default for PosFormatter {
    fn default() -> Self {
        PosFormatter::Auto
    }
}

impl PosFormatter {
    /// Format a position (in base pairs) for a view spanning `span_bp`.
    pub fn format_value(&self, pos_bp: f64, span_bp: f64) -> String {
        let unit = match self {
            PosFormatter::Auto => PosUnit::for_span(span_bp),
            PosFormatter::Fixed(u) => *u,
        };
        let scaled = pos_bp / unit.divisor();
        match unit {
            PosUnit::Bases => format!("{} {}", group_thousands(pos_bp.round() as i64), unit.suffix()),
            _ => {
                // keep three significant decimals, trimming trailing zeros
                let s = format!("{:.3}", scaled);
                let s = s.trim_end_matches('0').trim_end_matches('.');
                format!("{} {}", s, unit.suffix())
            }
        }
    }
}

/// `1234567` → `"1,234,567"`.
fn group_thousands(v: i64) -> String {
    let neg = v < 0;
    let digits = v.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let bytes = digits.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    if neg {
        format!("-{}", out)
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-4_200), "-4,200");
    }
}
