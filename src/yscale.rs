//! Scale-bar capability: generic construction of a vertical value
//! scale from a min/max range.
//!
//! [`YScale`] is implemented by concrete tracks that can report a value
//! range. Its provided [`make_yscale`](YScale::make_yscale) builds a
//! [`ScaleBar`] at most once and caches it in the track's slot; the
//! paint side lives in [`crate::ui`].

/// One tick on the scale bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleTick {
    /// Value at the tick.
    pub value: f64,
    /// Rendered label, unit suffix included.
    pub label: String,
    /// Normalized vertical position: 0.0 at the top (max), 1.0 at the
    /// bottom (min).
    pub norm: f32,
}

/// A constructed vertical scale bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleBar {
    pub min: f64,
    pub max: f64,
    /// Horizontal pixel offset of the bar within the track rect.
    pub left: Option<f32>,
    pub ticks: Vec<ScaleTick>,
}

impl ScaleBar {
    /// Restyle the bar's horizontal position.
    pub fn set_left(&mut self, left: f32) {
        self.left = Some(left);
    }
}

/// Capability trait for tracks that can grow a scale bar.
pub trait YScale {
    /// The value range the scale should cover, when known.
    fn scale_range(&self) -> Option<(f64, f64)>;

    /// Optional unit suffix for tick labels.
    fn scale_unit(&self) -> Option<&str>;

    /// Approximate tick count to aim for.
    fn scale_tick_target(&self) -> usize {
        4
    }

    /// The cached scale bar slot.
    fn scale_slot(&mut self) -> &mut Option<ScaleBar>;

    /// Current horizontal layout offset, used to seed the bar position.
    fn scale_left(&self) -> Option<f32>;

    /// Build and cache the scale bar from the current range.
    ///
    /// No-op when the slot is already filled, or when no range is
    /// available yet.
    fn make_yscale(&mut self) {
        if self.scale_slot().is_some() {
            return;
        }
        let Some((min, max)) = self.scale_range() else {
            return;
        };
        let ticks = build_ticks(min, max, self.scale_tick_target(), self.scale_unit());
        let left = self.scale_left();
        *self.scale_slot() = Some(ScaleBar {
            min,
            max,
            left,
            ticks,
        });
    }
}

/// Compute ticks at "nice" values covering `[min, max]`.
///
/// Degenerate ranges (min == max, or non-finite endpoints) yield a
/// two-tick bar at the endpoints so something sensible still renders.
pub fn build_ticks(min: f64, max: f64, target: usize, unit: Option<&str>) -> Vec<ScaleTick> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        return vec![
            ScaleTick {
                value: max,
                label: format_tick(max, 1.0, unit),
                norm: 0.0,
            },
            ScaleTick {
                value: min,
                label: format_tick(min, 1.0, unit),
                norm: 1.0,
            },
        ];
    }

    let step = nice_step(span, target.max(1));
    let first = (min / step).ceil() * step;
    let mut ticks = Vec::new();
    let mut v = first;
    // small epsilon so the top tick is not lost to rounding
    while v <= max + step * 1e-6 {
        let norm = ((max - v) / span) as f32;
        ticks.push(ScaleTick {
            value: v,
            label: format_tick(v, step, unit),
            norm: norm.clamp(0.0, 1.0),
        });
        v += step;
    }
    ticks
}

/// Choose a 1/2/5×10^n step so that `span / step` lands near `target`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let residual = raw / mag;
    let factor = if residual > 5.0 {
        10.0
    } else if residual > 2.0 {
        5.0
    } else if residual > 1.0 {
        2.0
    } else {
        1.0
    };
    factor * mag
}

/// Format a tick label; sub-millesimal steps switch to e-notation.
pub fn format_tick(value: f64, step: f64, unit: Option<&str>) -> String {
    let body = if step.abs() < 0.001 {
        let exponent = step.abs().log10().floor() + 1.0;
        format!("{:.1}e{}", value / 10f64.powf(exponent), exponent)
    } else if step.abs() >= 1.0 && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.3}", value)
    };
    match unit {
        Some(u) => format!("{} {}", body, u),
        None => body,
    }
}
