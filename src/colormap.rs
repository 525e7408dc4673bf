use plotters::style::RGBColor;
use std::fmt;
use std::str::FromStr;

/// Color schemes available for the heatmap cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    /// Diverging blue → white → red.
    #[default]
    Bwr,
    /// Diverging dark blue → blue → white → red → dark red.
    Seismic,
    /// Sequential purple → teal → yellow.
    Viridis,
}

impl Colormap {
    /// Maps `t` in `[0, 1]` to a color. Values outside the range are clamped,
    /// NaN is treated as the midpoint.
    pub fn color(&self, t: f64) -> RGBColor {
        let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };
        match self {
            Colormap::Bwr => piecewise(t, &[(0.0, 0.0, 1.0), (1.0, 1.0, 1.0), (1.0, 0.0, 0.0)]),
            Colormap::Seismic => piecewise(
                t,
                &[
                    (0.0, 0.0, 0.3),
                    (0.0, 0.0, 1.0),
                    (1.0, 1.0, 1.0),
                    (1.0, 0.0, 0.0),
                    (0.5, 0.0, 0.0),
                ],
            ),
            Colormap::Viridis => viridis(t),
        }
    }

    /// Normalizes `value` with `norm` and looks up its color.
    pub fn map(&self, value: f64, norm: &Normalize) -> RGBColor {
        self.color(norm.apply(value))
    }

    /// Whether the scheme has a neutral midpoint meant for signed data.
    pub fn is_diverging(&self) -> bool {
        matches!(self, Colormap::Bwr | Colormap::Seismic)
    }
}

/// Linear interpolation over evenly spaced color stops.
fn piecewise(t: f64, stops: &[(f64, f64, f64)]) -> RGBColor {
    let segments = (stops.len() - 1) as f64;
    let pos = t * segments;
    let idx = (pos.floor() as usize).min(stops.len() - 2);
    let local = pos - idx as f64;

    let (r0, g0, b0) = stops[idx];
    let (r1, g1, b1) = stops[idx + 1];

    RGBColor(
        channel(r0 + (r1 - r0) * local),
        channel(g0 + (g1 - g0) * local),
        channel(b0 + (b1 - b0) * local),
    )
}

// quadratic fit of matplotlib's viridis
fn viridis(t: f64) -> RGBColor {
    let r = 0.267 + t * (0.329 - 0.267 + t * (0.984 - 0.329));
    let g = 0.005 + t * (0.569 - 0.005 + t * (0.906 - 0.569));
    let b = 0.329 + t * (0.758 - 0.329 - t * (0.758 - 0.121));
    RGBColor(channel(r), channel(g), channel(b))
}

fn channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl FromStr for Colormap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bwr" => Ok(Colormap::Bwr),
            "seismic" => Ok(Colormap::Seismic),
            "viridis" => Ok(Colormap::Viridis),
            _ => Err(format!("Invalid colormap: {}", s)),
        }
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Colormap::Bwr => write!(f, "bwr"),
            Colormap::Seismic => write!(f, "seismic"),
            Colormap::Viridis => write!(f, "viridis"),
        }
    }
}

/// Linear mapping of data values onto `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalize {
    pub vmin: f64,
    pub vmax: f64,
}

impl Normalize {
    pub fn new(vmin: f64, vmax: f64) -> Self {
        Normalize { vmin, vmax }
    }

    /// Symmetric range `[-limit, limit]`, so that zero lands on the midpoint.
    pub fn centered(limit: f64) -> Self {
        let limit = limit.abs();
        Normalize {
            vmin: -limit,
            vmax: limit,
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        // halved so that limits near ±f64::MAX do not overflow
        let half_span = self.vmax / 2.0 - self.vmin / 2.0;
        if !value.is_finite() || !half_span.is_finite() || half_span <= 0.0 {
            return 0.5;
        }
        ((value / 2.0 - self.vmin / 2.0) / half_span).clamp(0.0, 1.0)
    }
}
