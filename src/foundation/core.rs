use crate::foundation::error::{DuelvizError, DuelvizResult};

pub use kurbo::{Point, Rect};

/// Output frame size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels (must be non-zero).
    pub width: u32,
    /// Height in pixels (must be non-zero).
    pub height: u32,
}

impl Canvas {
    /// Frame size the built-in template is drawn for.
    pub const TARGET: Canvas = Canvas {
        width: 1015,
        height: 570,
    };

    /// Create a validated canvas.
    pub fn new(width: u32, height: u32) -> DuelvizResult<Self> {
        if width == 0 || height == 0 {
            return Err(DuelvizError::validation(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Width divided by height.
    pub fn aspect_ratio(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Return `true` when both aspect ratios agree within a relative `tolerance`.
    pub fn matches_aspect(self, other: Canvas, tolerance: f64) -> bool {
        let a = self.aspect_ratio();
        let b = other.aspect_ratio();
        ((a - b) / b).abs() <= tolerance
    }

    /// Scale both sides by `factor`, rounding and keeping at least one pixel.
    pub fn scaled(self, factor: f64) -> DuelvizResult<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(DuelvizError::validation(format!(
                "scale factor must be finite and > 0, got {factor}"
            )));
        }
        let w = (f64::from(self.width) * factor).round().max(1.0);
        let h = (f64::from(self.height) * factor).round().max(1.0);
        if w > f64::from(u32::MAX) || h > f64::from(u32::MAX) {
            return Err(DuelvizError::validation("scaled canvas overflows u32"));
        }
        Ok(Self {
            width: w as u32,
            height: h as u32,
        })
    }
}

/// Format a coordinate for an SVG attribute: at most two decimals, no trailing zeros.
pub(crate) fn fmt_num(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    // Avoid "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let s = format!("{rounded:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_owned()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
