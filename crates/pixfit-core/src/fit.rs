/// Per-axis maximum dimensions for fit-to-box scaling.
///
/// `None` on an axis means that axis is unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeConstraint {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
}

impl SizeConstraint {
    pub fn new(max_width: Option<u32>, max_height: Option<u32>) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Build a constraint from raw text inputs.
    ///
    /// Missing, non-numeric, zero, or negative text leaves that axis
    /// unconstrained.
    pub fn from_inputs(width: &str, height: &str) -> Self {
        Self {
            max_width: parse_axis(width),
            max_height: parse_axis(height),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.max_width.is_none() && self.max_height.is_none()
    }
}

fn parse_axis(input: &str) -> Option<u32> {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|v| *v > 0)
        .map(|v| v.min(u32::MAX as i64) as u32)
}

/// Compute the largest size that fits `constraint` while preserving the
/// original aspect ratio. Never upscales: the uniform scale factor is
/// capped at 1.
pub fn fit_within(width: u32, height: u32, constraint: &SizeConstraint) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width, height);
    }

    let max_w = constraint.max_width.unwrap_or(width);
    let max_h = constraint.max_height.unwrap_or(height);

    let scale = (max_w as f64 / width as f64)
        .min(max_h as f64 / height as f64)
        .min(1.0);

    let w = (width as f64 * scale).round() as u32;
    let h = (height as f64 * scale).round() as u32;
    (w, h)
}
