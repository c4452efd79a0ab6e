/// Numerical thresholds shared by the primitives and both sweeps.
///
/// All thresholds are relative: `parallel` and `parameter` compare
/// dimensionless ratios and `coincident` is measured against the extent of
/// the input. Scaling the input by a power of two does not change any answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
  /// Two directions `u` and `v` count as parallel when
  /// `|u × v| <= parallel * |u| * |v|`.
  pub parallel: f64,
  /// Slack on the `[0, 1]` segment parameters when validating an intersection.
  /// Absorbs rounding for intersections that sit on an endpoint.
  pub parameter: f64,
  /// Two sweep keys `a` and `b` are considered equal when
  /// `|a - b| <= coincident * max(extent, |a|, |b|)`, where `extent` is the
  /// largest absolute coordinate of the input.
  pub coincident: f64,
}

impl Tolerance {
  pub const DEFAULT: Tolerance = Tolerance {
    parallel: 1e-12,
    parameter: 1e-9,
    coincident: 1e-9,
  };

  pub fn keys_coincide(&self, a: f64, b: f64, extent: f64) -> bool {
    let scale = extent.max(a.abs()).max(b.abs());
    (a - b).abs() <= self.coincident * scale
  }

  pub(crate) fn within_unit(&self, t: f64) -> bool {
    t >= -self.parameter && t <= 1.0 + self.parameter
  }
}

/// The largest power of two not above `magnitude`, or 1 if `magnitude` is
/// zero, subnormal or not finite.
///
/// Dividing by it is exact and maps `magnitude` into `[1, 2)`, so products
/// of rescaled coordinates neither overflow nor underflow.
pub(crate) fn unit_scale(magnitude: f64) -> f64 {
  const EXPONENT: u64 = 0x7ff0_0000_0000_0000;
  if magnitude.is_normal() {
    f64::from_bits(magnitude.abs().to_bits() & EXPONENT)
  } else {
    1.0
  }
}

impl Default for Tolerance {
  fn default() -> Self {
    Tolerance::DEFAULT
  }
}
