use super::Point;
use crate::error::{ContextError, Result};

/// Default scale: five decimal digits of floating-point resolution.
const DEFAULT_SCALE: f64 = 1e5;

/// Default coincidence threshold in squared integer units.
const DEFAULT_EPSILON: f64 = 1.0;

/// Largest `10^digits` accepted by [`Context::from_precision`].
const MAX_PRECISION_DIGITS: u32 = 12;

/// Numeric configuration of the integer coordinate space.
///
/// `scale` is the number of integer units per floating-point unit. Every
/// polygon that exchanges points with another must use the same context.
///
/// Integer coordinates must stay within `|coord| < 2^62`. Inside that range
/// coordinate differences fit in `i64` and the cross products behind area
/// and collinearity fit in `i128`; past it they can overflow. Pick `scale`
/// so that the largest floating-point coordinate times `scale` stays below
/// the limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Context {
    scale: f64,
    epsilon: f64,
}

impl Context {
    /// Creates a context with the given scale and the default epsilon.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::InvalidScale` if `scale` is not finite and positive.
    pub fn new(scale: f64) -> Result<Self> {
        Self::with_epsilon(scale, DEFAULT_EPSILON)
    }

    /// Creates a context with an explicit coincidence epsilon (squared units).
    ///
    /// # Errors
    ///
    /// Returns `ContextError::InvalidScale` or `ContextError::InvalidEpsilon`
    /// for non-finite or out-of-range values.
    pub fn with_epsilon(scale: f64, epsilon: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ContextError::InvalidScale(scale).into());
        }
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ContextError::InvalidEpsilon(epsilon).into());
        }
        Ok(Self { scale, epsilon })
    }

    /// Creates a context whose scale is `10^digits`.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::PrecisionTooLarge` past twelve digits.
    pub fn from_precision(digits: u32) -> Result<Self> {
        if digits > MAX_PRECISION_DIGITS {
            return Err(ContextError::PrecisionTooLarge(digits).into());
        }
        Self::new(10_f64.powi(i32::try_from(digits).unwrap_or(0)))
    }

    /// Integer units per floating-point unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Squared distance below which two points are coincident.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Converts a floating-point length or coordinate into integer space.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn ftoi(f: f64, ctx: &Context) -> i64 {
    (f * ctx.scale).round() as i64
}

/// Converts an integer-space length or coordinate back to floating point.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn itof(i: i64, ctx: &Context) -> f64 {
    i as f64 / ctx.scale
}

/// Converts a floating-point `[x, y]` pair into an integer-space point.
#[must_use]
pub fn ftoi_point(p: [f64; 2], ctx: &Context) -> Point {
    Point::new(ftoi(p[0], ctx), ftoi(p[1], ctx))
}

/// Converts an integer-space point back to a floating-point `[x, y]` pair.
#[must_use]
pub fn itof_point(p: &Point, ctx: &Context) -> [f64; 2] {
    [itof(p.x, ctx), itof(p.y, ctx)]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::KernelError;

    #[test]
    fn rejects_non_positive_scale() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Context::new(bad).unwrap_err();
            assert!(matches!(
                err,
                KernelError::Context(ContextError::InvalidScale(_))
            ));
        }
    }

    #[test]
    fn rejects_negative_epsilon() {
        let err = Context::with_epsilon(100.0, -0.5).unwrap_err();
        assert!(matches!(
            err,
            KernelError::Context(ContextError::InvalidEpsilon(_))
        ));
    }

    #[test]
    fn precision_builds_power_of_ten() {
        let ctx = Context::from_precision(3).unwrap();
        assert!((ctx.scale() - 1000.0).abs() < 1e-12);
        assert!(Context::from_precision(13).is_err());
    }

    #[test]
    fn ftoi_rounds_to_nearest() {
        let ctx = Context::new(100.0).unwrap();
        assert_eq!(ftoi(1.234, &ctx), 123);
        assert_eq!(ftoi(1.236, &ctx), 124);
        assert_eq!(ftoi(-0.5, &ctx), -50);
    }

    #[test]
    fn integer_round_trip_is_exact() {
        let ctx = Context::default();
        for x in [-1_000_000_007_i64, -3, 0, 1, 42, 99_999, 123_456_789] {
            assert_eq!(ftoi(itof(x, &ctx), &ctx), x);
        }
    }

    #[test]
    fn point_conversion() {
        let ctx = Context::new(10.0).unwrap();
        let p = ftoi_point([1.5, -2.25], &ctx);
        assert_eq!(p, Point::new(15, -23));
        let back = itof_point(&Point::new(15, -20), &ctx);
        assert!((back[0] - 1.5).abs() < 1e-12);
        assert!((back[1] + 2.0).abs() < 1e-12);
    }
}
