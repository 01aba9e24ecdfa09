//! Solver for quadratic equations `ax² + bx + c = 0`.

use std::fmt;

use crate::error::{EngineError, EngineResult};

/// The roots of a quadratic equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    /// Two distinct real roots, the `+√d` root first.
    TwoReal(f64, f64),
    /// One repeated real root.
    OneReal(f64),
    /// A complex-conjugate pair `real ± imaginary·i`, with `imaginary > 0`.
    ComplexPair {
        /// Real part shared by both roots.
        real: f64,
        /// Magnitude of the imaginary part.
        imaginary: f64,
    },
}

impl fmt::Display for Roots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Roots::TwoReal(x1, x2) => write!(f, "Two real solutions: x1 = {x1}, x2 = {x2}"),
            Roots::OneReal(x) => write!(f, "One real solution: x = {x}"),
            Roots::ComplexPair { real, imaginary } => write!(
                f,
                "Two complex solutions: {real}+{imaginary}i and {real}-{imaginary}i"
            ),
        }
    }
}

/// Solves `ax² + bx + c = 0` by the sign of the discriminant `b² - 4ac`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidCoefficient`] when `a` is zero (the
/// equation is not quadratic) or any coefficient is NaN or infinite.
///
/// # Examples
///
/// ```
/// use kenya_payroll::quadratic::{Roots, solve_quadratic};
///
/// assert_eq!(solve_quadratic(1.0, -3.0, 2.0).unwrap(), Roots::TwoReal(2.0, 1.0));
/// assert_eq!(solve_quadratic(1.0, 2.0, 1.0).unwrap(), Roots::OneReal(-1.0));
/// assert!(solve_quadratic(0.0, 2.0, 1.0).is_err());
/// ```
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> EngineResult<Roots> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Err(EngineError::InvalidCoefficient {
            message: format!("coefficients must be finite (a = {a}, b = {b}, c = {c})"),
        });
    }
    if a == 0.0 {
        return Err(EngineError::InvalidCoefficient {
            message: "a must not be zero".to_string(),
        });
    }

    let discriminant = b * b - 4.0 * a * c;
    let two_a = 2.0 * a;
    // Adding 0.0 turns -0.0 into 0.0 so b = 0 never prints "-0".
    let vertex = -b / two_a + 0.0;

    let roots = if discriminant > 0.0 {
        let root = discriminant.sqrt();
        Roots::TwoReal((-b + root) / two_a, (-b - root) / two_a)
    } else if discriminant == 0.0 {
        Roots::OneReal(vertex)
    } else {
        Roots::ComplexPair {
            real: vertex,
            imaginary: ((-discriminant).sqrt() / two_a).abs(),
        }
    };

    tracing::debug!(a, b, c, discriminant, ?roots, "Solved quadratic");

    Ok(roots)
}
