//! The two example curves of the drop-line figure.

use dropline_math::Point3;

use crate::curve::ParametricCurve;

/// `y = x^2`, `z = x * sin(y / 2)`, parameterized by `x`.
pub fn rising_curve(x_max: f64) -> ParametricCurve {
    ParametricCurve::new("L=1", 0.0, x_max, |x| {
        let y = x * x;
        Point3::new(x, y, x * (y / 2.0).sin())
    })
}

/// `y = 16 - 1.5 x^2`, `z = x * cos(y / 4)`, parameterized by `x`.
pub fn falling_curve(x_max: f64) -> ParametricCurve {
    ParametricCurve::new("L=2", 0.0, x_max, |x| {
        let y = 16.0 - 1.5 * x * x;
        Point3::new(x, y, x * (y / 4.0).cos())
    })
}

/// Both example curves over `[0, x_max]`.
pub fn demo_curves(x_max: f64) -> [ParametricCurve; 2] {
    [rising_curve(x_max), falling_curve(x_max)]
}
