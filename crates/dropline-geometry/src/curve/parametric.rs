//! Curve defined by an arbitrary closure.

use std::fmt;

use dropline_math::Point3;

use super::Curve;

/// A curve `t -> (x(t), y(t), z(t))` over `[t_min, t_max]`.
pub struct ParametricCurve {
    name: String,
    domain: (f64, f64),
    eval: Box<dyn Fn(f64) -> Point3 + Send + Sync>,
}

impl ParametricCurve {
    pub fn new<F>(name: impl Into<String>, t_min: f64, t_max: f64, eval: F) -> Self
    where
        F: Fn(f64) -> Point3 + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            domain: (t_min, t_max),
            eval: Box::new(eval),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Curve for ParametricCurve {
    fn point_at(&self, t: f64) -> Point3 {
        (self.eval)(t)
    }

    fn domain(&self) -> (f64, f64) {
        self.domain
    }
}

impl fmt::Debug for ParametricCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParametricCurve")
            .field("name", &self.name)
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}
