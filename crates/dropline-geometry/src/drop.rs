//! Vertical drop-line segments from a base plane up to a curve.

use dropline_core::Result;
use dropline_math::Point3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve::Curve;
use crate::sample::sample;

/// Number of drop lines when the caller does not ask for more: one at each end.
pub const DEFAULT_DROP_COUNT: i64 = 2;

/// A vertical segment at `(x, y)` from the base plane at `base_z` up to `top_z`.
///
/// Parameterized over `[0, 1]`, from the base plane to the curve point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropSegment {
    pub x: f64,
    pub y: f64,
    pub base_z: f64,
    pub top_z: f64,
}

impl DropSegment {
    pub fn new(x: f64, y: f64, base_z: f64, top_z: f64) -> Self {
        Self { x, y, base_z, top_z }
    }

    /// Endpoint on the base plane.
    pub fn base(&self) -> Point3 {
        Point3::new(self.x, self.y, self.base_z)
    }

    /// Endpoint on the curve.
    pub fn top(&self) -> Point3 {
        Point3::new(self.x, self.y, self.top_z)
    }

    pub fn endpoints(&self) -> [Point3; 2] {
        [self.base(), self.top()]
    }

    /// Per-axis coordinate lists `([x, x], [y, y], [base_z, top_z])`, the shape
    /// plotting surfaces take for a single line.
    pub fn coords(&self) -> ([f64; 2], [f64; 2], [f64; 2]) {
        (
            [self.x, self.x],
            [self.y, self.y],
            [self.base_z, self.top_z],
        )
    }

    pub fn length(&self) -> f64 {
        (self.top_z - self.base_z).abs()
    }
}

impl Curve for DropSegment {
    fn point_at(&self, t: f64) -> Point3 {
        self.base() + t * (self.top() - self.base())
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

/// Build `n` drop segments from the base plane at `minz` up to evenly spaced
/// points of the curve given as parallel coordinate sequences.
///
/// Each axis is sampled on its own with the same `n`, so all three pick the
/// same indices. Segments come back in curve order.
///
/// # Errors
/// Whatever [`sample`] reports for `n` outside `[2, len]`.
pub fn build_drop_segments(
    x: &[f64],
    y: &[f64],
    z: &[f64],
    minz: f64,
    n: i64,
) -> Result<Vec<DropSegment>> {
    let xs = sample(x, n)?;
    let ys = sample(y, n)?;
    let zs = sample(z, n)?;

    let segments: Vec<DropSegment> = xs
        .into_iter()
        .zip(ys)
        .zip(zs)
        .map(|((xe, ye), ze)| DropSegment::new(xe, ye, minz, ze))
        .collect();

    debug!(count = segments.len(), minz, "built drop segments");
    Ok(segments)
}

/// [`build_drop_segments`] with [`DEFAULT_DROP_COUNT`].
pub fn build_default_drop_segments(
    x: &[f64],
    y: &[f64],
    z: &[f64],
    minz: f64,
) -> Result<Vec<DropSegment>> {
    build_drop_segments(x, y, z, minz, DEFAULT_DROP_COUNT)
}
