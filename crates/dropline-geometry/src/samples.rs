//! Discrete curve data as three parallel coordinate sequences.

use dropline_core::{BoundingBox, DropLineError, Result, Validate};
use dropline_math::{Aabb3, Plane, Point3};
use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::drop::{build_drop_segments, DropSegment};

/// Upper bound on the points a single arange evaluation may produce.
pub const MAX_ARANGE_POINTS: usize = 10_000_000;

/// An ordered run of 3D points stored per axis.
///
/// Always holds at least two points, with `x`, `y` and `z` of equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSamples {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl CurveSamples {
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self> {
        let samples = Self { x, y, z };
        samples.validate()?;
        Ok(samples)
    }

    pub fn from_points(points: &[Point3]) -> Result<Self> {
        Self::new(
            points.iter().map(|p| p.x).collect(),
            points.iter().map(|p| p.y).collect(),
            points.iter().map(|p| p.z).collect(),
        )
    }

    /// Number of points in `start, start + step, ...` strictly below `stop`,
    /// i.e. `ceil((stop - start) / step)`.
    ///
    /// # Errors
    /// [`DropLineError::InvalidArgument`] for a non-finite or non-positive
    /// step, non-finite bounds, or more than [`MAX_ARANGE_POINTS`] points.
    pub fn arange_len(start: f64, stop: f64, step: f64) -> Result<usize> {
        if !(step.is_finite() && step > 0.0) {
            return Err(DropLineError::invalid_argument(format!(
                "step must be finite and positive, got {step}"
            )));
        }
        if !(start.is_finite() && stop.is_finite()) {
            return Err(DropLineError::invalid_argument(format!(
                "range bounds must be finite, got [{start}, {stop})"
            )));
        }

        let count = ((stop - start) / step).ceil().max(0.0);
        if !count.is_finite() || count > MAX_ARANGE_POINTS as f64 {
            return Err(DropLineError::invalid_argument(format!(
                "range [{start}, {stop}) with step {step} exceeds {MAX_ARANGE_POINTS} points"
            )));
        }
        Ok(count as usize)
    }

    /// Evaluate `curve` at `start, start + step, ...` strictly below `stop`.
    ///
    /// Point `i` is taken at `start + i * step`; see [`Self::arange_len`] for
    /// the point count and its limits.
    pub fn from_curve_arange(curve: &dyn Curve, start: f64, stop: f64, step: f64) -> Result<Self> {
        let count = Self::arange_len(start, stop, step)?;
        let points: Vec<Point3> = (0..count)
            .map(|i| curve.point_at(start + i as f64 * step))
            .collect();
        Self::from_points(&points)
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Never true for a validated curve.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn point(&self, i: usize) -> Point3 {
        Point3::new(self.x[i], self.y[i], self.z[i])
    }

    pub fn points(&self) -> Vec<Point3> {
        (0..self.len()).map(|i| self.point(i)).collect()
    }

    pub fn min_z(&self) -> f64 {
        self.z.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// The curve flattened onto `plane`, point for point.
    pub fn project_onto(&self, plane: &Plane) -> Self {
        let projected: Vec<Point3> = self
            .points()
            .into_iter()
            .map(|p| plane.project_point(p))
            .collect();
        Self {
            x: projected.iter().map(|p| p.x).collect(),
            y: projected.iter().map(|p| p.y).collect(),
            z: projected.iter().map(|p| p.z).collect(),
        }
    }

    /// `n` drop segments from the plane at `minz` up to this curve.
    pub fn drop_segments(&self, minz: f64, n: i64) -> Result<Vec<DropSegment>> {
        build_drop_segments(&self.x, &self.y, &self.z, minz, n)
    }
}

impl Validate for CurveSamples {
    fn validate(&self) -> Result<()> {
        let (lx, ly, lz) = (self.x.len(), self.y.len(), self.z.len());
        if lx != ly || lx != lz {
            return Err(DropLineError::invalid_argument(format!(
                "coordinate sequences differ in length (x = {lx}, y = {ly}, z = {lz})"
            )));
        }
        if lx < 2 {
            return Err(DropLineError::invalid_argument(format!(
                "a curve needs at least 2 points, got {lx}"
            )));
        }
        Ok(())
    }
}

impl BoundingBox for CurveSamples {
    type Point = Point3;

    fn bounding_box(&self) -> (Point3, Point3) {
        let mut aabb = Aabb3::from_point(self.point(0));
        for i in 1..self.len() {
            aabb.include_point(self.point(i));
        }
        (aabb.min, aabb.max)
    }
}

/// Height of a base plane lying `eps` below the lowest point of all `curves`.
pub fn base_plane_height(curves: &[&CurveSamples], eps: f64) -> Result<f64> {
    if curves.is_empty() {
        return Err(DropLineError::invalid_argument(
            "base plane height needs at least one curve",
        ));
    }
    let lowest = curves
        .iter()
        .map(|c| c.min_z())
        .fold(f64::INFINITY, f64::min);
    Ok(lowest - eps)
}
