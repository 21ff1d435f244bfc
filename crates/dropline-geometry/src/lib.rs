//! Dropline geometry: curves, even sampling, and drop-line segments.

pub mod curve;
pub mod demo;
pub mod drop;
pub mod sample;
pub mod samples;

pub use curve::{Curve, ParametricCurve};
pub use drop::{build_default_drop_segments, build_drop_segments, DropSegment, DEFAULT_DROP_COUNT};
pub use sample::{sample, sample_indices};
pub use samples::{base_plane_height, CurveSamples, MAX_ARANGE_POINTS};
