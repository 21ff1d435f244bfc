use dropline_geometry::{CurveSamples, DropSegment};
use dropline_math::Point3;

use crate::style::LineStyle;

/// Anything that can draw a styled 3D polyline.
///
/// Plotting backends implement [`draw_line`](LineSurface::draw_line); the
/// provided methods map curves and drop segments onto it.
pub trait LineSurface {
    fn draw_line(&mut self, name: &str, points: &[Point3], style: LineStyle);

    fn draw_curve(&mut self, name: &str, curve: &CurveSamples, style: LineStyle) {
        self.draw_line(name, &curve.points(), style);
    }

    /// One two-point line per segment, named `{name}[i]`.
    fn draw_drop_segments(&mut self, name: &str, segments: &[DropSegment], style: LineStyle) {
        for (i, segment) in segments.iter().enumerate() {
            self.draw_line(&format!("{name}[{i}]"), &segment.endpoints(), style);
        }
    }
}
