use std::path::Path;

use dropline_core::Result;
use dropline_geometry::{CurveSamples, DropSegment};
use dropline_math::{Aabb3, Plane, Point3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::style::LineStyle;
use crate::surface::LineSurface;

/// A named, styled polyline in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLine {
    pub name: String,
    pub points: Vec<Point3>,
    pub style: LineStyle,
}

impl SceneLine {
    /// Per-axis coordinate lists, the layout most plotting APIs take.
    pub fn coords(&self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (
            self.points.iter().map(|p| p.x).collect(),
            self.points.iter().map(|p| p.y).collect(),
            self.points.iter().map(|p| p.z).collect(),
        )
    }
}

/// A 3D line scene ready to hand to a plotting surface
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub lines: Vec<SceneLine>,
    /// Height of the base plane the drop lines start from, once known.
    pub base_height: Option<f64>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a curve with the solid curve style
    pub fn add_curve(&mut self, name: &str, curve: &CurveSamples, color: [f32; 3]) {
        self.draw_curve(name, curve, LineStyle::curve(color));
    }

    /// Add the projection of `curve` onto `plane` with the faded shadow style
    pub fn add_shadow(&mut self, name: &str, curve: &CurveSamples, plane: &Plane, color: [f32; 3]) {
        if let Some(height) = plane.height() {
            self.base_height = Some(height);
        }
        self.draw_curve(name, &curve.project_onto(plane), LineStyle::shadow(color));
    }

    /// Add one dashed line per drop segment
    pub fn add_drop_segments(&mut self, name: &str, segments: &[DropSegment], color: [f32; 3]) {
        if let Some(first) = segments.first() {
            self.base_height = Some(first.base_z);
        }
        self.draw_drop_segments(name, segments, LineStyle::drop_line(color));
    }

    pub fn line(&self, name: &str) -> Option<&SceneLine> {
        self.lines.iter().find(|l| l.name == name)
    }

    /// Compute scene bounding box
    pub fn bounds(&self) -> Option<Aabb3> {
        self.lines
            .iter()
            .filter_map(|l| Aabb3::from_points(&l.points))
            .reduce(|a, b| a.merge(&b))
    }

    /// Total vertex count across all lines
    pub fn total_vertices(&self) -> usize {
        self.lines.iter().map(|l| l.points.len()).sum()
    }

    /// Serialize the scene as pretty-printed JSON
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the scene as JSON to `path`
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.export_json()?;
        std::fs::write(path, json)?;
        debug!(path = %path.display(), lines = self.lines.len(), "wrote scene");
        Ok(())
    }
}

impl LineSurface for Scene {
    fn draw_line(&mut self, name: &str, points: &[Point3], style: LineStyle) {
        self.lines.push(SceneLine {
            name: name.to_string(),
            points: points.to_vec(),
            style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{TAB_BLUE, TAB_RED};
    use dropline_math::dvec3;

    fn create_test_curve() -> CurveSamples {
        CurveSamples::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0], vec![0.0, 1.0, 2.0]).unwrap()
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new();
        assert_eq!(scene.lines.len(), 0);
        assert_eq!(scene.total_vertices(), 0);
        assert!(scene.bounds().is_none());
    }

    #[test]
    fn test_add_curve_and_bounds() {
        let mut scene = Scene::new();
        scene.add_curve("Curve", &create_test_curve(), TAB_RED);

        assert_eq!(scene.lines.len(), 1);
        assert_eq!(scene.lines[0].name, "Curve");
        assert_eq!(scene.lines[0].style, LineStyle::curve(TAB_RED));

        let bounds = scene.bounds().unwrap();
        assert_eq!(bounds.min, dvec3(0.0, 0.0, 0.0));
        assert_eq!(bounds.max, dvec3(2.0, 4.0, 2.0));
    }

    #[test]
    fn test_bounds_merge_across_lines() {
        let mut scene = Scene::new();
        scene.add_curve("Curve", &create_test_curve(), TAB_RED);
        let segments = create_test_curve().drop_segments(-3.0, 2).unwrap();
        scene.add_drop_segments("Drop", &segments, TAB_BLUE);

        let bounds = scene.bounds().unwrap();
        assert_eq!(bounds.min, dvec3(0.0, 0.0, -3.0));
        assert_eq!(bounds.max, dvec3(2.0, 4.0, 2.0));
        assert_eq!(bounds.center(), dvec3(1.0, 2.0, -0.5));
        assert_eq!(bounds.extents(), dvec3(2.0, 4.0, 5.0));
    }

    #[test]
    fn test_shadow_sits_on_plane() {
        let mut scene = Scene::new();
        scene.add_shadow("Shadow", &create_test_curve(), &Plane::base(-1.0), TAB_BLUE);

        assert_eq!(scene.base_height, Some(-1.0));
        let (_, _, z) = scene.lines[0].coords();
        assert!(z.iter().all(|&z| (z + 1.0).abs() < 1e-12));
    }

    #[test]
    fn test_drop_segments_one_line_each() {
        let mut scene = Scene::new();
        let segments = create_test_curve().drop_segments(-1.0, 3).unwrap();
        scene.add_drop_segments("Drop", &segments, TAB_RED);

        assert_eq!(scene.lines.len(), 3);
        assert_eq!(scene.total_vertices(), 6);
        let line = scene.line("Drop[2]").unwrap();
        assert_eq!(line.coords(), (vec![2.0, 2.0], vec![4.0, 4.0], vec![-1.0, 2.0]));
        assert!(line.style.dashed);
    }

    #[test]
    fn test_json_export() {
        let mut scene = Scene::new();
        scene.add_curve("TestCurve", &create_test_curve(), TAB_BLUE);

        let json = scene.export_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["lines"][0]["name"], "TestCurve");
        assert_eq!(parsed["lines"][0]["points"].as_array().unwrap().len(), 3);
        assert!(parsed["base_height"].is_null());
    }

    #[test]
    fn test_json_file_round_trip() {
        let mut scene = Scene::new();
        let segments = create_test_curve().drop_segments(-2.0, 2).unwrap();
        scene.add_drop_segments("Drop", &segments, TAB_BLUE);

        let path = std::env::temp_dir().join(format!(
            "dropline_test_scene_{}_json_file_round_trip.json",
            std::process::id()
        ));
        scene.write_json(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let loaded: Scene = serde_json::from_str(&text).unwrap();
        assert_eq!(loaded, scene);

        let _ = std::fs::remove_file(path);
    }
}
