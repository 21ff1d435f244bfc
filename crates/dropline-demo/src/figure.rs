//! Assembles the two-curve drop-line figure.

use dropline_core::Result;
use dropline_geometry::demo::demo_curves;
use dropline_geometry::{base_plane_height, CurveSamples};
use dropline_math::Plane;
use dropline_scene::{LineStyle, Scene};
use tracing::{debug, info};

use crate::config::DemoConfig;

/// Both curves, their shadows on the base plane, and `drop_count` drop lines
/// per curve.
pub fn build_scene(config: &DemoConfig) -> Result<Scene> {
    let curves = demo_curves(config.x_stop)
        .iter()
        .map(|curve| -> Result<(String, CurveSamples)> {
            let samples =
                CurveSamples::from_curve_arange(curve, config.x_start, config.x_stop, config.x_step)?;
            Ok((curve.name().to_string(), samples))
        })
        .collect::<Result<Vec<_>>>()?;

    let refs: Vec<&CurveSamples> = curves.iter().map(|(_, samples)| samples).collect();
    let minz = base_plane_height(&refs, config.eps)?;
    let plane = Plane::base(minz);
    info!(curves = curves.len(), minz, "base plane placed");

    let mut scene = Scene::new();
    for (i, (name, samples)) in curves.iter().enumerate() {
        let color = LineStyle::palette_color(i);
        scene.add_curve(name, samples, color);
        scene.add_shadow(&format!("{name} shadow"), samples, &plane, color);

        let segments = samples.drop_segments(minz, config.drop_count)?;
        debug!(curve = %name, points = samples.len(), drops = segments.len(), "curve sampled");
        scene.add_drop_segments(&format!("{name} drop"), &segments, color);
    }

    Ok(scene)
}
