use serde::{Deserialize, Serialize};

/// Matplotlib `tab:red`.
pub const TAB_RED: [f32; 3] = [0.839, 0.153, 0.157];
/// Matplotlib `tab:blue`.
pub const TAB_BLUE: [f32; 3] = [0.122, 0.467, 0.706];

const PALETTE: [[f32; 3]; 6] = [
    TAB_RED,
    TAB_BLUE,
    [0.173, 0.627, 0.173], // Green
    [1.000, 0.498, 0.055], // Orange
    [0.580, 0.404, 0.741], // Purple
    [0.090, 0.745, 0.812], // Cyan
];

/// Visual attributes of a single polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: [f32; 3],
    pub opacity: f32,
    pub width: f32,
    pub dashed: bool,
    /// Draw a marker at every vertex.
    pub markers: bool,
}

impl LineStyle {
    /// Solid, opaque curve.
    pub fn curve(color: [f32; 3]) -> Self {
        Self {
            color,
            opacity: 1.0,
            width: 5.0,
            dashed: false,
            markers: false,
        }
    }

    /// Faded copy of a curve drawn on the base plane.
    pub fn shadow(color: [f32; 3]) -> Self {
        Self {
            opacity: 0.4,
            ..Self::curve(color)
        }
    }

    /// Thin dashed line with endpoint markers.
    pub fn drop_line(color: [f32; 3]) -> Self {
        Self {
            color,
            opacity: 0.6,
            width: 2.0,
            dashed: true,
            markers: true,
        }
    }

    /// Palette color for the `index`-th curve, cycling.
    pub fn palette_color(index: usize) -> [f32; 3] {
        PALETTE[index % PALETTE.len()]
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::curve(TAB_BLUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let shadow = LineStyle::shadow(TAB_RED);
        assert_eq!(shadow.color, TAB_RED);
        assert_eq!(shadow.opacity, 0.4);
        assert_eq!(shadow.width, 5.0);

        let drop = LineStyle::drop_line(TAB_BLUE);
        assert!(drop.dashed && drop.markers);
        assert_eq!(drop.opacity, 0.6);
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(LineStyle::palette_color(0), TAB_RED);
        assert_eq!(LineStyle::palette_color(1), TAB_BLUE);
        assert_eq!(LineStyle::palette_color(6), LineStyle::palette_color(0));
    }
}
