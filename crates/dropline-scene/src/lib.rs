pub mod scene;
pub mod style;
pub mod surface;

// Re-export main types
pub use scene::{Scene, SceneLine};
pub use style::{LineStyle, TAB_BLUE, TAB_RED};
pub use surface::LineSurface;
