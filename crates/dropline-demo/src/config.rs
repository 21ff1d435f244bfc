//! Demo parameters, loadable from a JSON file.

use std::path::Path;

use dropline_core::{DropLineError, Result, Validate};
use dropline_geometry::CurveSamples;
use serde::{Deserialize, Serialize};

/// Every field is optional in the file; missing ones keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Distance of the base plane below the lowest curve point.
    pub eps: f64,
    /// Drop lines per curve.
    pub drop_count: i64,
    pub x_start: f64,
    pub x_stop: f64,
    pub x_step: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            eps: 0.5,
            drop_count: 10,
            x_start: 0.0,
            x_stop: 4.0,
            x_step: 0.02,
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        if !(self.eps.is_finite() && self.eps >= 0.0) {
            return Err(DropLineError::invalid_argument(format!(
                "eps must be finite and non-negative, got {}",
                self.eps
            )));
        }
        if self.drop_count < 2 {
            return Err(DropLineError::invalid_argument(format!(
                "drop_count must be >= 2, got {}",
                self.drop_count
            )));
        }
        if !(self.x_step.is_finite() && self.x_step > 0.0) {
            return Err(DropLineError::invalid_argument(format!(
                "x_step must be finite and positive, got {}",
                self.x_step
            )));
        }
        if !(self.x_start < self.x_stop) {
            return Err(DropLineError::invalid_argument(format!(
                "x range is empty: [{}, {})",
                self.x_start, self.x_stop
            )));
        }
        CurveSamples::arange_len(self.x_start, self.x_stop, self.x_step)?;
        Ok(())
    }
}
