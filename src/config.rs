//! Configuration for highlight construction.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default vertical tolerance (document units) for two fragments to share a line.
pub const DEFAULT_LINE_TOLERANCE: f32 = 2.0;

/// Highlight construction configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Maximum baseline difference between neighbouring fragments on one visual line.
    ///
    /// The comparison is strict: a difference equal to the tolerance starts a new line.
    pub line_tolerance: f32,

    /// Factor applied to the emitted rectangles (pixels per document unit).
    pub scale: f32,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            line_tolerance: DEFAULT_LINE_TOLERANCE,
            scale: 1.0,
        }
    }

    /// Set the line grouping tolerance.
    pub fn with_line_tolerance(mut self, tolerance: f32) -> Self {
        self.line_tolerance = tolerance;
        self
    }

    /// Set the output scale.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Check that every value is finite and positive.
    pub fn validate(&self) -> Result<()> {
        if !self.line_tolerance.is_finite() || self.line_tolerance <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "line_tolerance must be a positive finite number, got {}",
                self.line_tolerance
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "scale must be a positive finite number, got {}",
                self.scale
            )));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON. Missing keys take defaults.
    ///
    /// ```
    /// use quote_locator::config::HighlightConfig;
    ///
    /// let config = HighlightConfig::from_json(r#"{ "scale": 2.0 }"#).unwrap();
    /// assert_eq!(config.scale, 2.0);
    /// assert_eq!(config.line_tolerance, 2.0);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
