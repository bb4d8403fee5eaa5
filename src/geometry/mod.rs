//! Geometric primitives for highlight output.
//!
//! Everything here lives in viewport space: the origin is the top-left corner of the
//! page box and Y grows downward. Document-space coordinates (Y growing upward from
//! the page bottom) only appear on [`TextFragment`](crate::layout::TextFragment).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// An axis-aligned highlight rectangle in viewport space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightRect {
    /// X coordinate of top-left corner
    pub x: f32,
    /// Y coordinate of top-left corner
    pub y: f32,
    /// Width of rectangle
    pub width: f32,
    /// Height of rectangle
    pub height: f32,
}

impl HighlightRect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use quote_locator::geometry::HighlightRect;
    ///
    /// let rect = HighlightRect::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from two corner points.
    pub fn from_points(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the top edge y-coordinate.
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Compute the union of this rectangle with another.
    ///
    /// Returns the smallest rectangle that contains both rectangles.
    ///
    /// # Examples
    ///
    /// ```
    /// use quote_locator::geometry::HighlightRect;
    ///
    /// let r1 = HighlightRect::new(0.0, 0.0, 50.0, 50.0);
    /// let r2 = HighlightRect::new(25.0, 25.0, 50.0, 50.0);
    /// let union = r1.union(&r2);
    ///
    /// assert_eq!(union.x, 0.0);
    /// assert_eq!(union.y, 0.0);
    /// assert_eq!(union.right(), 75.0);
    /// assert_eq!(union.bottom(), 75.0);
    /// ```
    pub fn union(&self, other: &HighlightRect) -> HighlightRect {
        let x0 = self.left().min(other.left());
        let y0 = self.top().min(other.top());
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        HighlightRect::from_points(x0, y0, x1, y1)
    }

    /// Multiply position and size by `factor`.
    pub fn scaled(&self, factor: f32) -> HighlightRect {
        HighlightRect {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Express this rectangle as percentages of the viewport box.
    ///
    /// The overlay positions highlight boxes relative to the page element, so it
    /// needs fractions of the page size rather than absolute pixels.
    ///
    /// ```
    /// use quote_locator::geometry::{HighlightRect, Viewport};
    ///
    /// let viewport = Viewport::new(200.0, 400.0).unwrap();
    /// let rel = HighlightRect::new(50.0, 100.0, 100.0, 100.0).to_relative(&viewport);
    /// assert_eq!(rel.left, 25.0);
    /// assert_eq!(rel.top, 25.0);
    /// assert_eq!(rel.width, 50.0);
    /// assert_eq!(rel.height, 25.0);
    /// ```
    pub fn to_relative(&self, viewport: &Viewport) -> RelativeRect {
        RelativeRect {
            left: self.x / viewport.width * 100.0,
            top: self.y / viewport.height * 100.0,
            width: self.width / viewport.width * 100.0,
            height: self.height / viewport.height * 100.0,
        }
    }
}

/// A rectangle in percent of the viewport box (0–100 on each axis).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelativeRect {
    /// Left offset in percent of viewport width
    pub left: f32,
    /// Top offset in percent of viewport height
    pub top: f32,
    /// Width in percent of viewport width
    pub width: f32,
    /// Height in percent of viewport height
    pub height: f32,
}

/// Size of a rendered page box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Page width
    pub width: f32,
    /// Page height
    pub height: f32,
}

impl Viewport {
    /// Create a viewport, rejecting non-finite or non-positive dimensions.
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let viewport = Self { width, height };
        viewport.validate()?;
        Ok(viewport)
    }

    /// Check that both dimensions are finite and positive.
    ///
    /// Needed for viewports that arrive through deserialization.
    pub fn validate(&self) -> Result<()> {
        check_dimension("width", self.width)?;
        check_dimension("height", self.height)
    }

    /// Viewport of the same page rendered at `scale`.
    pub fn scaled(&self, scale: f32) -> Result<Viewport> {
        Viewport::new(self.width * scale, self.height * scale)
    }
}

/// Reject a viewport dimension that is not a positive finite number.
pub(crate) fn check_dimension(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidViewport(format!(
            "{} must be a positive finite number, got {}",
            name, value
        )));
    }
    Ok(())
}
