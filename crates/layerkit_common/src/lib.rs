//! # Layerkit Common - Shared Geometry and Coordinate Mapping
//!
//! Foundational types shared across the layerkit crates: points, sizes,
//! bounding boxes, and the image-pixel ↔ display-surface transform.
//!
//! ## Example
//!
//! ```rust
//! use layerkit_common::{BBox, PixelSize, Size, Transform};
//!
//! // Letterbox a 400x300 image into a 600x600 surface
//! let fit = Transform::fit(PixelSize::new(400, 300), Size::new(600.0, 600.0)).unwrap();
//! assert_eq!(fit.scale, 1.5);
//! assert_eq!(fit.offset_y, 75.0);
//!
//! // Restrict a detector box to the image bounds
//! let clamped = BBox::new(90.0, 90.0, 20.0, 20.0).clamp_to(PixelSize::new(100, 100));
//! assert_eq!(clamped.width, 10.0);
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-exports for convenience
pub use chrono::{DateTime, Utc};

/// Result type for common geometry operations
pub type Result<T> = std::result::Result<T, CommonError>;

/// Standard error type for the shared geometry layer
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("Invalid value: {message}")]
    InvalidValue { message: String },
}

/// 2D point with floating-point coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate this point by the given offsets
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Calculate distance to another point
    pub fn distance_to(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Size with floating-point width and height (display-surface units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Calculate the area
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Get aspect ratio (width / height)
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Integer pixel dimensions of a raster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    /// Create new pixel dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel count
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Convert to floating-point size
    pub fn as_size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }
}

/// Axis-aligned bounding box in pixel units.
///
/// Width and height are always non-negative; constructors clamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    /// Create a new bounding box (negative extents clamp to zero)
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Get the area of this box
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Whether the box covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside this box
    pub fn contains(&self, point: Point2D) -> bool {
        point.x >= self.x
            && point.x < self.right()
            && point.y >= self.y
            && point.y < self.bottom()
    }

    /// Intersection with another box (empty box at the origin corner when disjoint)
    pub fn intersect(&self, other: &BBox) -> BBox {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        BBox::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Restrict this box to `[0, width) × [0, height)`
    pub fn clamp_to(&self, bounds: PixelSize) -> BBox {
        let w = bounds.width as f64;
        let h = bounds.height as f64;
        let x0 = self.x.clamp(0.0, w);
        let y0 = self.y.clamp(0.0, h);
        let x1 = self.right().clamp(0.0, w);
        let y1 = self.bottom().clamp(0.0, h);
        BBox::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Integer pixel rect `(x, y, width, height)`, or `None` when empty.
    ///
    /// Coordinates are rounded; callers clamp first.
    pub fn to_pixel_rect(&self) -> Option<(u32, u32, u32, u32)> {
        if self.is_empty() {
            return None;
        }
        let x = self.x.round().max(0.0) as u32;
        let y = self.y.round().max(0.0) as u32;
        let w = self.width.round() as u32;
        let h = self.height.round() as u32;
        if w == 0 || h == 0 {
            return None;
        }
        Some((x, y, w, h))
    }
}

/// Mapping from image-pixel coordinates to display-surface coordinates.
///
/// `surface = image * scale + offset`. Scale is strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Transform {
    /// The identity mapping
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Compute the centered, aspect-preserving letterbox fit of an image
    /// into a display surface.
    pub fn fit(image: PixelSize, surface: Size) -> Result<Self> {
        if image.width == 0 || image.height == 0 {
            return Err(CommonError::InvalidDimensions {
                width: image.width as f64,
                height: image.height as f64,
            });
        }
        if surface.width <= 0.0 || surface.height <= 0.0 {
            return Err(CommonError::InvalidDimensions {
                width: surface.width,
                height: surface.height,
            });
        }

        let scale = (surface.width / image.width as f64)
            .min(surface.height / image.height as f64);
        Ok(Self {
            scale,
            offset_x: (surface.width - image.width as f64 * scale) / 2.0,
            offset_y: (surface.height - image.height as f64 * scale) / 2.0,
        })
    }

    /// Map an image-pixel point to surface coordinates
    pub fn image_to_surface(&self, p: Point2D) -> Point2D {
        Point2D::new(
            p.x * self.scale + self.offset_x,
            p.y * self.scale + self.offset_y,
        )
    }

    /// Map a surface point back to the nearest image pixel
    pub fn surface_to_image(&self, p: Point2D) -> Point2D {
        Point2D::new(
            ((p.x - self.offset_x) / self.scale).round(),
            ((p.y - self.offset_y) / self.scale).round(),
        )
    }

    /// Map an image-space rectangle to surface coordinates
    pub fn rect_to_surface(&self, rect: &BBox) -> BBox {
        let origin = self.image_to_surface(Point2D::new(rect.x, rect.y));
        BBox::new(
            origin.x,
            origin.y,
            rect.width * self.scale,
            rect.height * self.scale,
        )
    }

    /// Map a surface rectangle back to image pixels
    pub fn rect_to_image(&self, rect: &BBox) -> BBox {
        let origin = self.surface_to_image(Point2D::new(rect.x, rect.y));
        let corner = self.surface_to_image(Point2D::new(rect.right(), rect.bottom()));
        BBox::new(
            origin.x,
            origin.y,
            corner.x - origin.x,
            corner.y - origin.y,
        )
    }

    /// Return this transform with the offsets shifted additively
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            scale: self.scale,
            offset_x: self.offset_x + dx,
            offset_y: self.offset_y + dy,
        }
    }

    /// Return this transform with the scale multiplied
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            scale: self.scale * factor,
            offset_x: self.offset_x,
            offset_y: self.offset_y,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
