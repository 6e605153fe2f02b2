use std::fmt;

use crate::error::{CropError, Result};

/// Axis-aligned crop rectangle in pixel offsets from the top-left origin.
///
/// `right` and `bottom` are exclusive. A value of this type always
/// satisfies `left < right <= width` and `top < bottom <= height` for the
/// source it was computed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRectangle {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

/// The bound a rejected rectangle broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionViolation {
    ZeroWidth,
    BottomNotPositive { bottom: i64 },
    TopNotAboveBottom { top: i64, bottom: i64 },
    LeftNotBeforeRight { left: i64, right: i64 },
    OutOfBounds { right: i64, bottom: i64 },
}

impl fmt::Display for RegionViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionViolation::ZeroWidth => write!(f, "rectangle has zero width"),
            RegionViolation::BottomNotPositive { bottom } => {
                write!(f, "bottom edge {} is not below the origin", bottom)
            }
            RegionViolation::TopNotAboveBottom { top, bottom } => {
                write!(f, "top edge {} is not above bottom edge {}", top, bottom)
            }
            RegionViolation::LeftNotBeforeRight { left, right } => {
                write!(f, "left edge {} is not before right edge {}", left, right)
            }
            RegionViolation::OutOfBounds { right, bottom } => {
                write!(f, "corner ({}, {}) lies outside the image", right, bottom)
            }
        }
    }
}

impl CropRectangle {
    /// Rectangle that drops the top fifth of the frame and `hood_pixel_size`
    /// rows at the bottom, keeping the full width.
    ///
    /// # Example
    /// ```rust
    /// use sky_hood_crop::CropRectangle;
    ///
    /// let rect = CropRectangle::sky_hood(320, 160, 25).unwrap();
    /// assert_eq!((rect.top, rect.bottom), (32, 135));
    /// ```
    pub fn sky_hood(width: u32, height: u32, hood_pixel_size: u32) -> Result<Self> {
        if height == 0 {
            return Err(CropError::InvalidInput(
                "image has no rows to place a horizon in".to_string(),
            ));
        }
        // truncation toward zero of the float quotient, as f64 holds every u32 exactly
        let top = (height as f64 / 5.0) as i64;
        let bottom = height as i64 - hood_pixel_size as i64;
        Self::checked(0, top, width as i64, bottom, width, height)
    }

    /// Validates an arbitrary rectangle against a `width` x `height` source.
    pub fn new(left: u32, top: u32, right: u32, bottom: u32, width: u32, height: u32) -> Result<Self> {
        Self::checked(
            left as i64,
            top as i64,
            right as i64,
            bottom as i64,
            width,
            height,
        )
    }

    fn checked(left: i64, top: i64, right: i64, bottom: i64, width: u32, height: u32) -> Result<Self> {
        let violation = if width == 0 {
            Some(RegionViolation::ZeroWidth)
        } else if left >= right {
            Some(RegionViolation::LeftNotBeforeRight { left, right })
        } else if bottom <= 0 {
            Some(RegionViolation::BottomNotPositive { bottom })
        } else if top >= bottom {
            Some(RegionViolation::TopNotAboveBottom { top, bottom })
        } else if right > width as i64 || bottom > height as i64 {
            Some(RegionViolation::OutOfBounds { right, bottom })
        } else {
            None
        };

        match violation {
            Some(violation) => Err(CropError::InvalidRegion {
                width,
                height,
                violation,
            }),
            // every edge is now within 0..=u32 source dimensions
            None => Ok(CropRectangle {
                left: left as u32,
                top: top as u32,
                right: right as u32,
                bottom: bottom as u32,
            }),
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

impl fmt::Display for CropRectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
