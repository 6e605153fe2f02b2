use enum_dispatch::enum_dispatch;
use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::croppable::Croppable;
use crate::error::Result;
use crate::region::CropRectangle;
use crate::{crop_region, DEFAULT_HOOD_PIXEL_SIZE};

#[enum_dispatch]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ImageTransform {
    CropSkyHood(CropSkyHood),
    CenterCrop(CenterCrop),
}

#[enum_dispatch(ImageTransform)]
pub trait GenericTransform {
    fn transform(&self, input: &DynamicImage) -> Result<DynamicImage>;
}

/// Drops the sky (top fifth) and the hood band of a driving frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropSkyHood {
    #[serde(default = "default_hood_pixel_size")]
    pub hood_pixel_size: u32,
}

fn default_hood_pixel_size() -> u32 {
    DEFAULT_HOOD_PIXEL_SIZE
}

impl Default for CropSkyHood {
    fn default() -> Self {
        CropSkyHood {
            hood_pixel_size: DEFAULT_HOOD_PIXEL_SIZE,
        }
    }
}

impl GenericTransform for CropSkyHood {
    fn transform(&self, input: &DynamicImage) -> Result<DynamicImage> {
        crop_region(input, self.hood_pixel_size)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterCrop {
    pub width: u32,
    pub height: u32,
}

impl GenericTransform for CenterCrop {
    fn transform(&self, input: &DynamicImage) -> Result<DynamicImage> {
        let (width, height) = input.dimensions();
        let left = width.saturating_sub(self.width) / 2;
        let top = height.saturating_sub(self.height) / 2;
        let rect = CropRectangle::new(
            left,
            top,
            left.saturating_add(self.width),
            top.saturating_add(self.height),
            width,
            height,
        )?;
        Ok(input.crop_to(&rect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CropError, RegionViolation};
    use image::{Rgb, RgbImage};

    fn frame(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([x as u8, y as u8, 0])
        }))
    }

    #[test]
    fn sky_hood_step_uses_default_hood() {
        let step: ImageTransform = CropSkyHood::default().into();
        let cropped = step.transform(&frame(320, 160)).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (320, 103));
    }

    #[test]
    fn center_crop_takes_middle() {
        let step: ImageTransform = CenterCrop {
            width: 4,
            height: 2,
        }
        .into();
        let cropped = step.transform(&frame(10, 6)).unwrap().to_rgb8();
        assert_eq!(cropped.dimensions(), (4, 2));
        assert_eq!(*cropped.get_pixel(0, 0), Rgb([3, 2, 0]));
    }

    #[test]
    fn center_crop_larger_than_frame() {
        let step = CenterCrop {
            width: 12,
            height: 2,
        };
        match step.transform(&frame(10, 6)) {
            Err(CropError::InvalidRegion { violation, .. }) => assert_eq!(
                violation,
                RegionViolation::OutOfBounds { right: 12, bottom: 4 }
            ),
            other => panic!("expected out of bounds, got {:?}", other),
        }
    }

    #[test]
    fn zero_size_center_crop_reports_empty_width() {
        let step = CenterCrop {
            width: 0,
            height: 0,
        };
        for (width, height) in [(1, 1), (10, 6)] {
            match step.transform(&frame(width, height)) {
                Err(CropError::InvalidRegion { violation, .. }) => assert!(
                    matches!(violation, RegionViolation::LeftNotBeforeRight { .. }),
                    "{}x{} reported {:?}",
                    width,
                    height,
                    violation
                ),
                other => panic!("expected InvalidRegion, got {:?}", other),
            }
        }
    }

    #[test]
    fn steps_are_tagged_in_json() {
        let step: ImageTransform = CropSkyHood { hood_pixel_size: 10 }.into();
        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(json, r#"{"type":"crop_sky_hood","hood_pixel_size":10}"#);

        let step: ImageTransform = serde_json::from_str(r#"{"type":"crop_sky_hood"}"#).unwrap();
        assert_eq!(step, ImageTransform::CropSkyHood(CropSkyHood::default()));
    }
}
