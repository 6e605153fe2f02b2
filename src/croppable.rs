use image::imageops::crop_imm;
use image::{DynamicImage, ImageBuffer, Pixel};

use crate::region::CropRectangle;

/// An in-memory image that can hand out a pixel-exact copy of a sub-rectangle.
///
/// `crop_to` never touches `self`; the returned image owns its own buffer.
pub trait Croppable: Sized {
    fn dimensions(&self) -> (u32, u32);

    fn crop_to(&self, rect: &CropRectangle) -> Self;
}

impl<P> Croppable for ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    fn dimensions(&self) -> (u32, u32) {
        ImageBuffer::dimensions(self)
    }

    fn crop_to(&self, rect: &CropRectangle) -> Self {
        crop_imm(self, rect.left, rect.top, rect.width(), rect.height()).to_image()
    }
}

impl Croppable for DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn crop_to(&self, rect: &CropRectangle) -> Self {
        self.crop_imm(rect.left, rect.top, rect.width(), rect.height())
    }
}
