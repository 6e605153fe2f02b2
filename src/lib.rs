mod config;
mod croppable;
mod error;
mod region;

pub mod pipeline;
pub mod transformer;

use tracing::{debug, warn};

pub use config::CropConfig;
pub use croppable::Croppable;
pub use error::{CropError, Result};
pub use pipeline::TransformationPipeline;
pub use region::{CropRectangle, RegionViolation};
pub use transformer::{CenterCrop, CropSkyHood, GenericTransform, ImageTransform};

/// Rows of vehicle hood visible at the bottom of a 320x160 reference frame.
pub const DEFAULT_HOOD_PIXEL_SIZE: u32 = 25;

/// Crops the sky above the horizon and the hood below it
///
/// Keeps the full width, drops the top `height / 5` rows (truncated) and
/// the bottom `hood_pixel_size` rows. The source image is left untouched.
///
/// # Parameters
/// * `image: &I` - Decoded frame, either an `ImageBuffer` or a `DynamicImage`
/// * `hood_pixel_size: u32` - Rows to remove from the bottom edge
///
/// # Returns
/// * `Result<I>` - The cropped frame, or `CropError::InvalidRegion` naming the
///   violated bound when the hood reaches the horizon
///
/// # Example
/// ```rust
/// use image::RgbImage;
/// use sky_hood_crop::crop_region;
///
/// let frame = RgbImage::new(320, 160);
/// let roi = crop_region(&frame, 25).unwrap();
/// assert_eq!(roi.dimensions(), (320, 103));
/// ```
pub fn crop_region<I: Croppable>(image: &I, hood_pixel_size: u32) -> Result<I> {
    let (width, height) = image.dimensions();
    let rect = CropRectangle::sky_hood(width, height, hood_pixel_size).map_err(|err| {
        warn!(width, height, hood_pixel_size, %err, "rejecting sky/hood crop");
        err
    })?;

    debug!(width, height, %rect, "cropping sky and hood");
    Ok(image.crop_to(&rect))
}

/// [`crop_region`] with the default hood of 25 rows.
pub fn crop_sky_hood<I: Croppable>(image: &I) -> Result<I> {
    crop_region(image, DEFAULT_HOOD_PIXEL_SIZE)
}

pub fn crop_with_config<I: Croppable>(image: &I, config: &CropConfig) -> Result<I> {
    crop_region(image, config.hood_pixel_size)
}
