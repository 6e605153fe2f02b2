use image::DynamicImage;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::Result;
use crate::transformer::{CropSkyHood, GenericTransform, ImageTransform};

/// Ordered preprocessing steps applied to one decoded frame.
///
/// Serializes as `{"steps": [{"type": "crop_sky_hood", ...}, ...]}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformationPipeline {
    steps: Vec<ImageTransform>,
}

impl TransformationPipeline {
    pub fn new() -> Self {
        TransformationPipeline { steps: Vec::new() }
    }

    /// Pipeline holding only the default sky/hood crop.
    pub fn sky_hood() -> Self {
        TransformationPipeline {
            steps: vec![CropSkyHood::default().into()],
        }
    }

    pub fn push(mut self, step: impl Into<ImageTransform>) -> Self {
        self.steps.push(step.into());
        self
    }

    pub fn steps(&self) -> &[ImageTransform] {
        &self.steps
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Runs every step in order and stops at the first failing one.
    pub fn apply(&self, image: &DynamicImage) -> Result<DynamicImage> {
        let mut result = image.clone();

        for (index, step) in self.steps.iter().enumerate() {
            trace!(index, ?step, "applying transform");
            result = step.transform(&result)?;
        }

        Ok(result)
    }
}
