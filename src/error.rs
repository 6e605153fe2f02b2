use thiserror::Error;

use crate::region::RegionViolation;

#[derive(Debug, Error)]
pub enum CropError {
    #[error("invalid crop region for {width}x{height} image: {violation}")]
    InvalidRegion {
        width: u32,
        height: u32,
        violation: RegionViolation,
    },

    #[error("invalid input image: {0}")]
    InvalidInput(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CropError>;
