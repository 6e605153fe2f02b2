use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{serde_as, As, DeserializeAs, DisplayFromStr, PickFirst, Same, SerializeAs};

use crate::error::Result;
use crate::DEFAULT_HOOD_PIXEL_SIZE;

/// Configuration for the sky/hood crop
///
/// Only the hood band is tunable. The sky cut is always the top fifth of
/// the frame.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    /// Rows removed from the bottom edge to hide the vehicle hood
    ///
    /// Meaningful only while smaller than `height - height / 5`. The
    /// reference camera produces 320x160 frames. Accepts a JSON number or
    /// a numeric string; `null` means the default.
    #[serde_as(as = "HoodPixels")]
    pub hood_pixel_size: u32,
}

/// Hood size as a number or numeric string, with `null` mapped to
/// [`DEFAULT_HOOD_PIXEL_SIZE`].
struct HoodPixels;

impl<'de> DeserializeAs<'de, u32> for HoodPixels {
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hood: Option<u32> =
            As::<Option<PickFirst<(Same, DisplayFromStr)>>>::deserialize(deserializer)?;
        Ok(hood.unwrap_or(DEFAULT_HOOD_PIXEL_SIZE))
    }
}

impl SerializeAs<u32> for HoodPixels {
    fn serialize_as<S>(source: &u32, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(*source)
    }
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            hood_pixel_size: DEFAULT_HOOD_PIXEL_SIZE,
        }
    }
}

impl CropConfig {
    /// Same as [`CropConfig::default`], for builder chains.
    pub fn new() -> Self {
        Self::default()
    }

    /// No upper bound is checked here; an oversized hood is rejected at crop time.
    pub fn set_hood_pixel_size(mut self, size: u32) -> Self {
        self.hood_pixel_size = size;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
