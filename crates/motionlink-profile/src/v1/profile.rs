use ahash::AHashMap;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileV1 {
    pub version: u8,
    #[serde(default)]
    pub pose: AHashMap<String, ProfileV1Pose>, // default | left | right | both
    #[serde(default)]
    pub skins: AHashMap<String, AHashMap<String, Vec<String>>>, // skin -> handedness -> parts
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct ProfileV1Pose {
    #[serde(default)]
    pub reset_position: Option<Vec<f32>>,
    #[serde(default)]
    pub reset_orientation: Option<Vec<f32>>, // pitch, yaw, roll in degrees
    #[serde(default)]
    pub position: Option<bool>,
    #[serde(default)]
    pub rotation: Option<bool>,
}
