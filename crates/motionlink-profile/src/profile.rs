use ahash::AHashMap;
use motionlink_controller::Handedness;
use motionlink_pose::PoseConfig;

/// Skin name -> handedness -> visible part names.
#[derive(Debug, Clone, Default)]
pub struct SkinTable(AHashMap<Box<str>, AHashMap<Handedness, Vec<Box<str>>>>);

impl SkinTable {
    pub fn insert(&mut self, skin: &str, handedness: Handedness, parts: Vec<Box<str>>) {
        self.0
            .entry(skin.into())
            .or_default()
            .insert(handedness, parts);
    }

    /// Parts to show for `skin` on a controller held in `handedness`.
    /// Falls back to the skin's `both` entry.
    pub fn parts(&self, skin: &str, handedness: Handedness) -> Option<&[Box<str>]> {
        let skin = self.0.get(skin)?;
        skin.get(&handedness)
            .or_else(|| skin.get(&Handedness::Both))
            .map(Vec::as_slice)
    }
}

/// Resolved profile.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    /// Pose settings for handedness without a dedicated entry.
    pub default_pose: PoseConfig,
    pub pose: AHashMap<Handedness, PoseConfig>,
    pub skins: SkinTable,
}
