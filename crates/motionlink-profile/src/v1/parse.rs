use ahash::AHashMap;
use motionlink_controller::Handedness;
use motionlink_pose::{EulerAngles, PoseConfig, Vec3};

use crate::profile::{Profile, SkinTable};

use super::profile::{ProfileV1, ProfileV1Pose};
use super::Error;

const DEFAULT_POSE_KEY: &str = "default";

impl ProfileV1 {
    pub fn parse(&self) -> Result<Profile, Error> {
        if self.version != 1 {
            // This code point should never be reached.
            panic!("unsupported version: {}", self.version);
        }

        let default_pose = match self.pose.get(DEFAULT_POSE_KEY) {
            Some(raw) => parse_pose(raw, PoseConfig::default())?,
            None => PoseConfig::default(),
        };

        let mut pose = AHashMap::new();
        for (key, raw) in self.pose.iter() {
            if key == DEFAULT_POSE_KEY {
                continue;
            }
            let handedness = parse_handedness(key)?;
            pose.insert(handedness, parse_pose(raw, default_pose)?);
        }

        let mut skins = SkinTable::default();
        for (skin, variants) in self.skins.iter() {
            for (key, parts) in variants.iter() {
                let handedness = parse_handedness(key)?;
                let parts = parts.iter().map(|p| p.as_str().into()).collect();
                skins.insert(skin, handedness, parts);
            }
        }

        Ok(Profile {
            default_pose,
            pose,
            skins,
        })
    }
}

/// Parse a v1 pose entry. Missing fields are taken from `base`.
fn parse_pose(raw: &ProfileV1Pose, base: PoseConfig) -> Result<PoseConfig, Error> {
    let reset_position = match raw.reset_position.as_deref() {
        Some(values) => Vec3::from(parse_triple("reset_position", values)?),
        None => base.reset_position,
    };
    let reset_orientation = match raw.reset_orientation.as_deref() {
        Some(values) => EulerAngles::from(parse_triple("reset_orientation", values)?),
        None => base.reset_orientation,
    };

    Ok(PoseConfig {
        reset_position,
        reset_orientation,
        position_active: raw.position.unwrap_or(base.position_active),
        rotation_active: raw.rotation.unwrap_or(base.rotation_active),
    })
}

fn parse_triple(field: &'static str, values: &[f32]) -> Result<[f32; 3], Error> {
    match values {
        [x, y, z] => Ok([*x, *y, *z]),
        _ => Err(Error::InvalidVector {
            field,
            len: values.len(),
        }),
    }
}

/// Parse a handedness key into a `Handedness` enum.
fn parse_handedness(name: &str) -> Result<Handedness, Error> {
    Ok(match name {
        "left" | "l" => Handedness::Left,
        "right" | "r" => Handedness::Right,
        "both" | "any" => Handedness::Both,
        _ => return Err(Error::InvalidHandedness(name.to_string())),
    })
}
