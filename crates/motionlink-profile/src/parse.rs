use serde::Deserialize;

use crate::{v1::ProfileV1, Profile, ProfileError};

/// Parse yaml profile.
pub fn parse_profile(input: &str) -> Result<Profile, ProfileError> {
    let version = parse_version(input)?;
    match version {
        1 => {
            let profile: ProfileV1 = serde_yaml::from_str(input)?;
            let profile = profile.parse()?;
            Ok(profile)
        }
        _ => Err(ProfileError::UnsupportedVersion(version)),
    }
}

/// A profile with a version.
#[derive(Debug, Clone, Deserialize)]
struct VersionedProfile {
    version: u8,
}

/// Parse the version of yaml profile.
fn parse_version(input: &str) -> Result<u8, ProfileError> {
    let raw: VersionedProfile = serde_yaml::from_str(input)?;
    Ok(raw.version)
}

#[cfg(test)]
mod tests {
    use motionlink_controller::Handedness;

    use super::*;

    #[test]
    fn parse_profile_yaml_error_when_version_missing() {
        let yaml = "pose: {}\n";
        assert!(matches!(
            parse_profile(yaml),
            Err(ProfileError::YamlDeserializeError(_))
        ));
    }

    #[test]
    fn parse_profile_rejects_unknown_version() {
        let yaml = "version: 2\n";
        assert!(matches!(
            parse_profile(yaml),
            Err(ProfileError::UnsupportedVersion(2))
        ));
    }

    #[test]
    fn parse_profile_accepts_minimal_v1() {
        let profile = parse_profile("version: 1\n").expect("minimal profile");
        assert!(profile.pose.is_empty());
        assert!(profile.skins.parts("default", Handedness::Both).is_none());
    }
}
