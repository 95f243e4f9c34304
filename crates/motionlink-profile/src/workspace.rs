use std::path::{Path, PathBuf};

use crate::watcher::{ProfileEventReceiver, ProfileWatcher, WatcherError};
use crate::ProfileError;

const DEFAULT_WORKSPACE_PATH: &str = ".config/motionlink";
const PROFILE_FILE_NAME: &str = "profile.yaml";

/// Directory holding the profile and the transport socket.
pub struct Workspace {
    path: PathBuf,
}

impl Workspace {
    pub fn new(path: Option<&Path>) -> Result<Self, ProfileError> {
        let path = {
            if let Some(path) = path {
                path.to_owned()
            } else {
                Self::default_path()?
            }
        };

        if !path.exists() {
            std::fs::create_dir_all(&path)?;
        } else if !path.is_dir() {
            return Err(ProfileError::PathIsNotDirectory(
                path.display().to_string(),
            ));
        }

        Ok(Self { path })
    }

    pub fn start_profile_watcher(
        &self,
    ) -> Result<(ProfileWatcher, ProfileEventReceiver), WatcherError> {
        ProfileWatcher::new_with_starting_event(&self.profile_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn profile_path(&self) -> PathBuf {
        self.path.join(PROFILE_FILE_NAME)
    }

    pub fn default_path() -> Result<PathBuf, ProfileError> {
        let path = std::env::var("HOME")
            .map(PathBuf::from)
            .map(|p| p.join(DEFAULT_WORKSPACE_PATH))
            .map_err(|_| ProfileError::EnvVarNotSet("HOME".to_string()))?;

        Ok(path)
    }
}
