use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{Error as NotifyError, RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{new_debouncer_opt, Config, DebounceEventResult, Debouncer};
use thiserror::Error;

use crate::{parse_profile, Profile, ProfileError};

const DEBOUNCE: Duration = Duration::from_secs(1);

#[derive(Error, Debug)]
pub enum WatcherError {
    #[error("notify error: {0}")]
    Notify(#[from] NotifyError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] ProfileError),
}

#[derive(Debug)]
pub enum ProfileEvent {
    Changed(Profile),
    Removed,
    Error(WatcherError),
}

type ProfileEventSender = mpsc::Sender<ProfileEvent>;
pub type ProfileEventReceiver = mpsc::Receiver<ProfileEvent>;

/// Reads the profile at `path` into the event a watcher would report.
pub fn load_profile(path: &Path) -> ProfileEvent {
    if !path.exists() {
        return ProfileEvent::Removed;
    }
    match std::fs::read_to_string(path) {
        Ok(content) => match parse_profile(&content) {
            Ok(profile) => ProfileEvent::Changed(profile),
            Err(e) => ProfileEvent::Error(WatcherError::Parse(e)),
        },
        Err(e) => ProfileEvent::Error(WatcherError::Io(e)),
    }
}

/// Whether a change reported at `changed` concerns the profile file.
/// Compared by file name, backends may report canonicalized directories.
fn touches_profile(changed: &Path, profile: &Path) -> bool {
    changed.file_name().is_some() && changed.file_name() == profile.file_name()
}

/// Watches the profile's directory and reports reloads of the profile file.
///
/// The directory is watched so that a profile created after startup is
/// picked up. Changes to other files in it are ignored.
pub struct ProfileWatcher {
    _debouncer: Debouncer<RecommendedWatcher>,
}

impl ProfileWatcher {
    pub fn new_with_sender(path: &Path, tx: ProfileEventSender) -> Result<Self, WatcherError> {
        let profile: PathBuf = path.to_owned();
        let handler = move |result: DebounceEventResult| {
            let event = match result {
                Ok(events) => {
                    if !events.iter().any(|e| touches_profile(&e.path, &profile)) {
                        return;
                    }
                    load_profile(&profile)
                }
                Err(e) => ProfileEvent::Error(WatcherError::Notify(e)),
            };
            let _ = tx.send(event);
        };

        let config = Config::default().with_timeout(DEBOUNCE);
        let mut debouncer = new_debouncer_opt::<_, RecommendedWatcher>(config, handler)?;
        let dir = path.parent().unwrap_or(path);
        debouncer.watcher().watch(dir, RecursiveMode::NonRecursive)?;

        Ok(Self {
            _debouncer: debouncer,
        })
    }

    pub fn new(path: &Path) -> Result<(Self, ProfileEventReceiver), WatcherError> {
        let (tx, rx) = mpsc::channel();

        Ok((Self::new_with_sender(path, tx)?, rx))
    }

    /// Like [`new`](Self::new), with the current profile state queued first.
    pub fn new_with_starting_event(
        path: &Path,
    ) -> Result<(Self, ProfileEventReceiver), WatcherError> {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(load_profile(path));

        Ok((Self::new_with_sender(path, tx)?, rx))
    }
}
