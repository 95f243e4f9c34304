use ahash::AHashMap;

/// Last known button and slider values of one controller.
///
/// Entries are created lazily and never removed. Unknown names read as
/// released / zero.
#[derive(Debug, Default)]
pub struct ControlStateStore {
    buttons: AHashMap<Box<str>, bool>,
    sliders: AHashMap<Box<str>, f32>,
}

impl ControlStateStore {
    pub fn button(&self, name: &str) -> bool {
        self.buttons.get(name).copied().unwrap_or(false)
    }

    pub fn slider(&self, name: &str) -> f32 {
        self.sliders.get(name).copied().unwrap_or(0.0)
    }

    pub fn has_button(&self, name: &str) -> bool {
        self.buttons.contains_key(name)
    }

    pub fn has_slider(&self, name: &str) -> bool {
        self.sliders.contains_key(name)
    }

    /// Creates a released entry if missing. Returns whether it was created.
    pub(crate) fn ensure_button(&mut self, name: &str) -> bool {
        if self.buttons.contains_key(name) {
            return false;
        }
        self.buttons.insert(name.into(), false);
        true
    }

    /// Creates a zero entry if missing. Returns whether it was created.
    pub(crate) fn ensure_slider(&mut self, name: &str) -> bool {
        if self.sliders.contains_key(name) {
            return false;
        }
        self.sliders.insert(name.into(), 0.0);
        true
    }

    /// Stores `pressed` for a known button.
    /// An unknown button gets a default entry instead and the value is dropped.
    pub(crate) fn update_button(&mut self, name: &str, pressed: bool) -> bool {
        match self.buttons.get_mut(name) {
            Some(state) => {
                *state = pressed;
                true
            }
            None => {
                self.buttons.insert(name.into(), false);
                false
            }
        }
    }

    /// Stores `value` for a known slider.
    /// An unknown slider gets a default entry instead and the value is dropped.
    pub(crate) fn update_slider(&mut self, name: &str, value: f32) -> bool {
        match self.sliders.get_mut(name) {
            Some(state) => {
                *state = value;
                true
            }
            None => {
                self.sliders.insert(name.into(), 0.0);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_read_as_defaults() {
        let store = ControlStateStore::default();
        assert!(!store.button("trigger"));
        assert_eq!(store.slider("grip"), 0.0);
        assert!(!store.has_button("trigger"));
    }

    #[test]
    fn first_update_only_creates_entry() {
        let mut store = ControlStateStore::default();
        assert!(!store.update_button("trigger", true));
        assert!(store.has_button("trigger"));
        assert!(!store.button("trigger"));

        assert!(store.update_button("trigger", true));
        assert!(store.button("trigger"));
    }

    #[test]
    fn ensured_entries_accept_updates() {
        let mut store = ControlStateStore::default();
        assert!(store.ensure_slider("grip"));
        assert!(!store.ensure_slider("grip"));
        assert!(store.update_slider("grip", -2.5));
        assert_eq!(store.slider("grip"), -2.5);
    }
}
