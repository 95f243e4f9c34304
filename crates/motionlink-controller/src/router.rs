use ahash::AHashMap;
use motionlink_pose::Pose;

use crate::listeners::ListenerList;
use crate::state::ControlStateStore;
use crate::types::{ControlSelector, ControllerInfo, SubscriptionId};

/// Called with the button name and the controller it belongs to.
pub type ButtonListener = dyn FnMut(&str, &ControllerInfo);
/// Called with the slider name, its new value and the controller.
pub type SliderListener = dyn FnMut(&str, f32, &ControllerInfo);
/// Called with every pose the controller reports.
pub type PoseListener = dyn FnMut(&Pose, &ControllerInfo);
/// Called whenever the controller (re)announces its name.
pub type NameListener = dyn FnMut(&ControllerInfo);

#[derive(Default)]
struct ButtonLists {
    down: ListenerList<ButtonListener>,
    up: ListenerList<ButtonListener>,
}

/// Per-controller event fan-out and control state.
///
/// Per-name lists and state entries are created together, by the first
/// subscription to a name or by the first event carrying it. That first
/// event only creates the entry: its value is not stored and no per-name
/// listener runs. Catch-all listeners see every event.
#[derive(Default)]
pub struct EventRouter {
    state: ControlStateStore,
    buttons: AHashMap<Box<str>, ButtonLists>,
    sliders: AHashMap<Box<str>, ListenerList<SliderListener>>,
    any_button_down: ListenerList<ButtonListener>,
    any_button_up: ListenerList<ButtonListener>,
    any_slider: ListenerList<SliderListener>,
    pose: ListenerList<PoseListener>,
    names: ListenerList<NameListener>,
    next_id: u64,
}

impl EventRouter {
    pub fn state(&self) -> &ControlStateStore {
        &self.state
    }

    pub fn button_state(&self, name: &str) -> bool {
        self.state.button(name)
    }

    pub fn slider_state(&self, name: &str) -> f32 {
        self.state.slider(name)
    }

    pub fn subscribe_button_down<'a, F>(
        &mut self,
        selector: impl Into<ControlSelector<'a>>,
        listener: F,
    ) -> SubscriptionId
    where
        F: FnMut(&str, &ControllerInfo) + 'static,
    {
        let id = SubscriptionId::next(&mut self.next_id);
        match selector.into() {
            ControlSelector::Name(name) => {
                self.ensure_button(name).down.push(id, Box::new(listener));
            }
            ControlSelector::Any => self.any_button_down.push(id, Box::new(listener)),
        }
        id
    }

    pub fn subscribe_button_up<'a, F>(
        &mut self,
        selector: impl Into<ControlSelector<'a>>,
        listener: F,
    ) -> SubscriptionId
    where
        F: FnMut(&str, &ControllerInfo) + 'static,
    {
        let id = SubscriptionId::next(&mut self.next_id);
        match selector.into() {
            ControlSelector::Name(name) => {
                self.ensure_button(name).up.push(id, Box::new(listener));
            }
            ControlSelector::Any => self.any_button_up.push(id, Box::new(listener)),
        }
        id
    }

    pub fn subscribe_slider<'a, F>(
        &mut self,
        selector: impl Into<ControlSelector<'a>>,
        listener: F,
    ) -> SubscriptionId
    where
        F: FnMut(&str, f32, &ControllerInfo) + 'static,
    {
        let id = SubscriptionId::next(&mut self.next_id);
        match selector.into() {
            ControlSelector::Name(name) => {
                self.ensure_slider(name).push(id, Box::new(listener));
            }
            ControlSelector::Any => self.any_slider.push(id, Box::new(listener)),
        }
        id
    }

    pub fn subscribe_pose<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Pose, &ControllerInfo) + 'static,
    {
        let id = SubscriptionId::next(&mut self.next_id);
        self.pose.push(id, Box::new(listener));
        id
    }

    pub fn subscribe_name_updates<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ControllerInfo) + 'static,
    {
        let id = SubscriptionId::next(&mut self.next_id);
        self.names.push(id, Box::new(listener));
        id
    }

    /// Removes a listener registered on this router.
    /// State entries and per-name lists stay in place.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.any_button_down.remove(id)
            || self.any_button_up.remove(id)
            || self.any_slider.remove(id)
            || self.pose.remove(id)
            || self.names.remove(id)
            || self
                .buttons
                .values_mut()
                .any(|lists| lists.down.remove(id) || lists.up.remove(id))
            || self.sliders.values_mut().any(|list| list.remove(id))
    }

    pub fn on_button_down(&mut self, name: &str, info: &ControllerInfo) {
        self.on_button(name, true, info);
    }

    pub fn on_button_up(&mut self, name: &str, info: &ControllerInfo) {
        self.on_button(name, false, info);
    }

    pub fn on_slider_changed(&mut self, name: &str, value: f32, info: &ControllerInfo) {
        if self.state.update_slider(name, value) {
            if let Some(list) = self.sliders.get_mut(name) {
                for listener in list.iter_mut() {
                    listener(name, value, info);
                }
            }
        } else {
            log::debug!("slider {name} seen for the first time on {}", info.id);
            self.sliders.entry(name.into()).or_default();
        }

        for listener in self.any_slider.iter_mut() {
            listener(name, value, info);
        }
    }

    pub fn emit_pose(&mut self, pose: &Pose, info: &ControllerInfo) {
        for listener in self.pose.iter_mut() {
            listener(pose, info);
        }
    }

    pub fn emit_name_update(&mut self, info: &ControllerInfo) {
        for listener in self.names.iter_mut() {
            listener(info);
        }
    }

    fn on_button(&mut self, name: &str, pressed: bool, info: &ControllerInfo) {
        if self.state.update_button(name, pressed) {
            if let Some(lists) = self.buttons.get_mut(name) {
                let list = if pressed { &mut lists.down } else { &mut lists.up };
                for listener in list.iter_mut() {
                    listener(name, info);
                }
            }
        } else {
            log::debug!("button {name} seen for the first time on {}", info.id);
            self.buttons.entry(name.into()).or_default();
        }

        let catch_all = if pressed {
            &mut self.any_button_down
        } else {
            &mut self.any_button_up
        };
        for listener in catch_all.iter_mut() {
            listener(name, info);
        }
    }

    fn ensure_button(&mut self, name: &str) -> &mut ButtonLists {
        self.state.ensure_button(name);
        self.buttons.entry(name.into()).or_default()
    }

    fn ensure_slider(&mut self, name: &str) -> &mut ListenerList<SliderListener> {
        self.state.ensure_slider(name);
        self.sliders.entry(name.into()).or_default()
    }
}
