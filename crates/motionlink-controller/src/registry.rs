use ahash::AHashMap;

use crate::instance::ControllerInstance;
use crate::listeners::ListenerList;
use crate::types::{ControllerId, SubscriptionId};

type NewControllerListener = dyn FnMut(&mut ControllerInstance);

/// Known controller instances in arrival order.
///
/// Membership only grows. New-controller listeners are replayed every
/// already-registered instance when they subscribe.
#[derive(Default)]
pub struct ControllerRegistry {
    controllers: Vec<ControllerInstance>,
    index: AHashMap<ControllerId, usize>,
    listeners: ListenerList<NewControllerListener>,
    next_id: u64,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `instance` unless a controller with the same id is known.
    /// Returns whether it was added; listeners only run in that case.
    pub fn register(&mut self, instance: ControllerInstance) -> bool {
        let id = instance.id();
        if self.index.contains_key(&id) {
            log::debug!("controller already registered - id={id}");
            return false;
        }

        log::debug!("register controller - {} id={id}", instance.name());
        self.index.insert(id, self.controllers.len());
        self.controllers.push(instance);

        let Some(instance) = self.controllers.last_mut() else {
            return true;
        };
        for listener in self.listeners.iter_mut() {
            listener(&mut *instance);
        }
        true
    }

    /// Subscribes to new controllers. `listener` is called right away for
    /// every known controller, oldest first.
    pub fn subscribe_new_controllers<F>(&mut self, mut listener: F) -> SubscriptionId
    where
        F: FnMut(&mut ControllerInstance) + 'static,
    {
        for instance in self.controllers.iter_mut() {
            listener(instance);
        }
        let id = SubscriptionId::next(&mut self.next_id);
        self.listeners.push(id, Box::new(listener));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    pub fn contains(&self, id: ControllerId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn get(&self, id: ControllerId) -> Option<&ControllerInstance> {
        self.index.get(&id).map(|&i| &self.controllers[i])
    }

    pub fn get_mut(&mut self, id: ControllerId) -> Option<&mut ControllerInstance> {
        self.index.get(&id).map(|&i| &mut self.controllers[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ControllerInstance> {
        self.controllers.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ControllerInstance> {
        self.controllers.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use motionlink_pose::PoseConfig;

    use super::*;
    use crate::types::{ControllerInfo, Handedness};

    fn controller(id: ControllerId, name: &str) -> ControllerInstance {
        ControllerInstance::new(
            ControllerInfo::new(id, name, Handedness::Right, "default"),
            PoseConfig::default(),
        )
    }

    fn recorder(seen: &Rc<RefCell<Vec<String>>>) -> impl FnMut(&mut ControllerInstance) {
        let seen = seen.clone();
        move |instance: &mut ControllerInstance| seen.borrow_mut().push(instance.name().to_string())
    }

    #[test]
    fn subscribing_replays_known_controllers_in_arrival_order() {
        let mut registry = ControllerRegistry::new();
        registry.register(controller(30, "c"));
        registry.register(controller(10, "a"));
        registry.register(controller(20, "b"));
        let seen = Rc::new(RefCell::new(Vec::new()));

        registry.subscribe_new_controllers(recorder(&seen));

        assert_eq!(*seen.borrow(), vec!["c", "a", "b"]);
    }

    #[test]
    fn new_registration_notifies_subscribers_in_subscription_order() {
        let mut registry = ControllerRegistry::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let first = seen.clone();
        registry.subscribe_new_controllers(move |instance| {
            first.borrow_mut().push(format!("first:{}", instance.name()));
        });
        let second = seen.clone();
        registry.subscribe_new_controllers(move |instance| {
            second.borrow_mut().push(format!("second:{}", instance.name()));
        });

        assert!(registry.register(controller(1, "a")));

        assert_eq!(*seen.borrow(), vec!["first:a", "second:a"]);
    }

    #[test]
    fn duplicate_registration_is_a_silent_no_op() {
        let mut registry = ControllerRegistry::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        registry.subscribe_new_controllers(recorder(&seen));

        assert!(registry.register(controller(1, "a")));
        assert!(!registry.register(controller(1, "again")));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(1).map(ControllerInstance::name), Some("a"));
        assert_eq!(*seen.borrow(), vec!["a"]);
    }

    #[test]
    fn listener_can_attach_controller_subscriptions() {
        let mut registry = ControllerRegistry::new();
        let presses = Rc::new(RefCell::new(0));
        let counter = presses.clone();
        registry.subscribe_new_controllers(move |instance| {
            let counter = counter.clone();
            instance.subscribe_button_down("trigger", move |_, _| *counter.borrow_mut() += 1);
        });
        registry.register(controller(5, "a"));

        if let Some(instance) = registry.get_mut(5) {
            instance.on_button_down("trigger");
        }

        assert_eq!(*presses.borrow(), 1);
        assert!(registry.get(5).is_some_and(|c| c.button_state("trigger")));
    }

    #[test]
    fn unsubscribed_listener_misses_later_controllers() {
        let mut registry = ControllerRegistry::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let id = registry.subscribe_new_controllers(recorder(&seen));

        assert!(registry.unsubscribe(id));
        registry.register(controller(1, "a"));

        assert!(seen.borrow().is_empty());
    }
}
