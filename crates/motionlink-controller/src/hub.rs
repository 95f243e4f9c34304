use ahash::AHashMap;
use motionlink_pose::{PoseConfig, PoseTarget};

use crate::error::{Error, Result};
use crate::instance::ControllerInstance;
use crate::message::Message;
use crate::registry::ControllerRegistry;
use crate::types::{ControllerId, ControllerInfo, Handedness, SubscriptionId};

/// Routes decoded messages to controller instances.
///
/// Owns the registry and the pose configuration handed to new instances.
#[derive(Default)]
pub struct ControllerHub {
    registry: ControllerRegistry,
    default_pose: PoseConfig,
    pose: AHashMap<Handedness, PoseConfig>,
}

impl ControllerHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &ControllerRegistry {
        &self.registry
    }

    pub fn controller(&self, id: ControllerId) -> Option<&ControllerInstance> {
        self.registry.get(id)
    }

    pub fn controller_mut(&mut self, id: ControllerId) -> Option<&mut ControllerInstance> {
        self.registry.get_mut(id)
    }

    pub fn subscribe_new_controllers<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&mut ControllerInstance) + 'static,
    {
        self.registry.subscribe_new_controllers(listener)
    }

    /// Pose configuration for controllers held in `handedness`.
    pub fn pose_config_for(&self, handedness: Handedness) -> PoseConfig {
        self.pose
            .get(&handedness)
            .copied()
            .unwrap_or(self.default_pose)
    }

    /// Sets the fallback configuration and applies it to every controller
    /// without a dedicated entry.
    pub fn set_default_pose_config(&mut self, config: PoseConfig) {
        self.default_pose = config;
        for instance in self.registry.iter_mut() {
            if !self.pose.contains_key(&instance.handedness()) {
                instance.set_pose_config(config);
            }
        }
    }

    /// Sets the configuration for one handedness, including known controllers.
    pub fn set_pose_config(&mut self, handedness: Handedness, config: PoseConfig) {
        self.pose.insert(handedness, config);
        for instance in self.registry.iter_mut() {
            if instance.handedness() == handedness {
                instance.set_pose_config(config);
            }
        }
    }

    /// Drops every dedicated entry, falling back to the default configuration.
    pub fn clear_pose_configs(&mut self) {
        self.pose.clear();
        let config = self.default_pose;
        for instance in self.registry.iter_mut() {
            instance.set_pose_config(config);
        }
    }

    /// Applies one message from `peer` to its controller and `target`.
    pub fn dispatch<T: PoseTarget + ?Sized>(
        &mut self,
        peer: ControllerId,
        message: Message,
        target: &mut T,
    ) -> Result<()> {
        match message {
            Message::ControllerStarted {
                name,
                is_left_handed,
                skin,
            } => {
                self.start(peer, name, Handedness::from_left_flag(is_left_handed), skin, target);
            }
            Message::ButtonDown { name } => self.started(peer)?.on_button_down(&name),
            Message::ButtonUp { name } => self.started(peer)?.on_button_up(&name),
            Message::SliderChanged { name, value } => {
                self.started(peer)?.on_slider_changed(&name, value);
            }
            Message::ControlInfo {
                orientation,
                position,
            } => {
                self.started(peer)?.apply_direct(target, orientation, position);
            }
            Message::SensorInfo(frame) => {
                self.started(peer)?.apply_sensor(target, &frame);
            }
        }
        Ok(())
    }

    fn start<T: PoseTarget + ?Sized>(
        &mut self,
        peer: ControllerId,
        name: String,
        handedness: Handedness,
        skin: String,
        target: &mut T,
    ) {
        if self.registry.contains(peer) {
            log::debug!("controller restarted - {name} id={peer}");
        } else {
            let info = ControllerInfo::new(peer, name.clone(), handedness, skin.clone());
            let config = self.pose_config_for(handedness);
            self.registry.register(ControllerInstance::new(info, config));
        }

        if let Some(instance) = self.registry.get_mut(peer) {
            instance.start(name, skin, target);
        }
    }

    fn started(&mut self, peer: ControllerId) -> Result<&mut ControllerInstance> {
        self.registry.get_mut(peer).ok_or(Error::NotStarted(peer))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use motionlink_pose::{Quat, SensorFrame, Transform, Vec3};

    use super::*;
    use crate::types::ControlSelector;

    type Calls = Rc<RefCell<Vec<String>>>;

    fn started(name: &str, is_left_handed: bool) -> Message {
        Message::ControllerStarted {
            name: name.into(),
            is_left_handed,
            skin: "default".into(),
        }
    }

    fn button_down(name: &str) -> Message {
        Message::ButtonDown { name: name.into() }
    }

    #[test]
    fn trigger_scenario_gates_state_until_named_subscription() {
        let calls = Calls::default();
        let mut hub = ControllerHub::new();
        let mut transform = Transform::default();
        let peer = 1;

        hub.dispatch(peer, started("A", false), &mut transform).unwrap();
        let controller = hub.controller_mut(peer).unwrap();
        assert_eq!(controller.handedness(), Handedness::Right);
        let c = calls.clone();
        controller.subscribe_button_down(ControlSelector::Any, move |name, info| {
            c.borrow_mut().push(format!("any:{name}:{}", info.name));
        });

        hub.dispatch(peer, button_down("trigger"), &mut transform).unwrap();
        assert_eq!(*calls.borrow(), vec!["any:trigger:A"]);
        assert!(!hub.controller(peer).unwrap().button_state("trigger"));

        let c = calls.clone();
        hub.controller_mut(peer)
            .unwrap()
            .subscribe_button_down("trigger", move |name, info| {
                c.borrow_mut().push(format!("named:{name}:{}", info.name));
            });
        hub.dispatch(peer, button_down("trigger"), &mut transform).unwrap();

        assert_eq!(
            *calls.borrow(),
            vec!["any:trigger:A", "named:trigger:A", "any:trigger:A"]
        );
        assert!(hub.controller(peer).unwrap().button_state("trigger"));
    }

    #[test]
    fn duplicate_start_renames_and_resets_without_new_notification() {
        let calls = Calls::default();
        let mut hub = ControllerHub::new();
        hub.set_pose_config(
            Handedness::Left,
            PoseConfig {
                reset_position: Vec3::new(-0.2, 1.0, 0.0),
                ..PoseConfig::default()
            },
        );
        let c = calls.clone();
        hub.subscribe_new_controllers(move |instance| {
            c.borrow_mut().push(format!("new:{}", instance.name()));
            let c = c.clone();
            instance.subscribe_name_updates(move |info| {
                c.borrow_mut().push(format!("name:{}", info.name));
            });
        });
        let mut transform = Transform::default();

        hub.dispatch(3, started("first", true), &mut transform).unwrap();
        transform.position = Vec3::new(5.0, 5.0, 5.0);
        hub.dispatch(3, started("second", false), &mut transform).unwrap();

        assert_eq!(*calls.borrow(), vec!["new:first", "name:first", "name:second"]);
        assert_eq!(hub.registry().len(), 1);
        let controller = hub.controller(3).unwrap();
        assert_eq!(controller.name(), "second");
        assert_eq!(controller.handedness(), Handedness::Left);
        assert_eq!(transform.position, Vec3::new(-0.2, 1.0, 0.0));
    }

    #[test]
    fn input_before_start_is_rejected() {
        let mut hub = ControllerHub::new();
        let mut transform = Transform::default();

        let result = hub.dispatch(9, button_down("a"), &mut transform);

        assert!(matches!(result, Err(Error::NotStarted(9))));
        assert!(hub.registry().is_empty());
    }

    #[test]
    fn pose_messages_use_their_own_protocol() {
        let poses = Rc::new(RefCell::new(Vec::new()));
        let mut hub = ControllerHub::new();
        hub.set_default_pose_config(PoseConfig {
            position_active: false,
            ..PoseConfig::default()
        });
        let mut transform = Transform::default();
        hub.dispatch(2, started("B", false), &mut transform).unwrap();
        let p = poses.clone();
        hub.controller_mut(2)
            .unwrap()
            .subscribe_pose(move |pose, _| p.borrow_mut().push(pose.position));

        let direct = Message::ControlInfo {
            orientation: Quat::IDENTITY,
            position: Vec3::new(1.0, 2.0, 3.0),
        };
        hub.dispatch(2, direct, &mut transform).unwrap();
        let sensor = SensorFrame::from_wire(
            false,
            false,
            [0.0, 0.0, 0.0, 1.0],
            [0.0, 0.0, 0.0],
            [4.0, 5.0, 6.0],
        );
        hub.dispatch(2, Message::SensorInfo(sensor), &mut transform).unwrap();

        assert_eq!(transform.position, Vec3::ZERO);
        assert_eq!(*poses.borrow(), vec![Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO]);
    }

    #[test]
    fn handedness_config_updates_known_controllers() {
        let mut hub = ControllerHub::new();
        let mut transform = Transform::default();
        hub.dispatch(1, started("L", true), &mut transform).unwrap();
        hub.dispatch(2, started("R", false), &mut transform).unwrap();
        let config = PoseConfig {
            rotation_active: false,
            ..PoseConfig::default()
        };

        hub.set_pose_config(Handedness::Left, config);

        assert_eq!(*hub.controller(1).unwrap().pose_config(), config);
        assert_eq!(*hub.controller(2).unwrap().pose_config(), PoseConfig::default());

        hub.clear_pose_configs();
        assert_eq!(*hub.controller(1).unwrap().pose_config(), PoseConfig::default());
    }
}
