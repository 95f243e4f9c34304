use std::cell::RefCell;
use std::rc::Rc;

use ahash::AHashMap;
use motionlink_controller::{
    ControlSelector, ControllerHub, ControllerId, ControllerInfo, ControllerInstance, Message,
    Result,
};
use motionlink_pose::{EulerAngles, Transform};
use motionlink_profile::{Profile, SkinTable};

use crate::api::WireFrame;

type SharedSkins = Rc<RefCell<SkinTable>>;
type VisibleParts = Rc<RefCell<AHashMap<ControllerId, Vec<Box<str>>>>>;

/// Host side of the daemon: the controller hub, one transform per peer
/// and the skin parts currently shown for each controller.
pub struct App {
    hub: ControllerHub,
    scene: AHashMap<ControllerId, Transform>,
    skins: SharedSkins,
    visible: VisibleParts,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let skins = SharedSkins::default();
        let visible = VisibleParts::default();
        let mut hub = ControllerHub::new();

        let observer_skins = skins.clone();
        let observer_visible = visible.clone();
        hub.subscribe_new_controllers(move |instance| {
            observe(instance, &observer_skins, &observer_visible);
        });

        Self {
            hub,
            scene: AHashMap::new(),
            skins,
            visible,
        }
    }

    pub fn hub(&self) -> &ControllerHub {
        &self.hub
    }

    pub fn transform(&self, peer: ControllerId) -> Option<&Transform> {
        self.scene.get(&peer)
    }

    pub fn visible_parts(&self, peer: ControllerId) -> Option<Vec<Box<str>>> {
        self.visible.borrow().get(&peer).cloned()
    }

    /// Replaces pose settings and skins. Known controllers pick up the new
    /// settings and have their skin resolved again.
    pub fn apply_profile(&mut self, profile: Profile) {
        self.hub.clear_pose_configs();
        self.hub.set_default_pose_config(profile.default_pose);
        for (handedness, config) in &profile.pose {
            self.hub.set_pose_config(*handedness, *config);
        }

        *self.skins.borrow_mut() = profile.skins;
        let skins = self.skins.borrow();
        let mut visible = self.visible.borrow_mut();
        for instance in self.hub.registry().iter() {
            visible.insert(instance.id(), resolve_skin(&skins, instance.info()));
        }
    }

    /// Decodes a frame and applies it to the sender's controller.
    pub fn handle_frame(&mut self, frame: WireFrame) -> Result<()> {
        let WireFrame { peer, call } = frame;
        let message = Message::from(call);
        log::trace!("{} from {peer}", message.kind());

        let target = self.scene.entry(peer).or_default();
        let result = self.hub.dispatch(peer, message, target);
        if result.is_err() && !self.hub.registry().contains(peer) {
            self.scene.remove(&peer);
        }
        result
    }
}

/// Attaches skin resolution and debug output to a new controller.
fn observe(instance: &mut ControllerInstance, skins: &SharedSkins, visible: &VisibleParts) {
    log::info!(
        "controller connected: {} ({}, id={})",
        instance.name(),
        instance.handedness().as_str(),
        instance.id()
    );

    let skins = skins.clone();
    let visible = visible.clone();
    instance.subscribe_name_updates(move |info| {
        let parts = resolve_skin(&skins.borrow(), info);
        visible.borrow_mut().insert(info.id, parts);
    });

    instance.subscribe_button_down(ControlSelector::Any, |name, info| {
        log::debug!("{}: {name} down", info.name);
    });
    instance.subscribe_button_up(ControlSelector::Any, |name, info| {
        log::debug!("{}: {name} up", info.name);
    });
    instance.subscribe_slider(ControlSelector::Any, |name, value, info| {
        log::debug!("{}: {name} = {value:.3}", info.name);
    });
    instance.subscribe_pose(|pose, info| {
        let p = pose.position;
        let angles = EulerAngles::from_quat(pose.orientation);
        log::debug!(
            "{}: pos ({:.2}, {:.2}, {:.2}) rot ({:.1}, {:.1}, {:.1})",
            info.name,
            p.x,
            p.y,
            p.z,
            angles.pitch,
            angles.yaw,
            angles.roll
        );
    });
}

fn resolve_skin(skins: &SkinTable, info: &ControllerInfo) -> Vec<Box<str>> {
    match skins.parts(&info.skin, info.handedness) {
        Some(parts) => {
            log::info!("{} wears {}: {}", info.name, info.skin, parts.join(", "));
            parts.to_vec()
        }
        None => {
            log::warn!(
                "{} uses unknown skin {} ({})",
                info.name,
                info.skin,
                info.handedness.as_str()
            );
            Vec::new()
        }
    }
}
