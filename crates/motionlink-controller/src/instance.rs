use motionlink_pose::{
    Platform, Pose, PoseConfig, PoseSynchronizer, PoseTarget, Quat, SensorFrame, Vec3,
};

use crate::router::EventRouter;
use crate::state::ControlStateStore;
use crate::types::{ControlSelector, ControllerId, ControllerInfo, Handedness, SubscriptionId};

/// The virtual side of one physical controller.
///
/// Owns its control state, listeners and pose synchronizer. Transforms
/// belong to the host and are passed in per update.
pub struct ControllerInstance {
    info: ControllerInfo,
    router: EventRouter,
    pose: PoseSynchronizer,
}

impl ControllerInstance {
    pub fn new(info: ControllerInfo, config: PoseConfig) -> Self {
        Self {
            info,
            router: EventRouter::default(),
            pose: PoseSynchronizer::new(config),
        }
    }

    pub fn id(&self) -> ControllerId {
        self.info.id
    }

    pub fn info(&self) -> &ControllerInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn handedness(&self) -> Handedness {
        self.info.handedness
    }

    pub fn skin(&self) -> &str {
        &self.info.skin
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.info.name = name.into();
    }

    pub fn set_skin(&mut self, skin: impl Into<String>) {
        self.info.skin = skin.into();
    }

    pub fn state(&self) -> &ControlStateStore {
        self.router.state()
    }

    pub fn button_state(&self, name: &str) -> bool {
        self.router.button_state(name)
    }

    pub fn slider_state(&self, name: &str) -> f32 {
        self.router.slider_state(name)
    }

    pub fn pose_config(&self) -> &PoseConfig {
        self.pose.config()
    }

    pub fn set_pose_config(&mut self, config: PoseConfig) {
        self.pose.set_config(config);
    }

    pub fn subscribe_button_down<'a, F>(
        &mut self,
        selector: impl Into<ControlSelector<'a>>,
        listener: F,
    ) -> SubscriptionId
    where
        F: FnMut(&str, &ControllerInfo) + 'static,
    {
        self.router.subscribe_button_down(selector, listener)
    }

    pub fn subscribe_button_up<'a, F>(
        &mut self,
        selector: impl Into<ControlSelector<'a>>,
        listener: F,
    ) -> SubscriptionId
    where
        F: FnMut(&str, &ControllerInfo) + 'static,
    {
        self.router.subscribe_button_up(selector, listener)
    }

    pub fn subscribe_slider<'a, F>(
        &mut self,
        selector: impl Into<ControlSelector<'a>>,
        listener: F,
    ) -> SubscriptionId
    where
        F: FnMut(&str, f32, &ControllerInfo) + 'static,
    {
        self.router.subscribe_slider(selector, listener)
    }

    pub fn subscribe_pose<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Pose, &ControllerInfo) + 'static,
    {
        self.router.subscribe_pose(listener)
    }

    pub fn subscribe_name_updates<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ControllerInfo) + 'static,
    {
        self.router.subscribe_name_updates(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.router.unsubscribe(id)
    }

    pub fn on_button_down(&mut self, name: &str) {
        self.router.on_button_down(name, &self.info);
    }

    pub fn on_button_up(&mut self, name: &str) {
        self.router.on_button_up(name, &self.info);
    }

    pub fn on_slider_changed(&mut self, name: &str, value: f32) {
        self.router.on_slider_changed(name, value, &self.info);
    }

    /// Direct orientation update. Listeners get the received values.
    pub fn apply_direct<T: PoseTarget + ?Sized>(
        &mut self,
        target: &mut T,
        orientation: Quat,
        position: Vec3,
    ) -> Pose {
        let pose = self.pose.apply_direct(target, orientation, position);
        self.router.emit_pose(&pose, &self.info);
        pose
    }

    /// Motion sensor update. Listeners get the resulting transform.
    pub fn apply_sensor<T: PoseTarget + ?Sized>(
        &mut self,
        target: &mut T,
        frame: &SensorFrame,
    ) -> Pose {
        let pose = self.pose.apply_sensor(target, frame);
        self.router.emit_pose(&pose, &self.info);
        pose
    }

    pub fn reset_pose<T: PoseTarget + ?Sized>(
        &mut self,
        target: &mut T,
        platform: Platform,
        attitude: Quat,
    ) -> Pose {
        let pose = self.pose.reset_pose(target, platform, attitude);
        self.router.emit_pose(&pose, &self.info);
        pose
    }

    /// Handles a start announcement: identity, pose reset, name update.
    pub(crate) fn start<T: PoseTarget + ?Sized>(
        &mut self,
        name: String,
        skin: String,
        target: &mut T,
    ) {
        self.info.name = name;
        self.info.skin = skin;
        self.reset_pose(target, Platform::Reference, Quat::IDENTITY);
        self.router.emit_name_update(&self.info);
    }
}
