use crate::math::{EulerAngles, Quat, Vec3};
use crate::recenter::recenter;
use crate::sensor::{Platform, SensorFrame};
use crate::transform::PoseTarget;

/// Per-controller pose settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseConfig {
    pub reset_position: Vec3,
    pub reset_orientation: EulerAngles,
    pub position_active: bool,
    pub rotation_active: bool,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            reset_position: Vec3::ZERO,
            reset_orientation: EulerAngles::default(),
            position_active: true,
            rotation_active: true,
        }
    }
}

/// Pose payload delivered to pose listeners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub orientation: Quat,
    pub position: Vec3,
}

impl Pose {
    pub fn new(orientation: Quat, position: Vec3) -> Self {
        Self {
            orientation,
            position,
        }
    }

    fn of<T: PoseTarget + ?Sized>(target: &T) -> Self {
        Self::new(target.orientation(), target.position())
    }
}

/// Applies incoming pose data to a host transform.
///
/// Two protocols are supported and intentionally kept apart:
/// [`apply_direct`](Self::apply_direct) reports the values it received,
/// [`apply_sensor`](Self::apply_sensor) reports the transform after the update.
#[derive(Debug, Clone)]
pub struct PoseSynchronizer {
    config: PoseConfig,
    recenter_offset: Quat,
    last_acceleration: Vec3,
}

impl Default for PoseSynchronizer {
    fn default() -> Self {
        Self::new(PoseConfig::default())
    }
}

impl PoseSynchronizer {
    pub fn new(config: PoseConfig) -> Self {
        Self {
            config,
            recenter_offset: Quat::IDENTITY,
            last_acceleration: Vec3::ZERO,
        }
    }

    pub fn config(&self) -> &PoseConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PoseConfig) {
        self.config = config;
    }

    pub fn recenter_offset(&self) -> Quat {
        self.recenter_offset
    }

    /// Latest acceleration reading. Diagnostic only, never applied.
    pub fn last_acceleration(&self) -> Vec3 {
        self.last_acceleration
    }

    /// Direct orientation protocol.
    pub fn apply_direct<T: PoseTarget + ?Sized>(
        &mut self,
        target: &mut T,
        orientation: Quat,
        position: Vec3,
    ) -> Pose {
        if self.config.rotation_active {
            target.set_orientation(orientation);
        }
        if self.config.position_active {
            target.set_position(position);
        }
        Pose::new(orientation, position)
    }

    /// Moves the transform to the configured defaults.
    ///
    /// On non-reference platforms the recenter offset is recomputed so that
    /// `attitude` maps onto the default orientation from now on.
    pub fn reset_pose<T: PoseTarget + ?Sized>(
        &mut self,
        target: &mut T,
        platform: Platform,
        attitude: Quat,
    ) -> Pose {
        let default_orientation = self.config.reset_orientation.to_quat();
        target.set_position(self.config.reset_position);
        target.set_orientation(default_orientation);
        if platform == Platform::Other {
            self.recenter_offset = default_orientation * attitude.inverse();
        }
        Pose::of(target)
    }

    /// Raw motion sensor protocol.
    pub fn apply_sensor<T: PoseTarget + ?Sized>(
        &mut self,
        target: &mut T,
        frame: &SensorFrame,
    ) -> Pose {
        if frame.reset {
            return self.reset_pose(target, frame.platform, frame.attitude);
        }

        if self.config.rotation_active {
            match frame.platform {
                Platform::Reference => {
                    let a = frame.attitude;
                    let delta = EulerAngles::new(-a.x, -a.z, -a.y).to_quat();
                    target.rotate_local(delta);

                    let mut angles = EulerAngles::from_quat(target.orientation());
                    if let Some(quadrant) = recenter(frame.gravity, &mut angles) {
                        log::trace!("recenter snapped to {}", quadrant.name);
                        target.set_orientation(angles.to_quat());
                    }
                }
                Platform::Other => {
                    target.set_orientation(self.recenter_offset * frame.attitude);
                }
            }
        }

        if self.config.position_active {
            self.last_acceleration = frame.acceleration;
        }

        Pose::of(target)
    }
}
