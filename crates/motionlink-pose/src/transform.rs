use crate::math::{Quat, Vec3};

/// The host side transform a controller drives.
///
/// The synchronizer never owns the transform; hosts pass their scene node
/// in on every update.
pub trait PoseTarget {
    fn orientation(&self) -> Quat;
    fn set_orientation(&mut self, orientation: Quat);
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);

    /// Applies `delta` in local space.
    fn rotate_local(&mut self, delta: Quat) {
        let next = (self.orientation() * delta).normalize();
        self.set_orientation(next);
    }
}

/// Plain in-memory transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub orientation: Quat,
    pub position: Vec3,
}

impl Transform {
    pub fn new(orientation: Quat, position: Vec3) -> Self {
        Self {
            orientation,
            position,
        }
    }
}

impl PoseTarget for Transform {
    fn orientation(&self) -> Quat {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}
