//! Rotation helpers on top of `glam`. Angles at the API boundary are degrees.

use glam::EulerRot;

pub use glam::{Quat, Vec3};

/// Euler angles in degrees.
///
/// Pitch turns about X, yaw about Y and roll about Z. A rotation is
/// composed as yaw, then pitch, then roll in local space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl EulerAngles {
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }

    /// Decomposes `q`, pitch in [-90, 90].
    ///
    /// At ±90 pitch only the sum (or difference) of yaw and roll is defined.
    /// The returned split always composes back to `q`.
    pub fn from_quat(q: Quat) -> Self {
        let (yaw, pitch, roll) = q.normalize().to_euler(EulerRot::YXZ);
        Self::new(pitch.to_degrees(), yaw.to_degrees(), roll.to_degrees())
    }
}

impl From<[f32; 3]> for EulerAngles {
    fn from([pitch, yaw, roll]: [f32; 3]) -> Self {
        Self::new(pitch, yaw, roll)
    }
}

/// Whether both quaternions describe the same rotation within `eps`.
/// `q` and `-q` are treated as equal.
pub fn same_rotation(a: Quat, b: Quat, eps: f32) -> bool {
    (1.0 - a.dot(b).abs()) <= eps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-3, "{a} != {b}");
    }

    #[test]
    fn euler_decomposition_recovers_composed_angles() {
        let angles = EulerAngles::new(-38.9, 149.7, -95.7);
        let back = EulerAngles::from_quat(angles.to_quat());
        assert_close(back.pitch, angles.pitch);
        assert_close(back.yaw, angles.yaw);
        assert_close(back.roll, angles.roll);
    }

    #[test]
    fn decomposition_at_vertical_pitch_keeps_the_rotation() {
        for pitch in [-90.0, 90.0] {
            let q = EulerAngles::new(pitch, 30.0, 10.0).to_quat();

            let back = EulerAngles::from_quat(q);

            assert_close(back.pitch, pitch);
            assert!(same_rotation(back.to_quat(), q, 1e-5), "{back:?}");
        }
    }

    #[test]
    fn vertical_pitch_folds_roll_into_heading() {
        let up = EulerAngles::new(-90.0, 30.0, 10.0).to_quat();
        let down = EulerAngles::new(90.0, 30.0, 10.0).to_quat();

        assert!(same_rotation(up, EulerAngles::new(-90.0, 40.0, 0.0).to_quat(), 1e-5));
        assert!(same_rotation(down, EulerAngles::new(90.0, 20.0, 0.0).to_quat(), 1e-5));
    }

    #[test]
    fn yaw_rotates_forward_towards_positive_x() {
        let q = EulerAngles::new(0.0, 90.0, 0.0).to_quat();
        let v = q * Vec3::Z;
        assert_close(v.x, 1.0);
        assert_close(v.y, 0.0);
        assert_close(v.z, 0.0);
    }

    #[test]
    fn same_rotation_accepts_negated_quaternion() {
        let q = EulerAngles::new(0.0, 45.0, 0.0).to_quat();
        assert!(same_rotation(q, -q, 1e-5));
        assert!(!same_rotation(q, Quat::IDENTITY, 1e-5));
    }
}
