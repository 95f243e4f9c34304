use crate::math::{Quat, Vec3};

/// Sensor transport variant reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Relative gyro path. Rotations are integrated and recentered.
    Reference,
    /// Heading-inclusive attitude, applied absolutely through the recenter offset.
    Other,
}

impl Platform {
    pub fn from_flag(is_reference: bool) -> Self {
        if is_reference {
            Self::Reference
        } else {
            Self::Other
        }
    }
}

/// One raw motion sensor update, already converted to the host axis convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorFrame {
    pub reset: bool,
    pub platform: Platform,
    pub attitude: Quat,
    pub gravity: Vec3,
    pub acceleration: Vec3,
}

impl SensorFrame {
    /// Builds a frame from sensor-native readings.
    ///
    /// Attitude `(x, y, z, w)` becomes `(-x, -z, -y, w)` and acceleration
    /// `(x, y, z)` becomes `(x, z, -y)`. Gravity is taken as is.
    pub fn from_wire(
        reset: bool,
        is_reference_platform: bool,
        attitude: [f32; 4],
        gravity: [f32; 3],
        acceleration: [f32; 3],
    ) -> Self {
        let [ax, ay, az, aw] = attitude;
        let [px, py, pz] = acceleration;
        Self {
            reset,
            platform: Platform::from_flag(is_reference_platform),
            attitude: Quat::from_xyzw(-ax, -az, -ay, aw),
            gravity: Vec3::from(gravity),
            acceleration: Vec3::new(px, pz, -py),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_readings_are_remapped_to_host_axes() {
        let frame = SensorFrame::from_wire(
            false,
            true,
            [0.1, 0.2, 0.3, 0.9],
            [0.0, -9.8, 0.0],
            [1.0, 2.0, 3.0],
        );
        assert_eq!(frame.platform, Platform::Reference);
        assert_eq!(frame.attitude, Quat::from_xyzw(-0.1, -0.3, -0.2, 0.9));
        assert_eq!(frame.gravity, Vec3::new(0.0, -9.8, 0.0));
        assert_eq!(frame.acceleration, Vec3::new(1.0, 3.0, -2.0));
    }

    #[test]
    fn platform_flag_selects_variant() {
        assert_eq!(Platform::from_flag(true), Platform::Reference);
        assert_eq!(Platform::from_flag(false), Platform::Other);
    }
}
