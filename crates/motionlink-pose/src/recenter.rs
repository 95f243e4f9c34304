//! Gravity based drift correction.
//!
//! The sensor path integrates relative rotations and accumulates drift.
//! When the device rests in one of six canonical holding positions the
//! gravity reading lines up with an axis, and the matching Euler component
//! is snapped to its canonical angle.

use crate::math::{EulerAngles, Vec3};

/// Minimal cosine between gravity and a quadrant direction (about 5.7°).
pub const SNAP_THRESHOLD: f32 = 0.995;

/// Euler component that a quadrant snaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapAxis {
    Pitch,
    Roll,
}

/// A canonical device holding position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrant {
    pub name: &'static str,
    pub direction: Vec3,
    pub axis: SnapAxis,
    pub angle: f32,
}

/// Quadrants in evaluation order. Later matches overwrite earlier ones.
pub const QUADRANTS: [Quadrant; 6] = [
    Quadrant {
        name: "portrait_up",
        direction: Vec3::new(0.0, -1.0, 0.0),
        axis: SnapAxis::Pitch,
        angle: -90.0,
    },
    Quadrant {
        name: "portrait_down",
        direction: Vec3::new(0.0, 1.0, 0.0),
        axis: SnapAxis::Pitch,
        angle: 90.0,
    },
    Quadrant {
        name: "face_down",
        direction: Vec3::new(0.0, 0.0, -1.0),
        axis: SnapAxis::Pitch,
        angle: 0.0,
    },
    Quadrant {
        name: "face_up",
        direction: Vec3::new(0.0, 0.0, 1.0),
        axis: SnapAxis::Pitch,
        angle: 180.0,
    },
    Quadrant {
        name: "lean_right",
        direction: Vec3::new(1.0, 0.0, 0.0),
        axis: SnapAxis::Roll,
        angle: -90.0,
    },
    Quadrant {
        name: "lean_left",
        direction: Vec3::new(-1.0, 0.0, 0.0),
        axis: SnapAxis::Roll,
        angle: 90.0,
    },
];

impl Quadrant {
    pub fn matches(&self, gravity: Vec3) -> bool {
        gravity.normalize_or_zero().dot(self.direction) > SNAP_THRESHOLD
    }

    fn snap(&self, angles: &mut EulerAngles) {
        match self.axis {
            SnapAxis::Pitch => angles.pitch = self.angle,
            SnapAxis::Roll => angles.roll = self.angle,
        }
    }
}

/// Snaps `angles` in place against the gravity reading.
/// Returns the last quadrant that matched, if any.
pub fn recenter(gravity: Vec3, angles: &mut EulerAngles) -> Option<&'static Quadrant> {
    let mut matched = None;
    for quadrant in QUADRANTS.iter() {
        if quadrant.matches(gravity) {
            quadrant.snap(angles);
            matched = Some(quadrant);
        }
    }
    matched
}
