mod math;
mod recenter;
mod sensor;
mod sync;
mod transform;

pub use math::{same_rotation, EulerAngles, Quat, Vec3};
pub use recenter::{recenter, Quadrant, SnapAxis, QUADRANTS, SNAP_THRESHOLD};
pub use sensor::{Platform, SensorFrame};
pub use sync::{Pose, PoseConfig, PoseSynchronizer};
pub use transform::{PoseTarget, Transform};
