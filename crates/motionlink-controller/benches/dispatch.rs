use codspeed_criterion_compat::{black_box, criterion_group, criterion_main, Criterion};
use motionlink_controller::pose::{Quat, SensorFrame, Transform, Vec3};
use motionlink_controller::{ControlSelector, ControllerHub, Message};

const PEER: u32 = 1;

fn started_hub(transform: &mut Transform) -> ControllerHub {
    let mut hub = ControllerHub::new();
    let started = Message::ControllerStarted {
        name: "bench".to_string(),
        is_left_handed: false,
        skin: "default".to_string(),
    };
    let _ = hub.dispatch(PEER, started, transform);
    hub
}

pub fn bench_button_path(c: &mut Criterion) {
    let mut transform = Transform::default();
    let mut hub = started_hub(&mut transform);
    if let Some(controller) = hub.controller_mut(PEER) {
        controller.subscribe_button_down("trigger", |name, _| {
            black_box(name);
        });
        controller.subscribe_button_up(ControlSelector::Any, |name, _| {
            black_box(name);
        });
    }

    c.bench_function("buttons_press_release_single", |b| {
        b.iter(|| {
            let down = Message::ButtonDown {
                name: "trigger".to_string(),
            };
            let up = Message::ButtonUp {
                name: "trigger".to_string(),
            };
            let _ = hub.dispatch(PEER, down, &mut transform);
            let _ = hub.dispatch(PEER, up, &mut transform);
            black_box(hub.controller(PEER).map(|c| c.button_state("trigger")))
        })
    });
}

pub fn bench_pose_path(c: &mut Criterion) {
    let mut transform = Transform::default();
    let mut hub = started_hub(&mut transform);

    c.bench_function("pose_direct", |b| {
        b.iter(|| {
            let message = Message::ControlInfo {
                orientation: Quat::from_xyzw(0.0, 0.38, 0.0, 0.92),
                position: Vec3::new(0.1, 1.2, 0.3),
            };
            let _ = hub.dispatch(PEER, message, &mut transform);
            black_box(transform)
        })
    });

    c.bench_function("pose_sensor_reference", |b| {
        b.iter(|| {
            let frame = SensorFrame::from_wire(
                false,
                true,
                [0.1, 0.2, 0.3, 1.0],
                [0.0, -9.81, 0.0],
                [0.0, 0.0, 0.0],
            );
            let _ = hub.dispatch(PEER, Message::SensorInfo(frame), &mut transform);
            black_box(transform)
        })
    });
}

criterion_group!(benches, bench_button_path, bench_pose_path);
criterion_main!(benches);
