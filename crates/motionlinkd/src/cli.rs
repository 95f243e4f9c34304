use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use motionlink_controller::ControllerId;
use motionlinkd::api::WireCall;

#[derive(Debug, Subcommand, PartialEq)]
pub(crate) enum Command {
    /// Run the daemon in the foreground.
    Run {
        /// The directory containing the profile and the socket
        #[clap(short, long)]
        workspace: Option<PathBuf>,
    },
    /// Send a single call to a running daemon.
    Send {
        /// The directory containing the socket
        #[clap(short, long)]
        workspace: Option<PathBuf>,
        /// Peer id the call is sent from
        #[clap(short, long)]
        peer: ControllerId,
        /// The call to send
        #[clap(subcommand)]
        call: Call,
    },
}

#[derive(Debug, Subcommand, PartialEq)]
pub(crate) enum Call {
    /// Announce a controller.
    Started {
        name: String,
        #[arg(long)]
        left_handed: bool,
        #[arg(long, default_value = "default")]
        skin: String,
    },
    /// Press a button.
    ButtonDown { name: String },
    /// Release a button.
    ButtonUp { name: String },
    /// Move a slider.
    Slider {
        name: String,
        #[arg(allow_negative_numbers = true)]
        value: f32,
    },
    /// Absolute orientation and position.
    ControlInfo {
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        qx: f32,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        qy: f32,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        qz: f32,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        qw: f32,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        px: f32,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        py: f32,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        pz: f32,
    },
    /// Raw motion sensor readings.
    SensorInfo {
        #[arg(long)]
        reset: bool,
        /// Sender uses the relative gyro path
        #[arg(long)]
        reference: bool,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        ax: f32,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        ay: f32,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        az: f32,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        aw: f32,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        gx: f32,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        gy: f32,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        gz: f32,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        px: f32,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        py: f32,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        pz: f32,
    },
}

impl From<Call> for WireCall {
    fn from(call: Call) -> Self {
        match call {
            Call::Started {
                name,
                left_handed,
                skin,
            } => WireCall::ControllerStarted {
                name,
                is_left_handed: left_handed,
                skin,
            },
            Call::ButtonDown { name } => WireCall::ButtonDown { name },
            Call::ButtonUp { name } => WireCall::ButtonUp { name },
            Call::Slider { name, value } => WireCall::SliderChanged { name, value },
            Call::ControlInfo {
                qx,
                qy,
                qz,
                qw,
                px,
                py,
                pz,
            } => WireCall::ControlInfo {
                orientation: [qx, qy, qz, qw],
                position: [px, py, pz],
            },
            Call::SensorInfo {
                reset,
                reference,
                ax,
                ay,
                az,
                aw,
                gx,
                gy,
                gz,
                px,
                py,
                pz,
            } => WireCall::SensorInfo {
                reset,
                is_reference_platform: reference,
                attitude: [ax, ay, az, aw],
                gravity: [gx, gy, gz],
                acceleration: [px, py, pz],
            },
        }
    }
}

/// Motion controller state sync daemon.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Turn debugging information on
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The command to run
    #[clap(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_parses_nested_call() {
        let cli = Cli::try_parse_from([
            "motionlinkd",
            "send",
            "--peer",
            "3",
            "slider",
            "pad",
            "-0.5",
        ])
        .unwrap();

        let Command::Send { peer, call, .. } = cli.command else {
            panic!("expected send command");
        };
        assert_eq!(peer, 3);
        assert_eq!(
            WireCall::from(call),
            WireCall::SliderChanged {
                name: "pad".into(),
                value: -0.5,
            }
        );
    }

    #[test]
    fn sensor_info_defaults_to_identity_attitude() {
        let cli = Cli::try_parse_from([
            "motionlinkd",
            "send",
            "-p",
            "1",
            "sensor-info",
            "--reference",
            "--gy",
            "-9.81",
        ])
        .unwrap();

        let Command::Send { call, .. } = cli.command else {
            panic!("expected send command");
        };
        assert_eq!(
            WireCall::from(call),
            WireCall::SensorInfo {
                reset: false,
                is_reference_platform: true,
                attitude: [0.0, 0.0, 0.0, 1.0],
                gravity: [0.0, -9.81, 0.0],
                acceleration: [0.0, 0.0, 0.0],
            }
        );
    }

    #[test]
    fn run_accepts_workspace() {
        let cli = Cli::try_parse_from(["motionlinkd", "-v", "run", "-w", "/tmp/ml"]).unwrap();

        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Command::Run {
                workspace: Some(PathBuf::from("/tmp/ml")),
            }
        );
    }
}
