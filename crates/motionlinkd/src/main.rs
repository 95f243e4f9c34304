mod cli;

use std::path::Path;
use std::process::ExitCode;
use std::thread;

use clap::Parser;
use crossbeam_channel::{select, unbounded};
use motionlink_controller::ControllerId;
use motionlink_profile::{Profile, ProfileEvent, Workspace};

use motionlinkd::api::{ApiTransport, UnixSocket, WireFrame};
use motionlinkd::app::App;
use motionlinkd::logging;

use crate::cli::{Call, Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if logging::setup(cli.verbose, cli.no_color).is_err() {
        return ExitCode::FAILURE;
    }

    match cli.command {
        Command::Run { workspace } => run(workspace.as_deref()),
        Command::Send {
            workspace,
            peer,
            call,
        } => send(workspace.as_deref(), peer, call),
    }
}

fn open_workspace(path: Option<&Path>) -> Option<Workspace> {
    match Workspace::new(path) {
        Ok(workspace) => Some(workspace),
        Err(e) => {
            log::error!("failed to open workspace: {e}");
            None
        }
    }
}

fn run(path: Option<&Path>) -> ExitCode {
    let Some(workspace) = open_workspace(path) else {
        return ExitCode::FAILURE;
    };

    // Handle Ctrl+C to exit cleanly
    let (stop_tx, stop_rx) = unbounded::<()>();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    }) {
        log::error!("failed to set Ctrl+C handler: {e}");
        return ExitCode::FAILURE;
    }

    // The watcher reports over std::mpsc, bridge it to crossbeam.
    let (_watcher, profile_std_rx) = match workspace.start_profile_watcher() {
        Ok(watcher) => watcher,
        Err(e) => {
            log::error!("failed to watch profile: {e}");
            return ExitCode::FAILURE;
        }
    };
    let (profile_tx, profile_rx) = unbounded::<ProfileEvent>();
    thread::spawn(move || {
        while let Ok(event) = profile_std_rx.recv() {
            if profile_tx.send(event).is_err() {
                break;
            }
        }
    });

    let (frame_tx, frame_rx) = unbounded::<WireFrame>();
    let transport = UnixSocket::new(workspace.path());
    if let Err(e) = transport.listen_frames(frame_tx) {
        log::error!("failed to start api: {e}");
        return ExitCode::FAILURE;
    }

    let mut app = App::new();
    log::info!("motionlinkd started. Listening for controllers.");
    loop {
        select! {
            recv(stop_rx) -> _ => {
                break;
            }
            recv(profile_rx) -> msg => {
                match msg {
                    Ok(ProfileEvent::Changed(profile)) => {
                        app.apply_profile(profile);
                        log::info!("profile loaded");
                    }
                    Ok(ProfileEvent::Removed) => {
                        log::warn!("profile not found, using defaults");
                        app.apply_profile(Profile::default());
                    }
                    Ok(ProfileEvent::Error(e)) => {
                        log::error!("failed to load profile: {e}");
                    }
                    Err(_) => {
                        log::error!("profile watcher stopped");
                        break;
                    }
                }
            }
            recv(frame_rx) -> msg => {
                match msg {
                    Ok(frame) => {
                        let peer = frame.peer;
                        if let Err(e) = app.handle_frame(frame) {
                            log::error!("dropped call from {peer}: {e}");
                        }
                    }
                    Err(err) => {
                        log::error!("frame channel closed: {err}");
                        break;
                    }
                }
            }
        }
    }

    let _ = std::fs::remove_file(transport.socket_path());
    log::info!("motionlinkd stopped");
    ExitCode::SUCCESS
}

fn send(path: Option<&Path>, peer: ControllerId, call: Call) -> ExitCode {
    let Some(workspace) = open_workspace(path) else {
        return ExitCode::FAILURE;
    };
    let transport = UnixSocket::new(workspace.path());
    let frame = WireFrame {
        peer,
        call: call.into(),
    };

    match transport.send_frames(&[frame]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("failed to send call: {e}");
            ExitCode::FAILURE
        }
    }
}
