use std::fmt::Arguments;

use colored::{ColoredString, Colorize};
use fern::Dispatch;
use log::Level;

const TIMESTAMP_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Crates whose records pass the level filter set by `--verbose`.
const OWN_TARGETS: [&str; 4] = [
    "motionlinkd",
    "motionlink_controller",
    "motionlink_pose",
    "motionlink_profile",
];

fn paint(level: Level, line: String) -> ColoredString {
    match level {
        Level::Error => line.bright_red(),
        Level::Warn => line.bright_yellow(),
        Level::Info => line.normal(),
        Level::Debug | Level::Trace => line.dimmed(),
    }
}

/// One output line: timestamp, then the message styled by severity.
pub fn format_line(level: Level, timestamp: &str, message: &Arguments<'_>) -> String {
    paint(level, format!("[{timestamp}] {message}")).to_string()
}

/// Installs the stdout logger. Other crates are limited to errors.
pub fn setup(verbose: bool, no_color: bool) -> Result<(), log::SetLoggerError> {
    let own_level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if no_color {
        colored::control::set_override(false);
    }

    let dispatch = OWN_TARGETS
        .iter()
        .fold(Dispatch::new().level(log::LevelFilter::Error), |dispatch, target| {
            dispatch.level_for(*target, own_level)
        });
    dispatch
        .format(|out, message, record| {
            let now = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
            out.finish(format_args!("{}", format_line(record.level(), &now, message)));
        })
        .chain(std::io::stdout())
        .apply()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_starts_with_timestamp() {
        colored::control::set_override(false);

        let line = format_line(Level::Warn, "2026.01.02 03:04:05", &format_args!("peer {}", 7));

        assert_eq!(line, "[2026.01.02 03:04:05] peer 7");
    }
}
