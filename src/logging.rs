use std::io::Write;

use colored::Colorize;
use env_logger::{Builder, Target};
use log::{Level, LevelFilter};

/// Env var that overrides `-v`, in `env_logger` filter syntax (e.g. `gcai=trace`).
pub const LOG_ENV: &str = "GCAI_LOG";

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error, // default: only errors
        1 => LevelFilter::Info,  // -v: info and up
        2 => LevelFilter::Debug, // -vv: debug and up
        _ => LevelFilter::Trace, // -vvv: trace and up
    }
}

/// Log to stderr so stdout carries nothing but the model's response.
pub fn init_logger(verbosity: u8) {
    let mut builder = Builder::new();
    builder
        .target(Target::Stderr)
        .filter_level(level_for(verbosity))
        .parse_env(LOG_ENV);

    builder.format(|buf, record| {
        let level_label = match record.level() {
            Level::Error => "ERROR".red().bold(),
            Level::Warn  => "WARN ".yellow().bold(),
            Level::Info  => "INFO ".white().bold(),
            Level::Debug => "DEBUG".bright_black(),
            Level::Trace => "TRACE".bright_black(),
        };

        if record.level() >= Level::Debug {
            writeln!(buf, "{} [{}] {}", level_label, record.target(), record.args())
        } else {
            writeln!(buf, "{} {}", level_label, record.args())
        }
    });

    builder.init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), LevelFilter::Error);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(7), LevelFilter::Trace);
    }
}
