//! Logger setup for the CLI.
//!
//! Normal output goes through `log::info!` to stdout with a bare message
//! format; warnings and errors carry a colored level tag. `--verbose`
//! switches to timestamped debug output. `RUST_LOG` overrides the level.

use std::io::Write;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

pub(crate) fn init(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout);

    if verbose {
        builder.format_timestamp_millis().format_target(false);
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            _ => writeln!(buf, "{}", record.args().if_supports_color(Stdout, |t| t.dimmed())),
        });
    }

    builder.parse_default_env();
    if let Err(e) = builder.try_init() {
        eprintln!("Logger already initialized: {e}");
    }
}
