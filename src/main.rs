// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;
use taskdeck::app::{self, paths, Flags, Screen};

/// Environment variable selecting the log level (error, warn, info, debug, trace).
const ENV_LOG_LEVEL: &str = "TASKDECK_LOG";

const HELP: &str = "\
TaskDeck

USAGE:
  taskdeck [OPTIONS]

OPTIONS:
  --data-dir DIR        Client storage directory
  --config-dir DIR      Directory holding settings.toml
  --ephemeral           Keep client storage in memory only
  --screen NAME         Start screen: login (default) or dashboard
  -h, --help            Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        ephemeral: args.contains("--ephemeral"),
        screen: args
            .opt_value_from_str::<_, Screen>("--screen")?
            .unwrap_or_default(),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(flags))
}

fn main() -> ExitCode {
    let level = std::env::var(ENV_LOG_LEVEL)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(log::LevelFilter::Info);
    if let Err(error) = simple_logger::SimpleLogger::new()
        .with_level(level)
        .with_colors(true)
        .with_local_timestamps()
        .init()
    {
        eprintln!("failed to build logger instance: {error}");
    }

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            eprintln!("{error}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_overrides(
        flags.data_dir.as_ref().map(PathBuf::from),
        flags.config_dir.as_ref().map(PathBuf::from),
    );

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("application error: {error}");
            ExitCode::FAILURE
        }
    }
}
