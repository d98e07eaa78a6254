/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};

use crate::errors::CmdErrors;

/// Logging flags are global, they may be given before or after the subcommand
fn flag(options: &ArgMatches, id: &str) -> bool {
    let set = |matches: &ArgMatches| matches.get_one::<bool>(id).copied().unwrap_or(false);

    set(options) || options.subcommand().is_some_and(|(_, sub)| set(sub))
}

/// Log level picked by the logging flags, `warn` when none is given
pub fn log_level(options: &ArgMatches) -> Level {
    if flag(options, "debug") {
        Level::Debug
    } else if flag(options, "trace") {
        Level::Trace
    } else if flag(options, "warn") {
        Level::Warn
    } else if flag(options, "info") {
        Level::Info
    } else {
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) -> Result<(), CmdErrors> {
    let log_level = log_level(options);

    simple_logger::init_with_level(log_level)?;

    info!("Initialized logger");
    info!("Log level :{}", log_level);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd_args::create_cmd_args;

    fn level_for(args: &[&str]) -> Level {
        let matches = create_cmd_args().try_get_matches_from(args).unwrap();
        log_level(&matches)
    }

    #[test]
    fn default_level_is_warn() {
        assert_eq!(level_for(&["kitchen", "zones"]), Level::Warn);
    }

    #[test]
    fn flags_after_subcommand_are_global() {
        assert_eq!(level_for(&["kitchen", "zones", "--trace"]), Level::Trace);
        assert_eq!(level_for(&["kitchen", "--info", "images"]), Level::Info);
    }

    #[test]
    fn debug_wins_over_others() {
        assert_eq!(
            level_for(&["kitchen", "--trace", "--debug", "select"]),
            Level::Debug
        );
    }
}
