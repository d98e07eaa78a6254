/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use log::info;

use crate::cmd_args::arg_parsers::IListingOrder;
use crate::config::{load_config, ImageSettings};
use crate::errors::CmdErrors;

pub mod global_options;

/// Settings passed as flags to the `images` subcommand
pub fn image_settings_from_flags(args: &ArgMatches) -> ImageSettings {
    ImageSettings {
        input_dir:   args.get_one::<PathBuf>("in").cloned(),
        output_file: args.get_one::<PathBuf>("out").cloned(),
        width:       args.get_one::<usize>("width").copied(),
        height:      args.get_one::<usize>("height").copied(),
        bits:        args.get_one::<u32>("bits").copied(),
        order:       args.get_one::<IListingOrder>("order").copied()
    }
}

/// Config file settings, overridden by command line flags
pub fn get_image_settings(args: &ArgMatches) -> Result<ImageSettings, CmdErrors> {
    let file_settings = match args.get_one::<PathBuf>("config") {
        Some(path) => {
            info!("Loading settings from {:?}", path);
            load_config(path)?
        }
        None => ImageSettings::default()
    };

    Ok(file_settings.merge(image_settings_from_flags(args)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn flags_without_config() {
        let matches = create_cmd_args()
            .try_get_matches_from(["kitchen", "images", "--width", "8", "--height", "4"])
            .unwrap();
        let (_, images) = matches.subcommand().unwrap();

        let settings = get_image_settings(images).unwrap();

        assert_eq!(settings.width, Some(8));
        assert_eq!(settings.height, Some(4));
        assert_eq!(settings.bits, None);
        assert_eq!(settings.input_dir, None);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let matches = create_cmd_args()
            .try_get_matches_from(["kitchen", "images", "-c", "/nonexistent/kitchen.json"])
            .unwrap();
        let (_, images) = matches.subcommand().unwrap();

        assert!(matches!(
            get_image_settings(images),
            Err(CmdErrors::Config(..))
        ));
    }
}
