/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use kitchen_bmp::export_images;
use kitchen_html::{export_zone_and_country_select, export_zone_options};
use log::info;

use crate::cmd_parsers::get_image_settings;
use crate::config::ImageSettings;
use crate::errors::CmdErrors;

/// Validate `settings` and run the image export
///
/// The word size is checked before the input directory is touched,
/// an invalid one leaves no output behind.
pub fn export_images_from_settings(settings: &ImageSettings) -> Result<PathBuf, CmdErrors> {
    let options = settings.to_export_options()?;

    Ok(export_images(&options)?)
}

fn path_arg<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a Path, CmdErrors> {
    args.get_one::<PathBuf>(id)
        .map(PathBuf::as_path)
        .ok_or_else(|| CmdErrors::GenericString(format!("Missing argument {id}")))
}

fn report(path: &Path) {
    println!("Exported to \"{}\"", path.display());
}

pub(crate) fn exec_workflow_from_cmd(args: &ArgMatches) -> Result<(), CmdErrors> {
    match args.subcommand() {
        Some(("images", sub)) => {
            info!("Running image export");

            let settings = get_image_settings(sub)?;
            report(&export_images_from_settings(&settings)?);
        }
        Some(("zones", sub)) => {
            info!("Running zone options export");

            let written = export_zone_options(path_arg(sub, "in")?, path_arg(sub, "out")?)?;
            report(&written);
        }
        Some(("select", sub)) => {
            info!("Running zone and country select export");

            let written = export_zone_and_country_select(
                path_arg(sub, "zones")?,
                path_arg(sub, "countries")?,
                path_arg(sub, "out")?
            )?;
            report(&written);
        }
        Some((other, _)) => {
            return Err(CmdErrors::GenericString(format!(
                "Unknown subcommand {other}"
            )));
        }
        None => {
            return Err(CmdErrors::GenericString("No subcommand given".to_string()));
        }
    }
    Ok(())
}
