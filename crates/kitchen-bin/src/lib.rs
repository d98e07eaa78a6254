/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

use crate::workflow::exec_workflow_from_cmd;

mod cmd_args;
mod cmd_parsers;
mod config;
mod errors;
mod workflow;

pub use crate::cmd_args::arg_parsers::IListingOrder;
pub use crate::config::ImageSettings;
pub use crate::errors::CmdErrors;
pub use crate::workflow::export_images_from_settings;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    if let Err(err) = cmd_parsers::global_options::setup_logger(&options) {
        eprintln!("Could not set up logging: {err}");
    }

    if let Err(err) = exec_workflow_from_cmd(&options) {
        println!();
        error!(" Could not complete workflow, reason {:?}", err);

        println!();
        exit(-1);
    }
}
