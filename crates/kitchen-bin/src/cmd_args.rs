/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::arg_parsers::IListingOrder;
use crate::cmd_args::help_strings::{BITS_HELP, CONFIG_HELP, ORDER_HELP, SELECT_HELP};

pub mod arg_parsers;
pub mod help_strings;

#[rustfmt::skip]
fn images_cmd() -> Command {
    Command::new("images")
        .about("Export a directory of bitmaps as C arrays")
        .arg(Arg::new("config")
            .short('c')
            .long("config")
            .help("JSON file with export settings")
            .long_help(CONFIG_HELP)
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Directory holding the bitmaps [default: images-bmp]")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("File to write the arrays to [default: output.txt]")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("width")
            .long("width")
            .help_heading("GEOMETRY")
            .help("Image width in pixels [default: 64]")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("height")
            .long("height")
            .help_heading("GEOMETRY")
            .help("Image height in pixels [default: 32]")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("bits")
            .long("bits")
            .help_heading("GEOMETRY")
            .help("Bits per array element, 8, 16 or 32 [default: 16]")
            .long_help(BITS_HELP)
            .value_parser(value_parser!(u32)))
        .arg(Arg::new("order")
            .long("order")
            .help("Order of the images in the output [default: native]")
            .long_help(ORDER_HELP)
            .value_parser(value_parser!(IListingOrder)))
}

#[rustfmt::skip]
fn zones_cmd() -> Command {
    Command::new("zones")
        .about("Export a zones table as HTML <option> lines")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Zones JSON file")
            .default_value("zones.json")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("File to write the markup to")
            .default_value("output.txt")
            .value_parser(value_parser!(PathBuf)))
}

#[rustfmt::skip]
fn select_cmd() -> Command {
    Command::new("select")
        .about("Export country and time zone pickers as HTML")
        .long_about(SELECT_HELP)
        .arg(Arg::new("zones")
            .long("zones")
            .help("Zones JSON file")
            .default_value("zones.json")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("countries")
            .long("countries")
            .help("ISO 3166 alpha-2 countries JSON file")
            .default_value("ISO3166-alpha2.json")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("File to write the markup to")
            .default_value("output.txt")
            .value_parser(value_parser!(PathBuf)))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("kitchen")
        .about("Asset tooling for the kitchen-light firmware")
        .subcommand_required(true)
        .subcommand(images_cmd())
        .subcommand(zones_cmd())
        .subcommand(select_cmd())
        .arg(Arg::new("debug")
            .long("debug")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the export"))
}
