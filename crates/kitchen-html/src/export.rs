/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{read, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde_json::Value;

use crate::errors::HtmlErrors;
use crate::markup::{zone_and_country_markup, zone_options, Table};

/// Parse a JSON object, `table` names it in errors
pub fn parse_table(bytes: &[u8], table: &'static str) -> Result<Table, HtmlErrors> {
    match serde_json::from_slice::<Value>(bytes)? {
        Value::Object(map) => {
            debug!("Parsed {} entries from the {table} table", map.len());
            Ok(map)
        }
        _ => Err(HtmlErrors::NotAnObject(table))
    }
}

/// Read and parse a JSON object file
pub fn load_table(path: &Path, table: &'static str) -> Result<Table, HtmlErrors> {
    info!("Reading {table} table from {:?}", path);

    parse_table(&read(path)?, table)
}

fn write_markup(path: &Path, markup: &str) -> Result<PathBuf, HtmlErrors> {
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    let mut writer = BufWriter::new(file);
    writer.write_all(markup.as_bytes())?;
    writer.flush()?;

    info!("Wrote {} bytes to {:?}", markup.len(), path);

    Ok(path.to_path_buf())
}

/// Write one `<option>` line per zone of `zones` to `output`
pub fn export_zone_options(zones: &Path, output: &Path) -> Result<PathBuf, HtmlErrors> {
    let zones = load_table(zones, "zones")?;

    write_markup(output, &zone_options(&zones))
}

/// Write the country and time zone pickers to `output`
pub fn export_zone_and_country_select(
    zones: &Path, countries: &Path, output: &Path
) -> Result<PathBuf, HtmlErrors> {
    // both tables are read before the output is opened
    let zones = load_table(zones, "zones")?;
    let countries = load_table(countries, "countries")?;

    write_markup(output, &zone_and_country_markup(&zones, &countries))
}
