/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{create_dir_all, read_to_string, remove_dir_all, write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use kitchen_html::{export_zone_and_country_select, export_zone_options, parse_table, HtmlErrors};

/// Scratch directory, removed when dropped
struct TempDir(PathBuf);

impl TempDir {
    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = remove_dir_all(&self.0);
    }
}

fn unique_temp_dir(tag: &str) -> TempDir {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("kitchen-html-{tag}-{nanos}"));
    create_dir_all(&dir).unwrap();
    TempDir(dir)
}

const ZONES: &str = r#"{
    "Europe/Prague": "CET-1CEST,M3.5.0,M10.5.0/3",
    "Africa/Abidjan": "GMT0"
}"#;

const COUNTRIES: &str = r#"{"CZ": "Czechia", "AD": "Andorra"}"#;

#[test]
fn zone_options_file() {
    let scratch = unique_temp_dir("zones");
    let dir = scratch.path();
    write(dir.join("zones.json"), ZONES).unwrap();

    let output = dir.join("output.txt");
    let written = export_zone_options(&dir.join("zones.json"), &output).unwrap();
    assert_eq!(written, output);

    assert_eq!(
        read_to_string(&output).unwrap(),
        "<option value=\"CET-1CEST,M3.5.0,M10.5.0/3\">Europe/Prague</option>\n\
         <option value=\"GMT0\">Africa/Abidjan</option>\n"
    );
}

#[test]
fn zone_and_country_file() {
    let scratch = unique_temp_dir("select");
    let dir = scratch.path();
    write(dir.join("zones.json"), ZONES).unwrap();
    write(dir.join("ISO3166-alpha2.json"), COUNTRIES).unwrap();

    let output = dir.join("output.txt");
    export_zone_and_country_select(
        &dir.join("zones.json"),
        &dir.join("ISO3166-alpha2.json"),
        &output
    )
    .unwrap();

    let text = read_to_string(&output).unwrap();

    // key order of the files is kept
    let cz = text.find(">Czechia<").unwrap();
    let ad = text.find(">Andorra<").unwrap();
    let prague = text.find(">Europe/Prague<").unwrap();
    let abidjan = text.find(">Africa/Abidjan<").unwrap();

    assert!(cz < ad);
    assert!(ad < prague);
    assert!(prague < abidjan);
    assert!(text.ends_with("\t<option value=\"GMT0\">Africa/Abidjan</option>\n</select><br><br>\n\n"));
}

#[test]
fn missing_countries_file_writes_nothing() {
    let scratch = unique_temp_dir("missing");
    let dir = scratch.path();
    write(dir.join("zones.json"), ZONES).unwrap();

    let output = dir.join("output.txt");
    let result = export_zone_and_country_select(
        &dir.join("zones.json"),
        &dir.join("ISO3166-alpha2.json"),
        &output
    );

    assert!(matches!(result, Err(HtmlErrors::IoErrors(_))));
    assert!(!output.exists());
}

#[test]
fn scratch_directory_is_removed_on_drop() {
    let scratch = unique_temp_dir("drop");
    let dir = scratch.path().to_path_buf();
    write(dir.join("zones.json"), ZONES).unwrap();
    export_zone_options(&dir.join("zones.json"), &dir.join("output.txt")).unwrap();

    drop(scratch);
    assert!(!dir.exists());
}

#[test]
fn tables_must_be_objects() {
    assert!(matches!(
        parse_table(b"[\"GMT0\"]", "zones"),
        Err(HtmlErrors::NotAnObject("zones"))
    ));
    assert!(matches!(
        parse_table(b"{\"CZ\": ", "countries"),
        Err(HtmlErrors::Json(_))
    ));
}
