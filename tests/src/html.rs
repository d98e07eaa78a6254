/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use kitchen_html::{zone_and_country_markup, zone_options, Table};
use serde::Deserialize;

use crate::{check_failures, load_entries};

#[derive(Clone, Deserialize, Debug)]
pub struct HtmlEntry {
    pub name:      String,
    pub zones:     Table,
    /// Absent for plain zone option lists
    pub countries: Option<Table>,
    pub expected:  String
}

#[test]
fn test_html() {
    let entries: Vec<HtmlEntry> = load_entries("html");
    let mut failures = Vec::new();

    for entry in &entries {
        let markup = match &entry.countries {
            Some(countries) => zone_and_country_markup(&entry.zones, countries),
            None => zone_options(&entry.zones)
        };

        if markup != entry.expected {
            eprintln!(
                "Markup mismatch for case {}\nExpected {:?}\nbut found {:?}\n",
                entry.name, entry.expected, markup
            );
            failures.push(entry.name.clone());
        }
    }
    check_failures(&failures);
}
