/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::borrow::Cow;
use std::fmt::Write;

use serde_json::{Map, Value};

/// A JSON object read from a zones or countries file
pub type Table = Map<String, Value>;

/// Text of a table value, strings lose their quotes
///
/// Anything else is written as compact JSON text, so `null`, `true` and
/// `[1,2]` come out as `null`, `true` and `[1,2]`, never as `None` or `True`.
fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        other => Cow::Owned(other.to_string())
    }
}

/// One `<option>` per zone, the zone name is the label and the TZ string the value
///
/// ```text
/// <option value="CET-1CEST,M3.5.0,M10.5.0/3">Europe/Prague</option>
/// ```
pub fn zone_options(zones: &Table) -> String {
    zones.iter().fold(String::new(), |mut out, (name, value)| {
        let _ = writeln!(out, "<option value=\"{}\">{name}</option>", value_text(value));
        out
    })
}

fn select<'a>(
    id: &str, title: &str, options: impl Iterator<Item = (Cow<'a, str>, Cow<'a, str>)>
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "<label for=\"{id}\"><b>{title}</b></label><br>");
    let _ = writeln!(out, "<select id=\"{id}\" name=\"{id}\">");

    let mut out = options.fold(out, |mut out, (value, label)| {
        let _ = writeln!(out, "\t<option value=\"{value}\">{label}</option>");
        out
    });

    out.push_str("</select><br><br>\n\n");
    out
}

/// Country picker, the code is the value and the country name the label
pub fn country_select(countries: &Table) -> String {
    select(
        "country-code",
        "COUNTRY CODE",
        countries
            .iter()
            .map(|(code, name)| (Cow::Borrowed(code.as_str()), value_text(name)))
    )
}

/// Time zone picker, the TZ string is the value and the zone name the label
pub fn zone_select(zones: &Table) -> String {
    select(
        "timezones",
        "TIME ZONE",
        zones
            .iter()
            .map(|(name, value)| (value_text(value), Cow::Borrowed(name.as_str())))
    )
}

/// Country picker followed by the time zone picker
pub fn zone_and_country_markup(zones: &Table, countries: &Table) -> String {
    country_select(countries) + &zone_select(zones)
}
