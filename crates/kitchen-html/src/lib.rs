/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! HTML markup for the firmware configuration page
//!
//! The configuration page lets the user pick a country code and a time zone.
//! The option lists are generated from two JSON tables:
//!
//! - a zones table, mapping a zone name to a POSIX TZ string
//!   (`{"Europe/Prague": "CET-1CEST,M3.5.0,M10.5.0/3"}`)
//! - a countries table, mapping an ISO 3166 alpha-2 code to a country name
//!   (`{"CZ": "Czechia"}`)
//!
//! Options are written in the key order of the source file. Strings are
//! written as-is, no HTML escaping is done.
pub use crate::errors::HtmlErrors;
pub use crate::export::{export_zone_and_country_select, export_zone_options, load_table, parse_table};
pub use crate::markup::{country_select, zone_and_country_markup, zone_options, zone_select, Table};

mod errors;
mod export;
mod markup;
