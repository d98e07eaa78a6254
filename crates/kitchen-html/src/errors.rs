/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;

/// Errors occurring while reading tables or writing markup
#[non_exhaustive]
pub enum HtmlErrors {
    /// The top level JSON value of the named table is not an object
    NotAnObject(&'static str),
    Json(serde_json::Error),
    IoErrors(io::Error)
}

impl Debug for HtmlErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnObject(table) => {
                writeln!(f, "The {table} table must be a JSON object")
            }
            Self::Json(err) => {
                writeln!(f, "Invalid JSON: {err}")
            }
            Self::IoErrors(err) => {
                writeln!(f, "{err:?}")
            }
        }
    }
}

impl Display for HtmlErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnObject(table) => write!(f, "the {table} table must be a JSON object"),
            Self::Json(err) => write!(f, "invalid JSON: {err}"),
            Self::IoErrors(err) => write!(f, "{err}")
        }
    }
}

impl std::error::Error for HtmlErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotAnObject(_) => None,
            Self::Json(err) => Some(err),
            Self::IoErrors(err) => Some(err)
        }
    }
}

impl From<io::Error> for HtmlErrors {
    fn from(err: io::Error) -> Self {
        HtmlErrors::IoErrors(err)
    }
}

impl From<serde_json::Error> for HtmlErrors {
    fn from(err: serde_json::Error) -> Self {
        HtmlErrors::Json(err)
    }
}
