/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use kitchen_bmp::ExportErrors;
use kitchen_html::HtmlErrors;

/// Errors surfaced by the command line workflows
pub enum CmdErrors {
    Export(ExportErrors),
    Html(HtmlErrors),
    /// Config file could not be read or parsed
    Config(PathBuf, String),
    Logger(log::SetLoggerError),
    GenericString(String)
}

impl Debug for CmdErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Export(err) => writeln!(f, "{err:?}"),
            Self::Html(err) => writeln!(f, "{err:?}"),
            Self::Config(path, reason) => {
                writeln!(f, "Could not load config file {path:?}: {reason}")
            }
            Self::Logger(err) => writeln!(f, "{err:?}"),
            Self::GenericString(message) => writeln!(f, "{message}")
        }
    }
}

impl Display for CmdErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Export(err) => write!(f, "{err}"),
            Self::Html(err) => write!(f, "{err}"),
            Self::Config(path, reason) => {
                write!(f, "could not load config file {}: {reason}", path.display())
            }
            Self::Logger(err) => write!(f, "{err}"),
            Self::GenericString(message) => write!(f, "{message}")
        }
    }
}

impl std::error::Error for CmdErrors {}

impl From<ExportErrors> for CmdErrors {
    fn from(err: ExportErrors) -> Self {
        CmdErrors::Export(err)
    }
}

impl From<HtmlErrors> for CmdErrors {
    fn from(err: HtmlErrors) -> Self {
        CmdErrors::Html(err)
    }
}

impl From<log::SetLoggerError> for CmdErrors {
    fn from(err: log::SetLoggerError) -> Self {
        CmdErrors::Logger(err)
    }
}
