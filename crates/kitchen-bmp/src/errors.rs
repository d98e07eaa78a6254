/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};
#[cfg(feature = "std")]
use std::path::PathBuf;

/// Errors that can occur while exporting images
#[non_exhaustive]
pub enum ExportErrors {
    /// Word size is not one of 8, 16 or 32 bits
    InvalidWordSize(u32),
    /// The file holds fewer bytes than the pixel payload,
    /// expected at least a size but got another size
    TooSmallImage(usize, usize),
    /// Payload size calculation overflowed
    OverFlowOccurred,
    /// Generic message
    GenericStatic(&'static str),
    /// The input path exists but is not a directory
    #[cfg(feature = "std")]
    NotADirectory(PathBuf),
    #[cfg(feature = "std")]
    IoErrors(std::io::Error)
}

impl Debug for ExportErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidWordSize(bits) => {
                writeln!(
                    f,
                    "Export failed. Please change colorBits configuration to 8, 16 or 32. (found {bits})"
                )
            }
            Self::TooSmallImage(expected, found) => {
                writeln!(
                    f,
                    "Too small image, expected at least {expected} bytes but found {found}"
                )
            }
            Self::OverFlowOccurred => {
                writeln!(f, "Overflow occurred")
            }
            Self::GenericStatic(message) => {
                writeln!(f, "{message}")
            }
            #[cfg(feature = "std")]
            Self::NotADirectory(path) => {
                writeln!(f, "Path {path:?} is not a directory")
            }
            #[cfg(feature = "std")]
            Self::IoErrors(err) => {
                writeln!(f, "{err:?}")
            }
        }
    }
}

impl Display for ExportErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidWordSize(_) => {
                write!(
                    f,
                    "Export failed. Please change colorBits configuration to 8, 16 or 32."
                )
            }
            Self::TooSmallImage(expected, found) => {
                write!(f, "image needs {expected} payload bytes, file has {found}")
            }
            Self::OverFlowOccurred => write!(f, "overflow occurred"),
            Self::GenericStatic(message) => write!(f, "{message}"),
            #[cfg(feature = "std")]
            Self::NotADirectory(path) => write!(f, "{} is not a directory", path.display()),
            #[cfg(feature = "std")]
            Self::IoErrors(err) => write!(f, "{err}")
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ExportErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoErrors(err) => Some(err),
            _ => None
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for ExportErrors {
    fn from(value: std::io::Error) -> Self {
        ExportErrors::IoErrors(value)
    }
}
