/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Bitmap to embedded C array exporter
//!
//! This crate turns raw bitmap files into `uint8_t`, `uint16_t` or `uint32_t`
//! C arrays that can be pasted into a firmware tree.
//!
//! No bitmap metadata is parsed. The pixel payload is assumed to be the
//! trailing `width * height * word_bytes` bytes of the file, everything in
//! front of it is treated as header and dropped.
//!
//! Each word of the payload has its bytes reversed before being printed,
//! so a little endian RGB565 pixel stored as `[0x01, 0x02]` is emitted as `0x0201`.
//!
//! # Features
//! - `std` (default): filesystem exporter ([`export_images`], [`list_images`]).
//!   Without it the crate is `no_std` with `alloc` and only exposes the pure
//!   transform ([`strip_header`], [`pack_words`], [`render`], ...)
//!
//! # Example
//! ```
//! use kitchen_bmp::{ImageArray, ImageOptions, WordSize};
//!
//! let options = ImageOptions::new(WordSize::U8, 2, 1);
//! let image = ImageArray::from_bytes("x", &[0xAA, 0xAA, 0x12, 0x34], &options).unwrap();
//!
//! assert_eq!(image.definition(), "const uint8_t image_x[2] = {0x12,0x34};\n\n");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub use crate::array::{ImageArray, ImageRecord};
pub use crate::errors::ExportErrors;
#[cfg(feature = "std")]
pub use crate::exporter::{export_images, list_images, read_record, ExportOptions, ListingOrder};
pub use crate::format::{format_declaration, format_definition, render};
pub use crate::options::{ImageOptions, WordSize};
pub use crate::words::{pack_words, strip_header};

mod array;
mod errors;
#[cfg(feature = "std")]
mod exporter;
mod format;
mod options;
mod words;
