/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::String;
use alloc::vec::Vec;

use log::trace;

use crate::errors::ExportErrors;
use crate::format::{format_declaration, format_definition};
use crate::options::{ImageOptions, WordSize};
use crate::words::{pack_words, strip_header};

/// Raw contents of one image file
///
/// A record is consumed by [`ImageRecord::into_array`], the bytes are
/// not needed once the words have been packed.
pub struct ImageRecord {
    name:  String,
    bytes: Vec<u8>
}

impl ImageRecord {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> ImageRecord {
        ImageRecord {
            name: name.into(),
            bytes
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_array(self, options: &ImageOptions) -> Result<ImageArray, ExportErrors> {
        ImageArray::from_bytes(self.name, &self.bytes, options)
    }
}

/// An image ready to be printed as a C array
///
/// Holds exactly `width * height` words.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImageArray {
    name:      String,
    word_size: WordSize,
    words:     Vec<u32>
}

impl ImageArray {
    /// Strip the header from `raw` and pack the payload into words
    pub fn from_bytes(
        name: impl Into<String>, raw: &[u8], options: &ImageOptions
    ) -> Result<ImageArray, ExportErrors> {
        let name = name.into();
        let payload = strip_header(raw, options.payload_len()?)?;
        let words = pack_words(payload, options.word_size());

        trace!("Packed {} words for image {name}", words.len());

        Ok(ImageArray {
            name,
            word_size: options.word_size(),
            words
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn word_size(&self) -> WordSize {
        self.word_size
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }

    pub fn element_count(&self) -> usize {
        self.words.len()
    }

    pub fn declaration(&self) -> String {
        format_declaration(&self.name, self.word_size, self.element_count())
    }

    pub fn definition(&self) -> String {
        format_definition(
            &self.name,
            self.word_size,
            self.element_count(),
            &self.words
        )
    }
}
