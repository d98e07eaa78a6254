/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Array geometry and word width
use core::fmt::{Display, Formatter};

use crate::errors::ExportErrors;

/// Width of a single array element
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum WordSize {
    /// `uint8_t`, one byte per pixel
    U8,
    /// `uint16_t`, e.g RGB565
    #[default]
    U16,
    /// `uint32_t`
    U32
}

impl WordSize {
    /// Create a word size from a bit count
    ///
    /// Only 8, 16 and 32 are accepted, anything else is
    /// [`ExportErrors::InvalidWordSize`]
    pub fn from_bits(bits: u32) -> Result<WordSize, ExportErrors> {
        match bits {
            8 => Ok(WordSize::U8),
            16 => Ok(WordSize::U16),
            32 => Ok(WordSize::U32),
            _ => Err(ExportErrors::InvalidWordSize(bits))
        }
    }

    pub const fn bits(self) -> u32 {
        match self {
            WordSize::U8 => 8,
            WordSize::U16 => 16,
            WordSize::U32 => 32
        }
    }

    /// Number of payload bytes that make up one word
    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }

    /// Number of hex digits needed to print one word
    pub const fn hex_digits(self) -> usize {
        self.bytes() * 2
    }
}

impl TryFrom<u32> for WordSize {
    type Error = ExportErrors;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        WordSize::from_bits(value)
    }
}

impl Display for WordSize {
    /// The C type of an element, e.g `uint16_t`
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "uint{}_t", self.bits())
    }
}

/// Geometry of the images being exported
///
/// Every image in a run shares the same options, they are set up
/// once and never change.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ImageOptions {
    word_size: WordSize,
    width:     usize,
    height:    usize
}

impl Default for ImageOptions {
    /// 64x32 RGB565, the layout of the matrix panel
    fn default() -> Self {
        ImageOptions {
            word_size: WordSize::U16,
            width:     64,
            height:    32
        }
    }
}

impl ImageOptions {
    pub const fn new(word_size: WordSize, width: usize, height: usize) -> ImageOptions {
        ImageOptions {
            word_size,
            width,
            height
        }
    }

    pub const fn word_size(&self) -> WordSize {
        self.word_size
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub const fn set_word_size(mut self, word_size: WordSize) -> Self {
        self.word_size = word_size;
        self
    }

    #[must_use]
    pub const fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub const fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Number of elements in every emitted array, `width * height`
    pub fn pixel_count(&self) -> Result<usize, ExportErrors> {
        self.width
            .checked_mul(self.height)
            .ok_or(ExportErrors::OverFlowOccurred)
    }

    /// Number of trailing file bytes that hold pixels
    pub fn payload_len(&self) -> Result<usize, ExportErrors> {
        self.pixel_count()?
            .checked_mul(self.word_size.bytes())
            .ok_or(ExportErrors::OverFlowOccurred)
    }

    /// Check the options can describe a payload at all
    pub fn validate(&self) -> Result<(), ExportErrors> {
        self.payload_len().map(|_| ())
    }
}
