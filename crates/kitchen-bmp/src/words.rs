/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use log::trace;

use crate::errors::ExportErrors;
use crate::options::WordSize;

/// Drop the header in front of the pixel payload
///
/// The header is whatever precedes the last `payload_len` bytes, its
/// contents are never looked at. A header of zero bytes is fine.
///
/// # Errors
/// [`ExportErrors::TooSmallImage`] if `raw` is shorter than `payload_len`
pub fn strip_header(raw: &[u8], payload_len: usize) -> Result<&[u8], ExportErrors> {
    let header_size = raw
        .len()
        .checked_sub(payload_len)
        .ok_or(ExportErrors::TooSmallImage(payload_len, raw.len()))?;

    trace!("Stripping {header_size} header bytes");

    Ok(&raw[header_size..])
}

/// Group the payload into words, reversing the bytes of each word
///
/// `[0x01, 0x02]` with [`WordSize::U16`] becomes `0x0201`.
/// Trailing bytes that do not fill a whole word are ignored.
pub fn pack_words(payload: &[u8], word_size: WordSize) -> Vec<u32> {
    payload
        .chunks_exact(word_size.bytes())
        .map(|chunk| {
            chunk
                .iter()
                .rev()
                .fold(0_u32, |word, byte| (word << 8) | u32::from(*byte))
        })
        .collect()
}
