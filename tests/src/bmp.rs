/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use kitchen_bmp::{ImageArray, ImageOptions, WordSize};
use serde::Deserialize;

use crate::{check_failures, load_entries};

#[derive(Clone, Deserialize, Debug)]
pub struct BmpEntry {
    pub name:        String,
    pub bits:        u32,
    pub width:       usize,
    pub height:      usize,
    /// Number of header bytes in front of the payload
    pub header:      usize,
    #[serde(default)]
    pub header_byte: u8,
    pub payload:     Vec<u8>,
    pub expected:    String,
    pub comment:     Option<String>
}

impl BmpEntry {
    fn file_contents(&self) -> Vec<u8> {
        let mut contents = vec![self.header_byte; self.header];
        contents.extend_from_slice(&self.payload);
        contents
    }
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_bmp() {
    let entries: Vec<BmpEntry> = load_entries("bmp");
    let mut failures = Vec::new();

    for entry in &entries {
        let options = ImageOptions::new(
            WordSize::from_bits(entry.bits).unwrap(),
            entry.width,
            entry.height
        );
        let image = ImageArray::from_bytes("x", &entry.file_contents(), &options).unwrap();

        let definition = image.definition();
        let declaration = image.declaration();
        let count = entry.width * entry.height;

        if definition != format!("{}\n\n", entry.expected)
            || declaration != format!("extern const uint{}_t image_x[{}];\n", entry.bits, count)
        {
            let err = format!(
                "Output mismatch for case {}\nExpected {}\nbut found {}\nConfig:{:#?}",
                entry.name, entry.expected, definition, entry
            );
            eprintln!("{}\n", err);
            failures.push(entry.name.clone());
        }
    }
    check_failures(&failures);
}
