/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! C source text for exported arrays
use alloc::format;
use alloc::string::String;
use core::fmt::Write;

use crate::array::ImageArray;
use crate::options::WordSize;

/// Title of the declaration block
pub const HEADER_TITLE: &str = "Put to images.h:\n";
/// Title of the definition block, separated from the declarations by a blank line
pub const SOURCE_TITLE: &str = "\nPut to images.cpp:\n";

/// `extern const uint16_t image_{name}[{count}];`
pub fn format_declaration(name: &str, word_size: WordSize, element_count: usize) -> String {
    format!("extern const {word_size} image_{name}[{element_count}];\n")
}

/// `const uint16_t image_{name}[{count}] = {0x..,0x..};` followed by a blank line
///
/// Every word is printed with two lowercase hex digits per byte,
/// so `0x01` in a 16 bit array is written `0x0001`.
pub fn format_definition(
    name: &str, word_size: WordSize, element_count: usize, words: &[u32]
) -> String {
    let digits = word_size.hex_digits();
    let capacity = 64 + name.len() + words.len() * (digits + 3);

    let mut out = String::with_capacity(capacity);

    // writing to a String cannot fail
    let _ = write!(out, "const {word_size} image_{name}[{element_count}] = {{");

    let mut out = words.iter().enumerate().fold(out, |mut out, (pos, word)| {
        if pos != 0 {
            out.push(',');
        }
        let _ = write!(out, "0x{word:0digits$x}");
        out
    });

    out.push_str("};\n\n");
    out
}

/// Render the full export text
///
/// All declarations come first, then all definitions, both in the order
/// of `images`.
pub fn render(images: &[ImageArray]) -> String {
    let declarations = images
        .iter()
        .fold(String::from(HEADER_TITLE), |mut out, image| {
            out.push_str(&image.declaration());
            out
        });

    images.iter().fold(declarations + SOURCE_TITLE, |mut out, image| {
        out.push_str(&image.definition());
        out
    })
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::options::ImageOptions;

    #[test]
    fn declaration_line() {
        assert_eq!(
            format_declaration("01d", WordSize::U16, 2048),
            "extern const uint16_t image_01d[2048];\n"
        );
    }

    #[test]
    fn definition_pads_to_word_width() {
        assert_eq!(
            format_definition("a", WordSize::U16, 3, &[0x0201, 0x1, 0xffff]),
            "const uint16_t image_a[3] = {0x0201,0x0001,0xffff};\n\n"
        );
        assert_eq!(
            format_definition("b", WordSize::U32, 1, &[0xab]),
            "const uint32_t image_b[1] = {0x000000ab};\n\n"
        );
        assert_eq!(
            format_definition("c", WordSize::U8, 2, &[0x0, 0xA]),
            "const uint8_t image_c[2] = {0x00,0x0a};\n\n"
        );
    }

    #[test]
    fn empty_render_keeps_titles() {
        assert_eq!(render(&[]), "Put to images.h:\n\nPut to images.cpp:\n");
    }

    #[test]
    fn render_keeps_image_order() {
        let options = ImageOptions::new(WordSize::U8, 1, 1);
        let images = vec![
            ImageArray::from_bytes("a", &[0x01], &options).unwrap(),
            ImageArray::from_bytes("b", &[0x02], &options).unwrap(),
        ];

        assert_eq!(
            render(&images),
            "Put to images.h:\n\
             extern const uint8_t image_a[1];\n\
             extern const uint8_t image_b[1];\n\
             \n\
             Put to images.cpp:\n\
             const uint8_t image_a[1] = {0x01};\n\
             \n\
             const uint8_t image_b[1] = {0x02};\n\
             \n"
        );
    }
}
