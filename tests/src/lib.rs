/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::Path;

use serde::Deserialize;

mod bmp;
mod html;

/// Cases in `tests/<format>.json`
pub fn load_entries<T: for<'de> Deserialize<'de>>(format: &str) -> Vec<T> {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join(format!("tests/{format}.json"));

    let json_file = read(file).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

/// Report every failing case before panicking
pub fn check_failures<T: std::fmt::Debug>(failures: &[T]) {
    if !failures.is_empty() {
        panic!("Errors found during test export\n {:#?}", failures);
    }
}
