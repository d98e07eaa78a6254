/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Filesystem side of the exporter
//!
//! I/O happens in three places only: listing the input directory,
//! reading each image and writing the output file once all text is ready.
//! A failure anywhere leaves the output file untouched.
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, info, trace};

use crate::array::ImageRecord;
use crate::errors::ExportErrors;
use crate::format::render;
use crate::options::ImageOptions;

/// Order in which images are written
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum ListingOrder {
    /// Whatever the directory listing returns, unchanged.
    /// This is platform dependent.
    #[default]
    Native,
    /// Sorted by file name
    Sorted
}

/// Options for a full export run
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExportOptions {
    image:       ImageOptions,
    input_dir:   PathBuf,
    output_file: PathBuf,
    order:       ListingOrder
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            image:       ImageOptions::default(),
            input_dir:   PathBuf::from("images-bmp"),
            output_file: PathBuf::from("output.txt"),
            order:       ListingOrder::Native
        }
    }
}

impl ExportOptions {
    pub fn new(
        image: ImageOptions, input_dir: impl Into<PathBuf>, output_file: impl Into<PathBuf>
    ) -> ExportOptions {
        ExportOptions {
            image,
            input_dir: input_dir.into(),
            output_file: output_file.into(),
            order: ListingOrder::Native
        }
    }

    pub const fn image(&self) -> &ImageOptions {
        &self.image
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    pub const fn order(&self) -> ListingOrder {
        self.order
    }

    #[must_use]
    pub fn set_image(mut self, image: ImageOptions) -> Self {
        self.image = image;
        self
    }

    #[must_use]
    pub fn set_input_dir(mut self, input_dir: impl Into<PathBuf>) -> Self {
        self.input_dir = input_dir.into();
        self
    }

    #[must_use]
    pub fn set_output_file(mut self, output_file: impl Into<PathBuf>) -> Self {
        self.output_file = output_file.into();
        self
    }

    #[must_use]
    pub fn set_order(mut self, order: ListingOrder) -> Self {
        self.order = order;
        self
    }
}

/// List the image files of `dir`
///
/// Symlinks are followed, an entry that resolves to a file is listed.
/// Sub directories and other non-file entries are skipped.
pub fn list_images(dir: &Path, order: ListingOrder) -> Result<Vec<PathBuf>, ExportErrors> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportErrors::NotADirectory(dir.to_path_buf()));
    }
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !fs::metadata(&path)?.is_file() {
            debug!("Skipping {:?}, not a file", path);
            continue;
        }
        files.push(path);
    }
    if order == ListingOrder::Sorted {
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }
    Ok(files)
}

/// Read a file into a record named after the file stem
pub fn read_record(path: &Path) -> Result<ImageRecord, ExportErrors> {
    let name = path
        .file_stem()
        .ok_or(ExportErrors::GenericStatic("Image file has no name"))?
        .to_string_lossy()
        .into_owned();

    let bytes = fs::read(path)?;

    trace!("Read {} bytes from {:?}", bytes.len(), path);

    Ok(ImageRecord::new(name, bytes))
}

/// Export every image of the input directory to the output file
///
/// Returns the path that was written.
pub fn export_images(options: &ExportOptions) -> Result<PathBuf, ExportErrors> {
    options.image.validate()?;

    info!("Exporting images from {:?}", options.input_dir);

    let files = list_images(&options.input_dir, options.order)?;
    let mut images = Vec::with_capacity(files.len());

    for file in &files {
        let record = read_record(file)?;
        let name = record.name().to_owned();
        let raw_len = record.len();

        match record.into_array(&options.image) {
            Ok(image) => {
                debug!(
                    "Image {name}: {} header bytes, {} words",
                    raw_len - options.image.payload_len()?,
                    image.element_count()
                );
                images.push(image);
            }
            Err(err) => {
                error!("Could not export {:?}", file);
                return Err(err);
            }
        }
    }

    let text = render(&images);
    write_output(&options.output_file, &text)?;

    info!("Wrote {} images to {:?}", images.len(), options.output_file);

    Ok(options.output_file.clone())
}

fn write_output(path: &Path, text: &str) -> Result<(), ExportErrors> {
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;

    Ok(())
}
