/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Settings of the `images` subcommand
//!
//! Settings come from three layers, each overriding the previous one:
//! built-in defaults, an optional JSON config file and command line flags.
use std::fs::read;
use std::path::{Path, PathBuf};

use kitchen_bmp::{ExportErrors, ExportOptions, ImageOptions, WordSize};
use log::debug;
use serde::Deserialize;

use crate::cmd_args::arg_parsers::IListingOrder;
use crate::errors::CmdErrors;

/// Partial image export settings, unset fields fall through to the next layer
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageSettings {
    pub input_dir:   Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub width:       Option<usize>,
    pub height:      Option<usize>,
    pub bits:        Option<u32>,
    pub order:       Option<IListingOrder>
}

impl ImageSettings {
    /// Layer `other` on top of `self`
    #[must_use]
    pub fn merge(self, other: ImageSettings) -> ImageSettings {
        ImageSettings {
            input_dir:   other.input_dir.or(self.input_dir),
            output_file: other.output_file.or(self.output_file),
            width:       other.width.or(self.width),
            height:      other.height.or(self.height),
            bits:        other.bits.or(self.bits),
            order:       other.order.or(self.order)
        }
    }

    /// Fill in defaults and validate the word size
    pub fn to_export_options(&self) -> Result<ExportOptions, ExportErrors> {
        let defaults = ExportOptions::default();
        let image_defaults = defaults.image();

        let word_size = match self.bits {
            Some(bits) => WordSize::try_from(bits)?,
            None => image_defaults.word_size()
        };
        let image = ImageOptions::new(
            word_size,
            self.width.unwrap_or(image_defaults.width()),
            self.height.unwrap_or(image_defaults.height())
        );
        let mut options = defaults.set_image(image);

        if let Some(dir) = &self.input_dir {
            options = options.set_input_dir(dir);
        }
        if let Some(file) = &self.output_file {
            options = options.set_output_file(file);
        }
        if let Some(order) = self.order {
            options = options.set_order(order.to_listing_order());
        }
        debug!("Export options: {:?}", options);

        Ok(options)
    }
}

pub fn parse_config(bytes: &[u8]) -> Result<ImageSettings, serde_json::Error> {
    serde_json::from_slice(bytes)
}

pub fn load_config(path: &Path) -> Result<ImageSettings, CmdErrors> {
    let contents =
        read(path).map_err(|err| CmdErrors::Config(path.to_path_buf(), err.to_string()))?;

    parse_config(&contents).map_err(|err| CmdErrors::Config(path.to_path_buf(), err.to_string()))
}
