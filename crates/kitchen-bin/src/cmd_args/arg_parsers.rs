/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::ValueEnum;
use kitchen_bmp::ListingOrder;
use serde::Deserialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IListingOrder {
    Native,
    Sorted
}

impl IListingOrder {
    pub const fn to_listing_order(self) -> ListingOrder {
        match self {
            IListingOrder::Native => ListingOrder::Native,
            IListingOrder::Sorted => ListingOrder::Sorted
        }
    }
}

impl ValueEnum for IListingOrder {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Native, Self::Sorted]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Native => PossibleValue::new("native"),
            Self::Sorted => PossibleValue::new("sorted")
        })
    }
}
