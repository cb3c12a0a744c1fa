// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::ListingSource;
use crate::components::FeaturedListingsView;
use crate::utils::maybe_print_json;
use anyhow::Result;
use chrono::{Datelike, Local};

pub fn handle(source: &dyn ListingSource, sub: &clap::ArgMatches) -> Result<()> {
    let year = sub
        .get_one::<i32>("year")
        .copied()
        .unwrap_or_else(|| Local::now().year());

    let mut view = FeaturedListingsView::new();
    view.mount(source, year);

    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &view.cars())? {
        return Ok(());
    }
    println!("{}", view.render());
    Ok(())
}
