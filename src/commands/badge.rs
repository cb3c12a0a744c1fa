// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::components::{BadgeKind, StatusBadge};
use anyhow::Result;

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let label = sub.get_one::<String>("label").unwrap();
    let kind = sub
        .get_one::<String>("type")
        .map(|t| BadgeKind::from_type(t))
        .unwrap_or_default();
    println!("{}", StatusBadge::new(label.as_str(), kind));
    Ok(())
}
