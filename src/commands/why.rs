// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::components::why_choose_us;
use anyhow::Result;

pub fn handle() -> Result<()> {
    println!("{}", why_choose_us::render());
    Ok(())
}
