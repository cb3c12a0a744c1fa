// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::utils::pretty_table;
use anyhow::Result;
use std::path::Path;

pub fn handle(path: &Path, api_url: &str, m: &clap::ArgMatches) -> Result<()> {
    let mut cfg = Config::load_from(path)?;
    match m.subcommand() {
        Some(("set-url", sub)) => {
            let url = sub.get_one::<String>("url").unwrap().trim().trim_end_matches('/');
            cfg.api_url = Some(url.to_string());
            cfg.save_to(path)?;
            println!("API URL set to {}", url);
        }
        Some(("set-token", sub)) => {
            cfg.admin_token = Some(sub.get_one::<String>("token").unwrap().to_string());
            cfg.save_to(path)?;
            println!("Admin token saved");
        }
        _ => {
            let token = if cfg.admin_token.is_some() { "set" } else { "not set" };
            let rows = vec![
                vec!["Config file".to_string(), path.display().to_string()],
                vec!["API URL (effective)".to_string(), api_url.to_string()],
                vec![
                    "API URL (saved)".to_string(),
                    cfg.api_url.clone().unwrap_or_else(|| "-".into()),
                ],
                vec!["Admin token".to_string(), token.to_string()],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
    }
    Ok(())
}
