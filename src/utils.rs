// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

const UA: &str = concat!(
    "showroom/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/showroom)"
);

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

/// `RUST_LOG` wins; otherwise `warn`, or `debug` for this crate when verbose.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "warn,showroom=debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Rupee amount with Indian digit grouping, e.g. `₹5,00,000`.
pub fn fmt_inr(d: &Decimal) -> String {
    let rounded = d.round_dp(2).normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (text, None),
    };

    let grouped = if int_part.len() <= 3 {
        int_part
    } else {
        let (head, tail) = int_part.split_at(int_part.len() - 3);
        let mut parts: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            parts.push(&head[end - 2..end]);
            end -= 2;
        }
        parts.push(&head[..end]);
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    match frac {
        Some(f) => format!("{sign}₹{grouped}.{f}"),
        None => format!("{sign}₹{grouped}"),
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
