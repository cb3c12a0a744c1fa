// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use showroom::cli;

#[test]
fn pay_defaults_to_cash() {
    let matches = cli::build_cli()
        .try_get_matches_from([
            "showroom", "pay", "s-1", "--remaining", "10000", "--amount", "500",
        ])
        .unwrap();
    if let Some(("pay", sub)) = matches.subcommand() {
        assert_eq!(sub.get_one::<String>("type").unwrap(), "CASH");
        assert_eq!(sub.get_one::<String>("note"), None);
    } else {
        panic!("no pay subcommand");
    }
}

#[test]
fn pay_rejects_unknown_type() {
    let res = cli::build_cli().try_get_matches_from([
        "showroom", "pay", "s-1", "--remaining", "1", "--amount", "1", "--type", "cheque",
    ]);
    assert!(res.is_err());
}

#[test]
fn featured_year_and_global_url() {
    let matches = cli::build_cli()
        .try_get_matches_from([
            "showroom", "--api-url", "http://x/api", "featured", "--year", "2024",
        ])
        .unwrap();
    assert_eq!(
        matches.get_one::<String>("api-url").map(String::as_str),
        Some("http://x/api")
    );
    if let Some(("featured", sub)) = matches.subcommand() {
        assert_eq!(sub.get_one::<i32>("year"), Some(&2024));
        assert!(!sub.get_flag("json"));
    } else {
        panic!("no featured subcommand");
    }
}
