// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

use crate::models::PaymentType;

pub fn build_cli() -> Command {
    Command::new("showroom")
        .version(clap::crate_version!())
        .about("Dealership featured listings, status badges, and admin payment recording")
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .global(true)
                .help("Backend base URL (overrides SHOWROOM_API_URL and config)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log requests to stderr"),
        )
        .subcommand(
            Command::new("featured")
                .about("Show featured cars from the last two model years")
                .arg(
                    Arg::new("year")
                        .long("year")
                        .value_parser(value_parser!(i32))
                        .help("Treat this as the current year"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("jsonl"),
                )
                .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("pay")
                .about("Record a payment against a sale")
                .arg(Arg::new("sale").required(true).help("Sale id"))
                .arg(
                    Arg::new("remaining")
                        .long("remaining")
                        .required(true)
                        .help("Remaining balance on the sale"),
                )
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(
                    Arg::new("type")
                        .long("type")
                        .default_value("CASH")
                        .value_parser(PaymentType::ALL.map(|t| t.as_str()))
                        .ignore_case(true),
                )
                .arg(Arg::new("note").long("note")),
        )
        .subcommand(
            Command::new("badge")
                .about("Render a status badge")
                .arg(Arg::new("label").required(true))
                .arg(
                    Arg::new("type")
                        .long("type")
                        .help("online, offline or pending (default)"),
                ),
        )
        .subcommand(Command::new("why").about("Show why customers choose us"))
        .subcommand(
            Command::new("config")
                .about("Show or change saved settings")
                .subcommand(Command::new("show"))
                .subcommand(Command::new("set-url").arg(Arg::new("url").required(true)))
                .subcommand(Command::new("set-token").arg(Arg::new("token").required(true))),
        )
}
