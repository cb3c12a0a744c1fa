// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use showroom::{api::ApiClient, cli, commands, config, utils};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    utils::init_tracing(matches.get_flag("verbose"));

    let cfg_path = config::config_path()?;
    let cfg = config::Config::load_from(&cfg_path)?;
    let env_url = std::env::var(config::API_URL_ENV).ok();
    let api_url = cfg.resolve_api_url(
        matches.get_one::<String>("api-url").map(String::as_str),
        env_url.as_deref(),
    );

    match matches.subcommand() {
        Some(("featured", sub)) => {
            let client = ApiClient::new(&api_url, cfg.admin_token.clone())?;
            commands::featured::handle(&client, sub)?
        }
        Some(("pay", sub)) => {
            let client = ApiClient::new(&api_url, cfg.admin_token.clone())?;
            commands::pay::handle(&client, sub)?
        }
        Some(("badge", sub)) => commands::badge::handle(sub)?,
        Some(("why", _)) => commands::why::handle()?,
        Some(("config", sub)) => commands::config::handle(&cfg_path, &api_url, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
