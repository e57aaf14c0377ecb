// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command-line entry point.
//!
//! Invocation form: `blynkctl [TARGET...] ACTION`. The final token is the
//! action, everything before it is a target (device name, group name, or
//! the `all`/`a` alias).

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use blynkctl::action::Action;
use blynkctl::config::Config;
use blynkctl::engine::Engine;
use blynkctl::protocol::HttpConfig;
use blynkctl::registry::Registry;
use blynkctl::Result;

const HELP: &str = "Usage: blynkctl [TARGET(S)] ACTION

Control Blynk IoT devices through the pin-based HTTP API.

Targets are device names, group names, or `all` (short: `a`).
Devices, groups and auth tokens live in blynkctl.toml (override the
path with BLYNKCTL_CONFIG).

Actions (shortest unambiguous prefix accepted):
  on         Turn the device(s) on
  of(f)      Turn the device(s) off
  f(lip)     Flip the device(s)
  j(ust)     Turn the device(s) on and every other device in their groups off
  p(rint)    Print the status of the device(s) as a table
  s(tatus)   Print the status of the device(s) as JSON
  any number writes that value verbatim to the pin(s)";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((action_token, targets)) = args.split_last() else {
        println!("{HELP}");
        return ExitCode::SUCCESS;
    };
    if targets.is_empty() {
        println!("{HELP}");
        return ExitCode::SUCCESS;
    }

    match run(action_token, targets).await {
        Ok(Some(output)) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("blynkctl: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(action_token: &str, targets: &[String]) -> Result<Option<String>> {
    let action = Action::parse(action_token)?;
    let config = Config::load()?;
    let registry = Registry::from_config(&config)?;
    let client = HttpConfig::new(&config.server)
        .with_timeout(config.timeout())
        .into_client()?;

    let engine = Engine::new(&registry, &client);
    engine.execute(action, targets).await
}
