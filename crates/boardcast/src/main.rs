// SPDX-FileCopyrightText: 2026 Boardcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Boardcast - Slack unfurls for Azure DevOps work items.
//!
//! This is the binary entry point for the Boardcast webhook service.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};

mod serve;

/// Boardcast - Slack unfurls for Azure DevOps work items.
#[derive(Parser, Debug)]
#[command(name = "boardcast", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the webhook server.
    Serve,
    /// Print the resolved configuration (secrets redacted).
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let config = match boardcast_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            boardcast_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => {
            print_config(&config);
        }
        None => {
            println!("boardcast: use --help for available commands");
        }
    }
}

/// Print the resolved configuration with secrets redacted.
fn print_config(config: &boardcast_config::BoardcastConfig) {
    println!("[server]");
    println!("host = {:?}", config.server.host);
    println!("port = {}", config.server.port);
    println!("log_level = {:?}", config.server.log_level);
    println!();
    println!("[devops]");
    println!("server = {}", display_or_unset(config.devops.server.as_deref()));
    println!(
        "username = {}",
        display_or_unset(config.devops.username.as_deref())
    );
    println!("token = {}", redacted_or_unset(config.devops.token.as_deref()));
    println!();
    println!("[slack]");
    println!("token = {}", redacted_or_unset(config.slack.token.as_deref()));
}

fn display_or_unset(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("{v:?}"),
        None => "(unset)".to_string(),
    }
}

fn redacted_or_unset(value: Option<&str>) -> String {
    match value {
        Some(_) => "[REDACTED]".to_string(),
        None => "(unset)".to_string(),
    }
}
