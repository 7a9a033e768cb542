// fontsync: Font Catalog Manifest Synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Scan | Manifest | Sync | Options | Inis | Version
//! ```

use std::process::ExitCode;

use fontsync::cli::global::GlobalOptions;
use fontsync::cli::{self, Command};
use fontsync::cmd::config::{run_inis_command, run_options_command};
use fontsync::cmd::manifest::run_manifest_command;
use fontsync::cmd::scan::run_scan_command;
use fontsync::cmd::sync::run_sync_command;
use fontsync::config::Config;
use fontsync::config::loader::ConfigLoader;
use fontsync::logging::init_logging;
use fontsync::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global).map(|config| run_options_command(&config))
        }
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            match loader {
                Ok(loader) => {
                    run_inis_command(&loader.format_inis());
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
        Some(Command::Scan(args)) => {
            load_config(&cli.global).and_then(|config| run_scan_command(args, &config))
        }
        Some(Command::Manifest(args)) => {
            load_config(&cli.global).and_then(|config| run_manifest_command(args, &config))
        }
        Some(Command::Sync(args)) => match load_config(&cli.global) {
            Ok(config) => run_sync_command(args, &config).await,
            Err(e) => Err(e),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> fontsync::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();

    if !global.no_default_inis {
        loader = loader.add_toml_file_optional("fontsync.toml");
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader = loader.with_env_prefix("FONTSYNC");

    for (key, value) in global.to_config_overrides() {
        loader = loader.set(&key, value)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> fontsync::error::Result<Config> {
    let loader = build_config_loader(global)?;
    loader.build().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}
