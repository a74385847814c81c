// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Schriftwerk: interactive text transformation and document conversion.
//
// Entry point. Initialises logging, reads configuration from the environment,
// builds the grammar client and runs one interactive session on the terminal.

mod shell;

use std::process::ExitCode;

use schriftwerk_core::AppConfig;
use schriftwerk_core::human_errors::humanize_error;
use schriftwerk_transform::{Dispatcher, LanguageToolClient};

use shell::Shell;

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the prompts on stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::info!(?config, "Schriftwerk starting");

    let checker = match LanguageToolClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "grammar client could not be created");
            eprintln!("{}", humanize_error(&e).message);
            return ExitCode::FAILURE;
        }
    };

    let dispatcher = Dispatcher::new(&checker).with_paper_size(config.paper_size);
    let mut shell = Shell::new(std::io::stdin().lock(), std::io::stdout().lock(), dispatcher);

    match shell.run() {
        Ok(report) => {
            tracing::info!(?report, "session finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "terminal output failed");
            ExitCode::FAILURE
        }
    }
}
