// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commitlint - Conventional commit message gate

use clap::Parser;
use commitlint::cli::{run, Cli, EXIT_UNAVAILABLE};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging
    setup_logging(cli.debug);

    match run(cli) {
        Ok(status) => std::process::exit(status.exit_code()),
        Err(e) => {
            if e.is_source_unavailable() {
                eprintln!("Error: no commit message available: {}", e);
            } else {
                eprintln!("Error: {}", e);
            }
            std::process::exit(EXIT_UNAVAILABLE);
        }
    }
}

/// Set up logging/tracing on stderr.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("commitlint=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
