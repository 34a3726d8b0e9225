use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use warung::application::session::Session;
use warung::config::StallConfig;
use warung::domain::menu::Menu;
use warung::domain::ports::Console;
use warung::error::StallError;
use warung::interfaces::terminal::TerminalConsole;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Preparation time per ordered portion, in milliseconds
    #[arg(long, default_value_t = 2000)]
    unit_delay_ms: u64,

    /// How long to wait for the kitchen before giving up, in milliseconds
    #[arg(long, default_value_t = 5000)]
    timeout_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays a clean conversation.
    // Override with RUST_LOG, e.g. RUST_LOG=warung=debug
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = StallConfig::new(
        Duration::from_millis(cli.unit_delay_ms),
        Duration::from_millis(cli.timeout_ms),
    );
    let mut console = TerminalConsole::new(io::stdin().lock(), io::stdout().lock());

    let result = Session::new(Menu::default(), config).run(&mut console).await;
    match result {
        Ok(report) => {
            tracing::info!(outcome = ?report.outcome, total = %report.summary.total, "order cycle finished");
        }
        Err(StallError::InputClosed) => {
            console.println("").into_diagnostic()?;
            tracing::warn!("input closed before the order cycle finished");
        }
        Err(e) => {
            tracing::error!(error = %e, "order cycle aborted");
        }
    }

    // Preparation tasks still running after a timeout are dropped with the runtime.
    console.println("Program finished!").into_diagnostic()?;
    Ok(())
}
