//! webenum - basic HTTP reconnaissance.
//!
//! CLI entry point. Without arguments the interactive menu runs; any
//! argument selects one-shot mode.

use clap::Parser;
use colored::Colorize;
use std::io;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;
use webenum::{
    Config, ConsoleOutput, HttpConfig, Interactive, ProbeKind, ProbeResult, Prober,
};

#[tokio::main]
async fn main() -> ExitCode {
    if std::env::args_os().len() > 1 {
        let config = Config::parse();
        init_logging(config.verbose);

        if !config.is_json() {
            print_banner();
        }

        if let Err(code) = run_once(&config).await {
            return code;
        }
    } else {
        init_logging(false);
        print_banner();

        if let Err(code) = run_interactive().await {
            return code;
        }
    }

    ExitCode::SUCCESS
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("webenum=debug,warn")
    } else {
        EnvFilter::new("webenum=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

async fn run_once(config: &Config) -> Result<(), ExitCode> {
    let Some(probe) = config.probe() else {
        if let Err(e) = Config::write_usage(&mut io::stdout()) {
            error!("Failed to print help: {}", e);
        }
        return Ok(());
    };

    let prober = build_prober()?;
    let console = ConsoleOutput::new(config.is_json());
    console.print_info(&format!("Probing: {}", config.url));

    let result = match probe {
        ProbeKind::Headers => ProbeResult::from_outcome(prober.fetch_headers(&config.url).await),
        ProbeKind::Status => ProbeResult::from_outcome(prober.check_status(&config.url).await),
        ProbeKind::Params(params) => {
            ProbeResult::from_outcome(prober.test_parameters(&config.url, &params).await)
        }
    };

    if let Err(e) = console.print_result(&result) {
        error!("Failed to render result: {}", e);
        return Err(ExitCode::FAILURE);
    }

    Ok(())
}

async fn run_interactive() -> Result<(), ExitCode> {
    let prober = build_prober()?;
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Interactive::new(&prober, stdin.lock(), stdout.lock());
    if let Err(e) = session.run().await {
        error!("Interactive session failed: {}", e);
        return Err(ExitCode::FAILURE);
    }

    Ok(())
}

fn build_prober() -> Result<Prober, ExitCode> {
    Prober::new(HttpConfig::default()).map_err(|e| {
        error!("Failed to create HTTP client: {}", e);
        ExitCode::FAILURE
    })
}

fn print_banner() {
    println!();
    println!("{}", "╔══════════════════════════════════════════╗".bright_cyan());
    println!("{}", "║     Web Enumeration Tool v1.0            ║".bright_cyan());
    println!("{}", "║     For Ethical Security Research        ║".bright_cyan());
    println!("{}", "║     Use Responsibly!                     ║".bright_cyan());
    println!("{}", "╚══════════════════════════════════════════╝".bright_cyan());
    println!();
}
