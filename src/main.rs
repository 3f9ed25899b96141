use anyhow::{Context, Result};
use benchgate::{
    cli::Cli,
    gate,
    regression::{FileConfig, EXIT_ERROR},
};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_ERROR as u8)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => FileConfig::default(),
    };
    let config = args.to_run_config(&file_config);
    tracing::debug!("{:?}", config);

    let outcome = gate::run(&config)?;

    if let Some(report) = &outcome.report {
        println!("{}", report);
    }
    for line in &outcome.diagnostics {
        eprintln!("{}", line);
    }

    // 0 for pass and no-op verdicts, 1 for regressions
    Ok(ExitCode::from(outcome.exit_code() as u8))
}
