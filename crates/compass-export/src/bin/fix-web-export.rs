use std::process::ExitCode;

use clap::Parser;
use compass_export::cli::Cli;
use compass_export::fix_export;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = cli.into_config().and_then(|config| fix_export(&config));
    match result {
        Ok(report) => {
            println!(
                "Fixed {} HTML files in {}",
                report.fixed_count(),
                report.dist_dir.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
