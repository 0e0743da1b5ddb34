use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use refcheck::error::ValidateError;
use refcheck::validation::Validator;

#[derive(Parser)]
#[command(
    name = "refcheck",
    about = "Validates schema references in OpenAPI description documents",
    version,
    long_about = None
)]
struct Cli {
    /// Path to the OpenAPI description document
    #[arg(default_value = "openapi.yml")]
    spec: PathBuf,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match Validator::new().validate(&cli.spec) {
        Ok(summary) => {
            println!("{summary}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ ValidateError::MissingSchemas { .. }) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("refcheck=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("refcheck=info"), // -v: info messages
        _ => EnvFilter::new("refcheck=debug"), // -vv or more: full debug
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
