use std::io::{self, BufWriter};
use std::process::ExitCode;

use tracing::{error, info};

use domain_blocklist::{run, CheckerOptions};

/// Sets up the tracing subscriber. Logs go to stderr so stdout only carries verdicts.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    setup_logging();

    // Optional JSON options file as the first argument
    let options = match std::env::args().nth(1) {
        Some(path) => match CheckerOptions::from_file(&path) {
            Ok(options) => options,
            Err(e) => {
                error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => CheckerOptions::default(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(stdin.lock(), BufWriter::new(stdout.lock()), &options) {
        Ok(summary) => {
            info!(
                queries = summary.queries,
                blocked = summary.blocked,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
