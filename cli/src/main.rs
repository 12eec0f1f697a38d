//! Command line entry point for `ostrich-token`.

use std::process;

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "warn";

fn main() {
    // stdout is reserved for the token, so diagnostics go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_LEVEL))
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
        )
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(err) = ostrich_token::run() {
        eprintln!("ERROR: {err}");

        let mut causes = err.chain().skip(1).peekable();
        if causes.peek().is_some() {
            eprintln!("\nError details:");
            for cause in causes {
                eprintln!("  - {cause}");
            }
        }

        process::exit(1);
    }
}
