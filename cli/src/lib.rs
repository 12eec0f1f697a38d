//! # `OstrichDB` Token Generator
//!
//! Prints an unsigned JWT, and the `.env` line to store it under, for local
//! testing of clients that read `PUBLIC_OSTRICHDB_TOKEN`. The `.env` file is
//! never written; the user copies the printed line.

mod config;
mod output;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use ostrich_jose::TokenBuilder;

pub use crate::config::{Args, ClaimSet, TokenConfig};
pub use crate::output::{ENV_VAR, render};

/// Assemble the token described by `config`.
///
/// # Errors
///
/// Returns an error if the header or claims cannot be encoded.
pub fn generate(config: &TokenConfig) -> Result<String> {
    let token = TokenBuilder::new()
        .header(config.header.clone())
        .layout(config.layout)
        .claims(&config.claims)
        .build()?;
    Ok(token)
}

/// Parse the process arguments and print the token with usage instructions.
///
/// # Errors
///
/// Returns an error if configuration fails, the token cannot be encoded, or
/// standard output cannot be written.
pub fn run() -> Result<()> {
    let args = Args::parse();
    run_with(&args, &mut io::stdout().lock())
}

/// Generate a token for `args` and write the instructions to `out`.
///
/// Nothing is written unless the token was generated.
///
/// # Errors
///
/// Returns an error if configuration fails, the token cannot be encoded, or
/// `out` cannot be written.
pub fn run_with(args: &Args, out: &mut impl Write) -> Result<()> {
    let config = TokenConfig::from_args(args)?;
    let token = generate(&config)?;
    tracing::debug!(len = token.len(), "generated token");

    out.write_all(render(&token).as_bytes())?;
    out.flush()?;
    Ok(())
}
