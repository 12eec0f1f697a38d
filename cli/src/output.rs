//! # Output
//!
//! Instructions printed alongside the generated token.

use std::fmt::Write as _;

/// Environment variable the `OstrichDB` client reads its token from.
pub const ENV_VAR: &str = "PUBLIC_OSTRICHDB_TOKEN";

/// Render the six lines printed for `token`.
///
/// The last line is ready to paste into a `.env` file.
#[must_use]
pub fn render(token: &str) -> String {
    let mut out = String::with_capacity(token.len() * 2 + 160);
    // writing to a String cannot fail
    let _ = writeln!(out, "Generated JWT Token:");
    let _ = writeln!(out, "{token}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Store this token as the value for {ENV_VAR} in your .env file");
    let _ = writeln!(out, "Or just copy this:");
    let _ = writeln!(out, "{ENV_VAR}={token}");
    out
}
