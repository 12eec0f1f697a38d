//! # Configuration
//!
//! Command line arguments and the token configuration derived from them.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use ostrich_jose::{Claims, Header, Layout};
use serde::Serialize;
use serde_json::{Map, Value};

/// Generate an unsigned JWT for the `PUBLIC_OSTRICHDB_TOKEN` setting.
///
/// With no arguments the built-in test claims are used.
#[derive(Clone, Debug, Parser)]
#[command(name = "ostrich-token", version, about)]
pub struct Args {
    /// JSON file holding a claims object to use instead of the built-in claims.
    /// Member order is kept.
    #[arg(long, value_name = "PATH")]
    pub claims: Option<PathBuf>,

    /// JSON layout of the encoded header and claims: `spaced` or `compact`.
    #[arg(long, value_name = "LAYOUT", default_value_t = Layout::Spaced)]
    pub layout: Layout,
}

/// Claims carried by the generated token.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ClaimSet {
    /// The registered claims expected by the `OstrichDB` client.
    Standard(Claims),

    /// An arbitrary claims object, in file order.
    Custom(Map<String, Value>),
}

/// Everything needed to assemble one token.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenConfig {
    /// Token header.
    pub header: Header,

    /// Token claims.
    pub claims: ClaimSet,

    /// JSON layout for both segments.
    pub layout: Layout,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            header: Header::default(),
            claims: ClaimSet::Standard(Claims {
                sub: "user_2abcdef123456789".to_string(),
                iss: "http://oVault.com".to_string(),
                azp: "http://localhost:8042".to_string(),
                exp: 9_999_999_999,
                iat: 1_640_908_800,
                nbf: 1_640_908_800,
                jti: "jwt_123456789abcdef".to_string(),
            }),
            layout: Layout::Spaced,
        }
    }
}

impl TokenConfig {
    /// Build the configuration for the given command line arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if a claims file was given and cannot be read or does
    /// not contain a JSON object.
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut config = Self {
            layout: args.layout,
            ..Self::default()
        };
        if let Some(path) = &args.claims {
            config.claims = ClaimSet::Custom(load_claims(path)?);
        }
        Ok(config)
    }
}

fn load_claims(path: &Path) -> Result<Map<String, Value>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read claims file {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("claims file {} is not valid JSON", path.display()))?;
    let Value::Object(claims) = value else {
        bail!("claims file {} must contain a JSON object", path.display());
    };

    tracing::info!(path = %path.display(), count = claims.len(), "loaded claims");
    Ok(claims)
}
