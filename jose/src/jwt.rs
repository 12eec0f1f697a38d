//! # JSON Web Token (JWT)
//!
//! JSON Web Token (JWT) is a compact, URL-safe means of representing
//! claims to be transferred between two parties ([RFC7519]).
//!
//! Tokens assembled here have the compact three-segment shape of a signed JWT
//! but carry the literal [`FAKE_SIGNATURE`] in place of a signature. They are
//! only useful against systems that inspect the claims without verifying the
//! signature, such as a local `OstrichDB` client under test.
//!
//! [RFC7519]: https://www.rfc-editor.org/rfc/rfc7519

mod builder;

use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use self::builder::{NoClaims, TokenBuilder, WithClaims};
use crate::jwa::Algorithm;
use crate::segment::decode_segment;
use crate::{Error, Result};

/// Placeholder written as the third segment of every assembled token.
pub const FAKE_SIGNATURE: &str = "fake_signature";

/// JOSE header.
///
/// Members serialize in declaration order: `alg`, then `typ`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
    /// Algorithm identifier. A label only, the token is not signed.
    pub alg: Algorithm,

    /// Media type of the complete token.
    pub typ: String,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            alg: Algorithm::Rs256,
            typ: "JWT".to_string(),
        }
    }
}

/// Claims set accepted by the `OstrichDB` client.
///
/// Members serialize in declaration order. Timestamps are seconds since the
/// Unix epoch and are never checked against the clock.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the user the token is issued for.
    pub sub: String,

    /// Issuer URL.
    pub iss: String,

    /// Authorized party: the origin of the client the token was issued to.
    pub azp: String,

    /// Expiration time.
    pub exp: i64,

    /// Issued-at time.
    pub iat: i64,

    /// Not-before time.
    pub nbf: i64,

    /// Unique token identifier.
    pub jti: String,
}

/// A decoded token.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct Jwt<T> {
    /// The JWT header.
    pub header: Header,

    /// The JWT claims.
    pub claims: T,
}

/// Assemble `<header>.<claims>.fake_signature` using the default layout.
///
/// # Errors
///
/// Returns [`Error::Encoding`] if the claims cannot be serialized to JSON.
pub fn assemble_token<T>(header: &Header, claims: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    TokenBuilder::new().header(header.clone()).claims(claims).build()
}

/// Split a compact token and decode its header and claims.
///
/// The signature segment is not inspected.
///
/// # Errors
///
/// Returns [`Error::Format`] if the token does not have exactly three
/// segments and [`Error::Decoding`] if the header or claims cannot be decoded.
pub fn decode<T: DeserializeOwned>(token: &str) -> Result<Jwt<T>> {
    tracing::debug!("decode");

    let parts = token.split('.').collect::<Vec<&str>>();
    if parts.len() != 3 {
        return Err(Error::Format(format!("expected 3 segments, found {}", parts.len())));
    }

    Ok(Jwt {
        header: decode_segment(parts[0])?,
        claims: decode_segment(parts[1])?,
    })
}

impl<T: DeserializeOwned> FromStr for Jwt<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}
