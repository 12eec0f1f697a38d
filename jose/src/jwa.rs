//! # JSON Web Algorithms (JWA)
//!
//! Algorithm identifiers as registered in the IANA "JSON Web Signature and
//! Encryption Algorithms" registry ([RFC7518]).
//!
//! The identifier is written into the token header as a label only. Tokens
//! produced by this crate are never signed, so no key material is associated
//! with an algorithm.
//!
//! [RFC7518]: https://www.rfc-editor.org/rfc/rfc7518

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Algorithm named in the `alg` header parameter.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum Algorithm {
    /// RSASSA-PKCS1-v1_5 using SHA-256.
    #[default]
    #[serde(rename = "RS256")]
    Rs256,

    /// ECDSA using secp256k1 curve and SHA-256.
    #[serde(rename = "ES256K")]
    Es256K,

    /// EdDSA signature algorithms.
    #[serde(rename = "EdDSA")]
    EdDsa,
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rs256 => write!(f, "RS256"),
            Self::Es256K => write!(f, "ES256K"),
            Self::EdDsa => write!(f, "EdDSA"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label() {
        assert_eq!(serde_json::to_string(&Algorithm::default()).unwrap(), r#""RS256""#);
        assert_eq!(serde_json::to_string(&Algorithm::Es256K).unwrap(), r#""ES256K""#);

        let alg: Algorithm = serde_json::from_str(r#""EdDSA""#).expect("should deserialize");
        assert_eq!(alg, Algorithm::EdDsa);
        assert_eq!(alg.to_string(), "EdDSA");
    }
}
