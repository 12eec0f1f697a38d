//! Reference fixtures for token tests.
//!
//! Values are the ones a local `OstrichDB` client is configured with, along
//! with the exact segments they encode to.

use serde_json::{Value, json};

pub const REFERENCE_HEADER_SEGMENT: &str = "eyJhbGciOiAiUlMyNTYiLCAidHlwIjogIkpXVCJ9";

pub const REFERENCE_CLAIMS_SEGMENT: &str = "eyJzdWIiOiAidXNlcl8yYWJjZGVmMTIzNDU2Nzg5IiwgImlzcyI6ICJodHRwOi8vb1ZhdWx0LmNvbSIsICJhenAiOiAiaHR0cDovL2xvY2FsaG9zdDo4MDQyIiwgImV4cCI6IDk5OTk5OTk5OTksICJpYXQiOiAxNjQwOTA4ODAwLCAibmJmIjogMTY0MDkwODgwMCwgImp0aSI6ICJqd3RfMTIzNDU2Nzg5YWJjZGVmIn0";

pub const REFERENCE_TOKEN: &str = concat!(
    "eyJhbGciOiAiUlMyNTYiLCAidHlwIjogIkpXVCJ9",
    ".",
    "eyJzdWIiOiAidXNlcl8yYWJjZGVmMTIzNDU2Nzg5IiwgImlzcyI6ICJodHRwOi8vb1ZhdWx0LmNvbSIsICJhenAiOiAiaHR0cDovL2xvY2FsaG9zdDo4MDQyIiwgImV4cCI6IDk5OTk5OTk5OTksICJpYXQiOiAxNjQwOTA4ODAwLCAibmJmIjogMTY0MDkwODgwMCwgImp0aSI6ICJqd3RfMTIzNDU2Nzg5YWJjZGVmIn0",
    ".fake_signature"
);

#[must_use]
pub fn reference_header() -> Value {
    json!({"alg": "RS256", "typ": "JWT"})
}

#[must_use]
pub fn reference_claims() -> Value {
    json!({
        "sub": "user_2abcdef123456789",
        "iss": "http://oVault.com",
        "azp": "http://localhost:8042",
        "exp": 9_999_999_999_i64,
        "iat": 1_640_908_800,
        "nbf": 1_640_908_800,
        "jti": "jwt_123456789abcdef"
    })
}

/// Checks `token` has the shape `<b64url>.<b64url>.fake_signature`.
#[must_use]
pub fn is_fake_token(token: &str) -> bool {
    let Some(rest) = token.strip_suffix(".fake_signature") else {
        return false;
    };
    let Some((header, claims)) = rest.split_once('.') else {
        return false;
    };
    is_base64url(header) && is_base64url(claims)
}

fn is_base64url(segment: &str) -> bool {
    !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_shape() {
        assert!(is_fake_token(REFERENCE_TOKEN));
        assert!(!is_fake_token("abc.def.signature"));
        assert!(!is_fake_token("abc.fake_signature"));
        assert!(!is_fake_token("ab=.def.fake_signature"));
        assert!(!is_fake_token("a/b.def.fake_signature"));
        assert!(!is_fake_token(".def.fake_signature"));
    }
}
