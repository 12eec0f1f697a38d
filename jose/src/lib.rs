//! # Unsigned JOSE Tokens for `OstrichDB`
//!
//! This crate assembles tokens with the compact shape of a JSON Web Token
//! (three base64url segments separated by dots) for local testing of clients
//! that expect a `PUBLIC_OSTRICHDB_TOKEN` value. The third segment is the
//! literal [`FAKE_SIGNATURE`]; nothing is signed and nothing is verified.
//!
//! ```rust
//! use ostrich_jose::{Header, assemble_token};
//! use serde_json::json;
//!
//! let token = assemble_token(&Header::default(), &json!({"sub": "user"})).unwrap();
//! assert!(token.ends_with(".fake_signature"));
//! ```

mod error;
pub mod jwa;
pub mod jwt;
pub mod segment;

pub use crate::error::{Error, Result};
pub use crate::jwa::Algorithm;
pub use crate::jwt::{Claims, FAKE_SIGNATURE, Header, Jwt, TokenBuilder, assemble_token, decode};
pub use crate::segment::{Layout, decode_segment, encode_segment, encode_segment_with};
