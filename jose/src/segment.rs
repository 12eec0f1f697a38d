//! # Token Segments
//!
//! A compact token is made of dot-separated segments. The header and claims
//! segments are JSON texts encoded with the base64url alphabet and without
//! `=` padding ([RFC7515] section 2).
//!
//! The JSON text depends on the [`Layout`]. Key order is always the order in
//! which the value serializes its members: struct declaration order, or
//! insertion order for a `serde_json::Map`.
//!
//! [RFC7515]: https://www.rfc-editor.org/rfc/rfc7515

mod formatter;

use std::fmt::Display;
use std::str::FromStr;

use base64ct::{Base64UrlUnpadded, Encoding};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use self::formatter::SpacedFormatter;
use crate::{Error, Result};

/// JSON text layout used before a segment is base64url-encoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// `", "` between members and `": "` after keys, with every character
    /// outside printable ASCII written as a `\u` escape.
    ///
    /// This is the layout of tokens already stored in `PUBLIC_OSTRICHDB_TOKEN`
    /// values, so it is the default.
    #[default]
    Spaced,

    /// No insignificant whitespace, UTF-8 passed through unescaped.
    Compact,
}

impl Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spaced => write!(f, "spaced"),
            Self::Compact => write!(f, "compact"),
        }
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spaced" => Ok(Self::Spaced),
            "compact" => Ok(Self::Compact),
            _ => Err(format!("unknown layout '{s}', expected 'spaced' or 'compact'")),
        }
    }
}

/// Serialize `value` to JSON and base64url-encode the result without padding.
///
/// # Errors
///
/// Returns [`Error::Encoding`] when the value cannot be represented as JSON,
/// for example a map with non-string keys.
pub fn encode_segment<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    encode_segment_with(value, Layout::default())
}

/// Encode a segment using the given JSON [`Layout`].
///
/// # Errors
///
/// Returns [`Error::Encoding`] when the value cannot be represented as JSON.
pub fn encode_segment_with<T: Serialize + ?Sized>(value: &T, layout: Layout) -> Result<String> {
    let json = to_json(value, layout)?;
    Ok(Base64UrlUnpadded::encode_string(&json))
}

/// Serialize `value` to JSON text bytes in the given layout.
///
/// # Errors
///
/// Returns [`Error::Encoding`] when the value cannot be represented as JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, layout: Layout) -> Result<Vec<u8>> {
    match layout {
        Layout::Compact => Ok(serde_json::to_vec(value)?),
        Layout::Spaced => {
            let mut buf = Vec::with_capacity(128);
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
            value.serialize(&mut ser)?;
            Ok(buf)
        }
    }
}

/// Decode a base64url segment and deserialize the JSON it holds.
///
/// Trailing `=` padding is tolerated.
///
/// # Errors
///
/// Returns [`Error::Decoding`] if the segment is not valid base64url or does
/// not deserialize to `T`.
pub fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T> {
    let bytes = Base64UrlUnpadded::decode_vec(segment.trim_end_matches('='))
        .map_err(|e| Error::Decoding(format!("invalid base64url: {e}")))?;
    serde_json::from_slice(&bytes).map_err(|e| Error::Decoding(format!("invalid JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::{Map, Value, json};

    use super::*;

    #[test]
    fn empty_object() {
        let empty = Map::new();
        assert_eq!(encode_segment(&empty).unwrap(), "e30");
        assert_eq!(encode_segment_with(&empty, Layout::Compact).unwrap(), "e30");
    }

    #[test]
    fn header_bytes() {
        let header = json!({"alg": "RS256", "typ": "JWT"});
        assert_eq!(to_json(&header, Layout::Spaced).unwrap(), br#"{"alg": "RS256", "typ": "JWT"}"#);
        assert_eq!(encode_segment(&header).unwrap(), "eyJhbGciOiAiUlMyNTYiLCAidHlwIjogIkpXVCJ9");
        assert_eq!(
            encode_segment_with(&header, Layout::Compact).unwrap(),
            "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9"
        );
    }

    #[test]
    fn insertion_order() {
        let mut forward = Map::new();
        forward.insert("a".into(), json!(1));
        forward.insert("b".into(), json!(2));

        let mut reverse = Map::new();
        reverse.insert("b".into(), json!(2));
        reverse.insert("a".into(), json!(1));

        assert_eq!(to_json(&forward, Layout::Spaced).unwrap(), br#"{"a": 1, "b": 2}"#);
        assert_eq!(to_json(&reverse, Layout::Spaced).unwrap(), br#"{"b": 2, "a": 1}"#);
        assert_ne!(encode_segment(&forward).unwrap(), encode_segment(&reverse).unwrap());
    }

    #[test]
    fn nested_containers() {
        let value = json!({"a": [1, 2, {"b": null, "c": true}], "d": []});
        assert_eq!(
            to_json(&value, Layout::Spaced).unwrap(),
            br#"{"a": [1, 2, {"b": null, "c": true}], "d": []}"#
        );
        assert_eq!(
            encode_segment(&value).unwrap(),
            "eyJhIjogWzEsIDIsIHsiYiI6IG51bGwsICJjIjogdHJ1ZX1dLCAiZCI6IFtdfQ"
        );
    }

    #[test]
    fn non_ascii_escaped() {
        let value = json!({"n": "caf\u{e9} \u{1f600}\u{7f}\u{1f}"});
        assert_eq!(
            to_json(&value, Layout::Spaced).unwrap(),
            br#"{"n": "caf\u00e9 \ud83d\ude00\u007f\u001f"}"#
        );
        assert_eq!(
            encode_segment(&value).unwrap(),
            "eyJuIjogImNhZlx1MDBlOSBcdWQ4M2RcdWRlMDBcdTAwN2ZcdTAwMWYifQ"
        );

        // compact passes UTF-8 through
        let compact = to_json(&value, Layout::Compact).unwrap();
        assert!(String::from_utf8(compact).unwrap().contains('\u{1f600}'));
    }

    #[test]
    fn non_string_keys() {
        let value = BTreeMap::from([(vec![1_u8], 1)]);
        let Err(err) = encode_segment(&value) else {
            panic!("should not encode non-string keys");
        };
        assert!(matches!(err, Error::Encoding(_)));
    }

    #[test]
    fn decode() {
        let value: Value = decode_segment("eyJhbGciOiAiUlMyNTYiLCAidHlwIjogIkpXVCJ9").unwrap();
        assert_eq!(value, json!({"alg": "RS256", "typ": "JWT"}));

        let padded: Value = decode_segment("e30=").unwrap();
        assert_eq!(padded, json!({}));

        assert!(matches!(decode_segment::<Value>("not+base64"), Err(Error::Decoding(_))));
        // "e30" is "{}", which is not a string
        assert!(matches!(decode_segment::<String>("e30"), Err(Error::Decoding(_))));
    }

    #[test]
    fn layout_names() {
        assert_eq!("compact".parse::<Layout>().unwrap(), Layout::Compact);
        assert_eq!(Layout::default().to_string(), "spaced");
        assert!("pretty".parse::<Layout>().is_err());
    }
}
