//! # Token Builder

use serde::Serialize;

use super::{FAKE_SIGNATURE, Header};
use crate::Result;
use crate::segment::{Layout, encode_segment_with};

/// Builds an unsigned compact token using provided options.
#[derive(Debug)]
pub struct TokenBuilder<C> {
    header: Header,
    layout: Layout,
    claims: C,
}

impl Default for TokenBuilder<NoClaims> {
    fn default() -> Self {
        Self::new()
    }
}

#[doc(hidden)]
/// Typestate generic for a token builder with no claims.
#[derive(Debug)]
pub struct NoClaims;
#[doc(hidden)]
/// Typestate generic for a token builder with claims.
#[derive(Debug)]
pub struct WithClaims<'a, T: Serialize + ?Sized>(&'a T);

impl TokenBuilder<NoClaims> {
    /// Create a new token builder with the default header and layout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            header: Header::default(),
            layout: Layout::default(),
            claims: NoClaims,
        }
    }

    /// The claims to carry in the second segment.
    ///
    /// Any value serializing to a JSON object may be used. Members are written
    /// in the order the value serializes them.
    pub fn claims<T: Serialize + ?Sized>(self, claims: &T) -> TokenBuilder<WithClaims<'_, T>> {
        TokenBuilder {
            header: self.header,
            layout: self.layout,
            claims: WithClaims(claims),
        }
    }
}

impl<C> TokenBuilder<C> {
    /// Replace the default header.
    #[must_use]
    pub fn header(mut self, header: Header) -> Self {
        self.header = header;
        self
    }

    /// The JSON layout used for both the header and the claims.
    #[must_use]
    pub const fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }
}

impl<T: Serialize + ?Sized> TokenBuilder<WithClaims<'_, T>> {
    /// Encode header and claims and append the placeholder signature.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Encoding`] if the header or claims cannot be
    /// serialized to JSON.
    pub fn build(&self) -> Result<String> {
        tracing::debug!(layout = %self.layout, "build");

        let header = encode_segment_with(&self.header, self.layout)?;
        let claims = encode_segment_with(self.claims.0, self.layout)?;

        Ok(format!("{header}.{claims}.{FAKE_SIGNATURE}"))
    }
}
