//! Opaque page cursors.
//!
//! A cursor is the URL-safe base64 encoding of a serialised [`PageRequest`].
//! Clients treat it as an opaque token and hand it back unchanged.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::PageRequest;

/// Errors raised while encoding or decoding a cursor.
#[derive(Debug, Error)]
pub enum CursorError {
    /// The token is not valid base64.
    #[error("cursor is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    /// The decoded bytes are not a page request.
    #[error("cursor payload is malformed: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Opaque continuation token for a listing.
///
/// # Examples
/// ```
/// use pagination::{Cursor, PageRequest};
///
/// let request = PageRequest::new(3, 20);
/// let cursor = Cursor::encode(&request).expect("encode cursor");
/// assert_eq!(cursor.decode().expect("decode cursor"), request);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Encode a page request into an opaque cursor.
    ///
    /// # Errors
    /// Returns [`CursorError::Payload`] if the request cannot be serialised.
    pub fn encode(request: &PageRequest) -> Result<Self, CursorError> {
        let bytes = serde_json::to_vec(request)?;
        Ok(Self(URL_SAFE_NO_PAD.encode(bytes)))
    }

    /// Wrap a token received from a client without validating it.
    #[must_use]
    pub fn from_token(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Decode the cursor back into the page request it represents.
    ///
    /// Sizes outside the permitted range are clamped, as deserialising any
    /// [`PageRequest`] does.
    ///
    /// # Errors
    /// Returns [`CursorError`] if the token is not a cursor produced by
    /// [`Cursor::encode`].
    pub fn decode(&self) -> Result<PageRequest, CursorError> {
        let bytes = URL_SAFE_NO_PAD.decode(self.0.as_bytes())?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// The raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
