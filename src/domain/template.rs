//! Template value type.
//!
//! Pure data — no I/O, no async, no filesystem access.

use std::borrow::Cow;

/// Raw template document, exactly as read from disk.
///
/// The provider consumes the body verbatim; the client never parses or
/// normalizes it. Validation is the provider's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template(Vec<u8>);

impl Template {
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Body as UTF-8 for the provider's string-typed API.
    ///
    /// Invalid sequences are replaced rather than rejected; a malformed
    /// document will fail provider-side validation with a real message.
    #[must_use]
    pub fn body(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl From<Vec<u8>> for Template {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}
