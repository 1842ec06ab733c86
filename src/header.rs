//! `Content-Type` header values built from table entries.
//!
//! Table strings are static, so these helpers build [`HeaderValue`]s without
//! copying or validating at runtime.
//!
//! ```rust
//! use mime_info::header::content_type_for_path;
//! use http::{header::CONTENT_TYPE, HeaderMap, HeaderValue};
//!
//! let mut headers = HeaderMap::new();
//! let value = content_type_for_path("assets/logo.svg")
//!     .unwrap_or(HeaderValue::from_static("application/octet-stream"));
//! headers.insert(CONTENT_TYPE, value);
//! assert_eq!(headers[CONTENT_TYPE], "image/svg+xml");
//! ```
use crate::{find_entry_from_extension, mime_from_path, Entry};
use http::HeaderValue;

impl Entry {
    /// Returns the MIME type as a `Content-Type` header value.
    pub const fn content_type(&self) -> HeaderValue {
        HeaderValue::from_static(self.mime())
    }
}

impl From<&Entry> for HeaderValue {
    fn from(entry: &Entry) -> Self {
        entry.content_type()
    }
}

/// Returns the `Content-Type` for a file extension, with or without its `.`.
pub fn content_type_for_extension(extension: &str) -> Option<HeaderValue> {
    find_entry_from_extension(extension).map(Entry::content_type)
}

/// Returns the `Content-Type` for the file named by the last component of `path`.
pub fn content_type_for_path(path: &str) -> Option<HeaderValue> {
    mime_from_path(path).map(HeaderValue::from_static)
}
