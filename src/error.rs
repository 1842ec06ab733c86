//! Error types for lookups that miss.
//!
//! The plain lookup functions report a miss as `None`. Callers that prefer
//! `?` can use the `require_*` lookups, which return [`NotFound`] instead:
//!
//! ```rust
//! use mime_info::{require_entry_from_extension, LookupKind, NotFound};
//!
//! let err: NotFound = require_entry_from_extension("doesnotexist").unwrap_err();
//! assert_eq!(err.kind(), LookupKind::Extension);
//! assert_eq!(err.key(), "doesnotexist");
//! ```
use alloc::string::{String, ToString};
use core::fmt;

/// Which side of the table a lookup searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    /// Searched by file extension.
    Extension,
    /// Searched by MIME type.
    Mime,
}

impl LookupKind {
    /// Returns a short lowercase name for the kind, as used in messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            LookupKind::Extension => "extension",
            LookupKind::Mime => "mime type",
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// No table entry matched the lookup key.
///
/// This is an ordinary outcome, not a failure of the table. Picking a
/// fallback such as `application/octet-stream` is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    kind: LookupKind,
    key: String,
}

impl NotFound {
    pub(crate) fn new(kind: LookupKind, key: &str) -> Self {
        Self {
            kind,
            key: key.to_string(),
        }
    }

    /// Returns which side of the table was searched.
    pub const fn kind(&self) -> LookupKind {
        self.kind
    }

    /// Returns the key exactly as the caller passed it.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no table entry for {} `{}`", self.kind, self.key)
    }
}

impl core::error::Error for NotFound {}

#[cfg(feature = "std")]
impl From<NotFound> for std::io::Error {
    fn from(err: NotFound) -> Self {
        std::io::Error::new(std::io::ErrorKind::NotFound, err)
    }
}

/// A specialized Result type for lookups that report [`NotFound`].
pub type Result<T> = core::result::Result<T, NotFound>;
