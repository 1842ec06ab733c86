#![deny(unsafe_code)]
#![no_std]
#![warn(missing_docs, missing_debug_implementations)]
//! A static table of file extensions and MIME types, with lookups in both
//! directions.
//!
//! The table is compiled in, never changes, and keeps its declaration order.
//! Some keys appear on several rows (`.mp4` maps to three MIME types,
//! `text/html` comes from both `.htm` and `.html`), and every lookup returns
//! the first matching row. Matching is exact and case-sensitive.
//!
//! # Optional Features
//!
//! - `std` - `From<NotFound>` for `std::io::Error` (enabled by default)
//! - `mime` - [`Entry::to_mime`] via the `mime` crate (enabled by default)
//! - `http` - `Content-Type` header values via the `http` crate (enabled by default)
//! - `serde` - `Serialize` for [`Entry`]
//!
//! # Examples
//!
//! ```rust
//! use mime_info::{extension_from_mime, mime_from_extension};
//!
//! assert_eq!(mime_from_extension("pdf"), Some("application/pdf"));
//! assert_eq!(mime_from_extension(".pdf"), Some("application/pdf"));
//! assert_eq!(extension_from_mime("application/pdf"), Some(".pdf"));
//!
//! // Unknown keys are not an error; pick your own fallback.
//! let mime = mime_from_extension("doesnotexist").unwrap_or("application/octet-stream");
//! assert_eq!(mime, "application/octet-stream");
//! ```
//!
//! ## Propagating misses
//!
//! ```rust
//! use mime_info::{require_entry_from_mime, Result};
//!
//! fn extension_for(mime: &str) -> Result<&'static str> {
//!     Ok(require_entry_from_mime(mime)?.extension())
//! }
//!
//! assert_eq!(extension_for("font/woff2").unwrap(), ".woff2");
//! assert!(extension_for("application/doesnotexist").is_err());
//! ```
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod entry;
pub use entry::Entry;

pub mod error;
pub use error::{LookupKind, NotFound, Result};

mod table;
pub use table::{get_table, TABLE, TABLE_LEN};

mod lookup;
pub use lookup::{
    entries_from_extension, entries_from_mime, extension_from_mime, find_entry_from_extension,
    find_entry_from_mime, mime_from_extension, mime_from_path, require_entry_from_extension,
    require_entry_from_mime,
};

#[cfg(feature = "http")]
pub mod header;
