//! Lookups in both directions.
//!
//! Every lookup is a linear scan of [`TABLE`] in declaration order, and the
//! first matching row wins. Comparison is exact and case-sensitive: `MP4`
//! does not match `.mp4`, and `text/*` is not a wildcard.
//!
//! ```rust
//! use mime_info::{extension_from_mime, find_entry_from_extension, mime_from_extension};
//!
//! // `.mp4` has three rows; the first is `video/mp4`.
//! assert_eq!(mime_from_extension(".mp4"), Some("video/mp4"));
//!
//! // Both directions resolve ties independently.
//! assert_eq!(extension_from_mime("text/xml"), Some(".xml"));
//! assert_eq!(find_entry_from_extension("xml").unwrap().mime(), "application/xml");
//! ```
use crate::error::{LookupKind, NotFound, Result};
use crate::{Entry, TABLE};

fn strip_dot(extension: &str) -> &str {
    extension.strip_prefix('.').unwrap_or(extension)
}

fn miss<T>(kind: LookupKind, key: &str) -> Option<T> {
    log::trace!("no table entry for {kind} {key:?}");
    None
}

/// Finds the first entry for a file extension.
///
/// A single leading `.` is optional, so `".mp4"` and `"mp4"` are equivalent.
/// Returns `None` if no row matches, including for `"."` and `""`.
///
/// ```rust
/// use mime_info::find_entry_from_extension;
///
/// assert_eq!(find_entry_from_extension(".mp4"), find_entry_from_extension("mp4"));
/// assert_eq!(find_entry_from_extension("MP4"), None);
/// assert_eq!(find_entry_from_extension("."), None);
/// ```
pub fn find_entry_from_extension(extension: &str) -> Option<&'static Entry> {
    let name = strip_dot(extension);
    TABLE
        .iter()
        .find(|entry| entry.extension_name() == name)
        .or_else(|| miss(LookupKind::Extension, extension))
}

/// Finds the first entry whose MIME type equals `mime` exactly.
///
/// ```rust
/// use mime_info::find_entry_from_mime;
///
/// assert_eq!(find_entry_from_mime("image/jpeg").unwrap().extension(), ".jpeg");
/// assert_eq!(find_entry_from_mime("image/*"), None);
/// ```
pub fn find_entry_from_mime(mime: &str) -> Option<&'static Entry> {
    TABLE
        .iter()
        .find(|entry| entry.mime() == mime)
        .or_else(|| miss(LookupKind::Mime, mime))
}

/// Returns the extension, with its leading `.`, of the first entry for `mime`.
pub fn extension_from_mime(mime: &str) -> Option<&'static str> {
    find_entry_from_mime(mime).map(Entry::extension)
}

/// Returns the MIME type of the first entry for `extension`.
///
/// No fallback is applied; map `None` to `application/octet-stream` yourself
/// if that is what you want.
pub fn mime_from_extension(extension: &str) -> Option<&'static str> {
    find_entry_from_extension(extension).map(Entry::mime)
}

/// Iterates over every entry for a file extension, in table order.
///
/// ```rust
/// use mime_info::entries_from_extension;
///
/// let mimes: Vec<_> = entries_from_extension("mid").map(|e| e.mime()).collect();
/// assert_eq!(mimes, ["audio/midi", "audio/x-midi"]);
/// ```
pub fn entries_from_extension(extension: &str) -> impl Iterator<Item = &'static Entry> + '_ {
    let name = strip_dot(extension);
    TABLE.iter().filter(move |entry| entry.extension_name() == name)
}

/// Iterates over every entry for a MIME type, in table order.
pub fn entries_from_mime(mime: &str) -> impl Iterator<Item = &'static Entry> + '_ {
    TABLE.iter().filter(move |entry| entry.mime() == mime)
}

/// Returns the MIME type for the extension of the last component of `path`.
///
/// Both `/` and `\` separate components. Names without an extension, such
/// as `README`, `.bashrc` or `archive.`, return `None`.
///
/// ```rust
/// use mime_info::mime_from_path;
///
/// assert_eq!(mime_from_path("static/app.min.js"), Some("text/javascript"));
/// assert_eq!(mime_from_path(r"C:\docs\report.pdf"), Some("application/pdf"));
/// assert_eq!(mime_from_path("home/.bashrc"), None);
/// ```
pub fn mime_from_path(path: &str) -> Option<&'static str> {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match file_name.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() && !extension.is_empty() => {
            mime_from_extension(extension)
        }
        _ => None,
    }
}

/// Like [`find_entry_from_extension`], but reports a miss as [`NotFound`].
pub fn require_entry_from_extension(extension: &str) -> Result<&'static Entry> {
    find_entry_from_extension(extension)
        .ok_or_else(|| NotFound::new(LookupKind::Extension, extension))
}

/// Like [`find_entry_from_mime`], but reports a miss as [`NotFound`].
pub fn require_entry_from_mime(mime: &str) -> Result<&'static Entry> {
    find_entry_from_mime(mime).ok_or_else(|| NotFound::new(LookupKind::Mime, mime))
}
