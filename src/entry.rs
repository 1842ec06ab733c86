//! A single row of the MIME table.
use core::fmt;

/// One `(extension, mime)` pair from the table.
///
/// Entries only come from the crate's static table, so every `&'static Entry`
/// handed out by a lookup points into [`TABLE`](crate::TABLE).
///
/// # Examples
///
/// ```rust
/// use mime_info::find_entry_from_extension;
///
/// let entry = find_entry_from_extension("pdf").unwrap();
/// assert_eq!(entry.extension(), ".pdf");
/// assert_eq!(entry.extension_name(), "pdf");
/// assert_eq!(entry.mime(), "application/pdf");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry {
    extension: &'static str,
    mime: &'static str,
}

impl Entry {
    /// `extension` must start with `.`.
    pub(crate) const fn new(extension: &'static str, mime: &'static str) -> Self {
        Self { extension, mime }
    }

    /// Returns the extension including its leading `.`, e.g. `.mp4`.
    pub const fn extension(&self) -> &'static str {
        self.extension
    }

    /// Returns the extension without its leading `.`, e.g. `mp4`.
    pub fn extension_name(&self) -> &'static str {
        self.extension
            .strip_prefix('.')
            .unwrap_or(self.extension)
    }

    /// Returns the MIME type, e.g. `video/mp4`.
    pub const fn mime(&self) -> &'static str {
        self.mime
    }

    /// Parses the MIME type into a [`mime::Mime`].
    ///
    /// ```rust
    /// use mime_info::find_entry_from_extension;
    ///
    /// let mime = find_entry_from_extension("svg").unwrap().to_mime().unwrap();
    /// assert_eq!(mime.type_(), mime::IMAGE);
    /// assert_eq!(mime.subtype().as_str(), "svg");
    /// assert_eq!(mime.suffix(), Some(mime::XML));
    /// ```
    #[cfg(feature = "mime")]
    pub fn to_mime(&self) -> Result<mime::Mime, mime::FromStrError> {
        self.mime.parse()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.extension, self.mime)
    }
}
