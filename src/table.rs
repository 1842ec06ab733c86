//! The static extension/MIME table.
//!
//! Rows are kept in declaration order. Several extensions and MIME types
//! appear on more than one row; lookups always resolve to the first one.
use crate::Entry;

/// Number of rows in [`TABLE`].
pub const TABLE_LEN: usize = 77;

/// Every known `(extension, mime)` pair, in lookup priority order.
pub static TABLE: [Entry; TABLE_LEN] = [
    Entry::new(".3g2", "video/3gpp2"),
    Entry::new(".3g2", "audio/3gpp2"),
    Entry::new(".3gp", "video/3gpp"),
    Entry::new(".3gp", "audio/3gpp"),
    Entry::new(".7z", "application/x-7z-compressed"),
    Entry::new(".aac", "audio/aac"),
    Entry::new(".abw", "application/x-abiword"),
    Entry::new(".arc", "application/x-freearc"),
    Entry::new(".avi", "video/x-msvideo"),
    Entry::new(".azw", "application/vnd.amazon.ebook"),
    Entry::new(".bin", "application/octet-stream"),
    Entry::new(".bmp", "image/bmp"),
    Entry::new(".bz", "application/x-bzip"),
    Entry::new(".bz2", "application/x-bzip2"),
    Entry::new(".csh", "application/x-csh"),
    Entry::new(".css", "text/css"),
    Entry::new(".csv", "text/csv"),
    Entry::new(".doc", "application/msword"),
    Entry::new(".docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
    Entry::new(".eot", "application/vnd.ms-fontobject"),
    Entry::new(".epub", "application/epub+zip"),
    Entry::new(".gif", "image/gif"),
    Entry::new(".htm", "text/html"),
    Entry::new(".html", "text/html"),
    Entry::new(".ico", "image/vnd.microsoft.icon"),
    Entry::new(".ics", "text/calendar"),
    Entry::new(".jar", "application/java-archive"),
    Entry::new(".jpeg", "image/jpeg"),
    Entry::new(".jpg", "image/jpeg"),
    Entry::new(".js", "text/javascript"),
    Entry::new(".json", "application/json"),
    Entry::new(".mid", "audio/midi"),
    Entry::new(".mid", "audio/x-midi"),
    Entry::new(".midi", "audio/midi"),
    Entry::new(".midi", "audio/x-midi"),
    Entry::new(".mjs", "text/javascript"),
    Entry::new(".mp3", "audio/mpeg"),
    Entry::new(".mp4", "video/mp4"),
    Entry::new(".mp4", "audio/mp4"),
    Entry::new(".mp4", "application/mp4"),
    Entry::new(".mpeg", "video/mpeg"),
    Entry::new(".mpkg", "application/vnd.apple.installer+xml"),
    Entry::new(".odp", "application/vnd.oasis.opendocument.presentation"),
    Entry::new(".ods", "application/vnd.oasis.opendocument.spreadsheet"),
    Entry::new(".odt", "application/vnd.oasis.opendocument.text"),
    Entry::new(".oga", "audio/ogg"),
    Entry::new(".ogv", "video/ogg"),
    Entry::new(".ogx", "application/ogg"),
    Entry::new(".otf", "font/otf"),
    Entry::new(".pdf", "application/pdf"),
    Entry::new(".png", "image/png"),
    Entry::new(".ppt", "application/vnd.ms-powerpoint"),
    Entry::new(".pptx", "application/vnd.openxmlformats-officedocument.presentationml.presentation"),
    Entry::new(".rar", "application/x-rar-compressed"),
    Entry::new(".rtf", "application/rtf"),
    Entry::new(".sh", "application/x-sh"),
    Entry::new(".svg", "image/svg+xml"),
    Entry::new(".swf", "application/x-shockwave-flash"),
    Entry::new(".tar", "application/x-tar"),
    Entry::new(".tif", "image/tiff"),
    Entry::new(".tiff", "image/tiff"),
    Entry::new(".ttf", "font/ttf"),
    Entry::new(".txt", "text/plain"),
    Entry::new(".vsd", "application/vnd.visio"),
    Entry::new(".wav", "audio/wav"),
    Entry::new(".weba", "audio/webm"),
    Entry::new(".webm", "video/webm"),
    Entry::new(".webp", "image/webp"),
    Entry::new(".woff", "font/woff"),
    Entry::new(".woff2", "font/woff2"),
    Entry::new(".xhtml", "application/xhtml+xml"),
    Entry::new(".xls", "application/vnd.ms-excel"),
    Entry::new(".xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
    Entry::new(".xml", "application/xml"),
    Entry::new(".xml", "text/xml"),
    Entry::new(".xul", "application/vnd.mozilla.xul+xml"),
    Entry::new(".zip", "application/zip"),
];

/// Returns the whole table in declaration order.
///
/// The slice length is the entry count. Every call returns the same slice.
///
/// ```rust
/// let table = mime_info::get_table();
/// assert_eq!(table.len(), mime_info::TABLE_LEN);
/// assert_eq!(table[0].extension(), ".3g2");
/// ```
pub fn get_table() -> &'static [Entry] {
    &TABLE
}
