use mime_info::{
    entries_from_extension, entries_from_mime, extension_from_mime, find_entry_from_extension,
    find_entry_from_mime, get_table, mime_from_extension, mime_from_path,
    require_entry_from_extension, require_entry_from_mime, LookupKind, TABLE_LEN,
};

#[test]
fn test_table_count() {
    let table = get_table();
    assert_eq!(table.len(), 77);
    assert_eq!(table.len(), TABLE_LEN);

    // Repeated calls hand back the very same rows
    assert_eq!(get_table().as_ptr(), table.as_ptr());
    assert_eq!(table.first().unwrap().extension(), ".3g2");
    assert_eq!(table.last().unwrap().extension(), ".zip");
}

#[test]
fn test_leading_dot_is_optional() {
    for key in ["mp4", "pdf", "woff2", "7z", "xml"] {
        let dotted = format!(".{key}");
        assert_eq!(find_entry_from_extension(key), find_entry_from_extension(&dotted));
        assert!(find_entry_from_extension(key).is_some());
    }
}

#[test]
fn test_unknown_keys() {
    assert_eq!(find_entry_from_extension("doesnotexist"), None);
    assert_eq!(find_entry_from_mime("application/doesnotexist"), None);
    assert_eq!(mime_from_extension("."), None);
    assert_eq!(extension_from_mime(""), None);
}

#[test]
fn test_case_sensitive() {
    assert_eq!(find_entry_from_extension("MP4"), None);
    assert_eq!(find_entry_from_extension(".Pdf"), None);
    assert_eq!(find_entry_from_mime("Video/MP4"), None);
    assert_eq!(find_entry_from_mime("text/*"), None);
    assert_eq!(find_entry_from_mime("video/mp"), None);
}

#[test]
fn test_tie_breaks() {
    assert_eq!(mime_from_extension(".mp4"), Some("video/mp4"));
    assert_eq!(mime_from_extension("3g2"), Some("video/3gpp2"));
    assert_eq!(mime_from_extension("midi"), Some("audio/midi"));

    // The two directions can disagree
    assert_eq!(extension_from_mime("text/xml"), Some(".xml"));
    assert_eq!(find_entry_from_extension(".xml").unwrap().mime(), "application/xml");

    assert_eq!(extension_from_mime("text/html"), Some(".htm"));
    assert_eq!(extension_from_mime("image/jpeg"), Some(".jpeg"));
    assert_eq!(extension_from_mime("audio/x-midi"), Some(".mid"));
    assert_eq!(extension_from_mime("text/javascript"), Some(".js"));
}

#[test]
fn test_unambiguous_round_trip() {
    assert_eq!(mime_from_extension(".pdf"), Some("application/pdf"));
    assert_eq!(extension_from_mime("application/pdf"), Some(".pdf"));

    let epub = find_entry_from_mime("application/epub+zip").unwrap();
    assert_eq!(mime_from_extension(epub.extension()), Some(epub.mime()));
}

#[test]
fn test_all_candidates() {
    let mp4: Vec<_> = entries_from_extension(".mp4").map(|e| e.mime()).collect();
    assert_eq!(mp4, ["video/mp4", "audio/mp4", "application/mp4"]);

    let tiff: Vec<_> = entries_from_mime("image/tiff").map(|e| e.extension()).collect();
    assert_eq!(tiff, [".tif", ".tiff"]);

    assert_eq!(entries_from_extension("MP4").count(), 0);
}

#[test]
fn test_mime_from_path() {
    assert_eq!(mime_from_path("dir/movie.mp4"), Some("video/mp4"));
    assert_eq!(mime_from_path("index.html"), Some("text/html"));
    assert_eq!(mime_from_path(".bashrc"), None);
    assert_eq!(mime_from_path("Makefile"), None);
}

#[test]
fn test_require_reports_not_found() {
    let entry = require_entry_from_extension("png").unwrap();
    assert_eq!(entry.mime(), "image/png");

    let err = require_entry_from_extension("doesnotexist").unwrap_err();
    assert_eq!(err.kind(), LookupKind::Extension);
    assert_eq!(err.key(), "doesnotexist");
    assert_eq!(err.to_string(), "no table entry for extension `doesnotexist`");

    let err = require_entry_from_mime("application/doesnotexist").unwrap_err();
    assert_eq!(err.kind(), LookupKind::Mime);
    assert_eq!(
        err.to_string(),
        "no table entry for mime type `application/doesnotexist`"
    );
}

#[cfg(feature = "std")]
#[test]
fn test_not_found_into_io_error() {
    let err: std::io::Error = require_entry_from_mime("x/y").unwrap_err().into();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    assert!(err.to_string().contains("x/y"));
}

#[test]
fn test_entry_display() {
    let entry = find_entry_from_extension("zip").unwrap();
    assert_eq!(entry.to_string(), ".zip -> application/zip");
}

#[cfg(feature = "mime")]
#[test]
fn test_every_row_parses_as_mime() {
    for entry in get_table() {
        let mime = entry.to_mime().unwrap();
        assert_eq!(mime.essence_str(), entry.mime());
    }

    let docx = find_entry_from_extension("docx").unwrap().to_mime().unwrap();
    assert_eq!(docx.type_(), mime::APPLICATION);
}

#[cfg(feature = "http")]
#[test]
fn test_content_type_headers() {
    use http::HeaderValue;
    use mime_info::header::{content_type_for_extension, content_type_for_path};

    assert_eq!(
        content_type_for_extension("pdf"),
        Some(HeaderValue::from_static("application/pdf"))
    );
    assert_eq!(content_type_for_extension("nope"), None);
    assert_eq!(
        content_type_for_path("fonts/inter.woff2").unwrap(),
        "font/woff2"
    );

    let entry = find_entry_from_extension(".css").unwrap();
    let value: HeaderValue = entry.into();
    assert_eq!(value, entry.content_type());
    assert_eq!(value.to_str().unwrap(), "text/css");
}

#[cfg(feature = "serde")]
#[test]
fn test_serialize_entry() {
    let entry = find_entry_from_extension("json").unwrap();
    let json = serde_json::to_string(entry).unwrap();
    assert_eq!(json, r#"{"extension":".json","mime":"application/json"}"#);

    let table = serde_json::to_value(get_table()).unwrap();
    assert_eq!(table.as_array().unwrap().len(), TABLE_LEN);
}
