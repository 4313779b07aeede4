//! Local content served over the `trellis://` custom protocol.
//!
//! The overlay page lives at `trellis://overlay/index.html`. A built-in copy
//! is always available; a user asset directory may override it.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Scheme of the custom protocol.
pub const PROTOCOL: &str = "trellis";

/// Where overlays load from.
pub const OVERLAY_URL: &str = "trellis://overlay/index.html";

/// Overlay page for `pane`.
pub fn overlay_url(pane: trellis_common::PaneId) -> String {
    format!("{OVERLAY_URL}?pane={}", pane.0)
}

const BUILTIN_OVERLAY: &str = include_str!("overlay.html");

/// Serves `trellis://` requests from memory and, optionally, a directory.
///
/// `trellis://overlay/index.html` resolves to `{base_dir}/overlay/index.html`
/// when that file exists, else to the in-memory page registered for it.
pub struct ContentProvider {
    base_dir: Option<PathBuf>,
    overrides: HashMap<String, (String, Vec<u8>)>,
}

impl ContentProvider {
    /// A provider serving only the built-in pages.
    pub fn builtin() -> Self {
        let mut provider = Self {
            base_dir: None,
            overrides: HashMap::new(),
        };
        provider.add_override("overlay/index.html", "text/html", BUILTIN_OVERLAY);
        provider
    }

    /// Serve files under `base_dir`, falling back to the built-in pages.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        let mut provider = Self::builtin();
        provider.base_dir = Some(base_dir.into());
        provider
    }

    pub fn add_override(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.overrides
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path (`host/path`) to its MIME type and bytes.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.trim_start_matches('/');
        let clean = clean.split(['?', '#']).next().unwrap_or_default();

        if let Some(found) = self.resolve_file(clean) {
            return Some(found);
        }
        self.overrides
            .get(clean)
            .map(|(mime, data)| (Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())))
    }

    fn resolve_file(&self, clean: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let base = self.base_dir.as_ref()?;
        let file_path = base.join(clean);

        // Canonicalize both sides so `..` and symlinks cannot escape the base.
        let canonical_base = std::fs::canonicalize(base).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        Some((
            Cow::Borrowed(mime_from_extension(&file_path)),
            Cow::Owned(data),
        ))
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }
}

/// Split a `trellis://host/path` URL into the provider path `host/path`.
pub fn request_path(uri: &str) -> Option<String> {
    let rest = uri.strip_prefix(PROTOCOL)?.strip_prefix("://")?;
    Some(rest.to_string())
}

fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_overlay_resolves() {
        let cp = ContentProvider::builtin();
        let (mime, data) = cp.resolve("overlay/index.html").unwrap();
        assert_eq!(mime.as_ref(), "text/html");
        let html = String::from_utf8_lossy(&data);
        assert!(html.contains("search_input"));
    }

    #[test]
    fn query_string_is_ignored() {
        let cp = ContentProvider::builtin();
        assert!(cp.resolve("/overlay/index.html?pane=3").is_some());
    }

    #[test]
    fn overlay_url_carries_pane() {
        assert_eq!(
            overlay_url(trellis_common::PaneId(4)),
            "trellis://overlay/index.html?pane=4"
        );
        assert_eq!(
            request_path("trellis://overlay/index.html?pane=4").as_deref(),
            Some("overlay/index.html?pane=4")
        );
        assert_eq!(request_path("https://overlay/"), None);
    }

    #[test]
    fn base_dir_overrides_builtin() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("overlay")).unwrap();
        std::fs::write(dir.path().join("overlay/index.html"), "<html>mine</html>").unwrap();
        std::fs::write(dir.path().join("overlay/app.css"), "body{}").unwrap();

        let cp = ContentProvider::with_base_dir(dir.path());
        let (_, data) = cp.resolve("overlay/index.html").unwrap();
        assert_eq!(data.as_ref(), b"<html>mine</html>");
        let (mime, _) = cp.resolve("overlay/app.css").unwrap();
        assert_eq!(mime.as_ref(), "text/css");
    }

    #[test]
    fn traversal_is_blocked() {
        let dir = tempfile::tempdir().unwrap();
        let cp = ContentProvider::with_base_dir(dir.path());
        assert!(cp.resolve("../../etc/passwd").is_none());
        assert!(cp.resolve("overlay/../../../etc/passwd").is_none());
    }

    #[test]
    fn missing_file_is_none() {
        let cp = ContentProvider::builtin();
        assert!(cp.resolve("overlay/nope.html").is_none());
    }

    #[test]
    fn mime_types() {
        assert_eq!(mime_from_extension(Path::new("a.html")), "text/html");
        assert_eq!(mime_from_extension(Path::new("a.mjs")), "application/javascript");
        assert_eq!(
            mime_from_extension(Path::new("a.xyz")),
            "application/octet-stream"
        );
    }
}
