//! Image path handling
//!
//! Maps between files under the root folder and the URLs the gallery
//! page uses to fetch them, refusing anything that would escape the
//! root.

use std::path::{Component, Path, PathBuf};

/// Resolve a URL path from the image endpoint to a file under root.
///
/// Returns `None` for anything that must not be served: empty or
/// absolute paths, paths with non-plain components (`..`, `.`, drive
/// prefixes), symlink chains leaving the root, and targets that are
/// missing or not regular files. Callers turn `None` into a 404.
pub fn resolve_image_path(root: &Path, relative: &str) -> Option<PathBuf> {
    if relative.is_empty() {
        return None;
    }

    let requested = Path::new(relative);
    let plain = requested
        .components()
        .all(|component| matches!(component, Component::Normal(_)));
    if !plain {
        return None;
    }

    // Canonicalize both ends so symlinks cannot smuggle the path outside
    let resolved = root.join(requested).canonicalize().ok()?;
    let canonical_root = root.canonicalize().ok()?;
    if !resolved.starts_with(&canonical_root) {
        return None;
    }
    if !resolved.is_file() {
        return None;
    }

    Some(resolved)
}

/// Build the image endpoint URL for a matched file.
///
/// Each path segment is percent-encoded individually so separators
/// survive while spaces and friends do not.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use imgrid::logic::path::image_url;
///
/// let root = Path::new("/photos");
/// let file = Path::new("/photos/trip 1/img1.jpg");
/// assert_eq!(image_url(root, file).unwrap(), "/images/trip%201/img1.jpg");
/// ```
pub fn image_url(root: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?;
    let mut url = String::from("/images");
    for component in relative.components() {
        let segment = component.as_os_str().to_string_lossy();
        url.push('/');
        url.push_str(&urlencoding::encode(&segment));
    }
    Some(url)
}

/// Content-Type for a served file, from its extension.
///
/// Unknown extensions fall back to a generic binary type; the browser
/// still will not render those as images, which is fine.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("ico") => "image/x-icon",
        Some("avif") => "image/avif",
        Some("tif") | Some("tiff") => "image/tiff",
        _ => "application/octet-stream",
    }
}
