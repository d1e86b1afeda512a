//! Resolution of asset URLs against the stylesheet location.
//!
//! Pure functions, apart from reading the current directory to anchor
//! a relative source path.

use percent_encoding::percent_decode_str;
use std::path::{Component, Path, PathBuf};

use super::url::split_path_fragment;

/// Resolve an asset URL against the directory containing `from`.
///
/// The URL is treated as a path fragment appended to that directory:
/// a leading `/` does not escape it, the `#fragment` is dropped and
/// percent-escapes are decoded. The result is absolute and lexically
/// normalized, so `..` works even when intermediate directories are
/// missing.
///
/// # Example
/// ```ignore
/// let path = resolve_asset(Path::new("styles/app.css"), "../assets/bullet.jpg");
/// // -> <cwd>/assets/bullet.jpg
/// ```
pub fn resolve_asset(from: &Path, url: &str) -> PathBuf {
    let base = from.parent().unwrap_or(Path::new(""));
    let (path, _) = split_path_fragment(url);
    let decoded = percent_decode_str(path).decode_utf8_lossy();
    let joined = absolute(base).join(decoded.trim_start_matches('/'));
    normalize_lexically(&joined)
}

/// Anchor a relative path at the current directory.
fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
    }
}

/// Fold `.` and `..` components without touching the filesystem.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
