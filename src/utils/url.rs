//! URL classification helpers.
//!
//! - Data URIs (`data:`) carry their payload inline
//! - External URLs (`http:`, `https:`, `//`) point outside the build tree
//! - Query detection and fragment splitting

/// Check for an ASCII case-insensitive prefix.
#[inline]
fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Check if a URL embeds its payload (`data:image/png;base64,...`).
///
/// # Examples
/// ```
/// use url_version::utils::url::is_data_uri;
/// assert!(is_data_uri("data:image/png;base64,AAAA"));
/// assert!(!is_data_uri("images/data.png"));
/// ```
#[inline]
pub fn is_data_uri(url: &str) -> bool {
    starts_with_ignore_case(url, "data:")
}

/// Check if a URL is absolute over HTTP(S) or protocol-relative.
///
/// # Examples
/// ```
/// use url_version::utils::url::is_external;
/// assert!(is_external("https://cdn.example.com/a.png"));
/// assert!(is_external("//cdn.example.com/a.png"));
/// assert!(!is_external("/media/diamonds.png"));
/// ```
#[inline]
pub fn is_external(url: &str) -> bool {
    url.starts_with("//")
        || starts_with_ignore_case(url, "http:")
        || starts_with_ignore_case(url, "https:")
}

/// Check if a URL already carries a query component.
#[inline]
pub fn has_query(url: &str) -> bool {
    url.contains('?')
}

/// Split a URL into path and fragment parts
///
/// # Returns
/// A tuple of (path, fragment) where fragment is empty string if no `#` found
#[inline]
pub fn split_path_fragment(url: &str) -> (&str, &str) {
    url.split_once('#').unwrap_or((url, ""))
}
