//! Content fingerprints using MD5.
//!
//! # Usage
//!
//! ```ignore
//! use crate::utils::hash;
//!
//! let fp = hash::fingerprint("hello"); // -> "5d4140"
//! ```

/// Number of hex characters kept from the digest.
pub const FINGERPRINT_LEN: usize = 6;

/// Compute the full MD5 digest as lowercase hex.
#[inline]
pub fn md5_hex<T: AsRef<[u8]> + ?Sized>(data: &T) -> String {
    format!("{:x}", md5::compute(data.as_ref()))
}

/// Compute MD5 and return the first 6 hex chars.
///
/// Short and stable enough for cache-busting query strings.
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(data: &T) -> String {
    let mut hex = md5_hex(data);
    hex.truncate(FINGERPRINT_LEN);
    hex
}
