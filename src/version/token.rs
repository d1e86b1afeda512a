//! Version tokens: content hash or wall-clock timestamp.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use super::VersionError;
use crate::utils::{hash, path::resolve_asset};

/// Value substituted into the injected query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionToken {
    /// First 6 hex chars of the MD5 of the referenced file.
    Hash(String),
    /// Epoch milliseconds at the time of the call.
    Timestamp(u128),
}

impl VersionToken {
    /// Token from the current wall-clock time.
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        Self::Timestamp(millis)
    }

    /// Token from file content.
    pub fn from_file(path: &Path) -> Result<Self, VersionError> {
        let content = std::fs::read(path).map_err(|source| VersionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::Hash(hash::fingerprint(&content)))
    }

    /// Pick the token for `url` referenced from the stylesheet at `from`.
    ///
    /// Hashes the asset when it resolves to an existing regular file,
    /// otherwise falls back to a timestamp.
    pub fn resolve(from: Option<&Path>, url: &str) -> Result<Self, VersionError> {
        match from.and_then(|from| existing_file(from, url)) {
            Some(path) => {
                let token = Self::from_file(&path)?;
                crate::debug!("version"; "{} -> {} (hash of {})", url, token, path.display());
                Ok(token)
            }
            None => {
                let token = Self::now();
                crate::debug!("version"; "{} -> {} (timestamp)", url, token);
                Ok(token)
            }
        }
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hash(hex) => f.write_str(hex),
            Self::Timestamp(millis) => write!(f, "{millis}"),
        }
    }
}

fn existing_file(from: &Path, url: &str) -> Option<PathBuf> {
    let path = resolve_asset(from, url);
    path.is_file().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("bullet.jpg");
        fs::write(&file, "hello").unwrap();

        let v1 = VersionToken::from_file(&file).unwrap();
        assert_eq!(v1, VersionToken::Hash("5d4140".into()));

        // Same content = same version
        assert_eq!(VersionToken::from_file(&file).unwrap(), v1);

        // Different content = different version
        fs::write(&file, "hellp").unwrap();
        assert_ne!(VersionToken::from_file(&file).unwrap(), v1);
    }

    #[test]
    fn test_from_file_read_error() {
        let dir = TempDir::new().unwrap();
        let err = VersionToken::from_file(&dir.path().join("gone.png")).unwrap_err();
        assert!(matches!(err, VersionError::Read { .. }));
    }

    #[test]
    fn test_now_is_non_decreasing() {
        let VersionToken::Timestamp(a) = VersionToken::now() else {
            panic!("expected timestamp");
        };
        let VersionToken::Timestamp(b) = VersionToken::now() else {
            panic!("expected timestamp");
        };
        assert!(a > 0);
        assert!(b >= a);
    }

    #[test]
    fn test_resolve_without_source_uses_timestamp() {
        let token = VersionToken::resolve(None, "pdficon.jpg").unwrap();
        assert!(matches!(token, VersionToken::Timestamp(_)));
    }

    #[test]
    fn test_resolve_existing_file_uses_hash() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets/bullet.jpg"), "hello").unwrap();
        let from = dir.path().join("styles/app.css");

        let token = VersionToken::resolve(Some(&from), "../assets/bullet.jpg").unwrap();
        assert_eq!(token.to_string(), "5d4140");

        let token = VersionToken::resolve(Some(&from), "../assets/missing.jpg").unwrap();
        assert!(matches!(token, VersionToken::Timestamp(_)));
    }

    #[test]
    fn test_resolve_directory_uses_timestamp() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("app.css");
        let token = VersionToken::resolve(Some(&from), "#path").unwrap();
        assert!(matches!(token, VersionToken::Timestamp(_)));
    }
}
