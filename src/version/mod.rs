//! URL versioning policy for cache busting.
//!
//! Appends `?{variable}={token}` to asset URLs so that browsers re-fetch
//! them when they change. The token is a short content hash of the
//! referenced file when it can be found next to the stylesheet, and a
//! millisecond timestamp otherwise.
//!
//! URLs are left untouched when they:
//! - are data URIs
//! - point to another host (`http:`, `https:`, `//`) and `skip_external` is on
//! - already carry a query string

mod token;

pub use token::VersionToken;

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::config::{ConfigError, VersionConfig};
use crate::utils::url::{has_query, is_data_uri, is_external};
use crate::visitor::UrlTransform;

/// Errors raised while computing a version token.
#[derive(Debug, Error)]
pub enum VersionError {
    #[error("failed to read `{}` for hashing", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Custom versioning function, replacing the default policy entirely.
pub type VersionFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Validated, immutable versioning policy.
///
/// # Example
///
/// ```ignore
/// let versioner = UrlVersioner::new(VersionConfig {
///     from: Some("styles/app.css".into()),
///     ..VersionConfig::default()
/// })?;
/// let url = versioner.version("../assets/bullet.jpg")?; // ../assets/bullet.jpg?v=1a2b3c
/// ```
#[derive(Clone)]
pub struct UrlVersioner {
    config: VersionConfig,
    version_fn: Option<VersionFn>,
}

impl UrlVersioner {
    /// Build a policy, rejecting configurations that would produce a
    /// malformed query string.
    pub fn new(config: VersionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            version_fn: None,
        })
    }

    /// Replace the default policy. Data URIs are still skipped.
    pub fn with_version_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.version_fn = Some(Arc::new(f));
        self
    }

    /// Compute the replacement for one URL token.
    ///
    /// Returns `Cow::Borrowed` when the URL is left as written.
    pub fn version<'a>(&self, url: &'a str) -> Result<Cow<'a, str>, VersionError> {
        if is_data_uri(url) {
            return Ok(Cow::Borrowed(url));
        }

        if let Some(version_fn) = &self.version_fn {
            let versioned = version_fn(url);
            return Ok(if versioned == url {
                Cow::Borrowed(url)
            } else {
                Cow::Owned(versioned)
            });
        }

        if self.config.skip_external && is_external(url) {
            return Ok(Cow::Borrowed(url));
        }

        if has_query(url) {
            return Ok(Cow::Borrowed(url));
        }

        let token = VersionToken::resolve(self.config.from.as_deref(), url)?;
        Ok(Cow::Owned(format!("{url}?{}={token}", self.config.variable)))
    }
}

impl UrlTransform for UrlVersioner {
    fn transform<'a>(&self, url: &'a str) -> Result<Cow<'a, str>, VersionError> {
        self.version(url)
    }
}

impl fmt::Debug for UrlVersioner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlVersioner")
            .field("config", &self.config)
            .field("version_fn", &self.version_fn.is_some())
            .finish()
    }
}
