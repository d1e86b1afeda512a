//! Cache-busting query strings for `url()` references in stylesheets.
//!
//! [`UrlVersioner`] decides the replacement for a single URL token;
//! [`UrlVisitor`] plugs it into lightningcss' visitor mechanism.
//!
//! ```ignore
//! use url_version::{UrlVersioner, VersionConfig, transform_css};
//!
//! let versioner = UrlVersioner::new(VersionConfig {
//!     from: Some("styles/app.css".into()),
//!     ..VersionConfig::default()
//! })?;
//! let out = transform_css(&source, "styles/app.css", &versioner)?;
//! ```

pub mod config;
pub mod logger;
pub mod utils;
pub mod version;
pub mod visitor;

pub use config::{ConfigError, VersionConfig};
pub use version::{UrlVersioner, VersionError, VersionFn, VersionToken};
pub use visitor::{TransformError, Transformed, UrlTransform, UrlVisitor, transform_css};
