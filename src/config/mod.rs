//! URL versioning configuration.
//!
//! All fields are optional and merged over the defaults.
//!
//! # Example
//!
//! ```toml
//! variable = "rev"
//! from = "styles/app.css"
//! skip_external = true
//! ```

mod error;
mod field;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "url-version.toml";

/// Characters that would break the injected `?name=token` pair.
const RESERVED_CHARS: &[char] = &['?', '&', '=', '#', '/'];

/// Field paths for diagnostics.
pub struct VersionConfigFields {
    pub variable: FieldPath,
    pub from: FieldPath,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VersionConfig {
    /// Query-parameter name to inject.
    pub variable: String,
    /// Path of the stylesheet being processed. Relative asset URLs are
    /// resolved against its directory.
    pub from: Option<PathBuf>,
    /// Leave `http:`, `https:` and `//` URLs untouched.
    pub skip_external: bool,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            variable: "v".into(),
            from: None,
            skip_external: true,
        }
    }
}

impl VersionConfig {
    pub const FIELDS: VersionConfigFields = VersionConfigFields {
        variable: FieldPath::new("variable"),
        from: FieldPath::new("from"),
    };

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(Self::parse_with_ignored(content)?.0)
    }

    /// Load configuration from file path, warning about unknown fields.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            crate::log!("warning"; "unknown fields in {}, ignoring: {}",
                path.display(), ignored.join(", "));
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Validate configuration.
    ///
    /// # Checks
    /// - `variable` must not be empty
    /// - `variable` must not contain whitespace, control characters or
    ///   any of `? & = # /`
    /// - `from`, if set, must not be empty or an existing directory
    pub fn validate(&self) -> Result<(), ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();
        self.validate_variable(&mut diag);
        self.validate_from(&mut diag);
        diag.into_result()
    }

    fn validate_variable(&self, diag: &mut ConfigDiagnostics) {
        let field = Self::FIELDS.variable;

        if self.variable.is_empty() {
            diag.error_with_hint(
                field,
                format!("{field} must not be empty"),
                "the default is `v`",
            );
            return;
        }

        if let Some(c) = self
            .variable
            .chars()
            .find(|c| c.is_whitespace() || c.is_control() || RESERVED_CHARS.contains(c))
        {
            diag.error_with_hint(
                field,
                format!("{field} contains invalid character {c:?}"),
                "use a plain query-parameter name such as `v` or `rev`",
            );
        }
    }

    fn validate_from(&self, diag: &mut ConfigDiagnostics) {
        let Some(from) = &self.from else {
            return;
        };
        let field = Self::FIELDS.from;

        if from.as_os_str().is_empty() {
            diag.error_with_hint(
                field,
                format!("{field} must not be empty"),
                format!("remove {field} or point it at the stylesheet"),
            );
        } else if from.is_dir() {
            diag.error_with_hint(
                field,
                format!("{field} is a directory: {}", from.display()),
                "assets resolve against the stylesheet's parent, so name the stylesheet file",
            );
        }
    }
}
