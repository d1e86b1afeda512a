//! lightningcss integration.
//!
//! [`UrlVisitor`] hooks into lightningcss' visitor mechanism and hands every
//! `url()` token to a [`UrlTransform`]. [`transform_css`] wraps the
//! parse → visit → print round for callers that just have a stylesheet.

use std::borrow::Cow;

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use lightningcss::values::url::Url;
use lightningcss::visit_types;
use lightningcss::visitor::{Visit, VisitTypes, Visitor};
use thiserror::Error;

use crate::version::VersionError;

/// Transform one URL token.
///
/// Implementations return `Cow::Borrowed` to leave the token as written.
/// Nothing may be assumed about traversal order beyond one token per call.
pub trait UrlTransform {
    fn transform<'a>(&self, url: &'a str) -> Result<Cow<'a, str>, VersionError>;
}

/// Errors from a full stylesheet transformation.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("failed to parse stylesheet: {0}")]
    Parse(String),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error("failed to print stylesheet: {0}")]
    Print(String),
}

/// Visitor rewriting `url()` values through a [`UrlTransform`].
pub struct UrlVisitor<'a, T: ?Sized> {
    transform: &'a T,
    rewritten: usize,
}

impl<'a, T: UrlTransform + ?Sized> UrlVisitor<'a, T> {
    pub fn new(transform: &'a T) -> Self {
        Self {
            transform,
            rewritten: 0,
        }
    }

    /// Number of URLs replaced so far.
    pub fn rewritten(&self) -> usize {
        self.rewritten
    }
}

impl<'i, T: UrlTransform + ?Sized> Visitor<'i> for UrlVisitor<'_, T> {
    type Error = VersionError;

    fn visit_types(&self) -> VisitTypes {
        visit_types!(URLS)
    }

    fn visit_url(&mut self, url: &mut Url<'i>) -> Result<(), Self::Error> {
        let versioned = match self.transform.transform(&url.url)? {
            Cow::Borrowed(_) => return Ok(()),
            Cow::Owned(versioned) => versioned,
        };
        url.url = versioned.into();
        self.rewritten += 1;
        Ok(())
    }
}

/// Output of [`transform_css`].
#[derive(Debug, Clone)]
pub struct Transformed {
    pub code: String,
    /// Number of `url()` tokens that were rewritten.
    pub rewritten: usize,
}

/// Parse `source`, rewrite its URLs and print it back.
///
/// `filename` is only used for parser diagnostics.
pub fn transform_css<T: UrlTransform + ?Sized>(
    source: &str,
    filename: &str,
    transform: &T,
) -> Result<Transformed, TransformError> {
    let options = ParserOptions {
        filename: filename.to_string(),
        ..ParserOptions::default()
    };
    let mut stylesheet =
        StyleSheet::parse(source, options).map_err(|e| TransformError::Parse(e.to_string()))?;

    let mut visitor = UrlVisitor::new(transform);
    stylesheet.visit(&mut visitor)?;

    let result = stylesheet
        .to_css(PrinterOptions::default())
        .map_err(|e| TransformError::Print(e.to_string()))?;

    Ok(Transformed {
        code: result.code,
        rewritten: visitor.rewritten(),
    })
}
