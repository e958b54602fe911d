use std::fmt;

use thiserror::Error;

use crate::segment::SegmentKind;

/// Why a path template was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The template is present but is not a literal sequence of string literals
    #[error("Could not parse `path`: expected an array of string literals")]
    UnparsablePathLiteral,

    /// A `*` or `**` token; only constants and parameters can be rendered
    #[error("`{0}` path components are not supported")]
    UnsupportedSegmentKind(SegmentKind),

    /// Two parameters derive the same identifier
    #[error("Path parameter `{identifier}` is declared more than once")]
    DuplicateParameter {
        /// The colliding identifier
        identifier: String,
    },
}

/// A [`PathError`] located at the token or expression that caused it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic<L> {
    kind:     PathError,
    location: L,
}

impl<L> Diagnostic<L> {
    /// Creates a diagnostic
    #[must_use]
    pub const fn new(kind: PathError, location: L) -> Self { Self { kind, location } }

    /// What went wrong
    #[must_use]
    pub const fn kind(&self) -> &PathError { &self.kind }

    /// Where it went wrong
    #[must_use]
    pub const fn location(&self) -> &L { &self.location }

    /// Splits the diagnostic into its kind and location
    #[must_use]
    pub fn into_parts(self) -> (PathError, L) { (self.kind, self.location) }
}

impl<L> fmt::Display for Diagnostic<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::Display::fmt(&self.kind, f) }
}

impl<L: fmt::Debug> std::error::Error for Diagnostic<L> {}

/// Every diagnostic reported for one declaration, in token order.
///
/// Never empty: a declaration either compiles or has at least one diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics<L>(Vec<Diagnostic<L>>);

impl<L> Diagnostics<L> {
    /// Wraps a non-empty list; returns `None` for an empty one
    #[must_use]
    pub fn from_vec(diagnostics: Vec<Diagnostic<L>>) -> Option<Self> {
        (!diagnostics.is_empty()).then_some(Self(diagnostics))
    }

    /// Number of diagnostics
    #[must_use]
    pub const fn len(&self) -> usize { self.0.len() }

    /// Always `false`; present for API symmetry with `len`
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Iterates over the diagnostics in token order
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic<L>> { self.0.iter() }
}

impl<L> From<Diagnostic<L>> for Diagnostics<L> {
    fn from(diagnostic: Diagnostic<L>) -> Self { Self(vec![diagnostic]) }
}

impl<L> IntoIterator for Diagnostics<L> {
    type IntoIter = std::vec::IntoIter<Diagnostic<L>>;
    type Item = Diagnostic<L>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a, L> IntoIterator for &'a Diagnostics<L> {
    type IntoIter = std::slice::Iter<'a, Diagnostic<L>>;
    type Item = &'a Diagnostic<L>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl<L> fmt::Display for Diagnostics<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, diagnostic) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            fmt::Display::fmt(diagnostic, f)?;
        }
        Ok(())
    }
}

impl<L: fmt::Debug> std::error::Error for Diagnostics<L> {}
