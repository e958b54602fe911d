//! Validation of classified segments
//!
//! `parse` classifies every token and rejects the segments that cannot be rendered.
//! All problems in one template are reported together, in token order; any problem
//! rejects the whole template.

use std::collections::HashSet;

use crate::error::{Diagnostic, Diagnostics, PathError};
use crate::segment::{Parameter, PathSegment, RawToken};

/// A validated template: only constant and parameter segments, in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentList<L> {
    segments: Vec<(PathSegment, L)>,
}

impl<L> SegmentList<L> {
    /// Number of segments
    #[must_use]
    pub const fn len(&self) -> usize { self.segments.len() }

    /// `true` for the root template `[]`
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.segments.is_empty() }

    /// Segments with their locations, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&PathSegment, &L)> {
        self.segments.iter().map(|(segment, location)| (segment, location))
    }

    /// The parameter segments with their locations, in declaration order
    pub fn parameters(&self) -> impl Iterator<Item = (&Parameter, &L)> {
        self.iter()
            .filter_map(|(segment, location)| segment.as_parameter().map(|p| (p, location)))
    }
}

/// Classifies and validates a template.
///
/// Rejected:
/// - `*` and `**` tokens, one `UnsupportedSegmentKind` per token
/// - parameters whose identifier repeats an earlier one, one `DuplicateParameter` per repeat
///
/// # Errors
///
/// Returns every diagnostic found if any token is rejected.
pub fn parse<L, I>(tokens: I) -> Result<SegmentList<L>, Diagnostics<L>>
where
    I: IntoIterator<Item = RawToken<L>>,
{
    let mut segments = Vec::new();
    let mut diagnostics = Vec::new();
    let mut identifiers = HashSet::new();

    for token in tokens {
        let segment = token.classify();
        let (_, location) = token.into_parts();

        match &segment {
            PathSegment::Wildcard | PathSegment::Catchall => {
                diagnostics.push(Diagnostic::new(
                    PathError::UnsupportedSegmentKind(segment.kind()),
                    location,
                ));
                continue;
            }
            PathSegment::Parameter(parameter) => {
                if !identifiers.insert(parameter.identifier().to_string()) {
                    diagnostics.push(Diagnostic::new(
                        PathError::DuplicateParameter {
                            identifier: parameter.identifier().to_string(),
                        },
                        location,
                    ));
                    continue;
                }
            }
            PathSegment::Constant(_) => {}
        }

        segments.push((segment, location));
    }

    match Diagnostics::from_vec(diagnostics) {
        Some(diagnostics) => Err(diagnostics),
        None => Ok(SegmentList { segments }),
    }
}
