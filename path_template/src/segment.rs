//! Classification of raw template tokens into typed path segments
//!
//! Classification looks at one token at a time and never consults its neighbours:
//! - `":name"` is a [`PathSegment::Parameter`] named `name`
//! - `"*"` is a [`PathSegment::Wildcard`]
//! - `"**"` is a [`PathSegment::Catchall`]
//! - anything else is a [`PathSegment::Constant`]

use strum_macros::{AsRefStr, Display};

use crate::identifier::camel_case;

/// Prefix marking a token as a named parameter
pub const PARAMETER_PREFIX: char = ':';

/// Token matching exactly one arbitrary segment
pub const WILDCARD: &str = "*";

/// Token matching one or more trailing segments
pub const CATCHALL: &str = "**";

/// A template token as written in the declaration, together with where it was written.
///
/// `L` is whatever the host uses to point at source: a span for the attribute macro,
/// an index into the template for the runtime interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken<L> {
    text:     String,
    location: L,
}

impl<L> RawToken<L> {
    /// Creates a token from its text and location
    #[must_use]
    pub fn new(text: impl Into<String>, location: L) -> Self {
        Self {
            text: text.into(),
            location,
        }
    }

    /// The token text, unchanged
    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    /// Where the token was declared
    #[must_use]
    pub const fn location(&self) -> &L { &self.location }

    /// Classifies this token into a [`PathSegment`]
    #[must_use]
    pub fn classify(&self) -> PathSegment { PathSegment::classify(&self.text) }

    /// Splits the token into its text and location
    #[must_use]
    pub fn into_parts(self) -> (String, L) { (self.text, self.location) }
}

/// The kind of a [`PathSegment`], named the way diagnostics refer to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum SegmentKind {
    /// Literal text
    #[strum(serialize = "constant")]
    Constant,
    /// Named placeholder
    #[strum(serialize = "parameter")]
    Parameter,
    /// `*`
    #[strum(serialize = "anything")]
    Wildcard,
    /// `**`
    #[strum(serialize = "catchall")]
    Catchall,
}

/// A named parameter segment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    raw_name:   String,
    identifier: String,
}

impl Parameter {
    /// Creates a parameter from its raw name, deriving its identifier
    #[must_use]
    pub fn new(raw_name: impl Into<String>) -> Self {
        let raw_name = raw_name.into();
        let identifier = camel_case(&raw_name);
        Self {
            raw_name,
            identifier,
        }
    }

    /// The name as written after the `:` prefix, e.g. `team-id`
    #[must_use]
    pub fn raw_name(&self) -> &str { &self.raw_name }

    /// The canonical lower-camel identifier, e.g. `teamId`
    #[must_use]
    pub fn identifier(&self) -> &str { &self.identifier }
}

/// One slash-delimited unit of a path template
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Literal text rendered verbatim
    Constant(String),
    /// Placeholder bound to a caller-supplied string when rendering
    Parameter(Parameter),
    /// Matches exactly one arbitrary segment
    Wildcard,
    /// Matches one or more trailing segments
    Catchall,
}

impl PathSegment {
    /// Classifies a raw token (pure function)
    ///
    /// A bare `:` is a parameter with an empty name.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        if let Some(name) = text.strip_prefix(PARAMETER_PREFIX) {
            return Self::Parameter(Parameter::new(name));
        }

        match text {
            WILDCARD => Self::Wildcard,
            CATCHALL => Self::Catchall,
            _ => Self::Constant(text.to_string()),
        }
    }

    /// The kind of this segment
    #[must_use]
    pub const fn kind(&self) -> SegmentKind {
        match self {
            Self::Constant(_) => SegmentKind::Constant,
            Self::Parameter(_) => SegmentKind::Parameter,
            Self::Wildcard => SegmentKind::Wildcard,
            Self::Catchall => SegmentKind::Catchall,
        }
    }

    /// The parameter carried by this segment, if it is one
    #[must_use]
    pub const fn as_parameter(&self) -> Option<&Parameter> {
        match self {
            Self::Parameter(parameter) => Some(parameter),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, reason = "test assertions")]
mod tests {
    use super::*;

    #[test]
    fn test_classify_constant() {
        assert_eq!(
            PathSegment::classify("users"),
            PathSegment::Constant("users".to_string())
        );
    }

    #[test]
    fn test_classify_parameter() {
        let segment = PathSegment::classify(":team-id");
        let parameter = segment.as_parameter().expect("parameter segment");
        assert_eq!(parameter.raw_name(), "team-id");
        assert_eq!(parameter.identifier(), "teamId");
    }

    #[test]
    fn test_classify_wildcard_and_catchall() {
        assert_eq!(PathSegment::classify("*"), PathSegment::Wildcard);
        assert_eq!(PathSegment::classify("**"), PathSegment::Catchall);
    }

    #[test]
    fn test_classify_star_variants_are_constants() {
        assert_eq!(
            PathSegment::classify("***"),
            PathSegment::Constant("***".to_string())
        );
        assert_eq!(
            PathSegment::classify("*.json"),
            PathSegment::Constant("*.json".to_string())
        );
    }

    #[test]
    fn test_classify_bare_colon_is_empty_parameter() {
        let segment = PathSegment::classify(":");
        let parameter = segment.as_parameter().expect("parameter segment");
        assert_eq!(parameter.raw_name(), "");
        assert_eq!(parameter.identifier(), "");
    }

    #[test]
    fn test_classify_empty_token_is_constant() {
        assert_eq!(PathSegment::classify(""), PathSegment::Constant(String::new()));
    }

    #[test]
    fn test_classify_is_pure() {
        for text in ["users", ":id", "*", "**", ":", "", ":user_id"] {
            assert_eq!(PathSegment::classify(text), PathSegment::classify(text));
        }
    }

    #[test]
    fn test_segment_kind_names() {
        assert_eq!(SegmentKind::Wildcard.to_string(), "anything");
        assert_eq!(SegmentKind::Catchall.as_ref(), "catchall");
        assert_eq!(PathSegment::classify(":id").kind(), SegmentKind::Parameter);
    }

    #[test]
    fn test_raw_token_classify_uses_text() {
        let token = RawToken::new(":id", 3_usize);
        assert_eq!(token.classify().kind(), SegmentKind::Parameter);
        assert_eq!(*token.location(), 3);
    }
}
