//! Runtime interpreter for path templates.
//!
//! `#[endpoint]` compiles templates into code. [`PathTemplate`] runs the same pipeline on
//! tokens only known at runtime, such as an endpoint's `PATH_TEMPLATE` or a configured route.

use std::fmt;

use endpoint_builder_path::{PathRenderSpec, RawToken, SEPARATOR};
use error_stack::Report;
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};

/// A validated path template
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathTemplate {
    tokens:     Vec<String>,
    parameters: Vec<String>,
    renderer:   PathRenderSpec,
}

impl PathTemplate {
    /// Validate a template.
    ///
    /// Every problem is reported, not just the first one. Diagnostic locations are token
    /// indices.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let tokens: Vec<String> = tokens.iter().map(|token| token.as_ref().to_string()).collect();
        let raw = tokens
            .iter()
            .enumerate()
            .map(|(index, token)| RawToken::new(token.as_str(), index));

        let segments = match endpoint_builder_path::parse(raw) {
            Ok(segments) => segments,
            Err(diagnostics) => {
                warn!(template = ?tokens, %diagnostics, "Rejected path template");
                let written = display_template(&tokens);
                let mut report = Report::new(diagnostics.clone())
                    .change_context(Error::InvalidTemplate(written));
                for diagnostic in &diagnostics {
                    report = report.attach(format!(
                        "token {}: {}",
                        diagnostic.location(),
                        diagnostic.kind()
                    ));
                }
                return Err(report);
            }
        };

        let artifacts = endpoint_builder_path::generate(&segments);
        let parameters = artifacts
            .container()
            .map(|container| {
                container
                    .fields()
                    .iter()
                    .map(|field| field.identifier().to_string())
                    .collect()
            })
            .unwrap_or_default();

        debug!(template = ?tokens, parameters = ?parameters, "Parsed path template");

        Ok(Self {
            tokens,
            parameters,
            renderer: artifacts.renderer().clone(),
        })
    }

    /// Parameter identifiers, in template order
    #[must_use]
    pub fn parameters(&self) -> &[String] { &self.parameters }

    /// The tokens as written
    #[must_use]
    pub fn template(&self) -> &[String] { &self.tokens }

    /// Render a path from positional parameter values
    pub fn render<S: AsRef<str>>(&self, values: &[S]) -> Result<String> {
        if values.len() != self.parameters.len() {
            return Err(Report::new(Error::ParameterCountMismatch {
                expected: self.parameters.len(),
                actual:   values.len(),
            })
            .attach(format!("parameters: [{}]", self.parameters.join(", "))));
        }

        let path = self.renderer.render(|field| values[field].as_ref());
        trace!(%path, "Rendered path");
        Ok(path)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display_template(&self.tokens))
    }
}

fn display_template(tokens: &[String]) -> String { format!("{SEPARATOR}{}", tokens.join(SEPARATOR)) }

#[cfg(test)]
#[allow(clippy::expect_used, reason = "test assertions")]
mod tests {
    use endpoint_builder_path::{Diagnostics, PathError, SegmentKind};

    use super::*;

    #[test]
    fn test_empty_template_renders_root() {
        let template = PathTemplate::parse::<&str>(&[]).expect("empty template is valid");
        assert!(template.parameters().is_empty());
        assert_eq!(template.render::<&str>(&[]).expect("no values needed"), "/");
        assert_eq!(template.to_string(), "/");
    }

    #[test]
    fn test_constant_template() {
        let template = PathTemplate::parse(&["example"]).expect("valid template");
        assert_eq!(template.render::<&str>(&[]).expect("no values needed"), "/example");
    }

    #[test]
    fn test_parameters_in_order() {
        let template =
            PathTemplate::parse(&["team", ":team-id", "user", ":user-id"]).expect("valid template");
        assert_eq!(template.parameters(), ["teamId", "userId"]);
        assert_eq!(template.template(), ["team", ":team-id", "user", ":user-id"]);
        assert_eq!(template.to_string(), "/team/:team-id/user/:user-id");
        assert_eq!(template.render(&["t1", "u1"]).expect("two values"), "/team/t1/user/u1");
    }

    #[test]
    fn test_render_owned_values() {
        let template = PathTemplate::parse(&["users", ":user-id", "profile"]).expect("valid");
        let values = vec![String::from("my-user-id")];
        assert_eq!(template.render(&values).expect("one value"), "/users/my-user-id/profile");
    }

    #[test]
    fn test_render_reads_values_each_time() {
        let template = PathTemplate::parse(&[":id"]).expect("valid template");
        assert_eq!(template.render(&["a"]).expect("one value"), "/a");
        assert_eq!(template.render(&["b"]).expect("one value"), "/b");
    }

    #[test]
    fn test_value_count_mismatch() {
        let template = PathTemplate::parse(&["users", ":user-id"]).expect("valid template");
        let report = template.render::<&str>(&[]).expect_err("missing value");
        assert_eq!(
            report.current_context(),
            &Error::ParameterCountMismatch {
                expected: 1,
                actual:   0,
            }
        );
    }

    #[test]
    fn test_wildcard_is_rejected() {
        let report = PathTemplate::parse(&["files", "*"]).expect_err("wildcard");
        assert_eq!(
            report.current_context(),
            &Error::InvalidTemplate(String::from("/files/*"))
        );

        let diagnostics = report
            .downcast_ref::<Diagnostics<usize>>()
            .expect("diagnostics are kept in the report");
        assert_eq!(diagnostics.len(), 1);
        let diagnostic = diagnostics.iter().next().expect("one diagnostic");
        assert_eq!(
            diagnostic.kind(),
            &PathError::UnsupportedSegmentKind(SegmentKind::Wildcard)
        );
        assert_eq!(diagnostic.location(), &1);
    }

    #[test]
    fn test_every_problem_is_reported() {
        let report = PathTemplate::parse(&["*", ":id", "**", ":id"]).expect_err("invalid");
        let diagnostics = report
            .downcast_ref::<Diagnostics<usize>>()
            .expect("diagnostics are kept in the report");
        let locations: Vec<usize> = diagnostics.iter().map(|d| *d.location()).collect();
        assert_eq!(locations, vec![0, 2, 3]);
    }
}
