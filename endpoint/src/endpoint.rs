use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::authorization::{Authorization, HEADER_NAME};
use crate::error::Result;
use crate::method::HttpMethod;
use crate::template::PathTemplate;

/// Describes an API endpoint.
///
/// Usually implemented through `#[endpoint]`, which also generates the path parameter type and
/// the `path` rendering from the template.
pub trait Endpoint: Send + Sync {
    /// Request body content, [`Never`](crate::Never) when the endpoint takes none
    type Body: Serialize;

    /// Decoded response, [`Never`](crate::Never) when the endpoint returns none
    type Response: DeserializeOwned;

    /// Values substituted into the path template, `()` when there are none
    type PathParameters;

    /// The path template tokens, e.g. `["users", ":user-id"]`
    const PATH_TEMPLATE: &'static [&'static str];

    /// The HTTP method
    const METHOD: HttpMethod;

    /// The URL path, starting with `/`
    fn path(&self) -> String;

    /// Authorization to send along with the request
    fn authorization(&self) -> Option<&Authorization> { None }

    /// Request body content
    fn body(&self) -> Option<&Self::Body> { None }

    /// Name and value of the authorization header, if any
    fn authorization_header(&self) -> Option<(&'static str, String)> {
        self.authorization()
            .map(|authorization| (HEADER_NAME, authorization.header_value()))
    }

    /// [`Self::PATH_TEMPLATE`] as a runtime [`PathTemplate`]
    fn path_template() -> Result<PathTemplate>
    where
        Self: Sized,
    {
        PathTemplate::parse(Self::PATH_TEMPLATE)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, reason = "test assertions")]
mod tests {
    use super::*;
    use crate::Never;

    struct Health;

    impl Endpoint for Health {
        type Body = Never;
        type PathParameters = ();
        type Response = String;

        const METHOD: HttpMethod = HttpMethod::Get;
        const PATH_TEMPLATE: &'static [&'static str] = &["health"];

        fn path(&self) -> String { String::from("/health") }
    }

    struct Protected {
        authorization: Option<Authorization>,
    }

    impl Endpoint for Protected {
        type Body = Never;
        type PathParameters = ();
        type Response = Never;

        const METHOD: HttpMethod = HttpMethod::Delete;
        const PATH_TEMPLATE: &'static [&'static str] = &[];

        fn path(&self) -> String { String::from("/") }

        fn authorization(&self) -> Option<&Authorization> { self.authorization.as_ref() }
    }

    #[test]
    fn test_defaults() {
        assert!(Health.authorization().is_none());
        assert!(Health.body().is_none());
        assert!(Health.authorization_header().is_none());
    }

    #[test]
    fn test_path_template_matches_path() {
        let template = Health::path_template().expect("valid template");
        assert_eq!(template.render::<&str>(&[]).expect("no values needed"), Health.path());
    }

    #[test]
    fn test_authorization_header() {
        let endpoint = Protected {
            authorization: Some(Authorization::bearer("token")),
        };
        assert_eq!(
            endpoint.authorization_header(),
            Some(("Authorization", String::from("Bearer token")))
        );
    }
}
