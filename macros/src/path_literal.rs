//! Extraction of raw template tokens from the `path = [...]` argument

use endpoint_builder_path::{Diagnostic, Diagnostics, PathError, RawToken};
use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{Expr, ExprArray, ExprLit, Lit};

/// Source location of a token: the tokens of the offending expression, so errors span all of it
pub type Location = TokenStream;

/// Extract the ordered template tokens.
///
/// A missing template is the root path. Accepted forms are `[..]` and `&[..]` with only string
/// literal elements; anything else (a `const`, a macro call, a non-string element) is reported at
/// the offending expression. Every non-string element gets its own diagnostic.
pub fn extract_tokens(
    template: Option<&Expr>,
) -> Result<Vec<RawToken<Location>>, Diagnostics<Location>> {
    let Some(template) = template else {
        return Ok(Vec::new());
    };

    let array = literal_array(template).ok_or_else(|| Diagnostics::from(unparsable(template)))?;

    let mut tokens = Vec::with_capacity(array.elems.len());
    let mut diagnostics = Vec::new();
    for element in &array.elems {
        match element {
            Expr::Lit(ExprLit {
                lit: Lit::Str(literal),
                ..
            }) => tokens.push(RawToken::new(literal.value(), literal.to_token_stream())),
            other => diagnostics.push(unparsable(other)),
        }
    }

    Diagnostics::from_vec(diagnostics).map_or(Ok(tokens), Err)
}

fn literal_array(template: &Expr) -> Option<&ExprArray> {
    match template {
        Expr::Array(array) => Some(array),
        Expr::Reference(reference) if reference.mutability.is_none() => {
            match reference.expr.as_ref() {
                Expr::Array(array) => Some(array),
                _ => None,
            }
        }
        Expr::Group(group) => literal_array(&group.expr),
        Expr::Paren(paren) => literal_array(&paren.expr),
        _ => None,
    }
}

fn unparsable(expr: &Expr) -> Diagnostic<Location> {
    Diagnostic::new(PathError::UnparsablePathLiteral, expr.to_token_stream())
}

#[cfg(test)]
#[allow(clippy::expect_used, reason = "test assertions")]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn texts(tokens: &[RawToken<Location>]) -> Vec<&str> { tokens.iter().map(RawToken::text).collect() }

    #[test]
    fn test_missing_template_is_empty() {
        let tokens = extract_tokens(None).expect("missing template is valid");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_array_literal() {
        let template: Expr = parse_quote!(["user", ":id"]);
        let tokens = extract_tokens(Some(&template)).expect("literal array");
        assert_eq!(texts(&tokens), vec!["user", ":id"]);
    }

    #[test]
    fn test_reference_to_array_literal() {
        let template: Expr = parse_quote!(&["users", ":user-id", "profile"]);
        let tokens = extract_tokens(Some(&template)).expect("literal array");
        assert_eq!(texts(&tokens), vec!["users", ":user-id", "profile"]);
    }

    #[test]
    fn test_empty_array_literal() {
        let template: Expr = parse_quote!([]);
        let tokens = extract_tokens(Some(&template)).expect("literal array");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_escapes_are_resolved() {
        let template: Expr = parse_quote!(["caf\u{e9}", r"raw\path"]);
        let tokens = extract_tokens(Some(&template)).expect("literal array");
        assert_eq!(texts(&tokens), vec!["café", "raw\\path"]);
    }

    fn locations(diagnostics: &Diagnostics<Location>) -> Vec<String> {
        diagnostics
            .iter()
            .map(|diagnostic| diagnostic.location().to_string())
            .collect()
    }

    #[test]
    fn test_reference_to_other_declaration_is_unparsable() {
        let template: Expr = parse_quote!(OtherEndpoint::PATH_TEMPLATE);
        let diagnostics = extract_tokens(Some(&template)).expect_err("not a literal");
        assert_eq!(diagnostics.len(), 1);
        let diagnostic = diagnostics.iter().next().expect("one diagnostic");
        assert_eq!(diagnostic.kind(), &PathError::UnparsablePathLiteral);
        assert_eq!(diagnostic.location().to_string(), template.to_token_stream().to_string());
    }

    #[test]
    fn test_non_string_element_is_unparsable() {
        let template: Expr = parse_quote!(["users", USER_SEGMENT]);
        let diagnostics = extract_tokens(Some(&template)).expect_err("not a string literal");
        assert!(
            diagnostics
                .iter()
                .all(|diagnostic| diagnostic.kind() == &PathError::UnparsablePathLiteral)
        );
        assert_eq!(locations(&diagnostics), vec!["USER_SEGMENT"]);
    }

    #[test]
    fn test_every_non_string_element_is_reported() {
        let template: Expr = parse_quote!(["users", USER_SEGMENT, "posts", 42, POST_SEGMENT]);
        let diagnostics = extract_tokens(Some(&template)).expect_err("not string literals");
        assert_eq!(locations(&diagnostics), vec!["USER_SEGMENT", "42", "POST_SEGMENT"]);
    }

    #[test]
    fn test_computed_expression_is_unparsable() {
        let template: Expr = parse_quote!(vec!["users"]);
        assert!(extract_tokens(Some(&template)).is_err());
    }
}
