//! `#[endpoint(...)]` argument parsing

use proc_macro2::{Span, TokenStream};
use syn::meta::ParseNestedMeta;
use syn::parse::Parser;
use syn::{Expr, Ident, Path, Type};

/// Arguments of the `#[endpoint]` attribute
#[derive(Default)]
pub struct EndpointArgs {
    /// Raw `path = ...` expression; absent means the root path
    pub path:     Option<Expr>,
    /// `method = Get`, a variant of `HttpMethod`
    pub method:   Option<Ident>,
    /// `response = Type`
    pub response: Option<Type>,
    /// `body = Type`
    pub body:     Option<Type>,
    /// `crate = ::path::to::endpoint_builder`
    pub krate:    Option<Path>,
}

impl EndpointArgs {
    /// Parse attribute arguments
    pub fn parse(attr: TokenStream) -> syn::Result<Self> {
        let mut args = Self::default();
        let parser = syn::meta::parser(|meta| args.parse_one(&meta));
        parser.parse2(attr)?;
        Ok(args)
    }

    fn parse_one(&mut self, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("path") {
            let value: Expr = meta.value()?.parse()?;
            set_once(meta, &mut self.path, value, "path")
        } else if meta.path.is_ident("method") {
            let value: Ident = meta.value()?.parse()?;
            set_once(meta, &mut self.method, value, "method")
        } else if meta.path.is_ident("response") {
            let value: Type = meta.value()?.parse()?;
            set_once(meta, &mut self.response, value, "response")
        } else if meta.path.is_ident("body") {
            let value: Type = meta.value()?.parse()?;
            set_once(meta, &mut self.body, value, "body")
        } else if meta.path.is_ident("crate") {
            let value = meta.value()?.call(Path::parse_mod_style)?;
            set_once(meta, &mut self.krate, value, "crate")
        } else {
            Err(meta.error(
                "unsupported endpoint attribute, expected one of `path`, `method`, `response`, \
                 `body`, `crate`",
            ))
        }
    }

    /// The `method` argument, which every endpoint needs
    pub fn method(&self) -> syn::Result<&Ident> {
        self.method.as_ref().ok_or_else(|| {
            syn::Error::new(
                Span::call_site(),
                "missing `method` argument, e.g. #[endpoint(method = Get)]",
            )
        })
    }
}

fn set_once<T>(
    meta: &ParseNestedMeta<'_>,
    slot: &mut Option<T>,
    value: T,
    name: &str,
) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate `{name}` argument")));
    }
    *slot = Some(value);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, reason = "test assertions")]
mod tests {
    use quote::quote;

    use super::*;

    #[test]
    fn test_parse_all_arguments() {
        let args = EndpointArgs::parse(quote! {
            path = ["users", ":id"],
            method = Get,
            response = Vec<String>,
            body = NewUser,
            crate = ::my_api::endpoint_builder,
        })
        .expect("valid arguments");

        assert!(args.path.is_some());
        assert_eq!(args.method().expect("method").to_string(), "Get");
        assert!(args.response.is_some());
        assert!(args.body.is_some());
        assert!(args.krate.is_some());
    }

    #[test]
    fn test_parse_without_path() {
        let args = EndpointArgs::parse(quote!(method = Post)).expect("valid arguments");
        assert!(args.path.is_none());
    }

    #[test]
    fn test_missing_method() {
        let args = EndpointArgs::parse(quote!(path = ["users"])).expect("valid arguments");
        let error = args.method().expect_err("method is required");
        assert!(error.to_string().contains("missing `method`"));
    }

    #[test]
    fn test_unknown_argument() {
        let error = EndpointArgs::parse(quote!(verb = Get)).err().expect("unknown argument");
        assert!(error.to_string().contains("unsupported endpoint attribute"));
    }

    #[test]
    fn test_duplicate_argument() {
        let error = EndpointArgs::parse(quote!(method = Get, method = Post))
            .err()
            .expect("duplicate argument");
        assert!(error.to_string().contains("duplicate `method`"));
    }
}
