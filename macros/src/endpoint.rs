//! `#[endpoint]` attribute implementation
//!
//! The path template runs through `endpoint_builder_path` and the resulting container and
//! renderer descriptions become Rust items. Generation is all or nothing: when anything is
//! rejected the struct is emitted untouched next to the errors.

use endpoint_builder_path::{
    CONTAINER_TYPE_NAME, ContainerField, Diagnostics, GeneratedArtifacts, RenderStep, SEPARATOR,
    SegmentList,
};
use heck::ToSnakeCase;
use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, format_ident, quote};
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{
    Field, Fields, FieldsNamed, GenericArgument, Ident, ItemStruct, Path, PathArguments, Type,
    TypePath, parse_quote,
};

use crate::args::EndpointArgs;
use crate::path_literal::{self, Location};

const AUTHORIZATION_FIELD: &str = "authorization";
const PATH_PARAMETERS_FIELD: &str = "path_parameters";
const BODY_FIELD: &str = "body";

/// Implementation of the `#[endpoint]` attribute
pub fn endpoint_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item_struct = match syn::parse2::<ItemStruct>(item.clone()) {
        Ok(item_struct) => item_struct,
        Err(_) => {
            let mut tokens = syn::Error::new(
                Span::call_site(),
                "#[endpoint] can only be applied to structs",
            )
            .to_compile_error();
            tokens.extend(item);
            return tokens;
        }
    };

    match expand(attr, item_struct.clone()) {
        Ok(tokens) => tokens,
        Err(error) => {
            let mut tokens = error.to_compile_error();
            tokens.extend(item_struct.into_token_stream());
            tokens
        }
    }
}

fn expand(attr: TokenStream, mut item: ItemStruct) -> syn::Result<TokenStream> {
    let args = EndpointArgs::parse(attr)?;
    let method = args.method()?.clone();
    let krate: Path = args
        .krate
        .clone()
        .unwrap_or_else(|| parse_quote!(::endpoint_builder));

    let tokens = path_literal::extract_tokens(args.path.as_ref()).map_err(diagnostics_error)?;
    let template: Vec<String> = tokens.iter().map(|token| token.text().to_string()).collect();

    let segments = endpoint_builder_path::parse(tokens).map_err(diagnostics_error)?;
    let artifacts = endpoint_builder_path::generate(&segments);
    let field_idents = container_field_idents(&segments, &artifacts)?;

    let declared = declared_fields(&mut item)?;
    for reserved in [PATH_PARAMETERS_FIELD, BODY_FIELD] {
        if let Some(field) = declared.iter().find(|field| is_named(field, reserved)) {
            return Err(syn::Error::new_spanned(
                &field.ident,
                format!("field `{reserved}` is generated by #[endpoint]"),
            ));
        }
    }
    let declared_authorization = declared
        .iter()
        .find(|field| is_named(field, AUTHORIZATION_FIELD));
    if let Some(field) = declared_authorization {
        check_authorization_type(field)?;
    }
    // `new` can only fill in fields the macro knows about
    let constructible = declared
        .iter()
        .all(|field| is_named(field, AUTHORIZATION_FIELD));

    let vis = item.vis.clone();
    let name = item.ident.clone();
    let params_name = format_ident!("{}{}", name, CONTAINER_TYPE_NAME);
    let authorization_field = Ident::new(AUTHORIZATION_FIELD, Span::call_site());
    let path_parameters_field = Ident::new(PATH_PARAMETERS_FIELD, Span::call_site());
    let body_field = Ident::new(BODY_FIELD, Span::call_site());

    let mut generated_fields = Vec::new();
    let mut new_parameters = Vec::new();
    if declared_authorization.is_none() {
        generated_fields.push(quote! {
            /// Authorization sent along with the request
            #vis #authorization_field: ::core::option::Option<#krate::Authorization>
        });
    }
    if artifacts.container().is_some() {
        generated_fields.push(quote! {
            /// Values substituted into the path template
            #vis #path_parameters_field: #params_name
        });
        new_parameters.push((&path_parameters_field, params_name.to_token_stream()));
    }
    if let Some(body) = &args.body {
        generated_fields.push(quote! {
            /// Request body content
            #vis #body_field: #body
        });
        new_parameters.push((&body_field, body.to_token_stream()));
    }
    if let Fields::Named(named) = &mut item.fields {
        for field in generated_fields {
            named.named.push(Field::parse_named.parse2(field)?);
        }
    }

    let container = artifacts.container().map(|container| {
        container_struct(&vis, &name, &params_name, container.fields(), &field_idents)
    });

    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();

    let new_fn = constructible.then(|| {
        let idents = new_parameters.iter().map(|(ident, _)| ident);
        let types = new_parameters.iter().map(|(_, ty)| ty);
        let initializers = new_parameters.iter().map(|(ident, _)| ident);
        quote! {
            /// Creates the endpoint without authorization.
            #[must_use]
            #vis fn new(#(#idents: #types),*) -> Self {
                Self {
                    #authorization_field: ::core::option::Option::None,
                    #(#initializers),*
                }
            }
        }
    });
    let default_impl = (constructible && new_parameters.is_empty()).then(|| {
        quote! {
            impl #impl_generics ::core::default::Default for #name #ty_generics #where_clause {
                fn default() -> Self {
                    Self::new()
                }
            }
        }
    });

    let path_body = path_body(&artifacts, &field_idents);
    let params_type = if artifacts.container().is_some() {
        params_name.to_token_stream()
    } else {
        quote!(())
    };
    let response_type = args
        .response
        .as_ref()
        .map_or_else(|| quote!(#krate::Never), ToTokens::to_token_stream);
    let (body_type, body_fn) = match &args.body {
        Some(body) => (
            body.to_token_stream(),
            quote! {
                fn body(&self) -> ::core::option::Option<&Self::Body> {
                    ::core::option::Option::Some(&self.#body_field)
                }
            },
        ),
        None => (quote!(#krate::Never), TokenStream::new()),
    };

    Ok(quote! {
        #item

        #container

        #[allow(dead_code, reason = "constructors generated by #[endpoint]")]
        impl #impl_generics #name #ty_generics #where_clause {
            #new_fn

            /// Sets the authorization sent along with the request.
            #[must_use]
            #vis fn with_authorization(mut self, authorization: #krate::Authorization) -> Self {
                self.#authorization_field = ::core::option::Option::Some(authorization);
                self
            }
        }

        #default_impl

        impl #impl_generics #krate::Endpoint for #name #ty_generics #where_clause {
            type Body = #body_type;
            type Response = #response_type;
            type PathParameters = #params_type;

            const PATH_TEMPLATE: &'static [&'static str] = &[#(#template),*];
            const METHOD: #krate::HttpMethod = #krate::HttpMethod::#method;

            fn path(&self) -> ::std::string::String {
                #path_body
            }

            fn authorization(&self) -> ::core::option::Option<&#krate::Authorization> {
                self.#authorization_field.as_ref()
            }

            #body_fn
        }
    })
}

fn is_named(field: &Field, name: &str) -> bool {
    field.ident.as_ref().is_some_and(|ident| ident == name)
}

/// A declared `authorization` field has to be `Option<Authorization>`
fn check_authorization_type(field: &Field) -> syn::Result<()> {
    let is_authorization = option_argument(&field.ty)
        .and_then(last_segment)
        .is_some_and(|segment| segment.ident == "Authorization");
    if is_authorization {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(
            &field.ty,
            "field `authorization` must have type `Option<Authorization>`",
        ))
    }
}

fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    match ty {
        Type::Path(TypePath { qself: None, path }) => path.segments.last(),
        _ => None,
    }
}

/// `T` of an `Option<T>`, however `Option` is spelled
fn option_argument(ty: &Type) -> Option<&Type> {
    let segment = last_segment(ty).filter(|segment| segment.ident == "Option")?;
    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return None;
    };
    match arguments.args.first() {
        Some(GenericArgument::Type(inner)) if arguments.args.len() == 1 => Some(inner),
        _ => None,
    }
}

/// Turn template diagnostics into one combined error, each part spanned at its token
fn diagnostics_error(diagnostics: Diagnostics<Location>) -> syn::Error {
    diagnostics
        .into_iter()
        .map(|diagnostic| {
            let (kind, location) = diagnostic.into_parts();
            syn::Error::new_spanned(location, kind)
        })
        .reduce(|mut combined, error| {
            combined.combine(error);
            combined
        })
        .unwrap_or_else(|| syn::Error::new(Span::call_site(), "invalid endpoint path"))
}

/// Rust field names for the container fields, in container order.
///
/// Identifiers are lower camel; Rust fields are their snake case form, which has to be a
/// usable identifier and unique.
fn container_field_idents(
    segments: &SegmentList<Location>,
    artifacts: &GeneratedArtifacts,
) -> syn::Result<Vec<Ident>> {
    let Some(container) = artifacts.container() else {
        return Ok(Vec::new());
    };

    let mut idents: Vec<Ident> = Vec::with_capacity(container.fields().len());
    let mut errors: Option<syn::Error> = None;

    for (field, (_, location)) in container.fields().iter().zip(segments.parameters()) {
        let snake = field.identifier().to_snake_case();
        let result = match syn::parse_str::<Ident>(&snake) {
            Ok(ident) if idents.contains(&ident) => Err(syn::Error::new_spanned(
                location,
                format!(
                    "path parameter `{}` maps to field `{ident}`, which another parameter \
                     already uses",
                    field.raw_name()
                ),
            )),
            Ok(ident) => Ok(ident),
            Err(_) => Err(syn::Error::new_spanned(
                location,
                format!(
                    "path parameter `{}` does not produce a valid field name",
                    field.raw_name()
                ),
            )),
        };

        match result {
            Ok(ident) => idents.push(ident),
            Err(error) => match &mut errors {
                Some(combined) => combined.combine(error),
                None => errors = Some(error),
            },
        }
    }

    errors.map_or(Ok(idents), Err)
}

/// Fields the struct already declares; unit structs become braced structs
fn declared_fields(item: &mut ItemStruct) -> syn::Result<Vec<Field>> {
    match &item.fields {
        Fields::Named(named) => Ok(named.named.iter().cloned().collect()),
        Fields::Unit => {
            item.fields = Fields::Named(FieldsNamed {
                brace_token: syn::token::Brace::default(),
                named:       Punctuated::new(),
            });
            item.semi_token = None;
            Ok(Vec::new())
        }
        Fields::Unnamed(unnamed) => Err(syn::Error::new_spanned(
            unnamed,
            "#[endpoint] requires a unit struct or a struct with named fields",
        )),
    }
}

fn container_struct(
    vis: &syn::Visibility,
    name: &Ident,
    params_name: &Ident,
    fields: &[ContainerField],
    field_idents: &[Ident],
) -> TokenStream {
    let struct_doc = format!("Path parameters for [`{name}`], in path template order.");
    let field_docs = fields
        .iter()
        .map(|field| format!("Value of the `:{}` path segment.", field.raw_name()));

    quote! {
        #[doc = #struct_doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #vis struct #params_name {
            #(
                #[doc = #field_docs]
                pub #field_idents: ::std::string::String,
            )*
        }

        impl #params_name {
            /// Creates the path parameters, taking each value in path template order.
            #[must_use]
            pub fn new(#(#field_idents: impl ::core::convert::Into<::std::string::String>),*) -> Self {
                Self {
                    #(#field_idents: #field_idents.into()),*
                }
            }
        }
    }
}

/// Body of `Endpoint::path`: a leading separator followed by the steps joined by it
fn path_body(artifacts: &GeneratedArtifacts, field_idents: &[Ident]) -> TokenStream {
    let renderer = artifacts.renderer();
    if renderer.is_root() {
        return quote!(::std::string::String::from(#SEPARATOR));
    }

    let path_parameters_field = Ident::new(PATH_PARAMETERS_FIELD, Span::call_site());
    let steps = renderer.steps().iter().map(|step| match step {
        RenderStep::Literal(text) => quote!(#text),
        RenderStep::Field(index) => {
            let field = &field_idents[*index];
            quote!(self.#path_parameters_field.#field.as_str())
        }
    });

    quote! {
        let mut path = ::std::string::String::from(#SEPARATOR);
        path.push_str(&[#(#steps),*].join(#SEPARATOR));
        path
    }
}
