//! Procedural macros for endpoint_builder

mod args;
mod endpoint;
mod path_literal;

use proc_macro::TokenStream;

/// Turns a struct into an HTTP endpoint description.
///
/// The `path` argument is an array of string literals. Tokens starting with `:` are parameters;
/// every other token is a constant segment. `*` and `**` are rejected.
///
/// # Example
///
/// ```ignore
/// #[endpoint(path = ["users", ":user-id", "profile"], method = Get, response = Profile)]
/// pub struct GetUserProfile;
/// ```
///
/// This will generate:
/// - `authorization: Option<Authorization>` and `path_parameters: GetUserProfilePathParameters`
///   fields on the struct, plus `body` when a `body = Type` argument is given
/// - a `GetUserProfilePathParameters` struct with one `String` field per parameter
/// - `with_authorization`, and `new` (plus `Default` when it takes nothing) when the struct
///   declares no other fields; both leave `authorization` as `None`
/// - an `Endpoint` implementation whose `path()` renders `/users/{user_id}/profile`
///
/// Arguments:
/// - `path`: the path template, omitted for `/`
/// - `method`: an `HttpMethod` variant such as `Get` or `Post`
/// - `response`: response type, `Never` when omitted
/// - `body`: request body type, `Never` when omitted
/// - `crate`: path to `endpoint_builder` when it is re-exported elsewhere
#[proc_macro_attribute]
pub fn endpoint(attr: TokenStream, item: TokenStream) -> TokenStream {
    endpoint::endpoint_impl(attr.into(), item.into()).into()
}
