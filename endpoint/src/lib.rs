//! Declarative HTTP endpoint descriptions
//!
//! An endpoint is a struct annotated with `#[endpoint]`. The attribute reads a path template
//! such as `["users", ":user-id", "profile"]` and generates a typed container for the
//! parameters, the fields that hold it, and an [`Endpoint`] implementation whose `path()`
//! renders the concrete URL path.
//!
//! ```
//! use endpoint_builder::{Endpoint, HttpMethod, endpoint};
//!
//! #[endpoint(path = ["users", ":user-id", "profile"], method = Get, response = String)]
//! pub struct GetUserProfile;
//!
//! let request = GetUserProfile::new(GetUserProfilePathParameters::new("my-user-id"));
//! assert_eq!(request.path(), "/users/my-user-id/profile");
//! assert!(request.authorization().is_none());
//! assert_eq!(GetUserProfile::METHOD, HttpMethod::Get);
//! ```
//!
//! Templates only known at runtime go through [`PathTemplate`], which applies the same rules.

mod authorization;
mod endpoint;
mod error;
mod method;
mod never;
mod template;

pub use authorization::{Authorization, HEADER_NAME};
pub use endpoint::Endpoint;
pub use endpoint_builder_path::{PathError, SegmentKind, camel_case};
#[cfg(feature = "macros")]
pub use endpoint_builder_macros::endpoint;
pub use error::{Error, Result};
pub use method::HttpMethod;
pub use never::{NEVER_DECODE_MESSAGE, Never};
pub use template::PathTemplate;
