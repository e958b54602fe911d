//! Path template compiler for `endpoint_builder`
//!
//! A path template is an ordered list of string tokens such as `["users", ":user-id"]`.
//! This crate turns one into two descriptions:
//! - a [`ParameterContainerSpec`]: a value type with one string field per parameter
//! - a [`PathRenderSpec`]: how to render a concrete path from those fields
//!
//! The pipeline is host independent. Tokens carry a location of any type `L`, so the same
//! code serves the `#[endpoint]` attribute macro (spans) and the runtime `PathTemplate`
//! interpreter (token indices).
//!
//! ```
//! use endpoint_builder_path::{RawToken, generate, parse};
//!
//! let tokens = ["team", ":team-id", "user", ":user-id"]
//!     .iter()
//!     .enumerate()
//!     .map(|(index, text)| RawToken::new(*text, index));
//!
//! let artifacts = generate(&parse(tokens).unwrap());
//! let values = ["t1", "u1"];
//! assert_eq!(artifacts.renderer().render(|field| values[field]), "/team/t1/user/u1");
//! ```

mod error;
mod identifier;
mod segment;
mod synthesize;
mod validate;

pub use error::{Diagnostic, Diagnostics, PathError};
pub use identifier::camel_case;
pub use segment::{
    CATCHALL, PARAMETER_PREFIX, Parameter, PathSegment, RawToken, SegmentKind, WILDCARD,
};
pub use synthesize::{
    CONTAINER_FIELD_NAME, CONTAINER_TYPE_NAME, ContainerField, GeneratedArtifacts,
    ParameterContainerSpec, PathRenderSpec, RenderStep, SEPARATOR, generate,
};
pub use validate::{SegmentList, parse};
