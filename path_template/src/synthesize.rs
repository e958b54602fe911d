//! Synthesis of the parameter container and path renderer from a validated template
//!
//! Both artifacts are descriptions, not code: the attribute macro turns them into Rust
//! items, the runtime interpreter renders paths from them directly.

use crate::segment::PathSegment;
use crate::validate::SegmentList;

/// Name of the generated parameter container type
pub const CONTAINER_TYPE_NAME: &str = "PathParameters";

/// Name of the field holding the container on the enclosing declaration
pub const CONTAINER_FIELD_NAME: &str = "pathParameters";

/// Separator between rendered segments, also the prefix of every rendered path
pub const SEPARATOR: &str = "/";

/// One string-valued field of the parameter container
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerField {
    identifier: String,
    raw_name:   String,
}

impl ContainerField {
    /// The field name, as derived from the raw name
    #[must_use]
    pub fn identifier(&self) -> &str { &self.identifier }

    /// The parameter name as written in the template
    #[must_use]
    pub fn raw_name(&self) -> &str { &self.raw_name }
}

/// Value type holding one field per parameter, in template order.
///
/// Its constructor takes the fields positionally in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterContainerSpec {
    fields: Vec<ContainerField>,
}

impl ParameterContainerSpec {
    /// Always [`CONTAINER_TYPE_NAME`]
    #[must_use]
    pub const fn type_name(&self) -> &'static str { CONTAINER_TYPE_NAME }

    /// Always [`CONTAINER_FIELD_NAME`]
    #[must_use]
    pub const fn holder_field(&self) -> &'static str { CONTAINER_FIELD_NAME }

    /// Fields in template order
    #[must_use]
    pub fn fields(&self) -> &[ContainerField] { &self.fields }
}

/// One step of the rendered path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RenderStep {
    /// Constant text
    Literal(String),
    /// Value of the container field at this index
    Field(usize),
}

/// Ordered render steps, joined with [`SEPARATOR`] behind a leading [`SEPARATOR`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathRenderSpec {
    steps: Vec<RenderStep>,
}

impl PathRenderSpec {
    /// Steps in template order
    #[must_use]
    pub fn steps(&self) -> &[RenderStep] { &self.steps }

    /// `true` when the template is empty and every render yields `/`
    #[must_use]
    pub const fn is_root(&self) -> bool { self.steps.is_empty() }

    /// Renders a path, asking `field` for the value of each container field by index.
    ///
    /// Nothing is cached: each call reads the field values again.
    #[must_use]
    pub fn render<F, S>(&self, mut field: F) -> String
    where
        F: FnMut(usize) -> S,
        S: AsRef<str>,
    {
        let mut path = String::from(SEPARATOR);
        for (position, step) in self.steps.iter().enumerate() {
            if position > 0 {
                path.push_str(SEPARATOR);
            }
            match step {
                RenderStep::Literal(text) => path.push_str(text),
                RenderStep::Field(index) => path.push_str(field(*index).as_ref()),
            }
        }
        path
    }
}

/// Everything derived from one template
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratedArtifacts {
    container: Option<ParameterContainerSpec>,
    renderer:  PathRenderSpec,
}

impl GeneratedArtifacts {
    /// The parameter container; `None` when the template has no parameters
    #[must_use]
    pub const fn container(&self) -> Option<&ParameterContainerSpec> { self.container.as_ref() }

    /// The path renderer
    #[must_use]
    pub const fn renderer(&self) -> &PathRenderSpec { &self.renderer }
}

/// Builds the container and renderer descriptions for a validated template
#[must_use]
pub fn generate<L>(segments: &SegmentList<L>) -> GeneratedArtifacts {
    let mut fields = Vec::new();
    let mut steps = Vec::with_capacity(segments.len());

    for (segment, _) in segments.iter() {
        match segment {
            PathSegment::Constant(text) => steps.push(RenderStep::Literal(text.clone())),
            PathSegment::Parameter(parameter) => {
                steps.push(RenderStep::Field(fields.len()));
                fields.push(ContainerField {
                    identifier: parameter.identifier().to_string(),
                    raw_name:   parameter.raw_name().to_string(),
                });
            }
            // rejected by `parse`
            PathSegment::Wildcard | PathSegment::Catchall => {}
        }
    }

    let container = (!fields.is_empty()).then_some(ParameterContainerSpec { fields });

    GeneratedArtifacts {
        container,
        renderer: PathRenderSpec { steps },
    }
}
