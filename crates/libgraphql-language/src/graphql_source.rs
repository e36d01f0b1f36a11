use std::fmt;
use std::sync::Arc;

/// The text of a GraphQL document together with a display name used in
/// error messages.
///
/// Cloning is cheap: both the body and the name are reference-counted, so
/// every [`Location`](crate::Location) in a parsed tree can point back at
/// the same source without copying it.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct GraphQLSource {
    body: Arc<str>,
    name: Arc<str>,
}

impl GraphQLSource {
    /// Name given to sources that were not explicitly named.
    pub const DEFAULT_NAME: &'static str = "GraphQL";

    pub fn new(body: impl Into<Arc<str>>) -> Self {
        Self::with_name(body, Self::DEFAULT_NAME)
    }

    pub fn with_name(body: impl Into<Arc<str>>, name: impl Into<Arc<str>>) -> Self {
        Self {
            body: body.into(),
            name: name.into(),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length of the body in bytes.
    pub fn len(&self) -> u32 {
        self.body.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns `true` if both handles share the same underlying body.
    pub fn ptr_eq(&self, other: &GraphQLSource) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for GraphQLSource {
    // Every Location holds a source handle, so only the body length is shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphQLSource")
            .field("name", &self.name)
            .field("body_len", &self.body.len())
            .finish()
    }
}

impl From<&str> for GraphQLSource {
    fn from(body: &str) -> Self {
        Self::new(body)
    }
}

impl From<String> for GraphQLSource {
    fn from(body: String) -> Self {
        Self::new(body)
    }
}

impl From<&GraphQLSource> for GraphQLSource {
    fn from(source: &GraphQLSource) -> Self {
        source.clone()
    }
}
