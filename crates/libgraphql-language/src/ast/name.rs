use crate::Location;

/// An identifier: `[_A-Za-z][_0-9A-Za-z]*`.
#[derive(Clone, Debug, PartialEq)]
pub struct Name {
    pub value: String,
    pub location: Option<Location>,
}

impl Name {
    /// Creates a name with no location.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            location: None,
        }
    }
}
