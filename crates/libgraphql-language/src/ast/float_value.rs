use crate::Location;

/// A float literal, kept as its exact source text.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue {
    pub value: String,
    pub location: Option<Location>,
}
