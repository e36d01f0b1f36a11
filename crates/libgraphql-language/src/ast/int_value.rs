use crate::Location;

/// An integer literal, kept as its exact source text (`-?(0|[1-9][0-9]*)`).
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue {
    pub value: String,
    pub location: Option<Location>,
}
