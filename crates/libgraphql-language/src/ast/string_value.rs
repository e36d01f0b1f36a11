use crate::Location;

/// A string literal; `value` holds the decoded contents.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue {
    pub value: String,
    pub location: Option<Location>,
}
