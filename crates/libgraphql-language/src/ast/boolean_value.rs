use crate::Location;

/// `true` or `false`.
#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub value: bool,
    pub location: Option<Location>,
}
