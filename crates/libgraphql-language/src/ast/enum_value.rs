use crate::Location;

/// A bare name used as a value, other than `true` and `false`.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub value: String,
    pub location: Option<Location>,
}
