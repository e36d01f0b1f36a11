use crate::Location;
use crate::ast::NodeIdentity;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::Variable;
use std::sync::Arc;

/// `$name: Type = default` inside an operation's variable list. The
/// default value is always constant.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub variable: Arc<Variable>,
    pub var_type: TypeAnnotation,
    pub default_value: Option<Value>,
    pub location: Option<Location>,
}

impl VariableDefinition {
    pub fn update(
        self: &Arc<Self>,
        variable: Arc<Variable>,
        var_type: TypeAnnotation,
        default_value: Option<Value>,
    ) -> Arc<Self> {
        if self.variable.is_same_node(&variable)
            && self.var_type.is_same_node(&var_type)
            && self.default_value.is_same_node(&default_value)
        {
            return self.clone();
        }
        Arc::new(Self {
            variable,
            var_type,
            default_value,
            location: self.location.clone(),
        })
    }
}
