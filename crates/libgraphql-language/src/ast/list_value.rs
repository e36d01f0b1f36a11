use crate::Location;
use crate::ast::Value;
use crate::ast::ast_node::list_unchanged;
use std::sync::Arc;

/// `[value, ...]`
#[derive(Clone, Debug, PartialEq)]
pub struct ListValue {
    pub values: Vec<Value>,
    pub location: Option<Location>,
}

impl ListValue {
    pub fn update(self: &Arc<Self>, values: Option<Vec<Value>>) -> Arc<Self> {
        if list_unchanged(&self.values, &values) {
            return self.clone();
        }
        Arc::new(Self {
            values: values.unwrap_or_else(|| self.values.clone()),
            location: self.location.clone(),
        })
    }
}
