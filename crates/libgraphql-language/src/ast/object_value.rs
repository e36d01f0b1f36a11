use crate::Location;
use crate::ast::ObjectField;
use crate::ast::ast_node::list_unchanged;
use std::sync::Arc;

/// `{name: value, ...}`. Field names are unique when parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    pub fields: Vec<Arc<ObjectField>>,
    pub location: Option<Location>,
}

impl ObjectValue {
    pub fn update(self: &Arc<Self>, fields: Option<Vec<Arc<ObjectField>>>) -> Arc<Self> {
        if list_unchanged(&self.fields, &fields) {
            return self.clone();
        }
        Arc::new(Self {
            fields: fields.unwrap_or_else(|| self.fields.clone()),
            location: self.location.clone(),
        })
    }

    pub fn field(&self, name: &str) -> Option<&Arc<ObjectField>> {
        self.fields.iter().find(|field| field.name.value == name)
    }
}
