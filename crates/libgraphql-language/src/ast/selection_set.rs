use crate::Location;
use crate::ast::Selection;
use crate::ast::ast_node::list_unchanged;
use std::sync::Arc;

/// `{ selection ... }`, holding at least one selection when parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub location: Option<Location>,
}

impl SelectionSet {
    pub fn update(self: &Arc<Self>, selections: Option<Vec<Selection>>) -> Arc<Self> {
        if list_unchanged(&self.selections, &selections) {
            return self.clone();
        }
        Arc::new(Self {
            selections: selections.unwrap_or_else(|| self.selections.clone()),
            location: self.location.clone(),
        })
    }
}
