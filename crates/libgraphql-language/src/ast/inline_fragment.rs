use crate::Location;
use crate::ast::Directive;
use crate::ast::NamedType;
use crate::ast::NodeIdentity;
use crate::ast::SelectionSet;
use crate::ast::ast_node::list_unchanged;
use std::sync::Arc;

/// `... on Type @directive { ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Arc<NamedType>,
    pub directives: Vec<Arc<Directive>>,
    pub selection_set: Arc<SelectionSet>,
    pub location: Option<Location>,
}

impl InlineFragment {
    pub fn update(
        self: &Arc<Self>,
        type_condition: Arc<NamedType>,
        directives: Option<Vec<Arc<Directive>>>,
        selection_set: Arc<SelectionSet>,
    ) -> Arc<Self> {
        if self.type_condition.is_same_node(&type_condition)
            && list_unchanged(&self.directives, &directives)
            && self.selection_set.is_same_node(&selection_set)
        {
            return self.clone();
        }
        Arc::new(Self {
            type_condition,
            directives: directives.unwrap_or_else(|| self.directives.clone()),
            selection_set,
            location: self.location.clone(),
        })
    }
}
