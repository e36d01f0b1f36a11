use crate::Location;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NodeIdentity;
use crate::ast::SelectionSet;
use crate::ast::ast_node::list_unchanged;
use std::sync::Arc;

/// `fragment Name on Type @directive { ... }`. The name is never `on`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub name: Arc<Name>,
    pub type_condition: Arc<NamedType>,
    pub directives: Vec<Arc<Directive>>,
    pub selection_set: Arc<SelectionSet>,
    pub location: Option<Location>,
}

impl FragmentDefinition {
    pub fn update(
        self: &Arc<Self>,
        name: Arc<Name>,
        type_condition: Arc<NamedType>,
        directives: Option<Vec<Arc<Directive>>>,
        selection_set: Arc<SelectionSet>,
    ) -> Arc<Self> {
        if self.name.is_same_node(&name)
            && self.type_condition.is_same_node(&type_condition)
            && list_unchanged(&self.directives, &directives)
            && self.selection_set.is_same_node(&selection_set)
        {
            return self.clone();
        }
        Arc::new(Self {
            name,
            type_condition,
            directives: directives.unwrap_or_else(|| self.directives.clone()),
            selection_set,
            location: self.location.clone(),
        })
    }
}
