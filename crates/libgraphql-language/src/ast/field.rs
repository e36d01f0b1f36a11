use crate::Location;
use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NodeIdentity;
use crate::ast::SelectionSet;
use crate::ast::ast_node::list_unchanged;
use std::sync::Arc;

/// A field selection, optionally aliased, with arguments, directives, and
/// a nested selection set.
///
/// `alias: name(arg: value) @directive { ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<Arc<Name>>,
    pub name: Arc<Name>,
    pub arguments: Vec<Arc<Argument>>,
    pub directives: Vec<Arc<Directive>>,
    pub selection_set: Option<Arc<SelectionSet>>,
    pub location: Option<Location>,
}

impl Field {
    /// The name this field's result is keyed under: the alias when present.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).value.as_str()
    }

    pub fn update(
        self: &Arc<Self>,
        alias: Option<Arc<Name>>,
        name: Arc<Name>,
        arguments: Option<Vec<Arc<Argument>>>,
        directives: Option<Vec<Arc<Directive>>>,
        selection_set: Option<Arc<SelectionSet>>,
    ) -> Arc<Self> {
        if self.alias.is_same_node(&alias)
            && self.name.is_same_node(&name)
            && list_unchanged(&self.arguments, &arguments)
            && list_unchanged(&self.directives, &directives)
            && self.selection_set.is_same_node(&selection_set)
        {
            return self.clone();
        }
        Arc::new(Self {
            alias,
            name,
            arguments: arguments.unwrap_or_else(|| self.arguments.clone()),
            directives: directives.unwrap_or_else(|| self.directives.clone()),
            selection_set,
            location: self.location.clone(),
        })
    }
}
