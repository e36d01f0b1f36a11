use crate::Location;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::visitor::Visitor;
use std::sync::Arc;

/// Behavior shared by every node handle (`Arc<Field>`, `Arc<Name>`, ...)
/// and by every grouping of node handles ([`Selection`](crate::ast::Selection),
/// [`Value`](crate::ast::Value), [`Node`], ...).
pub trait AstNode {
    /// Dispatches to the visitor method for this node's concrete kind.
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output;

    /// Returns an owned, kind-tagged handle to this node.
    fn to_node(&self) -> Node;

    fn kind(&self) -> NodeKind;

    fn location(&self) -> Option<&Location>;
}

/// Identity comparison used to detect structural sharing.
///
/// Two handles are the same node when they point at the same allocation;
/// structurally equal but separately allocated nodes are not the same.
pub trait NodeIdentity {
    fn is_same_node(&self, other: &Self) -> bool;
}

impl<T> NodeIdentity for Arc<T> {
    fn is_same_node(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: NodeIdentity> NodeIdentity for Option<T> {
    fn is_same_node(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(current), Some(other)) => current.is_same_node(other),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Returns `true` if `replacement` leaves `current` as it is: either no
/// replacement list was given or every element is the same node.
pub(crate) fn list_unchanged<T: NodeIdentity>(current: &[T], replacement: &Option<Vec<T>>) -> bool {
    match replacement {
        None => true,
        Some(replacement) => {
            current.len() == replacement.len()
                && current
                    .iter()
                    .zip(replacement)
                    .all(|(current, replacement)| current.is_same_node(replacement))
        },
    }
}
