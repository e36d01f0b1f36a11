use crate::Location;
use crate::ast::AstNode;
use crate::ast::FragmentDefinition;
use crate::ast::Node;
use crate::ast::NodeIdentity;
use crate::ast::NodeKind;
use crate::ast::OperationDefinition;
use crate::visitor::Visitor;
use inherent::inherent;
use std::sync::Arc;

/// A top-level definition of an executable document.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Operation(Arc<OperationDefinition>),
    Fragment(Arc<FragmentDefinition>),
}

#[inherent]
impl AstNode for Definition {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Operation(node) => visitor.visit_operation_definition(node),
            Self::Fragment(node) => visitor.visit_fragment_definition(node),
        }
    }

    pub fn to_node(&self) -> Node {
        match self {
            Self::Operation(node) => Node::OperationDefinition(node.clone()),
            Self::Fragment(node) => Node::FragmentDefinition(node.clone()),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Operation(_) => NodeKind::OperationDefinition,
            Self::Fragment(_) => NodeKind::FragmentDefinition,
        }
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::Operation(node) => node.location.as_ref(),
            Self::Fragment(node) => node.location.as_ref(),
        }
    }
}

impl NodeIdentity for Definition {
    fn is_same_node(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Operation(current), Self::Operation(other)) => Arc::ptr_eq(current, other),
            (Self::Fragment(current), Self::Fragment(other)) => Arc::ptr_eq(current, other),
            _ => false,
        }
    }
}
