use crate::Location;
use crate::ast::AstNode;
use crate::ast::ListType;
use crate::ast::NamedType;
use crate::ast::Node;
use crate::ast::NodeIdentity;
use crate::ast::NodeKind;
use crate::ast::NonNullType;
use crate::visitor::Visitor;
use inherent::inherent;
use std::sync::Arc;

/// A type reference: `Name`, `[Type]` or `Type!`.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    Named(Arc<NamedType>),
    List(Arc<ListType>),
    NonNull(Arc<NonNullType>),
}

/// The types a [`NonNullType`] may wrap.
#[derive(Clone, Debug, PartialEq)]
pub enum NullableTypeAnnotation {
    Named(Arc<NamedType>),
    List(Arc<ListType>),
}

impl TypeAnnotation {
    /// The name at the core of all list and non-null wrappers.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::Named(named) => &named.name.value,
            Self::List(list) => list.item_type.innermost_name(),
            Self::NonNull(non_null) => match &non_null.inner_type {
                NullableTypeAnnotation::Named(named) => &named.name.value,
                NullableTypeAnnotation::List(list) => list.item_type.innermost_name(),
            },
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }
}

impl From<NullableTypeAnnotation> for TypeAnnotation {
    fn from(nullable: NullableTypeAnnotation) -> Self {
        match nullable {
            NullableTypeAnnotation::Named(node) => Self::Named(node),
            NullableTypeAnnotation::List(node) => Self::List(node),
        }
    }
}

#[inherent]
impl AstNode for TypeAnnotation {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Named(node) => visitor.visit_named_type(node),
            Self::List(node) => visitor.visit_list_type(node),
            Self::NonNull(node) => visitor.visit_non_null_type(node),
        }
    }

    pub fn to_node(&self) -> Node {
        match self {
            Self::Named(node) => Node::NamedType(node.clone()),
            Self::List(node) => Node::ListType(node.clone()),
            Self::NonNull(node) => Node::NonNullType(node.clone()),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Named(_) => NodeKind::NamedType,
            Self::List(_) => NodeKind::ListType,
            Self::NonNull(_) => NodeKind::NonNullType,
        }
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::Named(node) => node.location.as_ref(),
            Self::List(node) => node.location.as_ref(),
            Self::NonNull(node) => node.location.as_ref(),
        }
    }
}

#[inherent]
impl AstNode for NullableTypeAnnotation {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Named(node) => visitor.visit_named_type(node),
            Self::List(node) => visitor.visit_list_type(node),
        }
    }

    pub fn to_node(&self) -> Node {
        match self {
            Self::Named(node) => Node::NamedType(node.clone()),
            Self::List(node) => Node::ListType(node.clone()),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Named(_) => NodeKind::NamedType,
            Self::List(_) => NodeKind::ListType,
        }
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::Named(node) => node.location.as_ref(),
            Self::List(node) => node.location.as_ref(),
        }
    }
}

impl NodeIdentity for TypeAnnotation {
    fn is_same_node(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Named(current), Self::Named(other)) => Arc::ptr_eq(current, other),
            (Self::List(current), Self::List(other)) => Arc::ptr_eq(current, other),
            (Self::NonNull(current), Self::NonNull(other)) => Arc::ptr_eq(current, other),
            _ => false,
        }
    }
}

impl NodeIdentity for NullableTypeAnnotation {
    fn is_same_node(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Named(current), Self::Named(other)) => Arc::ptr_eq(current, other),
            (Self::List(current), Self::List(other)) => Arc::ptr_eq(current, other),
            _ => false,
        }
    }
}
