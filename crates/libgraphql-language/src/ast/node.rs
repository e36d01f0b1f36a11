use crate::Location;
use crate::ast::*;
use crate::visitor::Visitor;
use inherent::inherent;
use std::fmt;
use std::sync::Arc;

macro_rules! define_nodes {
    ($($kind:ident => $visit:ident),* $(,)?) => {
        /// An owned handle to any node, tagged with its kind.
        #[derive(Clone, Debug, PartialEq)]
        pub enum Node {
            $($kind(Arc<$kind>),)*
        }

        /// The kind of a node.
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
        pub enum NodeKind {
            $($kind,)*
        }

        impl NodeKind {
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$kind,)*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$kind => stringify!($kind),)*
                }
            }
        }

        #[inherent]
        impl AstNode for Node {
            pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
                match self {
                    $(Self::$kind(node) => visitor.$visit(node),)*
                }
            }

            pub fn to_node(&self) -> Node {
                self.clone()
            }

            pub fn kind(&self) -> NodeKind {
                match self {
                    $(Self::$kind(_) => NodeKind::$kind,)*
                }
            }

            pub fn location(&self) -> Option<&Location> {
                match self {
                    $(Self::$kind(node) => node.location.as_ref(),)*
                }
            }
        }

        impl NodeIdentity for Node {
            fn is_same_node(&self, other: &Self) -> bool {
                match (self, other) {
                    $((Self::$kind(current), Self::$kind(other)) => Arc::ptr_eq(current, other),)*
                    _ => false,
                }
            }
        }

        $(
            impl AstNode for Arc<$kind> {
                fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
                    visitor.$visit(self)
                }

                fn to_node(&self) -> Node {
                    Node::$kind(self.clone())
                }

                fn kind(&self) -> NodeKind {
                    NodeKind::$kind
                }

                fn location(&self) -> Option<&Location> {
                    self.location.as_ref()
                }
            }

            impl From<Arc<$kind>> for Node {
                fn from(node: Arc<$kind>) -> Self {
                    Node::$kind(node)
                }
            }
        )*
    };
}

define_nodes! {
    Name => visit_name,
    Document => visit_document,
    OperationDefinition => visit_operation_definition,
    VariableDefinition => visit_variable_definition,
    Variable => visit_variable,
    SelectionSet => visit_selection_set,
    Field => visit_field,
    Argument => visit_argument,
    FragmentSpread => visit_fragment_spread,
    InlineFragment => visit_inline_fragment,
    FragmentDefinition => visit_fragment_definition,
    IntValue => visit_int_value,
    FloatValue => visit_float_value,
    StringValue => visit_string_value,
    BooleanValue => visit_boolean_value,
    EnumValue => visit_enum_value,
    ListValue => visit_list_value,
    ObjectValue => visit_object_value,
    ObjectField => visit_object_field,
    Directive => visit_directive,
    NamedType => visit_named_type,
    ListType => visit_list_type,
    NonNullType => visit_non_null_type,
    SchemaDocument => visit_schema_document,
    TypeDefinition => visit_type_definition,
    FieldDefinition => visit_field_definition,
    ArgumentDefinition => visit_argument_definition,
    InterfaceDefinition => visit_interface_definition,
    UnionDefinition => visit_union_definition,
    ScalarDefinition => visit_scalar_definition,
    EnumDefinition => visit_enum_definition,
    EnumValueDefinition => visit_enum_value_definition,
    InputObjectDefinition => visit_input_object_definition,
    InputFieldDefinition => visit_input_field_definition,
}

impl Node {
    /// Returns `true` if both handles point at the same allocation.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        self.is_same_node(other)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
