//! Immutable syntax tree for executable and schema documents.
//!
//! Every node is a plain struct held behind an [`Arc`](std::sync::Arc) and
//! never mutated after construction. Transformations build new nodes with
//! each struct's `update` method, which returns the very same `Arc` when
//! none of the supplied children differ. Two handles refer to the same node
//! exactly when [`NodeIdentity::is_same_node`] holds; `PartialEq` compares
//! structure.
//!
//! Positions that accept several node kinds are enums over handles:
//! [`Definition`], [`Selection`], [`Value`], [`TypeAnnotation`],
//! [`NullableTypeAnnotation`] and [`SchemaDefinition`]. [`Node`] covers all
//! of them.

mod argument;
mod argument_definition;
mod ast_node;
mod boolean_value;
mod definition;
mod directive;
mod document;
mod enum_definition;
mod enum_value;
mod enum_value_definition;
mod field;
mod field_definition;
mod float_value;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod input_field_definition;
mod input_object_definition;
mod int_value;
mod interface_definition;
mod list_type;
mod list_value;
mod name;
mod named_type;
mod node;
mod non_null_type;
mod object_field;
mod object_value;
mod operation_definition;
mod operation_type;
mod scalar_definition;
mod schema_definition;
mod schema_document;
mod selection;
mod selection_set;
mod string_value;
mod type_annotation;
mod type_definition;
mod union_definition;
mod value;
mod variable;
mod variable_definition;

pub use argument::Argument;
pub use argument_definition::ArgumentDefinition;
pub use ast_node::AstNode;
pub use ast_node::NodeIdentity;
pub use boolean_value::BooleanValue;
pub use definition::Definition;
pub use directive::Directive;
pub use document::Document;
pub use enum_definition::EnumDefinition;
pub use enum_value::EnumValue;
pub use enum_value_definition::EnumValueDefinition;
pub use field::Field;
pub use field_definition::FieldDefinition;
pub use float_value::FloatValue;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use input_field_definition::InputFieldDefinition;
pub use input_object_definition::InputObjectDefinition;
pub use int_value::IntValue;
pub use interface_definition::InterfaceDefinition;
pub use list_type::ListType;
pub use list_value::ListValue;
pub use name::Name;
pub use named_type::NamedType;
pub use node::Node;
pub use node::NodeKind;
pub use non_null_type::NonNullType;
pub use object_field::ObjectField;
pub use object_value::ObjectValue;
pub use operation_definition::OperationDefinition;
pub use operation_type::OperationType;
pub use scalar_definition::ScalarDefinition;
pub use schema_definition::SchemaDefinition;
pub use schema_document::SchemaDocument;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use string_value::StringValue;
pub use type_annotation::NullableTypeAnnotation;
pub use type_annotation::TypeAnnotation;
pub use type_definition::TypeDefinition;
pub use union_definition::UnionDefinition;
pub use value::Value;
pub use variable::Variable;
pub use variable_definition::VariableDefinition;

#[cfg(test)]
mod tests;
