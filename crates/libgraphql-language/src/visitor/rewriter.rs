use crate::ast::*;
use crate::visitor::VisitFlow;
use crate::visitor::Visitor;
use std::ops::ControlFlow;
use std::sync::Arc;

/// Rewriting hooks, one `enter_*`/`leave_*` pair per node kind.
///
/// Each hook receives a node and returns the node to keep in its place:
/// the same handle to keep it, a different one to replace it, or `None`
/// to delete it. `enter_*` runs before the children are rewritten and its
/// result is the node whose children are visited; `leave_*` runs on the
/// node rebuilt from the rewritten children. A node deleted in `enter_*`
/// is not descended into and its `leave_*` does not run.
///
/// Every hook defaults to keeping the node unchanged.
pub trait Rewriter {
    fn enter_name(&mut self, node: Arc<Name>) -> VisitFlow<Option<Arc<Name>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_name(&mut self, node: Arc<Name>) -> VisitFlow<Option<Arc<Name>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_document(&mut self, node: Arc<Document>) -> VisitFlow<Option<Arc<Document>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_document(&mut self, node: Arc<Document>) -> VisitFlow<Option<Arc<Document>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_operation_definition(
        &mut self,
        node: Arc<OperationDefinition>,
    ) -> VisitFlow<Option<Arc<OperationDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_operation_definition(
        &mut self,
        node: Arc<OperationDefinition>,
    ) -> VisitFlow<Option<Arc<OperationDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_variable_definition(
        &mut self,
        node: Arc<VariableDefinition>,
    ) -> VisitFlow<Option<Arc<VariableDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_variable_definition(
        &mut self,
        node: Arc<VariableDefinition>,
    ) -> VisitFlow<Option<Arc<VariableDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_variable(&mut self, node: Arc<Variable>) -> VisitFlow<Option<Arc<Variable>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_variable(&mut self, node: Arc<Variable>) -> VisitFlow<Option<Arc<Variable>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_selection_set(
        &mut self,
        node: Arc<SelectionSet>,
    ) -> VisitFlow<Option<Arc<SelectionSet>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_selection_set(
        &mut self,
        node: Arc<SelectionSet>,
    ) -> VisitFlow<Option<Arc<SelectionSet>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_field(&mut self, node: Arc<Field>) -> VisitFlow<Option<Arc<Field>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_field(&mut self, node: Arc<Field>) -> VisitFlow<Option<Arc<Field>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_argument(&mut self, node: Arc<Argument>) -> VisitFlow<Option<Arc<Argument>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_argument(&mut self, node: Arc<Argument>) -> VisitFlow<Option<Arc<Argument>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_fragment_spread(
        &mut self,
        node: Arc<FragmentSpread>,
    ) -> VisitFlow<Option<Arc<FragmentSpread>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_fragment_spread(
        &mut self,
        node: Arc<FragmentSpread>,
    ) -> VisitFlow<Option<Arc<FragmentSpread>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_inline_fragment(
        &mut self,
        node: Arc<InlineFragment>,
    ) -> VisitFlow<Option<Arc<InlineFragment>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_inline_fragment(
        &mut self,
        node: Arc<InlineFragment>,
    ) -> VisitFlow<Option<Arc<InlineFragment>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_fragment_definition(
        &mut self,
        node: Arc<FragmentDefinition>,
    ) -> VisitFlow<Option<Arc<FragmentDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_fragment_definition(
        &mut self,
        node: Arc<FragmentDefinition>,
    ) -> VisitFlow<Option<Arc<FragmentDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_int_value(&mut self, node: Arc<IntValue>) -> VisitFlow<Option<Arc<IntValue>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_int_value(&mut self, node: Arc<IntValue>) -> VisitFlow<Option<Arc<IntValue>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_float_value(&mut self, node: Arc<FloatValue>) -> VisitFlow<Option<Arc<FloatValue>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_float_value(&mut self, node: Arc<FloatValue>) -> VisitFlow<Option<Arc<FloatValue>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_string_value(
        &mut self,
        node: Arc<StringValue>,
    ) -> VisitFlow<Option<Arc<StringValue>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_string_value(
        &mut self,
        node: Arc<StringValue>,
    ) -> VisitFlow<Option<Arc<StringValue>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_boolean_value(
        &mut self,
        node: Arc<BooleanValue>,
    ) -> VisitFlow<Option<Arc<BooleanValue>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_boolean_value(
        &mut self,
        node: Arc<BooleanValue>,
    ) -> VisitFlow<Option<Arc<BooleanValue>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_enum_value(&mut self, node: Arc<EnumValue>) -> VisitFlow<Option<Arc<EnumValue>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_enum_value(&mut self, node: Arc<EnumValue>) -> VisitFlow<Option<Arc<EnumValue>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_list_value(&mut self, node: Arc<ListValue>) -> VisitFlow<Option<Arc<ListValue>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_list_value(&mut self, node: Arc<ListValue>) -> VisitFlow<Option<Arc<ListValue>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_object_value(
        &mut self,
        node: Arc<ObjectValue>,
    ) -> VisitFlow<Option<Arc<ObjectValue>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_object_value(
        &mut self,
        node: Arc<ObjectValue>,
    ) -> VisitFlow<Option<Arc<ObjectValue>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_object_field(
        &mut self,
        node: Arc<ObjectField>,
    ) -> VisitFlow<Option<Arc<ObjectField>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_object_field(
        &mut self,
        node: Arc<ObjectField>,
    ) -> VisitFlow<Option<Arc<ObjectField>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_directive(&mut self, node: Arc<Directive>) -> VisitFlow<Option<Arc<Directive>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_directive(&mut self, node: Arc<Directive>) -> VisitFlow<Option<Arc<Directive>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_named_type(&mut self, node: Arc<NamedType>) -> VisitFlow<Option<Arc<NamedType>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_named_type(&mut self, node: Arc<NamedType>) -> VisitFlow<Option<Arc<NamedType>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_list_type(&mut self, node: Arc<ListType>) -> VisitFlow<Option<Arc<ListType>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_list_type(&mut self, node: Arc<ListType>) -> VisitFlow<Option<Arc<ListType>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_non_null_type(
        &mut self,
        node: Arc<NonNullType>,
    ) -> VisitFlow<Option<Arc<NonNullType>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_non_null_type(
        &mut self,
        node: Arc<NonNullType>,
    ) -> VisitFlow<Option<Arc<NonNullType>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_schema_document(
        &mut self,
        node: Arc<SchemaDocument>,
    ) -> VisitFlow<Option<Arc<SchemaDocument>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_schema_document(
        &mut self,
        node: Arc<SchemaDocument>,
    ) -> VisitFlow<Option<Arc<SchemaDocument>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_type_definition(
        &mut self,
        node: Arc<TypeDefinition>,
    ) -> VisitFlow<Option<Arc<TypeDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_type_definition(
        &mut self,
        node: Arc<TypeDefinition>,
    ) -> VisitFlow<Option<Arc<TypeDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_field_definition(
        &mut self,
        node: Arc<FieldDefinition>,
    ) -> VisitFlow<Option<Arc<FieldDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_field_definition(
        &mut self,
        node: Arc<FieldDefinition>,
    ) -> VisitFlow<Option<Arc<FieldDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_argument_definition(
        &mut self,
        node: Arc<ArgumentDefinition>,
    ) -> VisitFlow<Option<Arc<ArgumentDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_argument_definition(
        &mut self,
        node: Arc<ArgumentDefinition>,
    ) -> VisitFlow<Option<Arc<ArgumentDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_interface_definition(
        &mut self,
        node: Arc<InterfaceDefinition>,
    ) -> VisitFlow<Option<Arc<InterfaceDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_interface_definition(
        &mut self,
        node: Arc<InterfaceDefinition>,
    ) -> VisitFlow<Option<Arc<InterfaceDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_union_definition(
        &mut self,
        node: Arc<UnionDefinition>,
    ) -> VisitFlow<Option<Arc<UnionDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_union_definition(
        &mut self,
        node: Arc<UnionDefinition>,
    ) -> VisitFlow<Option<Arc<UnionDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_scalar_definition(
        &mut self,
        node: Arc<ScalarDefinition>,
    ) -> VisitFlow<Option<Arc<ScalarDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_scalar_definition(
        &mut self,
        node: Arc<ScalarDefinition>,
    ) -> VisitFlow<Option<Arc<ScalarDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_enum_definition(
        &mut self,
        node: Arc<EnumDefinition>,
    ) -> VisitFlow<Option<Arc<EnumDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_enum_definition(
        &mut self,
        node: Arc<EnumDefinition>,
    ) -> VisitFlow<Option<Arc<EnumDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_enum_value_definition(
        &mut self,
        node: Arc<EnumValueDefinition>,
    ) -> VisitFlow<Option<Arc<EnumValueDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_enum_value_definition(
        &mut self,
        node: Arc<EnumValueDefinition>,
    ) -> VisitFlow<Option<Arc<EnumValueDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_input_object_definition(
        &mut self,
        node: Arc<InputObjectDefinition>,
    ) -> VisitFlow<Option<Arc<InputObjectDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_input_object_definition(
        &mut self,
        node: Arc<InputObjectDefinition>,
    ) -> VisitFlow<Option<Arc<InputObjectDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn enter_input_field_definition(
        &mut self,
        node: Arc<InputFieldDefinition>,
    ) -> VisitFlow<Option<Arc<InputFieldDefinition>>> {
        ControlFlow::Continue(Some(node))
    }

    fn leave_input_field_definition(
        &mut self,
        node: Arc<InputFieldDefinition>,
    ) -> VisitFlow<Option<Arc<InputFieldDefinition>>> {
        ControlFlow::Continue(Some(node))
    }
}

/// Rewrites an executable document. `Continue(None)` means the document
/// itself was deleted.
pub fn rewrite_document<R: Rewriter + ?Sized>(
    document: &Arc<Document>,
    rewriter: &mut R,
) -> VisitFlow<Option<Arc<Document>>> {
    Rewrite::new(rewriter).document(document)
}

/// Rewrites a schema document. `Continue(None)` means the document itself
/// was deleted.
pub fn rewrite_schema_document<R: Rewriter + ?Sized>(
    document: &Arc<SchemaDocument>,
    rewriter: &mut R,
) -> VisitFlow<Option<Arc<SchemaDocument>>> {
    Rewrite::new(rewriter).schema_document(document)
}

/// Rewrites any node, returning its replacement as a [`Node`].
pub fn rewrite<N, R>(node: &N, rewriter: &mut R) -> VisitFlow<Option<Node>>
where
    N: AstNode,
    R: Rewriter + ?Sized,
{
    node.accept(&mut Rewrite::new(rewriter))
}

/// [`Visitor`] adapter that drives a [`Rewriter`] through a tree and
/// rebuilds the nodes whose children changed.
///
/// Unchanged subtrees are returned as the input handles. A list is only
/// copied once an element differs from the input at the same index.
/// Deleting a required child deletes its parent, as does emptying a list
/// that must hold at least one element (document definitions, selections,
/// union members, enum values). A parent deleted this way is dropped at
/// once: its remaining children are not visited and its `leave_*` hook
/// does not run. Deleting an optional child leaves it absent.
pub struct Rewrite<'r, R: Rewriter + ?Sized> {
    rewriter: &'r mut R,
}

impl<'r, R: Rewriter + ?Sized> Rewrite<'r, R> {
    pub fn new(rewriter: &'r mut R) -> Self {
        Self { rewriter }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn leaf<K>(
        &mut self,
        node: &Arc<K>,
        enter: fn(&mut R, Arc<K>) -> VisitFlow<Option<Arc<K>>>,
        leave: fn(&mut R, Arc<K>) -> VisitFlow<Option<Arc<K>>>,
    ) -> VisitFlow<Option<Arc<K>>> {
        let Some(node) = enter(self.rewriter, node.clone())? else {
            return ControlFlow::Continue(None);
        };
        leave(self.rewriter, node)
    }

    fn optional<T>(
        &mut self,
        child: &Option<T>,
        rewrite_child: impl FnOnce(&mut Self, &T) -> VisitFlow<Option<T>>,
    ) -> VisitFlow<Option<T>> {
        match child {
            Some(child) => rewrite_child(self, child),
            None => ControlFlow::Continue(None),
        }
    }

    /// Rewrites each element, returning `None` when every element came back
    /// as the same node.
    fn list<T: Clone + NodeIdentity>(
        &mut self,
        items: &[T],
        mut rewrite_item: impl FnMut(&mut Self, &T) -> VisitFlow<Option<T>>,
    ) -> VisitFlow<Option<Vec<T>>> {
        let mut rebuilt: Option<Vec<T>> = None;
        for (idx, item) in items.iter().enumerate() {
            let rewritten = rewrite_item(self, item)?;
            if let Some(list) = rebuilt.as_mut() {
                list.extend(rewritten);
                continue;
            }
            if let Some(rewritten) = &rewritten
                && rewritten.is_same_node(item)
            {
                continue;
            }
            let mut list = items[..idx].to_vec();
            list.extend(rewritten);
            rebuilt = Some(list);
        }
        ControlFlow::Continue(rebuilt)
    }

    // =========================================================================
    // Variant groups
    // =========================================================================

    fn definition(&mut self, definition: &Definition) -> VisitFlow<Option<Definition>> {
        ControlFlow::Continue(match definition {
            Definition::Operation(node) => {
                self.operation_definition(node)?.map(Definition::Operation)
            },
            Definition::Fragment(node) => {
                self.fragment_definition(node)?.map(Definition::Fragment)
            },
        })
    }

    fn selection(&mut self, selection: &Selection) -> VisitFlow<Option<Selection>> {
        ControlFlow::Continue(match selection {
            Selection::Field(node) => self.field(node)?.map(Selection::Field),
            Selection::FragmentSpread(node) => {
                self.fragment_spread(node)?.map(Selection::FragmentSpread)
            },
            Selection::InlineFragment(node) => {
                self.inline_fragment(node)?.map(Selection::InlineFragment)
            },
        })
    }

    fn value(&mut self, value: &Value) -> VisitFlow<Option<Value>> {
        ControlFlow::Continue(match value {
            Value::Variable(node) => self.variable(node)?.map(Value::Variable),
            Value::Int(node) => self
                .leaf(node, R::enter_int_value, R::leave_int_value)?
                .map(Value::Int),
            Value::Float(node) => self
                .leaf(node, R::enter_float_value, R::leave_float_value)?
                .map(Value::Float),
            Value::String(node) => self
                .leaf(node, R::enter_string_value, R::leave_string_value)?
                .map(Value::String),
            Value::Boolean(node) => self
                .leaf(node, R::enter_boolean_value, R::leave_boolean_value)?
                .map(Value::Boolean),
            Value::Enum(node) => self
                .leaf(node, R::enter_enum_value, R::leave_enum_value)?
                .map(Value::Enum),
            Value::List(node) => self.list_value(node)?.map(Value::List),
            Value::Object(node) => self.object_value(node)?.map(Value::Object),
        })
    }

    fn type_annotation(
        &mut self,
        annotation: &TypeAnnotation,
    ) -> VisitFlow<Option<TypeAnnotation>> {
        ControlFlow::Continue(match annotation {
            TypeAnnotation::Named(node) => self.named_type(node)?.map(TypeAnnotation::Named),
            TypeAnnotation::List(node) => self.list_type(node)?.map(TypeAnnotation::List),
            TypeAnnotation::NonNull(node) => {
                self.non_null_type(node)?.map(TypeAnnotation::NonNull)
            },
        })
    }

    fn nullable_type_annotation(
        &mut self,
        annotation: &NullableTypeAnnotation,
    ) -> VisitFlow<Option<NullableTypeAnnotation>> {
        ControlFlow::Continue(match annotation {
            NullableTypeAnnotation::Named(node) => {
                self.named_type(node)?.map(NullableTypeAnnotation::Named)
            },
            NullableTypeAnnotation::List(node) => {
                self.list_type(node)?.map(NullableTypeAnnotation::List)
            },
        })
    }

    fn schema_definition(
        &mut self,
        definition: &SchemaDefinition,
    ) -> VisitFlow<Option<SchemaDefinition>> {
        ControlFlow::Continue(match definition {
            SchemaDefinition::Type(node) => {
                self.type_definition(node)?.map(SchemaDefinition::Type)
            },
            SchemaDefinition::Interface(node) => {
                self.interface_definition(node)?.map(SchemaDefinition::Interface)
            },
            SchemaDefinition::Union(node) => {
                self.union_definition(node)?.map(SchemaDefinition::Union)
            },
            SchemaDefinition::Scalar(node) => {
                self.scalar_definition(node)?.map(SchemaDefinition::Scalar)
            },
            SchemaDefinition::Enum(node) => {
                self.enum_definition(node)?.map(SchemaDefinition::Enum)
            },
            SchemaDefinition::InputObject(node) => {
                self.input_object_definition(node)?.map(SchemaDefinition::InputObject)
            },
        })
    }

    // =========================================================================
    // Executable nodes
    // =========================================================================

    fn name(&mut self, node: &Arc<Name>) -> VisitFlow<Option<Arc<Name>>> {
        self.leaf(node, R::enter_name, R::leave_name)
    }

    fn document(&mut self, node: &Arc<Document>) -> VisitFlow<Option<Arc<Document>>> {
        let Some(node) = self.rewriter.enter_document(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let definitions = self.list(&node.definitions, Self::definition)?;
        if emptied(&definitions) {
            return ControlFlow::Continue(None);
        }
        self.rewriter.leave_document(node.update(definitions))
    }

    fn operation_definition(
        &mut self,
        node: &Arc<OperationDefinition>,
    ) -> VisitFlow<Option<Arc<OperationDefinition>>> {
        let Some(node) = self.rewriter.enter_operation_definition(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let name = self.optional(&node.name, Self::name)?;
        let variable_definitions =
            self.list(&node.variable_definitions, Self::variable_definition)?;
        let directives = self.list(&node.directives, Self::directive)?;
        let Some(selection_set) = self.selection_set(&node.selection_set)? else {
            return ControlFlow::Continue(None);
        };
        self.rewriter.leave_operation_definition(node.update(
            name,
            variable_definitions,
            directives,
            selection_set,
        ))
    }

    fn variable_definition(
        &mut self,
        node: &Arc<VariableDefinition>,
    ) -> VisitFlow<Option<Arc<VariableDefinition>>> {
        let Some(node) = self.rewriter.enter_variable_definition(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let Some(variable) = self.variable(&node.variable)? else {
            return ControlFlow::Continue(None);
        };
        let Some(var_type) = self.type_annotation(&node.var_type)? else {
            return ControlFlow::Continue(None);
        };
        let default_value = self.optional(&node.default_value, Self::value)?;
        self.rewriter
            .leave_variable_definition(node.update(variable, var_type, default_value))
    }

    fn variable(&mut self, node: &Arc<Variable>) -> VisitFlow<Option<Arc<Variable>>> {
        let Some(node) = self.rewriter.enter_variable(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let Some(name) = self.name(&node.name)? else {
            return ControlFlow::Continue(None);
        };
        self.rewriter.leave_variable(node.update(name))
    }

    fn selection_set(&mut self, node: &Arc<SelectionSet>) -> VisitFlow<Option<Arc<SelectionSet>>> {
        let Some(node) = self.rewriter.enter_selection_set(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let selections = self.list(&node.selections, Self::selection)?;
        if emptied(&selections) {
            return ControlFlow::Continue(None);
        }
        self.rewriter.leave_selection_set(node.update(selections))
    }

    fn field(&mut self, node: &Arc<Field>) -> VisitFlow<Option<Arc<Field>>> {
        let Some(node) = self.rewriter.enter_field(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let alias = self.optional(&node.alias, Self::name)?;
        let Some(name) = self.name(&node.name)? else {
            return ControlFlow::Continue(None);
        };
        let arguments = self.list(&node.arguments, Self::argument)?;
        let directives = self.list(&node.directives, Self::directive)?;
        let selection_set = self.optional(&node.selection_set, Self::selection_set)?;
        self.rewriter.leave_field(node.update(
            alias,
            name,
            arguments,
            directives,
            selection_set,
        ))
    }

    fn argument(&mut self, node: &Arc<Argument>) -> VisitFlow<Option<Arc<Argument>>> {
        let Some(node) = self.rewriter.enter_argument(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let Some(name) = self.name(&node.name)? else {
            return ControlFlow::Continue(None);
        };
        let Some(value) = self.value(&node.value)? else {
            return ControlFlow::Continue(None);
        };
        self.rewriter.leave_argument(node.update(name, value))
    }

    fn fragment_spread(
        &mut self,
        node: &Arc<FragmentSpread>,
    ) -> VisitFlow<Option<Arc<FragmentSpread>>> {
        let Some(node) = self.rewriter.enter_fragment_spread(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let Some(name) = self.name(&node.name)? else {
            return ControlFlow::Continue(None);
        };
        let directives = self.list(&node.directives, Self::directive)?;
        self.rewriter.leave_fragment_spread(node.update(name, directives))
    }

    fn inline_fragment(
        &mut self,
        node: &Arc<InlineFragment>,
    ) -> VisitFlow<Option<Arc<InlineFragment>>> {
        let Some(node) = self.rewriter.enter_inline_fragment(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let Some(type_condition) = self.named_type(&node.type_condition)? else {
            return ControlFlow::Continue(None);
        };
        let directives = self.list(&node.directives, Self::directive)?;
        let Some(selection_set) = self.selection_set(&node.selection_set)? else {
            return ControlFlow::Continue(None);
        };
        self.rewriter
            .leave_inline_fragment(node.update(type_condition, directives, selection_set))
    }

    fn fragment_definition(
        &mut self,
        node: &Arc<FragmentDefinition>,
    ) -> VisitFlow<Option<Arc<FragmentDefinition>>> {
        let Some(node) = self.rewriter.enter_fragment_definition(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let Some(name) = self.name(&node.name)? else {
            return ControlFlow::Continue(None);
        };
        let Some(type_condition) = self.named_type(&node.type_condition)? else {
            return ControlFlow::Continue(None);
        };
        let directives = self.list(&node.directives, Self::directive)?;
        let Some(selection_set) = self.selection_set(&node.selection_set)? else {
            return ControlFlow::Continue(None);
        };
        self.rewriter.leave_fragment_definition(node.update(
            name,
            type_condition,
            directives,
            selection_set,
        ))
    }

    fn list_value(&mut self, node: &Arc<ListValue>) -> VisitFlow<Option<Arc<ListValue>>> {
        let Some(node) = self.rewriter.enter_list_value(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let values = self.list(&node.values, Self::value)?;
        self.rewriter.leave_list_value(node.update(values))
    }

    fn object_value(&mut self, node: &Arc<ObjectValue>) -> VisitFlow<Option<Arc<ObjectValue>>> {
        let Some(node) = self.rewriter.enter_object_value(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let fields = self.list(&node.fields, Self::object_field)?;
        self.rewriter.leave_object_value(node.update(fields))
    }

    fn object_field(&mut self, node: &Arc<ObjectField>) -> VisitFlow<Option<Arc<ObjectField>>> {
        let Some(node) = self.rewriter.enter_object_field(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let Some(name) = self.name(&node.name)? else {
            return ControlFlow::Continue(None);
        };
        let Some(value) = self.value(&node.value)? else {
            return ControlFlow::Continue(None);
        };
        self.rewriter.leave_object_field(node.update(name, value))
    }

    fn directive(&mut self, node: &Arc<Directive>) -> VisitFlow<Option<Arc<Directive>>> {
        let Some(node) = self.rewriter.enter_directive(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let Some(name) = self.name(&node.name)? else {
            return ControlFlow::Continue(None);
        };
        let arguments = self.list(&node.arguments, Self::argument)?;
        self.rewriter.leave_directive(node.update(name, arguments))
    }

    fn named_type(&mut self, node: &Arc<NamedType>) -> VisitFlow<Option<Arc<NamedType>>> {
        let Some(node) = self.rewriter.enter_named_type(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let Some(name) = self.name(&node.name)? else {
            return ControlFlow::Continue(None);
        };
        self.rewriter.leave_named_type(node.update(name))
    }

    fn list_type(&mut self, node: &Arc<ListType>) -> VisitFlow<Option<Arc<ListType>>> {
        let Some(node) = self.rewriter.enter_list_type(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let Some(item_type) = self.type_annotation(&node.item_type)? else {
            return ControlFlow::Continue(None);
        };
        self.rewriter.leave_list_type(node.update(item_type))
    }

    fn non_null_type(&mut self, node: &Arc<NonNullType>) -> VisitFlow<Option<Arc<NonNullType>>> {
        let Some(node) = self.rewriter.enter_non_null_type(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let Some(inner_type) = self.nullable_type_annotation(&node.inner_type)? else {
            return ControlFlow::Continue(None);
        };
        self.rewriter.leave_non_null_type(node.update(inner_type))
    }

    // =========================================================================
    // Schema nodes
    // =========================================================================

    fn schema_document(
        &mut self,
        node: &Arc<SchemaDocument>,
    ) -> VisitFlow<Option<Arc<SchemaDocument>>> {
        let Some(node) = self.rewriter.enter_schema_document(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let definitions = self.list(&node.definitions, Self::schema_definition)?;
        if emptied(&definitions) {
            return ControlFlow::Continue(None);
        }
        self.rewriter.leave_schema_document(node.update(definitions))
    }

    fn type_definition(
        &mut self,
        node: &Arc<TypeDefinition>,
    ) -> VisitFlow<Option<Arc<TypeDefinition>>> {
        let Some(node) = self.rewriter.enter_type_definition(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let Some(name) = self.name(&node.name)? else {
            return ControlFlow::Continue(None);
        };
        let interfaces = self.list(&node.interfaces, Self::named_type)?;
        let fields = self.list(&node.fields, Self::field_definition)?;
        self.rewriter
            .leave_type_definition(node.update(name, interfaces, fields))
    }

    fn field_definition(
        &mut self,
        node: &Arc<FieldDefinition>,
    ) -> VisitFlow<Option<Arc<FieldDefinition>>> {
        let Some(node) = self.rewriter.enter_field_definition(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let Some(name) = self.name(&node.name)? else {
            return ControlFlow::Continue(None);
        };
        let arguments = self.list(&node.arguments, Self::argument_definition)?;
        let Some(field_type) = self.type_annotation(&node.field_type)? else {
            return ControlFlow::Continue(None);
        };
        self.rewriter
            .leave_field_definition(node.update(name, arguments, field_type))
    }

    fn argument_definition(
        &mut self,
        node: &Arc<ArgumentDefinition>,
    ) -> VisitFlow<Option<Arc<ArgumentDefinition>>> {
        let Some(node) = self.rewriter.enter_argument_definition(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let Some(name) = self.name(&node.name)? else {
            return ControlFlow::Continue(None);
        };
        let Some(arg_type) = self.type_annotation(&node.arg_type)? else {
            return ControlFlow::Continue(None);
        };
        let default_value = self.optional(&node.default_value, Self::value)?;
        self.rewriter
            .leave_argument_definition(node.update(name, arg_type, default_value))
    }

    fn interface_definition(
        &mut self,
        node: &Arc<InterfaceDefinition>,
    ) -> VisitFlow<Option<Arc<InterfaceDefinition>>> {
        let Some(node) = self.rewriter.enter_interface_definition(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let Some(name) = self.name(&node.name)? else {
            return ControlFlow::Continue(None);
        };
        let fields = self.list(&node.fields, Self::field_definition)?;
        self.rewriter.leave_interface_definition(node.update(name, fields))
    }

    fn union_definition(
        &mut self,
        node: &Arc<UnionDefinition>,
    ) -> VisitFlow<Option<Arc<UnionDefinition>>> {
        let Some(node) = self.rewriter.enter_union_definition(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let Some(name) = self.name(&node.name)? else {
            return ControlFlow::Continue(None);
        };
        let types = self.list(&node.types, Self::named_type)?;
        if emptied(&types) {
            return ControlFlow::Continue(None);
        }
        self.rewriter.leave_union_definition(node.update(name, types))
    }

    fn scalar_definition(
        &mut self,
        node: &Arc<ScalarDefinition>,
    ) -> VisitFlow<Option<Arc<ScalarDefinition>>> {
        let Some(node) = self.rewriter.enter_scalar_definition(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let Some(name) = self.name(&node.name)? else {
            return ControlFlow::Continue(None);
        };
        self.rewriter.leave_scalar_definition(node.update(name))
    }

    fn enum_definition(
        &mut self,
        node: &Arc<EnumDefinition>,
    ) -> VisitFlow<Option<Arc<EnumDefinition>>> {
        let Some(node) = self.rewriter.enter_enum_definition(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let Some(name) = self.name(&node.name)? else {
            return ControlFlow::Continue(None);
        };
        let values = self.list(&node.values, Self::enum_value_definition)?;
        if emptied(&values) {
            return ControlFlow::Continue(None);
        }
        self.rewriter.leave_enum_definition(node.update(name, values))
    }

    fn enum_value_definition(
        &mut self,
        node: &Arc<EnumValueDefinition>,
    ) -> VisitFlow<Option<Arc<EnumValueDefinition>>> {
        let Some(node) = self.rewriter.enter_enum_value_definition(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let Some(name) = self.name(&node.name)? else {
            return ControlFlow::Continue(None);
        };
        self.rewriter.leave_enum_value_definition(node.update(name))
    }

    fn input_object_definition(
        &mut self,
        node: &Arc<InputObjectDefinition>,
    ) -> VisitFlow<Option<Arc<InputObjectDefinition>>> {
        let Some(node) = self.rewriter.enter_input_object_definition(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let Some(name) = self.name(&node.name)? else {
            return ControlFlow::Continue(None);
        };
        let fields = self.list(&node.fields, Self::input_field_definition)?;
        self.rewriter.leave_input_object_definition(node.update(name, fields))
    }

    fn input_field_definition(
        &mut self,
        node: &Arc<InputFieldDefinition>,
    ) -> VisitFlow<Option<Arc<InputFieldDefinition>>> {
        let Some(node) = self.rewriter.enter_input_field_definition(node.clone())? else {
            return ControlFlow::Continue(None);
        };
        let Some(name) = self.name(&node.name)? else {
            return ControlFlow::Continue(None);
        };
        let Some(field_type) = self.type_annotation(&node.field_type)? else {
            return ControlFlow::Continue(None);
        };
        let default_value = self.optional(&node.default_value, Self::value)?;
        self.rewriter
            .leave_input_field_definition(node.update(name, field_type, default_value))
    }
}

/// `true` when a list was rewritten down to nothing.
fn emptied<T>(list: &Option<Vec<T>>) -> bool {
    list.as_ref().is_some_and(Vec::is_empty)
}

fn into_node<K>(node: Option<Arc<K>>) -> Option<Node>
where
    Arc<K>: Into<Node>,
{
    node.map(Into::into)
}

impl<R: Rewriter + ?Sized> Visitor for Rewrite<'_, R> {
    type Output = VisitFlow<Option<Node>>;

    fn visit_default(&mut self, node: &Node) -> Self::Output {
        node.accept(self)
    }

    fn visit_name(&mut self, node: &Arc<Name>) -> Self::Output {
        let rewritten = self.name(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_document(&mut self, node: &Arc<Document>) -> Self::Output {
        let rewritten = self.document(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_operation_definition(&mut self, node: &Arc<OperationDefinition>) -> Self::Output {
        let rewritten = self.operation_definition(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_variable_definition(&mut self, node: &Arc<VariableDefinition>) -> Self::Output {
        let rewritten = self.variable_definition(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_variable(&mut self, node: &Arc<Variable>) -> Self::Output {
        let rewritten = self.variable(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_selection_set(&mut self, node: &Arc<SelectionSet>) -> Self::Output {
        let rewritten = self.selection_set(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_field(&mut self, node: &Arc<Field>) -> Self::Output {
        let rewritten = self.field(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_argument(&mut self, node: &Arc<Argument>) -> Self::Output {
        let rewritten = self.argument(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_fragment_spread(&mut self, node: &Arc<FragmentSpread>) -> Self::Output {
        let rewritten = self.fragment_spread(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_inline_fragment(&mut self, node: &Arc<InlineFragment>) -> Self::Output {
        let rewritten = self.inline_fragment(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_fragment_definition(&mut self, node: &Arc<FragmentDefinition>) -> Self::Output {
        let rewritten = self.fragment_definition(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_int_value(&mut self, node: &Arc<IntValue>) -> Self::Output {
        let rewritten = self.leaf(node, R::enter_int_value, R::leave_int_value)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_float_value(&mut self, node: &Arc<FloatValue>) -> Self::Output {
        let rewritten = self.leaf(node, R::enter_float_value, R::leave_float_value)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_string_value(&mut self, node: &Arc<StringValue>) -> Self::Output {
        let rewritten = self.leaf(node, R::enter_string_value, R::leave_string_value)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_boolean_value(&mut self, node: &Arc<BooleanValue>) -> Self::Output {
        let rewritten = self.leaf(node, R::enter_boolean_value, R::leave_boolean_value)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_enum_value(&mut self, node: &Arc<EnumValue>) -> Self::Output {
        let rewritten = self.leaf(node, R::enter_enum_value, R::leave_enum_value)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_list_value(&mut self, node: &Arc<ListValue>) -> Self::Output {
        let rewritten = self.list_value(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_object_value(&mut self, node: &Arc<ObjectValue>) -> Self::Output {
        let rewritten = self.object_value(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_object_field(&mut self, node: &Arc<ObjectField>) -> Self::Output {
        let rewritten = self.object_field(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_directive(&mut self, node: &Arc<Directive>) -> Self::Output {
        let rewritten = self.directive(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_named_type(&mut self, node: &Arc<NamedType>) -> Self::Output {
        let rewritten = self.named_type(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_list_type(&mut self, node: &Arc<ListType>) -> Self::Output {
        let rewritten = self.list_type(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_non_null_type(&mut self, node: &Arc<NonNullType>) -> Self::Output {
        let rewritten = self.non_null_type(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_schema_document(&mut self, node: &Arc<SchemaDocument>) -> Self::Output {
        let rewritten = self.schema_document(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_type_definition(&mut self, node: &Arc<TypeDefinition>) -> Self::Output {
        let rewritten = self.type_definition(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_field_definition(&mut self, node: &Arc<FieldDefinition>) -> Self::Output {
        let rewritten = self.field_definition(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_argument_definition(&mut self, node: &Arc<ArgumentDefinition>) -> Self::Output {
        let rewritten = self.argument_definition(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_interface_definition(&mut self, node: &Arc<InterfaceDefinition>) -> Self::Output {
        let rewritten = self.interface_definition(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_union_definition(&mut self, node: &Arc<UnionDefinition>) -> Self::Output {
        let rewritten = self.union_definition(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_scalar_definition(&mut self, node: &Arc<ScalarDefinition>) -> Self::Output {
        let rewritten = self.scalar_definition(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_enum_definition(&mut self, node: &Arc<EnumDefinition>) -> Self::Output {
        let rewritten = self.enum_definition(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_enum_value_definition(&mut self, node: &Arc<EnumValueDefinition>) -> Self::Output {
        let rewritten = self.enum_value_definition(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_input_object_definition(&mut self, node: &Arc<InputObjectDefinition>) -> Self::Output {
        let rewritten = self.input_object_definition(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }

    fn visit_input_field_definition(&mut self, node: &Arc<InputFieldDefinition>) -> Self::Output {
        let rewritten = self.input_field_definition(node)?;
        ControlFlow::Continue(into_node(rewritten))
    }
}
