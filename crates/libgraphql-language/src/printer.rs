use crate::ast::*;
use crate::visitor::Visitor;
use smallvec::SmallVec;
use std::fmt::Write;
use std::sync::Arc;

/// Prints any node in canonical form.
///
/// Blocks are indented by two spaces, list items are separated by `", "`
/// and top-level definitions by a blank line. Printing a parsed document
/// and parsing the output again yields a tree that prints identically.
pub fn print<N: AstNode>(node: &N) -> String {
    node.accept(&mut Printer)
}

/// The [`Visitor`] behind [`print`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Printer;

impl Printer {
    fn each<N: AstNode>(&mut self, nodes: &[N]) -> SmallVec<[String; 4]> {
        nodes.iter().map(|node| node.accept(self)).collect()
    }

    fn optional<N: AstNode>(&mut self, node: &Option<N>) -> String {
        node.as_ref().map(|node| node.accept(self)).unwrap_or_default()
    }
}

impl Visitor for Printer {
    type Output = String;

    fn visit_default(&mut self, node: &Node) -> String {
        node.accept(self)
    }

    fn visit_name(&mut self, node: &Arc<Name>) -> String {
        node.value.clone()
    }

    // =========================================================================
    // Executable documents
    // =========================================================================

    fn visit_document(&mut self, node: &Arc<Document>) -> String {
        let definitions = self.each(&node.definitions);
        format!("{}\n", join(definitions, "\n\n"))
    }

    fn visit_operation_definition(&mut self, node: &Arc<OperationDefinition>) -> String {
        let selection_set = node.selection_set.accept(self);
        if node.operation == OperationType::Query
            && node.name.is_none()
            && node.variable_definitions.is_empty()
            && node.directives.is_empty()
        {
            return selection_set;
        }
        let name = self.optional(&node.name);
        let variable_definitions = self.each(&node.variable_definitions);
        let directives = self.each(&node.directives);
        join(
            [
                node.operation.as_str().to_string(),
                name + &wrap("(", &join(variable_definitions, ", "), ")"),
                join(directives, " "),
                selection_set,
            ],
            " ",
        )
    }

    fn visit_variable_definition(&mut self, node: &Arc<VariableDefinition>) -> String {
        let variable = node.variable.accept(self);
        let var_type = node.var_type.accept(self);
        let default_value = self.optional(&node.default_value);
        format!("{variable}: {var_type}{}", wrap(" = ", &default_value, ""))
    }

    fn visit_variable(&mut self, node: &Arc<Variable>) -> String {
        format!("${}", node.name.value)
    }

    fn visit_selection_set(&mut self, node: &Arc<SelectionSet>) -> String {
        let selections = self.each(&node.selections);
        block(selections)
    }

    fn visit_field(&mut self, node: &Arc<Field>) -> String {
        let alias = self.optional(&node.alias);
        let name = node.name.accept(self);
        let arguments = self.each(&node.arguments);
        let directives = self.each(&node.directives);
        let selection_set = self.optional(&node.selection_set);
        join(
            [
                wrap("", &alias, ": ") + &name + &wrap("(", &join(arguments, ", "), ")"),
                join(directives, " "),
                selection_set,
            ],
            " ",
        )
    }

    fn visit_argument(&mut self, node: &Arc<Argument>) -> String {
        format!("{}: {}", node.name.value, node.value.accept(self))
    }

    fn visit_fragment_spread(&mut self, node: &Arc<FragmentSpread>) -> String {
        let directives = self.each(&node.directives);
        format!("...{}{}", node.name.value, wrap(" ", &join(directives, " "), ""))
    }

    fn visit_inline_fragment(&mut self, node: &Arc<InlineFragment>) -> String {
        let type_condition = node.type_condition.accept(self);
        let directives = self.each(&node.directives);
        let selection_set = node.selection_set.accept(self);
        join(
            [
                format!("... on {type_condition}"),
                join(directives, " "),
                selection_set,
            ],
            " ",
        )
    }

    fn visit_fragment_definition(&mut self, node: &Arc<FragmentDefinition>) -> String {
        let type_condition = node.type_condition.accept(self);
        let directives = self.each(&node.directives);
        let selection_set = node.selection_set.accept(self);
        join(
            [
                format!("fragment {} on {type_condition}", node.name.value),
                join(directives, " "),
                selection_set,
            ],
            " ",
        )
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn visit_int_value(&mut self, node: &Arc<IntValue>) -> String {
        node.value.clone()
    }

    fn visit_float_value(&mut self, node: &Arc<FloatValue>) -> String {
        node.value.clone()
    }

    fn visit_string_value(&mut self, node: &Arc<StringValue>) -> String {
        quote_string(&node.value)
    }

    fn visit_boolean_value(&mut self, node: &Arc<BooleanValue>) -> String {
        node.value.to_string()
    }

    fn visit_enum_value(&mut self, node: &Arc<EnumValue>) -> String {
        node.value.clone()
    }

    fn visit_list_value(&mut self, node: &Arc<ListValue>) -> String {
        let values = self.each(&node.values);
        format!("[{}]", join(values, ", "))
    }

    fn visit_object_value(&mut self, node: &Arc<ObjectValue>) -> String {
        let fields = self.each(&node.fields);
        format!("{{{}}}", join(fields, ", "))
    }

    fn visit_object_field(&mut self, node: &Arc<ObjectField>) -> String {
        format!("{}: {}", node.name.value, node.value.accept(self))
    }

    fn visit_directive(&mut self, node: &Arc<Directive>) -> String {
        let arguments = self.each(&node.arguments);
        format!("@{}{}", node.name.value, wrap("(", &join(arguments, ", "), ")"))
    }

    // =========================================================================
    // Types
    // =========================================================================

    fn visit_named_type(&mut self, node: &Arc<NamedType>) -> String {
        node.name.value.clone()
    }

    fn visit_list_type(&mut self, node: &Arc<ListType>) -> String {
        format!("[{}]", node.item_type.accept(self))
    }

    fn visit_non_null_type(&mut self, node: &Arc<NonNullType>) -> String {
        format!("{}!", node.inner_type.accept(self))
    }

    // =========================================================================
    // Schema documents
    // =========================================================================

    fn visit_schema_document(&mut self, node: &Arc<SchemaDocument>) -> String {
        let definitions = self.each(&node.definitions);
        format!("{}\n", join(definitions, "\n\n"))
    }

    fn visit_type_definition(&mut self, node: &Arc<TypeDefinition>) -> String {
        let interfaces = self.each(&node.interfaces);
        let fields = self.each(&node.fields);
        format!(
            "type {} {}{}",
            node.name.value,
            wrap("implements ", &join(interfaces, ", "), " "),
            block(fields),
        )
    }

    fn visit_field_definition(&mut self, node: &Arc<FieldDefinition>) -> String {
        let arguments = self.each(&node.arguments);
        format!(
            "{}{}: {}",
            node.name.value,
            wrap("(", &join(arguments, ", "), ")"),
            node.field_type.accept(self),
        )
    }

    fn visit_argument_definition(&mut self, node: &Arc<ArgumentDefinition>) -> String {
        let arg_type = node.arg_type.accept(self);
        let default_value = self.optional(&node.default_value);
        format!(
            "{}: {arg_type}{}",
            node.name.value,
            wrap(" = ", &default_value, ""),
        )
    }

    fn visit_interface_definition(&mut self, node: &Arc<InterfaceDefinition>) -> String {
        let fields = self.each(&node.fields);
        format!("interface {} {}", node.name.value, block(fields))
    }

    fn visit_union_definition(&mut self, node: &Arc<UnionDefinition>) -> String {
        let types = self.each(&node.types);
        format!("union {} = {}", node.name.value, join(types, " | "))
    }

    fn visit_scalar_definition(&mut self, node: &Arc<ScalarDefinition>) -> String {
        format!("scalar {}", node.name.value)
    }

    fn visit_enum_definition(&mut self, node: &Arc<EnumDefinition>) -> String {
        let values = self.each(&node.values);
        format!("enum {} {}", node.name.value, block(values))
    }

    fn visit_enum_value_definition(&mut self, node: &Arc<EnumValueDefinition>) -> String {
        node.name.value.clone()
    }

    fn visit_input_object_definition(&mut self, node: &Arc<InputObjectDefinition>) -> String {
        let fields = self.each(&node.fields);
        format!("input {} {}", node.name.value, block(fields))
    }

    fn visit_input_field_definition(&mut self, node: &Arc<InputFieldDefinition>) -> String {
        let field_type = node.field_type.accept(self);
        let default_value = self.optional(&node.default_value);
        format!(
            "{}: {field_type}{}",
            node.name.value,
            wrap(" = ", &default_value, ""),
        )
    }
}

/// Joins the non-empty parts with `separator`.
fn join(parts: impl IntoIterator<Item = String>, separator: &str) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<SmallVec<[String; 4]>>()
        .join(separator)
}

/// `start + text + end`, or nothing when `text` is empty.
fn wrap(start: &str, text: &str, end: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("{start}{text}{end}")
    }
}

/// A brace-delimited block with one item per line, indented two spaces.
fn block(items: SmallVec<[String; 4]>) -> String {
    let body = join(items, "\n");
    if body.is_empty() {
        return "{}".to_string();
    }
    format!("{{\n  {}\n}}", body.replace('\n', "\n  "))
}

/// Quotes a string value, escaping everything the lexer would not read
/// back verbatim.
fn quote_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\u{0008}' => quoted.push_str("\\b"),
            '\u{000C}' => quoted.push_str("\\f"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            ch if ch.is_control() || ch == '\u{2028}' || ch == '\u{2029}' => {
                let _ = write!(quoted, "\\u{:04X}", ch as u32);
            },
            ch => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}
