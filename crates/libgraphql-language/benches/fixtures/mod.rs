use std::fmt::Write;

pub const SIMPLE_QUERY: &str = r#"query Hero($episode: Episode = JEDI) {
  hero(episode: $episode) {
    name
    friends {
      name
    }
  }
}
"#;

pub const COMPLEX_QUERY: &str = r#"query Search($text: String!, $first: Int = 10) @cached(ttl: 60) {
  search(text: $text, first: $first, filter: {kinds: [HUMAN, DROID], minScore: 0.5}) {
    ... on Human {
      id
      name
      height(unit: METER)
      friends {
        ...CharacterFields
      }
    }
    ... on Droid @include(if: true) {
      id
      primaryFunction
    }
  }
}

fragment CharacterFields on Character {
  id
  name
  appearsIn
  nickname: name
}
"#;

/// Generates a query with `depth` nested selection sets.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 30);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        let field = if level == 0 { "root" } else { "child" };
        let _ = writeln!(out, "{indent}{field} {{");
        let _ = writeln!(out, "{indent}  id");
    }
    let _ = writeln!(out, "{}name", "  ".repeat(depth + 1));
    for level in (0..depth).rev() {
        let _ = writeln!(out, "{}}}", "  ".repeat(level + 1));
    }
    out.push_str("}\n");
    out
}

/// Generates a document of `count` named queries.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 80);
    for i in 0..count {
        let _ = writeln!(out, "query Operation{i}($id: ID!) {{");
        let _ = writeln!(out, "  node(id: $id) {{");
        let _ = writeln!(out, "    id");
        let _ = writeln!(out, "    name");
        let _ = writeln!(out, "    field{i}: description");
        let _ = writeln!(out, "  }}");
        let _ = writeln!(out, "}}\n");
    }
    out
}

/// Generates a schema with `count` object types plus one of every other
/// definition kind per ten types.
pub fn synthetic_schema(count: usize) -> String {
    let mut out = String::with_capacity(count * 200);
    for i in 0..count {
        let _ = writeln!(out, "type Type{i} implements Node {{");
        let _ = writeln!(out, "  id: ID!");
        let _ = writeln!(out, "  name(locale: String = \"en\"): String");
        let _ = writeln!(out, "  tags(first: Int = 10, after: String): [String!]!");
        let _ = writeln!(out, "  next: Type{}", (i + 1) % count);
        let _ = writeln!(out, "}}\n");
        if i % 10 == 0 {
            let _ = writeln!(out, "union Union{i} = Type{i} | Type{}\n", (i + 1) % count);
            let _ = writeln!(out, "enum Enum{i} {{\n  ONE\n  TWO\n  THREE\n}}\n");
            let _ = writeln!(out, "input Input{i} {{\n  id: ID!\n  limit: Int = 5\n}}\n");
            let _ = writeln!(out, "scalar Scalar{i}\n");
        }
    }
    out.push_str("interface Node {\n  id: ID!\n}\n");
    out
}
