//! Single-pass syntax index over a parsed file.
//!
//! One pre-order walk collects every construct the signal extractors look
//! at, so adding an extractor never adds a tree traversal. Collections are
//! in source order.

use smallvec::SmallVec;
use tree_sitter::Node;

use super::parsed_file::{line_of, ParsedFile};

/// How a top-level name was bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Function,
    Const,
    Let,
    Var,
}

/// A top-level binding (possibly behind `export` / `export default`).
#[derive(Debug, Clone)]
pub struct Declaration<'a> {
    pub name: &'a str,
    pub kind: DeclarationKind,
    /// The function node for function declarations, or the bound
    /// arrow/function expression for variables.
    pub function: Option<Node<'a>>,
    pub line: u32,
}

/// Shape of a call's callee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Callee<'a> {
    /// `foo(...)`
    Identifier(&'a str),
    /// `a.b.foo(...)`, carrying the final property name.
    Member(&'a str),
    Other,
}

#[derive(Debug, Clone)]
pub struct CallExpr<'a> {
    pub callee: Callee<'a>,
    /// Full source text of the callee expression.
    pub callee_text: &'a str,
    /// Argument expressions, comments excluded.
    pub arguments: SmallVec<[Node<'a>; 4]>,
    pub line: u32,
}

impl<'a> CallExpr<'a> {
    /// Identifier name, or the final property of a member callee.
    pub fn callee_name(&self) -> Option<&'a str> {
        match self.callee {
            Callee::Identifier(name) | Callee::Member(name) => Some(name),
            Callee::Other => None,
        }
    }
}

/// An ES `import ... from "<specifier>"` declaration.
#[derive(Debug, Clone)]
pub struct ImportDecl<'a> {
    /// Module specifier with quotes removed.
    pub specifier: &'a str,
    pub line: u32,
}

/// A named JSX attribute (spread attributes are not included).
#[derive(Debug, Clone)]
pub struct JsxAttr<'a> {
    pub name: &'a str,
    /// The attribute value node: a string, a `jsx_expression`, or an element.
    pub value: Option<Node<'a>>,
    pub line: u32,
}

impl<'a> JsxAttr<'a> {
    /// The expression inside a `{...}` value, if the value is one.
    pub fn expression(&self) -> Option<Node<'a>> {
        let value = self.value?;
        if value.kind() != "jsx_expression" {
            return None;
        }
        named_children(value).into_iter().next()
    }
}

/// A non-self-closing JSX opening tag. Fragments are skipped.
#[derive(Debug, Clone)]
pub struct JsxOpening<'a> {
    pub tag: &'a str,
    pub line: u32,
}

/// Any identifier-like token: bindings, references, property names.
#[derive(Debug, Clone, Copy)]
pub struct IdentRef<'a> {
    pub name: &'a str,
    pub line: u32,
}

const IDENTIFIER_KINDS: &[&str] = &[
    "identifier",
    "property_identifier",
    "shorthand_property_identifier",
    "shorthand_property_identifier_pattern",
];

const FUNCTION_VALUE_KINDS: &[&str] = &[
    "arrow_function",
    "function_expression",
    "function",
    "generator_function",
];

/// Everything the extractors need from one file.
#[derive(Debug, Default)]
pub struct SyntaxIndex<'a> {
    pub declarations: Vec<Declaration<'a>>,
    pub calls: Vec<CallExpr<'a>>,
    pub imports: Vec<ImportDecl<'a>>,
    pub attributes: Vec<JsxAttr<'a>>,
    pub opening_elements: Vec<JsxOpening<'a>>,
    pub identifiers: Vec<IdentRef<'a>>,
    /// String literals of the leading directive prologue, unquoted.
    pub directives: Vec<&'a str>,
}

impl<'a> SyntaxIndex<'a> {
    pub fn build(file: &'a ParsedFile) -> Self {
        let mut index = SyntaxIndex::default();
        let root = file.root();
        index.collect_prologue(file, root);
        for child in named_children(root) {
            index.collect_declaration(file, child);
        }
        index.walk(file, root);
        index
    }

    fn walk(&mut self, file: &'a ParsedFile, root: Node<'a>) {
        let mut cursor = root.walk();
        loop {
            self.visit(file, cursor.node());
            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return;
                }
            }
        }
    }

    fn visit(&mut self, file: &'a ParsedFile, node: Node<'a>) {
        let kind = node.kind();
        match kind {
            "call_expression" => self.collect_call(file, node),
            "import_statement" => {
                if let Some(source) = node.child_by_field_name("source") {
                    self.imports.push(ImportDecl {
                        specifier: unquote(file.text(source)),
                        line: line_of(node),
                    });
                }
            }
            "jsx_attribute" => {
                let parts = named_children(node);
                if let Some(name) = parts.first() {
                    self.attributes.push(JsxAttr {
                        name: file.text(*name),
                        value: parts.get(1).copied(),
                        line: line_of(node),
                    });
                }
            }
            "jsx_opening_element" => {
                if let Some(name) = node.child_by_field_name("name") {
                    self.opening_elements.push(JsxOpening {
                        tag: file.text(name),
                        line: line_of(node),
                    });
                }
            }
            _ if IDENTIFIER_KINDS.contains(&kind) => {
                self.identifiers.push(IdentRef {
                    name: file.text(node),
                    line: line_of(node),
                });
            }
            _ => {}
        }
    }

    fn collect_call(&mut self, file: &'a ParsedFile, node: Node<'a>) {
        let Some(function) = node.child_by_field_name("function") else {
            return;
        };
        let callee = match function.kind() {
            "identifier" => Callee::Identifier(file.text(function)),
            "member_expression" => function
                .child_by_field_name("property")
                .map_or(Callee::Other, |p| Callee::Member(file.text(p))),
            _ => Callee::Other,
        };
        let arguments = node
            .child_by_field_name("arguments")
            .filter(|a| a.kind() == "arguments")
            .map(|a| named_children(a).into_iter().collect())
            .unwrap_or_default();
        self.calls.push(CallExpr {
            callee,
            callee_text: file.text(function),
            arguments,
            line: line_of(node),
        });
    }

    fn collect_declaration(&mut self, file: &'a ParsedFile, node: Node<'a>) {
        match node.kind() {
            "function_declaration" | "generator_function_declaration" => {
                self.push_function(file, node);
            }
            // `export default function Name() {}` may surface as an expression.
            "function_expression" | "function" => self.push_function(file, node),
            "lexical_declaration" | "variable_declaration" => {
                let kind = binding_kind(node);
                for declarator in named_children(node) {
                    if declarator.kind() != "variable_declarator" {
                        continue;
                    }
                    let Some(name) = declarator
                        .child_by_field_name("name")
                        .filter(|n| n.kind() == "identifier")
                    else {
                        continue;
                    };
                    let function = declarator
                        .child_by_field_name("value")
                        .filter(|v| FUNCTION_VALUE_KINDS.contains(&v.kind()));
                    self.declarations.push(Declaration {
                        name: file.text(name),
                        kind,
                        function,
                        line: line_of(declarator),
                    });
                }
            }
            "export_statement" => {
                for child in named_children(node) {
                    self.collect_declaration(file, child);
                }
            }
            _ => {}
        }
    }

    fn push_function(&mut self, file: &'a ParsedFile, node: Node<'a>) {
        if let Some(name) = node.child_by_field_name("name") {
            self.declarations.push(Declaration {
                name: file.text(name),
                kind: DeclarationKind::Function,
                function: Some(node),
                line: line_of(node),
            });
        }
    }

    fn collect_prologue(&mut self, file: &'a ParsedFile, root: Node<'a>) {
        for statement in named_children(root) {
            if statement.kind() != "expression_statement" {
                break;
            }
            match named_children(statement).as_slice() {
                [literal] if literal.kind() == "string" => {
                    self.directives.push(unquote(file.text(*literal)));
                }
                _ => break,
            }
        }
    }
}

/// Named children of `node`, comments and other extras excluded.
pub fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|n| !n.is_extra())
        .collect()
}

fn binding_kind(node: Node<'_>) -> DeclarationKind {
    let mut cursor = node.walk();
    let keyword = node.children(&mut cursor).next().map(|n| n.kind());
    match keyword {
        Some("const") => DeclarationKind::Const,
        Some("let") => DeclarationKind::Let,
        _ => DeclarationKind::Var,
    }
}

fn unquote(text: &str) -> &str {
    text.trim_matches(|c| c == '"' || c == '\'' || c == '`')
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn parse(source: &str) -> ParsedFile {
        ParsedFile::parse(source, Path::new("test.tsx")).unwrap()
    }

    #[test]
    fn test_top_level_declarations() {
        let file = parse(
            "function A() { return <div/>; }\n\
             export const B = () => <span/>;\n\
             let c = 1;\n\
             export default function D() {}\n\
             function outer() { function Inner() {} }\n",
        );
        let syntax = file.syntax();
        let names: Vec<_> = syntax
            .declarations
            .iter()
            .map(|d| (d.name, d.kind, d.function.is_some()))
            .collect();
        assert_eq!(
            names,
            vec![
                ("A", DeclarationKind::Function, true),
                ("B", DeclarationKind::Const, true),
                ("c", DeclarationKind::Let, false),
                ("D", DeclarationKind::Function, true),
                ("outer", DeclarationKind::Function, true),
            ]
        );
    }

    #[test]
    fn test_calls_and_callees() {
        let file = parse("useEffect(() => {}, []);\nReact.useLayoutEffect(f);\n(x || y)();\n");
        let syntax = file.syntax();
        assert_eq!(syntax.calls.len(), 3);
        assert_eq!(syntax.calls[0].callee, Callee::Identifier("useEffect"));
        assert_eq!(syntax.calls[0].arguments.len(), 2);
        assert_eq!(syntax.calls[1].callee, Callee::Member("useLayoutEffect"));
        assert_eq!(syntax.calls[1].callee_text, "React.useLayoutEffect");
        assert_eq!(syntax.calls[1].line, 2);
        assert_eq!(syntax.calls[2].callee, Callee::Other);
    }

    #[test]
    fn test_imports_are_unquoted() {
        let file = parse("import a from 'recharts';\nimport { b } from \"./b\";\nimport './c.css';\n");
        let specs: Vec<_> = file.syntax().imports.iter().map(|i| i.specifier).collect();
        assert_eq!(specs, vec!["recharts", "./b", "./c.css"]);
    }

    #[test]
    fn test_jsx_attributes_and_openings() {
        let file = parse(
            "const x = <Ctx.Provider value={v}><b onClick={f} title=\"t\" disabled /></Ctx.Provider>;",
        );
        let syntax = file.syntax();
        let attrs: Vec<_> = syntax.attributes.iter().map(|a| a.name).collect();
        assert_eq!(attrs, vec!["value", "onClick", "title", "disabled"]);
        assert!(syntax.attributes[0].expression().is_some());
        assert!(syntax.attributes[2].expression().is_none());
        assert!(syntax.attributes[3].value.is_none());
        let tags: Vec<_> = syntax.opening_elements.iter().map(|o| o.tag).collect();
        assert_eq!(tags, vec!["Ctx.Provider"]);
    }

    #[test]
    fn test_directive_prologue() {
        let file = parse("// header\n'use client';\n\"use strict\";\nconst a = 'use client';\n");
        assert_eq!(file.syntax().directives, vec!["use client", "use strict"]);

        let late = parse("const a = 1;\n'use client';\n");
        assert!(late.syntax().directives.is_empty());
    }
}
