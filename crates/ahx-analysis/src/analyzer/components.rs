//! Component detection over top-level declarations.

use tree_sitter::Node;

use crate::parsers::syntax::named_children;
use crate::parsers::{Declaration, DeclarationKind, SyntaxIndex};

const MARKUP_KINDS: &[&str] = &["jsx_element", "jsx_self_closing_element", "jsx_fragment"];

/// A component is a top-level function declaration or `const` binding of a
/// function, whose name starts with an uppercase ASCII letter, and whose
/// body holds a `return` of markup. Expression-bodied arrows have no return
/// statement and do not qualify.
pub fn is_component(decl: &Declaration<'_>) -> bool {
    let binds_function = matches!(decl.kind, DeclarationKind::Function | DeclarationKind::Const);
    binds_function
        && decl.name.starts_with(|c: char| c.is_ascii_uppercase())
        && decl.function.is_some_and(returns_markup)
}

/// True when any `return` statement under `function` (nested functions
/// included) yields markup, looking through parentheses.
pub fn returns_markup(function: Node<'_>) -> bool {
    let mut cursor = function.walk();
    loop {
        let node = cursor.node();
        if node.kind() == "return_statement" && returned_value(node).is_some_and(is_markup) {
            return true;
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.node() == function {
                return false;
            }
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return false;
            }
        }
    }
}

/// Component names in declaration order, without duplicates.
pub fn component_names(syntax: &SyntaxIndex<'_>) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for decl in syntax.declarations.iter().filter(|d| is_component(d)) {
        if !names.iter().any(|n| n == decl.name) {
            names.push(decl.name.to_string());
        }
    }
    names
}

fn returned_value(statement: Node<'_>) -> Option<Node<'_>> {
    let mut value = named_children(statement).into_iter().next()?;
    while value.kind() == "parenthesized_expression" {
        value = named_children(value).into_iter().next()?;
    }
    Some(value)
}

fn is_markup(node: Node<'_>) -> bool {
    MARKUP_KINDS.contains(&node.kind())
}
