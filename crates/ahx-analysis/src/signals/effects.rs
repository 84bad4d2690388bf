//! effectHeaviness: statement count of `useEffect` / `useLayoutEffect` bodies.

use ahx_core::constants::EFFECT_HOOKS;
use ahx_core::{Signal, SignalScore};
use tree_sitter::Node;

use super::SignalExtractor;
use crate::parsers::syntax::named_children;
use crate::parsers::{ParsedFile, SyntaxIndex};

/// Scores 1 per top-level statement of a block-bodied effect callback and
/// 1 for an expression-bodied one. A matching call whose first argument is
/// not a function still marks the signal present.
pub struct EffectHeavinessExtractor;

impl SignalExtractor for EffectHeavinessExtractor {
    fn signal(&self) -> Signal {
        Signal::EffectHeaviness
    }

    fn extract(&self, _file: &ParsedFile, syntax: &SyntaxIndex<'_>) -> Option<SignalScore> {
        let mut found = false;
        let mut score = 0.0;
        let mut detail = Vec::new();

        for call in &syntax.calls {
            let Some(name) = call.callee_name() else { continue };
            if !EFFECT_HOOKS.contains(&name) {
                continue;
            }
            found = true;

            let Some(callback) = call.arguments.first().copied().filter(|a| is_function(*a))
            else {
                continue;
            };
            match callback.child_by_field_name("body") {
                Some(body) if body.kind() == "statement_block" => {
                    let statements = named_children(body).len();
                    score += statements as f64;
                    detail.push(format!(
                        "{} at {}: {} statements",
                        call.callee_text, call.line, statements
                    ));
                }
                Some(_) => {
                    score += 1.0;
                    detail.push(format!("{} at {}: expr body", call.callee_text, call.line));
                }
                None => {}
            }
        }

        found.then(|| SignalScore::saturated(score, detail))
    }
}

fn is_function(node: Node<'_>) -> bool {
    matches!(node.kind(), "arrow_function" | "function_expression" | "function")
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn extract(source: &str) -> Option<SignalScore> {
        let file = ParsedFile::parse(source, Path::new("t.tsx")).unwrap();
        let syntax = file.syntax();
        EffectHeavinessExtractor.extract(&file, &syntax)
    }

    #[test]
    fn test_block_body_counts_statements() {
        let s = extract("useEffect(() => { a(); b(); }, []);").unwrap();
        assert_eq!(s.score, 2.0);
        assert_eq!(s.max, 2.0);
        assert_eq!(s.detail, vec!["useEffect at 1: 2 statements"]);
    }

    #[test]
    fn test_expression_body_counts_one() {
        let s = extract("React.useLayoutEffect(() => measure());").unwrap();
        assert_eq!(s.score, 1.0);
        assert_eq!(s.detail, vec!["React.useLayoutEffect at 1: expr body"]);
    }

    #[test]
    fn test_non_function_argument_marks_presence() {
        let s = extract("useEffect(callback, []);").unwrap();
        assert_eq!(s.score, 0.0);
        assert!(s.detail.is_empty());
    }

    #[test]
    fn test_absent_without_effect_calls() {
        assert!(extract("useMemo(() => 1, []);").is_none());
    }
}
