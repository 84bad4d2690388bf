//! contextAtRoot: context creation/consumption and provider elements.

use ahx_core::constants::CONTEXT_CALLS;
use ahx_core::{Signal, SignalScore};

use super::SignalExtractor;
use crate::parsers::{Callee, ParsedFile, SyntaxIndex};

/// Counts bare `createContext(...)` / `useContext(...)` calls and opening
/// tags ending in `.Provider`. Call details precede provider details.
/// Self-closing providers are not counted.
pub struct ContextAtRootExtractor;

impl SignalExtractor for ContextAtRootExtractor {
    fn signal(&self) -> Signal {
        Signal::ContextAtRoot
    }

    fn extract(&self, _file: &ParsedFile, syntax: &SyntaxIndex<'_>) -> Option<SignalScore> {
        let calls = syntax.calls.iter().filter_map(|call| match call.callee {
            Callee::Identifier(name) if CONTEXT_CALLS.contains(&name) => {
                Some(format!("{} at {}", call.callee_text, call.line))
            }
            _ => None,
        });
        let providers = syntax
            .opening_elements
            .iter()
            .filter(|o| o.tag.ends_with(".Provider"))
            .map(|o| format!("{} at {}", o.tag, o.line));

        let detail: Vec<String> = calls.chain(providers).collect();
        if detail.is_empty() {
            return None;
        }
        Some(SignalScore::saturated(detail.len() as f64, detail))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_calls_then_providers() {
        let source = "const Ctx = createContext(null);\n\
                      const App = () => <Ctx.Provider value={1}><Child/></Ctx.Provider>;\n\
                      function Child() { const v = useContext(Ctx); return <i/>; }\n";
        let file = ParsedFile::parse(source, Path::new("t.tsx")).unwrap();
        let s = ContextAtRootExtractor.extract(&file, &file.syntax()).unwrap();
        assert_eq!(s.score, 3.0);
        assert_eq!(
            s.detail,
            vec!["createContext at 1", "useContext at 3", "Ctx.Provider at 2"]
        );
    }

    #[test]
    fn test_member_calls_not_counted() {
        let file = ParsedFile::parse("React.createContext(null);", Path::new("t.ts")).unwrap();
        assert!(ContextAtRootExtractor.extract(&file, &file.syntax()).is_none());
    }
}
