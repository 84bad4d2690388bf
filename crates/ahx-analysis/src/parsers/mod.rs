//! Tree-sitter parser subsystem: grammar selection, owned parse trees, and a
//! single-pass syntax index the signal extractors read from.

pub mod language;
pub mod parsed_file;
pub mod syntax;

pub use language::Language;
pub use parsed_file::{line_of, ParsedFile};
pub use syntax::{
    CallExpr, Callee, Declaration, DeclarationKind, IdentRef, ImportDecl, JsxAttr, JsxOpening,
    SyntaxIndex,
};
