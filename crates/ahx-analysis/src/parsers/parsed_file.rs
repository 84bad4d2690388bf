//! Owned parse result: source text plus its tree-sitter tree.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::time::Instant;

use ahx_core::errors::ParseError;
use tree_sitter::{Node, Parser, Tree};

use super::language::Language;
use super::syntax::SyntaxIndex;

thread_local! {
    static PARSER: RefCell<Parser> = RefCell::new(Parser::new());
}

/// A parsed source file. Each analysis builds its own; nothing is cached.
pub struct ParsedFile {
    path: PathBuf,
    source: String,
    language: Language,
    tree: Tree,
    parse_time_us: u64,
}

impl ParsedFile {
    /// Parse `source`, tolerating syntax errors (tree-sitter recovers and
    /// marks them with ERROR nodes).
    pub fn parse(source: &str, path: &Path) -> Result<Self, ParseError> {
        Self::parse_with(source, path, false)
    }

    /// Parse `source`; with `reject_syntax_errors`, a tree containing error
    /// nodes is reported as `ParseError::PartialParse`.
    pub fn parse_with(
        source: &str,
        path: &Path,
        reject_syntax_errors: bool,
    ) -> Result<Self, ParseError> {
        let start = Instant::now();
        let language = Language::from_path(path);

        let tree = PARSER.with(|cell| {
            let mut parser = cell.borrow_mut();
            parser
                .set_language(&language.grammar())
                .map_err(|e| ParseError::GrammarLoad {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
            parser.parse(source, None).ok_or_else(|| ParseError::TreeSitterError {
                path: path.to_path_buf(),
                message: "parser produced no tree".to_string(),
            })
        })?;

        if reject_syntax_errors && tree.root_node().has_error() {
            return Err(ParseError::PartialParse {
                path: path.to_path_buf(),
                error_count: count_errors(tree.root_node()),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            source: source.to_string(),
            language,
            tree,
            parse_time_us: start.elapsed().as_micros() as u64,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn parse_time_us(&self) -> u64 {
        self.parse_time_us
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn has_errors(&self) -> bool {
        self.root().has_error()
    }

    /// Source text covered by `node`.
    pub fn text<'a>(&'a self, node: Node<'_>) -> &'a str {
        self.source
            .get(node.start_byte()..node.end_byte())
            .unwrap_or("")
    }

    /// Walk the tree once and index everything the extractors need.
    pub fn syntax(&self) -> SyntaxIndex<'_> {
        SyntaxIndex::build(self)
    }
}

/// 1-based line on which `node` starts.
pub fn line_of(node: Node<'_>) -> u32 {
    node.start_position().row as u32 + 1
}

fn count_errors(root: Node<'_>) -> usize {
    let mut count = 0;
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            count += 1;
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return count;
            }
        }
    }
}
