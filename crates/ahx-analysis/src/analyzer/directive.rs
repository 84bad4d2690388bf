//! Client/server component classification.

use crate::parsers::SyntaxIndex;

const USE_CLIENT: &str = "use client";

/// True when the file's directive prologue contains `"use client"`.
pub fn has_use_client_directive(syntax: &SyntaxIndex<'_>) -> bool {
    syntax.directives.iter().any(|d| *d == USE_CLIENT)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::parsers::ParsedFile;

    fn is_client(source: &str) -> bool {
        let file = ParsedFile::parse(source, Path::new("d.tsx")).unwrap();
        let syntax = file.syntax();
        has_use_client_directive(&syntax)
    }

    #[test]
    fn test_directive_detection() {
        assert!(is_client("'use client';\nexport default function A() {}"));
        assert!(is_client("/* banner */\n\"use strict\";\n\"use client\";\n"));
        assert!(!is_client("import x from 'y';\n'use client';\n"));
        assert!(!is_client("const mode = 'use client';"));
        assert!(!is_client("'use server';"));
    }
}
