// src/graph/imports.rs
//! Lexical import extraction.
//!
//! This is a regex heuristic, not a parser. Specifiers built at runtime
//! (template strings, concatenation) are invisible to it.

use regex::Regex;
use std::sync::LazyLock;

const IMPORT_PATTERN: &str = concat!(
    r#"(?:import\s+[^'"]*from\s+['"]([^'"]+)['"])"#,
    r#"|(?:export\s+[^'"]*from\s+['"]([^'"]+)['"])"#,
    r#"|(?:import\s+['"]([^'"]+)['"])"#,
    r#"|(?:import\s*\(\s*['"]([^'"]+)['"]\s*\))"#,
    r#"|(?:require\(\s*['"]([^'"]+)['"]\s*\))"#,
);

static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(IMPORT_PATTERN).unwrap_or_else(|e| panic!("Invalid import regex: {e}"))
});

/// Extracts relative import specifiers from source text.
///
/// # Returns
/// Specifiers starting with `./` or `../`, in order of appearance.
/// Repeats are kept; bare package names are dropped.
#[must_use]
pub fn extract(content: &str) -> Vec<String> {
    IMPORT_RE
        .captures_iter(content)
        .filter_map(|caps| caps.iter().skip(1).flatten().next())
        .map(|m| m.as_str())
        .filter(|spec| is_relative(spec))
        .map(str::to_string)
        .collect()
}

/// True for `./x` and `../x` style specifiers.
#[must_use]
pub fn is_relative(spec: &str) -> bool {
    spec.starts_with("./") || spec.starts_with("../")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_from() {
        let code = r#"
            import { Foo } from "./components";
            import Bar, { baz } from '../shared/bar';
            import type { Props } from './types';
        "#;
        assert_eq!(
            extract(code),
            vec!["./components", "../shared/bar", "./types"]
        );
    }

    #[test]
    fn test_side_effect_and_require() {
        let code = r#"
            import './polyfills';
            const fs = require('fs');
            const util = require( "./util" );
        "#;
        assert_eq!(extract(code), vec!["./polyfills", "./util"]);
    }

    #[test]
    fn test_reexport_and_dynamic_import() {
        let code = r#"
            export * from "./utils";
            export { a, b } from './ab';
            const Home = () => import('./views/Home.vue');
        "#;
        assert_eq!(
            extract(code),
            vec!["./utils", "./ab", "./views/Home.vue"]
        );
    }

    #[test]
    fn test_drops_non_relative() {
        let code = r#"
            import React from 'react';
            import { x } from '@scope/pkg';
            import y from '/abs/path';
            import z from '.hidden';
        "#;
        assert!(extract(code).is_empty());
    }

    #[test]
    fn test_keeps_repeats_in_order() {
        let code = "import a from './a';\nimport './b';\nimport again from './a';";
        assert_eq!(extract(code), vec!["./a", "./b", "./a"]);
    }

    #[test]
    fn test_multiline_import_clause() {
        let code = "import {\n  one,\n  two,\n} from './numbers';";
        assert_eq!(extract(code), vec!["./numbers"]);
    }

    #[test]
    fn test_template_literal_not_found() {
        let code = "const m = require(`./${name}`);";
        assert!(extract(code).is_empty());
    }
}
