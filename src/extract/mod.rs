//! Pattern-driven extraction over the aggregator and per-tool entry files.
//!
//! Three independent passes:
//! - `imports`: `import { tool as V } from './D'` declarations
//! - `categories`: `{ name: 'C', components: [ ... ] }` blocks
//! - `routes`: `path: '...'` in each tool's own entry file
//!
//! None of these parse the source language. They match a narrow,
//! conventionally formatted subset and ignore everything else.

pub mod categories;
pub mod imports;
pub mod routes;

pub use categories::extract_categories;
pub use imports::{DirVarPair, extract_imports};
pub use routes::{DirPathPair, extract_route, resolve_routes};

/// True when `s` is `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identifier_accepts() {
        assert!(is_identifier("alphaTool"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("tool_2"));
        assert!(is_identifier("X"));
    }

    #[test]
    fn test_is_identifier_rejects() {
        assert!(!is_identifier(""));
        assert!(!is_identifier("123bad"));
        assert!(!is_identifier("foo-bar"));
        assert!(!is_identifier("foo.bar"));
        assert!(!is_identifier("//"));
        assert!(!is_identifier("caf\u{e9}"));
    }
}
