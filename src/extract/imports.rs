//! Directory to variable extraction from import declarations

use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// `import { tool as <var> } from './<dir>';`
///
/// The variable is constrained to the identifier grammar by the capture
/// itself. The directory is everything up to the closing quote, minus
/// tabs and line breaks so it stays a single table field.
static IMPORT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"import\s+\{\s*tool\s+as\s+([A-Za-z_][A-Za-z0-9_]*)\s*\}\s+from\s+'\./([^'\t\r\n]+)'\s*;?")
        .expect("Invalid import pattern regex")
});

/// A tool directory and the variable its entry is imported as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirVarPair {
    pub directory: String,
    pub variable: String,
}

/// Scan `source` for import declarations, sorted ascending by directory.
///
/// The sort is stable, so duplicate directories keep their source order.
pub fn extract_imports(source: &str) -> Vec<DirVarPair> {
    let mut pairs: Vec<DirVarPair> = IMPORT_PATTERN
        .captures_iter(source)
        .map(|caps| {
            let pair = DirVarPair {
                directory: caps[2].to_string(),
                variable: caps[1].to_string(),
            };
            debug!("import: {} -> {}", pair.directory, pair.variable);
            pair
        })
        .collect();

    pairs.sort_by(|a, b| a.directory.cmp(&b.directory));
    pairs
}
