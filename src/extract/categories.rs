//! Variable to category extraction from category blocks

use log::debug;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::is_identifier;

/// `{ name: '<category>', components: [ <list> ]`
///
/// The list is captured lazily up to the first `]`.
static CATEGORY_BLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\s*name:\s*'([^']+)'\s*,\s*components:\s*\[([\s\S]*?)\]")
        .expect("Invalid category block regex")
});

/// Map every listed component variable to its category.
///
/// A variable listed in several blocks ends up in the last one in source
/// order. Iteration order of the result is ascending by variable.
pub fn extract_categories(source: &str) -> BTreeMap<String, String> {
    let mut var_to_category = BTreeMap::new();

    for caps in CATEGORY_BLOCK_PATTERN.captures_iter(source) {
        let category = &caps[1];
        for member in component_members(&caps[2]) {
            if let Some(previous) = var_to_category.insert(member.to_string(), category.to_string()) {
                debug!("category: {} moved from {} to {}", member, previous, category);
            }
        }
    }

    var_to_category
}

/// Identifiers of a components list, in order.
///
/// Pieces are trimmed, cut at the first whitespace run and dropped unless
/// they are a bare identifier.
fn component_members(list: &str) -> impl Iterator<Item = &str> {
    list.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .filter_map(|piece| piece.split_whitespace().next())
        .filter(|token| is_identifier(token))
}
