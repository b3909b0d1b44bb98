//! Directory to route path resolution from per-tool entry files

use log::debug;
use regex::Regex;
use std::fs;
use std::sync::LazyLock;

use super::DirVarPair;
use crate::layout::ProjectLayout;

/// `path: '<value>'` or `path: "<value>"`
static ROUTE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"path\s*:\s*['"]([^'"]+)['"]"#).expect("Invalid route pattern regex"));

/// A tool directory and the route path its entry file declares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirPathPair {
    pub directory: String,
    pub path: String,
}

/// First route path declared anywhere in `code`
pub fn extract_route(code: &str) -> Option<&str> {
    ROUTE_PATTERN
        .captures(code)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Resolve a route path for each directory in `pairs`.
///
/// Directories whose entry file is unreadable or declares no path are
/// skipped. Output follows the (already sorted) order of `pairs`.
pub fn resolve_routes(pairs: &[DirVarPair], layout: &ProjectLayout) -> Vec<DirPathPair> {
    let mut routes = Vec::new();

    for pair in pairs {
        let entry = layout.entry_path(&pair.directory);
        let code = match fs::read_to_string(&entry) {
            Ok(code) => code,
            Err(e) => {
                debug!("route: skipping {} ({})", entry.display(), e);
                continue;
            }
        };

        match extract_route(&code) {
            Some(path) => {
                debug!("route: {} -> {}", pair.directory, path);
                routes.push(DirPathPair {
                    directory: pair.directory.clone(),
                    path: path.to_string(),
                });
            }
            None => debug!("route: no path declared in {}", entry.display()),
        }
    }

    routes.sort_by(|a, b| a.directory.cmp(&b.directory));
    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn pair(dir: &str) -> DirVarPair {
        DirVarPair {
            directory: dir.to_string(),
            variable: format!("{}Tool", dir),
        }
    }

    fn write_entry(layout: &ProjectLayout, dir: &str, code: &str) {
        let entry = layout.entry_path(dir);
        fs::create_dir_all(entry.parent().unwrap()).unwrap();
        fs::write(entry, code).unwrap();
    }

    #[test]
    fn test_extract_route_single_quotes() {
        let code = "export const tool = defineTool({\n  name: 'Alpha',\n  path: '/alpha',\n});";
        assert_eq!(extract_route(code), Some("/alpha"));
    }

    #[test]
    fn test_extract_route_double_quotes() {
        assert_eq!(extract_route(r#"path : "/beta""#), Some("/beta"));
    }

    #[test]
    fn test_extract_route_first_occurrence_wins() {
        let code = "path: '/first',\nexample: { path: '/second' }";
        assert_eq!(extract_route(code), Some("/first"));
    }

    #[test]
    fn test_extract_route_absent() {
        assert_eq!(extract_route("export const tool = defineTool({ name: 'x' });"), None);
        assert_eq!(extract_route("path: ''"), None);
    }

    #[test]
    fn test_resolve_routes_skips_missing_files() {
        let temp_dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp_dir.path());
        write_entry(&layout, "alpha", "path: '/alpha'");
        write_entry(&layout, "gamma", "path: \"/gamma\"");

        let routes = resolve_routes(&[pair("alpha"), pair("beta"), pair("gamma")], &layout);
        assert_eq!(
            routes,
            vec![
                DirPathPair {
                    directory: "alpha".to_string(),
                    path: "/alpha".to_string(),
                },
                DirPathPair {
                    directory: "gamma".to_string(),
                    path: "/gamma".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_resolve_routes_skips_files_without_path() {
        let temp_dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp_dir.path());
        write_entry(&layout, "alpha", "export const tool = {};");

        assert!(resolve_routes(&[pair("alpha")], &layout).is_empty());
    }

    #[test]
    fn test_resolve_routes_skips_directory_in_place_of_file() {
        let temp_dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp_dir.path());
        fs::create_dir_all(layout.entry_path("alpha")).unwrap();

        assert!(resolve_routes(&[pair("alpha")], &layout).is_empty());
    }
}
