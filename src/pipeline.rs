//! The generator pipeline: load, extract, resolve, write.

use log::info;
use std::path::PathBuf;

use crate::error::Result;
use crate::extract::{extract_categories, extract_imports, resolve_routes};
use crate::layout::ProjectLayout;
use crate::source::load_aggregator;
use crate::table::Table;

/// Destinations of the three generated tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub dir_to_var: PathBuf,
    pub var_to_category: PathBuf,
    pub dir_to_path: PathBuf,
}

/// The three generated tables, each sorted by its first column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolMaps {
    pub dir_to_var: Table,
    pub var_to_category: Table,
    pub dir_to_path: Table,
}

impl ToolMaps {
    /// Run every extraction stage for the project at `layout`.
    pub fn build(layout: &ProjectLayout) -> Result<Self> {
        let source = load_aggregator(layout)?;
        let maps = Self::from_source(&source, layout);
        info!(
            "Extracted {} directories, {} categorized variables, {} routes",
            maps.dir_to_var.len(),
            maps.var_to_category.len(),
            maps.dir_to_path.len()
        );
        Ok(maps)
    }

    /// Extract from already loaded aggregator text.
    ///
    /// Route resolution still reads per-tool entry files under `layout`.
    pub fn from_source(source: &str, layout: &ProjectLayout) -> Self {
        let imports = extract_imports(source);
        let categories = extract_categories(source);
        let routes = resolve_routes(&imports, layout);

        Self {
            dir_to_var: Table::sorted(imports.into_iter().map(|p| (p.directory, p.variable))),
            var_to_category: Table::sorted(categories),
            dir_to_path: Table::sorted(routes.into_iter().map(|p| (p.directory, p.path))),
        }
    }

    /// Write the tables in order; the first failure aborts the rest.
    pub fn write(&self, outputs: &OutputPaths) -> Result<()> {
        self.dir_to_var.write_to(&outputs.dir_to_var)?;
        self.var_to_category.write_to(&outputs.var_to_category)?;
        self.dir_to_path.write_to(&outputs.dir_to_path)?;
        info!(
            "Wrote {}, {}, {}",
            outputs.dir_to_var.display(),
            outputs.var_to_category.display(),
            outputs.dir_to_path.display()
        );
        Ok(())
    }
}

/// Build the tables for `layout` and write them to `outputs`.
pub fn generate(layout: &ProjectLayout, outputs: &OutputPaths) -> Result<ToolMaps> {
    let maps = ToolMaps::build(layout)?;
    maps.write(outputs)?;
    Ok(maps)
}
