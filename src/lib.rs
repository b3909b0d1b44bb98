//! Toolmaps - tool catalog table generator
//!
//! Reads a tool catalog aggregator (`src/tools/index.ts`) and each tool's
//! own entry file, and emits three tab-separated tables: directory to
//! variable, variable to category, and directory to route path.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod layout;
pub mod pipeline;
pub mod source;
pub mod table;

pub use error::{Result, ToolmapsError};
pub use layout::ProjectLayout;
pub use pipeline::{OutputPaths, ToolMaps, generate};
pub use table::Table;
