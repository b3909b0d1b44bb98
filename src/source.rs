//! Aggregator source loading

use log::debug;
use std::fs;
use std::io::ErrorKind;

use crate::error::{Result, ToolmapsError};
use crate::layout::ProjectLayout;

/// Read the aggregator file of `layout` into memory.
///
/// A missing or unreadable aggregator is fatal: nothing can be extracted
/// without it.
pub fn load_aggregator(layout: &ProjectLayout) -> Result<String> {
    let path = layout.aggregator_path();
    match fs::read_to_string(&path) {
        Ok(text) => {
            debug!("Loaded aggregator {} ({} bytes)", path.display(), text.len());
            Ok(text)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ToolmapsError::SourceNotFound { path }),
        Err(source) => Err(ToolmapsError::SourceRead { path, source }),
    }
}
