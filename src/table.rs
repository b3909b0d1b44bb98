//! Two-column tab-separated tables and their atomic persistence

use log::debug;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, ToolmapsError};

/// Ordered `(key, value)` rows, serialized one `key\tvalue` line per row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<(String, String)>,
}

impl Table {
    /// Build a table from rows, sorting ascending by key.
    ///
    /// Ordinal comparison, stable for equal keys.
    pub fn sorted<I, K, V>(rows: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut rows: Vec<(String, String)> = rows.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows joined by `\n` with one trailing `\n`.
    ///
    /// An empty table serializes to a lone newline.
    pub fn to_tsv(&self) -> String {
        let mut out = self
            .rows
            .iter()
            .map(|(k, v)| format!("{}\t{}", k, v))
            .collect::<Vec<_>>()
            .join("\n");
        out.push('\n');
        out
    }

    /// Persist the table to `path`, replacing any previous content.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        write_atomic(path, self.to_tsv().as_bytes())?;
        debug!("Wrote {} rows to {}", self.len(), path.display());
        Ok(())
    }
}

/// Write to a sibling temp file, then rename over `path`.
///
/// The destination either keeps its old content or receives all of
/// `content`. The parent directory must already exist.
fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let write_err = |source| ToolmapsError::TableWrite {
        path: path.to_path_buf(),
        source,
    };

    let temp_path = temp_sibling(path);
    let result = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .and_then(|mut file| {
            file.write_all(content)?;
            file.sync_all()
        })
        .and_then(|_| fs::rename(&temp_path, path));

    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(write_err(e));
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default(),
        std::process::id()
    );
    path.with_file_name(temp_name)
}
