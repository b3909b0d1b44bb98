//! CLI argument definitions using clap.
//!
//! Three required positional output paths, in order:
//! - directory -> variable table
//! - variable -> category table
//! - directory -> route path table

use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::layout::ProjectLayout;
use crate::pipeline::OutputPaths;

/// Exit status for a missing or malformed invocation
pub const USAGE_EXIT_CODE: i32 = 1;

/// Toolmaps - generate tool catalog tables from src/tools/index.ts
#[derive(Parser, Debug)]
#[command(name = "toolmaps")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output path for the directory -> variable table
    #[arg(value_name = "DIR_TO_VAR")]
    pub dir_to_var: PathBuf,

    /// Output path for the variable -> category table
    #[arg(value_name = "VAR_TO_CAT")]
    pub var_to_category: PathBuf,

    /// Output path for the directory -> route path table
    #[arg(value_name = "DIR_TO_PATH")]
    pub dir_to_path: PathBuf,

    /// Project root containing src/tools (default: current directory)
    #[arg(short = 'C', long)]
    pub root: Option<PathBuf>,

    /// Optional config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse process arguments.
    ///
    /// Help and version requests exit 0 through clap. Any other parse
    /// failure prints the usage error to stderr and exits with
    /// [`USAGE_EXIT_CODE`].
    pub fn parse_or_exit() -> Self {
        match Self::try_parse_args(std::env::args_os()) {
            Ok(cli) => cli,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
            Err(e) => {
                let _ = e.print();
                std::process::exit(USAGE_EXIT_CODE);
            }
        }
    }

    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn outputs(&self) -> OutputPaths {
        OutputPaths {
            dir_to_var: self.dir_to_var.clone(),
            var_to_category: self.var_to_category.clone(),
            dir_to_path: self.dir_to_path.clone(),
        }
    }

    /// Project layout rooted at `--root`, else `fallback_root`, else `.`
    pub fn layout(&self, fallback_root: Option<&PathBuf>) -> ProjectLayout {
        let root = self
            .root
            .clone()
            .or_else(|| fallback_root.cloned())
            .unwrap_or_else(|| PathBuf::from("."));
        ProjectLayout::new(root)
    }
}
