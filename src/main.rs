use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, info, warn};

use toolmaps::cli::Cli;
use toolmaps::config::Config;
use toolmaps::{ToolMaps, generate};

/// Start the logger before anything else can log.
///
/// With `RUST_LOG` set it decides everything. Otherwise the logger accepts
/// every level and `log::max_level` does the filtering, so the configured
/// level can be applied once the config is loaded.
fn setup_logging(cli: &Cli) {
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::Builder::from_default_env()
            .target(env_logger::Target::Stderr)
            .init();
        return;
    }

    env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .target(env_logger::Target::Stderr)
        .init();
    log::set_max_level(default_level(cli));
}

fn default_level(cli: &Cli) -> LevelFilter {
    if cli.is_verbose() { LevelFilter::Debug } else { LevelFilter::Warn }
}

/// Apply `log_level` from the config unless `RUST_LOG` or `--verbose` won
fn apply_config_level(cli: &Cli, config: &Config) {
    if std::env::var_os("RUST_LOG").is_some() || cli.is_verbose() {
        return;
    }
    if let Some(level) = &config.log_level {
        match level.parse::<LevelFilter>() {
            Ok(filter) => log::set_max_level(filter),
            Err(_) => warn!("Ignoring unknown log_level in config: {}", level),
        }
    }
}

fn run_application(cli: &Cli, config: &Config) -> Result<ToolMaps> {
    let layout = cli.layout(config.root.as_ref());
    info!("Generating tables for project at {}", layout.root().display());

    let maps = generate(&layout, &cli.outputs()).context("Table generation failed")?;
    Ok(maps)
}

fn print_summary(cli: &Cli, maps: &ToolMaps) {
    println!(
        "{} {} ({} rows)",
        "Wrote".green(),
        cli.dir_to_var.display(),
        maps.dir_to_var.len()
    );
    println!(
        "{} {} ({} rows)",
        "Wrote".green(),
        cli.var_to_category.display(),
        maps.var_to_category.len()
    );
    println!(
        "{} {} ({} rows)",
        "Wrote".green(),
        cli.dir_to_path.display(),
        maps.dir_to_path.len()
    );
}

fn main() -> Result<()> {
    // Usage errors exit before anything is read or written
    let cli = Cli::parse_or_exit();

    // Setup logging before config so skipped config files are reported
    setup_logging(&cli);

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    apply_config_level(&cli, &config);

    let maps = run_application(&cli, &config).context("Application failed")?;

    if cli.is_verbose() {
        print_summary(&cli, &maps);
    }

    Ok(())
}
