//! lintstrap - Main entry point
//!
//! One-shot setup: pick a package manager, install dev dependencies, copy
//! lint/format configs, wire up the pre-commit hook, patch package.json.

use console::style;
use log::{error, info, warn};

use lintstrap::cli::Cli;
use lintstrap::config_files::{copy_config_files, CONFIG_TEMPLATES};
use lintstrap::error::Result;
use lintstrap::hooks::setup_hooks;
use lintstrap::install::install_dependencies;
use lintstrap::manifest::patch_manifest_scripts;
use lintstrap::prompt::select_package_manager;

/// Initialize the logger with appropriate settings
fn init_logger() {
    use env_logger::Builder;
    use std::io::Write;

    Builder::from_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env() // Allows RUST_LOG env var to override
        .init();
}

/// Main application entry point
fn main() {
    init_logger();
    info!("lintstrap starting up");

    let _cli = Cli::parse_args();

    if let Err(e) = run_setup() {
        error!("Setup failed: {}", e);
        eprintln!("{} {}", style("✗").red().bold(), e);
        std::process::exit(1);
    }

    println!();
    println!("{}", style("Setup complete!").green().bold());
}

/// Run the four setup steps strictly top-to-bottom.
///
/// Select, Install and SetupHooks abort on failure; CopyConfigs and the
/// manifest patch are best-effort and never stop the sequence.
fn run_setup() -> Result<()> {
    let manager = select_package_manager()?;
    info!("Selected package manager: {}", manager);

    install_dependencies(manager)?;

    let cwd = std::env::current_dir()?;
    let copied = copy_config_files(&cwd);
    if copied < CONFIG_TEMPLATES.len() {
        warn!(
            "Copied {}/{} config files; continuing anyway",
            copied,
            CONFIG_TEMPLATES.len()
        );
    }

    setup_hooks(manager)?;
    patch_manifest_scripts(&cwd);

    Ok(())
}
