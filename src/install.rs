//! Development dependency installation
//!
//! Invokes the chosen package manager's add-dev-dependency subcommand with
//! the fixed package list. The child process writes directly to the
//! operator's terminal; a non-zero exit aborts the whole setup before any
//! later step starts.

use log::info;

use crate::error::Result;
use crate::manager::PackageManager;
use crate::runner::run_command;

/// Development dependencies installed into the target project.
///
/// Order is fixed for the process lifetime; version pins ride along in each
/// package spec string and are interpreted by the package manager itself.
pub const PACKAGES: [&str; 8] = [
    "inquirer",
    "eslint@8.41.0",
    "prettier@^3.3.3",
    "husky@^9.1.5",
    "lint-staged@^15.2.9",
    "eslint-plugin-unused-imports@^4.1.3",
    "prettier-plugin-tailwindcss@^0.6.6",
    "eslint-config-prettier@^9.1.0",
];

/// Build the full argument vector for the manager's install invocation.
pub fn install_args(manager: PackageManager) -> Vec<String> {
    let mut args: Vec<String> = manager
        .add_dev_args()
        .iter()
        .map(|s| s.to_string())
        .collect();
    args.extend(PACKAGES.iter().map(|s| s.to_string()));
    args
}

/// Install the fixed dev dependency list with the chosen manager.
pub fn install_dependencies(manager: PackageManager) -> Result<()> {
    info!("Installing dev dependencies with {}", manager);
    run_command(manager.command(), &install_args(manager))
}
