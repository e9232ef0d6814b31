//! Interactive package manager selection
//!
//! One single-select list prompt. The choice list is derived from the
//! `PackageManager` enum, so the prompt and the dispatch tables cannot
//! drift apart.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use strum::IntoEnumIterator;

use crate::error::{Result, SetupError};
use crate::manager::PackageManager;

/// Ask the operator which package manager to use.
///
/// The answer is constrained to the presented set; the only failure mode is
/// an unrecoverable terminal I/O error, which aborts the whole program.
pub fn select_package_manager() -> Result<PackageManager> {
    let choices: Vec<PackageManager> = PackageManager::iter().collect();
    let labels: Vec<String> = choices.iter().map(|m| m.to_string()).collect();

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select the package manager to use")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| SetupError::prompt(e.to_string()))?;

    Ok(choices[index])
}
