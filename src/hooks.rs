//! Pre-commit hook setup
//!
//! Initializes husky and writes the pre-commit hook as an ordered list of
//! command steps, each run through `<manager> exec` with inherited standard
//! streams. Steps execute strictly in sequence with short-circuit-on-failure
//! semantics: the pre-commit write only starts after `husky init` exits zero.

use log::info;

use crate::error::Result;
use crate::manager::PackageManager;
use crate::runner::run_command;

/// Ordered argument lists for the hook setup steps.
///
/// Each entry is appended to `<manager> exec`. The pre-commit write passes
/// the quoted runner string and the redirect token as plain arguments; the
/// package manager's exec layer hands them to the hook tooling unchanged.
pub fn hook_steps(manager: PackageManager) -> Vec<Vec<String>> {
    vec![
        vec!["husky".to_string(), "init".to_string()],
        vec![
            "echo".to_string(),
            format!("\"{}\"", manager.lint_staged_runner()),
            "> .husky/pre-commit".to_string(),
        ],
    ]
}

/// Initialize husky and write the pre-commit hook.
///
/// A non-zero exit at either step aborts the sequence; the error names the
/// manager binary and the offending command line.
pub fn setup_hooks(manager: PackageManager) -> Result<()> {
    info!("Setting up git hooks with {}", manager);

    for step in hook_steps(manager) {
        let mut args = vec!["exec".to_string()];
        args.extend(step);
        run_command(manager.command(), &args)?;
    }

    Ok(())
}
