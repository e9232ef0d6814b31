//! Bundled lint/format configuration templates
//!
//! Five templates ship inside the binary and are written into the operator's
//! project directory, overwriting existing files without prompting. Copies
//! are best-effort per file: a failed write is logged and the remaining
//! files are still attempted. This step never aborts the setup and never
//! affects the exit code.

use log::{error, info};
use std::fs;
use std::path::Path;

/// Template file names paired with their embedded contents.
pub const CONFIG_TEMPLATES: [(&str, &str); 5] = [
    (".eslintrc.json", include_str!("../templates/.eslintrc.json")),
    (".eslintignore", include_str!("../templates/.eslintignore")),
    (".prettierrc", include_str!("../templates/.prettierrc")),
    (".prettierignore", include_str!("../templates/.prettierignore")),
    (
        ".lintstagedrc.json",
        include_str!("../templates/.lintstagedrc.json"),
    ),
];

/// Copy every bundled template into `dest`, overwriting existing files.
///
/// Returns the number of files written successfully. All five writes are
/// always attempted, regardless of earlier failures.
pub fn copy_config_files(dest: &Path) -> usize {
    let mut copied = 0;
    for (name, contents) in CONFIG_TEMPLATES {
        let target = dest.join(name);
        match fs::write(&target, contents) {
            Ok(()) => {
                info!("Copied {}", name);
                println!("✓ Copied {}", name);
                copied += 1;
            }
            Err(e) => {
                error!("Failed to copy {}: {}", name, e);
            }
        }
    }
    copied
}
