//! Type-safe package manager selection
//!
//! This module replaces stringly-typed manager dispatch with a proper Rust
//! enum that provides compile-time validation and exhaustive matching. The
//! enum is the single source of truth for all three manager-specific command
//! tables, so the selector choices and the dispatch logic can never diverge.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{Result, SetupError};

/// Supported JavaScript package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PackageManager {
    #[default]
    #[strum(serialize = "npm")]
    Npm,
    #[strum(serialize = "yarn")]
    Yarn,
    #[strum(serialize = "pnpm")]
    Pnpm,
}

impl PackageManager {
    /// Binary name looked up on the caller's PATH
    pub fn command(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    /// Subcommand prefix that adds development dependencies
    pub fn add_dev_args(&self) -> &'static [&'static str] {
        match self {
            Self::Npm => &["install", "--save-dev"],
            Self::Yarn => &["add", "--dev"],
            Self::Pnpm => &["add", "-D"],
        }
    }

    /// lint-staged invocation written into the pre-commit hook
    pub fn lint_staged_runner(&self) -> &'static str {
        match self {
            Self::Npm => "npx lint-staged",
            Self::Yarn => "yarn lint-staged",
            Self::Pnpm => "pnpm exec lint-staged",
        }
    }
}

/// Parse a manager name, surfacing the unsupported-manager error kind.
///
/// The interactive selector constrains answers to known variants, so this
/// only fails for names arriving from outside the prompt.
pub fn parse_manager(name: &str) -> Result<PackageManager> {
    name.parse()
        .map_err(|_| SetupError::unsupported_manager(name))
}
