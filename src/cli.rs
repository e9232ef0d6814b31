use clap::Parser;

/// lintstrap - bootstrap lint and format tooling for a JS/TS project
///
/// The program takes no functional flags: running the executable starts the
/// interactive package manager selector immediately.
#[derive(Parser)]
#[command(name = "lintstrap")]
#[command(about = "Set up ESLint, Prettier, husky and lint-staged in the current project")]
#[command(version)]
pub struct Cli {}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
