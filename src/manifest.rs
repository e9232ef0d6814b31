//! package.json script patching
//!
//! Adds a `format` script to the project manifest so operators can run the
//! formatter directly. Failures here are logged and swallowed: a missing or
//! malformed manifest never aborts the setup or changes the exit code.

use log::{error, info};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

use crate::error::{Result, SetupError};

/// The formatter invocation written into `scripts.format`.
pub const FORMAT_SCRIPT: &str = "prettier --write . --cache";

/// Ensure `scripts.format` exists in `dir/package.json`.
///
/// Best-effort: any read, parse or write failure is logged and the manifest
/// is left as it was.
pub fn patch_manifest_scripts(dir: &Path) {
    if let Err(e) = try_patch(dir) {
        error!("Failed to update package.json: {}", e);
    }
}

fn try_patch(dir: &Path) -> Result<()> {
    let path = dir.join("package.json");
    let data = fs::read_to_string(&path)?;
    let mut manifest: Value = serde_json::from_str(&data)?;

    let root = manifest
        .as_object_mut()
        .ok_or_else(|| SetupError::general("package.json root is not an object"))?;

    let scripts = root.entry("scripts").or_insert_with(|| json!({}));
    if !scripts.is_object() {
        *scripts = json!({});
    }
    scripts["format"] = json!(FORMAT_SCRIPT);

    let mut out = serde_json::to_string_pretty(&manifest)?;
    out.push('\n');
    fs::write(&path, out)?;

    info!("Updated scripts section of package.json");
    println!("✓ Added format script to package.json");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_adds_format_to_existing_scripts() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("package.json"),
            r#"{"name":"demo","scripts":{"test":"jest"}}"#,
        )
        .unwrap();

        patch_manifest_scripts(tmp.path());

        let data = fs::read_to_string(tmp.path().join("package.json")).unwrap();
        let manifest: Value = serde_json::from_str(&data).unwrap();
        assert_eq!(manifest["scripts"]["format"], FORMAT_SCRIPT);
        assert_eq!(manifest["scripts"]["test"], "jest");
    }

    #[test]
    fn test_creates_scripts_section_when_missing() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("package.json"), r#"{"name":"demo"}"#).unwrap();

        patch_manifest_scripts(tmp.path());

        let data = fs::read_to_string(tmp.path().join("package.json")).unwrap();
        let manifest: Value = serde_json::from_str(&data).unwrap();
        assert_eq!(manifest["scripts"]["format"], FORMAT_SCRIPT);
    }

    #[test]
    fn test_overwrites_existing_format_entry() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("package.json"),
            r#"{"scripts":{"format":"prettier ."}}"#,
        )
        .unwrap();

        patch_manifest_scripts(tmp.path());

        let data = fs::read_to_string(tmp.path().join("package.json")).unwrap();
        let manifest: Value = serde_json::from_str(&data).unwrap();
        assert_eq!(manifest["scripts"]["format"], FORMAT_SCRIPT);
    }

    #[test]
    fn test_missing_manifest_is_not_fatal() {
        let tmp = TempDir::new().unwrap();
        // No package.json present; must not panic or create one
        patch_manifest_scripts(tmp.path());
        assert!(!tmp.path().join("package.json").exists());
    }

    #[test]
    fn test_malformed_manifest_is_left_untouched() {
        let tmp = TempDir::new().unwrap();
        let garbage = "{ not json at all";
        fs::write(tmp.path().join("package.json"), garbage).unwrap();

        patch_manifest_scripts(tmp.path());

        let data = fs::read_to_string(tmp.path().join("package.json")).unwrap();
        assert_eq!(data, garbage);
    }

    #[test]
    fn test_non_object_root_is_left_untouched() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("package.json"), "[1, 2, 3]").unwrap();

        patch_manifest_scripts(tmp.path());

        let data = fs::read_to_string(tmp.path().join("package.json")).unwrap();
        assert_eq!(data, "[1, 2, 3]");
    }

    #[test]
    fn test_output_ends_with_newline() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("package.json"), r#"{"name":"demo"}"#).unwrap();

        patch_manifest_scripts(tmp.path());

        let data = fs::read_to_string(tmp.path().join("package.json")).unwrap();
        assert!(data.ends_with('\n'));
    }
}
