// Embeds the resolved vl-convert-rs version from the lockfile so the
// version endpoint can report the renderer version, not just our own.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo");
    let lockfile = Path::new(&manifest_dir).join("Cargo.lock");

    let version = fs::read_to_string(&lockfile)
        .ok()
        .and_then(|lock| locked_version(&lock, "vl-convert-rs"))
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=VL_CONVERT_RS_VERSION={version}");
    println!("cargo:rerun-if-changed=Cargo.lock");
}

/// Find the `version` entry of the `[[package]]` block naming `package`.
fn locked_version(lock: &str, package: &str) -> Option<String> {
    let name_line = format!("name = \"{package}\"");
    let mut matched = false;
    for line in lock.lines() {
        let line = line.trim();
        if line == "[[package]]" {
            matched = false;
        } else if line == name_line {
            matched = true;
        } else if matched {
            if let Some(rest) = line.strip_prefix("version = \"") {
                return Some(rest.trim_end_matches('"').to_string());
            }
        }
    }
    None
}
