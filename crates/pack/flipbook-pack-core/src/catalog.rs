//! Pack discovery: list the manifests available under a mount root.
//!
//! Enumeration order is whatever the provider's listing gives, kept
//! stable; only direct children of the root are considered.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::provider::FileProvider;

/// One discoverable pack: what a picker shows, and where to load from.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackEntry {
    pub display_name: String,
    pub manifest_path: String,
}

/// Entries directly under `root` whose name ends with the manifest
/// extension (case-insensitive). No recursion.
pub fn discover(files: &mut dyn FileProvider, cfg: &Config, root: &str) -> Vec<PackEntry> {
    let ext = cfg.manifest_ext.to_ascii_lowercase();
    let mut entries = Vec::new();
    for name in files.list_dir(root) {
        if !name.to_ascii_lowercase().ends_with(&ext) {
            continue;
        }
        let manifest_path = join(root, &name);
        entries.push(PackEntry {
            display_name: name,
            manifest_path,
        });
    }
    entries
}

/// Root-relative join that treats "" and "/" as the mount root.
fn join(root: &str, name: &str) -> String {
    let trimmed = root.trim_end_matches('/');
    if trimmed.is_empty() {
        name.to_string()
    } else {
        format!("{trimmed}/{name}")
    }
}
