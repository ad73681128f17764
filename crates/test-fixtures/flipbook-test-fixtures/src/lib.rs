//! Shared JSON fixtures for the flipbook crates, addressed by name
//! through `fixtures/manifest.json` at the workspace root.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    packs: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = fixtures_root().join(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

pub mod packs {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.packs.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = MANIFEST
            .packs
            .get(name)
            .ok_or_else(|| anyhow!("unknown pack fixture '{name}'"))?;
        read_to_string(rel)
    }
}
