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
    paths: HashMap<String, PathEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PathEntry {
    File(String),
    Detailed {
        file: String,
        #[serde(default)]
        description: Option<String>,
    },
}

impl PathEntry {
    fn file(&self) -> &str {
        match self {
            PathEntry::File(file) => file,
            PathEntry::Detailed { file, .. } => file,
        }
    }

    fn description(&self) -> Option<&str> {
        match self {
            PathEntry::File(_) => None,
            PathEntry::Detailed { description, .. } => description.as_deref(),
        }
    }
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Line-oriented path configs.
pub mod paths {
    use super::*;

    pub fn keys() -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST.paths.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn text(name: &str) -> Result<String> {
        let entry = lookup(&MANIFEST.paths, "path", name)?;
        read_to_string(entry.file())
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let entry = lookup(&MANIFEST.paths, "path", name)?;
        Ok(resolve_path(entry.file()))
    }

    pub fn description(name: &str) -> Result<Option<String>> {
        let entry = lookup(&MANIFEST.paths, "path", name)?;
        Ok(entry.description().map(str::to_owned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_manifest_entry_is_readable() {
        for key in paths::keys() {
            let text = paths::text(&key).unwrap_or_else(|e| panic!("{key}: {e:#}"));
            assert!(!text.trim().is_empty(), "fixture '{key}' is empty");
        }
    }

    #[test]
    fn descriptions_are_optional() {
        assert!(paths::description("unit-square").unwrap().is_some());
        assert!(paths::description("banked-oval").unwrap().is_none());
        assert!(paths::path("banked-oval").unwrap().ends_with("paths/banked_oval.txt"));
    }

    #[test]
    fn unknown_fixture_is_an_error() {
        let err = paths::text("does-not-exist").unwrap_err();
        assert!(err.to_string().contains("does-not-exist"));
    }
}
