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
    hosts: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = fixtures_root().join(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

pub mod hosts {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.hosts.keys().cloned().collect()
    }

    /// Raw JSON of a host setup fixture.
    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.hosts, "host", name)?;
        read_to_string(rel)
    }

    /// Parsed JSON value of a host setup fixture.
    pub fn value(name: &str) -> Result<serde_json::Value> {
        let raw = json(name)?;
        serde_json::from_str(&raw).with_context(|| format!("failed to parse host fixture {name}"))
    }
}
