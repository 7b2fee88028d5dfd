//! Embedder-supplied setup.
//!
//! Outside a scripting host there is no namespace to probe, so whatever
//! embeds this layer states the host signal explicitly: the sentinel names
//! the process exposes, or a plain host name that expands to its sentinels.

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::hosts::{HostApp, HostEnv};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostSetup {
    /// Sentinel names the embedding process exposes.
    #[serde(default)]
    pub sentinels: Vec<String>,

    /// Optional explicit host; expands to that host's sentinels on top of
    /// the list above.
    #[serde(default)]
    pub host: Option<HostApp>,

    /// Project the tools run under.
    #[serde(default)]
    pub project: Option<String>,

    /// Override for the log directory; defaults to a fixed directory under
    /// the user's home.
    #[serde(default)]
    pub log_directory: Option<PathBuf>,
}

impl HostSetup {
    /// Setup for running outside any host.
    pub fn standalone() -> Self {
        Self::default()
    }

    /// Setup for a known host, carrying its sentinels.
    pub fn for_host(host: HostApp) -> Self {
        Self {
            host: Some(host),
            ..Self::default()
        }
    }

    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("failed to parse host setup JSON")
    }

    /// Build the sentinel environment this setup describes.
    pub fn env(&self) -> HostEnv {
        let mut env = HostEnv::from_sentinels(self.sentinels.iter().cloned());
        if let Some(host) = self.host {
            for sentinel in host.sentinels() {
                env.inject(*sentinel);
            }
        }
        env
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hosts::classify;

    #[test]
    fn default_setup_is_standalone() {
        let setup = HostSetup::standalone();
        assert!(setup.env().is_empty());
        assert_eq!(classify(&setup.env()), HostApp::Unknown);
    }

    #[test]
    fn explicit_host_expands_to_sentinels() {
        let setup = HostSetup::for_host(HostApp::Houdini);
        let env = setup.env();
        assert!(env.contains("hou"));
        assert_eq!(classify(&env), HostApp::Houdini);
    }

    #[test]
    fn json_with_raw_sentinels() {
        let setup = HostSetup::from_json_str(r#"{ "sentinels": ["cmds"], "project": "rig" }"#)
            .expect("setup should parse");
        assert_eq!(classify(&setup.env()), HostApp::Maya);
        assert_eq!(setup.project.as_deref(), Some("rig"));
    }

    #[test]
    fn json_with_host_name() {
        let setup = HostSetup::from_json_str(r#"{ "host": "max" }"#).unwrap();
        let env = setup.env();
        // Both Max sentinels are injected; either one classifies.
        assert!(env.contains("MaxPlus") && env.contains("pymxs"));
        assert_eq!(classify(&env), HostApp::Max);
    }
}
