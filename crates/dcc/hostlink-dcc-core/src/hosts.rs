//! Host application identity and sentinel-based classification.
//!
//! Inside a scripting host the original signal is the presence of the host's
//! own API module in the interpreter's global namespace. Here the embedder
//! injects that signal explicitly: [`HostEnv`] holds the sentinel names the
//! surrounding process chose to expose, and [`classify`] is a pure function
//! of that set. Nothing is memoized, so injecting or removing a sentinel
//! changes the classification on the next probe.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported host applications plus the catch-all `Unknown`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HostApp {
    Maya,
    Max,
    Houdini,
    Nuke,
    #[serde(rename = "mobu")]
    MotionBuilder,
    Unreal,
    Unknown,
}

/// Fixed classification priority. First sentinel match wins, so a process
/// that pathologically exposes two sentinels at once still classifies
/// deterministically.
pub const CLASSIFY_ORDER: [HostApp; 6] = [
    HostApp::Maya,
    HostApp::Max,
    HostApp::Houdini,
    HostApp::Nuke,
    HostApp::MotionBuilder,
    HostApp::Unreal,
];

impl HostApp {
    pub const fn as_str(&self) -> &'static str {
        match self {
            HostApp::Maya => "maya",
            HostApp::Max => "max",
            HostApp::Houdini => "houdini",
            HostApp::Nuke => "nuke",
            HostApp::MotionBuilder => "mobu",
            HostApp::Unreal => "unreal",
            HostApp::Unknown => "unknown",
        }
    }

    /// Sentinel names whose presence signals this host. Max registers two
    /// equivalent sentinels; the classify order is the only disambiguation.
    pub const fn sentinels(&self) -> &'static [&'static str] {
        match self {
            HostApp::Maya => &["cmds"],
            HostApp::Max => &["MaxPlus", "pymxs"],
            HostApp::Houdini => &["hou"],
            HostApp::Nuke => &["nuke"],
            HostApp::MotionBuilder => &["pyfbsdk"],
            HostApp::Unreal => &["unreal"],
            HostApp::Unknown => &[],
        }
    }

    /// Scene file extensions the host reads and writes natively.
    pub const fn file_extensions(&self) -> &'static [&'static str] {
        match self {
            HostApp::Maya => &[".ma", ".mb"],
            HostApp::Max => &[".max"],
            HostApp::Houdini => &[".hip", ".hiplc"],
            HostApp::Nuke => &[".nk"],
            HostApp::MotionBuilder => &[".fbx"],
            HostApp::Unreal => &[".uasset"],
            HostApp::Unknown => &[],
        }
    }

    pub fn from_name(name: &str) -> HostApp {
        match name {
            "maya" => HostApp::Maya,
            "max" => HostApp::Max,
            "houdini" => HostApp::Houdini,
            "nuke" => HostApp::Nuke,
            "mobu" => HostApp::MotionBuilder,
            "unreal" => HostApp::Unreal,
            _ => HostApp::Unknown,
        }
    }
}

impl fmt::Display for HostApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The sentinel names the embedding process currently exposes. Mutable at
/// runtime; classification always reflects the latest state.
#[derive(Debug, Clone, Default)]
pub struct HostEnv {
    sentinels: HashSet<String>,
}

impl HostEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sentinels<I, S>(sentinels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sentinels: sentinels.into_iter().map(Into::into).collect(),
        }
    }

    /// Expose a sentinel name, as the host would on embedding startup.
    pub fn inject(&mut self, name: impl Into<String>) {
        self.sentinels.insert(name.into());
    }

    /// Withdraw a sentinel name. No-op if it was never injected.
    pub fn remove(&mut self, name: &str) {
        self.sentinels.remove(name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sentinels.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.sentinels.is_empty()
    }
}

/// Classify the active host from the injected sentinel set. Pure and
/// re-evaluated on every call; first match in [`CLASSIFY_ORDER`] wins.
pub fn classify(env: &HostEnv) -> HostApp {
    for host in CLASSIFY_ORDER {
        if host.sentinels().iter().any(|s| env.contains(s)) {
            return host;
        }
    }
    HostApp::Unknown
}

/// True when no known host sentinel is present at all.
pub fn is_standalone(env: &HostEnv) -> bool {
    CLASSIFY_ORDER
        .iter()
        .all(|host| !host.sentinels().iter().any(|s| env.contains(s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_each_host() {
        assert_eq!(classify(&HostEnv::from_sentinels(["cmds"])), HostApp::Maya);
        assert_eq!(
            classify(&HostEnv::from_sentinels(["MaxPlus"])),
            HostApp::Max
        );
        assert_eq!(classify(&HostEnv::from_sentinels(["pymxs"])), HostApp::Max);
        assert_eq!(
            classify(&HostEnv::from_sentinels(["hou"])),
            HostApp::Houdini
        );
        assert_eq!(classify(&HostEnv::from_sentinels(["nuke"])), HostApp::Nuke);
        assert_eq!(
            classify(&HostEnv::from_sentinels(["pyfbsdk"])),
            HostApp::MotionBuilder
        );
        assert_eq!(
            classify(&HostEnv::from_sentinels(["unreal"])),
            HostApp::Unreal
        );
    }

    #[test]
    fn empty_env_is_unknown_and_standalone() {
        let env = HostEnv::new();
        assert_eq!(classify(&env), HostApp::Unknown);
        assert!(is_standalone(&env));
    }

    #[test]
    fn priority_breaks_double_sentinel_ties() {
        // Maya outranks Houdini in the fixed order.
        let env = HostEnv::from_sentinels(["hou", "cmds"]);
        assert_eq!(classify(&env), HostApp::Maya);
        // Both Max sentinels together still classify as Max.
        let env = HostEnv::from_sentinels(["MaxPlus", "pymxs"]);
        assert_eq!(classify(&env), HostApp::Max);
    }

    #[test]
    fn classification_tracks_env_mutation() {
        let mut env = HostEnv::new();
        assert_eq!(classify(&env), HostApp::Unknown);
        env.inject("nuke");
        assert_eq!(classify(&env), HostApp::Nuke);
        env.remove("nuke");
        assert_eq!(classify(&env), HostApp::Unknown);
        assert!(is_standalone(&env));
    }

    #[test]
    fn unrecognized_sentinels_do_not_classify() {
        let env = HostEnv::from_sentinels(["bpy"]);
        assert_eq!(classify(&env), HostApp::Unknown);
        assert!(is_standalone(&env));
    }

    #[test]
    fn host_names_roundtrip() {
        for host in CLASSIFY_ORDER {
            assert_eq!(HostApp::from_name(host.as_str()), host);
        }
        assert_eq!(HostApp::from_name("blender"), HostApp::Unknown);
    }
}
