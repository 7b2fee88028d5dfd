//! Catalogue of host events tools can subscribe to.
//!
//! Mirrors the notification surface shared by the supported hosts. `Simple`
//! callbacks fire with no payload; `Filter` callbacks receive the affected
//! object and may veto or rewrite the change.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CallbackKind {
    Simple,
    Filter,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DccCallback {
    Shutdown,
    Tick,
    ScenePreCreated,
    ScenePostCreated,
    SceneNewRequested,
    SceneNewFinished,
    SceneSaveRequested,
    SceneSaveFinished,
    SceneOpenRequested,
    SceneOpenFinished,
    UserPropertyPreChanged,
    UserPropertyPostChanged,
    NodeSelect,
    NodeAdded,
    NodeDeleted,
}

impl DccCallback {
    /// Every callback the abstraction layer understands, declaration order.
    pub const fn all() -> &'static [DccCallback] {
        &[
            DccCallback::Shutdown,
            DccCallback::Tick,
            DccCallback::ScenePreCreated,
            DccCallback::ScenePostCreated,
            DccCallback::SceneNewRequested,
            DccCallback::SceneNewFinished,
            DccCallback::SceneSaveRequested,
            DccCallback::SceneSaveFinished,
            DccCallback::SceneOpenRequested,
            DccCallback::SceneOpenFinished,
            DccCallback::UserPropertyPreChanged,
            DccCallback::UserPropertyPostChanged,
            DccCallback::NodeSelect,
            DccCallback::NodeAdded,
            DccCallback::NodeDeleted,
        ]
    }

    pub const fn name(&self) -> &'static str {
        match self {
            DccCallback::Shutdown => "Shutdown",
            DccCallback::Tick => "Tick",
            DccCallback::ScenePreCreated => "ScenePreCreated",
            DccCallback::ScenePostCreated => "ScenePostCreated",
            DccCallback::SceneNewRequested => "SceneNewRequested",
            DccCallback::SceneNewFinished => "SceneNewFinished",
            DccCallback::SceneSaveRequested => "SceneSaveRequested",
            DccCallback::SceneSaveFinished => "SceneSaveFinished",
            DccCallback::SceneOpenRequested => "SceneOpenRequested",
            DccCallback::SceneOpenFinished => "SceneOpenFinished",
            DccCallback::UserPropertyPreChanged => "UserPropertyPreChanged",
            DccCallback::UserPropertyPostChanged => "UserPropertyPostChanged",
            DccCallback::NodeSelect => "NodeSelect",
            DccCallback::NodeAdded => "NodeAdded",
            DccCallback::NodeDeleted => "NodeDeleted",
        }
    }

    /// Property and node callbacks carry a payload and can veto; lifecycle
    /// callbacks are plain notifications.
    pub const fn kind(&self) -> CallbackKind {
        match self {
            DccCallback::UserPropertyPreChanged
            | DccCallback::UserPropertyPostChanged
            | DccCallback::NodeSelect
            | DccCallback::NodeAdded
            | DccCallback::NodeDeleted => CallbackKind::Filter,
            _ => CallbackKind::Simple,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_is_complete_and_named() {
        let all = DccCallback::all();
        assert_eq!(all.len(), 15);
        for cb in all {
            assert!(!cb.name().is_empty());
        }
    }

    #[test]
    fn node_and_property_callbacks_are_filters() {
        assert_eq!(DccCallback::NodeAdded.kind(), CallbackKind::Filter);
        assert_eq!(
            DccCallback::UserPropertyPreChanged.kind(),
            CallbackKind::Filter
        );
        assert_eq!(DccCallback::Tick.kind(), CallbackKind::Simple);
        assert_eq!(DccCallback::SceneSaveFinished.kind(), CallbackKind::Simple);
    }
}
