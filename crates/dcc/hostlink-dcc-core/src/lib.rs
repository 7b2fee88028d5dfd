//! hostlink-dcc-core
//!
//! Reroute layer between tool code and whichever DCC host application is
//! embedding it. Tools call the abstract [`DccProvider`] surface through a
//! [`DccContext`]; the context resolves the provider registered under the
//! `"Dcc"` capability key and forwards the call, falling back to
//! [`UnknownDcc`] so code running outside any host degrades gracefully
//! instead of crashing.
//!
//! Host identity is never probed from ambient process state: the embedder
//! injects the sentinel names its interpreter exposes ([`HostEnv`]) and
//! classification stays a pure function of that set.

pub mod callbacks;
pub mod clients;
pub mod config;
pub mod context;
pub mod error;
pub mod hosts;
pub mod logs;
pub mod progress;
pub mod provider;
pub mod registry;
pub mod unknown;

pub use crate::callbacks::{CallbackKind, DccCallback};
pub use crate::clients::{ClientRegistry, DccClient};
pub use crate::config::HostSetup;
pub use crate::context::{DccContext, DccHandle};
pub use crate::error::{DccError, DccResult};
pub use crate::hosts::{classify, is_standalone, HostApp, HostEnv, CLASSIFY_ORDER};
pub use crate::progress::{NullProgressBar, ProgressBar};
pub use crate::provider::{DccProvider, Space};
pub use crate::registry::{keys, CapabilityRegistry};
pub use crate::unknown::UnknownDcc;

// Re-export the value/path API so tools depend on one crate.
pub use hostlink_api_core::{NodePath, PathError, Value, ValueKind};
