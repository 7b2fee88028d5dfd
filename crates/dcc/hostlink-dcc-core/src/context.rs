//! The reroute dispatcher.
//!
//! `DccContext` is the owning, explicitly-passed context the rest of a tool
//! stack talks to: it holds the capability registry, the injected host
//! environment and the client table. Dispatching an abstract operation is a
//! resolve-then-forward: the provider registered under the `"Dcc"` key
//! answers, or the built-in [`UnknownDcc`] fallback does when nothing is
//! registered (or a weak registration died). Arguments and results pass
//! through untouched; trait dispatch does the forwarding.

use std::sync::Arc;

use log::debug;

use crate::callbacks::DccCallback;
use crate::clients::{ClientRegistry, DccClient};
use crate::config::HostSetup;
use crate::hosts::{classify, is_standalone, HostApp, HostEnv};
use crate::provider::DccProvider;
use crate::registry::{keys, CapabilityRegistry};
use crate::unknown::UnknownDcc;

/// Concrete handle stored in the registry under [`keys::DCC`]. The newtype
/// keeps the provider downcastable through `Any`.
#[derive(Clone)]
pub struct DccHandle(pub Arc<dyn DccProvider>);

pub struct DccContext {
    registry: CapabilityRegistry,
    env: HostEnv,
    clients: ClientRegistry,
    fallback: Arc<dyn DccProvider>,
}

impl DccContext {
    /// Context with an empty host environment (standalone).
    pub fn new() -> Self {
        let mut registry = CapabilityRegistry::new();
        // The callback catalogue is a capability like any other.
        registry.register(keys::CALLBACKS, DccCallback::all().to_vec());

        Self {
            registry,
            env: HostEnv::new(),
            clients: ClientRegistry::new(),
            fallback: Arc::new(UnknownDcc::new()),
        }
    }

    /// Context for a pre-built host environment.
    pub fn with_env(env: HostEnv) -> Self {
        let mut ctx = Self::new();
        ctx.env = env;
        ctx
    }

    /// Context from an embedder-supplied setup.
    pub fn from_setup(setup: &HostSetup) -> Self {
        Self::with_env(setup.env())
    }

    /// Register the active provider, builder style.
    pub fn with_dcc(mut self, provider: Arc<dyn DccProvider>) -> Self {
        self.set_dcc(provider);
        self
    }

    /// Register the active provider under the `"Dcc"` key. Last writer wins.
    pub fn set_dcc(&mut self, provider: Arc<dyn DccProvider>) {
        debug!("registering `{}` as the active provider", provider.name());
        self.registry.register(keys::DCC, DccHandle(provider));
    }

    /// Resolve the provider that answers abstract operations right now.
    /// Absent registration falls back to [`UnknownDcc`] silently; this is
    /// the "no host" path and is not an error.
    pub fn dcc(&self) -> Arc<dyn DccProvider> {
        match self.registry.resolve_as::<DccHandle>(keys::DCC) {
            Some(handle) => handle.0.clone(),
            None => self.fallback.clone(),
        }
    }

    /// Classify the active host. Re-probes the sentinel set on every call;
    /// nothing is cached.
    pub fn host(&self) -> HostApp {
        classify(&self.env)
    }

    pub fn is_maya(&self) -> bool {
        self.host_sentinel_present(HostApp::Maya)
    }

    pub fn is_max(&self) -> bool {
        self.host_sentinel_present(HostApp::Max)
    }

    pub fn is_houdini(&self) -> bool {
        self.host_sentinel_present(HostApp::Houdini)
    }

    pub fn is_nuke(&self) -> bool {
        self.host_sentinel_present(HostApp::Nuke)
    }

    pub fn is_mobu(&self) -> bool {
        self.host_sentinel_present(HostApp::MotionBuilder)
    }

    pub fn is_unreal(&self) -> bool {
        self.host_sentinel_present(HostApp::Unreal)
    }

    pub fn is_standalone(&self) -> bool {
        is_standalone(&self.env)
    }

    // Sentinel presence is checked per host, independent of the classify
    // priority: a pathological double-sentinel process answers true for both.
    fn host_sentinel_present(&self, host: HostApp) -> bool {
        host.sentinels().iter().any(|s| self.env.contains(s))
    }

    pub fn env(&self) -> &HostEnv {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut HostEnv {
        &mut self.env
    }

    pub fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CapabilityRegistry {
        &mut self.registry
    }

    /// Track a client session (held weakly).
    pub fn register_client(&mut self, client: &Arc<DccClient>) {
        self.clients.register(client);
    }

    /// Live client under `key`, or the first live client when `key` is
    /// `None`.
    pub fn client(&self, key: Option<&str>) -> Option<Arc<DccClient>> {
        match key {
            Some(key) => self.clients.get(key),
            None => self.clients.first(),
        }
    }

    /// All live client sessions.
    pub fn clients(&self) -> Vec<Arc<DccClient>> {
        self.clients.all()
    }

    /// Provider for a client session, falling back to the active in-process
    /// provider when the client is gone or was never registered.
    pub fn client_provider(&self, key: Option<&str>) -> Arc<dyn DccProvider> {
        match self.client(key) {
            Some(client) => client.provider().clone(),
            None => self.dcc(),
        }
    }
}

impl Default for DccContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_provider_when_nothing_registered() {
        let ctx = DccContext::new();
        assert_eq!(ctx.dcc().name(), "unknown");
        assert_eq!(ctx.host(), HostApp::Unknown);
        assert!(ctx.is_standalone());
    }

    #[test]
    fn registered_provider_answers() {
        let ctx = DccContext::new().with_dcc(Arc::new(UnknownDcc::new()));
        // Still the unknown provider, but now resolved through the registry.
        assert!(ctx.registry().contains(keys::DCC));
        assert_eq!(ctx.dcc().name(), "unknown");
    }

    #[test]
    fn host_checks_follow_env_mutation() {
        let mut ctx = DccContext::new();
        assert!(!ctx.is_maya());
        ctx.env_mut().inject("cmds");
        assert!(ctx.is_maya());
        assert_eq!(ctx.host(), HostApp::Maya);
        ctx.env_mut().remove("cmds");
        assert!(!ctx.is_maya());
    }

    #[test]
    fn is_checks_are_independent_of_priority() {
        let mut ctx = DccContext::new();
        ctx.env_mut().inject("cmds");
        ctx.env_mut().inject("hou");
        // Classification picks Maya, but both sentinel checks answer.
        assert_eq!(ctx.host(), HostApp::Maya);
        assert!(ctx.is_maya());
        assert!(ctx.is_houdini());
    }

    #[test]
    fn callback_catalogue_registered_at_startup() {
        let ctx = DccContext::new();
        let callbacks = ctx
            .registry()
            .resolve_as::<Vec<DccCallback>>(keys::CALLBACKS)
            .expect("catalogue missing");
        assert_eq!(callbacks.len(), DccCallback::all().len());
    }

    #[test]
    fn client_provider_falls_back_to_dcc() {
        let mut ctx = DccContext::new();
        let client = DccClient::new("maya-1", Arc::new(UnknownDcc::new()));
        ctx.register_client(&client);

        assert!(ctx.client(Some("maya-1")).is_some());
        drop(client);
        // Dead session: lookup degenerates to the in-process provider.
        assert!(ctx.client(Some("maya-1")).is_none());
        assert_eq!(ctx.client_provider(Some("maya-1")).name(), "unknown");
    }
}
