//! Client sessions: external processes (standalone tools, render farms)
//! holding a live bridge to a host application.
//!
//! The table never keeps a session alive: entries are weak, so a client that
//! disconnects simply disappears from lookups and callers fall back to the
//! in-process provider.

use std::sync::{Arc, Weak};

use uuid::Uuid;

use crate::hosts::HostApp;
use crate::provider::DccProvider;

/// A connected client session wrapping the provider that answers for it.
pub struct DccClient {
    id: Uuid,
    key: String,
    provider: Arc<dyn DccProvider>,
}

impl DccClient {
    pub fn new(key: impl Into<String>, provider: Arc<dyn DccProvider>) -> Arc<Self> {
        Arc::new(Self {
            id: Uuid::new_v4(),
            key: key.into(),
            provider,
        })
    }

    /// Session id, unique per connection.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn provider(&self) -> &Arc<dyn DccProvider> {
        &self.provider
    }

    pub fn host(&self) -> HostApp {
        self.provider.host()
    }
}

/// Weak client table keyed by client key, insertion-ordered so the
/// "first client" fallback is deterministic.
#[derive(Default)]
pub struct ClientRegistry {
    entries: Vec<(String, Weak<DccClient>)>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a client. Re-registering a key replaces the previous session.
    pub fn register(&mut self, client: &Arc<DccClient>) {
        let weak = Arc::downgrade(client);
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|(key, _)| key == client.key())
        {
            entry.1 = weak;
        } else {
            self.entries.push((client.key().to_string(), weak));
        }
    }

    /// Live session under `key`; dead or missing sessions are absent.
    pub fn get(&self, key: &str) -> Option<Arc<DccClient>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, weak)| weak.upgrade())
    }

    /// First live session in registration order.
    pub fn first(&self) -> Option<Arc<DccClient>> {
        self.entries.iter().find_map(|(_, weak)| weak.upgrade())
    }

    /// All live sessions in registration order.
    pub fn all(&self) -> Vec<Arc<DccClient>> {
        self.entries
            .iter()
            .filter_map(|(_, weak)| weak.upgrade())
            .collect()
    }

    pub fn remove(&mut self, key: &str) {
        self.entries.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
