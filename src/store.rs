use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Session used by clients that never send a session identifier.
pub const DEFAULT_SESSION: &str = "default";

/// In-memory store mapping a session identifier to the document texts of its
/// most recent upload batch. Each upload replaces its session's batch
/// wholesale; nothing survives a restart.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<String, Vec<String>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the entire batch stored for `session`.
    pub fn replace(&self, session: &str, texts: Vec<String>) {
        let mut map = self.inner.lock().unwrap();
        map.insert(session.to_string(), texts);
    }

    /// Returns a clone of the current batch for `session`, empty if the
    /// session has never uploaded.
    pub fn snapshot(&self, session: &str) -> Vec<String> {
        let map = self.inner.lock().unwrap();
        map.get(session).cloned().unwrap_or_default()
    }
}
