// File: src/session.rs
// Purpose: Explicit session store for the current patient

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use mediform::domain::Patient;

const SESSION_KEY: &str = "patient";

/// Key-value storage behind the session store.
///
/// Stands in for browser-local storage; the application supplies one
/// backend instance and passes the store by reference to whatever needs
/// the current identity. There is no ambient global lookup.
pub trait SessionBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);
}

/// In-memory backend, the default for the mock application and tests
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.entries.lock().unwrap().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

/// Load/save/clear lifecycle for the signed-in patient
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn SessionBackend>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::default()))
    }

    /// Current patient, if a session exists.
    ///
    /// A payload that no longer deserializes is logged, removed and
    /// treated as no session.
    pub fn load(&self) -> Option<Patient> {
        let raw = self.backend.get(SESSION_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(patient) => Some(patient),
            Err(error) => {
                tracing::warn!("Discarding corrupt session payload: {error}");
                self.backend.remove(SESSION_KEY);
                None
            }
        }
    }

    pub fn save(&self, patient: &Patient) -> anyhow::Result<()> {
        let raw = serde_json::to_string(patient)?;
        self.backend.set(SESSION_KEY, raw);
        Ok(())
    }

    pub fn clear(&self) {
        self.backend.remove(SESSION_KEY);
    }
}
