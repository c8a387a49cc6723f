//! Key-value persistence boundary.
//!
//! The engine only needs string keys and string values. Concrete backends
//! live in `cyberlit-backends`; [`MemoryStore`] here is the session-only
//! store and the test double.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StoreError;

/// Well-known key holding the latest quiz result.
pub const RESULT_KEY: &str = "cyber_results";

/// Key holding the completion map for `module_id`.
pub fn module_key(module_id: &str) -> String {
    format!("progress_{module_id}")
}

/// Trait for durable string key-value stores.
///
/// Implementations must give read-after-write consistency for a single
/// writer: a `get` issued after a completed `set` on the same key observes
/// the new value.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Backend name for logs (e.g. "file").
    fn name(&self) -> &str;

    /// Read a value. `Ok(None)` means the key was never written.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store. Values live as long as the store.
///
/// Reads and writes can be made to fail on demand to exercise the engine's
/// degradation paths.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    write_count: AtomicU32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, bypassing failure injection.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.lock().insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::Relaxed);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> u32 {
        self.write_count.load(Ordering::Relaxed)
    }

    /// Current raw value, bypassing failure injection.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map.
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads.load(Ordering::Relaxed) {
            return Err(StoreError::Unavailable(format!("read of '{key}' refused")));
        }
        Ok(self.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(StoreError::Unavailable(format!("write of '{key}' refused")));
        }
        self.lock().insert(key.to_string(), value.to_string());
        self.write_count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
