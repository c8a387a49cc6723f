//! cyberlit-backends: Storage, assistant, and configuration backends.
//!
//! Implements the core `KeyValueStore` trait over the filesystem and the
//! `AssistantService` trait over HTTP, plus config loading and factories.

pub mod assistant;
pub mod config;
pub mod error;
pub mod file_store;
pub mod mock;

pub use assistant::HttpAssistant;
pub use config::{create_assistant, create_store, load_config_from, CyberlitConfig, StorageKind};
pub use error::{failure_message, AssistantError};
pub use file_store::FileStore;
