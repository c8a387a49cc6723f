//! Subcommand implementations and the setup they share.

pub mod ask;
pub mod init;
pub mod modules;
pub mod quiz;
pub mod results;
pub mod submit;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use cyberlit_backends::{create_store, load_config_from, CyberlitConfig, StorageKind};
use cyberlit_core::bank::{load_bank, QuestionBank};
use cyberlit_core::catalog::ModuleCatalog;
use cyberlit_core::progress::Persisted;
use cyberlit_core::LearningEngine;

/// Flags accepted by every subcommand.
pub struct GlobalOpts {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

impl GlobalOpts {
    /// Load config and apply command-line overrides.
    pub fn load_config(&self) -> Result<CyberlitConfig> {
        let mut config = load_config_from(self.config.as_deref())?;
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
            config.storage = StorageKind::File;
        }
        Ok(config)
    }

    /// Build an engine over the configured store and restore saved state.
    pub async fn open_engine(&self) -> Result<(CyberlitConfig, LearningEngine)> {
        let config = self.load_config()?;
        let bank = match &config.question_bank {
            Some(path) => load_bank(path)?,
            None => QuestionBank::builtin(),
        };
        let store = create_store(&config);
        tracing::debug!(
            store = store.name(),
            data_dir = %config.data_dir.display(),
            questions = bank.len(),
            "opening engine"
        );
        let mut engine = LearningEngine::new(bank, ModuleCatalog::builtin(), store);
        warn_if_unreadable(&engine.restore().await);
        Ok((config, engine))
    }
}

/// Tell the learner when a change only lives for this session.
pub fn warn_if_not_durable<T>(persisted: &Persisted<T>) {
    if let Some(warning) = &persisted.warning {
        eprintln!("Warning: progress was not saved ({warning}). It will be lost on exit.");
    }
}

/// Tell the learner when stored progress could not be read back.
pub fn warn_if_unreadable<T>(loaded: &Persisted<T>) {
    if let Some(warning) = &loaded.warning {
        eprintln!("Warning: stored progress could not be read ({warning}). Starting fresh.");
    }
}
