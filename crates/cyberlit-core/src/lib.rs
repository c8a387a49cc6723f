//! cyberlit-core: Assessment, leveling, and progress engine.
//!
//! This crate turns quiz answers and article toggles into durable learner
//! state: score, per-topic breakdown, ranked weak topics, and proficiency
//! level. Storage and the assistant service are reached through traits.

pub mod bank;
pub mod catalog;
pub mod completion;
pub mod context;
pub mod engine;
pub mod error;
pub mod leveling;
pub mod model;
pub mod progress;
pub mod report;
pub mod scoring;
pub mod store;

pub use engine::LearningEngine;
pub use error::{EngineError, StoreError};
pub use model::{Level, Question, Topic};
pub use scoring::{AnswerSet, QuizResult};
