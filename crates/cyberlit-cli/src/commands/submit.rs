//! The `cyberlit submit` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use cyberlit_core::scoring::AnswerSet;

use super::{warn_if_not_durable, GlobalOpts};

pub async fn execute(opts: &GlobalOpts, answers_path: PathBuf) -> Result<()> {
    let content = std::fs::read_to_string(&answers_path)
        .with_context(|| format!("failed to read answers: {}", answers_path.display()))?;
    let answers: AnswerSet = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse answers: {}", answers_path.display()))?;

    let (_, mut engine) = opts.open_engine().await?;
    let persisted = engine.submit(&answers).await?;

    println!("{}", persisted.value.to_summary_text());
    warn_if_not_durable(&persisted);
    Ok(())
}
