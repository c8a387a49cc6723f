//! The `cyberlit ask` command.

use anyhow::{bail, Result};

use cyberlit_backends::{create_assistant, failure_message};

use super::GlobalOpts;

pub async fn execute(opts: &GlobalOpts, text: &str) -> Result<()> {
    let (config, engine) = opts.open_engine().await?;

    let Some(query) = engine.chat_query(text) else {
        bail!("nothing to ask: the question is empty");
    };

    let assistant = create_assistant(&config)?;
    match assistant.query(&query).await {
        Ok(reply) => println!("{}", reply.answer),
        Err(e) => {
            tracing::warn!(service = assistant.name(), error = %e, "assistant query failed");
            println!("{}", failure_message(&e));
        }
    }
    Ok(())
}
