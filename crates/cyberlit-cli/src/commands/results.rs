//! The `cyberlit results` command.

use anyhow::Result;

use crate::ResultFormat;

use super::GlobalOpts;

pub async fn execute(opts: &GlobalOpts, format: ResultFormat) -> Result<()> {
    let (_, engine) = opts.open_engine().await?;

    let Some(result) = engine.current_result() else {
        println!("No quiz result yet. Run `cyberlit quiz` to take the assessment.");
        return Ok(());
    };

    match format {
        ResultFormat::Text => println!("{}", result.to_summary_text()),
        ResultFormat::Markdown => print!("{}", result.to_markdown()),
        ResultFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}
