//! The `cyberlit modules`, `articles` and `toggle` commands.

use anyhow::{bail, Result};
use comfy_table::{Cell, Table};

use super::{warn_if_not_durable, warn_if_unreadable, GlobalOpts};

pub async fn list(opts: &GlobalOpts) -> Result<()> {
    let (_, mut engine) = opts.open_engine().await?;

    let recommended: Vec<&'static str> = engine
        .current_result()
        .map(|r| r.weak_topics().iter().filter_map(|t| t.module_id()).collect())
        .unwrap_or_default();

    let modules: Vec<(String, String)> = engine
        .catalog()
        .modules()
        .iter()
        .map(|m| (m.id.clone(), m.title.clone()))
        .collect();

    let mut table = Table::new();
    table.set_header(vec!["Module", "Title", "Read", "Progress", ""]);
    for (id, title) in &modules {
        let progress = engine.module_progress(id).await;
        let marker = if recommended.contains(&id.as_str()) {
            "review"
        } else {
            ""
        };
        table.add_row(vec![
            Cell::new(id),
            Cell::new(title),
            Cell::new(format!("{}/{}", progress.completed, progress.total)),
            Cell::new(format!("{}%", progress.percent)),
            Cell::new(marker),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn articles(opts: &GlobalOpts, module_id: &str) -> Result<()> {
    let (_, mut engine) = opts.open_engine().await?;

    let Some(module) = engine.catalog().module(module_id).cloned() else {
        bail!("unknown module '{module_id}'; run `cyberlit modules` to list them");
    };

    let loaded = engine.completion(module_id).await;
    warn_if_unreadable(&loaded);
    let completion = loaded.value;
    println!("{}\n\n{}\n", module.title, module.summary);
    for article in &module.articles {
        let mark = if completion.is_completed(&article.title) {
            "x"
        } else {
            " "
        };
        println!("[{mark}] {}\n    {}", article.title, article.link);
    }

    let progress = engine.module_progress(module_id).await;
    println!(
        "\n{}/{} read ({}%)",
        progress.completed, progress.total, progress.percent
    );
    Ok(())
}

pub async fn toggle(opts: &GlobalOpts, module_id: &str, title: &str) -> Result<()> {
    let (_, mut engine) = opts.open_engine().await?;

    let persisted = engine.toggle_article(module_id, title).await?;
    let state = if persisted.value.is_completed(title) {
        "read"
    } else {
        "unread"
    };
    warn_if_not_durable(&persisted);

    let progress = engine.module_progress(module_id).await;
    println!(
        "Marked '{title}' as {state}. {module_id}: {}/{} read ({}%)",
        progress.completed, progress.total, progress.percent
    );
    Ok(())
}
