//! The `cyberlit init` command.

use std::path::Path;

use anyhow::Result;

use cyberlit_backends::config::SAMPLE_CONFIG;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("cyberlit.toml"), SAMPLE_CONFIG)?;
    write_if_missing(Path::new("questions.toml"), SAMPLE_BANK)?;

    println!("\nNext steps:");
    println!("  1. Point [assistant] base_url in cyberlit.toml at your assistant service");
    println!("  2. Run: cyberlit validate --bank questions.toml");
    println!("  3. Run: cyberlit quiz");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_BANK: &str = r#"# A custom question bank. Set `question_bank = "questions.toml"` in
# cyberlit.toml to use it instead of the built-in questions.

[[questions]]
text = "What is the safest way to handle an unexpected email asking you to reset your password?"
options = [
    "Click the link right away",
    "Go to the site directly instead of using the link",
    "Reply with your current password",
    "Forward it to friends",
]
answer = "Go to the site directly instead of using the link"
topic = "Phishing"

[[questions]]
text = "Which network is riskiest for online banking?"
options = [
    "Your home network with WPA3",
    "A mobile data connection",
    "An open coffee-shop Wi-Fi",
]
answer = "An open coffee-shop Wi-Fi"
topic = "Public Wi-Fi Safety"

[[questions]]
text = "What does multi-factor authentication add?"
options = [
    "A longer password",
    "A second proof of identity",
    "Faster logins",
]
answer = "A second proof of identity"
topic = "Authentication and Access Control"
"#;
