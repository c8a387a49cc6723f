//! The `cyberlit quiz` command.

use std::io::{BufRead, Write};

use anyhow::Result;

use cyberlit_core::bank::QuestionBank;
use cyberlit_core::scoring::AnswerSet;

use super::{warn_if_not_durable, GlobalOpts};

pub async fn execute(opts: &GlobalOpts) -> Result<()> {
    let (_, mut engine) = opts.open_engine().await?;

    let answers = {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        collect_answers(engine.bank(), stdin.lock(), stdout.lock())?
    };

    let persisted = engine.submit(&answers).await?;
    println!("\n{}", persisted.value.to_summary_text());
    warn_if_not_durable(&persisted);
    Ok(())
}

/// Ask every question in order and record the chosen options.
///
/// An empty line skips a question. End of input leaves the remaining
/// questions unanswered.
pub fn collect_answers<R: BufRead, W: Write>(
    bank: &QuestionBank,
    mut input: R,
    mut out: W,
) -> Result<AnswerSet> {
    let mut answers = AnswerSet::unanswered(bank.len());
    let mut line = String::new();

    'questions: for (index, question) in bank.questions().iter().enumerate() {
        writeln!(
            out,
            "\nQuestion {}/{} [{}]\n{}",
            index + 1,
            bank.len(),
            question.topic,
            question.text
        )?;
        for (n, option) in question.options.iter().enumerate() {
            writeln!(out, "  {}) {}", n + 1, option)?;
        }

        loop {
            write!(out, "Answer (1-{}, Enter to skip): ", question.options.len())?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break 'questions;
            }
            let choice = line.trim();
            if choice.is_empty() {
                break;
            }
            match choice.parse::<usize>() {
                Ok(n) if (1..=question.options.len()).contains(&n) => {
                    answers.select(index, question.options[n - 1].clone());
                    break;
                }
                _ => writeln!(
                    out,
                    "Please enter a number between 1 and {}.",
                    question.options.len()
                )?,
            }
        }
    }

    Ok(answers)
}
