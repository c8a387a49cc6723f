//! Text and markdown renderings of a quiz result.

use crate::scoring::QuizResult;

impl QuizResult {
    /// Suggested topics as a comma-separated list.
    pub fn suggested_topics(&self) -> String {
        self.weak_topics()
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The post-submission summary shown to the learner.
    pub fn to_summary_text(&self) -> String {
        let mut text = format!(
            "Your Cyber Awareness Score: {}/{} ({:.1}%)\n\nLevel: {}\n\n{}",
            self.score(),
            self.total(),
            self.percentage(),
            self.user_level().label(),
            self.user_level().feedback(),
        );
        if self.weak_topics().is_empty() {
            text.push_str("\n\nNo topics to review. Well done!");
        } else {
            text.push_str("\n\nSuggested Topics to Review:\n");
            text.push_str(&self.suggested_topics());
        }
        text
    }

    /// Format the result as markdown with a per-topic table.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Score:** {}/{} ({:.1}%) · **Level:** {}\n\n",
            self.score(),
            self.total(),
            self.percentage(),
            self.user_level().label()
        ));
        md.push_str(&format!("_Taken {}_\n\n", self.date().format("%Y-%m-%d %H:%M UTC")));

        md.push_str("| Topic | Correct | Score |\n");
        md.push_str("|-------|---------|-------|\n");
        for (topic, details) in self.topic_details() {
            md.push_str(&format!(
                "| {} | {}/{} | {}% |\n",
                topic,
                details.correct,
                details.total,
                details.percent()
            ));
        }

        if !self.weak_topics().is_empty() {
            md.push_str("\n### Suggested topics\n\n");
            for topic in self.weak_topics() {
                let errors = self.topic_errors().get(topic).copied().unwrap_or(0);
                match topic.module_id() {
                    Some(module) => md.push_str(&format!(
                        "- {topic} ({errors} wrong), read module `{module}`\n"
                    )),
                    None => md.push_str(&format!("- {topic} ({errors} wrong)\n")),
                }
            }
        }

        md
    }
}
