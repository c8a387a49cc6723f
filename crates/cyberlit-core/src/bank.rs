//! The question bank: built-in quiz content plus TOML loading.
//!
//! Custom banks use the same shape as the built-in one:
//!
//! ```toml
//! [[questions]]
//! text = "Which tool can protect your data on public Wi-Fi?"
//! options = ["VPN", "Bluetooth"]
//! answer = "VPN"
//! topic = "Public Wi-Fi Safety"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::EngineError;
use crate::model::{Question, Topic};

/// An ordered, validated sequence of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank, checking every question's shape.
    ///
    /// An empty bank is accepted here; scoring rejects it.
    pub fn new(questions: Vec<Question>) -> Result<Self, EngineError> {
        for (index, q) in questions.iter().enumerate() {
            if q.options.len() < 2 {
                return Err(EngineError::InvalidInput(format!(
                    "question {index} has {} option(s), at least 2 required",
                    q.options.len()
                )));
            }
            if !q.options.contains(&q.correct_option) {
                return Err(EngineError::InvalidInput(format!(
                    "question {index}: correct option '{}' is not among its options",
                    q.correct_option
                )));
            }
        }
        Ok(Self { questions })
    }

    /// The 21-question bank shipped with the app.
    pub fn builtin() -> Self {
        Self {
            questions: builtin_questions(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Distinct topics in order of first occurrence.
    pub fn topics(&self) -> Vec<Topic> {
        let mut seen = Vec::new();
        for q in &self.questions {
            if !seen.contains(&q.topic) {
                seen.push(q.topic);
            }
        }
        seen
    }

    /// Number of questions for `topic`.
    pub fn topic_total(&self, topic: Topic) -> usize {
        self.questions.iter().filter(|q| q.topic == topic).count()
    }
}

#[derive(Debug, Deserialize)]
struct TomlBankFile {
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    text: String,
    options: Vec<String>,
    answer: String,
    topic: String,
}

/// Parse a question bank from a TOML file.
pub fn load_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;
    parse_bank_str(&content, path)
}

/// Parse a question bank from a TOML string (useful for testing).
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let topic: Topic = q.topic.parse().map_err(|e: String| anyhow::anyhow!("{}", e))?;
            Ok(Question {
                text: q.text,
                options: q.options,
                correct_option: q.answer,
                topic,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    QuestionBank::new(questions)
        .with_context(|| format!("invalid question bank: {}", source_path.display()))
}

/// A non-fatal finding from bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Index of the offending question, if the warning is question-specific.
    pub question: Option<usize>,
    pub message: String,
}

/// Check a bank for problems that do not prevent scoring.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if bank.is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "bank has no questions; submissions will be rejected".into(),
        });
    }

    for (index, q) in bank.questions().iter().enumerate() {
        if q.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                question: Some(index),
                message: "question text is empty".into(),
            });
        }
        let mut options = q.options.clone();
        options.sort();
        options.dedup();
        if options.len() != q.options.len() {
            warnings.push(ValidationWarning {
                question: Some(index),
                message: "duplicate options".into(),
            });
        }
        if q.options.iter().any(|o| o.is_empty()) {
            warnings.push(ValidationWarning {
                question: Some(index),
                message: "empty option would match an unanswered question".into(),
            });
        }
    }

    let topics = bank.topics();
    for topic in Topic::ALL {
        if !bank.is_empty() && !topics.contains(&topic) {
            warnings.push(ValidationWarning {
                question: None,
                message: format!("no questions for topic '{topic}'"),
            });
        }
    }

    warnings
}

fn builtin_questions() -> Vec<Question> {
    use Topic::*;

    vec![
        Question::new(
            "Which of these is a key aspect of cyber hygiene?",
            &[
                "Using strong passwords",
                "Keeping devices always unlocked",
                "Ignoring security updates",
                "Connecting to any available Wi-Fi",
            ],
            "Using strong passwords",
            CyberHygiene,
        ),
        Question::new(
            "What is the benefit of regular software updates?",
            &[
                "Improves appearance",
                "Fixes security vulnerabilities",
                "Makes device slower",
                "Increases battery usage",
            ],
            "Fixes security vulnerabilities",
            CyberHygiene,
        ),
        Question::new(
            "Why should you avoid using the same password for multiple accounts?",
            &[
                "Easier to remember",
                "Increases security risk",
                "Improves account performance",
                "Required by law",
            ],
            "Increases security risk",
            CyberHygiene,
        ),
        Question::new(
            "What is the safest way to access personal data on public Wi-Fi?",
            &[
                "Use HTTPS websites",
                "Turn off device security",
                "Connect to open networks",
                "Disable password protection",
            ],
            "Use HTTPS websites",
            PublicWifiSafety,
        ),
        Question::new(
            "Which tool can protect your data on public Wi-Fi?",
            &["VPN", "Bluetooth", "Cookies", "Data Saver Mode"],
            "VPN",
            PublicWifiSafety,
        ),
        Question::new(
            "When using public Wi-Fi, which of these should you avoid?",
            &[
                "Accessing banking apps",
                "Using HTTPS websites",
                "Updating your antivirus",
                "Disabling auto-connect",
            ],
            "Accessing banking apps",
            PublicWifiSafety,
        ),
        Question::new(
            "Which of the following is a common sign of a phishing email?",
            &[
                "Personalized greeting",
                "Misspellings and urgent tone",
                "Email from known address",
                "Contains only text",
            ],
            "Misspellings and urgent tone",
            Phishing,
        ),
        Question::new(
            "What should you do if you suspect an email is phishing?",
            &[
                "Reply to confirm details",
                "Click the link to check",
                "Report it as spam",
                "Ignore and keep it",
            ],
            "Report it as spam",
            Phishing,
        ),
        Question::new(
            "Which action is most likely to protect you from phishing attacks?",
            &[
                "Clicking unfamiliar links",
                "Ignoring email subjects",
                "Enabling multi-factor authentication",
                "Using common passwords",
            ],
            "Enabling multi-factor authentication",
            Phishing,
        ),
        Question::new(
            "Which of these indicates a secure website?",
            &[
                "HTTP in the URL",
                "HTTPS and a lock icon",
                "No address bar",
                "Red background",
            ],
            "HTTPS and a lock icon",
            SecureBrowsing,
        ),
        Question::new(
            "Why is it important to log out of websites on public computers?",
            &[
                "Saves time",
                "Prevents unauthorized access",
                "Boosts computer speed",
                "Improves internet connection",
            ],
            "Prevents unauthorized access",
            SecureBrowsing,
        ),
        Question::new(
            "What should you do if your browser warns you about a suspicious website?",
            &[
                "Ignore the warning",
                "Close the browser",
                "Proceed with caution",
                "Leave the site immediately",
            ],
            "Leave the site immediately",
            SecureBrowsing,
        ),
        Question::new(
            "What does multi-factor authentication (MFA) provide?",
            &[
                "Improved battery life",
                "Stronger account security",
                "Faster access",
                "Reduced security",
            ],
            "Stronger account security",
            AuthenticationAndAccessControl,
        ),
        Question::new(
            "Which is considered a weak password?",
            &["123456", "Pass@123", "SecureKey!45", "MyDog@Home4"],
            "123456",
            AuthenticationAndAccessControl,
        ),
        Question::new(
            "What should you do if you think someone has accessed your account without permission?",
            &[
                "Ignore it",
                "Change your password immediately",
                "Delete the account",
                "Report it to friends",
            ],
            "Change your password immediately",
            AuthenticationAndAccessControl,
        ),
        Question::new(
            "Why is it important to enable encryption on your device?",
            &[
                "Improves device speed",
                "Prevents unauthorized access to data",
                "Saves battery life",
                "Increases storage",
            ],
            "Prevents unauthorized access to data",
            DeviceSecurityAndEncryption,
        ),
        Question::new(
            "What is a common way to protect mobile devices from theft?",
            &[
                "Leaving it unlocked",
                "Enabling screen lock",
                "Sharing password",
                "Turning off GPS",
            ],
            "Enabling screen lock",
            DeviceSecurityAndEncryption,
        ),
        Question::new(
            "What should you do before disposing of an old device?",
            &[
                "Clear storage",
                "Reset to factory settings",
                "Delete a few files",
                "Nothing",
            ],
            "Reset to factory settings",
            DeviceSecurityAndEncryption,
        ),
        Question::new(
            "What information should you avoid sharing on social media?",
            &["Vacation plans", "Favorite movie", "Public news", "Hobby"],
            "Vacation plans",
            DataPrivacy,
        ),
        Question::new(
            "Which is an example of personal data you should protect?",
            &[
                "Name of favorite pet",
                "Credit card details",
                "Favorite color",
                "Nickname",
            ],
            "Credit card details",
            DataPrivacy,
        ),
        Question::new(
            "What is a safe way to store sensitive data?",
            &[
                "Cloud storage without encryption",
                "Encrypted storage",
                "On a sticky note",
                "Shared with friends",
            ],
            "Encrypted storage",
            DataPrivacy,
        ),
    ]
}
