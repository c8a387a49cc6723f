//! Core data model types for cyberlit.
//!
//! Topics and levels are closed sets, so every lookup keyed by them is an
//! exhaustive `match` rather than a string table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A labeled category grouping related questions.
///
/// Variant order is the order topics appear in the built-in question bank;
/// the derived `Ord` keeps per-topic maps in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "Cyber Hygiene")]
    CyberHygiene,
    #[serde(rename = "Public Wi-Fi Safety")]
    PublicWifiSafety,
    #[serde(rename = "Phishing")]
    Phishing,
    #[serde(rename = "Secure Browsing")]
    SecureBrowsing,
    #[serde(rename = "Authentication and Access Control")]
    AuthenticationAndAccessControl,
    #[serde(rename = "Device Security and Encryption")]
    DeviceSecurityAndEncryption,
    #[serde(rename = "Data Privacy")]
    DataPrivacy,
}

impl Topic {
    /// Every topic, in bank order.
    pub const ALL: [Topic; 7] = [
        Topic::CyberHygiene,
        Topic::PublicWifiSafety,
        Topic::Phishing,
        Topic::SecureBrowsing,
        Topic::AuthenticationAndAccessControl,
        Topic::DeviceSecurityAndEncryption,
        Topic::DataPrivacy,
    ];

    /// Human-readable name; also the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Topic::CyberHygiene => "Cyber Hygiene",
            Topic::PublicWifiSafety => "Public Wi-Fi Safety",
            Topic::Phishing => "Phishing",
            Topic::SecureBrowsing => "Secure Browsing",
            Topic::AuthenticationAndAccessControl => "Authentication and Access Control",
            Topic::DeviceSecurityAndEncryption => "Device Security and Encryption",
            Topic::DataPrivacy => "Data Privacy",
        }
    }

    /// The catalog module that covers this topic, if any.
    pub fn module_id(&self) -> Option<&'static str> {
        match self {
            Topic::CyberHygiene => Some("introtocyber"),
            Topic::PublicWifiSafety => Some("publicwifi"),
            Topic::Phishing => Some("phishing"),
            Topic::SecureBrowsing => Some("securebrowsing"),
            Topic::AuthenticationAndAccessControl => Some("authandaccess"),
            Topic::DeviceSecurityAndEncryption => Some("dataencrypt"),
            Topic::DataPrivacy => None,
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Topic::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown topic: {wanted}"))
    }
}

/// Coarse proficiency tier derived from the quiz percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Capitalized label for badges and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    /// Encouragement shown after a submission.
    pub fn feedback(&self) -> &'static str {
        match self {
            Level::Beginner => "Great start! Let's build your cybersecurity knowledge together.",
            Level::Intermediate => "Good job! You have solid foundations to build upon.",
            Level::Advanced => "Excellent! You're demonstrating advanced cybersecurity awareness.",
        }
    }

    /// Badge colour as a hex RGB string.
    pub fn badge_color(&self) -> &'static str {
        match self {
            Level::Beginner => "#FF6B6B",
            Level::Intermediate => "#4ECDC4",
            Level::Advanced => "#1DD1A1",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Beginner => write!(f, "beginner"),
            Level::Intermediate => write!(f, "intermediate"),
            Level::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            other => Err(format!("unknown level: {other}")),
        }
    }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The prompt shown to the learner.
    pub text: String,
    /// Answer options, in display order.
    pub options: Vec<String>,
    /// The correct option; must equal one element of `options`.
    pub correct_option: String,
    /// Topic this question belongs to.
    pub topic: Topic,
}

impl Question {
    pub fn new(text: &str, options: &[&str], correct_option: &str, topic: Topic) -> Self {
        Self {
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_option: correct_option.to_string(),
            topic,
        }
    }

    /// Exact, case-sensitive comparison against the correct option.
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_option
    }
}

/// Correct/total counts for one topic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicScore {
    pub correct: u32,
    pub total: u32,
}

impl TopicScore {
    /// Number of wrong or unanswered questions.
    pub fn errors(&self) -> u32 {
        self.total.saturating_sub(self.correct)
    }

    /// Rounded percentage correct, 0 for an empty topic.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (f64::from(self.correct) * 100.0 / f64::from(self.total)).round() as u32
    }
}
