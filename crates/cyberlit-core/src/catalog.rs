//! Reading modules: summaries and article lists keyed by module id.

use serde::{Deserialize, Serialize};

/// Summary shown for a module id the catalog does not know.
pub const FALLBACK_SUMMARY: &str = "Explore articles on this topic.";

/// A single reading item. The title is its identity within a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
}

/// One reading module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Stable identifier, also used in storage keys.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    pub summary: String,
    pub articles: Vec<Article>,
}

/// The set of reading modules available to the learner.
#[derive(Debug, Clone)]
pub struct ModuleCatalog {
    modules: Vec<Module>,
}

impl ModuleCatalog {
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }

    /// The six modules shipped with the app.
    pub fn builtin() -> Self {
        Self::new(builtin_modules())
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Articles for `id`; empty for an unknown module.
    pub fn articles(&self, id: &str) -> &[Article] {
        self.module(id).map(|m| m.articles.as_slice()).unwrap_or(&[])
    }

    pub fn summary(&self, id: &str) -> &str {
        self.module(id)
            .map(|m| m.summary.as_str())
            .unwrap_or(FALLBACK_SUMMARY)
    }

    /// Titles of a module's articles, in display order.
    pub fn article_titles(&self, id: &str) -> Vec<&str> {
        self.articles(id).iter().map(|a| a.title.as_str()).collect()
    }
}

fn module(id: &str, title: &str, summary: &str, articles: &[(&str, &str)]) -> Module {
    Module {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        articles: articles
            .iter()
            .map(|(title, link)| Article {
                title: title.to_string(),
                link: link.to_string(),
            })
            .collect(),
    }
}

fn builtin_modules() -> Vec<Module> {
    vec![
        module(
            "introtocyber",
            "Intro to Cyber Hygiene",
            "Cyber hygiene refers to basic practices that keep devices and data secure, like using antivirus software, regularly updating systems, and managing passwords. Good cyber hygiene helps prevent malware infections and data breaches.",
            &[
                ("Video 1", "https://www.youtube.com/watch?v=7MN8gNQ2FO4"),
                ("Video 2", "https://www.youtube.com/watch?v=gkntvvvaFns"),
                ("The Importance of Using HTTPS", "https://www.cloudflare.com/learning/ssl/why-use-https/"),
                ("Cyber Hygiene 101", "https://snyk.io/learn/cybersecurity-hygiene/"),
                ("What is Cybersecurity? Everything You Need to Know", "https://www.simplilearn.com/introduction-to-cyber-security-article"),
                ("Introduction to Cybersecurity: What Beginners Need to Know", "https://digitalskills.engin.umich.edu/cybersecurity/introduction-to-cybersecurity/"),
            ],
        ),
        module(
            "publicwifi",
            "Public Wi-Fi",
            "Public Wi-Fi networks are convenient but can expose users to data interception by hackers. To protect your data from unauthorized access, use a VPN, avoid sensitive activities like online banking, and disable file sharing.",
            &[
                ("Video 1", "https://www.youtube.com/watch?v=9Wk3zwlpOYY"),
                ("How to Stay Safe on Public Wi-Fi", "https://www.kaspersky.co.uk/resource-center/preemptive-safety/public-wifi"),
                ("The Dangers of Using Public Wi-Fi (and How To Stay Safe)", "https://www.aura.com/learn/dangers-of-public-wi-fi"),
                ("Are Public Wi-Fi Networks Safe?", "https://consumer.ftc.gov/articles/are-public-wi-fi-networks-safe-what-you-need-know"),
                ("Public Wi-Fi: A guide to the risks and how to stay safe", "https://us.norton.com/blog/privacy/public-wifi"),
            ],
        ),
        module(
            "phishing",
            "Phishing",
            "Phishing attacks trick individuals into sharing private information by posing as trustworthy entities, often through fake emails, texts, or websites. Recognizing signs like urgent requests or suspicious links can help prevent data theft.",
            &[
                ("Video 1", "https://www.youtube.com/watch?v=3GBmpqhQI8s"),
                ("Video 2", "https://www.youtube.com/watch?v=XBkzBrXlle0"),
                ("What is Phishing?", "https://www.fbi.gov/how-we-can-help-you/scams-and-safety/common-frauds-and-scams/spoofing-and-phishing"),
                ("Recognizing Phishing Emails", "https://www.cisa.gov/secure-our-world/teach-employees-avoid-phishing"),
                ("Phishing: A Threat You Can Avoid", "https://learn.microsoft.com/en-us/microsoft-365/business-premium/m365bp-avoid-phishing-and-attacks"),
                ("How to Spot a Phishing Attack", "https://www.ftc.gov/business-guidance/small-businesses/cybersecurity/phishing"),
                ("Phishing attacks", "https://www.ncsc.gov.uk/guidance/phishing"),
                ("How to Recognize And Avoid Phishing", "https://consumer.ftc.gov/articles/how-recognize-and-avoid-phishing-scams"),
            ],
        ),
        module(
            "securebrowsing",
            "Secure Browsing",
            "Secure browsing practices, such as using HTTPS websites, avoiding suspicious links, and enabling browser security features, help protect data from online threats. Regularly updating browsers and using reputable antivirus software also add layers of protection.",
            &[
                ("Video 1", "https://www.youtube.com/watch?v=hjPKXBYxTWM"),
                ("Video 2", "https://www.youtube.com/watch?v=dfIw4Tiy1jY"),
                ("Best Practices for Secure Browsing", "https://internetprivacy.com/safe-browsing-practices/"),
                ("The Importance of Using HTTPS", "https://www.cloudflare.com/learning/ssl/why-use-https/"),
                ("Is This Website Safe?", "https://www.avast.com/c-website-safety-check-guide"),
                ("A guide to browsing the internet safely", "https://levelblue.com/blogs/security-essentials/secure-browsing-a-guide-to-browsing-the-internet-safely"),
                ("10 Best Practices to Protect Your Digital Privacy", "https://www.ntiva.com/blog/10-best-practices-for-safe-internet-browsing"),
            ],
        ),
        module(
            "authandaccess",
            "Authentication and Access",
            "Authentication and access control ensure that only authorized users can access systems and data. Strong passwords, multi-factor authentication (MFA), and secure password management are key to protecting accounts.",
            &[
                ("Video 1", "https://www.youtube.com/watch?v=ngltcjbystg"),
                ("Video 2", "https://www.youtube.com/watch?v=F_RHy0ox3a8"),
                ("Why Password Management is Important", "https://blog.lastpass.com/posts/2024/08/password-hygiene"),
                ("How to Create a Strong Password", "https://www.vic.gov.au/passwords"),
                ("Password Security: Best Practices for 2024", "https://novatech.net/blog/password-security-in-2024-a-deep-dive-into-best-practices"),
                ("What are the Appropriate Authentication, Authorization & Access Control Technologies", "https://www.logsign.com/blog/what-are-appropriate-authentication-authorization-and-access-control-technologies/"),
                ("What is access control:", "https://thesecurepass.com/blog/access-control"),
            ],
        ),
        module(
            "dataencrypt",
            "Data Encryption",
            "Data encryption is the process of converting information into a secret code to prevent unauthorized access. It protects sensitive data, like financial details, so that only authorized users with the correct key can decode it back into its original form.",
            &[
                ("Video 1", "https://www.youtube.com/watch?v=XzkmIbbFELs"),
                ("Video 2", "https://youtu.be/r4HQ8Bp-pfw"),
                ("What Is Data Encryption?", "https://www.digitalguardian.com/blog/what-data-encryption"),
                ("What is encryption?", "https://www.ibm.com/topics/encryption"),
            ],
        ),
    ]
}
