//! Per-module article completion.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Article title -> completed flag for one module. Absent titles are
/// incomplete.
///
/// Equality compares the set of completed titles, so an explicit `false`
/// entry equals an absent one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleCompletion(BTreeMap<String, bool>);

impl PartialEq for ModuleCompletion {
    fn eq(&self, other: &Self) -> bool {
        self.completed_titles().eq(other.completed_titles())
    }
}

impl Eq for ModuleCompletion {}

impl ModuleCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_completed(&self, title: &str) -> bool {
        self.0.get(title).copied().unwrap_or(false)
    }

    /// Flip `title`, treating a missing entry as `false`. Returns the new flag.
    pub fn toggle(&mut self, title: &str) -> bool {
        let flag = self.0.entry(title.to_string()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// How many of `titles` are completed.
    pub fn completed_count<S: AsRef<str>>(&self, titles: &[S]) -> usize {
        titles
            .iter()
            .filter(|t| self.is_completed(t.as_ref()))
            .count()
    }

    /// `round(100 * completed / len)`, 0 for an empty list.
    ///
    /// Only titles in `titles` count, so entries for articles no longer in
    /// the module cannot push the result past 100.
    pub fn percent_complete<S: AsRef<str>>(&self, titles: &[S]) -> u8 {
        if titles.is_empty() {
            return 0;
        }
        let done = self.completed_count(titles) as f64;
        (100.0 * done / titles.len() as f64).round() as u8
    }

    /// Completed titles in sorted order.
    pub fn completed_titles(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, done)| **done)
            .map(|(title, _)| title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLES: [&str; 3] = ["Video 1", "Video 2", "What is Phishing?"];

    #[test]
    fn first_toggle_sets_true() {
        let mut c = ModuleCompletion::new();
        assert!(!c.is_completed("Video 1"));
        assert!(c.toggle("Video 1"));
        assert!(c.is_completed("Video 1"));
    }

    #[test]
    fn double_toggle_restores_percentage() {
        let mut c = ModuleCompletion::new();
        c.toggle("Video 2");
        let before = c.percent_complete(&TITLES);
        c.toggle("Video 1");
        assert_eq!(c.percent_complete(&TITLES), 67);
        c.toggle("Video 1");
        assert_eq!(c.percent_complete(&TITLES), before);
        assert!(!c.is_completed("Video 1"));
    }

    #[test]
    fn double_toggle_restores_empty_map() {
        let mut c = ModuleCompletion::new();
        c.toggle("Video 1");
        c.toggle("Video 1");
        assert_eq!(c, ModuleCompletion::new());
    }

    #[test]
    fn double_toggle_restores_map_with_existing_entry() {
        let mut c = ModuleCompletion::new();
        c.toggle("Video 1");
        let original = c.clone();
        c.toggle("Video 1");
        c.toggle("Video 1");
        assert_eq!(c, original);
    }

    #[test]
    fn empty_list_is_zero() {
        let mut c = ModuleCompletion::new();
        c.toggle("anything");
        assert_eq!(c.percent_complete::<&str>(&[]), 0);
    }

    #[test]
    fn stale_titles_ignored() {
        let mut c = ModuleCompletion::new();
        c.toggle("Removed article");
        c.toggle("Video 1");
        assert_eq!(c.completed_count(&TITLES), 1);
        assert_eq!(c.percent_complete(&TITLES), 33);
    }

    #[test]
    fn all_done_is_hundred() {
        let mut c = ModuleCompletion::new();
        for t in TITLES {
            c.toggle(t);
        }
        assert_eq!(c.percent_complete(&TITLES), 100);
    }

    #[test]
    fn serde_roundtrip_matches_plain_object() {
        let mut c = ModuleCompletion::new();
        c.toggle("Video 1");
        c.toggle("Video 2");
        c.toggle("Video 2");
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"Video 1":true,"Video 2":false}"#);
        let back: ModuleCompletion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
