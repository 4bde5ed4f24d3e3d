use crate::analyzers::{Analyzer, Finding};
use crate::core::{Artifact, Dimension};
use once_cell::sync::Lazy;
use regex::Regex;

pub struct AccessibilityAnalyzer;

const SKIP_LINK_LENGTH_LIMIT: usize = 2000;

static IMG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<img[^>]*>").expect("valid img regex"));
static INPUT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<input[^>]*>").expect("valid input regex"));
static BUTTON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<button[^>]*>").expect("valid button regex"));
// also matches <aside>, <article> and friends.
static ANCHOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<a[^>]*>").expect("valid anchor regex"));

impl Analyzer for AccessibilityAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::Accessibility
    }

    fn analyze(&self, artifact: &Artifact) -> Finding {
        let html = artifact.html.as_str();
        let mut finding = Finding::new();
        let mut score = 100;

        let missing_alt = IMG_RE
            .find_iter(html)
            .filter(|img| !img.as_str().contains("alt="))
            .count();
        if missing_alt > 0 {
            score -= 20;
            finding.flag(
                format!("{} image(s) missing alt text", missing_alt),
                "Add descriptive alt text to all images",
            );
        }

        if INPUT_RE.is_match(html) && !html.contains("<label") {
            score -= 25;
            finding.flag(
                "Form inputs without labels",
                "Add labels to all form inputs for accessibility",
            );
        }

        if !BUTTON_RE.is_match(html) && !ANCHOR_RE.is_match(html) {
            score -= 10;
            finding.flag(
                "No interactive elements found",
                "Add buttons or links for user interaction",
            );
        }

        let has_skip_link = html.contains("skip") || html.contains("Skip");
        if html.encode_utf16().count() > SKIP_LINK_LENGTH_LIMIT && !has_skip_link {
            score -= 5;
            finding.suggest("Consider adding skip navigation link for keyboard users");
        }

        finding.with_score(score)
    }
}
