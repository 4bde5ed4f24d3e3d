use crate::analyzers::{Analyzer, Finding};
use crate::core::{Artifact, Dimension};
use once_cell::sync::Lazy;
use regex::Regex;

pub struct SemanticsAnalyzer;

const SEMANTIC_ELEMENTS: [&str; 9] = [
    "header",
    "nav",
    "main",
    "section",
    "article",
    "aside",
    "footer",
    "figure",
    "figcaption",
];

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<h[1-6]").expect("valid heading regex"));

impl Analyzer for SemanticsAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::Semantics
    }

    fn analyze(&self, artifact: &Artifact) -> Finding {
        let html = artifact.html.as_str();
        let mut finding = Finding::new();
        let mut score = 100;

        let found = SEMANTIC_ELEMENTS
            .iter()
            .filter(|element| html.contains(&format!("<{}", element)))
            .count();
        if found < 3 {
            score -= 20;
            finding.flag(
                "Limited use of semantic HTML5 elements",
                "Use semantic elements like header, nav, main, section for better structure",
            );
        }

        if !html.contains("<h1") {
            score -= 15;
            finding.flag("Missing H1 heading", "Add a single H1 heading for page title");
        }

        if !HEADING_RE.is_match(html) {
            score -= 10;
            finding.flag(
                "No heading structure found",
                "Use headings (h1-h6) to create content hierarchy",
            );
        }

        let has_lists = html.contains("<ul") || html.contains("<ol") || html.contains("<dl");
        let has_bullets = html.contains('•') || html.contains('-') || html.contains('*');
        if !has_lists && has_bullets {
            score -= 10;
            finding.flag(
                "Bullet points not using proper list elements",
                "Use <ul> or <ol> for lists instead of plain text bullets",
            );
        }

        finding.with_score(score)
    }
}
