use crate::analyzers::{Analyzer, Finding};
use crate::core::{Artifact, Dimension};

pub struct StructureAnalyzer;

impl Analyzer for StructureAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::Structure
    }

    fn analyze(&self, artifact: &Artifact) -> Finding {
        let html = artifact.html.as_str();
        let mut finding = Finding::new();
        let mut score = 100;

        if !html.contains("<!DOCTYPE") {
            score -= 20;
            finding.flag(
                "Missing DOCTYPE declaration",
                "Add <!DOCTYPE html> at the beginning",
            );
        }

        let has_document_tags =
            html.contains("<html") && html.contains("<head") && html.contains("<body");
        if !has_document_tags {
            score -= 15;
            finding.flag(
                "Incomplete HTML document structure",
                "Ensure proper HTML structure with html, head, and body tags",
            );
        }

        if !html.contains("viewport") {
            score -= 10;
            finding.flag(
                "Missing viewport meta tag",
                "Add <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">",
            );
        }

        if !html.contains("charset") {
            score -= 5;
            finding.flag("Missing charset meta tag", "Add <meta charset=\"UTF-8\">");
        }

        // substring counts, not a parser: `<divider` counts as an opening div.
        let open_divs = html.matches("<div").count();
        let close_divs = html.matches("</div>").count();
        if open_divs != close_divs {
            score -= 25;
            finding.flag(
                "Mismatched div tags",
                "Check that all opening div tags have corresponding closing tags",
            );
        }

        finding.with_score(score)
    }
}
