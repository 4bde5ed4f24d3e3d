use crate::analyzers::{Analyzer, Finding, has_flex_display, is_blank};
use crate::core::{Artifact, Dimension};

pub struct ResponsivenessAnalyzer;

impl Analyzer for ResponsivenessAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::Responsiveness
    }

    fn analyze(&self, artifact: &Artifact) -> Finding {
        let css = artifact.css.as_str();
        let mut finding = Finding::new();

        // the styling analyzer already reports a missing stylesheet.
        if is_blank(css) {
            return finding.with_score(50);
        }

        let mut score = 100;

        let has_media_queries = css.contains("@media");
        if !has_media_queries {
            score -= 40;
            finding.flag(
                "No media queries for responsive design",
                "Add @media queries for different screen sizes",
            );
        } else if !css.contains("min-width") {
            score -= 15;
            finding.flag(
                "Not using mobile-first approach",
                "Use min-width media queries for mobile-first design",
            );
        }

        let has_flexible_units = ["%", "vw", "vh"].iter().any(|unit| css.contains(unit));
        if !has_flexible_units && !has_flex_display(css) {
            score -= 20;
            finding.flag(
                "Layout may not be responsive",
                "Use flexible units or Flexbox for responsive layouts",
            );
        }

        let styles_images = css.contains("img") || css.contains("image");
        if styles_images && !css.contains("max-width") {
            score -= 15;
            finding.flag(
                "Images may not be responsive",
                "Add max-width: 100% to images for responsiveness",
            );
        }

        finding.with_score(score)
    }
}
