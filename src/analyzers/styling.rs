use crate::analyzers::{Analyzer, Finding, has_flex_display, is_blank};
use crate::core::{Artifact, Dimension};
use once_cell::sync::Lazy;
use regex::Regex;

pub struct StylingAnalyzer;

const UNCOMMENTED_LENGTH_LIMIT: usize = 500;
const MAX_HEX_COLORS: usize = 5;

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#[0-9a-fA-F]{6}").expect("valid hex color regex"));

impl Analyzer for StylingAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::Styling
    }

    fn analyze(&self, artifact: &Artifact) -> Finding {
        let css = artifact.css.as_str();
        let mut finding = Finding::new();

        if is_blank(css) {
            finding.flag("No CSS provided", "Add CSS styling for visual presentation");
            return finding.with_score(50);
        }

        let mut score = 100;

        let has_relative_units = ["rem", "em", "%", "vw", "vh"]
            .iter()
            .any(|unit| css.contains(unit));
        if !has_relative_units {
            score -= 15;
            finding.flag(
                "No relative CSS units found",
                "Use relative units (rem, em, %) for better scalability",
            );
        }

        if !css.contains("/*") && css.encode_utf16().count() > UNCOMMENTED_LENGTH_LIMIT {
            score -= 10;
            finding.flag(
                "CSS lacks organization comments",
                "Add comments to organize CSS sections",
            );
        }

        let has_grid = css.contains("display: grid") || css.contains("display:grid");
        if !has_flex_display(css) && !has_grid {
            score -= 20;
            finding.flag(
                "No modern layout systems (Flexbox/Grid) found",
                "Use Flexbox or Grid for modern layouts",
            );
        }

        // hex literals only count once a color or background declaration exists.
        let has_color_styles = css.contains("color:") || css.contains("background:");
        if has_color_styles && HEX_COLOR_RE.find_iter(css).count() > MAX_HEX_COLORS {
            score -= 10;
            finding.flag(
                "Many hardcoded colors detected",
                "Consider using CSS variables for consistent color scheme",
            );
        }

        finding.with_score(score)
    }
}
