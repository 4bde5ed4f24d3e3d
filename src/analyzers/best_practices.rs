use crate::analyzers::{Analyzer, Finding};
use crate::core::{Artifact, Dimension};
use once_cell::sync::Lazy;
use regex::Regex;

pub struct BestPracticesAnalyzer;

const MAX_INLINE_STYLES: usize = 3;
const MAX_DIV_DEPTH: i64 = 8;
const MAX_CONSOLE_LOGS: usize = 2;

static VAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bvar\b").expect("valid var regex"));

impl Analyzer for BestPracticesAnalyzer {
    fn dimension(&self) -> Dimension {
        Dimension::BestPractices
    }

    fn analyze(&self, artifact: &Artifact) -> Finding {
        let html = artifact.html.as_str();
        let js = artifact.js.as_str();
        let mut finding = Finding::new();
        let mut score = 100;

        if html.matches("style=").count() > MAX_INLINE_STYLES {
            score -= 15;
            finding.flag(
                "Excessive inline CSS styles",
                "Move styles to external CSS for better maintainability",
            );
        }

        if html.contains("<script>") {
            score -= 10;
            finding.flag(
                "Inline JavaScript detected",
                "Move JavaScript to external files",
            );
        }

        let layout_tables =
            html.contains("<table") && !html.contains("<th") && !html.contains("<thead");
        if layout_tables {
            score -= 20;
            finding.flag(
                "Tables possibly used for layout",
                "Use CSS for layout, reserve tables for data",
            );
        }

        if max_div_depth(html) > MAX_DIV_DEPTH {
            score -= 10;
            finding.flag(
                "Excessively nested divs",
                "Simplify HTML structure, use semantic elements",
            );
        }

        if !js.is_empty() {
            if js.matches("console.log").count() > MAX_CONSOLE_LOGS {
                score -= 5;
                finding.flag(
                    "Console.log statements in production code",
                    "Remove console.log statements",
                );
            }

            if VAR_RE.is_match(js) {
                score -= 10;
                finding.flag(
                    "Using var instead of const/let",
                    "Use const and let instead of var",
                );
            }
        }

        finding.with_score(score)
    }
}

// prefix matching only, so <divider> opens a level too.
pub fn max_div_depth(html: &str) -> i64 {
    let mut depth = 0_i64;
    let mut max_depth = 0_i64;

    for (idx, _) in html.match_indices('<') {
        let rest = &html[idx..];
        if rest.starts_with("<div") {
            depth += 1;
            max_depth = max_depth.max(depth);
        } else if rest.starts_with("</div>") {
            depth -= 1;
        }
    }

    max_depth
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str, js: &str) -> Finding {
        BestPracticesAnalyzer.analyze(&Artifact::new(html, "", js))
    }

    fn nested_divs(depth: usize) -> String {
        format!("{}{}", "<div>".repeat(depth), "</div>".repeat(depth))
    }

    #[test]
    fn clean_inputs_score_full() {
        assert_eq!(run("", "").score, 100);
        assert_eq!(run("<p>hello</p>", "const x = 1;").score, 100);
    }

    #[test]
    fn inline_styles_over_three_are_penalized() {
        let three = "<p style=\"a\"></p>".repeat(3);
        let four = "<p style=\"a\"></p>".repeat(4);
        assert_eq!(run(&three, "").score, 100);
        assert_eq!(run(&four, "").score, 85);
    }

    #[test]
    fn inline_script_block_is_penalized_but_external_is_not() {
        assert_eq!(run("<script>alert(1)</script>", "").score, 90);
        assert_eq!(run("<script src=\"app.js\"></script>", "").score, 100);
    }

    #[test]
    fn tables_without_headers_look_like_layout() {
        assert_eq!(run("<table><tr><td>x</td></tr></table>", "").score, 80);
        assert_eq!(run("<table><tr><th>h</th></tr></table>", "").score, 100);
        assert_eq!(run("<table><thead></thead></table>", "").score, 100);
    }

    #[test]
    fn div_depth_tracks_running_maximum() {
        assert_eq!(max_div_depth(""), 0);
        assert_eq!(max_div_depth(&nested_divs(3)), 3);
        assert_eq!(max_div_depth("<div></div><div><div></div></div>"), 2);
        assert_eq!(max_div_depth("</div></div><div>"), 0);
        assert_eq!(max_div_depth("<divider><div>"), 2);
    }

    #[test]
    fn deep_nesting_beyond_eight_is_penalized() {
        assert_eq!(run(&nested_divs(8), "").score, 100);
        let finding = run(&nested_divs(9), "");
        assert_eq!(finding.score, 90);
        assert_eq!(finding.issues, vec!["Excessively nested divs"]);
    }

    #[test]
    fn var_and_console_logs_cost_fifteen() {
        let js = "var x = 1; var y = 2;\nconsole.log(x)\nconsole.log(x)\nconsole.log(x)";
        let finding = run("", js);
        assert_eq!(finding.score, 85);
        assert_eq!(
            finding.issues,
            vec![
                "Console.log statements in production code",
                "Using var instead of const/let",
            ]
        );
    }

    #[test]
    fn var_must_be_a_standalone_word() {
        assert_eq!(run("", "let variable = 1; const avar = 2;").score, 100);
        assert_eq!(run("", "console.log(1); console.log(2);").score, 100);
    }
}
