use crate::core::{Artifact, Dimension};

pub mod accessibility;
pub mod best_practices;
pub mod responsiveness;
pub mod semantics;
pub mod structure;
pub mod styling;

pub trait Analyzer {
    fn dimension(&self) -> Dimension;
    fn analyze(&self, artifact: &Artifact) -> Finding;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Finding {
    pub score: u8,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Finding {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn flag(&mut self, issue: impl Into<String>, suggestion: impl Into<String>) {
        self.issues.push(issue.into());
        self.suggestions.push(suggestion.into());
    }

    pub(crate) fn suggest(&mut self, suggestion: impl Into<String>) {
        self.suggestions.push(suggestion.into());
    }

    pub(crate) fn with_score(mut self, score: i32) -> Self {
        self.score = score.clamp(0, 100) as u8;
        self
    }
}

pub fn all_analyzers() -> [&'static dyn Analyzer; 6] {
    [
        &semantics::SemanticsAnalyzer,
        &structure::StructureAnalyzer,
        &styling::StylingAnalyzer,
        &responsiveness::ResponsivenessAnalyzer,
        &accessibility::AccessibilityAnalyzer,
        &best_practices::BestPracticesAnalyzer,
    ]
}

pub(crate) fn has_flex_display(css: &str) -> bool {
    css.contains("display: flex") || css.contains("display:flex")
}

// whitespace and line terminators as a browser's String.prototype.trim sees them.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

pub(crate) fn is_blank(text: &str) -> bool {
    text.trim_matches(is_js_whitespace).is_empty()
}
