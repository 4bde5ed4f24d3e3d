pub mod report;
pub mod scanner;
pub mod score;

use crate::analyzers::{self, Finding};
use crate::config::Config;
use crate::core::report::{ConfigSummary, FinalReport};
use crate::core::score::Grade;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Artifact {
    pub html: String,
    pub css: String,
    pub js: String,
}

impl Artifact {
    pub fn new(html: impl Into<String>, css: impl Into<String>, js: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            css: css.into(),
            js: js.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Semantics,
    Structure,
    Styling,
    Responsiveness,
    Accessibility,
    BestPractices,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Semantics => write!(f, "Semantics"),
            Self::Structure => write!(f, "Structure"),
            Self::Styling => write!(f, "Styling"),
            Self::Responsiveness => write!(f, "Responsive"),
            Self::Accessibility => write!(f, "Accessibility"),
            Self::BestPractices => write!(f, "Best Practices"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub semantics: u8,
    pub structure: u8,
    pub styling: u8,
    pub responsiveness: u8,
    pub accessibility: u8,
    pub best_practices: u8,
}

impl Breakdown {
    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Semantics => self.semantics,
            Dimension::Structure => self.structure,
            Dimension::Styling => self.styling,
            Dimension::Responsiveness => self.responsiveness,
            Dimension::Accessibility => self.accessibility,
            Dimension::BestPractices => self.best_practices,
        }
    }

    fn set(&mut self, dimension: Dimension, score: u8) {
        let slot = match dimension {
            Dimension::Semantics => &mut self.semantics,
            Dimension::Structure => &mut self.structure,
            Dimension::Styling => &mut self.styling,
            Dimension::Responsiveness => &mut self.responsiveness,
            Dimension::Accessibility => &mut self.accessibility,
            Dimension::BestPractices => &mut self.best_practices,
        };
        *slot = score;
    }

    pub fn entries(&self) -> [(Dimension, u8); 6] {
        [
            Dimension::Semantics,
            Dimension::Structure,
            Dimension::Styling,
            Dimension::Responsiveness,
            Dimension::Accessibility,
            Dimension::BestPractices,
        ]
        .map(|dimension| (dimension, self.get(dimension)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QualityScore {
    pub overall: u8,
    pub breakdown: Breakdown,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub grade: Grade,
}

pub fn analyze_code_quality(html: &str, css: &str, js: &str) -> QualityScore {
    analyze_artifact(&Artifact::new(html, css, js))
}

pub fn analyze_artifact(artifact: &Artifact) -> QualityScore {
    let mut breakdown = Breakdown::default();
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    for analyzer in analyzers::all_analyzers() {
        let Finding {
            score,
            issues: found_issues,
            suggestions: found_suggestions,
        } = analyzer.analyze(artifact);

        breakdown.set(analyzer.dimension(), score);
        issues.extend(found_issues);
        suggestions.extend(found_suggestions);
    }

    let overall = score::weighted_overall(&breakdown);

    QualityScore {
        overall,
        breakdown,
        issues,
        suggestions,
        grade: Grade::from_score(overall),
    }
}

pub fn run_checks(artifact: &Artifact, source: impl Into<String>, cfg: &Config) -> FinalReport {
    build_report(analyze_artifact(artifact), source, cfg)
}

pub fn build_report(quality: QualityScore, source: impl Into<String>, cfg: &Config) -> FinalReport {
    let exit = report::evaluate_exit(&quality, cfg);

    FinalReport {
        source: source.into(),
        description: quality.grade.description().to_string(),
        quality,
        config: ConfigSummary {
            fail_on: cfg.general.fail_on,
            min_score: cfg.general.min_score,
        },
        exit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_grade_d() {
        let result = analyze_code_quality("", "", "");
        assert_eq!(
            result.breakdown,
            Breakdown {
                semantics: 55,
                structure: 50,
                styling: 50,
                responsiveness: 50,
                accessibility: 90,
                best_practices: 100,
            }
        );
        assert_eq!(result.overall, 60);
        assert_eq!(result.grade, Grade::D);
    }

    #[test]
    fn issues_follow_analyzer_order() {
        let result = analyze_code_quality("", "", "");
        assert_eq!(
            result.issues,
            vec![
                "Limited use of semantic HTML5 elements",
                "Missing H1 heading",
                "No heading structure found",
                "Missing DOCTYPE declaration",
                "Incomplete HTML document structure",
                "Missing viewport meta tag",
                "Missing charset meta tag",
                "No CSS provided",
                "No interactive elements found",
            ]
        );
        assert_eq!(result.suggestions.len(), result.issues.len());
    }

    #[test]
    fn breakdown_serializes_with_camel_case_keys() {
        let result = analyze_code_quality("", "", "");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["breakdown"]["bestPractices"], 100);
        assert_eq!(json["grade"], "D");
        assert_eq!(json["overall"], 60);
    }

    #[test]
    fn entries_cover_every_dimension_in_order() {
        let result = analyze_code_quality("", "", "");
        let entries = result.breakdown.entries();
        assert_eq!(entries[0], (Dimension::Semantics, 55));
        assert_eq!(entries[5], (Dimension::BestPractices, 100));
    }
}
