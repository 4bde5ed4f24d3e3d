use crate::config::{Config, FailOn};
use crate::core::QualityScore;
use crate::core::score::{Grade, ProgressBucket};
use colored::{ColoredString, Colorize};
use serde::Serialize;

const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone)]
pub struct ExitStatus {
    pub ok: bool,
    pub reasons: Vec<String>,
}

impl ExitStatus {
    pub fn reason_line(&self) -> String {
        self.reasons.join("; ")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub fail_on: FailOn,
    pub min_score: u8,
}

#[derive(Debug, Clone)]
pub struct FinalReport {
    pub source: String,
    pub quality: QualityScore,
    pub description: String,
    pub config: ConfigSummary,
    pub exit: ExitStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub source: String,
    pub quality: QualityScore,
    pub description: String,
    pub config: ConfigSummary,
    pub passed: bool,
}

impl From<&FinalReport> for JsonReport {
    fn from(report: &FinalReport) -> Self {
        Self {
            source: report.source.clone(),
            quality: report.quality.clone(),
            description: report.description.clone(),
            config: report.config.clone(),
            passed: report.exit.ok,
        }
    }
}

pub fn evaluate_exit(quality: &QualityScore, cfg: &Config) -> ExitStatus {
    let mut reasons = Vec::new();

    if quality.overall < cfg.general.min_score {
        reasons.push(format!(
            "score {} is below min_score {}",
            quality.overall, cfg.general.min_score
        ));
    }

    match cfg.general.fail_on {
        FailOn::Issues if !quality.issues.is_empty() => {
            reasons.push(format!("found {} issue(s)", quality.issues.len()));
        }
        FailOn::Failing if quality.grade == Grade::F => {
            reasons.push("grade F".to_string());
        }
        _ => {}
    }

    ExitStatus {
        ok: reasons.is_empty(),
        reasons,
    }
}

fn colored_grade(grade: Grade) -> ColoredString {
    let label = format!("grade {}", grade);
    let text = label.as_str();
    match grade {
        Grade::A => text.green().bold(),
        Grade::B => text.blue().bold(),
        Grade::C => text.yellow().bold(),
        Grade::D => text.truecolor(234, 88, 12).bold(),
        Grade::F => text.red().bold(),
    }
}

fn bar(value: u8) -> ColoredString {
    let filled = usize::from(value) * BAR_WIDTH / 100;
    let text = format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled));
    let cells = text.as_str();
    match ProgressBucket::from_value(value) {
        ProgressBucket::Green => cells.green(),
        ProgressBucket::Yellow => cells.yellow(),
        ProgressBucket::Orange => cells.truecolor(249, 115, 22),
        ProgressBucket::Red => cells.red(),
    }
}

pub fn print_human(report: &FinalReport) {
    let quality = &report.quality;
    println!(
        "Code Quality Score: {}/100 ({}, {})",
        quality.overall,
        colored_grade(quality.grade),
        report.description
    );
    println!("source: {}", report.source);

    println!();
    for (dimension, value) in quality.breakdown.entries() {
        println!("{:<15} {} {:>3}%", dimension.to_string(), bar(value), value);
    }

    if !quality.issues.is_empty() {
        println!();
        println!("{} ({})", "Issues".yellow().bold(), quality.issues.len());
        for issue in &quality.issues {
            println!("- {}", issue);
        }
    }

    if !quality.suggestions.is_empty() {
        println!();
        println!(
            "{} ({})",
            "Improvements".blue().bold(),
            quality.suggestions.len()
        );
        for suggestion in &quality.suggestions {
            println!("-> {}", suggestion);
        }
    }

    println!();
    if report.exit.ok {
        println!("exit: OK");
    } else {
        println!("exit: FAILED ({})", report.exit.reason_line());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneralConfig;
    use crate::core::analyze_code_quality;

    fn config(fail_on: FailOn, min_score: u8) -> Config {
        Config {
            general: GeneralConfig {
                fail_on,
                min_score,
                json: false,
            },
            ..Config::default()
        }
    }

    #[test]
    fn below_min_score_fails() {
        let quality = analyze_code_quality("", "", "");
        let exit = evaluate_exit(&quality, &config(FailOn::None, 70));
        assert!(!exit.ok);
        assert_eq!(exit.reason_line(), "score 60 is below min_score 70");
    }

    #[test]
    fn fail_on_issues_trips_on_any_issue() {
        let quality = analyze_code_quality("", "", "");
        let exit = evaluate_exit(&quality, &config(FailOn::Issues, 0));
        assert!(!exit.ok);
        assert_eq!(exit.reasons, vec!["found 9 issue(s)"]);
    }

    #[test]
    fn fail_on_failing_only_trips_on_grade_f() {
        let grade_d = analyze_code_quality("", "", "");
        assert!(evaluate_exit(&grade_d, &config(FailOn::Failing, 0)).ok);

        let grade_f = analyze_code_quality("<div>", "img { width: 1px }", "var a");
        assert_eq!(grade_f.grade, Grade::F);
        let exit = evaluate_exit(&grade_f, &config(FailOn::Failing, 0));
        assert!(!exit.ok);
        assert_eq!(exit.reasons, vec!["grade F"]);
    }

    #[test]
    fn bar_fills_proportionally() {
        colored::control::set_override(false);
        assert_eq!(bar(100).to_string(), "#".repeat(20));
        assert_eq!(bar(0).to_string(), ".".repeat(20));
        assert_eq!(bar(55).to_string(), format!("{}{}", "#".repeat(11), ".".repeat(9)));
    }

    #[test]
    fn bar_color_follows_progress_bucket() {
        assert_eq!(bar(85).fgcolor(), Some(colored::Color::Green));
        assert_eq!(bar(65).fgcolor(), Some(colored::Color::Yellow));
        assert_eq!(
            bar(45).fgcolor(),
            Some(colored::Color::TrueColor {
                r: 249,
                g: 115,
                b: 22
            })
        );
        assert_eq!(bar(10).fgcolor(), Some(colored::Color::Red));
    }
}
