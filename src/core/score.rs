use crate::core::Breakdown;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod weights {
    pub const SEMANTICS: f64 = 0.25;
    pub const STRUCTURE: f64 = 0.20;
    pub const STYLING: f64 = 0.20;
    pub const RESPONSIVENESS: f64 = 0.15;
    pub const ACCESSIBILITY: f64 = 0.10;
    pub const BEST_PRACTICES: f64 = 0.10;
}

pub mod grades {
    pub const A_MIN: u8 = 90;
    pub const B_MIN: u8 = 80;
    pub const C_MIN: u8 = 70;
    pub const D_MIN: u8 = 60;
}

pub fn weighted_overall(breakdown: &Breakdown) -> u8 {
    let weighted = f64::from(breakdown.semantics) * weights::SEMANTICS
        + f64::from(breakdown.structure) * weights::STRUCTURE
        + f64::from(breakdown.styling) * weights::STYLING
        + f64::from(breakdown.responsiveness) * weights::RESPONSIVENESS
        + f64::from(breakdown.accessibility) * weights::ACCESSIBILITY
        + f64::from(breakdown.best_practices) * weights::BEST_PRACTICES;

    // weighted is never negative, so round() is round-half-up here.
    weighted.round().clamp(0.0, 100.0) as u8
}

// declared best first, so A < F.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= grades::A_MIN => Self::A,
            s if s >= grades::B_MIN => Self::B,
            s if s >= grades::C_MIN => Self::C,
            s if s >= grades::D_MIN => Self::D,
            _ => Self::F,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::A => "text-green-600",
            Self::B => "text-blue-600",
            Self::C => "text-yellow-600",
            Self::D => "text-orange-600",
            Self::F => "text-red-600",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::A => "Excellent - Production ready code",
            Self::B => "Good - Minor improvements needed",
            Self::C => "Fair - Several improvements needed",
            Self::D => "Poor - Significant improvements needed",
            Self::F => "Fail - Major issues present",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "F" => Ok(Self::F),
            other => Err(format!("unknown grade {:?}", other)),
        }
    }
}

pub const UNKNOWN_GRADE_COLOR: &str = "text-gray-600";
pub const UNKNOWN_GRADE_DESCRIPTION: &str = "Unknown quality";

pub fn grade_color(grade: &str) -> &'static str {
    grade
        .parse::<Grade>()
        .map(Grade::color)
        .unwrap_or(UNKNOWN_GRADE_COLOR)
}

pub fn grade_description(grade: &str) -> &'static str {
    grade
        .parse::<Grade>()
        .map(Grade::description)
        .unwrap_or(UNKNOWN_GRADE_DESCRIPTION)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressBucket {
    Green,
    Yellow,
    Orange,
    Red,
}

impl ProgressBucket {
    pub fn from_value(value: u8) -> Self {
        match value {
            80..=u8::MAX => Self::Green,
            60..=79 => Self::Yellow,
            40..=59 => Self::Orange,
            _ => Self::Red,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Green => "bg-green-500",
            Self::Yellow => "bg-yellow-500",
            Self::Orange => "bg-orange-500",
            Self::Red => "bg-red-500",
        }
    }
}

pub fn progress_color(value: u8) -> &'static str {
    ProgressBucket::from_value(value).css_class()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(values: [u8; 6]) -> Breakdown {
        Breakdown {
            semantics: values[0],
            structure: values[1],
            styling: values[2],
            responsiveness: values[3],
            accessibility: values[4],
            best_practices: values[5],
        }
    }

    #[test]
    fn weights_sum_to_one() {
        let total = weights::SEMANTICS
            + weights::STRUCTURE
            + weights::STYLING
            + weights::RESPONSIVENESS
            + weights::ACCESSIBILITY
            + weights::BEST_PRACTICES;
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn overall_rounds_to_nearest() {
        assert_eq!(weighted_overall(&breakdown([55, 50, 50, 50, 90, 100])), 60);
        assert_eq!(weighted_overall(&breakdown([90, 100, 100, 100, 90, 100])), 97);
        assert_eq!(weighted_overall(&breakdown([100; 6])), 100);
        assert_eq!(weighted_overall(&breakdown([0; 6])), 0);
    }

    #[test]
    fn grade_boundaries_belong_to_higher_grade() {
        assert_eq!(Grade::from_score(100), Grade::A);
        assert_eq!(Grade::from_score(90), Grade::A);
        assert_eq!(Grade::from_score(89), Grade::B);
        assert_eq!(Grade::from_score(80), Grade::B);
        assert_eq!(Grade::from_score(70), Grade::C);
        assert_eq!(Grade::from_score(60), Grade::D);
        assert_eq!(Grade::from_score(59), Grade::F);
        assert_eq!(Grade::from_score(0), Grade::F);
    }

    #[test]
    fn grade_never_improves_as_score_drops() {
        for score in 1..=100u8 {
            assert!(Grade::from_score(score) <= Grade::from_score(score - 1));
        }
    }

    #[test]
    fn text_helpers_fall_back_for_unknown_grades() {
        assert_eq!(grade_color("A"), "text-green-600");
        assert_eq!(grade_color("F"), "text-red-600");
        assert_eq!(grade_color("Z"), UNKNOWN_GRADE_COLOR);
        assert_eq!(grade_color(""), UNKNOWN_GRADE_COLOR);
        assert_eq!(grade_description("B"), "Good - Minor improvements needed");
        assert_eq!(grade_description("a"), UNKNOWN_GRADE_DESCRIPTION);
    }

    #[test]
    fn progress_buckets() {
        assert_eq!(progress_color(100), "bg-green-500");
        assert_eq!(progress_color(80), "bg-green-500");
        assert_eq!(progress_color(79), "bg-yellow-500");
        assert_eq!(progress_color(40), "bg-orange-500");
        assert_eq!(progress_color(39), "bg-red-500");
        assert_eq!(ProgressBucket::from_value(59), ProgressBucket::Orange);
        assert_eq!(ProgressBucket::from_value(0), ProgressBucket::Red);
    }
}
