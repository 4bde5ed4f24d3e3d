pub mod analyzers;
pub mod config;
pub mod core;
pub mod generation;
pub mod utils;

pub use crate::core::score::{Grade, grade_color, grade_description};
pub use crate::core::{Artifact, Breakdown, QualityScore, analyze_code_quality};
