//! Password strength reporting
//!
//! Scoring is delegated to a [`StrengthOracle`]; this module only maps the
//! oracle's answer onto the five strength levels and renders the report.

pub mod oracle;

pub use oracle::ZxcvbnOracle;

use serde::{Deserialize, Serialize};

use crate::error::{ForgeError, Result};

/// Answer returned by a strength-scoring oracle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    /// Score in 0..=4
    pub score: u8,
    /// Crack time for an online attack throttled at 100 guesses per hour
    pub crack_time: String,
    pub suggestions: Vec<String>,
}

/// Core trait for strength-scoring backends
pub trait StrengthOracle {
    /// Score `password`, down-weighting substrings found in `context`
    fn assess(&self, password: &str, context: &[&str]) -> Result<Assessment>;

    /// Get oracle name
    fn name(&self) -> &'static str;
}

/// Strength level keyed by oracle score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Terrible,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Option<Self> {
        match score {
            0 => Some(Self::Terrible),
            1 => Some(Self::Weak),
            2 => Some(Self::Fair),
            3 => Some(Self::Good),
            4 => Some(Self::Strong),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Terrible => "Terrible",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Self::Terrible => "🔴",
            Self::Weak => "🟠",
            Self::Fair => "🟡",
            Self::Good => "🟢",
            Self::Strong => "🟣",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Split free-form context text into tokens; commas count as separators
pub fn parse_context(text: &str) -> Vec<String> {
    text.replace(',', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Analyzed password, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub score: u8,
    pub level: Option<StrengthLevel>,
    pub crack_time: String,
    pub suggestions: Vec<String>,
}

impl AnalysisReport {
    pub fn from_assessment(assessment: Assessment) -> Self {
        Self {
            score: assessment.score,
            level: StrengthLevel::from_score(assessment.score),
            crack_time: assessment.crack_time,
            suggestions: assessment.suggestions,
        }
    }

    /// Render the text report
    pub fn render(&self) -> String {
        let strength = self
            .level
            .map_or_else(|| "N/A".to_string(), |l| format!("{} {}", l.label(), l.badge()));

        let mut output = vec![
            "--- Analysis Results ---".to_string(),
            format!("Score (0-4): {}", self.score),
            format!("Strength: {}", strength),
            format!("Est. Crack Time (Online): {}", self.crack_time),
            String::new(),
            "Feedback/Suggestions:".to_string(),
        ];

        if self.suggestions.is_empty() {
            output.push("- None. Your password seems complex!".to_string());
        } else {
            output.extend(self.suggestions.iter().map(|s| format!("- {}", s)));
        }

        output.push("--------------------------".to_string());
        output.join("\n")
    }
}

/// Score `password` with `oracle`, using tokens from `context_text` as hints
pub fn analyze(
    oracle: &dyn StrengthOracle,
    password: &str,
    context_text: &str,
) -> Result<AnalysisReport> {
    if password.is_empty() {
        return Err(ForgeError::validation("Please enter a password to analyze"));
    }

    let context = parse_context(context_text);
    let context: Vec<&str> = context.iter().map(String::as_str).collect();

    let assessment = oracle.assess(password, &context)?;
    tracing::debug!(
        oracle = oracle.name(),
        score = assessment.score,
        context_tokens = context.len(),
        "Password assessed"
    );

    Ok(AnalysisReport::from_assessment(assessment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FixedOracle {
        assessment: Assessment,
        seen_context: RefCell<Vec<String>>,
    }

    impl FixedOracle {
        fn new(score: u8, suggestions: &[&str]) -> Self {
            Self {
                assessment: Assessment {
                    score,
                    crack_time: "3 hours".to_string(),
                    suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
                },
                seen_context: RefCell::new(Vec::new()),
            }
        }
    }

    impl StrengthOracle for FixedOracle {
        fn assess(&self, _password: &str, context: &[&str]) -> Result<Assessment> {
            *self.seen_context.borrow_mut() = context.iter().map(|s| s.to_string()).collect();
            Ok(self.assessment.clone())
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    #[test]
    fn test_score_labels() {
        let labels: Vec<&str> = (0..=4)
            .map(|s| StrengthLevel::from_score(s).unwrap().label())
            .collect();
        assert_eq!(labels, vec!["Terrible", "Weak", "Fair", "Good", "Strong"]);
        assert_eq!(StrengthLevel::from_score(5), None);
    }

    #[test]
    fn test_parse_context() {
        assert_eq!(parse_context("max, 1995,rex  "), vec!["max", "1995", "rex"]);
        assert!(parse_context(" , ,").is_empty());
    }

    #[test]
    fn test_analyze_passes_context() {
        let oracle = FixedOracle::new(1, &["Add another word or two."]);
        let report = analyze(&oracle, "max1995", "max,1995").unwrap();

        assert_eq!(report.level, Some(StrengthLevel::Weak));
        assert_eq!(*oracle.seen_context.borrow(), vec!["max", "1995"]);
    }

    #[test]
    fn test_empty_password_rejected() {
        let oracle = FixedOracle::new(4, &[]);
        assert!(matches!(analyze(&oracle, "", ""), Err(ForgeError::Validation { .. })));
    }

    #[test]
    fn test_render_with_suggestions() {
        let oracle = FixedOracle::new(0, &["Add another word or two.", "Avoid years."]);
        let report = analyze(&oracle, "max1995", "").unwrap();

        let expected = "--- Analysis Results ---\n\
                        Score (0-4): 0\n\
                        Strength: Terrible 🔴\n\
                        Est. Crack Time (Online): 3 hours\n\
                        \n\
                        Feedback/Suggestions:\n\
                        - Add another word or two.\n\
                        - Avoid years.\n\
                        --------------------------";
        assert_eq!(report.render(), expected);
    }

    #[test]
    fn test_render_without_suggestions() {
        let report = AnalysisReport::from_assessment(Assessment {
            score: 4,
            crack_time: "centuries".to_string(),
            suggestions: Vec::new(),
        });
        let text = report.render();
        assert!(text.contains("Strength: Strong 🟣"));
        assert!(text.contains("- None. Your password seems complex!"));
    }

    #[test]
    fn test_render_out_of_range_score() {
        let report = AnalysisReport::from_assessment(Assessment {
            score: 9,
            crack_time: "unknown".to_string(),
            suggestions: Vec::new(),
        });
        assert!(report.render().contains("Strength: N/A"));
    }
}
