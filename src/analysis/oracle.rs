//! zxcvbn-backed strength oracle

use super::{Assessment, StrengthOracle};
use crate::error::{ForgeError, Result};

/// Strength oracle backed by the `zxcvbn` estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct ZxcvbnOracle;

impl ZxcvbnOracle {
    pub fn new() -> Self {
        Self
    }
}

impl StrengthOracle for ZxcvbnOracle {
    fn assess(&self, password: &str, context: &[&str]) -> Result<Assessment> {
        let entropy = zxcvbn::zxcvbn(password, context)
            .map_err(|e| ForgeError::analysis(e.to_string()))?;

        let suggestions: Vec<String> = entropy
            .feedback()
            .as_ref()
            .map(|feedback| feedback.suggestions().iter().map(|s| s.to_string()).collect())
            .unwrap_or_default();

        Ok(Assessment {
            score: entropy.score(),
            crack_time: entropy
                .crack_times()
                .online_throttling_100_per_hour()
                .to_string(),
            suggestions,
        })
    }

    fn name(&self) -> &'static str {
        "zxcvbn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_password_scores_low() {
        let assessment = ZxcvbnOracle::new().assess("password", &[]).unwrap();
        assert_eq!(assessment.score, 0);
        assert!(!assessment.crack_time.is_empty());
        assert!(!assessment.suggestions.is_empty());
    }

    #[test]
    fn test_random_passphrase_scores_high() {
        let assessment = ZxcvbnOracle::new()
            .assess("correct-horse-battery-staple-9!Qz", &[])
            .unwrap();
        assert!(assessment.score >= 3);
    }

    #[test]
    fn test_context_lowers_score() {
        let oracle = ZxcvbnOracle::new();
        let plain = oracle.assess("Bartholomew1987", &[]).unwrap();
        let hinted = oracle.assess("Bartholomew1987", &["bartholomew", "1987"]).unwrap();
        assert!(hinted.score <= plain.score);
    }

    #[test]
    fn test_blank_password_is_error() {
        let err = ZxcvbnOracle::new().assess("", &[]).unwrap_err();
        assert!(matches!(err, ForgeError::Analysis { .. }));
    }
}
