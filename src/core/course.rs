//! Course outcome identifiers (`CO1`, `CO2`, ...).

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

static CO_PATTERN: OnceLock<Regex> = OnceLock::new();

fn co_pattern() -> &'static Regex {
    CO_PATTERN.get_or_init(|| Regex::new(r"(?i)^CO[0-9]+$").expect("course outcome pattern is valid"))
}

/// Rejected course outcome input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid course outcome '{0}'. Use format like 'CO1', 'CO2', etc.")]
pub struct CourseOutcomeError(pub String);

/// A validated, upper-cased course outcome identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseOutcome(String);

impl CourseOutcome {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CourseOutcome {
    type Err = CourseOutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if co_pattern().is_match(trimmed) {
            Ok(Self(trimmed.to_ascii_uppercase()))
        } else {
            Err(CourseOutcomeError(s.to_string()))
        }
    }
}

impl fmt::Display for CourseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CourseOutcome {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parse the server's list of outcomes, skipping entries that do not validate.
pub fn parse_available(codes: &[String]) -> Vec<CourseOutcome> {
    codes
        .iter()
        .filter_map(|c| match c.parse() {
            Ok(co) => Some(co),
            Err(e) => {
                log::warn!("ignoring course outcome from server: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_uppercases() {
        let co: CourseOutcome = " co3 ".parse().unwrap();
        assert_eq!(co.as_str(), "CO3");
        assert_eq!(co.to_string(), "CO3");
    }

    #[test]
    fn accepts_multi_digit() {
        assert_eq!("CO12".parse::<CourseOutcome>().unwrap().as_str(), "CO12");
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["", "CO", "C1", "CO1a", "CO 1", "unit1", "CO-1"] {
            let err = bad.parse::<CourseOutcome>().unwrap_err();
            assert_eq!(err.0, bad);
            assert!(err.to_string().contains("Use format like 'CO1'"));
        }
    }

    #[test]
    fn parse_available_skips_invalid_entries() {
        let codes = vec!["CO1".to_string(), "bogus".to_string(), "co2".to_string()];
        let parsed = parse_available(&codes);
        let names: Vec<&str> = parsed.iter().map(CourseOutcome::as_str).collect();
        assert_eq!(names, ["CO1", "CO2"]);
    }
}
