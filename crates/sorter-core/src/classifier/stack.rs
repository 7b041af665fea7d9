//! Handling stacks a package can be sorted onto.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SorterError;

/// Handling stack for a classified package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stack {
    /// Neither bulky nor heavy.
    Standard,
    /// Exactly one of bulky or heavy.
    Special,
    /// Both bulky and heavy.
    Rejected,
}

impl Stack {
    /// Returns all available stacks.
    pub fn all() -> &'static [Stack] {
        &[Stack::Standard, Stack::Special, Stack::Rejected]
    }

    /// Returns the label printed for this stack.
    pub fn name(&self) -> &'static str {
        match self {
            Stack::Standard => "STANDARD",
            Stack::Special => "SPECIAL",
            Stack::Rejected => "REJECTED",
        }
    }

    /// Maps the two predicates onto a stack.
    pub fn from_flags(is_bulky: bool, is_heavy: bool) -> Self {
        match (is_bulky, is_heavy) {
            (true, true) => Stack::Rejected,
            (true, false) | (false, true) => Stack::Special,
            (false, false) => Stack::Standard,
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width and alignment flags apply in table output.
        f.pad(self.name())
    }
}

impl FromStr for Stack {
    type Err = SorterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stack::all()
            .iter()
            .copied()
            .find(|stack| stack.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SorterError::UnknownStack(s.to_string()))
    }
}

/// Which check made a package bulky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkyReason {
    Volume,
    Width,
    Height,
    Length,
}

/// Explained outcome of sorting one package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortDecision {
    /// The stack the package goes to.
    pub stack: Stack,
    /// Product of the three dimensions.
    pub volume: f64,
    /// Whether any bulky check fired.
    pub is_bulky: bool,
    /// Whether the mass check fired.
    pub is_heavy: bool,
    /// Every bulky check that fired, in volume/width/height/length order.
    pub bulky_reasons: Vec<BulkyReason>,
}

impl SortDecision {
    /// Builds a decision from the computed predicates.
    pub fn new(volume: f64, bulky_reasons: Vec<BulkyReason>, is_heavy: bool) -> Self {
        let is_bulky = !bulky_reasons.is_empty();
        Self {
            stack: Stack::from_flags(is_bulky, is_heavy),
            volume,
            is_bulky,
            is_heavy,
            bulky_reasons,
        }
    }

    /// Returns true if the package was bulky for the given reason.
    pub fn bulky_because(&self, reason: BulkyReason) -> bool {
        self.bulky_reasons.contains(&reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_all_returns_all_variants() {
        assert_eq!(Stack::all().len(), 3);
    }

    #[test]
    fn from_flags_matches_decision_table() {
        assert_eq!(Stack::from_flags(true, true), Stack::Rejected);
        assert_eq!(Stack::from_flags(true, false), Stack::Special);
        assert_eq!(Stack::from_flags(false, true), Stack::Special);
        assert_eq!(Stack::from_flags(false, false), Stack::Standard);
    }

    #[test]
    fn display_honours_padding() {
        assert_eq!(Stack::Special.to_string(), "SPECIAL");
        assert_eq!(format!("{:<10}|", Stack::Standard), "STANDARD  |");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("rejected".parse::<Stack>().unwrap(), Stack::Rejected);
        assert_eq!(" Special ".parse::<Stack>().unwrap(), Stack::Special);
        assert_eq!(
            "oversize".parse::<Stack>(),
            Err(SorterError::UnknownStack("oversize".to_string()))
        );
    }

    #[test]
    fn serializes_as_upper_case_label() {
        let json = serde_json::to_string(&Stack::Rejected).unwrap();
        assert_eq!(json, "\"REJECTED\"");

        let parsed: Stack = serde_json::from_str("\"STANDARD\"").unwrap();
        assert_eq!(parsed, Stack::Standard);
    }

    #[test]
    fn decision_without_reasons_is_not_bulky() {
        let decision = SortDecision::new(1000.0, Vec::new(), true);
        assert!(!decision.is_bulky);
        assert_eq!(decision.stack, Stack::Special);
    }

    #[test]
    fn decision_records_reasons() {
        let decision = SortDecision::new(
            1_125_000.0,
            vec![BulkyReason::Volume, BulkyReason::Width],
            false,
        );
        assert!(decision.is_bulky);
        assert!(decision.bulky_because(BulkyReason::Width));
        assert!(!decision.bulky_because(BulkyReason::Length));
        assert_eq!(decision.stack, Stack::Special);
    }
}
