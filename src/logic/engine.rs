use super::{ConditionalRule, MatchValue, RuleTest};
use crate::value::FieldValue;

/// The single authoritative matcher for branching rules.
///
/// Stateless and pure: evaluating the same rule list against the same value
/// always yields the same answer.
pub struct RuleEngine;

impl RuleEngine {
    /// Returns the first rule in declaration order that matches the captured
    /// value, or `None`.
    ///
    /// An `Empty` value abstains immediately, without consulting any rule.
    /// The caller must treat that as "this field has no say," not as "no
    /// rule matched" — the distinction controls default-action fallback.
    ///
    /// For checkbox values the scan stays rule-major: the first rule whose
    /// match value is present anywhere in the checked list wins, regardless
    /// of the order the boxes were ticked in.
    pub fn first_match<'a>(
        rules: &'a [ConditionalRule],
        value: &FieldValue,
    ) -> Option<&'a ConditionalRule> {
        if value.is_empty() {
            return None;
        }
        rules.iter().find(|rule| Self::matches(rule, value))
    }

    fn matches(rule: &ConditionalRule, value: &FieldValue) -> bool {
        match &rule.test {
            RuleTest::Match(target) => Self::match_value(target, value),
            RuleTest::Compare { op, threshold } => {
                // Threshold rules only apply to numeric values, and the
                // stored threshold must itself coerce to a number.
                let (Some(lhs), Some(rhs)) = (value.as_number(), coerce_threshold(threshold))
                else {
                    return false;
                };
                op.compare(lhs, rhs)
            }
        }
    }

    fn match_value(target: &MatchValue, value: &FieldValue) -> bool {
        match (target, value) {
            (MatchValue::One(expected), FieldValue::Multi(items)) => {
                items.iter().any(|item| item == expected)
            }
            (MatchValue::One(expected), scalar) => scalar.to_string() == *expected,
            (MatchValue::AnyOf(accepted), FieldValue::Multi(items)) => items
                .iter()
                .any(|item| accepted.iter().any(|a| a == item)),
            (MatchValue::AnyOf(accepted), scalar) => {
                let rendered = scalar.to_string();
                accepted.iter().any(|a| *a == rendered)
            }
        }
    }
}

fn coerce_threshold(threshold: &serde_json::Value) -> Option<f64> {
    match threshold {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
