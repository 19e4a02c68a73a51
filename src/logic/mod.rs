//! Declarative per-field branching configuration.
//!
//! A field's conditional logic arrives as untyped JSON in one of two wire
//! shapes: the canonical spec object (`enabled` flag, ordered rule list,
//! optional default action) or a legacy shorthand, a bare array of rule-like
//! objects. Both are normalized here into a single `ConditionalLogicSpec`
//! before any navigation runs.

use crate::error::LogicParseError;
use serde::Deserialize;

mod engine;

pub use engine::RuleEngine;

/// A field's normalized branching configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalLogicSpec {
    pub enabled: bool,
    pub rules: Vec<ConditionalRule>,
    /// Fallback applied when the field has a non-empty value but no rule
    /// matches it. Absent means the field abstains and evaluation moves on
    /// to the next conditional field.
    pub default_action: Option<RuleAction>,
}

/// A single branching rule: a test on the captured field value plus the
/// action taken when the test passes.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalRule {
    pub id: String,
    pub test: RuleTest,
    pub action: RuleAction,
}

/// What a rule checks against the field value.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleTest {
    /// Equality against a scalar, or membership when the rule declares a
    /// list of acceptable values.
    Match(MatchValue),
    /// Numeric comparison. The threshold keeps its stored representation;
    /// it is coerced to a number at evaluation time, and a threshold that
    /// does not coerce skips the rule rather than erroring.
    Compare {
        op: Comparator,
        threshold: serde_json::Value,
    },
}

/// The declared match target of an equality rule.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchValue {
    One(String),
    AnyOf(Vec<String>),
}

/// Supported numeric comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    GreaterOrEqual,
    LessOrEqual,
    Greater,
    Less,
    Equal,
}

impl Comparator {
    pub fn compare(&self, lhs: f64, rhs: f64) -> bool {
        match self {
            Comparator::GreaterOrEqual => lhs >= rhs,
            Comparator::LessOrEqual => lhs <= rhs,
            Comparator::Greater => lhs > rhs,
            Comparator::Less => lhs < rhs,
            Comparator::Equal => lhs == rhs,
        }
    }
}

/// What happens when a rule matches (or as the spec-level default).
///
/// A `GoToPage` target keeps the raw declared number; it is clamped into the
/// form's page range at evaluation time, never rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleAction {
    NextPage,
    GoToPage(i64),
    Submit,
}

// --- Wire Shapes ---
// Raw deserialization structs for the two accepted JSON shapes. These are
// only used here for conversion into the normalized spec.

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLogic {
    Spec(RawSpec),
    Legacy(Vec<RawRule>),
}

#[derive(Deserialize)]
struct RawSpec {
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default)]
    rules: Vec<RawRule>,
    #[serde(default, alias = "defaultAction")]
    default_action: Option<String>,
    #[serde(default, alias = "defaultTargetPage")]
    default_target_page: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct RawRule {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, alias = "matchValue", alias = "value")]
    match_value: Option<serde_json::Value>,
    #[serde(default)]
    operator: Option<String>,
    #[serde(default)]
    threshold: Option<serde_json::Value>,
    action: String,
    #[serde(default, alias = "targetPage")]
    target_page: Option<serde_json::Value>,
}

fn default_enabled() -> bool {
    true
}

impl ConditionalLogicSpec {
    /// Normalizes a raw JSON branching configuration.
    ///
    /// Accepts the canonical spec object or the legacy bare rule array; the
    /// legacy shape normalizes with `default_action = NextPage`. Anything
    /// else is an `UnrecognizedShape` error, which callers treat as "this
    /// field has no conditional logic."
    pub fn from_value(raw: &serde_json::Value) -> Result<Self, LogicParseError> {
        let wire: RawLogic = serde_json::from_value(raw.clone())
            .map_err(|e| LogicParseError::UnrecognizedShape(e.to_string()))?;

        match wire {
            RawLogic::Spec(spec) => {
                let rules = convert_rules(spec.rules)?;
                let default_action = match spec.default_action {
                    Some(name) => convert_default_action(&name, spec.default_target_page)?,
                    None => None,
                };
                Ok(ConditionalLogicSpec {
                    enabled: spec.enabled,
                    rules,
                    default_action,
                })
            }
            RawLogic::Legacy(raw_rules) => Ok(ConditionalLogicSpec {
                enabled: true,
                rules: convert_rules(raw_rules)?,
                default_action: Some(RuleAction::NextPage),
            }),
        }
    }
}

fn convert_rules(raw_rules: Vec<RawRule>) -> Result<Vec<ConditionalRule>, LogicParseError> {
    let mut rules = Vec::with_capacity(raw_rules.len());
    for (index, raw) in raw_rules.into_iter().enumerate() {
        let id = raw
            .id
            .clone()
            .unwrap_or_else(|| format!("rule-{}", index + 1));
        match convert_rule(id.clone(), raw)? {
            Some(rule) => rules.push(rule),
            None => {
                log::warn!("Dropping goToPage rule '{}' without a target page", id);
            }
        }
    }
    Ok(rules)
}

/// Converts one raw rule. Returns `Ok(None)` for a goToPage rule that names
/// no target, which the caller drops with a diagnostic.
fn convert_rule(id: String, raw: RawRule) -> Result<Option<ConditionalRule>, LogicParseError> {
    let action = match raw.action.as_str() {
        "nextPage" => RuleAction::NextPage,
        "submit" => RuleAction::Submit,
        "goToPage" => match raw.target_page {
            Some(target) => RuleAction::GoToPage(lenient_page_number(&target)),
            None => return Ok(None),
        },
        other => {
            return Err(LogicParseError::UnknownAction {
                rule_id: id,
                action: other.to_string(),
            });
        }
    };

    let test = match (raw.operator, raw.match_value) {
        (Some(op), _) => RuleTest::Compare {
            op: convert_comparator(&id, &op)?,
            threshold: raw.threshold.unwrap_or(serde_json::Value::Null),
        },
        (None, Some(value)) => RuleTest::Match(convert_match_value(&value)),
        (None, None) => return Err(LogicParseError::MissingTest { rule_id: id }),
    };

    Ok(Some(ConditionalRule { id, test, action }))
}

fn convert_comparator(rule_id: &str, operator: &str) -> Result<Comparator, LogicParseError> {
    match operator {
        ">=" => Ok(Comparator::GreaterOrEqual),
        "<=" => Ok(Comparator::LessOrEqual),
        ">" => Ok(Comparator::Greater),
        "<" => Ok(Comparator::Less),
        "==" | "=" => Ok(Comparator::Equal),
        other => Err(LogicParseError::UnknownOperator {
            rule_id: rule_id.to_string(),
            operator: other.to_string(),
        }),
    }
}

fn convert_match_value(value: &serde_json::Value) -> MatchValue {
    match value {
        serde_json::Value::Array(items) => {
            MatchValue::AnyOf(items.iter().map(scalar_to_string).collect())
        }
        scalar => MatchValue::One(scalar_to_string(scalar)),
    }
}

fn convert_default_action(
    name: &str,
    target: Option<serde_json::Value>,
) -> Result<Option<RuleAction>, LogicParseError> {
    match name {
        "nextPage" => Ok(Some(RuleAction::NextPage)),
        "submit" => Ok(Some(RuleAction::Submit)),
        "goToPage" => match target {
            Some(target) => Ok(Some(RuleAction::GoToPage(lenient_page_number(&target)))),
            None => {
                log::warn!("Ignoring default goToPage action without a default target page");
                Ok(None)
            }
        },
        other => Err(LogicParseError::UnknownAction {
            rule_id: "default".to_string(),
            action: other.to_string(),
        }),
    }
}

fn scalar_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Reads a declared page number as leniently as the wire data demands:
/// integers pass through, floats truncate, numeric strings parse, and
/// anything else becomes 0, which later clamps to the first page.
fn lenient_page_number(value: &serde_json::Value) -> i64 {
    match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        serde_json::Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|f| f as i64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}
