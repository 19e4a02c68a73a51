//! Per-page transition decisions.
//!
//! `TransitionEvaluator` is the read-only half of navigation: it scans the
//! branching-enabled fields of a page in rendering order and produces one
//! `Transition`. It never mutates anything, which is what lets the same call
//! back both the actual advance and the live progress preview.

use crate::form::{PageNumber, PageRegistry};
use crate::host::FieldValueProvider;
use crate::logic::{RuleAction, RuleEngine};
use crate::value::FieldValue;

/// The decision taken after a page: submit the form, advance linearly, or
/// jump to an arbitrary page.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Terminal: hand the form to the submission pipeline.
    Submit,
    /// Plain linear advance to `current + 1`.
    NextPage,
    /// Branch jump to `target`.
    GoToPage {
        target: PageNumber,
        /// Whether the decision came from a spec's default action rather
        /// than a matched rule.
        is_default: bool,
        /// The field whose logic produced the jump.
        field_id: Option<String>,
        /// The captured value that matched, absent for default decisions.
        matched_value: Option<FieldValue>,
    },
}

/// Computes the transition out of a page by applying each conditional
/// field's rules to its captured value.
pub struct TransitionEvaluator<'a, R: PageRegistry> {
    pages: &'a R,
}

impl<'a, R: PageRegistry> TransitionEvaluator<'a, R> {
    pub fn new(pages: &'a R) -> Self {
        Self { pages }
    }

    /// Decides where navigation goes after `current`.
    ///
    /// Fields are consulted in rendering order; the first field that yields
    /// a decision wins. A field abstains when its logic is disabled, when
    /// its captured value is empty, or when no rule matches and it declares
    /// no default action. If every field abstains the result is a plain
    /// `NextPage`.
    pub fn next_page(
        &self,
        current: PageNumber,
        provider: &impl FieldValueProvider,
    ) -> Transition {
        let Some(page) = self.pages.page(current) else {
            return Transition::NextPage;
        };

        for field in &page.fields {
            let Some(spec) = &field.logic else { continue };
            if !spec.enabled {
                continue;
            }

            let value = FieldValue::capture(field.kind, provider.raw_value(&field.id));
            if value.is_empty() {
                // An unanswered field neither matches nor triggers its
                // default; other conditional fields still get their turn.
                continue;
            }

            match RuleEngine::first_match(&spec.rules, &value) {
                Some(rule) => {
                    log::debug!(
                        "Field '{}' value '{}' matched rule '{}'",
                        field.id,
                        value,
                        rule.id
                    );
                    return self.resolve(current, &rule.action, false, &field.id, Some(&value));
                }
                None => {
                    if let Some(default) = &spec.default_action {
                        return self.resolve(current, default, true, &field.id, None);
                    }
                }
            }
        }

        Transition::NextPage
    }

    /// Resolves a rule or default action into a realized transition,
    /// clamping declared targets and coercing terminal targets to a submit.
    fn resolve(
        &self,
        current: PageNumber,
        action: &RuleAction,
        is_default: bool,
        field_id: &str,
        matched_value: Option<&FieldValue>,
    ) -> Transition {
        match action {
            RuleAction::Submit => Transition::Submit,
            RuleAction::NextPage => Transition::NextPage,
            RuleAction::GoToPage(raw) => {
                let target = self.pages.clamp(*raw);
                if i64::from(target) != *raw {
                    log::debug!(
                        "Clamped declared target page {} into range as {}",
                        raw,
                        target
                    );
                }
                if self.pages.is_thank_you(target) {
                    // Never navigate onto the thank-you page directly.
                    return Transition::Submit;
                }
                if target == current {
                    // Self-loop guard.
                    return Transition::NextPage;
                }
                Transition::GoToPage {
                    target,
                    is_default,
                    field_id: Some(field_id.to_string()),
                    matched_value: matched_value.cloned(),
                }
            }
        }
    }
}
