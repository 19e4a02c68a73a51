//! Common test utilities for building form definitions and collaborators.
use keiro::prelude::*;
use serde_json::json;

/// A page with no fields.
#[allow(dead_code)]
pub fn plain_page(id: &str) -> PageDefinition {
    PageDefinition {
        id: id.to_string(),
        kind: PageKind::Standard,
        fields: vec![],
    }
}

/// A terminal thank-you page.
#[allow(dead_code)]
pub fn thank_you_page(id: &str) -> PageDefinition {
    PageDefinition {
        id: id.to_string(),
        kind: PageKind::ThankYou,
        fields: vec![],
    }
}

/// A standard page carrying a single field.
#[allow(dead_code)]
pub fn page_with_field(page_id: &str, field: FieldDefinition) -> PageDefinition {
    PageDefinition {
        id: page_id.to_string(),
        kind: PageKind::Standard,
        fields: vec![field],
    }
}

#[allow(dead_code)]
pub fn field(id: &str, kind: FieldKind, logic: Option<serde_json::Value>) -> FieldDefinition {
    FieldDefinition {
        id: id.to_string(),
        kind,
        logic,
    }
}

/// The four-page branching form used by the end-to-end scenarios.
///
/// Page 2 carries a radio field `followup` with
/// `{matchValue: "no", action: goToPage, targetPage: 4}` and a next-page
/// default.
#[allow(dead_code)]
pub fn branching_form() -> FormDefinition {
    FormDefinition {
        pages: vec![
            plain_page("p1"),
            page_with_field(
                "p2",
                field(
                    "followup",
                    FieldKind::Radio,
                    Some(json!({
                        "enabled": true,
                        "rules": [
                            { "matchValue": "no", "action": "goToPage", "targetPage": 4 }
                        ],
                        "defaultAction": "nextPage"
                    })),
                ),
            ),
            plain_page("p3"),
            plain_page("p4"),
        ],
    }
}

/// A purely linear form of `count` empty standard pages.
#[allow(dead_code)]
pub fn linear_form(count: usize) -> FormDefinition {
    FormDefinition {
        pages: (1..=count).map(|i| plain_page(&format!("p{}", i))).collect(),
    }
}

#[allow(dead_code)]
pub fn build(definition: FormDefinition) -> FormPages {
    FormPages::from_definition(definition).expect("form definition should build")
}

/// A provider with a single captured answer.
#[allow(dead_code)]
pub fn one_answer(field_id: &str, value: serde_json::Value) -> MapValueProvider {
    let mut answers = MapValueProvider::new();
    answers.set(field_id, value);
    answers
}

/// A validator that rejects exactly one page.
#[allow(dead_code)]
pub struct RejectingValidator {
    pub rejected_page: PageNumber,
    pub first_invalid: &'static str,
}

impl Validator for RejectingValidator {
    fn validate_page(&self, page: PageNumber) -> PageValidation {
        if page == self.rejected_page {
            PageValidation::Invalid {
                first_invalid: self.first_invalid.to_string(),
            }
        } else {
            PageValidation::Valid
        }
    }
}

/// A tracker that records every event it receives, for assertions.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingTracker {
    pub events: Vec<TrackedEvent>,
}

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum TrackedEvent {
    PageChange(PageNumber),
    BranchJump {
        from: PageNumber,
        to: PageNumber,
        field_id: String,
        matched_value: Option<FieldValue>,
    },
}

impl Tracker for RecordingTracker {
    fn page_change(&mut self, page: PageNumber) {
        self.events.push(TrackedEvent::PageChange(page));
    }

    fn branch_jump(
        &mut self,
        from: PageNumber,
        to: PageNumber,
        field_id: &str,
        matched_value: Option<&FieldValue>,
    ) {
        self.events.push(TrackedEvent::BranchJump {
            from,
            to,
            field_id: field_id.to_string(),
            matched_value: matched_value.cloned(),
        });
    }
}

#[allow(dead_code)]
impl RecordingTracker {
    pub fn branch_jumps(&self) -> Vec<&TrackedEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, TrackedEvent::BranchJump { .. }))
            .collect()
    }
}
