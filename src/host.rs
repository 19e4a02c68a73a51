//! Host-side collaborator seams.
//!
//! The engine never touches a rendering surface: captured widget state,
//! validation verdicts, and analytics events all cross these narrow traits,
//! which is what makes the navigation core testable headlessly.

use crate::form::PageNumber;
use crate::value::FieldValue;
use ahash::AHashMap;

/// Supplies the raw captured state of a field, keyed by field id.
///
/// The engine applies the per-kind extraction contract itself; the provider
/// only hands over whatever the widget currently holds (a string for
/// select/radio, an array of strings for checkbox, a number for range).
pub trait FieldValueProvider {
    fn raw_value(&self, field_id: &str) -> Option<&serde_json::Value>;
}

/// A `FieldValueProvider` backed by a plain map of responses. Used by the
/// CLI simulator and throughout the test suite.
#[derive(Debug, Clone, Default)]
pub struct MapValueProvider {
    values: AHashMap<String, serde_json::Value>,
}

impl MapValueProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field_id: impl Into<String>, value: serde_json::Value) {
        self.values.insert(field_id.into(), value);
    }

    pub fn clear(&mut self, field_id: &str) {
        self.values.remove(field_id);
    }
}

impl FieldValueProvider for MapValueProvider {
    fn raw_value(&self, field_id: &str) -> Option<&serde_json::Value> {
        self.values.get(field_id)
    }
}

/// The verdict of validating one page before a forward move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageValidation {
    Valid,
    /// The id of the first invalid field, for focus management.
    Invalid { first_invalid: String },
}

/// External validation gate. Branching logic never runs on a page this
/// collaborator rejects, and a rejected page never mutates navigation state.
pub trait Validator {
    fn validate_page(&self, page: PageNumber) -> PageValidation;
}

/// A validator that accepts every page.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysValid;

impl Validator for AlwaysValid {
    fn validate_page(&self, _page: PageNumber) -> PageValidation {
        PageValidation::Valid
    }
}

/// Analytics sink for realized navigation.
///
/// `branch_jump` fires only when the realized move differs from a plain
/// next-page advance. Implementations must be fire-and-forget: they may not
/// block or fail a transition.
pub trait Tracker {
    fn page_change(&mut self, page: PageNumber);

    fn branch_jump(
        &mut self,
        from: PageNumber,
        to: PageNumber,
        field_id: &str,
        matched_value: Option<&FieldValue>,
    );
}

/// A tracker that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracker;

impl Tracker for NoopTracker {
    fn page_change(&mut self, _page: PageNumber) {}

    fn branch_jump(
        &mut self,
        _from: PageNumber,
        _to: PageNumber,
        _field_id: &str,
        _matched_value: Option<&FieldValue>,
    ) {
    }
}
