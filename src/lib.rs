//! # Keiro - Adaptive Page Navigation for Survey Forms
//!
//! **Keiro** is a deterministic, replayable page-navigation engine for
//! multi-page survey forms. After every page it decides whether to advance
//! linearly, jump to an arbitrary target page, or submit, based on
//! declarative per-field branching rules evaluated against the value the
//! respondent just entered. Backward navigation retraces the actual path
//! taken, never a page counter, and malformed rule data degrades to plain
//! linear navigation instead of corrupting page state.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic and rendering-free. It operates on a
//! canonical internal model of a form. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your custom form format (e.g., from JSON,
//!     YAML, etc.) into your own Rust structs.
//! 2.  **Convert to Keiro's Model**: Implement the `IntoForm` trait for your
//!     structs to provide a translation layer into Keiro's `FormDefinition`.
//! 3.  **Build the Registry**: `FormPages::from_definition` resolves pages
//!     and normalizes every field's branching configuration exactly once.
//! 4.  **Navigate**: Create a `NavigationController` and drive it with
//!     `advance`/`retreat` calls, injecting your own field-value provider,
//!     validator, and analytics tracker.
//!
//! ## Quick Start
//!
//! The following example wires a small screening form where answering "no"
//! on page 2 submits immediately instead of walking the remaining pages.
//!
//! ```rust
//! use keiro::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let definition = FormDefinition {
//!         pages: vec![
//!             PageDefinition {
//!                 id: "intro".to_string(),
//!                 kind: PageKind::Standard,
//!                 fields: vec![],
//!             },
//!             PageDefinition {
//!                 id: "screening".to_string(),
//!                 kind: PageKind::Standard,
//!                 fields: vec![FieldDefinition {
//!                     id: "eligible".to_string(),
//!                     kind: FieldKind::Radio,
//!                     logic: Some(json!({
//!                         "enabled": true,
//!                         "rules": [
//!                             { "matchValue": "no", "action": "submit" }
//!                         ],
//!                         "defaultAction": "nextPage"
//!                     })),
//!                 }],
//!             },
//!             PageDefinition {
//!                 id: "details".to_string(),
//!                 kind: PageKind::Standard,
//!                 fields: vec![],
//!             },
//!             PageDefinition {
//!                 id: "thanks".to_string(),
//!                 kind: PageKind::ThankYou,
//!                 fields: vec![],
//!             },
//!         ],
//!     };
//!
//!     let pages = FormPages::from_definition(definition)?;
//!     let mut navigation = NavigationController::new(pages);
//!
//!     let mut answers = MapValueProvider::new();
//!     answers.set("eligible", json!("yes"));
//!
//!     let mut tracker = NoopTracker;
//!
//!     // Page 1 -> 2 (no branching on the intro page)
//!     let outcome = navigation.advance(&answers, &AlwaysValid, &mut tracker);
//!     assert_eq!(outcome, AdvanceOutcome::Moved(2));
//!
//!     // "yes" matches no rule, so the default next-page action applies.
//!     let outcome = navigation.advance(&answers, &AlwaysValid, &mut tracker);
//!     assert_eq!(outcome, AdvanceOutcome::Moved(3));
//!
//!     // Backward navigation retraces the real path.
//!     assert_eq!(navigation.retreat(&mut tracker), Some(2));
//!
//!     // An ineligible respondent submits straight from page 2.
//!     answers.set("eligible", json!("no"));
//!     let outcome = navigation.advance(&answers, &AlwaysValid, &mut tracker);
//!     assert_eq!(outcome, AdvanceOutcome::Submitted);
//!     assert!(navigation.is_submitted());
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod form;
pub mod host;
pub mod logic;
pub mod navigator;
pub mod prelude;
pub mod transition;
pub mod value;
