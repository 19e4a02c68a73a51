//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! keiro crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use keiro::prelude::*;
//!
//! # fn run_example(definition: FormDefinition) -> Result<()> {
//! let pages = FormPages::from_definition(definition)?;
//! let mut navigation = NavigationController::new(pages);
//!
//! let answers = MapValueProvider::new();
//! let outcome = navigation.advance(&answers, &AlwaysValid, &mut NoopTracker);
//!
//! println!("Navigation outcome: {:?}", outcome);
//! # Ok(())
//! # }
//! ```

// Form model and registry
pub use crate::form::{
    Field, FieldDefinition, FieldKind, FormDefinition, FormPages, IntoForm, Page, PageDefinition,
    PageKind, PageNumber, PageRegistry,
};

// Branching rules
pub use crate::logic::{
    Comparator, ConditionalLogicSpec, ConditionalRule, MatchValue, RuleAction, RuleEngine,
    RuleTest,
};

// Transitions and navigation
pub use crate::navigator::{
    AdvanceOutcome, NavigationController, NavigationSnapshot, NavigationState,
};
pub use crate::transition::{Transition, TransitionEvaluator};

// Runtime values
pub use crate::value::FieldValue;

// Host collaborator seams
pub use crate::host::{
    AlwaysValid, FieldValueProvider, MapValueProvider, NoopTracker, PageValidation, Tracker,
    Validator,
};

// Error types
pub use crate::error::{FormBuildError, FormConversionError, LogicParseError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
