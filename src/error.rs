use thiserror::Error;

/// Errors found while normalizing a field's declarative branching
/// configuration into a `ConditionalLogicSpec`.
///
/// These never reach a navigation caller: `FormPages` catches them per field
/// at build time, logs a diagnostic, and treats the field as carrying no
/// conditional logic.
#[derive(Error, Debug, Clone)]
pub enum LogicParseError {
    #[error("Conditional logic is neither a spec object nor a bare rule array: {0}")]
    UnrecognizedShape(String),

    #[error("Rule '{rule_id}' has an unknown action: '{action}'")]
    UnknownAction { rule_id: String, action: String },

    #[error("Rule '{rule_id}' has an unknown comparison operator: '{operator}'")]
    UnknownOperator { rule_id: String, operator: String },

    #[error("Rule '{rule_id}' carries neither a match value nor an operator/threshold pair")]
    MissingTest { rule_id: String },
}

/// Errors that can occur while building a `FormPages` registry from a
/// `FormDefinition`.
#[derive(Error, Debug, Clone)]
pub enum FormBuildError {
    #[error("Form definition contains no pages")]
    EmptyForm,

    #[error("Page identifier '{0}' appears more than once in the form definition")]
    DuplicatePageId(String),
}

/// Errors that can occur when converting a custom host format into a Keiro
/// `FormDefinition`.
#[derive(Error, Debug, Clone)]
pub enum FormConversionError {
    #[error("Invalid custom form data: {0}")]
    ValidationError(String),
}
