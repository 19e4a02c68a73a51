use super::definition::FormDefinition;
use crate::error::FormConversionError;

/// A trait for custom data models that can be converted into a Keiro
/// `FormDefinition`.
///
/// This is the primary extension point for making Keiro format-agnostic. By
/// implementing this trait on your own configuration structs, you provide a
/// translation layer that lets the navigation engine run over any host form
/// format.
///
/// # Example
///
/// ```rust,no_run
/// use keiro::form::{
///     FieldDefinition, FieldKind, FormDefinition, IntoForm, PageDefinition, PageKind,
/// };
/// use keiro::error::FormConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyQuestion { name: String, widget: String }
/// struct MySurvey { questions: Vec<Vec<MyQuestion>> }
///
/// // 2. Implement `IntoForm` for your top-level struct.
/// impl IntoForm for MySurvey {
///     fn into_form(self) -> Result<FormDefinition, FormConversionError> {
///         let pages = self
///             .questions
///             .into_iter()
///             .enumerate()
///             .map(|(i, questions)| PageDefinition {
///                 id: format!("page-{}", i + 1),
///                 kind: PageKind::Standard,
///                 fields: questions
///                     .into_iter()
///                     .map(|q| FieldDefinition {
///                         id: q.name,
///                         // Your logic to map `widget` onto a FieldKind
///                         kind: FieldKind::Radio,
///                         logic: None,
///                     })
///                     .collect(),
///             })
///             .collect();
///
///         Ok(FormDefinition { pages })
///     }
/// }
/// ```
pub trait IntoForm {
    /// Consumes the object and converts it into a Keiro-compatible form
    /// definition.
    fn into_form(self) -> Result<FormDefinition, FormConversionError>;
}
