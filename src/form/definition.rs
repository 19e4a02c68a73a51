/// The complete, canonical definition of a multi-page form, ready to be
/// turned into a `FormPages` registry.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default)]
pub struct FormDefinition {
    pub pages: Vec<PageDefinition>,
}

/// Defines a single page of the form, in presentation order.
#[derive(Debug, Clone)]
pub struct PageDefinition {
    pub id: String,
    pub kind: PageKind,
    pub fields: Vec<FieldDefinition>,
}

/// Defines an input field on a page. `logic` carries the field's raw
/// declarative branching configuration, if any; it is normalized once when
/// the registry is built.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    pub id: String,
    pub kind: FieldKind,
    pub logic: Option<serde_json::Value>,
}

/// What a page is, navigationally.
///
/// A `ThankYou` page is terminal: any branch target resolving to it is
/// coerced into a submit decision instead of a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Standard,
    ThankYou,
}

/// The declared widget kind of a field, which determines how its raw
/// captured state is read into a `FieldValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Select,
    Radio,
    Checkbox,
    Range,
}
