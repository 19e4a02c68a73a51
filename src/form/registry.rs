use super::definition::{FieldKind, FormDefinition, PageKind};
use crate::error::FormBuildError;
use crate::logic::ConditionalLogicSpec;
use ahash::AHashSet;

/// 1-based page ordinal.
pub type PageNumber = u32;

/// A resolved page: ordinal, identifier, kind, and its fields in rendering
/// order. Immutable once the registry is built.
#[derive(Debug, Clone)]
pub struct Page {
    pub number: PageNumber,
    pub id: String,
    pub kind: PageKind,
    pub fields: Vec<Field>,
}

/// A resolved field with its branching configuration already normalized.
/// `logic` is `None` both for fields that declared none and for fields whose
/// declaration failed to normalize.
#[derive(Debug, Clone)]
pub struct Field {
    pub id: String,
    pub kind: FieldKind,
    pub logic: Option<ConditionalLogicSpec>,
}

/// Read-only page lookup consumed by the transition evaluator and the
/// navigation controller.
pub trait PageRegistry {
    /// Number of pages in the form, thank-you page included.
    fn total_pages(&self) -> PageNumber;

    /// The page at a 1-based ordinal, or `None` when out of range.
    fn page(&self, number: PageNumber) -> Option<&Page>;

    /// Whether the page at this ordinal is the terminal thank-you page.
    fn is_thank_you(&self, number: PageNumber) -> bool;

    /// Clamps a raw declared page number into `[1, total_pages]`.
    fn clamp(&self, raw: i64) -> PageNumber {
        let total = i64::from(self.total_pages()).max(1);
        raw.clamp(1, total) as PageNumber
    }
}

/// The standard registry, built once from a `FormDefinition` at form load.
///
/// Building normalizes every field's raw branching configuration exactly
/// once; a field whose configuration fails to normalize is logged and kept
/// with no logic, so a single bad declaration never takes the form down.
#[derive(Debug, Clone)]
pub struct FormPages {
    pages: Vec<Page>,
}

impl FormPages {
    pub fn from_definition(definition: FormDefinition) -> Result<Self, FormBuildError> {
        if definition.pages.is_empty() {
            return Err(FormBuildError::EmptyForm);
        }

        let mut seen_ids: AHashSet<String> = AHashSet::new();
        let mut pages = Vec::with_capacity(definition.pages.len());
        for (index, page_def) in definition.pages.into_iter().enumerate() {
            if !seen_ids.insert(page_def.id.clone()) {
                return Err(FormBuildError::DuplicatePageId(page_def.id));
            }

            let number = (index + 1) as PageNumber;
            let fields = page_def
                .fields
                .into_iter()
                .map(|field_def| {
                    let logic = field_def.logic.as_ref().and_then(|raw| {
                        match ConditionalLogicSpec::from_value(raw) {
                            Ok(spec) => Some(spec),
                            Err(e) => {
                                log::warn!(
                                    "Field '{}' on page {} has malformed conditional logic, \
                                     treating it as unconditional: {}",
                                    field_def.id,
                                    number,
                                    e
                                );
                                None
                            }
                        }
                    });
                    Field {
                        id: field_def.id,
                        kind: field_def.kind,
                        logic,
                    }
                })
                .collect();

            pages.push(Page {
                number,
                id: page_def.id,
                kind: page_def.kind,
                fields,
            });
        }

        Ok(FormPages { pages })
    }

    /// All pages in presentation order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }
}

impl PageRegistry for FormPages {
    fn total_pages(&self) -> PageNumber {
        self.pages.len() as PageNumber
    }

    fn page(&self, number: PageNumber) -> Option<&Page> {
        if number == 0 {
            return None;
        }
        self.pages.get(number as usize - 1)
    }

    fn is_thank_you(&self, number: PageNumber) -> bool {
        self.page(number)
            .is_some_and(|page| page.kind == PageKind::ThankYou)
    }
}
