//! The canonical form model: load-time definitions, the `IntoForm`
//! conversion seam for custom host formats, and the `FormPages` registry
//! the engine navigates over.

mod conversion;
mod definition;
mod registry;

pub use conversion::IntoForm;
pub use definition::{FieldDefinition, FieldKind, FormDefinition, PageDefinition, PageKind};
pub use registry::{Field, FormPages, Page, PageNumber, PageRegistry};
