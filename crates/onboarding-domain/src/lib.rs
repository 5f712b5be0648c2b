mod draft;
mod errors;
mod field;
mod language_level;
pub mod location;
mod places;
mod product;

pub use draft::RegistrationDraft;
pub use errors::DomainError;
pub use field::{FieldDefault, FieldKind, FieldSchema, FieldSpec, FieldValue};
pub use language_level::LanguageLevel;
pub use location::{DelimiterClass, LocationFault, LocationLists, LocationRejection, MatchMode};
pub use places::{ARABIC_PLACES, IRANIAN_PLACES};
pub use product::{Product, ProductType};
