//! kg-domain: entidades del grafo, identificadores y reglas de etiquetas.
//! No depende de ningún otro crate del workspace.
pub mod error;
pub mod ids;
pub mod label;
pub mod thing;
pub mod vocab;

pub use error::DomainError;
pub use ids::{ContributorId, ObservatoryId, OrganizationId};
pub use label::{validate_label, validate_literal_datatype, validate_literal_label, MAX_LABEL_LENGTH};
pub use thing::{Class, ExtractionMethod, Literal, Predicate, Resource, Thing, ThingId};
