//! kg-core: resolución de definiciones de contenido y horneado de statements.
//!
//! El pipeline transforma un comando anidado (paper + contribuciones) en una
//! secuencia fija de acciones sobre un estado inmutable: primero todas las
//! validaciones, después todas las creaciones. Ninguna acción de creación
//! corre si alguna validación falló.
pub mod actions;
pub mod command;
pub mod errors;
pub mod ports;
pub mod resolve;

pub use actions::state::{BakedStatement, CreateContributionState, CreatePaperState, PlaceholderDefinition};
pub use actions::{execute_all, Action};
pub use command::{AuthorDefinition, ContributionContentsDefinition, ContributionDefinition, CreateContributionCommand,
                  CreatePaperCommand, ListDefinition, LiteralDefinition, PaperContentsDefinition,
                  PredicateDefinition, PublicationInfoDefinition, ResourceDefinition, StatementObjectDefinition,
                  StatementsDefinition, ThingDefinitions};
pub use errors::ContentTypeError;
pub use resolve::{is_temp_reference, Resolved};

#[cfg(test)]
pub(crate) mod test_support;
