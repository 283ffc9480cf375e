//! Taxonomía de errores del pipeline. Cada variante identifica la referencia
//! o regla que falló; los mensajes son aptos para el cliente.
use thiserror::Error;

use kg_domain::{DomainError, ObservatoryId, OrganizationId, ThingId};

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ContentTypeError {
    #[error("duplicate temp id {0:?}")]
    DuplicateTempId(String),
    #[error("invalid temp id {0:?}")]
    InvalidTempId(String),
    /// Referencia con sintaxis de temp id que no fue declarada en el comando.
    #[error("thing {0:?} not defined")]
    ThingNotDefined(String),
    #[error("thing {0} not found")]
    ThingNotFound(ThingId),
    #[error("thing {0} is not a class")]
    ThingIsNotAClass(ThingId),
    #[error("thing {0} is not a predicate")]
    ThingIsNotAPredicate(ThingId),
    /// Un literal no puede ser sujeto de statements anidados.
    #[error("invalid statement subject {0:?}")]
    InvalidStatementSubject(String),
    #[error("contribution at index {0} does not contain any statements")]
    EmptyContribution(usize),
    #[error("paper with title {0:?} already exists")]
    PaperWithTitleAlreadyExists(String),
    #[error("paper with identifier {0:?} already exists")]
    PaperWithIdentifierAlreadyExists(String),
    #[error("paper {0} not found")]
    PaperNotFound(ThingId),
    #[error("author {0} not found")]
    AuthorNotFound(ThingId),
    #[error("research field {0} not found")]
    ResearchFieldNotFound(ThingId),
    #[error("thing {0} is not a research field")]
    NotAResearchField(ThingId),
    #[error("observatory {0} not found")]
    ObservatoryNotFound(ObservatoryId),
    #[error("organization {0} not found")]
    OrganizationNotFound(OrganizationId),
    #[error("invalid publication month {0}")]
    InvalidMonth(u8),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("internal: {0}")]
    Internal(String),
}
