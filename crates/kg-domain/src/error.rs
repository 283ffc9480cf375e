use thiserror::Error;

use crate::thing::ThingId;

/// Errores de reglas del dominio (etiquetas, datatypes, clases reservadas).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DomainError {
    #[error("invalid label {0:?}")]
    InvalidLabel(String),
    #[error("invalid literal label")]
    InvalidLiteralLabel,
    #[error("invalid literal datatype {0:?}")]
    InvalidLiteralDatatype(String),
    #[error("class {0} is reserved and cannot be assigned")]
    ReservedClass(ThingId),
}
