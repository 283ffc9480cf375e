//! Entidades del grafo: el tipo suma `Thing` y su identificador opaco.
//!
//! Un `Thing` es cualquier nodo ya existente en el almacén (recurso, clase,
//! predicado o literal). El núcleo nunca inspecciona más que su variante, su
//! id y su etiqueta; los adaptadores de persistencia son dueños del resto.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::ContributorId;

/// Identificador opaco entendido por el almacén de grafo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThingId(String);

impl ThingId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ThingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ThingId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ThingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Método de extracción declarado por el cliente al crear contenido.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtractionMethod {
    #[default]
    Unknown,
    Manual,
    Automatic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ThingId,
    pub label: String,
    pub classes: Vec<ThingId>,
    pub created_by: ContributorId,
    pub created_at: DateTime<Utc>,
    pub extraction_method: ExtractionMethod,
}

impl Resource {
    pub fn is_instance_of(&self, class: &ThingId) -> bool {
        self.classes.contains(class)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub id: ThingId,
    pub label: String,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    pub id: ThingId,
    pub label: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Literal {
    pub id: ThingId,
    pub label: String,
    pub datatype: String,
}

/// Nodo ya existente en el grafo, etiquetado por su variante.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Thing {
    Resource(Resource),
    Class(Class),
    Predicate(Predicate),
    Literal(Literal),
}

impl Thing {
    pub fn id(&self) -> &ThingId {
        match self {
            Thing::Resource(r) => &r.id,
            Thing::Class(c) => &c.id,
            Thing::Predicate(p) => &p.id,
            Thing::Literal(l) => &l.id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Thing::Resource(r) => &r.label,
            Thing::Class(c) => &c.label,
            Thing::Predicate(p) => &p.label,
            Thing::Literal(l) => &l.label,
        }
    }

    pub fn is_class(&self) -> bool {
        matches!(self, Thing::Class(_))
    }

    pub fn is_predicate(&self) -> bool {
        matches!(self, Thing::Predicate(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Thing::Literal(_))
    }
}
