//! Comandos de entrada: objetos valor anidados tal como llegan del borde
//! (REST queda fuera de alcance; aquí sólo el shape ya deserializado).
//!
//! Los mapas de statements usan `IndexMap` para preservar el orden del
//! documento: el horneado recorre en pre-orden y ese orden se conserva hasta
//! la creación.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use kg_domain::{ContributorId, ExtractionMethod, ObservatoryId, OrganizationId, ThingId};

/// Comando para crear un paper completo con sus contribuciones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaperCommand {
    pub contributor_id: ContributorId,
    pub title: String,
    #[serde(default)]
    pub research_fields: Vec<ThingId>,
    /// Identificadores externos, p.ej. `{"doi": ["10.1000/182"]}`.
    #[serde(default)]
    pub identifiers: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub publication_info: Option<PublicationInfoDefinition>,
    #[serde(default)]
    pub authors: Vec<AuthorDefinition>,
    #[serde(default)]
    pub observatories: Vec<ObservatoryId>,
    #[serde(default)]
    pub organizations: Vec<OrganizationId>,
    #[serde(default)]
    pub contents: Option<PaperContentsDefinition>,
    #[serde(default)]
    pub extraction_method: ExtractionMethod,
}

/// Comando para agregar una contribución a un paper existente.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContributionCommand {
    pub contributor_id: ContributorId,
    pub paper_id: ThingId,
    #[serde(default)]
    pub extraction_method: ExtractionMethod,
    pub contents: ContributionContentsDefinition,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicationInfoDefinition {
    #[serde(default)]
    pub published_month: Option<u8>,
    #[serde(default)]
    pub published_year: Option<i64>,
    /// Nombre del venue; se reusa el recurso si ya existe con esa etiqueta.
    #[serde(default)]
    pub published_in: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorDefinition {
    /// Recurso de autor ya existente, si lo hay.
    #[serde(default)]
    pub id: Option<ThingId>,
    pub name: String,
    #[serde(default)]
    pub identifiers: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub homepage: Option<String>,
}

/// Mapa {referencia de predicado -> objetos} de una contribución.
pub type StatementsDefinition = IndexMap<String, Vec<StatementObjectDefinition>>;

/// Objeto de un statement: referencia escueta o objeto inline con sus
/// propios statements anidados. Un objeto inline sin `id` es anónimo y
/// recibirá un placeholder sintético al hornear.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementObjectDefinition {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub classes: Vec<ThingId>,
    #[serde(default)]
    pub statements: StatementsDefinition,
}

impl StatementObjectDefinition {
    /// Referencia escueta a un thing existente o temp id declarado.
    pub fn reference(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()),
               ..Default::default() }
    }

    /// Objeto con id propio y statements anidados (el id pasa a ser sujeto).
    pub fn nested(id: impl Into<String>, statements: StatementsDefinition) -> Self {
        Self { id: Some(id.into()),
               statements,
               ..Default::default() }
    }

    /// Objeto anónimo: obtiene un placeholder y se crea como recurso nuevo.
    pub fn inline(label: impl Into<String>, classes: Vec<ThingId>, statements: StatementsDefinition) -> Self {
        Self { id: None,
               label: Some(label.into()),
               classes,
               statements }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceDefinition {
    pub label: String,
    #[serde(default)]
    pub classes: Vec<ThingId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralDefinition {
    pub label: String,
    #[serde(default = "default_datatype")]
    pub data_type: String,
}

fn default_datatype() -> String {
    kg_domain::vocab::XSD_STRING.to_string()
}

impl LiteralDefinition {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(),
               data_type: default_datatype() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredicateDefinition {
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListDefinition {
    pub label: String,
    /// Referencias (temp o existentes) a los elementos, en orden.
    #[serde(default)]
    pub elements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContributionDefinition {
    pub label: String,
    #[serde(default)]
    pub classes: Vec<ThingId>,
    #[serde(default)]
    pub statements: StatementsDefinition,
}

/// Acceso uniforme a los mapas de definiciones de un comando. Es la costura
/// por donde se agregan nuevos tipos de contenido sin tocar los validadores.
pub trait ThingDefinitions {
    fn resources(&self) -> &IndexMap<String, ResourceDefinition>;
    fn literals(&self) -> &IndexMap<String, LiteralDefinition>;
    fn predicates(&self) -> &IndexMap<String, PredicateDefinition>;
    fn lists(&self) -> &IndexMap<String, ListDefinition>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaperContentsDefinition {
    #[serde(default)]
    pub resources: IndexMap<String, ResourceDefinition>,
    #[serde(default)]
    pub literals: IndexMap<String, LiteralDefinition>,
    #[serde(default)]
    pub predicates: IndexMap<String, PredicateDefinition>,
    #[serde(default)]
    pub lists: IndexMap<String, ListDefinition>,
    #[serde(default)]
    pub contributions: Vec<ContributionDefinition>,
}

impl ThingDefinitions for PaperContentsDefinition {
    fn resources(&self) -> &IndexMap<String, ResourceDefinition> {
        &self.resources
    }
    fn literals(&self) -> &IndexMap<String, LiteralDefinition> {
        &self.literals
    }
    fn predicates(&self) -> &IndexMap<String, PredicateDefinition> {
        &self.predicates
    }
    fn lists(&self) -> &IndexMap<String, ListDefinition> {
        &self.lists
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContributionContentsDefinition {
    #[serde(default)]
    pub resources: IndexMap<String, ResourceDefinition>,
    #[serde(default)]
    pub literals: IndexMap<String, LiteralDefinition>,
    #[serde(default)]
    pub predicates: IndexMap<String, PredicateDefinition>,
    #[serde(default)]
    pub lists: IndexMap<String, ListDefinition>,
    pub contribution: ContributionDefinition,
}

impl ThingDefinitions for ContributionContentsDefinition {
    fn resources(&self) -> &IndexMap<String, ResourceDefinition> {
        &self.resources
    }
    fn literals(&self) -> &IndexMap<String, LiteralDefinition> {
        &self.literals
    }
    fn predicates(&self) -> &IndexMap<String, PredicateDefinition> {
        &self.predicates
    }
    fn lists(&self) -> &IndexMap<String, ListDefinition> {
        &self.lists
    }
}
