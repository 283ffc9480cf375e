//! Estados del pipeline: registros inmutables que cada acción extiende.
//!
//! Las acciones nunca mutan el resultado de un paso anterior in situ: toman
//! el estado por valor y devuelven uno nuevo vía los builders `with_*`.
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;

use kg_domain::ThingId;

use crate::command::AuthorDefinition;
use crate::resolve::ResolutionMap;

/// Triple horneado: (sujeto, predicado, objeto) como referencias planas.
/// El sujeto puede ser un placeholder `^n`, un temp id o un id existente.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BakedStatement {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl BakedStatement {
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: impl Into<String>) -> Self {
        Self { subject: subject.into(),
               predicate: predicate.into(),
               object: object.into() }
    }
}

impl fmt::Display for BakedStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.subject, self.predicate, self.object)
    }
}

/// Definición de un recurso a crear por cada placeholder sintético:
/// contribuciones top-level y objetos inline anónimos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderDefinition {
    pub label: String,
    pub classes: Vec<ThingId>,
    /// Las contribuciones top-level reciben además la clase Contribution y
    /// el enlace paper -> has-contribution.
    pub is_contribution: bool,
}

/// Estado acumulado del pipeline de creación de papers.
#[derive(Debug, Clone, Default)]
pub struct CreatePaperState {
    pub temp_ids: IndexSet<String>,
    pub validated_ids: ResolutionMap,
    pub baked_statements: Vec<BakedStatement>,
    pub placeholders: IndexMap<String, PlaceholderDefinition>,
    pub validated_authors: Vec<AuthorDefinition>,
    pub paper_id: Option<ThingId>,
    pub contribution_ids: Vec<ThingId>,
}

impl CreatePaperState {
    pub fn with_temp_ids(self, temp_ids: IndexSet<String>) -> Self {
        Self { temp_ids, ..self }
    }

    pub fn with_validated_ids(self, validated_ids: ResolutionMap) -> Self {
        Self { validated_ids, ..self }
    }

    pub fn with_baked_contributions(self,
                                    validated_ids: ResolutionMap,
                                    baked_statements: Vec<BakedStatement>,
                                    placeholders: IndexMap<String, PlaceholderDefinition>)
                                    -> Self {
        Self { validated_ids,
               baked_statements,
               placeholders,
               ..self }
    }

    pub fn with_validated_authors(self, validated_authors: Vec<AuthorDefinition>) -> Self {
        Self { validated_authors, ..self }
    }

    pub fn with_paper_id(self, paper_id: ThingId) -> Self {
        Self { paper_id: Some(paper_id),
               ..self }
    }

    pub fn with_contribution_ids(self, contribution_ids: Vec<ThingId>) -> Self {
        Self { contribution_ids, ..self }
    }
}

/// Estado del pipeline que agrega una contribución a un paper existente.
#[derive(Debug, Clone, Default)]
pub struct CreateContributionState {
    pub temp_ids: IndexSet<String>,
    pub validated_ids: ResolutionMap,
    pub baked_statements: Vec<BakedStatement>,
    pub placeholders: IndexMap<String, PlaceholderDefinition>,
    pub contribution_id: Option<ThingId>,
}

impl CreateContributionState {
    pub fn with_temp_ids(self, temp_ids: IndexSet<String>) -> Self {
        Self { temp_ids, ..self }
    }

    pub fn with_validated_ids(self, validated_ids: ResolutionMap) -> Self {
        Self { validated_ids, ..self }
    }

    pub fn with_baked_contributions(self,
                                    validated_ids: ResolutionMap,
                                    baked_statements: Vec<BakedStatement>,
                                    placeholders: IndexMap<String, PlaceholderDefinition>)
                                    -> Self {
        Self { validated_ids,
               baked_statements,
               placeholders,
               ..self }
    }

    pub fn with_contribution_id(self, contribution_id: ThingId) -> Self {
        Self { contribution_id: Some(contribution_id),
               ..self }
    }
}
