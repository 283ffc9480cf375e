//! Puertos de salida del núcleo: lectura (fase de validación) y creación
//! (fase de creación). Los adaptadores de persistencia los implementan; el
//! núcleo nunca habla con un almacén concreto.
//!
//! Todo es síncrono: el pipeline corre en un único hilo lógico por request
//! y cada acción depende del estado acumulado por las anteriores.
use kg_domain::{ContributorId, ExtractionMethod, ObservatoryId, OrganizationId, Resource, Thing, ThingId};

use crate::errors::ContentTypeError;

pub trait ThingRepository {
    fn find_by_id(&self, id: &ThingId) -> Option<Thing>;
}

pub trait ResourceRepository {
    fn find_by_id(&self, id: &ThingId) -> Option<Resource>;
    /// Recursos con la clase dada cuya etiqueta coincide exactamente.
    fn find_all_by_class_and_label(&self, class: &ThingId, label: &str) -> Vec<Resource>;
}

pub trait StatementRepository {
    fn statement_exists(&self, subject: &ThingId, predicate: &ThingId, object: &ThingId) -> bool;
    /// Cantidad de statements (sujeto con `subject_class`) cuyo objeto es un
    /// literal con la etiqueta dada. Usado para detectar identificadores
    /// externos duplicados.
    fn count_by_predicate_and_label_and_subject_class(&self,
                                                      predicate: &ThingId,
                                                      literal_label: &str,
                                                      subject_class: &ThingId)
                                                      -> usize;
}

pub trait ObservatoryRepository {
    fn exists(&self, id: &ObservatoryId) -> bool;
}

pub trait OrganizationRepository {
    fn exists(&self, id: &OrganizationId) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateResourceCommand {
    pub label: String,
    pub classes: Vec<ThingId>,
    pub contributor_id: ContributorId,
    pub extraction_method: ExtractionMethod,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateLiteralCommand {
    pub label: String,
    pub datatype: String,
    pub contributor_id: ContributorId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatePredicateCommand {
    pub label: String,
    pub contributor_id: ContributorId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateListCommand {
    pub label: String,
    pub elements: Vec<ThingId>,
    pub contributor_id: ContributorId,
}

pub trait ResourceUseCases {
    fn create(&self, command: CreateResourceCommand) -> Result<ThingId, ContentTypeError>;
}

pub trait LiteralUseCases {
    fn create(&self, command: CreateLiteralCommand) -> Result<ThingId, ContentTypeError>;
}

pub trait PredicateUseCases {
    fn create(&self, command: CreatePredicateCommand) -> Result<ThingId, ContentTypeError>;
}

pub trait ListUseCases {
    fn create(&self, command: CreateListCommand) -> Result<ThingId, ContentTypeError>;
    fn update_elements(&self, id: &ThingId, elements: Vec<ThingId>) -> Result<(), ContentTypeError>;
}

pub trait StatementUseCases {
    fn add(&self,
           contributor_id: &ContributorId,
           subject: &ThingId,
           predicate: &ThingId,
           object: &ThingId)
           -> Result<(), ContentTypeError>;
}
