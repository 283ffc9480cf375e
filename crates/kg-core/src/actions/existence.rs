//! Chequeos de existencia previa: título e identificadores externos. Ambos
//! corren antes de cualquier creación para que un duplicado no deje basura.
use std::sync::Arc;

use kg_domain::{validate_label, vocab, ContributorId, ThingId};

use crate::errors::ContentTypeError;
use crate::ports::{CreateLiteralCommand, LiteralUseCases, ResourceRepository, StatementRepository,
                   StatementUseCases};

pub struct PaperTitleValidator {
    resource_repository: Arc<dyn ResourceRepository>,
}

impl PaperTitleValidator {
    pub fn new(resource_repository: Arc<dyn ResourceRepository>) -> Self {
        Self { resource_repository }
    }

    pub fn validate(&self, title: &str) -> Result<(), ContentTypeError> {
        validate_label(title)?;
        if !self.resource_repository
                .find_all_by_class_and_label(&vocab::classes::PAPER, title)
                .is_empty()
        {
            return Err(ContentTypeError::PaperWithTitleAlreadyExists(title.to_string()));
        }
        Ok(())
    }
}

pub struct PaperIdentifierValidator {
    statement_repository: Arc<dyn StatementRepository>,
}

impl PaperIdentifierValidator {
    pub fn new(statement_repository: Arc<dyn StatementRepository>) -> Self {
        Self { statement_repository }
    }

    /// Claves desconocidas del mapa de identificadores se ignoran.
    pub fn validate(&self,
                    identifiers: &indexmap::IndexMap<String, Vec<String>>)
                    -> Result<(), ContentTypeError> {
        for (key, values) in identifiers {
            let Some(predicate) = vocab::PAPER_IDENTIFIERS.get(key.as_str()) else {
                continue;
            };
            for value in values {
                let count = self.statement_repository
                                .count_by_predicate_and_label_and_subject_class(predicate,
                                                                                value,
                                                                                &vocab::classes::PAPER);
                if count > 0 {
                    return Err(ContentTypeError::PaperWithIdentifierAlreadyExists(value.clone()));
                }
            }
        }
        Ok(())
    }
}

pub struct PaperIdentifierCreator {
    pub literal_use_cases: Arc<dyn LiteralUseCases>,
    pub statement_use_cases: Arc<dyn StatementUseCases>,
}

impl PaperIdentifierCreator {
    pub fn create(&self,
                  contributor_id: &ContributorId,
                  paper_id: &ThingId,
                  identifiers: &indexmap::IndexMap<String, Vec<String>>)
                  -> Result<(), ContentTypeError> {
        for (key, values) in identifiers {
            let Some(predicate) = vocab::PAPER_IDENTIFIERS.get(key.as_str()) else {
                continue;
            };
            for value in values {
                let literal = self.literal_use_cases
                                  .create(CreateLiteralCommand { label: value.clone(),
                                                                 datatype: vocab::XSD_STRING.to_string(),
                                                                 contributor_id: *contributor_id })?;
                self.statement_use_cases.add(contributor_id, paper_id, predicate, &literal)?;
            }
        }
        Ok(())
    }
}
