//! Campos de investigación del paper.
use std::sync::Arc;

use kg_domain::{vocab, ContributorId, ThingId};

use crate::errors::ContentTypeError;
use crate::ports::{ResourceRepository, StatementUseCases};

pub struct ResearchFieldValidator {
    resource_repository: Arc<dyn ResourceRepository>,
}

impl ResearchFieldValidator {
    pub fn new(resource_repository: Arc<dyn ResourceRepository>) -> Self {
        Self { resource_repository }
    }

    pub fn validate(&self, research_fields: &[ThingId]) -> Result<(), ContentTypeError> {
        for id in research_fields {
            let field = self.resource_repository
                            .find_by_id(id)
                            .ok_or_else(|| ContentTypeError::ResearchFieldNotFound(id.clone()))?;
            if !field.is_instance_of(&vocab::classes::RESEARCH_FIELD) {
                return Err(ContentTypeError::NotAResearchField(id.clone()));
            }
        }
        Ok(())
    }
}

pub struct ResearchFieldCreator {
    statement_use_cases: Arc<dyn StatementUseCases>,
}

impl ResearchFieldCreator {
    pub fn new(statement_use_cases: Arc<dyn StatementUseCases>) -> Self {
        Self { statement_use_cases }
    }

    pub fn create(&self,
                  contributor_id: &ContributorId,
                  paper_id: &ThingId,
                  research_fields: &[ThingId])
                  -> Result<(), ContentTypeError> {
        for field in research_fields {
            self.statement_use_cases
                .add(contributor_id, paper_id, &vocab::predicates::HAS_RESEARCH_FIELD, field)?;
        }
        Ok(())
    }
}
