//! Pipeline de creación de papers: cada struct adapta un validador o
//! creador genérico al par (comando, estado) del paper. El orden lo fija
//! el servicio; aquí sólo viven los pasos.
use std::sync::Arc;

use kg_domain::vocab;

use crate::actions::authors::{AuthorCreator, AuthorValidator};
use crate::actions::community::{ObservatoryValidator, OrganizationValidator};
use crate::actions::contributions::ContributionValidator;
use crate::actions::existence::{PaperIdentifierCreator, PaperIdentifierValidator, PaperTitleValidator};
use crate::actions::publication_info::{PublicationInfoCreator, PublicationInfoValidator};
use crate::actions::research_fields::{ResearchFieldCreator, ResearchFieldValidator};
use crate::actions::state::CreatePaperState;
use crate::actions::subgraph::SubgraphCreator;
use crate::actions::temp_ids::TempIdValidator;
use crate::actions::thing_definitions::ThingDefinitionValidator;
use crate::actions::Action;
use crate::command::CreatePaperCommand;
use crate::errors::ContentTypeError;
use crate::ports::{CreateResourceCommand, ResourceRepository, ResourceUseCases, StatementRepository,
                   ThingRepository};

#[derive(Default)]
pub struct PaperTempIdValidator {
    inner: TempIdValidator,
}

impl Action<CreatePaperCommand, CreatePaperState> for PaperTempIdValidator {
    fn execute(&self,
               command: &CreatePaperCommand,
               state: CreatePaperState)
               -> Result<CreatePaperState, ContentTypeError> {
        match &command.contents {
            Some(contents) => Ok(state.with_temp_ids(self.inner.validate(contents)?)),
            None => Ok(state),
        }
    }
}

pub struct PaperTitleCreateValidator {
    inner: PaperTitleValidator,
}

impl PaperTitleCreateValidator {
    pub fn new(resource_repository: Arc<dyn ResourceRepository>) -> Self {
        Self { inner: PaperTitleValidator::new(resource_repository) }
    }
}

impl Action<CreatePaperCommand, CreatePaperState> for PaperTitleCreateValidator {
    fn execute(&self,
               command: &CreatePaperCommand,
               state: CreatePaperState)
               -> Result<CreatePaperState, ContentTypeError> {
        self.inner.validate(&command.title)?;
        Ok(state)
    }
}

pub struct PaperIdentifierCreateValidator {
    inner: PaperIdentifierValidator,
}

impl PaperIdentifierCreateValidator {
    pub fn new(statement_repository: Arc<dyn StatementRepository>) -> Self {
        Self { inner: PaperIdentifierValidator::new(statement_repository) }
    }
}

impl Action<CreatePaperCommand, CreatePaperState> for PaperIdentifierCreateValidator {
    fn execute(&self,
               command: &CreatePaperCommand,
               state: CreatePaperState)
               -> Result<CreatePaperState, ContentTypeError> {
        self.inner.validate(&command.identifiers)?;
        Ok(state)
    }
}

pub struct PaperResearchFieldValidator {
    inner: ResearchFieldValidator,
}

impl PaperResearchFieldValidator {
    pub fn new(resource_repository: Arc<dyn ResourceRepository>) -> Self {
        Self { inner: ResearchFieldValidator::new(resource_repository) }
    }
}

impl Action<CreatePaperCommand, CreatePaperState> for PaperResearchFieldValidator {
    fn execute(&self,
               command: &CreatePaperCommand,
               state: CreatePaperState)
               -> Result<CreatePaperState, ContentTypeError> {
        self.inner.validate(&command.research_fields)?;
        Ok(state)
    }
}

pub struct PaperObservatoryValidator {
    inner: ObservatoryValidator,
}

impl PaperObservatoryValidator {
    pub fn new(observatory_repository: Arc<dyn crate::ports::ObservatoryRepository>) -> Self {
        Self { inner: ObservatoryValidator::new(observatory_repository) }
    }
}

impl Action<CreatePaperCommand, CreatePaperState> for PaperObservatoryValidator {
    fn execute(&self,
               command: &CreatePaperCommand,
               state: CreatePaperState)
               -> Result<CreatePaperState, ContentTypeError> {
        self.inner.validate(&command.observatories)?;
        Ok(state)
    }
}

pub struct PaperOrganizationValidator {
    inner: OrganizationValidator,
}

impl PaperOrganizationValidator {
    pub fn new(organization_repository: Arc<dyn crate::ports::OrganizationRepository>) -> Self {
        Self { inner: OrganizationValidator::new(organization_repository) }
    }
}

impl Action<CreatePaperCommand, CreatePaperState> for PaperOrganizationValidator {
    fn execute(&self,
               command: &CreatePaperCommand,
               state: CreatePaperState)
               -> Result<CreatePaperState, ContentTypeError> {
        self.inner.validate(&command.organizations)?;
        Ok(state)
    }
}

pub struct PaperAuthorValidator {
    inner: AuthorValidator,
}

impl PaperAuthorValidator {
    pub fn new(resource_repository: Arc<dyn ResourceRepository>) -> Self {
        Self { inner: AuthorValidator::new(resource_repository) }
    }
}

impl Action<CreatePaperCommand, CreatePaperState> for PaperAuthorValidator {
    fn execute(&self,
               command: &CreatePaperCommand,
               state: CreatePaperState)
               -> Result<CreatePaperState, ContentTypeError> {
        let validated = self.inner.validate(&command.authors)?;
        Ok(state.with_validated_authors(validated))
    }
}

#[derive(Default)]
pub struct PaperPublicationInfoValidator {
    inner: PublicationInfoValidator,
}

impl Action<CreatePaperCommand, CreatePaperState> for PaperPublicationInfoValidator {
    fn execute(&self,
               command: &CreatePaperCommand,
               state: CreatePaperState)
               -> Result<CreatePaperState, ContentTypeError> {
        if let Some(info) = &command.publication_info {
            self.inner.validate(info)?;
        }
        Ok(state)
    }
}

pub struct PaperThingDefinitionValidator {
    inner: ThingDefinitionValidator,
}

impl PaperThingDefinitionValidator {
    pub fn new(thing_repository: Arc<dyn ThingRepository>) -> Self {
        Self { inner: ThingDefinitionValidator::new(thing_repository) }
    }
}

impl Action<CreatePaperCommand, CreatePaperState> for PaperThingDefinitionValidator {
    fn execute(&self,
               command: &CreatePaperCommand,
               state: CreatePaperState)
               -> Result<CreatePaperState, ContentTypeError> {
        let Some(contents) = &command.contents else {
            return Ok(state);
        };
        let mut validated_ids = state.validated_ids.clone();
        self.inner.validate(contents, &state.temp_ids, &mut validated_ids)?;
        Ok(state.with_validated_ids(validated_ids))
    }
}

pub struct PaperContributionValidator {
    inner: ContributionValidator,
}

impl PaperContributionValidator {
    pub fn new(thing_repository: Arc<dyn ThingRepository>) -> Self {
        Self { inner: ContributionValidator::new(thing_repository) }
    }
}

impl Action<CreatePaperCommand, CreatePaperState> for PaperContributionValidator {
    fn execute(&self,
               command: &CreatePaperCommand,
               state: CreatePaperState)
               -> Result<CreatePaperState, ContentTypeError> {
        let Some(contents) = &command.contents else {
            return Ok(state);
        };
        let validation =
            self.inner.validate(&state.temp_ids, &state.validated_ids, contents, &contents.contributions)?;
        Ok(state.with_baked_contributions(validation.validated_ids,
                                          validation.baked_statements,
                                          validation.placeholders))
    }
}

// -- creadores: de aquí en adelante ya no hay validación que falle ----------

/// Crea el recurso del paper con la clase reservada Paper.
pub struct PaperResourceCreator {
    resource_use_cases: Arc<dyn ResourceUseCases>,
}

impl PaperResourceCreator {
    pub fn new(resource_use_cases: Arc<dyn ResourceUseCases>) -> Self {
        Self { resource_use_cases }
    }
}

impl Action<CreatePaperCommand, CreatePaperState> for PaperResourceCreator {
    fn execute(&self,
               command: &CreatePaperCommand,
               state: CreatePaperState)
               -> Result<CreatePaperState, ContentTypeError> {
        let paper_id =
            self.resource_use_cases
                .create(CreateResourceCommand { label: command.title.clone(),
                                                classes: vec![vocab::classes::PAPER.clone()],
                                                contributor_id: command.contributor_id,
                                                extraction_method: command.extraction_method })?;
        Ok(state.with_paper_id(paper_id))
    }
}

pub struct PaperIdentifierResourceCreator {
    inner: PaperIdentifierCreator,
}

impl PaperIdentifierResourceCreator {
    pub fn new(inner: PaperIdentifierCreator) -> Self {
        Self { inner }
    }
}

impl Action<CreatePaperCommand, CreatePaperState> for PaperIdentifierResourceCreator {
    fn execute(&self,
               command: &CreatePaperCommand,
               state: CreatePaperState)
               -> Result<CreatePaperState, ContentTypeError> {
        let paper_id = require_paper_id(&state)?;
        self.inner.create(&command.contributor_id, &paper_id, &command.identifiers)?;
        Ok(state)
    }
}

pub struct PaperAuthorCreator {
    inner: AuthorCreator,
}

impl PaperAuthorCreator {
    pub fn new(inner: AuthorCreator) -> Self {
        Self { inner }
    }
}

impl Action<CreatePaperCommand, CreatePaperState> for PaperAuthorCreator {
    fn execute(&self,
               command: &CreatePaperCommand,
               state: CreatePaperState)
               -> Result<CreatePaperState, ContentTypeError> {
        let paper_id = require_paper_id(&state)?;
        self.inner.create(&command.contributor_id,
                          command.extraction_method,
                          &paper_id,
                          &state.validated_authors)?;
        Ok(state)
    }
}

pub struct PaperResearchFieldCreator {
    inner: ResearchFieldCreator,
}

impl PaperResearchFieldCreator {
    pub fn new(inner: ResearchFieldCreator) -> Self {
        Self { inner }
    }
}

impl Action<CreatePaperCommand, CreatePaperState> for PaperResearchFieldCreator {
    fn execute(&self,
               command: &CreatePaperCommand,
               state: CreatePaperState)
               -> Result<CreatePaperState, ContentTypeError> {
        let paper_id = require_paper_id(&state)?;
        self.inner.create(&command.contributor_id, &paper_id, &command.research_fields)?;
        Ok(state)
    }
}

pub struct PaperPublicationInfoCreator {
    inner: PublicationInfoCreator,
}

impl PaperPublicationInfoCreator {
    pub fn new(inner: PublicationInfoCreator) -> Self {
        Self { inner }
    }
}

impl Action<CreatePaperCommand, CreatePaperState> for PaperPublicationInfoCreator {
    fn execute(&self,
               command: &CreatePaperCommand,
               state: CreatePaperState)
               -> Result<CreatePaperState, ContentTypeError> {
        if let Some(info) = &command.publication_info {
            let paper_id = require_paper_id(&state)?;
            self.inner
                .create(&command.contributor_id, command.extraction_method, &paper_id, info)?;
        }
        Ok(state)
    }
}

/// Materializa el subgrafo de contenidos y registra los ids de las
/// contribuciones creadas.
pub struct PaperContentsCreator {
    inner: SubgraphCreator,
}

impl PaperContentsCreator {
    pub fn new(inner: SubgraphCreator) -> Self {
        Self { inner }
    }
}

impl Action<CreatePaperCommand, CreatePaperState> for PaperContentsCreator {
    fn execute(&self,
               command: &CreatePaperCommand,
               state: CreatePaperState)
               -> Result<CreatePaperState, ContentTypeError> {
        let Some(contents) = &command.contents else {
            return Ok(state);
        };
        let paper_id = require_paper_id(&state)?;
        let contribution_ids = self.inner.create_things_and_statements(&command.contributor_id,
                                                                       command.extraction_method,
                                                                       &paper_id,
                                                                       contents,
                                                                       &state.validated_ids,
                                                                       &state.placeholders,
                                                                       &state.baked_statements)?;
        Ok(state.with_contribution_ids(contribution_ids))
    }
}

fn require_paper_id(state: &CreatePaperState) -> Result<kg_domain::ThingId, ContentTypeError> {
    state.paper_id
         .clone()
         .ok_or_else(|| ContentTypeError::Internal("paper resource was not created yet".into()))
}
