//! Servicio de contenido: arma los pipelines de acciones en su orden fijo y
//! los ejecuta. Toda la lógica vive en las acciones; aquí sólo composición.
use std::sync::Arc;

use kg_core::actions::authors::AuthorCreator;
use kg_core::actions::contributions::{ContributionContentsCreator, ContributionContentsValidator,
                                      ContributionPaperValidator, ContributionTempIdValidator,
                                      ContributionThingDefinitionValidator};
use kg_core::actions::existence::PaperIdentifierCreator;
use kg_core::actions::papers::{PaperAuthorCreator, PaperAuthorValidator, PaperContentsCreator,
                               PaperContributionValidator, PaperIdentifierCreateValidator,
                               PaperIdentifierResourceCreator, PaperObservatoryValidator,
                               PaperOrganizationValidator, PaperPublicationInfoCreator,
                               PaperPublicationInfoValidator, PaperResearchFieldCreator,
                               PaperResearchFieldValidator, PaperResourceCreator, PaperTempIdValidator,
                               PaperThingDefinitionValidator, PaperTitleCreateValidator};
use kg_core::actions::publication_info::PublicationInfoCreator;
use kg_core::actions::research_fields::ResearchFieldCreator;
use kg_core::actions::subgraph::SubgraphCreator;
use kg_core::ports::{ListUseCases, LiteralUseCases, ObservatoryRepository, OrganizationRepository,
                     PredicateUseCases, ResourceRepository, ResourceUseCases, StatementRepository,
                     StatementUseCases, ThingRepository};
use kg_core::{execute_all, Action, ContentTypeError, CreateContributionCommand, CreateContributionState,
              CreatePaperCommand, CreatePaperState};
use kg_domain::ThingId;

/// Puertos que el servicio necesita, ya envueltos para compartir.
#[derive(Clone)]
pub struct ContentPorts {
    pub thing_repository: Arc<dyn ThingRepository>,
    pub resource_repository: Arc<dyn ResourceRepository>,
    pub statement_repository: Arc<dyn StatementRepository>,
    pub observatory_repository: Arc<dyn ObservatoryRepository>,
    pub organization_repository: Arc<dyn OrganizationRepository>,
    pub resource_use_cases: Arc<dyn ResourceUseCases>,
    pub literal_use_cases: Arc<dyn LiteralUseCases>,
    pub predicate_use_cases: Arc<dyn PredicateUseCases>,
    pub list_use_cases: Arc<dyn ListUseCases>,
    pub statement_use_cases: Arc<dyn StatementUseCases>,
}

pub struct ContentService {
    ports: ContentPorts,
}

impl ContentService {
    pub fn new(ports: ContentPorts) -> Self {
        Self { ports }
    }

    /// Conveniencia para adaptadores que implementan todos los puertos,
    /// como el almacén en memoria.
    pub fn from_graph<G>(graph: Arc<G>) -> Self
        where G: ThingRepository
                  + ResourceRepository
                  + StatementRepository
                  + ObservatoryRepository
                  + OrganizationRepository
                  + ResourceUseCases
                  + LiteralUseCases
                  + PredicateUseCases
                  + ListUseCases
                  + StatementUseCases
                  + Send
                  + Sync
                  + 'static
    {
        Self::new(ContentPorts { thing_repository: graph.clone(),
                                 resource_repository: graph.clone(),
                                 statement_repository: graph.clone(),
                                 observatory_repository: graph.clone(),
                                 organization_repository: graph.clone(),
                                 resource_use_cases: graph.clone(),
                                 literal_use_cases: graph.clone(),
                                 predicate_use_cases: graph.clone(),
                                 list_use_cases: graph.clone(),
                                 statement_use_cases: graph })
    }

    /// Crea un paper completo. Primero corren todas las validaciones;
    /// ninguna creación toca el almacén si alguna falla.
    pub fn create_paper(&self, command: &CreatePaperCommand) -> Result<ThingId, ContentTypeError> {
        let p = &self.ports;
        let actions: Vec<Box<dyn Action<CreatePaperCommand, CreatePaperState>>> =
            vec![Box::new(PaperTempIdValidator::default()),
                 Box::new(PaperTitleCreateValidator::new(p.resource_repository.clone())),
                 Box::new(PaperIdentifierCreateValidator::new(p.statement_repository.clone())),
                 Box::new(PaperResearchFieldValidator::new(p.resource_repository.clone())),
                 Box::new(PaperObservatoryValidator::new(p.observatory_repository.clone())),
                 Box::new(PaperOrganizationValidator::new(p.organization_repository.clone())),
                 Box::new(PaperAuthorValidator::new(p.resource_repository.clone())),
                 Box::new(PaperPublicationInfoValidator::default()),
                 Box::new(PaperThingDefinitionValidator::new(p.thing_repository.clone())),
                 Box::new(PaperContributionValidator::new(p.thing_repository.clone())),
                 Box::new(PaperResourceCreator::new(p.resource_use_cases.clone())),
                 Box::new(PaperIdentifierResourceCreator::new(self.identifier_creator())),
                 Box::new(PaperAuthorCreator::new(self.author_creator())),
                 Box::new(PaperResearchFieldCreator::new(ResearchFieldCreator::new(p.statement_use_cases
                                                                                    .clone()))),
                 Box::new(PaperPublicationInfoCreator::new(self.publication_info_creator())),
                 Box::new(PaperContentsCreator::new(self.subgraph_creator()))];

        let state = execute_all(&actions, command, CreatePaperState::default())?;
        let paper_id = state.paper_id
                            .ok_or_else(|| ContentTypeError::Internal("pipeline produced no paper".into()))?;
        log::info!("created paper {paper_id} with {} contribution(s)", state.contribution_ids.len());
        Ok(paper_id)
    }

    /// Agrega una contribución a un paper existente.
    pub fn create_contribution(&self,
                               command: &CreateContributionCommand)
                               -> Result<ThingId, ContentTypeError> {
        let p = &self.ports;
        let actions: Vec<Box<dyn Action<CreateContributionCommand, CreateContributionState>>> =
            vec![Box::new(ContributionTempIdValidator::default()),
                 Box::new(ContributionPaperValidator::new(p.resource_repository.clone())),
                 Box::new(ContributionThingDefinitionValidator::new(p.thing_repository.clone())),
                 Box::new(ContributionContentsValidator::new(p.thing_repository.clone())),
                 Box::new(ContributionContentsCreator::new(self.subgraph_creator()))];

        let state = execute_all(&actions, command, CreateContributionState::default())?;
        let contribution_id =
            state.contribution_id
                 .ok_or_else(|| ContentTypeError::Internal("pipeline produced no contribution".into()))?;
        log::info!("created contribution {contribution_id} on paper {}", command.paper_id);
        Ok(contribution_id)
    }

    fn subgraph_creator(&self) -> SubgraphCreator {
        let p = &self.ports;
        SubgraphCreator { resource_use_cases: p.resource_use_cases.clone(),
                          literal_use_cases: p.literal_use_cases.clone(),
                          predicate_use_cases: p.predicate_use_cases.clone(),
                          list_use_cases: p.list_use_cases.clone(),
                          statement_use_cases: p.statement_use_cases.clone(),
                          statement_repository: p.statement_repository.clone() }
    }

    fn author_creator(&self) -> AuthorCreator {
        let p = &self.ports;
        AuthorCreator { resource_use_cases: p.resource_use_cases.clone(),
                        literal_use_cases: p.literal_use_cases.clone(),
                        list_use_cases: p.list_use_cases.clone(),
                        statement_use_cases: p.statement_use_cases.clone() }
    }

    fn identifier_creator(&self) -> PaperIdentifierCreator {
        let p = &self.ports;
        PaperIdentifierCreator { literal_use_cases: p.literal_use_cases.clone(),
                                 statement_use_cases: p.statement_use_cases.clone() }
    }

    fn publication_info_creator(&self) -> PublicationInfoCreator {
        let p = &self.ports;
        PublicationInfoCreator { resource_repository: p.resource_repository.clone(),
                                 resource_use_cases: p.resource_use_cases.clone(),
                                 literal_use_cases: p.literal_use_cases.clone(),
                                 statement_use_cases: p.statement_use_cases.clone() }
    }
}
