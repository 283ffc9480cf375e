//! Validación y horneado de contribuciones: recorre los statements anidados
//! en pre-orden y los aplana a triples (sujeto, predicado, objeto).
//!
//! Cada contribución top-level y cada objeto inline anónimo reciben un
//! placeholder sintético `^n` como sujeto; un objeto inline con id propio
//! reusa ese id como sujeto de sus statements anidados.
use indexmap::{IndexMap, IndexSet};
use std::sync::Arc;

use kg_domain::{validate_label, ThingId};

use crate::actions::state::{BakedStatement, CreateContributionState, PlaceholderDefinition};
use crate::actions::subgraph::SubgraphCreator;
use crate::actions::thing_definitions::ThingDefinitionValidator;
use crate::actions::temp_ids::TempIdValidator;
use crate::actions::Action;
use crate::command::{ContributionDefinition, CreateContributionCommand, StatementsDefinition,
                     ThingDefinitions};
use crate::errors::ContentTypeError;
use crate::ports::{ResourceRepository, ThingRepository};
use crate::resolve::{is_temp_reference, resolve_thing_reference, validate_class_reference, Resolved,
                     ResolutionMap};

/// Salida del horneado: mapa de resolución extendido, triples en orden de
/// documento y definiciones de los placeholders asignados.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContributionValidation {
    pub validated_ids: ResolutionMap,
    pub baked_statements: Vec<BakedStatement>,
    pub placeholders: IndexMap<String, PlaceholderDefinition>,
}

pub struct ContributionValidator {
    thing_repository: Arc<dyn ThingRepository>,
}

struct Bake {
    validated_ids: ResolutionMap,
    baked_statements: Vec<BakedStatement>,
    placeholders: IndexMap<String, PlaceholderDefinition>,
    next_placeholder: usize,
}

impl Bake {
    /// Los triples exactamente repetidos se suprimen; el orden del primero
    /// se conserva.
    fn push(&mut self, subject: &str, predicate: &str, object: &str) {
        let statement = BakedStatement::new(subject, predicate, object);
        if !self.baked_statements.contains(&statement) {
            self.baked_statements.push(statement);
        }
    }

    fn allocate(&mut self, label: String, classes: Vec<ThingId>, is_contribution: bool) -> String {
        let placeholder = format!("^{}", self.next_placeholder);
        self.next_placeholder += 1;
        self.placeholders.insert(placeholder.clone(),
                                 PlaceholderDefinition { label,
                                                         classes,
                                                         is_contribution });
        placeholder
    }
}

impl ContributionValidator {
    pub fn new(thing_repository: Arc<dyn ThingRepository>) -> Self {
        Self { thing_repository }
    }

    pub fn validate(&self,
                    temp_ids: &IndexSet<String>,
                    validated_ids: &ResolutionMap,
                    definitions: &dyn ThingDefinitions,
                    contributions: &[ContributionDefinition])
                    -> Result<ContributionValidation, ContentTypeError> {
        let mut bake = Bake { validated_ids: validated_ids.clone(),
                              baked_statements: Vec::new(),
                              placeholders: IndexMap::new(),
                              next_placeholder: 0 };

        for (index, contribution) in contributions.iter().enumerate() {
            if contribution.statements.is_empty() {
                return Err(ContentTypeError::EmptyContribution(index));
            }
            validate_label(&contribution.label)?;
            for class in &contribution.classes {
                validate_class_reference(self.thing_repository.as_ref(), &mut bake.validated_ids, class)?;
            }
            let subject = bake.allocate(contribution.label.clone(), contribution.classes.clone(), true);
            self.bake_statements(&subject, &contribution.statements, temp_ids, definitions, &mut bake)?;
        }

        Ok(ContributionValidation { validated_ids: bake.validated_ids,
                                    baked_statements: bake.baked_statements,
                                    placeholders: bake.placeholders })
    }

    fn bake_statements(&self,
                       subject: &str,
                       statements: &StatementsDefinition,
                       temp_ids: &IndexSet<String>,
                       definitions: &dyn ThingDefinitions,
                       bake: &mut Bake)
                       -> Result<(), ContentTypeError> {
        for (predicate, objects) in statements {
            self.validate_predicate_reference(predicate, temp_ids, definitions, &mut bake.validated_ids)?;
            for object in objects {
                match &object.id {
                    Some(reference) => {
                        let resolved = resolve_thing_reference(self.thing_repository.as_ref(),
                                                               temp_ids,
                                                               &mut bake.validated_ids,
                                                               reference)?;
                        bake.push(subject, predicate, reference);
                        if object.statements.is_empty() {
                            continue;
                        }
                        // Un literal no puede ser sujeto de statements.
                        let is_literal = match &resolved {
                            Resolved::Temp(temp) => definitions.literals().contains_key(temp),
                            Resolved::Existing(thing) => thing.is_literal(),
                        };
                        if is_literal {
                            return Err(ContentTypeError::InvalidStatementSubject(reference.clone()));
                        }
                        self.bake_statements(reference, &object.statements, temp_ids, definitions, bake)?;
                    }
                    None => {
                        let label = object.label.clone().unwrap_or_default();
                        validate_label(&label)?;
                        for class in &object.classes {
                            validate_class_reference(self.thing_repository.as_ref(),
                                                     &mut bake.validated_ids,
                                                     class)?;
                        }
                        let child = bake.allocate(label, object.classes.clone(), false);
                        bake.push(subject, predicate, &child);
                        self.bake_statements(&child, &object.statements, temp_ids, definitions, bake)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Una referencia en posición de predicado debe ser un temp id declarado
    /// como predicado, o un predicado existente del almacén.
    fn validate_predicate_reference(&self,
                                    reference: &str,
                                    temp_ids: &IndexSet<String>,
                                    definitions: &dyn ThingDefinitions,
                                    validated_ids: &mut ResolutionMap)
                                    -> Result<(), ContentTypeError> {
        if is_temp_reference(reference) {
            if !temp_ids.contains(reference) && !validated_ids.contains_key(reference) {
                return Err(ContentTypeError::ThingNotDefined(reference.to_string()));
            }
            if !definitions.predicates().contains_key(reference) {
                return Err(ContentTypeError::ThingIsNotAPredicate(ThingId::from(reference)));
            }
            validated_ids.entry(reference.to_string())
                         .or_insert_with(|| Resolved::Temp(reference.to_string()));
            return Ok(());
        }
        match validated_ids.get(reference) {
            Some(Resolved::Existing(thing)) if thing.is_predicate() => Ok(()),
            Some(_) => Err(ContentTypeError::ThingIsNotAPredicate(ThingId::from(reference))),
            None => {
                let id = ThingId::from(reference);
                let thing = self.thing_repository
                                .find_by_id(&id)
                                .ok_or_else(|| ContentTypeError::ThingNotFound(id.clone()))?;
                if !thing.is_predicate() {
                    return Err(ContentTypeError::ThingIsNotAPredicate(id));
                }
                validated_ids.insert(reference.to_string(), Resolved::Existing(thing));
                Ok(())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline: agregar una contribución a un paper existente.
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct ContributionTempIdValidator {
    inner: TempIdValidator,
}

impl Action<CreateContributionCommand, CreateContributionState> for ContributionTempIdValidator {
    fn execute(&self,
               command: &CreateContributionCommand,
               state: CreateContributionState)
               -> Result<CreateContributionState, ContentTypeError> {
        let temp_ids = self.inner.validate(&command.contents)?;
        Ok(state.with_temp_ids(temp_ids))
    }
}

/// El paper destino debe existir y tener la clase Paper.
pub struct ContributionPaperValidator {
    resource_repository: Arc<dyn ResourceRepository>,
}

impl ContributionPaperValidator {
    pub fn new(resource_repository: Arc<dyn ResourceRepository>) -> Self {
        Self { resource_repository }
    }
}

impl Action<CreateContributionCommand, CreateContributionState> for ContributionPaperValidator {
    fn execute(&self,
               command: &CreateContributionCommand,
               state: CreateContributionState)
               -> Result<CreateContributionState, ContentTypeError> {
        let paper = self.resource_repository
                        .find_by_id(&command.paper_id)
                        .ok_or_else(|| ContentTypeError::PaperNotFound(command.paper_id.clone()))?;
        if !paper.is_instance_of(&kg_domain::vocab::classes::PAPER) {
            return Err(ContentTypeError::PaperNotFound(command.paper_id.clone()));
        }
        Ok(state)
    }
}

pub struct ContributionThingDefinitionValidator {
    inner: ThingDefinitionValidator,
}

impl ContributionThingDefinitionValidator {
    pub fn new(thing_repository: Arc<dyn ThingRepository>) -> Self {
        Self { inner: ThingDefinitionValidator::new(thing_repository) }
    }
}

impl Action<CreateContributionCommand, CreateContributionState> for ContributionThingDefinitionValidator {
    fn execute(&self,
               command: &CreateContributionCommand,
               state: CreateContributionState)
               -> Result<CreateContributionState, ContentTypeError> {
        let mut validated_ids = state.validated_ids.clone();
        self.inner.validate(&command.contents, &state.temp_ids, &mut validated_ids)?;
        Ok(state.with_validated_ids(validated_ids))
    }
}

pub struct ContributionContentsValidator {
    inner: ContributionValidator,
}

impl ContributionContentsValidator {
    pub fn new(thing_repository: Arc<dyn ThingRepository>) -> Self {
        Self { inner: ContributionValidator::new(thing_repository) }
    }
}

impl Action<CreateContributionCommand, CreateContributionState> for ContributionContentsValidator {
    fn execute(&self,
               command: &CreateContributionCommand,
               state: CreateContributionState)
               -> Result<CreateContributionState, ContentTypeError> {
        let contributions = std::slice::from_ref(&command.contents.contribution);
        let validation =
            self.inner.validate(&state.temp_ids, &state.validated_ids, &command.contents, contributions)?;
        Ok(state.with_baked_contributions(validation.validated_ids,
                                          validation.baked_statements,
                                          validation.placeholders))
    }
}

pub struct ContributionContentsCreator {
    inner: SubgraphCreator,
}

impl ContributionContentsCreator {
    pub fn new(inner: SubgraphCreator) -> Self {
        Self { inner }
    }
}

impl Action<CreateContributionCommand, CreateContributionState> for ContributionContentsCreator {
    fn execute(&self,
               command: &CreateContributionCommand,
               state: CreateContributionState)
               -> Result<CreateContributionState, ContentTypeError> {
        let mut contribution_ids =
            self.inner.create_things_and_statements(&command.contributor_id,
                                                    command.extraction_method,
                                                    &command.paper_id,
                                                    &command.contents,
                                                    &state.validated_ids,
                                                    &state.placeholders,
                                                    &state.baked_statements)?;
        let contribution_id = contribution_ids.drain(..)
                                              .next()
                                              .ok_or_else(|| ContentTypeError::Internal(
                                                  "contribution placeholder produced no resource".into()))?;
        Ok(state.with_contribution_id(contribution_id))
    }
}
