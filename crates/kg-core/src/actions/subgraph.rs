//! Creación del subgrafo: materializa las definiciones temp validadas, los
//! recursos de los placeholders y finalmente los statements horneados.
//!
//! Corre sólo cuando toda la fase de validación ya pasó. No hay transacción:
//! si una creación falla a mitad de camino, lo ya creado queda en el almacén
//! (limitación documentada del diseño).
use indexmap::IndexMap;
use std::sync::Arc;

use kg_domain::{vocab, ContributorId, ExtractionMethod, ThingId};

use crate::actions::state::{BakedStatement, PlaceholderDefinition};
use crate::command::ThingDefinitions;
use crate::errors::ContentTypeError;
use crate::ports::{CreateListCommand, CreateLiteralCommand, CreatePredicateCommand, CreateResourceCommand,
                   ListUseCases, LiteralUseCases, PredicateUseCases, ResourceUseCases, StatementRepository,
                   StatementUseCases};
use crate::resolve::{is_placeholder, is_temp_reference, Resolved, ResolutionMap};

pub struct SubgraphCreator {
    pub resource_use_cases: Arc<dyn ResourceUseCases>,
    pub literal_use_cases: Arc<dyn LiteralUseCases>,
    pub predicate_use_cases: Arc<dyn PredicateUseCases>,
    pub list_use_cases: Arc<dyn ListUseCases>,
    pub statement_use_cases: Arc<dyn StatementUseCases>,
    pub statement_repository: Arc<dyn StatementRepository>,
}

impl SubgraphCreator {
    /// Crea things y statements; devuelve los ids de las contribuciones
    /// top-level en orden. `paper_id` recibe el enlace has-contribution.
    #[allow(clippy::too_many_arguments)]
    pub fn create_things_and_statements(&self,
                                        contributor_id: &ContributorId,
                                        extraction_method: ExtractionMethod,
                                        paper_id: &ThingId,
                                        definitions: &dyn ThingDefinitions,
                                        validated_ids: &ResolutionMap,
                                        placeholders: &IndexMap<String, PlaceholderDefinition>,
                                        baked_statements: &[BakedStatement])
                                        -> Result<Vec<ThingId>, ContentTypeError> {
        let mut created: IndexMap<String, ThingId> = IndexMap::new();

        // Sólo se crean los temp ids que la validación registró como Temp.
        let is_validated_temp =
            |temp_id: &str| matches!(validated_ids.get(temp_id), Some(Resolved::Temp(_)));

        for (temp_id, definition) in definitions.resources() {
            if !is_validated_temp(temp_id) {
                continue;
            }
            let id = self.resource_use_cases
                         .create(CreateResourceCommand { label: definition.label.clone(),
                                                         classes: definition.classes.clone(),
                                                         contributor_id: *contributor_id,
                                                         extraction_method })?;
            created.insert(temp_id.clone(), id);
        }
        for (temp_id, definition) in definitions.literals() {
            if !is_validated_temp(temp_id) {
                continue;
            }
            let id = self.literal_use_cases
                         .create(CreateLiteralCommand { label: definition.label.clone(),
                                                        datatype: definition.data_type.clone(),
                                                        contributor_id: *contributor_id })?;
            created.insert(temp_id.clone(), id);
        }
        for (temp_id, definition) in definitions.predicates() {
            if !is_validated_temp(temp_id) {
                continue;
            }
            let id = self.predicate_use_cases
                         .create(CreatePredicateCommand { label: definition.label.clone(),
                                                          contributor_id: *contributor_id })?;
            if let Some(description) = &definition.description {
                let literal = self.literal_use_cases
                                  .create(CreateLiteralCommand { label: description.clone(),
                                                                 datatype: vocab::XSD_STRING.to_string(),
                                                                 contributor_id: *contributor_id })?;
                self.statement_use_cases
                    .add(contributor_id, &id, &vocab::predicates::DESCRIPTION, &literal)?;
            }
            created.insert(temp_id.clone(), id);
        }
        // Las listas van al final: sus elementos pueden ser temp ids de los
        // mapas anteriores. Se crean vacías y luego se llenan resueltas.
        for (temp_id, definition) in definitions.lists() {
            if !is_validated_temp(temp_id) {
                continue;
            }
            let id = self.list_use_cases
                         .create(CreateListCommand { label: definition.label.clone(),
                                                     elements: Vec::new(),
                                                     contributor_id: *contributor_id })?;
            let elements = definition.elements
                                     .iter()
                                     .map(|element| lookup(&created, element))
                                     .collect::<Result<Vec<_>, _>>()?;
            self.list_use_cases.update_elements(&id, elements)?;
            created.insert(temp_id.clone(), id);
        }

        // Un recurso por placeholder; las contribuciones top-level suman la
        // clase Contribution y el enlace al paper.
        let mut contribution_ids = Vec::new();
        for (placeholder, definition) in placeholders {
            let mut classes = definition.classes.clone();
            if definition.is_contribution && !classes.contains(&vocab::classes::CONTRIBUTION) {
                classes.insert(0, vocab::classes::CONTRIBUTION.clone());
            }
            let id = self.resource_use_cases
                         .create(CreateResourceCommand { label: definition.label.clone(),
                                                         classes,
                                                         contributor_id: *contributor_id,
                                                         extraction_method })?;
            if definition.is_contribution {
                self.statement_use_cases
                    .add(contributor_id, paper_id, &vocab::predicates::HAS_CONTRIBUTION, &id)?;
                contribution_ids.push(id.clone());
            }
            created.insert(placeholder.clone(), id);
        }

        for statement in baked_statements {
            let subject = lookup(&created, &statement.subject)?;
            let predicate = lookup(&created, &statement.predicate)?;
            let object = lookup(&created, &statement.object)?;
            // Un triple cuyos tres componentes ya existían puede estar
            // repetido en el almacén; los que involucran ids recién creados
            // son nuevos por construcción.
            let all_preexisting = [&statement.subject, &statement.predicate, &statement.object]
                .iter()
                .all(|r| !is_temp_reference(r) && !is_placeholder(r));
            if all_preexisting && self.statement_repository.statement_exists(&subject, &predicate, &object) {
                continue;
            }
            self.statement_use_cases.add(contributor_id, &subject, &predicate, &object)?;
        }

        Ok(contribution_ids)
    }
}

/// Sustituye temp ids y placeholders por los ids recién creados; cualquier
/// otra referencia ya es un id real del almacén.
fn lookup(created: &IndexMap<String, ThingId>, reference: &str) -> Result<ThingId, ContentTypeError> {
    if is_temp_reference(reference) || is_placeholder(reference) {
        created.get(reference)
               .cloned()
               .ok_or_else(|| ContentTypeError::ThingNotDefined(reference.to_string()))
    } else {
        Ok(ThingId::from(reference))
    }
}
