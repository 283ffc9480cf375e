//! Validación de las definiciones de things nuevos (recursos, literales,
//! predicados, listas) y primer poblado del mapa de resolución.
//!
//! Sólo las referencias efectivamente usadas (clases de recursos, elementos
//! de listas) entran al mapa; declarar un temp id no lo resuelve todavía.
use indexmap::IndexSet;
use std::sync::Arc;

use kg_domain::{validate_label, validate_literal_datatype, validate_literal_label};

use crate::command::ThingDefinitions;
use crate::errors::ContentTypeError;
use crate::ports::ThingRepository;
use crate::resolve::{resolve_thing_reference, validate_class_reference, ResolutionMap};

pub struct ThingDefinitionValidator {
    thing_repository: Arc<dyn ThingRepository>,
}

impl ThingDefinitionValidator {
    pub fn new(thing_repository: Arc<dyn ThingRepository>) -> Self {
        Self { thing_repository }
    }

    pub fn validate(&self,
                    definitions: &dyn ThingDefinitions,
                    temp_ids: &IndexSet<String>,
                    validated_ids: &mut ResolutionMap)
                    -> Result<(), ContentTypeError> {
        for definition in definitions.resources().values() {
            validate_label(&definition.label)?;
            for class in &definition.classes {
                validate_class_reference(self.thing_repository.as_ref(), validated_ids, class)?;
            }
        }
        for definition in definitions.literals().values() {
            validate_literal_label(&definition.label)?;
            validate_literal_datatype(&definition.data_type)?;
        }
        for definition in definitions.predicates().values() {
            validate_label(&definition.label)?;
            if let Some(description) = &definition.description {
                validate_literal_label(description)?;
            }
        }
        for definition in definitions.lists().values() {
            validate_label(&definition.label)?;
            for element in &definition.elements {
                resolve_thing_reference(self.thing_repository.as_ref(), temp_ids, validated_ids, element)?;
            }
        }
        Ok(())
    }
}
