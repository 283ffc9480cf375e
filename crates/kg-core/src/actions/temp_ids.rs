//! Validación de temp ids: junta las claves de los cuatro mapas de
//! definiciones y rechaza duplicados o sintaxis inválida. Un temp id es
//! global al documento, no por tipo de definición.
use indexmap::IndexSet;

use crate::command::ThingDefinitions;
use crate::errors::ContentTypeError;
use crate::resolve::is_valid_temp_id;

#[derive(Debug, Default)]
pub struct TempIdValidator;

impl TempIdValidator {
    pub fn validate(&self, definitions: &dyn ThingDefinitions) -> Result<IndexSet<String>, ContentTypeError> {
        let keys = definitions.resources()
                              .keys()
                              .chain(definitions.literals().keys())
                              .chain(definitions.predicates().keys())
                              .chain(definitions.lists().keys());
        let mut temp_ids = IndexSet::new();
        for key in keys {
            if !is_valid_temp_id(key) {
                return Err(ContentTypeError::InvalidTempId(key.clone()));
            }
            if !temp_ids.insert(key.clone()) {
                return Err(ContentTypeError::DuplicateTempId(key.clone()));
            }
        }
        Ok(temp_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{LiteralDefinition, PaperContentsDefinition, ResourceDefinition};

    #[test]
    fn collects_temp_ids_across_all_definition_maps() {
        let mut contents = PaperContentsDefinition::default();
        contents.resources.insert("#temp1".into(), ResourceDefinition::default());
        contents.literals.insert("#temp2".into(), LiteralDefinition::new("0.1"));

        let temp_ids = TempIdValidator.validate(&contents).unwrap();
        assert_eq!(temp_ids.len(), 2);
        assert!(temp_ids.contains("#temp1"));
        assert!(temp_ids.contains("#temp2"));
    }

    #[test]
    fn empty_contents_yield_an_empty_set() {
        let contents = PaperContentsDefinition::default();
        assert!(TempIdValidator.validate(&contents).unwrap().is_empty());
    }

    #[test]
    fn duplicate_temp_id_across_kinds_is_rejected() {
        let mut contents = PaperContentsDefinition::default();
        contents.resources.insert("#temp1".into(), ResourceDefinition::default());
        contents.literals.insert("#temp1".into(), LiteralDefinition::new("0.1"));

        assert_eq!(TempIdValidator.validate(&contents),
                   Err(ContentTypeError::DuplicateTempId("#temp1".into())));
    }

    #[test]
    fn malformed_temp_id_is_rejected() {
        let mut contents = PaperContentsDefinition::default();
        contents.resources.insert("temp1".into(), ResourceDefinition::default());

        assert_eq!(TempIdValidator.validate(&contents),
                   Err(ContentTypeError::InvalidTempId("temp1".into())));
    }
}
