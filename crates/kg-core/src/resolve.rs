//! Resolución de referencias: cada referencia del documento termina en
//! exactamente uno de dos estados, "sigue siendo temp" o "resuelta a un
//! Thing existente". Modelado como tipo suma con match exhaustivo, nunca
//! como campo anulable.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use kg_domain::{vocab, DomainError, Thing, ThingId};

use crate::errors::ContentTypeError;
use crate::ports::ThingRepository;

/// Resultado de resolver una referencia dentro de un request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Resolved {
    /// Temp id declarado en el comando; el thing aún no existe.
    Temp(String),
    /// Identificador ya conocido por el almacén.
    Existing(Thing),
}

impl Resolved {
    pub fn is_temp(&self) -> bool {
        matches!(self, Resolved::Temp(_))
    }
}

/// Mapa de resolución acumulado durante la fase de validación.
pub type ResolutionMap = IndexMap<String, Resolved>;

/// Un temp id empieza con `#` y sigue con al menos un carácter sin espacios.
pub fn is_temp_reference(reference: &str) -> bool {
    reference.starts_with('#')
}

pub fn is_valid_temp_id(reference: &str) -> bool {
    reference.len() > 1 && is_temp_reference(reference) && !reference[1..].contains(char::is_whitespace)
}

/// Los placeholders sintéticos (`^0`, `^1`, ...) los inventa el horneado;
/// nunca colisionan con temp ids (`#`) ni con ids reales del almacén.
pub fn is_placeholder(reference: &str) -> bool {
    reference.starts_with('^')
}

/// Resuelve una referencia usada como clase: debe existir, ser una clase y
/// no estar reservada. Registra el resultado en el mapa de resolución.
pub fn validate_class_reference(repository: &dyn ThingRepository,
                                validated_ids: &mut ResolutionMap,
                                class: &ThingId)
                                -> Result<(), ContentTypeError> {
    if vocab::RESERVED_CLASS_IDS.contains(class) {
        return Err(DomainError::ReservedClass(class.clone()).into());
    }
    match validated_ids.get(class.value()) {
        Some(Resolved::Existing(thing)) if thing.is_class() => Ok(()),
        Some(_) => Err(ContentTypeError::ThingIsNotAClass(class.clone())),
        None => {
            let thing = repository.find_by_id(class)
                                  .ok_or_else(|| ContentTypeError::ThingNotFound(class.clone()))?;
            if !thing.is_class() {
                return Err(ContentTypeError::ThingIsNotAClass(class.clone()));
            }
            validated_ids.insert(class.value().to_string(), Resolved::Existing(thing));
            Ok(())
        }
    }
}

/// Resuelve una referencia en posición de objeto o elemento de lista.
/// Devuelve el estado registrado (clonado) para inspección del llamador.
pub fn resolve_thing_reference(repository: &dyn ThingRepository,
                               temp_ids: &indexmap::IndexSet<String>,
                               validated_ids: &mut ResolutionMap,
                               reference: &str)
                               -> Result<Resolved, ContentTypeError> {
    if let Some(found) = validated_ids.get(reference) {
        return Ok(found.clone());
    }
    let resolved = if is_temp_reference(reference) {
        if !temp_ids.contains(reference) {
            return Err(ContentTypeError::ThingNotDefined(reference.to_string()));
        }
        Resolved::Temp(reference.to_string())
    } else {
        let id = ThingId::from(reference);
        let thing = repository.find_by_id(&id).ok_or(ContentTypeError::ThingNotFound(id))?;
        Resolved::Existing(thing)
    };
    validated_ids.insert(reference.to_string(), resolved.clone());
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_id_syntax() {
        assert!(is_valid_temp_id("#temp1"));
        assert!(!is_valid_temp_id("#"));
        assert!(!is_valid_temp_id("R123"));
        assert!(!is_valid_temp_id("#temp 1"));
    }

    #[test]
    fn placeholders_are_disjoint_from_temp_ids() {
        assert!(is_placeholder("^0"));
        assert!(!is_placeholder("#temp1"));
        assert!(!is_temp_reference("^0"));
    }
}
