//! Reglas de validación de etiquetas y datatypes.
//!
//! Una etiqueta de recurso/predicado no puede estar en blanco, no puede
//! contener saltos de línea y tiene un largo máximo. Las etiquetas de
//! literales sólo limitan el largo (el contenido es libre).
use crate::error::DomainError;

pub const MAX_LABEL_LENGTH: usize = 8164;

pub fn validate_label(label: &str) -> Result<(), DomainError> {
    if label.trim().is_empty() || label.contains('\n') || label.len() > MAX_LABEL_LENGTH {
        return Err(DomainError::InvalidLabel(label.to_string()));
    }
    Ok(())
}

pub fn validate_literal_label(label: &str) -> Result<(), DomainError> {
    if label.len() > MAX_LABEL_LENGTH {
        return Err(DomainError::InvalidLiteralLabel);
    }
    Ok(())
}

pub fn validate_literal_datatype(datatype: &str) -> Result<(), DomainError> {
    if datatype.trim().is_empty() || datatype.contains(char::is_whitespace) {
        return Err(DomainError::InvalidLiteralDatatype(datatype.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_multiline_labels_are_rejected() {
        assert!(validate_label("\n").is_err());
        assert!(validate_label("   ").is_err());
        assert!(validate_label("two\nlines").is_err());
        assert!(validate_label("MOTO").is_ok());
    }

    #[test]
    fn overlong_labels_are_rejected() {
        let long = "a".repeat(MAX_LABEL_LENGTH + 1);
        assert_eq!(validate_label(&long), Err(DomainError::InvalidLabel(long.clone())));
        assert_eq!(validate_literal_label(&long), Err(DomainError::InvalidLiteralLabel));
        assert!(validate_literal_label("0.1").is_ok());
    }

    #[test]
    fn datatype_must_be_a_single_token() {
        assert!(validate_literal_datatype("xsd:string").is_ok());
        assert!(validate_literal_datatype("").is_err());
        assert!(validate_literal_datatype("xsd: string").is_err());
    }
}
