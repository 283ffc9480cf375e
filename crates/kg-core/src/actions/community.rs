//! Validación de observatorios y organizaciones asociados al paper. El
//! directorio de comunidades vive en otro servicio; aquí sólo se consulta
//! existencia a través de los puertos.
use std::sync::Arc;

use kg_domain::{ObservatoryId, OrganizationId};

use crate::errors::ContentTypeError;
use crate::ports::{ObservatoryRepository, OrganizationRepository};

pub struct ObservatoryValidator {
    observatory_repository: Arc<dyn ObservatoryRepository>,
}

impl ObservatoryValidator {
    pub fn new(observatory_repository: Arc<dyn ObservatoryRepository>) -> Self {
        Self { observatory_repository }
    }

    pub fn validate(&self, observatories: &[ObservatoryId]) -> Result<(), ContentTypeError> {
        for id in observatories {
            if !self.observatory_repository.exists(id) {
                return Err(ContentTypeError::ObservatoryNotFound(*id));
            }
        }
        Ok(())
    }
}

pub struct OrganizationValidator {
    organization_repository: Arc<dyn OrganizationRepository>,
}

impl OrganizationValidator {
    pub fn new(organization_repository: Arc<dyn OrganizationRepository>) -> Self {
        Self { organization_repository }
    }

    pub fn validate(&self, organizations: &[OrganizationId]) -> Result<(), ContentTypeError> {
        for id in organizations {
            if !self.organization_repository.exists(id) {
                return Err(ContentTypeError::OrganizationNotFound(*id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyDirectory;

    impl ObservatoryRepository for EmptyDirectory {
        fn exists(&self, _id: &ObservatoryId) -> bool {
            false
        }
    }

    impl OrganizationRepository for EmptyDirectory {
        fn exists(&self, _id: &OrganizationId) -> bool {
            false
        }
    }

    #[test]
    fn unknown_observatory_is_rejected() {
        let id = ObservatoryId::new();
        let validator = ObservatoryValidator::new(Arc::new(EmptyDirectory));
        assert_eq!(validator.validate(&[id]), Err(ContentTypeError::ObservatoryNotFound(id)));
    }

    #[test]
    fn unknown_organization_is_rejected() {
        let id = OrganizationId::new();
        let validator = OrganizationValidator::new(Arc::new(EmptyDirectory));
        assert_eq!(validator.validate(&[id]), Err(ContentTypeError::OrganizationNotFound(id)));
    }

    #[test]
    fn empty_lists_always_pass() {
        assert_eq!(ObservatoryValidator::new(Arc::new(EmptyDirectory)).validate(&[]), Ok(()));
        assert_eq!(OrganizationValidator::new(Arc::new(EmptyDirectory)).validate(&[]), Ok(()));
    }
}
