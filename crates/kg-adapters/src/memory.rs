//! Almacén de grafo en memoria. Implementa todos los puertos del núcleo
//! detrás de un `Mutex`; los ids se asignan secuencialmente por prefijo
//! (`R1`, `L1`, `P1`, ...) saltando claves ya ocupadas por el seed.
use indexmap::IndexMap;
use std::sync::{Arc, Mutex, MutexGuard};

use kg_core::errors::ContentTypeError;
use kg_core::ports::{CreateListCommand, CreateLiteralCommand, CreatePredicateCommand, CreateResourceCommand,
                     ListUseCases, LiteralUseCases, ObservatoryRepository, OrganizationRepository,
                     PredicateUseCases, ResourceRepository, ResourceUseCases, StatementRepository,
                     StatementUseCases, ThingRepository};
use kg_domain::{vocab, Class, ContributorId, Literal, ObservatoryId, OrganizationId, Predicate, Resource,
                Thing, ThingId};

#[derive(Default)]
struct Inner {
    things: IndexMap<ThingId, Thing>,
    statements: Vec<(ContributorId, ThingId, ThingId, ThingId)>,
    list_elements: IndexMap<ThingId, Vec<ThingId>>,
    observatories: Vec<ObservatoryId>,
    organizations: Vec<OrganizationId>,
    creation_calls: usize,
    next_id: usize,
}

impl Inner {
    fn allocate_id(&mut self, prefix: &str) -> ThingId {
        loop {
            self.next_id += 1;
            let candidate = ThingId::from(format!("{prefix}{}", self.next_id));
            if !self.things.contains_key(&candidate) {
                return candidate;
            }
        }
    }
}

#[derive(Default)]
pub struct InMemoryGraph {
    inner: Mutex<Inner>,
}

impl InMemoryGraph {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // el lock sólo se envenena si un test hace panic con el guard vivo
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // -- seed ---------------------------------------------------------------

    pub fn insert_class(&self, id: &str, label: &str) {
        let class = Class { id: ThingId::from(id),
                            label: label.to_string(),
                            uri: None };
        self.lock().things.insert(class.id.clone(), Thing::Class(class));
    }

    pub fn insert_predicate(&self, id: &str, label: &str) {
        let predicate = Predicate { id: ThingId::from(id),
                                    label: label.to_string(),
                                    description: None };
        self.lock().things.insert(predicate.id.clone(), Thing::Predicate(predicate));
    }

    pub fn insert_resource(&self, id: &str, label: &str, classes: &[&ThingId]) {
        let resource = Resource { id: ThingId::from(id),
                                  label: label.to_string(),
                                  classes: classes.iter().map(|c| (*c).clone()).collect(),
                                  created_by: ContributorId::new(),
                                  created_at: chrono::Utc::now(),
                                  extraction_method: Default::default() };
        self.lock().things.insert(resource.id.clone(), Thing::Resource(resource));
    }

    pub fn insert_literal(&self, id: &str, label: &str) {
        let literal = Literal { id: ThingId::from(id),
                                label: label.to_string(),
                                datatype: vocab::XSD_STRING.to_string() };
        self.lock().things.insert(literal.id.clone(), Thing::Literal(literal));
    }

    pub fn register_observatory(&self, id: ObservatoryId) {
        self.lock().observatories.push(id);
    }

    pub fn register_organization(&self, id: OrganizationId) {
        self.lock().organizations.push(id);
    }

    // -- inspección ---------------------------------------------------------

    /// Cantidad de llamadas de creación recibidas, creaciones de things y
    /// statements incluidas. Los tests la usan para verificar que una
    /// validación fallida no tocó el almacén.
    pub fn creation_call_count(&self) -> usize {
        self.lock().creation_calls
    }

    pub fn thing(&self, id: &ThingId) -> Option<Thing> {
        self.lock().things.get(id).cloned()
    }

    pub fn statements(&self) -> Vec<(ThingId, ThingId, ThingId)> {
        self.lock()
            .statements
            .iter()
            .map(|(_, s, p, o)| (s.clone(), p.clone(), o.clone()))
            .collect()
    }

    pub fn statements_with_subject(&self, subject: &ThingId) -> Vec<(ThingId, ThingId, ThingId)> {
        self.statements().into_iter().filter(|(s, _, _)| s == subject).collect()
    }

    pub fn list_elements(&self, id: &ThingId) -> Vec<ThingId> {
        self.lock().list_elements.get(id).cloned().unwrap_or_default()
    }
}

impl ThingRepository for InMemoryGraph {
    fn find_by_id(&self, id: &ThingId) -> Option<Thing> {
        self.lock().things.get(id).cloned()
    }
}

impl ResourceRepository for InMemoryGraph {
    fn find_by_id(&self, id: &ThingId) -> Option<Resource> {
        match self.lock().things.get(id) {
            Some(Thing::Resource(resource)) => Some(resource.clone()),
            _ => None,
        }
    }

    fn find_all_by_class_and_label(&self, class: &ThingId, label: &str) -> Vec<Resource> {
        self.lock()
            .things
            .values()
            .filter_map(|thing| match thing {
                Thing::Resource(r) if r.is_instance_of(class) && r.label == label => Some(r.clone()),
                _ => None,
            })
            .collect()
    }
}

impl StatementRepository for InMemoryGraph {
    fn statement_exists(&self, subject: &ThingId, predicate: &ThingId, object: &ThingId) -> bool {
        self.lock()
            .statements
            .iter()
            .any(|(_, s, p, o)| s == subject && p == predicate && o == object)
    }

    fn count_by_predicate_and_label_and_subject_class(&self,
                                                      predicate: &ThingId,
                                                      literal_label: &str,
                                                      subject_class: &ThingId)
                                                      -> usize {
        let inner = self.lock();
        inner.statements
             .iter()
             .filter(|(_, s, p, o)| {
                 p == predicate
                 && matches!(inner.things.get(o), Some(Thing::Literal(l)) if l.label == literal_label)
                 && matches!(inner.things.get(s), Some(Thing::Resource(r)) if r.is_instance_of(subject_class))
             })
             .count()
    }
}

impl ObservatoryRepository for InMemoryGraph {
    fn exists(&self, id: &ObservatoryId) -> bool {
        self.lock().observatories.contains(id)
    }
}

impl OrganizationRepository for InMemoryGraph {
    fn exists(&self, id: &OrganizationId) -> bool {
        self.lock().organizations.contains(id)
    }
}

impl ResourceUseCases for InMemoryGraph {
    fn create(&self, command: CreateResourceCommand) -> Result<ThingId, ContentTypeError> {
        let mut inner = self.lock();
        inner.creation_calls += 1;
        let id = inner.allocate_id("R");
        log::debug!("create resource {id} {:?}", command.label);
        let resource = Resource { id: id.clone(),
                                  label: command.label,
                                  classes: command.classes,
                                  created_by: command.contributor_id,
                                  created_at: chrono::Utc::now(),
                                  extraction_method: command.extraction_method };
        inner.things.insert(id.clone(), Thing::Resource(resource));
        Ok(id)
    }
}

impl LiteralUseCases for InMemoryGraph {
    fn create(&self, command: CreateLiteralCommand) -> Result<ThingId, ContentTypeError> {
        let mut inner = self.lock();
        inner.creation_calls += 1;
        let id = inner.allocate_id("L");
        log::debug!("create literal {id} {:?}", command.label);
        let literal = Literal { id: id.clone(),
                                label: command.label,
                                datatype: command.datatype };
        inner.things.insert(id.clone(), Thing::Literal(literal));
        Ok(id)
    }
}

impl PredicateUseCases for InMemoryGraph {
    fn create(&self, command: CreatePredicateCommand) -> Result<ThingId, ContentTypeError> {
        let mut inner = self.lock();
        inner.creation_calls += 1;
        let id = inner.allocate_id("P");
        log::debug!("create predicate {id} {:?}", command.label);
        let predicate = Predicate { id: id.clone(),
                                    label: command.label,
                                    description: None };
        inner.things.insert(id.clone(), Thing::Predicate(predicate));
        Ok(id)
    }
}

impl ListUseCases for InMemoryGraph {
    fn create(&self, command: CreateListCommand) -> Result<ThingId, ContentTypeError> {
        let mut inner = self.lock();
        inner.creation_calls += 1;
        let id = inner.allocate_id("R");
        log::debug!("create list {id} {:?}", command.label);
        let resource = Resource { id: id.clone(),
                                  label: command.label,
                                  classes: vec![vocab::classes::LIST.clone()],
                                  created_by: command.contributor_id,
                                  created_at: chrono::Utc::now(),
                                  extraction_method: Default::default() };
        inner.things.insert(id.clone(), Thing::Resource(resource));
        inner.list_elements.insert(id.clone(), command.elements);
        Ok(id)
    }

    fn update_elements(&self, id: &ThingId, elements: Vec<ThingId>) -> Result<(), ContentTypeError> {
        let mut inner = self.lock();
        inner.creation_calls += 1;
        if !inner.list_elements.contains_key(id) {
            return Err(ContentTypeError::ThingNotFound(id.clone()));
        }
        inner.list_elements.insert(id.clone(), elements);
        Ok(())
    }
}

impl StatementUseCases for InMemoryGraph {
    fn add(&self,
           contributor_id: &ContributorId,
           subject: &ThingId,
           predicate: &ThingId,
           object: &ThingId)
           -> Result<(), ContentTypeError> {
        let mut inner = self.lock();
        inner.creation_calls += 1;
        log::debug!("add statement ({subject}, {predicate}, {object})");
        inner.statements
             .push((*contributor_id, subject.clone(), predicate.clone(), object.clone()));
        Ok(())
    }
}
