//! Fixtures y fakes compartidos por los tests unitarios del crate.
use indexmap::IndexMap;
use std::cell::RefCell;

use kg_domain::{Class, ContributorId, ExtractionMethod, Literal, Predicate, Resource, Thing, ThingId};

use crate::errors::ContentTypeError;
use crate::ports::{CreateListCommand, CreateLiteralCommand, CreatePredicateCommand, CreateResourceCommand,
                   ListUseCases, LiteralUseCases, PredicateUseCases, ResourceRepository, ResourceUseCases,
                   StatementRepository, StatementUseCases, ThingRepository};

pub fn resource(id: &str) -> Thing {
    resource_with_classes(id, &[])
}

pub fn resource_with_classes(id: &str, classes: &[&ThingId]) -> Thing {
    Thing::Resource(Resource { id: ThingId::from(id),
                               label: format!("label of {id}"),
                               classes: classes.iter().map(|c| (*c).clone()).collect(),
                               created_by: ContributorId::new(),
                               created_at: chrono::Utc::now(),
                               extraction_method: ExtractionMethod::Unknown })
}

pub fn class(id: &str) -> Thing {
    Thing::Class(Class { id: ThingId::from(id),
                         label: format!("class {id}"),
                         uri: None })
}

pub fn predicate(id: &str) -> Thing {
    Thing::Predicate(Predicate { id: ThingId::from(id),
                                 label: format!("predicate {id}"),
                                 description: None })
}

pub fn literal(id: &str) -> Thing {
    Thing::Literal(Literal { id: ThingId::from(id),
                             label: format!("literal {id}"),
                             datatype: kg_domain::vocab::XSD_STRING.to_string() })
}

/// Qué creó el fake, en orden de llamada.
#[derive(Debug, Clone, PartialEq)]
pub enum CreatedEntry {
    Resource(CreateResourceCommand, ThingId),
    Literal(CreateLiteralCommand, ThingId),
    Predicate(CreatePredicateCommand, ThingId),
    List(CreateListCommand, ThingId),
    ListUpdate(ThingId, Vec<ThingId>),
    Statement(ThingId, ThingId, ThingId),
}

/// Grafo falso: lookups sobre un mapa fijo, creaciones registradas con ids
/// secuenciales predecibles (`R900`, `L900`, `P900`, ...).
#[derive(Default)]
pub struct FakeGraph {
    pub things: IndexMap<ThingId, Thing>,
    pub existing_statements: Vec<(ThingId, ThingId, ThingId)>,
    pub created: RefCell<Vec<CreatedEntry>>,
    next_id: RefCell<usize>,
}

impl FakeGraph {
    pub fn with_things(things: Vec<Thing>) -> Self {
        Self { things: things.into_iter().map(|t| (t.id().clone(), t)).collect(),
               ..Default::default() }
    }

    fn next(&self, prefix: &str) -> ThingId {
        let mut n = self.next_id.borrow_mut();
        *n += 1;
        ThingId::from(format!("{prefix}{}", 899 + *n))
    }

    pub fn created_statements(&self) -> Vec<(ThingId, ThingId, ThingId)> {
        self.created
            .borrow()
            .iter()
            .filter_map(|e| match e {
                CreatedEntry::Statement(s, p, o) => Some((s.clone(), p.clone(), o.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn creation_calls(&self) -> usize {
        self.created.borrow().len()
    }
}

impl ThingRepository for FakeGraph {
    fn find_by_id(&self, id: &ThingId) -> Option<Thing> {
        self.things.get(id).cloned()
    }
}

impl ResourceRepository for FakeGraph {
    fn find_by_id(&self, id: &ThingId) -> Option<Resource> {
        match self.things.get(id) {
            Some(Thing::Resource(r)) => Some(r.clone()),
            _ => None,
        }
    }

    fn find_all_by_class_and_label(&self, class: &ThingId, label: &str) -> Vec<Resource> {
        self.things
            .values()
            .filter_map(|t| match t {
                Thing::Resource(r) if r.is_instance_of(class) && r.label == label => Some(r.clone()),
                _ => None,
            })
            .collect()
    }
}

impl StatementRepository for FakeGraph {
    fn statement_exists(&self, subject: &ThingId, predicate: &ThingId, object: &ThingId) -> bool {
        self.existing_statements
            .iter()
            .any(|(s, p, o)| s == subject && p == predicate && o == object)
    }

    fn count_by_predicate_and_label_and_subject_class(&self,
                                                      predicate: &ThingId,
                                                      literal_label: &str,
                                                      subject_class: &ThingId)
                                                      -> usize {
        self.existing_statements
            .iter()
            .filter(|(s, p, o)| {
                p == predicate
                && matches!(self.things.get(o), Some(Thing::Literal(l)) if l.label == literal_label)
                && matches!(self.things.get(s), Some(Thing::Resource(r)) if r.is_instance_of(subject_class))
            })
            .count()
    }
}

impl ResourceUseCases for FakeGraph {
    fn create(&self, command: CreateResourceCommand) -> Result<ThingId, ContentTypeError> {
        let id = self.next("R");
        self.created.borrow_mut().push(CreatedEntry::Resource(command, id.clone()));
        Ok(id)
    }
}

impl LiteralUseCases for FakeGraph {
    fn create(&self, command: CreateLiteralCommand) -> Result<ThingId, ContentTypeError> {
        let id = self.next("L");
        self.created.borrow_mut().push(CreatedEntry::Literal(command, id.clone()));
        Ok(id)
    }
}

impl PredicateUseCases for FakeGraph {
    fn create(&self, command: CreatePredicateCommand) -> Result<ThingId, ContentTypeError> {
        let id = self.next("P");
        self.created.borrow_mut().push(CreatedEntry::Predicate(command, id.clone()));
        Ok(id)
    }
}

impl ListUseCases for FakeGraph {
    fn create(&self, command: CreateListCommand) -> Result<ThingId, ContentTypeError> {
        let id = self.next("R");
        self.created.borrow_mut().push(CreatedEntry::List(command, id.clone()));
        Ok(id)
    }

    fn update_elements(&self, id: &ThingId, elements: Vec<ThingId>) -> Result<(), ContentTypeError> {
        self.created.borrow_mut().push(CreatedEntry::ListUpdate(id.clone(), elements));
        Ok(())
    }
}

impl StatementUseCases for FakeGraph {
    fn add(&self,
           _contributor_id: &ContributorId,
           subject: &ThingId,
           predicate: &ThingId,
           object: &ThingId)
           -> Result<(), ContentTypeError> {
        self.created
            .borrow_mut()
            .push(CreatedEntry::Statement(subject.clone(), predicate.clone(), object.clone()));
        Ok(())
    }
}
