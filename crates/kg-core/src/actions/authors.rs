//! Autores: validación de la lista declarada y materialización como lista
//! ordenada enlazada al paper.
use std::sync::Arc;

use kg_domain::{validate_label, vocab, ContributorId, ExtractionMethod, ThingId};

use crate::command::AuthorDefinition;
use crate::errors::ContentTypeError;
use crate::ports::{CreateListCommand, CreateLiteralCommand, CreateResourceCommand, ListUseCases,
                   LiteralUseCases, ResourceRepository, ResourceUseCases, StatementUseCases};

pub struct AuthorValidator {
    resource_repository: Arc<dyn ResourceRepository>,
}

impl AuthorValidator {
    pub fn new(resource_repository: Arc<dyn ResourceRepository>) -> Self {
        Self { resource_repository }
    }

    /// Cada autor con id debe existir como recurso con la clase Author; el
    /// resto sólo necesita un nombre válido. Devuelve la lista en el orden
    /// declarado.
    pub fn validate(&self, authors: &[AuthorDefinition]) -> Result<Vec<AuthorDefinition>, ContentTypeError> {
        for author in authors {
            validate_label(&author.name)?;
            if let Some(id) = &author.id {
                let resource = self.resource_repository
                                   .find_by_id(id)
                                   .ok_or_else(|| ContentTypeError::AuthorNotFound(id.clone()))?;
                if !resource.is_instance_of(&vocab::classes::AUTHOR) {
                    return Err(ContentTypeError::AuthorNotFound(id.clone()));
                }
            }
        }
        Ok(authors.to_vec())
    }
}

pub struct AuthorCreator {
    pub resource_use_cases: Arc<dyn ResourceUseCases>,
    pub literal_use_cases: Arc<dyn LiteralUseCases>,
    pub list_use_cases: Arc<dyn ListUseCases>,
    pub statement_use_cases: Arc<dyn StatementUseCases>,
}

impl AuthorCreator {
    /// Un autor sin identificadores ni homepage queda como literal plano;
    /// con metadatos se crea un recurso Author con sus statements.
    pub fn create(&self,
                  contributor_id: &ContributorId,
                  extraction_method: ExtractionMethod,
                  paper_id: &ThingId,
                  authors: &[AuthorDefinition])
                  -> Result<(), ContentTypeError> {
        if authors.is_empty() {
            return Ok(());
        }
        let mut elements = Vec::with_capacity(authors.len());
        for author in authors {
            let element = match &author.id {
                Some(id) => id.clone(),
                None if author.identifiers.is_empty() && author.homepage.is_none() => {
                    self.literal_use_cases
                        .create(CreateLiteralCommand { label: author.name.clone(),
                                                       datatype: vocab::XSD_STRING.to_string(),
                                                       contributor_id: *contributor_id })?
                }
                None => self.create_author_resource(contributor_id, extraction_method, author)?,
            };
            elements.push(element);
        }
        let list_id = self.list_use_cases
                          .create(CreateListCommand { label: "authors list".into(),
                                                      elements: Vec::new(),
                                                      contributor_id: *contributor_id })?;
        self.list_use_cases.update_elements(&list_id, elements)?;
        self.statement_use_cases
            .add(contributor_id, paper_id, &vocab::predicates::HAS_AUTHORS, &list_id)
    }

    fn create_author_resource(&self,
                              contributor_id: &ContributorId,
                              extraction_method: ExtractionMethod,
                              author: &AuthorDefinition)
                              -> Result<ThingId, ContentTypeError> {
        let author_id =
            self.resource_use_cases
                .create(CreateResourceCommand { label: author.name.clone(),
                                                classes: vec![vocab::classes::AUTHOR.clone()],
                                                contributor_id: *contributor_id,
                                                extraction_method })?;
        for (key, values) in &author.identifiers {
            // claves desconocidas se ignoran, igual que en los papers
            let Some(predicate) = vocab::AUTHOR_IDENTIFIERS.get(key.as_str()) else {
                continue;
            };
            for value in values {
                let literal = self.literal_use_cases
                                  .create(CreateLiteralCommand { label: value.clone(),
                                                                 datatype: vocab::XSD_STRING.to_string(),
                                                                 contributor_id: *contributor_id })?;
                self.statement_use_cases.add(contributor_id, &author_id, predicate, &literal)?;
            }
        }
        if let Some(homepage) = &author.homepage {
            let literal = self.literal_use_cases
                              .create(CreateLiteralCommand { label: homepage.clone(),
                                                             datatype: vocab::XSD_STRING.to_string(),
                                                             contributor_id: *contributor_id })?;
            self.statement_use_cases
                .add(contributor_id, &author_id, &vocab::predicates::HAS_WEBSITE, &literal)?;
        }
        Ok(author_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{resource, resource_with_classes, CreatedEntry, FakeGraph};
    use indexmap::IndexMap;

    fn author(name: &str) -> AuthorDefinition {
        AuthorDefinition { id: None,
                           name: name.into(),
                           identifiers: IndexMap::new(),
                           homepage: None }
    }

    fn creator(graph: &Arc<FakeGraph>) -> AuthorCreator {
        AuthorCreator { resource_use_cases: graph.clone(),
                        literal_use_cases: graph.clone(),
                        list_use_cases: graph.clone(),
                        statement_use_cases: graph.clone() }
    }

    #[test]
    fn unknown_author_id_is_rejected() {
        let validator = AuthorValidator::new(Arc::new(FakeGraph::default()));
        let mut unknown = author("Josiah Stinkney Carberry");
        unknown.id = Some(ThingId::from("R999"));

        assert_eq!(validator.validate(&[unknown]),
                   Err(ContentTypeError::AuthorNotFound(ThingId::from("R999"))));
    }

    #[test]
    fn known_author_ids_pass_through() {
        let graph = FakeGraph::with_things(vec![resource_with_classes("R123", &[&vocab::classes::AUTHOR])]);
        let validator = AuthorValidator::new(Arc::new(graph));
        let mut known = author("Josiah Stinkney Carberry");
        known.id = Some(ThingId::from("R123"));

        assert_eq!(validator.validate(&[known.clone()]), Ok(vec![known]));
    }

    #[test]
    fn resource_without_the_author_class_is_rejected() {
        let validator = AuthorValidator::new(Arc::new(FakeGraph::with_things(vec![resource("R123")])));
        let mut plain = author("Josiah Stinkney Carberry");
        plain.id = Some(ThingId::from("R123"));

        assert_eq!(validator.validate(&[plain]),
                   Err(ContentTypeError::AuthorNotFound(ThingId::from("R123"))));
    }

    #[test]
    fn plain_authors_become_literals_in_a_linked_list() {
        let graph = Arc::new(FakeGraph::default());
        let paper_id = ThingId::from("R123");

        creator(&graph).create(&ContributorId::new(),
                               ExtractionMethod::Manual,
                               &paper_id,
                               &[author("Author 1"), author("Author 2")])
                       .unwrap();

        let created = graph.created.borrow();
        let (l1, l2) = match (&created[0], &created[1]) {
            (CreatedEntry::Literal(c1, id1), CreatedEntry::Literal(c2, id2)) => {
                assert_eq!(c1.label, "Author 1");
                assert_eq!(c2.label, "Author 2");
                (id1.clone(), id2.clone())
            }
            other => panic!("expected two literals, got {other:?}"),
        };
        let list_id = match &created[2] {
            CreatedEntry::List(cmd, id) => {
                assert_eq!(cmd.label, "authors list");
                id.clone()
            }
            other => panic!("expected list, got {other:?}"),
        };
        assert_eq!(created[3], CreatedEntry::ListUpdate(list_id.clone(), vec![l1, l2]));
        assert_eq!(created[4],
                   CreatedEntry::Statement(paper_id, vocab::predicates::HAS_AUTHORS.clone(), list_id));
    }

    #[test]
    fn author_with_orcid_becomes_a_resource_with_statements() {
        let graph = Arc::new(FakeGraph::default());
        let mut with_orcid = author("Josiah Stinkney Carberry");
        with_orcid.identifiers
                  .insert("orcid".into(), vec!["0000-0002-1825-0097".into()]);

        creator(&graph).create(&ContributorId::new(),
                               ExtractionMethod::Manual,
                               &ThingId::from("R123"),
                               &[with_orcid])
                       .unwrap();

        let created = graph.created.borrow();
        let author_id = match &created[0] {
            CreatedEntry::Resource(cmd, id) => {
                assert_eq!(cmd.classes, vec![vocab::classes::AUTHOR.clone()]);
                id.clone()
            }
            other => panic!("expected author resource, got {other:?}"),
        };
        let orcid_literal = match &created[1] {
            CreatedEntry::Literal(cmd, id) => {
                assert_eq!(cmd.label, "0000-0002-1825-0097");
                id.clone()
            }
            other => panic!("expected orcid literal, got {other:?}"),
        };
        assert_eq!(created[2],
                   CreatedEntry::Statement(author_id, vocab::predicates::HAS_ORCID.clone(), orcid_literal));
    }

    #[test]
    fn no_authors_creates_nothing() {
        let graph = Arc::new(FakeGraph::default());
        creator(&graph).create(&ContributorId::new(), ExtractionMethod::Manual, &ThingId::from("R123"), &[])
                       .unwrap();
        assert_eq!(graph.creation_calls(), 0);
    }
}
