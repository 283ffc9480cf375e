//! Información de publicación: mes, año, venue y URL.
use std::sync::Arc;

use kg_domain::{vocab, ContributorId, ExtractionMethod, ThingId};

use crate::command::PublicationInfoDefinition;
use crate::errors::ContentTypeError;
use crate::ports::{CreateLiteralCommand, CreateResourceCommand, LiteralUseCases, ResourceRepository,
                   ResourceUseCases, StatementUseCases};

#[derive(Debug, Default)]
pub struct PublicationInfoValidator;

impl PublicationInfoValidator {
    pub fn validate(&self, publication_info: &PublicationInfoDefinition) -> Result<(), ContentTypeError> {
        if let Some(month) = publication_info.published_month {
            if !(1..=12).contains(&month) {
                return Err(ContentTypeError::InvalidMonth(month));
            }
        }
        Ok(())
    }
}

pub struct PublicationInfoCreator {
    pub resource_repository: Arc<dyn ResourceRepository>,
    pub resource_use_cases: Arc<dyn ResourceUseCases>,
    pub literal_use_cases: Arc<dyn LiteralUseCases>,
    pub statement_use_cases: Arc<dyn StatementUseCases>,
}

impl PublicationInfoCreator {
    pub fn create(&self,
                  contributor_id: &ContributorId,
                  extraction_method: ExtractionMethod,
                  paper_id: &ThingId,
                  publication_info: &PublicationInfoDefinition)
                  -> Result<(), ContentTypeError> {
        if let Some(month) = publication_info.published_month {
            let literal = self.literal_use_cases
                              .create(CreateLiteralCommand { label: month.to_string(),
                                                             datatype: vocab::XSD_INTEGER.to_string(),
                                                             contributor_id: *contributor_id })?;
            self.statement_use_cases
                .add(contributor_id, paper_id, &vocab::predicates::MONTH_PUBLISHED, &literal)?;
        }
        if let Some(year) = publication_info.published_year {
            let literal = self.literal_use_cases
                              .create(CreateLiteralCommand { label: year.to_string(),
                                                             datatype: vocab::XSD_INTEGER.to_string(),
                                                             contributor_id: *contributor_id })?;
            self.statement_use_cases
                .add(contributor_id, paper_id, &vocab::predicates::YEAR_PUBLISHED, &literal)?;
        }
        if let Some(venue) = &publication_info.published_in {
            // el venue se reusa si ya existe uno con la misma etiqueta
            let venue_id = match self.resource_repository
                                     .find_all_by_class_and_label(&vocab::classes::VENUE, venue)
                                     .into_iter()
                                     .next()
            {
                Some(existing) => existing.id,
                None => self.resource_use_cases
                            .create(CreateResourceCommand { label: venue.clone(),
                                                            classes: vec![vocab::classes::VENUE.clone()],
                                                            contributor_id: *contributor_id,
                                                            extraction_method })?,
            };
            self.statement_use_cases
                .add(contributor_id, paper_id, &vocab::predicates::HAS_VENUE, &venue_id)?;
        }
        if let Some(url) = &publication_info.url {
            let literal = self.literal_use_cases
                              .create(CreateLiteralCommand { label: url.clone(),
                                                             datatype: vocab::XSD_STRING.to_string(),
                                                             contributor_id: *contributor_id })?;
            self.statement_use_cases
                .add(contributor_id, paper_id, &vocab::predicates::HAS_URL, &literal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CreatedEntry, FakeGraph};
    use kg_domain::{Resource, Thing};

    fn creator(graph: &Arc<FakeGraph>) -> PublicationInfoCreator {
        PublicationInfoCreator { resource_repository: graph.clone(),
                                 resource_use_cases: graph.clone(),
                                 literal_use_cases: graph.clone(),
                                 statement_use_cases: graph.clone() }
    }

    #[test]
    fn month_out_of_range_is_rejected() {
        let info = PublicationInfoDefinition { published_month: Some(13),
                                               ..Default::default() };
        assert_eq!(PublicationInfoValidator.validate(&info), Err(ContentTypeError::InvalidMonth(13)));
    }

    #[test]
    fn month_and_year_become_integer_literals() {
        let graph = Arc::new(FakeGraph::default());
        let info = PublicationInfoDefinition { published_month: Some(5),
                                               published_year: Some(2015),
                                               ..Default::default() };

        creator(&graph).create(&ContributorId::new(),
                               ExtractionMethod::Manual,
                               &ThingId::from("R123"),
                               &info)
                       .unwrap();

        let created = graph.created.borrow();
        assert!(matches!(&created[0],
                         CreatedEntry::Literal(cmd, _) if cmd.label == "5"
                             && cmd.datatype == vocab::XSD_INTEGER));
        assert!(matches!(&created[1], CreatedEntry::Statement(_, p, _) if p == &*vocab::predicates::MONTH_PUBLISHED));
        assert!(matches!(&created[2], CreatedEntry::Literal(cmd, _) if cmd.label == "2015"));
        assert!(matches!(&created[3], CreatedEntry::Statement(_, p, _) if p == &*vocab::predicates::YEAR_PUBLISHED));
    }

    #[test]
    fn existing_venue_is_reused() {
        let venue = Thing::Resource(Resource { id: ThingId::from("R456"),
                                               label: "ACL 2015".into(),
                                               classes: vec![vocab::classes::VENUE.clone()],
                                               created_by: ContributorId::new(),
                                               created_at: chrono::Utc::now(),
                                               extraction_method: ExtractionMethod::Unknown });
        let graph = Arc::new(FakeGraph::with_things(vec![venue]));
        let info = PublicationInfoDefinition { published_in: Some("ACL 2015".into()),
                                               ..Default::default() };

        creator(&graph).create(&ContributorId::new(),
                               ExtractionMethod::Manual,
                               &ThingId::from("R123"),
                               &info)
                       .unwrap();

        assert_eq!(graph.created.borrow().as_slice(),
                   &[CreatedEntry::Statement(ThingId::from("R123"),
                                             vocab::predicates::HAS_VENUE.clone(),
                                             ThingId::from("R456"))]);
    }

    #[test]
    fn missing_venue_is_created_with_the_venue_class() {
        let graph = Arc::new(FakeGraph::default());
        let info = PublicationInfoDefinition { published_in: Some("ACL 2015".into()),
                                               ..Default::default() };

        creator(&graph).create(&ContributorId::new(),
                               ExtractionMethod::Manual,
                               &ThingId::from("R123"),
                               &info)
                       .unwrap();

        let created = graph.created.borrow();
        assert!(matches!(&created[0],
                         CreatedEntry::Resource(cmd, _) if cmd.label == "ACL 2015"
                             && cmd.classes == vec![vocab::classes::VENUE.clone()]));
    }

    #[test]
    fn url_becomes_a_string_literal() {
        let graph = Arc::new(FakeGraph::default());
        let info = PublicationInfoDefinition { url: Some("https://example.org/paper".into()),
                                               ..Default::default() };

        creator(&graph).create(&ContributorId::new(),
                               ExtractionMethod::Manual,
                               &ThingId::from("R123"),
                               &info)
                       .unwrap();

        let created = graph.created.borrow();
        assert!(matches!(&created[0],
                         CreatedEntry::Literal(cmd, _) if cmd.label == "https://example.org/paper"
                             && cmd.datatype == vocab::XSD_STRING));
        assert!(matches!(&created[1], CreatedEntry::Statement(_, p, _) if p == &*vocab::predicates::HAS_URL));
    }
}
