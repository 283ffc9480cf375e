//! Tests end-to-end del pipeline que agrega contribuciones a papers
//! existentes.
use std::sync::Arc;

use kg_adapters::InMemoryGraph;
use kg_content::ContentService;
use kg_core::{ContentTypeError, ContributionContentsDefinition, ContributionDefinition,
              CreateContributionCommand, LiteralDefinition, StatementObjectDefinition,
              StatementsDefinition};
use kg_domain::{vocab, ContributorId, ExtractionMethod, Thing, ThingId};

fn seeded_graph() -> Arc<InMemoryGraph> {
    let graph = InMemoryGraph::new();
    graph.insert_predicate("P32", "has research problem");
    graph.insert_predicate(vocab::predicates::HAS_CONTRIBUTION.value(), "has contribution");
    graph.insert_resource("R3003", "Question answering over linked data", &[]);
    graph.insert_resource("R100", "Existing paper", &[&vocab::classes::PAPER]);
    graph
}

fn statements(pairs: Vec<(&str, Vec<StatementObjectDefinition>)>) -> StatementsDefinition {
    pairs.into_iter().map(|(p, objects)| (p.to_string(), objects)).collect()
}

fn command(paper_id: &str, contents: ContributionContentsDefinition) -> CreateContributionCommand {
    CreateContributionCommand { contributor_id: ContributorId::new(),
                                paper_id: ThingId::from(paper_id),
                                extraction_method: ExtractionMethod::Manual,
                                contents }
}

#[test]
fn contribution_is_created_and_linked_to_the_paper() {
    let graph = seeded_graph();
    let service = ContentService::from_graph(graph.clone());
    let mut contents = ContributionContentsDefinition::default();
    contents.literals.insert("#v".into(), LiteralDefinition::new("0.93"));
    contents.contribution =
        ContributionDefinition { label: "Contribution 2".into(),
                                 classes: vec![],
                                 statements: statements(vec![("P32",
                                                              vec![StatementObjectDefinition::reference("R3003"),
                                                                   StatementObjectDefinition::reference("#v")])]) };

    let contribution_id = service.create_contribution(&command("R100", contents)).unwrap();

    match graph.thing(&contribution_id) {
        Some(Thing::Resource(r)) => {
            assert_eq!(r.label, "Contribution 2");
            assert!(r.is_instance_of(&vocab::classes::CONTRIBUTION));
        }
        other => panic!("expected contribution resource, got {other:?}"),
    }
    assert!(graph.statements_with_subject(&ThingId::from("R100"))
                 .iter()
                 .any(|(_, p, o)| p == &*vocab::predicates::HAS_CONTRIBUTION && o == &contribution_id));
    let contribution_statements = graph.statements_with_subject(&contribution_id);
    assert_eq!(contribution_statements.len(), 2);
    assert!(contribution_statements.iter().any(|(_, _, o)| o == &ThingId::from("R3003")));
}

#[test]
fn missing_paper_is_rejected_before_any_creation() {
    let graph = seeded_graph();
    let service = ContentService::from_graph(graph.clone());
    let mut contents = ContributionContentsDefinition::default();
    contents.contribution =
        ContributionDefinition { label: "Contribution".into(),
                                 classes: vec![],
                                 statements: statements(vec![("P32",
                                                              vec![StatementObjectDefinition::reference("R3003")])]) };

    let err = service.create_contribution(&command("R404", contents)).unwrap_err();

    assert_eq!(err, ContentTypeError::PaperNotFound(ThingId::from("R404")));
    assert_eq!(graph.creation_call_count(), 0);
}

#[test]
fn non_paper_target_is_rejected() {
    let graph = seeded_graph();
    let service = ContentService::from_graph(graph.clone());
    let mut contents = ContributionContentsDefinition::default();
    contents.contribution =
        ContributionDefinition { label: "Contribution".into(),
                                 classes: vec![],
                                 statements: statements(vec![("P32",
                                                              vec![StatementObjectDefinition::reference("R3003")])]) };

    // R3003 existe pero no es un paper
    assert_eq!(service.create_contribution(&command("R3003", contents)).unwrap_err(),
               ContentTypeError::PaperNotFound(ThingId::from("R3003")));
}

#[test]
fn empty_contribution_is_rejected() {
    let graph = seeded_graph();
    let service = ContentService::from_graph(graph.clone());
    let mut contents = ContributionContentsDefinition::default();
    contents.contribution = ContributionDefinition { label: "Contribution".into(),
                                                     ..Default::default() };

    assert_eq!(service.create_contribution(&command("R100", contents)).unwrap_err(),
               ContentTypeError::EmptyContribution(0));
    assert_eq!(graph.creation_call_count(), 0);
}
