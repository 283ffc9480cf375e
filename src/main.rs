//! Binario de demostración: siembra un grafo en memoria con el vocabulario
//! mínimo y crea un paper con una contribución anidada.
use indexmap::IndexMap;

use kg_adapters::InMemoryGraph;
use kg_content::config::CONFIG;
use kg_content::ContentService;
use kg_core::{AuthorDefinition, ContributionContentsDefinition, ContributionDefinition,
              CreateContributionCommand, CreatePaperCommand, LiteralDefinition, PaperContentsDefinition,
              PredicateDefinition, PublicationInfoDefinition, StatementObjectDefinition,
              StatementsDefinition};
use kg_domain::{vocab, ContributorId, ExtractionMethod, ThingId};

fn main() -> Result<(), kg_core::ContentTypeError> {
    env_logger::Builder::new().parse_filters(&CONFIG.logging.filter).init();

    let graph = InMemoryGraph::new();
    seed_vocabulary(&graph);
    graph.insert_resource("R11", "Science", &[&vocab::classes::RESEARCH_FIELD]);
    graph.insert_resource("R3003", "Question answering over linked data", &[]);
    let service = ContentService::from_graph(graph.clone());

    let contributor = ContributorId::new();
    let paper_id = service.create_paper(&paper_command(contributor))?;
    println!("paper: {paper_id}");
    for (s, p, o) in graph.statements_with_subject(&paper_id) {
        println!("  ({s}, {p}, {o})");
    }

    let contribution_id = service.create_contribution(&CreateContributionCommand {
        contributor_id: contributor,
        paper_id: paper_id.clone(),
        extraction_method: ExtractionMethod::Manual,
        contents: ContributionContentsDefinition {
            contribution: ContributionDefinition {
                label: "Contribution 2".into(),
                classes: vec![],
                statements: statements(vec![("P32", vec![StatementObjectDefinition::reference("R3003")])]),
            },
            ..Default::default()
        },
    })?;
    println!("contribution: {contribution_id}");
    Ok(())
}

fn seed_vocabulary(graph: &InMemoryGraph) {
    graph.insert_class(vocab::classes::RESEARCH_FIELD.value(), "Research field");
    graph.insert_class("C123", "Some class");
    graph.insert_predicate("P32", "has research problem");
    graph.insert_predicate(vocab::predicates::HAS_CONTRIBUTION.value(), "has contribution");
    graph.insert_predicate(vocab::predicates::HAS_RESEARCH_FIELD.value(), "has research field");
    graph.insert_predicate(vocab::predicates::HAS_DOI.value(), "has DOI");
    graph.insert_predicate(vocab::predicates::HAS_AUTHORS.value(), "authors");
}

fn statements(pairs: Vec<(&str, Vec<StatementObjectDefinition>)>) -> StatementsDefinition {
    pairs.into_iter().map(|(p, objects)| (p.to_string(), objects)).collect()
}

fn paper_command(contributor: ContributorId) -> CreatePaperCommand {
    let mut contents = PaperContentsDefinition::default();
    contents.predicates.insert("#p".into(),
                               PredicateDefinition { label: "hasResult".into(),
                                                     description: None });
    contents.literals.insert("#v".into(), LiteralDefinition::new("0.93"));
    contents.contributions =
        vec![ContributionDefinition { label: "Contribution 1".into(),
                                      classes: vec![ThingId::from("C123")],
                                      statements: statements(vec![
                                          ("P32", vec![StatementObjectDefinition::reference("R3003")]),
                                          ("#p", vec![StatementObjectDefinition::reference("#v")]),
                                      ]) }];

    CreatePaperCommand { contributor_id: contributor,
                         title: "Question answering over knowledge graphs".into(),
                         research_fields: vec![ThingId::from("R11")],
                         identifiers: IndexMap::from([("doi".to_string(),
                                                       vec!["10.1000/182".to_string()])]),
                         publication_info: Some(PublicationInfoDefinition { published_year: Some(2024),
                                                                            ..Default::default() }),
                         authors: vec![AuthorDefinition { id: None,
                                                          name: "Josiah Stinkney Carberry".into(),
                                                          identifiers: IndexMap::new(),
                                                          homepage: None }],
                         observatories: vec![],
                         organizations: vec![],
                         contents: Some(contents),
                         extraction_method: ExtractionMethod::Manual }
}
