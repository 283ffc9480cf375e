//! Vocabulario incorporado: clases y predicados que el servicio asume
//! presentes en el grafo, más los registros de identificadores externos.
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::thing::ThingId;

pub mod classes {
    use super::*;

    pub static PAPER: Lazy<ThingId> = Lazy::new(|| ThingId::from("Paper"));
    pub static PAPER_DELETED: Lazy<ThingId> = Lazy::new(|| ThingId::from("PaperDeleted"));
    pub static CONTRIBUTION: Lazy<ThingId> = Lazy::new(|| ThingId::from("Contribution"));
    pub static CONTRIBUTION_DELETED: Lazy<ThingId> = Lazy::new(|| ThingId::from("ContributionDeleted"));
    pub static AUTHOR: Lazy<ThingId> = Lazy::new(|| ThingId::from("Author"));
    pub static RESEARCH_FIELD: Lazy<ThingId> = Lazy::new(|| ThingId::from("ResearchField"));
    pub static VENUE: Lazy<ThingId> = Lazy::new(|| ThingId::from("Venue"));
    pub static LIST: Lazy<ThingId> = Lazy::new(|| ThingId::from("List"));
}

pub mod predicates {
    use super::*;

    pub static HAS_CONTRIBUTION: Lazy<ThingId> = Lazy::new(|| ThingId::from("P31"));
    pub static HAS_RESEARCH_FIELD: Lazy<ThingId> = Lazy::new(|| ThingId::from("P30"));
    pub static HAS_DOI: Lazy<ThingId> = Lazy::new(|| ThingId::from("P26"));
    pub static HAS_ISBN: Lazy<ThingId> = Lazy::new(|| ThingId::from("P37"));
    pub static HAS_ISSN: Lazy<ThingId> = Lazy::new(|| ThingId::from("P74"));
    pub static HAS_AUTHORS: Lazy<ThingId> = Lazy::new(|| ThingId::from("hasAuthors"));
    pub static MONTH_PUBLISHED: Lazy<ThingId> = Lazy::new(|| ThingId::from("P28"));
    pub static YEAR_PUBLISHED: Lazy<ThingId> = Lazy::new(|| ThingId::from("P29"));
    pub static HAS_VENUE: Lazy<ThingId> = Lazy::new(|| ThingId::from("HAS_VENUE"));
    pub static HAS_URL: Lazy<ThingId> = Lazy::new(|| ThingId::from("url"));
    pub static HAS_ORCID: Lazy<ThingId> = Lazy::new(|| ThingId::from("HAS_ORCID"));
    pub static HAS_WEBSITE: Lazy<ThingId> = Lazy::new(|| ThingId::from("website"));
    pub static HAS_GOOGLE_SCHOLAR_ID: Lazy<ThingId> = Lazy::new(|| ThingId::from("googleScholarID"));
    pub static DESCRIPTION: Lazy<ThingId> = Lazy::new(|| ThingId::from("description"));
}

/// Clases internas que un cliente no puede asignar a sus recursos.
pub static RESERVED_CLASS_IDS: Lazy<HashSet<ThingId>> = Lazy::new(|| {
    HashSet::from([classes::PAPER.clone(),
                   classes::PAPER_DELETED.clone(),
                   classes::CONTRIBUTION.clone(),
                   classes::CONTRIBUTION_DELETED.clone(),
                   classes::LIST.clone()])
});

/// Identificadores externos de papers: clave del comando -> predicado.
pub static PAPER_IDENTIFIERS: Lazy<IndexMap<&'static str, ThingId>> = Lazy::new(|| {
    IndexMap::from([("doi", predicates::HAS_DOI.clone()),
                    ("isbn", predicates::HAS_ISBN.clone()),
                    ("issn", predicates::HAS_ISSN.clone())])
});

/// Identificadores externos de autores.
pub static AUTHOR_IDENTIFIERS: Lazy<IndexMap<&'static str, ThingId>> = Lazy::new(|| {
    IndexMap::from([("orcid", predicates::HAS_ORCID.clone()),
                    ("google_scholar", predicates::HAS_GOOGLE_SCHOLAR_ID.clone())])
});

/// Datatype por defecto para literales.
pub const XSD_STRING: &str = "xsd:string";
pub const XSD_INTEGER: &str = "xsd:integer";
