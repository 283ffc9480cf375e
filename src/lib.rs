//! kg-content: servicio de creación de contenido sobre un grafo de
//! conocimiento académico. Orquesta los pipelines de `kg-core` contra los
//! puertos implementados en `kg-adapters`.
pub mod config;
pub mod service;

pub use service::ContentService;
