//! Adaptadores de los puertos del núcleo. Por ahora sólo el almacén en
//! memoria, suficiente para tests y para el binario de demostración.
pub mod memory;

pub use memory::InMemoryGraph;
