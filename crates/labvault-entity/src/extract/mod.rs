//! DNA extract entities.

pub mod model;

pub use model::DnaExtract;
