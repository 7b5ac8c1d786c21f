//! Sample entities.

pub mod model;

pub use model::{Sample, SampleStatus};
