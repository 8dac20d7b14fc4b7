// file: src/facade/mod.rs
// description: query facade module exports
// reference: internal module structure

pub mod operations;

pub use operations::{DEFAULT_FACET_FIELD, QueryFacade, sample_documents};
