// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod facade;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod solr;
pub mod utils;

pub use config::{AdminConfig, Config, DemoConfig, LoaderConfig, SolrConfig};
pub use error::{LoaderError, Result};
pub use facade::{QueryFacade, sample_documents};
pub use loader::{CsvLoader, LoadStats};
pub use models::{Document, FacetCount, Record, SelectResponse};
pub use pipeline::{DemoPlan, DemoProfile, DemoReport, DemoStep, run_demo};
pub use solr::{AdminTool, SelectParams, SolrClient, collection_name};
