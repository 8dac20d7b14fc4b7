// file: src/solr/mod.rs
// description: Solr client, query construction and admin tool exports
// reference: internal module structure

pub mod admin;
pub mod client;
pub mod query;

pub use admin::{AdminTool, collection_name};
pub use client::SolrClient;
pub use query::{MATCH_ALL, SelectParams, escape_query_value, exists_query, field_query};
