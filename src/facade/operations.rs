// file: src/facade/operations.rs
// description: best-effort collection operations that report to a console writer
// reference: https://solr.apache.org/guide/solr/latest/query-guide/faceting.html

use crate::error::Result;
use crate::loader::{CsvLoader, LoadStats};
use crate::models::{FacetCount, Record};
use crate::solr::{MATCH_ALL, SelectParams, SolrClient, exists_query, field_query};
use std::io::Write;
use std::path::Path;
use tracing::{error, warn};

pub const DEFAULT_FACET_FIELD: &str = "Department";

/// Operations against one Solr server, each a single independent request.
///
/// Outcome lines go to `out`; failures go to the log. Only the indexing
/// operations return errors, everything else degrades to an empty result.
pub struct QueryFacade<'a, W: Write> {
    client: &'a SolrClient,
    id_field: String,
    facet_field: String,
    out: W,
}

impl<'a, W: Write> QueryFacade<'a, W> {
    pub fn new(client: &'a SolrClient, id_field: impl Into<String>, out: W) -> Self {
        Self {
            client,
            id_field: id_field.into(),
            facet_field: DEFAULT_FACET_FIELD.to_string(),
            out,
        }
    }

    pub fn with_facet_field(mut self, field: impl Into<String>) -> Self {
        self.facet_field = field.into();
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub async fn index_csv(
        &mut self,
        path: &Path,
        collection: &str,
        exclude_column: &str,
    ) -> Result<LoadStats> {
        let stats = CsvLoader::new(self.client)
            .load(path, collection, exclude_column)
            .await?;

        self.emit(&format!(
            "Indexed data from {} into collection: {}",
            path.display(),
            collection
        ));
        Ok(stats)
    }

    /// Indexes the fixed three-employee sample set. `column_label` only names
    /// the run in the output.
    pub async fn index_sample(&mut self, collection: &str, column_label: &str) -> Result<()> {
        self.client.add(collection, &sample_documents()).await?;

        self.emit(&format!(
            "Indexed sample data into '{}' of collection: {}",
            column_label, collection
        ));
        Ok(())
    }

    /// Number of documents with any id value. Zero on failure, so an
    /// unreachable collection looks the same as an empty one.
    pub async fn emp_count(&mut self, collection: &str) -> u64 {
        let params = SelectParams::new(exists_query(&self.id_field)).rows(0);

        match self.client.select(collection, &params).await {
            Ok(response) => {
                let count = response.hits();
                self.emit(&format!(
                    "Total valid {} records in '{}': {}",
                    self.id_field, collection, count
                ));
                count
            }
            Err(e) => {
                error!("Failed to fetch employee count from '{}': {}", collection, e);
                0
            }
        }
    }

    /// Prints every document matching `field:value`. The value is
    /// interpolated as-is; returns how many documents were printed.
    pub async fn search_by_column(&mut self, collection: &str, field: &str, value: &str) -> usize {
        let params = SelectParams::new(field_query(field, value));

        let response = match self.client.select(collection, &params).await {
            Ok(response) => response,
            Err(e) => {
                error!("Search {}:{} in '{}' failed: {}", field, value, collection, e);
                return 0;
            }
        };

        let docs = response.docs();
        self.emit(&format!(
            "Found {} results for {} = {} in collection: {}",
            docs.len(),
            field,
            value,
            collection
        ));

        for doc in docs {
            match serde_json::to_string(doc) {
                Ok(line) => self.emit(&line),
                Err(e) => warn!("Unprintable document in '{}': {}", collection, e),
            }
        }

        docs.len()
    }

    pub async fn delete_by_id(&mut self, collection: &str, id: &str) {
        match self.client.delete_by_id(collection, id).await {
            Ok(()) => self.emit(&format!(
                "Deleted employee with ID '{}' from collection: {}",
                id, collection
            )),
            Err(e) => error!("Failed to delete employee ID '{}' from '{}': {}", id, collection, e),
        }
    }

    /// Prints per-department counts, skipping departments with no documents.
    pub async fn department_facet(&mut self, collection: &str) -> Vec<FacetCount> {
        let params = SelectParams::new(MATCH_ALL)
            .facet_field(self.facet_field.clone())
            .facet_mincount(1)
            .rows(0);

        let response = match self.client.select(collection, &params).await {
            Ok(response) => response,
            Err(e) => {
                error!("Failed to retrieve facets from '{}': {}", collection, e);
                return Vec::new();
            }
        };

        match response.facet(&self.facet_field) {
            None => {
                self.emit(&format!("No facets found in response for '{}'.", collection));
                Vec::new()
            }
            Some(counts) if counts.is_empty() => {
                self.emit(&format!(
                    "No facet counts found for '{}' in '{}'.",
                    self.facet_field, collection
                ));
                counts
            }
            Some(counts) => {
                self.emit(&format!(
                    "Employee count grouped by department in '{}':",
                    collection
                ));
                for facet in &counts {
                    self.emit(&format!("{}: {}", facet.value, facet.count));
                }
                counts
            }
        }
    }

    pub fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            warn!("Failed to write output: {}", e);
        }
    }
}

pub fn sample_documents() -> Vec<Record> {
    [("E001", "Female"), ("E002", "Male"), ("E003", "Female")]
        .into_iter()
        .map(|(id, gender)| [("Employee_ID", id), ("Gender", gender)].into_iter().collect())
        .collect()
}
