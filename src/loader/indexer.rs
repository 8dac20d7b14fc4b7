// file: src/loader/indexer.rs
// description: csv to Solr batch indexing with one excluded column
// reference: https://solr.apache.org/guide/solr/latest/indexing-guide/indexing-with-update-handlers.html

use crate::error::Result;
use crate::loader::reader::read_records;
use crate::models::{Document, Record};
use crate::solr::SolrClient;
use std::path::Path;
use tracing::{debug, info, warn};

pub struct CsvLoader<'a> {
    client: &'a SolrClient,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub rows_read: usize,
    pub documents_submitted: usize,
    /// Records that actually carried the excluded column
    pub columns_excluded: usize,
}

impl<'a> CsvLoader<'a> {
    pub fn new(client: &'a SolrClient) -> Self {
        Self { client }
    }

    /// Reads `path`, drops `exclude_column` from every record and submits the
    /// rest to `collection` in a single committed batch.
    ///
    /// File and CSV errors propagate, as do server errors from the batch.
    pub async fn load(
        &self,
        path: &Path,
        collection: &str,
        exclude_column: &str,
    ) -> Result<LoadStats> {
        info!("Loading {} into {}", path.display(), collection);

        let records = read_records(path)?;
        let rows_read = records.len();
        let (documents, columns_excluded) = prepare_documents(records, exclude_column);

        if columns_excluded == 0 {
            debug!("Column '{}' not present in {}", exclude_column, path.display());
        }

        if documents.is_empty() {
            warn!("No rows in {}, nothing submitted", path.display());
        } else {
            self.client.add(collection, &documents).await?;
        }

        let stats = LoadStats {
            rows_read,
            documents_submitted: documents.len(),
            columns_excluded,
        };

        info!(
            "Submitted {} documents to {} ({} had '{}' removed)",
            stats.documents_submitted, collection, stats.columns_excluded, exclude_column
        );
        Ok(stats)
    }
}

/// Strips `exclude_column` and empty cells from each record, returning the
/// documents and how many records carried the column.
///
/// Blank cells are left out rather than sent as `""`, which a typed Solr
/// field would reject for the whole batch.
pub fn prepare_documents(records: Vec<Record>, exclude_column: &str) -> (Vec<Document>, usize) {
    let mut excluded = 0;
    let documents = records
        .into_iter()
        .map(|mut record| {
            if record.remove(exclude_column).is_some() {
                excluded += 1;
            }
            record.remove_empty();
            record
        })
        .collect();

    (documents, excluded)
}
