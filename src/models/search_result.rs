// file: src/models/search_result.rs
// description: Solr select response model with hit count, documents and facets
// reference: https://solr.apache.org/guide/solr/latest/query-guide/response-writers.html

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct SelectResponse {
    pub response: ResultSet,

    #[serde(default)]
    pub facet_counts: Option<FacetCounts>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    #[serde(rename = "numFound")]
    pub num_found: u64,

    #[serde(default)]
    pub start: u64,

    #[serde(default)]
    pub docs: Vec<Map<String, Value>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FacetCounts {
    /// Solr's flat `[value, count, value, count, ...]` arrays keyed by field
    #[serde(default)]
    pub facet_fields: HashMap<String, Vec<Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetCount {
    pub value: String,
    pub count: u64,
}

impl SelectResponse {
    /// Total matches reported by the server, independent of `rows`.
    pub fn hits(&self) -> u64 {
        self.response.num_found
    }

    pub fn docs(&self) -> &[Map<String, Value>] {
        &self.response.docs
    }

    /// Facet counts for `field` in server order.
    ///
    /// `None` when the response carries no facet section at all;
    /// `Some(empty)` when the section exists but the field has no counts.
    pub fn facet(&self, field: &str) -> Option<Vec<FacetCount>> {
        let facets = self.facet_counts.as_ref()?;
        let flat = match facets.facet_fields.get(field) {
            Some(flat) => flat,
            None => return Some(Vec::new()),
        };

        Some(
            flat.chunks(2)
                .filter_map(|pair| {
                    let value = match pair.first()? {
                        Value::String(s) => s.clone(),
                        Value::Null => return None,
                        other => other.to_string(),
                    };
                    let count = pair.get(1)?.as_u64()?;
                    (count > 0).then_some(FacetCount { value, count })
                })
                .collect(),
        )
    }
}

/// Solr error envelope, `{"error": {"msg": "...", "code": 400}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub msg: Option<String>,

    #[serde(default)]
    pub code: Option<u16>,
}
