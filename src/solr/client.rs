// file: src/solr/client.rs
// description: Solr REST client wrapper for update and select handlers
// reference: https://solr.apache.org/guide/solr/latest/indexing-guide/indexing-with-update-handlers.html

use crate::config::SolrConfig;
use crate::error::{LoaderError, Result};
use crate::models::{ErrorResponse, SelectResponse};
use crate::solr::query::SelectParams;
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

/// Handle to one Solr server. Collections are chosen per call.
#[derive(Clone)]
pub struct SolrClient {
    client: Client,
    base_url: String,
}

impl SolrClient {
    pub fn new(config: SolrConfig) -> Self {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        info!("Using Solr at {}", base_url);

        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn collection_url(&self, collection: &str, handler: &str) -> String {
        format!("{}/{}/{}", self.base_url, collection, handler)
    }

    /// Submit `documents` in one request and commit immediately.
    pub async fn add<T: Serialize>(&self, collection: &str, documents: &[T]) -> Result<()> {
        let url = self.collection_url(collection, "update");
        debug!("Posting {} documents to {}", documents.len(), url);

        let response = self
            .client
            .post(&url)
            .query(&[("commit", "true"), ("wt", "json")])
            .json(documents)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    /// Delete by unique key and commit immediately. Missing ids succeed.
    pub async fn delete_by_id(&self, collection: &str, id: &str) -> Result<()> {
        let url = self.collection_url(collection, "update");
        debug!("Deleting id {} via {}", id, url);

        let response = self
            .client
            .post(&url)
            .query(&[("commit", "true"), ("wt", "json")])
            .json(&json!({ "delete": { "id": id } }))
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    pub async fn select(&self, collection: &str, params: &SelectParams) -> Result<SelectResponse> {
        let url = self.collection_url(collection, "select");
        debug!("Querying {} with q={}", url, params.query);

        let response = self
            .client
            .get(&url)
            .query(&params.to_pairs())
            .send()
            .await?;

        let response = Self::check(response).await?;
        let body = response.text().await?;
        let parsed: SelectResponse = serde_json::from_str(&body)?;

        Ok(parsed)
    }

    async fn check(response: Response) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|e| e.error.msg)
            .unwrap_or(body);

        Err(LoaderError::Solr {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SolrClient {
        SolrClient::new(SolrConfig {
            base_url: format!("{}/solr/", server.uri()),
        })
    }

    #[test]
    fn test_collection_url_trims_trailing_slash() {
        let client = SolrClient::new(SolrConfig {
            base_url: "http://localhost:8983/solr/".to_string(),
        });

        assert_eq!(
            client.collection_url("Hash_6317", "select"),
            "http://localhost:8983/solr/Hash_6317/select"
        );
    }

    #[tokio::test]
    async fn test_add_posts_json_array_with_commit() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/solr/Hash_6317/update"))
            .and(query_param("commit", "true"))
            .and(body_json(json!([{"Employee_ID": "E001", "Gender": "Female"}])))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "responseHeader": {"status": 0, "QTime": 3}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let docs: Vec<Record> = vec![
            [("Employee_ID", "E001"), ("Gender", "Female")]
                .into_iter()
                .collect(),
        ];

        client_for(&server).add("Hash_6317", &docs).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_posts_delete_command() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/solr/Hash_6317/update"))
            .and(body_json(json!({"delete": {"id": "E02003"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .delete_by_id("Hash_6317", "E02003")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_error_status_carries_solr_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/solr/missing/select"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": {"msg": "Collection not found: missing", "code": 404}
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .select("missing", &SelectParams::new("*:*"))
            .await
            .unwrap_err();

        match err {
            LoaderError::Solr { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Collection not found: missing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_error_status_with_plain_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .delete_by_id("c", "1")
            .await
            .unwrap_err();

        assert!(matches!(err, LoaderError::Solr { status: 500, ref message } if message == "boom"));
    }
}
