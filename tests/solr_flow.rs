//! End-to-end runs of the loader, facade and demo against a mock Solr.
//!
//! Uses wiremock to stand in for the Solr update and select handlers.

use serde_json::{Value, json};
use solr_loader::{
    Config, DemoPlan, DemoProfile, QueryFacade, SolrClient, run_demo, solr::escape_query_value,
};
use std::fs;
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const EMPLOYEES_CSV: &[u8] = b"Employee_ID,Full_Name,Department,Gender,Bonus %\n\
E02002,Kai Le,IT,Male,15%\n\
E02003,Robert Pati\xf1o,IT,Male,0%\n\
E02004,Cameron Lo,HR,Female,10%\n";

fn config_for(server: &MockServer, csv_dir: &TempDir) -> Config {
    let csv_path = csv_dir.path().join("Employee Data.csv");
    fs::write(&csv_path, EMPLOYEES_CSV).unwrap();

    let mut config = Config::default_config();
    config.solr.base_url = format!("{}/solr", server.uri());
    config.loader.csv_path = csv_path;
    config
}

fn ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"responseHeader": {"status": 0}}))
}

#[tokio::test]
async fn loader_submits_every_row_without_excluded_column() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/solr/Hash_Suryaeswaran/update"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let config = config_for(&server, &temp);
    let client = SolrClient::new(config.solr.clone());
    let mut facade = QueryFacade::new(&client, "Employee_ID", Vec::<u8>::new());

    let stats = facade
        .index_csv(&config.loader.csv_path, "Hash_Suryaeswaran", "Bonus %")
        .await
        .unwrap();
    assert_eq!(stats.documents_submitted, 3);

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let docs = body.as_array().unwrap();

    assert_eq!(docs.len(), 3);
    assert!(docs.iter().all(|doc| doc.get("Bonus %").is_none()));
    assert_eq!(docs[1]["Full_Name"], "Robert Patiño");

    let printed = String::from_utf8(facade.into_inner()).unwrap();
    assert!(printed.starts_with("Indexed data from "));
    assert!(printed.trim_end().ends_with("into collection: Hash_Suryaeswaran"));
}

#[tokio::test]
async fn loader_ignores_absent_excluded_column() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let config = config_for(&server, &temp);
    let client = SolrClient::new(config.solr.clone());
    let mut facade = QueryFacade::new(&client, "Employee_ID", Vec::<u8>::new());

    let stats = facade
        .index_csv(&config.loader.csv_path, "c", "Salary")
        .await
        .unwrap();

    assert_eq!(stats.documents_submitted, 3);
    assert_eq!(stats.columns_excluded, 0);
}

#[tokio::test]
async fn search_value_with_colon_is_sent_unescaped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/solr/c/select"))
        .and(query_param("q", "Title:Sr:Manager"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"msg": "undefined field Sr", "code": 400}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/solr/c/select"))
        .and(query_param("q", "Title:Sr\\:Manager"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"numFound": 1, "start": 0, "docs": [{"Title": ["Sr:Manager"]}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SolrClient::new(solr_loader::SolrConfig {
        base_url: format!("{}/solr", server.uri()),
    });
    let mut facade = QueryFacade::new(&client, "Employee_ID", Vec::<u8>::new());

    assert_eq!(facade.search_by_column("c", "Title", "Sr:Manager").await, 0);
    assert_eq!(
        facade
            .search_by_column("c", "Title", &escape_query_value("Sr:Manager"))
            .await,
        1
    );
}

#[tokio::test]
async fn two_collection_demo_runs_every_step() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/solr/Hash_Suryaeswaran/update"))
        .respond_with(ok())
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/solr/Hash_6317/update"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"msg": "Collection not found: Hash_6317", "code": 404}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/solr/Hash_6317/select"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/solr/Hash_Suryaeswaran/select"))
        .and(query_param("q", "Employee_ID:[* TO *]"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"numFound": 6, "start": 0, "docs": []}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/solr/Hash_Suryaeswaran/select"))
        .and(query_param("q", "Department:IT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"numFound": 1, "start": 0, "docs": [{"Employee_ID": ["E02002"]}]}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/solr/Hash_Suryaeswaran/select"))
        .and(query_param("q", "Gender:Male"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"numFound": 0, "start": 0, "docs": []}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/solr/Hash_Suryaeswaran/select"))
        .and(query_param("q", "*:*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"numFound": 4, "start": 0, "docs": []},
            "facet_counts": {"facet_fields": {"Department": ["IT", 3, "HR", 1]}}
        })))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let config = config_for(&server, &temp);
    let client = SolrClient::new(config.solr.clone());
    let plan = DemoPlan::for_profile(DemoProfile::TwoCollections, &config, false);

    let mut out = Vec::<u8>::new();
    let report = run_demo(&plan, &config, &client, &mut out).await.unwrap();

    assert_eq!(report.load.documents_submitted, 3);
    assert_eq!(
        report.counts,
        vec![
            ("Hash_Suryaeswaran".to_string(), 6),
            ("Hash_6317".to_string(), 0),
        ]
    );
    assert_eq!(report.failed_steps, 1);

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Total employee records in 'Hash_Suryaeswaran': 6\n"));
    assert!(printed.contains("Total employee records in 'Hash_6317': 0\n"));
    assert!(printed.contains("Indexed sample data into 'Department' of collection: Hash_Suryaeswaran\n"));
    assert!(!printed.contains("of collection: Hash_6317"));
    assert!(printed.contains("Found 1 results for Department = IT in collection: Hash_Suryaeswaran\n"));
    assert!(printed.contains("Found 0 results for Gender = Male in collection: Hash_Suryaeswaran\n"));
    assert!(printed.contains("Deleted employee with ID 'E02003' from collection: Hash_Suryaeswaran\n"));
    assert!(printed.contains("Employee count grouped by department in 'Hash_Suryaeswaran':\nIT: 3\nHR: 1\n"));
    assert!(!printed.contains("grouped by department in 'Hash_6317'"));
}
