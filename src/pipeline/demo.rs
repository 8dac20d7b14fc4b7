// file: src/pipeline/demo.rs
// description: fixed demonstration sequence over one or two employee collections
// reference: sequential orchestration of loader and facade operations

use crate::config::Config;
use crate::error::Result;
use crate::facade::QueryFacade;
use crate::loader::LoadStats;
use crate::solr::{AdminTool, SolrClient, collection_name};
use crate::utils::logging::format_step;
use std::fmt;
use std::io::Write;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemoProfile {
    /// Name collection plus phone collection
    #[default]
    TwoCollections,
    /// One pre-existing core
    SingleCore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoStep {
    CreateCollection { collection: String },
    LoadCsv { collection: String },
    Count { collection: String },
    IndexSample { collection: String, label: String },
    Search { collection: String, field: String, value: String },
    Delete { collection: String, id: String },
    Facet { collection: String },
}

impl fmt::Display for DemoStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoStep::CreateCollection { collection } => write!(f, "create {}", collection),
            DemoStep::LoadCsv { collection } => write!(f, "load csv into {}", collection),
            DemoStep::Count { collection } => write!(f, "count {}", collection),
            DemoStep::IndexSample { collection, label } => {
                write!(f, "index sample '{}' into {}", label, collection)
            }
            DemoStep::Search {
                collection,
                field,
                value,
            } => write!(f, "search {}:{} in {}", field, value, collection),
            DemoStep::Delete { collection, id } => write!(f, "delete {} from {}", id, collection),
            DemoStep::Facet { collection } => write!(f, "facet {}", collection),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoPlan {
    pub profile: DemoProfile,
    pub steps: Vec<DemoStep>,
}

#[derive(Debug, Clone, Default)]
pub struct DemoReport {
    pub load: LoadStats,
    pub counts: Vec<(String, u64)>,
    pub failed_steps: usize,
}

impl DemoPlan {
    pub fn for_profile(profile: DemoProfile, config: &Config, create_collections: bool) -> Self {
        let collections = match profile {
            DemoProfile::TwoCollections => vec![
                collection_name(&config.demo.owner_name),
                collection_name(&config.demo.phone_suffix),
            ],
            DemoProfile::SingleCore => vec![config.demo.single_core_collection.clone()],
        };

        let mut steps = Vec::new();

        if create_collections {
            steps.extend(collections.iter().map(|c| DemoStep::CreateCollection {
                collection: c.clone(),
            }));
        }

        let primary = collections[0].clone();
        steps.push(DemoStep::LoadCsv {
            collection: primary.clone(),
        });
        steps.extend(collections.iter().map(|c| DemoStep::Count {
            collection: c.clone(),
        }));

        match profile {
            DemoProfile::TwoCollections => {
                let secondary = collections[1].clone();
                steps.push(DemoStep::IndexSample {
                    collection: primary.clone(),
                    label: "Department".to_string(),
                });
                steps.push(DemoStep::IndexSample {
                    collection: secondary.clone(),
                    label: "Gender".to_string(),
                });
                steps.push(search(&primary, "Department", "IT"));
                steps.push(search(&primary, "Gender", "Male"));
                steps.push(search(&secondary, "Department", "IT"));
                steps.push(DemoStep::Delete {
                    collection: primary.clone(),
                    id: "E02003".to_string(),
                });
            }
            DemoProfile::SingleCore => {
                steps.push(search(&primary, "Full_Name", "Kai Le"));
                steps.push(DemoStep::Delete {
                    collection: primary.clone(),
                    id: "E02002".to_string(),
                });
            }
        }

        steps.extend(collections.iter().map(|c| DemoStep::Facet {
            collection: c.clone(),
        }));

        Self { profile, steps }
    }
}

fn count_summary(profile: DemoProfile, collection: &str, count: u64) -> String {
    match profile {
        DemoProfile::TwoCollections => {
            format!("Total employee records in '{}': {}", collection, count)
        }
        DemoProfile::SingleCore => {
            format!("Indexed {} records into the collection '{}'.", count, collection)
        }
    }
}

fn search(collection: &str, field: &str, value: &str) -> DemoStep {
    DemoStep::Search {
        collection: collection.to_string(),
        field: field.to_string(),
        value: value.to_string(),
    }
}

/// Runs `plan` step by step. A failed CSV load aborts the run; every other
/// failure is logged and counted.
pub async fn run_demo<W: Write>(
    plan: &DemoPlan,
    config: &Config,
    client: &SolrClient,
    out: W,
) -> Result<DemoReport> {
    let admin = AdminTool::new(config.admin.clone());
    let mut facade = QueryFacade::new(client, config.loader.id_field.clone(), out)
        .with_facet_field(config.demo.facet_field.clone());
    let mut report = DemoReport::default();

    info!("Running demo with {} steps", plan.steps.len());

    let total = plan.steps.len();
    for (idx, step) in plan.steps.iter().enumerate() {
        info!("{}", format_step(idx + 1, total, &step.to_string()));

        match step {
            DemoStep::CreateCollection { collection } => {
                match admin.create_collection(collection).await {
                    Ok(()) => facade.emit(&format!(
                        "Collection '{}' created successfully.",
                        collection
                    )),
                    Err(e) => {
                        error!("Could not create collection '{}': {}", collection, e);
                        report.failed_steps += 1;
                    }
                }
            }
            DemoStep::LoadCsv { collection } => {
                report.load = facade
                    .index_csv(
                        &config.loader.csv_path,
                        collection,
                        &config.loader.exclude_column,
                    )
                    .await?;
            }
            DemoStep::Count { collection } => {
                let count = facade.emp_count(collection).await;
                facade.emit(&count_summary(plan.profile, collection, count));
                report.counts.push((collection.clone(), count));
            }
            DemoStep::IndexSample { collection, label } => {
                if let Err(e) = facade.index_sample(collection, label).await {
                    warn!("Error indexing sample data in {}: {}", collection, e);
                    report.failed_steps += 1;
                }
            }
            DemoStep::Search {
                collection,
                field,
                value,
            } => {
                facade.search_by_column(collection, field, value).await;
            }
            DemoStep::Delete { collection, id } => {
                facade.delete_by_id(collection, id).await;
            }
            DemoStep::Facet { collection } => {
                facade.department_facet(collection).await;
            }
        }
    }

    info!(
        "Demo finished: {} documents loaded, {} failed steps",
        report.load.documents_submitted, report.failed_steps
    );
    Ok(report)
}
