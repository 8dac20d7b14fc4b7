// file: src/solr/admin.rs
// description: collection creation through the solr command-line tool
// reference: https://solr.apache.org/guide/solr/latest/deployment-guide/solr-control-script-reference.html

use crate::config::AdminConfig;
use crate::error::{LoaderError, Result};
use std::io::ErrorKind;
use tokio::process::Command;
use tracing::{debug, info};

pub struct AdminTool {
    config: AdminConfig,
}

impl AdminTool {
    pub fn new(config: AdminConfig) -> Self {
        Self { config }
    }

    /// Runs `{command} create_collection -c {collection}`.
    pub async fn create_collection(&self, collection: &str) -> Result<()> {
        debug!(
            "Running {} create_collection -c {}",
            self.config.command, collection
        );

        let output = Command::new(&self.config.command)
            .args(["create_collection", "-c", collection])
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => LoaderError::AdminToolNotFound {
                    command: self.config.command.clone(),
                },
                ErrorKind::PermissionDenied => LoaderError::AdminPermissionDenied {
                    command: self.config.command.clone(),
                },
                _ => LoaderError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let status = match stderr.trim() {
                "" => output.status.to_string(),
                detail => format!("{}: {}", output.status, detail),
            };
            return Err(LoaderError::AdminCommandFailed {
                collection: collection.to_string(),
                status,
            });
        }

        info!("Collection '{}' created", collection);
        Ok(())
    }
}

/// `Hash_{label}` with spaces in the label replaced by underscores.
pub fn collection_name(label: &str) -> String {
    format!("Hash_{}", label.trim().replace(' ', "_"))
}
