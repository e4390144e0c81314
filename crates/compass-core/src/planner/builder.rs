//! Builder for creating and configuring Planner instances.

use std::sync::Arc;

use super::Planner;
use crate::api::{CatalogApi, PlanApi, RestClient};
use crate::error::{PlannerError, Result};

/// Builder for creating and configuring Planner instances.
///
/// Production callers supply a base URL and get a [`RestClient`] behind both
/// accessor seams; tests inject their own [`CatalogApi`]/[`PlanApi`]
/// implementations instead.
#[derive(Default)]
pub struct PlannerBuilder {
    base_url: Option<String>,
    student_id: Option<String>,
    catalog: Option<Arc<dyn CatalogApi>>,
    repository: Option<Arc<dyn PlanApi>>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the remote API base URL, e.g. `http://localhost:8080/api`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the student the planner operates on (required).
    pub fn with_student_id(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = Some(student_id.into());
        self
    }

    /// Injects a catalog accessor, bypassing the REST client. Test seam.
    pub fn with_catalog(mut self, catalog: Arc<dyn CatalogApi>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Injects a plan repository accessor, bypassing the REST client. Test
    /// seam.
    pub fn with_repository(mut self, repository: Arc<dyn PlanApi>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Builds the planner and performs the initial state fetch.
    ///
    /// The initial fetch fans out the independent reads (saved plan, credit
    /// map, credit totals) concurrently; see [`Planner::refresh`].
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` when the student id is missing,
    /// or when neither a base URL nor injected accessors were provided.
    /// Transport failures from the initial fetch propagate unchanged.
    pub async fn build(self) -> Result<Planner> {
        let student_id = self.student_id.ok_or_else(|| PlannerError::Configuration {
            message: "A student id is required".to_string(),
        })?;

        let (catalog, repository) = match (self.catalog, self.repository) {
            (Some(catalog), Some(repository)) => (catalog, repository),
            (catalog, repository) => {
                let base_url = self.base_url.ok_or_else(|| PlannerError::Configuration {
                    message: "A base URL is required unless accessors are injected".to_string(),
                })?;
                let client = Arc::new(RestClient::new(base_url)?);
                (
                    catalog.unwrap_or_else(|| client.clone() as Arc<dyn CatalogApi>),
                    repository.unwrap_or(client as Arc<dyn PlanApi>),
                )
            }
        };

        let mut planner = Planner::new(student_id, catalog, repository);
        planner.refresh().await?;
        Ok(planner)
    }
}
