//! REST implementation of the accessor traits.

use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::{
    group_plan_rows, CreditLimitResponse, CreditsSummaryRow, GpaResponse, PlanRow,
};
use super::{CatalogApi, PlanApi};
use crate::error::{HttpResultExt, PlannerError, Result};
use crate::models::{CourseCategory, CourseRef, SemesterRecord};
use crate::params::{CourseRecordCreate, CourseRecordPatch};
use crate::report::ReportData;

/// HTTP client for the remote academic-records API.
///
/// Cheap to clone; the underlying `reqwest::Client` is a shared handle.
#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
    http: reqwest::Client,
}

impl RestClient {
    /// Create a client rooted at `base_url` (with or without a trailing
    /// slash).
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| PlannerError::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET a JSON body, mapping non-success statuses to `PlannerError::Api`.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!("GET {path}");
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .http_context("request failed")?;
        Self::into_json(response).await
    }

    /// GET a JSON body, treating 404 as an absent value rather than an error.
    async fn get_json_opt<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        debug!("GET {path}");
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .http_context("request failed")?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::into_json(response).await.map(Some)
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<()> {
        debug!("{method} {path}");
        let mut request = self.http.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.http_context("request failed")?;
        Self::check_status(response).await.map(|_| ())
    }

    async fn into_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let response = Self::check_status(response).await?;
        response
            .json::<T>()
            .await
            .http_context("failed to decode response body")
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(PlannerError::api(status.as_u16(), message))
    }
}

#[async_trait]
impl CatalogApi for RestClient {
    async fn course_pool(
        &self,
        category: CourseCategory,
        student_id: &str,
    ) -> Result<Vec<CourseRef>> {
        self.get_json(&format!(
            "courses?category={}&student_id={student_id}",
            category.as_str()
        ))
        .await
    }

    async fn credit_map(&self) -> Result<HashMap<String, u32>> {
        self.get_json("courses/credit-hours").await
    }
}

#[async_trait]
impl PlanApi for RestClient {
    async fn student_plan(&self, student_id: &str) -> Result<Vec<SemesterRecord>> {
        let rows: Vec<PlanRow> = self.get_json(&format!("students/{student_id}/plan")).await?;
        Ok(group_plan_rows(rows))
    }

    async fn semester_gpa(&self, student_id: &str, semester: u32) -> Result<Option<String>> {
        let response: Option<GpaResponse> = self
            .get_json_opt(&format!("students/{student_id}/semesters/{semester}/gpa"))
            .await?;
        Ok(response.map(|r| r.gpa))
    }

    async fn semester_credit_limit(
        &self,
        student_id: &str,
        semester: u32,
    ) -> Result<Option<u32>> {
        let response: Option<CreditLimitResponse> = self
            .get_json_opt(&format!(
                "students/{student_id}/semesters/{semester}/credit-limit"
            ))
            .await?;
        Ok(response.map(|r| r.max_limit))
    }

    async fn semester_credits_summary(&self, student_id: &str) -> Result<HashMap<u32, u32>> {
        let rows: Vec<CreditsSummaryRow> = self
            .get_json(&format!("students/{student_id}/credits"))
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| (row.semester_number, row.total_credits))
            .collect())
    }

    async fn add_course_record(&self, record: &CourseRecordCreate) -> Result<()> {
        self.send_json(reqwest::Method::POST, "course-records", Some(record))
            .await
    }

    async fn update_course_record(
        &self,
        student_id: &str,
        course_code: &str,
        semester: u32,
        patch: &CourseRecordPatch,
    ) -> Result<()> {
        self.send_json(
            reqwest::Method::PUT,
            &format!("students/{student_id}/semesters/{semester}/courses/{course_code}"),
            Some(patch),
        )
        .await
    }

    async fn delete_course_record(
        &self,
        student_id: &str,
        course_code: &str,
        semester: u32,
    ) -> Result<()> {
        self.send_json::<()>(
            reqwest::Method::DELETE,
            &format!("students/{student_id}/semesters/{semester}/courses/{course_code}"),
            None,
        )
        .await
    }

    async fn delete_semester(&self, student_id: &str, semester: u32) -> Result<()> {
        self.send_json::<()>(
            reqwest::Method::DELETE,
            &format!("students/{student_id}/semesters/{semester}"),
            None,
        )
        .await
    }

    async fn report_data(&self, student_id: &str) -> Result<ReportData> {
        self.get_json(&format!("students/{student_id}/report")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let client = RestClient::new("http://localhost:8080/api/").unwrap();
        assert_eq!(
            client.url("students/1/plan"),
            "http://localhost:8080/api/students/1/plan"
        );
        let client = RestClient::new("http://localhost:8080/api").unwrap();
        assert_eq!(
            client.url("/students/1/plan"),
            "http://localhost:8080/api/students/1/plan"
        );
    }
}
