use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use compass_core::{
    CatalogApi, CourseCategory, CourseRecordCreate, CourseRecordPatch, CourseRef, PlanApi,
    Planner, PlannerBuilder, PlannerError, RawPrerequisite, ReportData, Result, SavedCourse,
    SemesterRecord, SemesterStatus,
};

/// In-memory stand-in for the remote system.
///
/// Mutations are applied to the held plan so a post-save refetch observes
/// them, and every remote call is appended to `calls` so tests can assert
/// ordering. Setting `fail_on` to a logged call string makes that call fail.
#[derive(Default)]
pub struct MockApi {
    pub pool: Mutex<Vec<CourseRef>>,
    pub credit_map: Mutex<HashMap<String, u32>>,
    pub semesters: Mutex<Vec<SemesterRecord>>,
    pub gpas: Mutex<HashMap<u32, String>>,
    pub credit_limits: Mutex<HashMap<u32, u32>>,
    pub calls: Mutex<Vec<String>>,
    pub fail_on: Mutex<Option<String>>,
}

impl MockApi {
    pub fn seed_course(&self, code: &str, credits: u32, prerequisite: Option<&str>) {
        self.pool.lock().unwrap().push(CourseRef {
            code: code.to_string(),
            name: format!("Course {code}"),
            credit_hours: credits,
            prerequisite: prerequisite.map(|p| RawPrerequisite::Code(p.to_string())),
        });
        self.credit_map
            .lock()
            .unwrap()
            .insert(code.to_string(), credits);
    }

    pub fn seed_semester(
        &self,
        number: u32,
        status: SemesterStatus,
        gpa: Option<&str>,
        courses: &[(&str, &str)],
    ) {
        self.semesters.lock().unwrap().push(SemesterRecord {
            number,
            status,
            courses: courses
                .iter()
                .map(|(code, grade)| SavedCourse {
                    course_code: (*code).to_string(),
                    course_name: format!("Course {code}"),
                    grade: (*grade).to_string(),
                    prerequisite: None,
                })
                .collect(),
            gpa: None,
            total_credits: None,
        });
        if let Some(gpa) = gpa {
            self.gpas.lock().unwrap().insert(number, gpa.to_string());
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<()> {
        let should_fail = self.fail_on.lock().unwrap().as_deref() == Some(call.as_str());
        self.calls.lock().unwrap().push(call.clone());
        if should_fail {
            return Err(PlannerError::api(500, format!("injected failure on {call}")));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogApi for MockApi {
    async fn course_pool(
        &self,
        _category: CourseCategory,
        _student_id: &str,
    ) -> Result<Vec<CourseRef>> {
        Ok(self.pool.lock().unwrap().clone())
    }

    async fn credit_map(&self) -> Result<HashMap<String, u32>> {
        Ok(self.credit_map.lock().unwrap().clone())
    }
}

#[async_trait]
impl PlanApi for MockApi {
    async fn student_plan(&self, _student_id: &str) -> Result<Vec<SemesterRecord>> {
        let mut plan = self.semesters.lock().unwrap().clone();
        plan.sort_by_key(|r| r.number);
        Ok(plan)
    }

    async fn semester_gpa(&self, _student_id: &str, semester: u32) -> Result<Option<String>> {
        Ok(self.gpas.lock().unwrap().get(&semester).cloned())
    }

    async fn semester_credit_limit(
        &self,
        _student_id: &str,
        semester: u32,
    ) -> Result<Option<u32>> {
        self.record(format!("credit-limit {semester}"))?;
        Ok(self.credit_limits.lock().unwrap().get(&semester).copied())
    }

    async fn semester_credits_summary(&self, _student_id: &str) -> Result<HashMap<u32, u32>> {
        let credit_map = self.credit_map.lock().unwrap();
        let summary = self
            .semesters
            .lock()
            .unwrap()
            .iter()
            .map(|record| {
                let total = record
                    .courses
                    .iter()
                    .map(|c| credit_map.get(&c.course_code).copied().unwrap_or(3))
                    .sum();
                (record.number, total)
            })
            .collect();
        Ok(summary)
    }

    async fn add_course_record(&self, record: &CourseRecordCreate) -> Result<()> {
        self.record(format!("add {}", record.course_code))?;
        let prerequisite = self
            .pool
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.code == record.course_code)
            .and_then(|c| c.prerequisite.clone());
        let mut semesters = self.semesters.lock().unwrap();
        let status: SemesterStatus = record.status.parse().unwrap_or_default();
        if semesters.iter().all(|r| r.number != record.semester_number) {
            semesters.push(SemesterRecord {
                number: record.semester_number,
                status,
                courses: vec![],
                gpa: None,
                total_credits: None,
            });
        }
        let semester = semesters
            .iter_mut()
            .find(|r| r.number == record.semester_number)
            .unwrap();
        semester.status = status;
        semester.courses.push(SavedCourse {
            course_code: record.course_code.clone(),
            course_name: format!("Course {}", record.course_code),
            grade: record.grade.clone(),
            prerequisite,
        });
        Ok(())
    }

    async fn update_course_record(
        &self,
        _student_id: &str,
        course_code: &str,
        semester: u32,
        patch: &CourseRecordPatch,
    ) -> Result<()> {
        self.record(format!("update {course_code}"))?;
        let mut semesters = self.semesters.lock().unwrap();
        if let Some(record) = semesters.iter_mut().find(|r| r.number == semester) {
            record.status = patch.status.parse().unwrap_or_default();
            if let Some(course) = record
                .courses
                .iter_mut()
                .find(|c| c.course_code == course_code)
            {
                course.grade = patch.grade.clone();
            }
        }
        Ok(())
    }

    async fn delete_course_record(
        &self,
        _student_id: &str,
        course_code: &str,
        semester: u32,
    ) -> Result<()> {
        self.record(format!("delete {course_code}"))?;
        let mut semesters = self.semesters.lock().unwrap();
        if let Some(record) = semesters.iter_mut().find(|r| r.number == semester) {
            record.courses.retain(|c| c.course_code != course_code);
        }
        semesters.retain(|r| !r.courses.is_empty());
        Ok(())
    }

    async fn delete_semester(&self, _student_id: &str, semester: u32) -> Result<()> {
        self.record(format!("delete-semester {semester}"))?;
        self.semesters.lock().unwrap().retain(|r| r.number != semester);
        Ok(())
    }

    async fn report_data(&self, student_id: &str) -> Result<ReportData> {
        self.record("report".to_string())?;
        Ok(ReportData {
            student_id: student_id.to_string(),
            student_name: Some("Test Student".to_string()),
            semesters: self.semesters.lock().unwrap().clone(),
            cumulative_gpa: Some("3.10".to_string()),
        })
    }
}

/// Helper function to create a test planner backed by the mock.
pub async fn create_test_planner(api: Arc<MockApi>) -> Planner {
    PlannerBuilder::new()
        .with_student_id("20210042")
        .with_catalog(api.clone())
        .with_repository(api)
        .build()
        .await
        .expect("Failed to create planner")
}
