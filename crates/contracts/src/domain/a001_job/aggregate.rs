use crate::domain::a002_material::aggregate::Material;
use crate::domain::common::{AggregateId, AggregateRoot};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// ID работы (например, "J-1024")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

impl JobId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for JobId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Job ID cannot be empty".into());
        }
        Ok(Self(s.to_string()))
    }
}

/// Статус работы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    Pending,
    Active,
    OnHold,
    Completed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Active => "active",
            JobStatus::OnHold => "on-hold",
            JobStatus::Completed => "completed",
        }
    }

    /// Текст для бейджа и чипа фильтра ("on hold")
    pub fn label(&self) -> String {
        self.as_str().replace('-', " ")
    }
}

/// Фильтр реестра работ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobFilter {
    All,
    Status(JobStatus),
}

impl Default for JobFilter {
    fn default() -> Self {
        JobFilter::All
    }
}

impl JobFilter {
    /// Чипы фильтра в порядке отображения
    pub fn chips() -> [JobFilter; 5] {
        [
            JobFilter::All,
            JobFilter::Status(JobStatus::Active),
            JobFilter::Status(JobStatus::Pending),
            JobFilter::Status(JobStatus::OnHold),
            JobFilter::Status(JobStatus::Completed),
        ]
    }

    pub fn label(&self) -> String {
        match self {
            JobFilter::All => "all".to_string(),
            JobFilter::Status(status) => status.label(),
        }
    }

    pub fn matches(&self, job: &Job) -> bool {
        match self {
            JobFilter::All => true,
            JobFilter::Status(status) => job.status == *status,
        }
    }
}

/// Агрегат Job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub client_name: String,
    pub address: String,
    pub title: String,
    pub status: JobStatus,
    pub scheduled_date: NaiveDate,
    pub description: String,
    pub materials: Vec<Material>,
}

impl Job {
    pub fn is_active(&self) -> bool {
        self.status == JobStatus::Active
    }

    /// Дата выезда в формате `2025-05-24`
    pub fn scheduled_label(&self) -> String {
        self.scheduled_date.format("%Y-%m-%d").to_string()
    }

    /// Поиск по клиенту, адресу, ID и названию (без учёта регистра)
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [
            self.client_name.as_str(),
            self.address.as_str(),
            self.id.value(),
            self.title.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
    }
}

impl AggregateRoot for Job {
    type Id = JobId;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }

    fn code(&self) -> &str {
        self.id.value()
    }

    fn description(&self) -> &str {
        &self.title
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "job"
    }

    fn element_name() -> &'static str {
        "Job"
    }

    fn list_name() -> &'static str {
        "Job Registry"
    }
}

// ============================================================================
// Операции над реестром работ
// ============================================================================

/// Работы, подходящие под фильтр статуса (порядок сохраняется)
pub fn filter_jobs(jobs: &[Job], filter: JobFilter) -> Vec<&Job> {
    jobs.iter().filter(|job| filter.matches(job)).collect()
}

/// Фильтр статуса + строка поиска
pub fn search_jobs<'a>(jobs: &'a [Job], filter: JobFilter, query: &str) -> Vec<&'a Job> {
    jobs.iter()
        .filter(|job| filter.matches(job) && job.matches_query(query))
        .collect()
}

/// Ближайшие незавершённые работы для дашборда
pub fn upcoming_jobs(jobs: &[Job], limit: usize) -> Vec<&Job> {
    jobs.iter()
        .filter(|job| job.status != JobStatus::Completed)
        .take(limit)
        .collect()
}

/// Перевести работу в статус active. Возвращает false, если ID не найден.
pub fn start_job(jobs: &mut [Job], id: &JobId) -> bool {
    match jobs.iter_mut().find(|job| &job.id == id) {
        Some(job) => {
            job.status = JobStatus::Active;
            true
        }
        None => false,
    }
}

/// Добавить материал к работе. Возвращает false, если ID не найден.
pub fn add_material(jobs: &mut [Job], id: &JobId, material: Material) -> bool {
    match jobs.iter_mut().find(|job| &job.id == id) {
        Some(job) => {
            job.materials.push(material);
            true
        }
        None => false,
    }
}

/// Последние `count` записанных материалов, самые свежие первыми
pub fn recent_materials(jobs: &[Job], count: usize) -> Vec<&Material> {
    let all: Vec<&Material> = jobs.iter().flat_map(|job| job.materials.iter()).collect();
    let skip = all.len().saturating_sub(count);
    all.into_iter().skip(skip).rev().collect()
}

/// Найти работу по ID
pub fn find_job<'a>(jobs: &'a [Job], id: &JobId) -> Option<&'a Job> {
    jobs.iter().find(|job| &job.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::mock_data::mock_jobs;

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&JobStatus::OnHold).unwrap(),
            "\"on-hold\""
        );
        assert_eq!(JobStatus::OnHold.label(), "on hold");
    }

    #[test]
    fn test_filter_jobs() {
        let jobs = mock_jobs();
        assert_eq!(filter_jobs(&jobs, JobFilter::All).len(), 3);

        let active = filter_jobs(&jobs, JobFilter::Status(JobStatus::Active));
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id.value(), "J-1024");

        assert!(filter_jobs(&jobs, JobFilter::Status(JobStatus::Completed)).is_empty());
    }

    #[test]
    fn test_filter_chips_order() {
        let labels: Vec<String> = JobFilter::chips().iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["all", "active", "pending", "on hold", "completed"]);
    }

    #[test]
    fn test_search_jobs() {
        let jobs = mock_jobs();
        let hits = search_jobs(&jobs, JobFilter::All, "montrose");
        assert_eq!(hits.len(), 2);

        let hits = search_jobs(&jobs, JobFilter::All, "j-1025");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].client_name, "James Miller");

        assert_eq!(search_jobs(&jobs, JobFilter::All, "   ").len(), 3);
        assert!(search_jobs(&jobs, JobFilter::Status(JobStatus::Pending), "hotel").is_empty());
    }

    #[test]
    fn test_upcoming_jobs_skips_completed() {
        let mut jobs = mock_jobs();
        jobs[0].status = JobStatus::Completed;
        let upcoming = upcoming_jobs(&jobs, 3);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].id.value(), "J-1025");

        assert_eq!(upcoming_jobs(&mock_jobs(), 1).len(), 1);
    }

    #[test]
    fn test_start_job() {
        let mut jobs = mock_jobs();
        assert!(start_job(&mut jobs, &JobId::new("J-1025")));
        assert!(jobs[1].is_active());
        assert!(!start_job(&mut jobs, &JobId::new("J-9999")));
    }

    #[test]
    fn test_add_material_and_recent() {
        let mut jobs = mock_jobs();
        for i in 0..6 {
            let m = Material::simple(&format!("X{i}"), &format!("Part {i}"), 1.0, 1.0);
            assert!(add_material(&mut jobs, &JobId::new("J-1026"), m));
        }
        assert!(!add_material(
            &mut jobs,
            &JobId::new("missing"),
            Material::simple("Y", "Y", 1.0, 1.0)
        ));

        let recent = recent_materials(&jobs, 5);
        let ids: Vec<&str> = recent.iter().map(|m| m.id.value()).collect();
        assert_eq!(ids, vec!["X5", "X4", "X3", "X2", "X1"]);
    }

    #[test]
    fn test_recent_materials_short_list() {
        let jobs = mock_jobs();
        let recent = recent_materials(&jobs, 5);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].name, "Dual RCD Board");
    }

    #[test]
    fn test_job_json_shape() {
        let jobs = mock_jobs();
        let json = serde_json::to_value(&jobs[0]).unwrap();
        assert_eq!(json["clientName"], "Sarah Lawson");
        assert_eq!(json["scheduledDate"], "2025-05-24");
        assert_eq!(json["status"], "active");
        assert_eq!(json["materials"][0]["unitPrice"], 120.0);
    }

    #[test]
    fn test_aggregate_naming() {
        assert_eq!(Job::full_name(), "a001_job");
        assert_eq!(Material::full_name(), "a002_material");

        let jobs = mock_jobs();
        assert_eq!(jobs[0].code(), "J-1024");
        assert_eq!(jobs[0].id().as_string(), "J-1024");
    }

    #[test]
    fn test_job_id_from_string() {
        assert_eq!(JobId::from_string("  J-1025 ").unwrap(), JobId::new("J-1025"));
        assert!(JobId::from_string("   ").is_err());
    }
}
