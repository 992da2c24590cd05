//! Демо-данные, которыми засевается состояние при загрузке

use crate::domain::a001_job::aggregate::{Job, JobId, JobStatus};
use crate::domain::a002_material::aggregate::Material;
use chrono::NaiveDate;

/// Карточка статистики дашборда (статичные значения)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStat {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
    pub icon: &'static str,
    pub tone: &'static str,
}

pub const DASHBOARD_STATS: [DashboardStat; 3] = [
    DashboardStat {
        label: "EARNINGS TODAY",
        value: "£425.00",
        note: "+12% vs Average",
        icon: "trending-up",
        tone: "success",
    },
    DashboardStat {
        label: "TOTAL HOURS",
        value: "5.5H",
        note: "Target: 8.0H",
        icon: "clock",
        tone: "warning",
    },
    DashboardStat {
        label: "OPEN QUOTES",
        value: "£1.2K",
        note: "3 Proposals Pending",
        icon: "file-text",
        tone: "info",
    },
];

/// Уведомление блока STOCK INTELLIGENCE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockAlert {
    pub title: &'static str,
    pub body: &'static str,
    pub icon: &'static str,
    pub tone: &'static str,
}

pub const STOCK_ALERTS: [StockAlert; 2] = [
    StockAlert {
        title: "Low Stock Warning",
        body: "2.5mm Twin & Earth Reel (Only 1 left in van). AI-Vision suggested re-order from Edmundson.",
        icon: "alert-circle",
        tone: "warning",
    },
    StockAlert {
        title: "Pricing Alert",
        body: "Wholesale cost for Consumer Units has increased by 4% this month. Adjust quote margins accordingly.",
        icon: "trending-up",
        tone: "info",
    },
];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Стартовый реестр работ
pub fn mock_jobs() -> Vec<Job> {
    vec![
        Job {
            id: JobId::new("J-1024"),
            client_name: "Sarah Lawson".into(),
            address: "12 Ferry Rd, Montrose".into(),
            title: "Consumer Unit Upgrade".into(),
            status: JobStatus::Active,
            scheduled_date: date(2025, 5, 24),
            description: "Replace old fuse board with dual RCD 10-way board.".into(),
            materials: vec![Material::simple("M1", "Dual RCD Board", 1.0, 120.0)],
        },
        Job {
            id: JobId::new("J-1025"),
            client_name: "James Miller".into(),
            address: "Industrial Estate Unit 4".into(),
            title: "3-Phase Inspection".into(),
            status: JobStatus::Pending,
            scheduled_date: date(2025, 5, 24),
            description: "Periodic EICR for industrial machinery units.".into(),
            materials: vec![],
        },
        Job {
            id: JobId::new("J-1026"),
            client_name: "Hotel Central".into(),
            address: "High St, Montrose".into(),
            title: "Emergency Lighting".into(),
            status: JobStatus::OnHold,
            scheduled_date: date(2025, 5, 25),
            description: "Test and replace battery packs in corridor units.".into(),
            materials: vec![],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_jobs() {
        let jobs = mock_jobs();
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].materials.len(), 1);
        assert_eq!(jobs[0].scheduled_label(), "2025-05-24");
        assert_eq!(jobs[2].status, JobStatus::OnHold);
    }
}
