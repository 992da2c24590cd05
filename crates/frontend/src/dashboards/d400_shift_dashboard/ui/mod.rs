mod dashboard;

pub use dashboard::ShiftDashboard;
