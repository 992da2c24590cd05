//! Учёт рабочего времени смены

use crate::domain::a001_job::aggregate::JobId;
use serde::{Deserialize, Serialize};

/// Интервал тика таймера смены
pub const TICK_INTERVAL_MS: u32 = 1000;

/// Форматирует секунды как `HH:MM:SS` (часы не сворачиваются через 24)
pub fn format_elapsed(seconds: u64) -> String {
    let hrs = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hrs, mins, secs)
}

/// Состояние таймера смены
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftClock {
    pub running: bool,
    pub elapsed_seconds: u64,
    pub active_job: Option<JobId>,
}

impl ShiftClock {
    /// START SHIFT / STOP SESSION. Накопленное время не сбрасывается.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Один тик; на остановленном таймере ничего не делает
    pub fn tick(&mut self) {
        if self.running {
            self.elapsed_seconds += 1;
        }
    }

    /// Начать работу: запомнить её и запустить таймер
    pub fn start_job(&mut self, id: JobId) {
        self.active_job = Some(id);
        self.running = true;
    }

    pub fn status_label(&self) -> &'static str {
        if self.running {
            "ACTIVE SESSION"
        } else {
            "SYSTEM READY"
        }
    }

    pub fn display(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(59), "00:00:59");
        assert_eq!(format_elapsed(61), "00:01:01");
        assert_eq!(format_elapsed(3600), "01:00:00");
        assert_eq!(format_elapsed(3 * 3600 + 25 * 60 + 7), "03:25:07");
        assert_eq!(format_elapsed(100 * 3600), "100:00:00");
    }

    #[test]
    fn test_tick_only_while_running() {
        let mut clock = ShiftClock::default();
        clock.tick();
        assert_eq!(clock.elapsed_seconds, 0);
        assert_eq!(clock.status_label(), "SYSTEM READY");

        clock.toggle();
        clock.tick();
        clock.tick();
        assert_eq!(clock.elapsed_seconds, 2);
        assert_eq!(clock.status_label(), "ACTIVE SESSION");

        clock.toggle();
        clock.tick();
        assert_eq!(clock.display(), "00:00:02");
    }

    #[test]
    fn test_start_job_starts_clock() {
        let mut clock = ShiftClock::default();
        clock.start_job(JobId::new("J-1025"));
        assert!(clock.running);
        assert_eq!(clock.active_job, Some(JobId::new("J-1025")));

        // повторный старт другой работы не останавливает таймер
        clock.tick();
        clock.start_job(JobId::new("J-1026"));
        assert!(clock.running);
        assert_eq!(clock.elapsed_seconds, 1);
    }
}
