use serde::{Deserialize, Serialize};

const BARCODE_PREFIX: &str = "50";
const BARCODE_BODY_MIN: f64 = 1_000_000_000.0;
const BARCODE_BODY_SPAN: f64 = 9_000_000_000.0;
const BARCODE_BODY_MAX: u64 = 9_999_999_999;

/// Сфабриковать штрихкод из случайного числа `r` в диапазоне `[0, 1)`
///
/// Результат всегда 12 символов: `"50"` + десятизначное тело.
pub fn fabricate_barcode(r: f64) -> String {
    let r = if r.is_finite() { r.clamp(0.0, 1.0) } else { 0.0 };
    let body = ((BARCODE_BODY_MIN + r * BARCODE_BODY_SPAN).floor() as u64).min(BARCODE_BODY_MAX);
    format!("{}{}", BARCODE_PREFIX, body)
}

/// Фаза имитации скана
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScanPhase {
    #[default]
    Idle,
    Scanning,
    Succeeded,
}

/// Состояние скана с номером попытки
///
/// Каждый `begin`/`reset` увеличивает `generation`; отложенные `complete` и
/// `clear` от прежних попыток игнорируются.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanState {
    pub phase: ScanPhase,
    pub generation: u64,
}

impl ScanState {
    pub fn is_scanning(&self) -> bool {
        self.phase == ScanPhase::Scanning
    }

    pub fn is_succeeded(&self) -> bool {
        self.phase == ScanPhase::Succeeded
    }

    /// Начать скан. Возвращает номер попытки для отложенных шагов.
    pub fn begin(&mut self) -> Option<u64> {
        if self.is_scanning() {
            return None;
        }
        self.generation += 1;
        self.phase = ScanPhase::Scanning;
        Some(self.generation)
    }

    /// Скан завершён. false, если попытка устарела.
    pub fn complete(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.is_scanning() {
            return false;
        }
        self.phase = ScanPhase::Succeeded;
        true
    }

    /// Погасить индикатор успеха
    pub fn clear(&mut self, generation: u64) {
        if generation == self.generation && self.is_succeeded() {
            self.phase = ScanPhase::Idle;
        }
    }

    /// Сброс при открытии/закрытии формы
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = ScanPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fabricate_barcode_shape() {
        for r in [0.0, 0.123456, 0.5, 0.999_999_999, 1.0 - f64::EPSILON] {
            let code = fabricate_barcode(r);
            assert_eq!(code.len(), 12, "{code}");
            assert!(code.starts_with("50"));
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
        assert_eq!(fabricate_barcode(0.0), "501000000000");
        assert_eq!(fabricate_barcode(0.5), "505500000000");
    }

    #[test]
    fn test_fabricate_barcode_out_of_range_input() {
        assert_eq!(fabricate_barcode(-3.0), "501000000000");
        assert_eq!(fabricate_barcode(f64::NAN), "501000000000");
        assert_eq!(fabricate_barcode(7.0), "509999999999");
    }

    #[test]
    fn test_scan_lifecycle() {
        let mut scan = ScanState::default();
        let gen = scan.begin().unwrap();
        assert!(scan.is_scanning());
        assert_eq!(scan.begin(), None);

        assert!(scan.complete(gen));
        assert!(scan.is_succeeded());

        scan.clear(gen);
        assert_eq!(scan.phase, ScanPhase::Idle);
    }

    #[test]
    fn test_stale_clear_does_not_hide_newer_success() {
        let mut scan = ScanState::default();
        let first = scan.begin().unwrap();
        scan.complete(first);

        let second = scan.begin().unwrap();
        scan.clear(first);
        assert!(scan.is_scanning());

        assert!(scan.complete(second));
        scan.clear(first);
        assert!(scan.is_succeeded());
    }

    #[test]
    fn test_reset_drops_in_flight_scan() {
        let mut scan = ScanState::default();
        let gen = scan.begin().unwrap();
        scan.reset();
        assert!(!scan.complete(gen));
        assert_eq!(scan.phase, ScanPhase::Idle);
    }
}
