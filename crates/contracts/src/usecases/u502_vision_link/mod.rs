use crate::usecases::common::UseCaseMetadata;
use crate::usecases::u501_scan_barcode::ScanState;

/// Задержка ручного триггера в AR-хабе
pub const VISION_SCAN_DELAY_MS: u32 = 1500;

/// Деталь, которую "распознаёт" AR-хаб
pub const VISION_RECOGNIZED_PART: &str = "MK Logic 2-Gang Socket (Unit Cost: £4.20)";

/// Подсказка голосовой консоли
pub const VOICE_HINT: &str = "\"Log 10m 2.5mm T+E...\"";

pub struct VisionLink;

impl UseCaseMetadata for VisionLink {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "vision_link"
    }

    fn display_name() -> &'static str {
        "VISION LINK"
    }

    fn description() -> &'static str {
        "AR hub: rear camera preview with a manual trigger that recognises a part after a fixed delay"
    }
}

/// Состояние HUD: фаза скана и последняя распознанная деталь
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisionHud {
    pub scan: ScanState,
    pub last_scanned: Option<String>,
}

impl VisionHud {
    /// MANUAL TRIGGER
    pub fn trigger(&mut self) -> Option<u64> {
        self.scan.begin()
    }

    /// Завершение отложенного скана
    pub fn finish(&mut self, generation: u64) {
        if self.scan.complete(generation) {
            self.last_scanned = Some(VISION_RECOGNIZED_PART.to_string());
            self.scan.clear(generation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_then_finish_recognises_part() {
        let mut hud = VisionHud::default();
        assert!(hud.last_scanned.is_none());

        let gen = hud.trigger().unwrap();
        assert!(hud.scan.is_scanning());

        hud.finish(gen);
        assert!(!hud.scan.is_scanning());
        assert_eq!(hud.last_scanned.as_deref(), Some(VISION_RECOGNIZED_PART));
    }

    #[test]
    fn test_full_name() {
        assert_eq!(VisionLink::full_name(), "u502_vision_link");
    }
}
