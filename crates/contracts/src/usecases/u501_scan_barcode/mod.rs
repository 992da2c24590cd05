pub mod phase;

pub use phase::{fabricate_barcode, ScanPhase, ScanState};

use crate::usecases::common::UseCaseMetadata;

/// Задержка имитации распознавания в форме материалов
pub const SCAN_DELAY_MS: u32 = 1200;

/// Через сколько гаснет индикатор успешного скана
pub const SCAN_SUCCESS_CLEAR_MS: u32 = 2000;

pub struct ScanBarcode;

impl UseCaseMetadata for ScanBarcode {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "scan_barcode"
    }

    fn display_name() -> &'static str {
        "Initiate Vision Scan"
    }

    fn description() -> &'static str {
        "Simulated barcode recognition: after a fixed delay a random EAN-style code is written into the material form"
    }
}
