use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a001_job::aggregate::JobId;
use contracts::domain::a002_material::aggregate::{MarginEstimate, MaterialForm, MaterialId};
use contracts::usecases::u501_scan_barcode::{
    fabricate_barcode, ScanState, SCAN_DELAY_MS, SCAN_SUCCESS_CLEAR_MS,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel формы материалов
///
/// Поля формы лежат в `MaterialForm` как есть (сырые строки ввода),
/// view обновляет их через `form.update()`.
#[derive(Clone, Copy)]
pub struct MaterialDetailsViewModel {
    pub form: RwSignal<MaterialForm>,
    pub scan: RwSignal<ScanState>,
    pub error: RwSignal<Option<String>>,
}

impl MaterialDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(MaterialForm::default()),
            scan: RwSignal::new(ScanState::default()),
            error: RwSignal::new(None),
        }
    }

    /// Сброс формы и текущего скана
    pub fn reset(&self) {
        self.form.set(MaterialForm::default());
        self.scan.update(|scan| scan.reset());
        self.error.set(None);
    }

    pub fn total_quantity(&self) -> f64 {
        self.form.with(|f| f.total_quantity())
    }

    pub fn margin(&self) -> Option<MarginEstimate> {
        self.form.with(|f| f.margin())
    }

    /// Имитация скана: через SCAN_DELAY_MS в поле barcode появляется код
    ///
    /// Окно могли закрыть, пока таймер ждёт: сигналы к этому моменту
    /// уже освобождены, поэтому только `try_update`.
    pub fn scan_command(&self) {
        let Some(generation) = self.scan.try_update(|scan| scan.begin()).flatten() else {
            return;
        };

        let scan = self.scan;
        let form = self.form;
        spawn_local(async move {
            TimeoutFuture::new(SCAN_DELAY_MS).await;
            let completed = scan
                .try_update(|s| s.complete(generation))
                .unwrap_or(false);
            if !completed {
                return;
            }

            let code = fabricate_barcode(js_sys::Math::random());
            log::debug!("scan #{}: {}", generation, code);
            form.try_update(|f| *f = std::mem::take(f).with_barcode(code));

            TimeoutFuture::new(SCAN_SUCCESS_CLEAR_MS).await;
            scan.try_update(|s| s.clear(generation));
        });
    }

    /// RECORD TO JOB LEDGER
    pub fn submit_command(&self, ctx: AppGlobalContext, job_id: &JobId, on_recorded: Callback<()>) {
        let current = self.form.get_untracked();
        let material = match current.to_material(MaterialId::generate()) {
            Ok(material) => material,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        if ctx.add_material(job_id, material) {
            self.reset();
            on_recorded.run(());
        } else {
            self.error
                .set(Some(format!("Job {} no longer exists", job_id.value())));
        }
    }
}

impl Default for MaterialDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
