use contracts::domain::a001_job::aggregate::{self as job, Job, JobFilter, JobId};
use contracts::domain::a002_material::aggregate::Material;
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::shared::mock_data::mock_jobs;
use contracts::shared::navigation::ViewType;
use contracts::shared::time_tracking::{ShiftClock, TICK_INTERVAL_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Состояние приложения, общее для всех экранов
///
/// Всё хранится в памяти браузера; перезагрузка страницы возвращает демо-данные.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_view: RwSignal<ViewType>,
    pub jobs: RwSignal<Vec<Job>>,
    pub job_filter: RwSignal<JobFilter>,
    pub job_query: RwSignal<String>,
    pub clock: RwSignal<ShiftClock>,
    /// Работа, для которой открыта форма LOG MATERIALS
    pub material_target: RwSignal<Option<JobId>>,
    ticker_generation: StoredValue<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_view: RwSignal::new(ViewType::default()),
            jobs: RwSignal::new(mock_jobs()),
            job_filter: RwSignal::new(JobFilter::default()),
            job_query: RwSignal::new(String::new()),
            clock: RwSignal::new(ShiftClock::default()),
            material_target: RwSignal::new(None),
            ticker_generation: StoredValue::new(0),
        }
    }

    pub fn set_view(&self, view: ViewType) {
        log::debug!("view: {}", view.as_str());
        self.active_view.set(view);
    }

    pub fn toggle_timer(&self) {
        self.clock.update(|clock| clock.toggle());
    }

    pub fn is_timer_running(&self) -> bool {
        self.clock.with(|clock| clock.running)
    }

    /// Запуск работы: статус active + таймер смены
    pub fn start_job(&self, id: &JobId) {
        let mut found = false;
        self.jobs.update(|jobs| found = job::start_job(jobs, id));
        if !found {
            log::warn!("start_job: unknown job {}", id.value());
            return;
        }
        self.clock.update(|clock| clock.start_job(id.clone()));
    }

    /// Название работы, на которой идёт таймер
    pub fn active_job_title(&self) -> Option<String> {
        let active = self.clock.with(|clock| clock.active_job.clone())?;
        self.jobs
            .with(|jobs| job::find_job(jobs, &active).map(|j| j.title.clone()))
    }

    pub fn open_material_modal(&self, id: JobId) {
        self.material_target.set(Some(id));
    }

    pub fn close_material_modal(&self) {
        self.material_target.set(None);
    }

    /// Записать материал в выбранную работу
    pub fn add_material(&self, id: &JobId, material: Material) -> bool {
        let mut added = false;
        self.jobs
            .update(|jobs| added = job::add_material(jobs, id, material));
        if added {
            log::info!("{} logged to {}", Material::element_name(), id.as_string());
        }
        added
    }

    /// Тик таймера раз в секунду, пока смена запущена
    ///
    /// Каждый запуск/остановка увеличивает номер поколения; цикл прежнего
    /// поколения завершается на следующем пробуждении, поэтому после
    /// stop/start тики не удваиваются.
    pub fn run_shift_ticker(&self) {
        let this = *self;
        let running = Memo::new(move |_| this.clock.with(|clock| clock.running));

        Effect::new(move |_| {
            let is_running = running.get();
            this.ticker_generation.update_value(|g| *g += 1);
            if !is_running {
                return;
            }

            let generation = this.ticker_generation.get_value();
            spawn_local(async move {
                loop {
                    TimeoutFuture::new(TICK_INTERVAL_MS).await;
                    if this.ticker_generation.try_get_value() != Some(generation) {
                        break;
                    }
                    this.clock.update(|clock| clock.tick());
                }
            });
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Контекст приложения (предоставляется в `App`)
pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
