use crate::layout::global_context::use_app_context;
use crate::shared::icons::{icon, icon_sized};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::domain::a001_job::aggregate::{upcoming_jobs, Job};
use contracts::shared::mock_data::{DashboardStat, DASHBOARD_STATS};
use contracts::shared::navigation::ViewType;
use leptos::prelude::*;

/// Сколько ближайших работ показывает дашборд
const UPCOMING_LIMIT: usize = 3;

/// Дашборд смены: таймер, статистика, ближайшие работы
#[component]
pub fn ShiftDashboard() -> impl IntoView {
    view! {
        <PageFrame page_id="d400_shift_dashboard--dashboard" category=PAGE_CAT_DASHBOARD>
            <TimerCard />

            <div class="stat-grid">
                {DASHBOARD_STATS.into_iter().map(|stat| view! { <StatCard stat=stat /> }).collect_view()}
            </div>

            <UpcomingJobs />
        </PageFrame>
    }
}

#[component]
fn TimerCard() -> impl IntoView {
    let ctx = use_app_context();
    let running = move || ctx.is_timer_running();

    view! {
        <div class="timer-card" class:timer-card--active=running>
            <div class="timer-card__readout">
                <h2 class="timer-card__status">{move || ctx.clock.with(|c| c.status_label())}</h2>
                <div class="timer-card__time">{move || ctx.clock.with(|c| c.display())}</div>
                {move || {
                    ctx.active_job_title().map(|title| {
                        view! {
                            <p class="timer-card__job">
                                <span class="timer-card__job-label">"ON JOB:"</span>
                                " "
                                {title}
                            </p>
                        }
                    })
                }}
            </div>

            <div class="timer-card__actions">
                <button class="btn btn--vision" on:click=move |_| ctx.set_view(ViewType::VisionLink)>
                    {icon("eye")}
                    " VISION HUB"
                </button>
                <button
                    class="btn btn--timer"
                    class:btn--timer-stop=running
                    on:click=move |_| ctx.toggle_timer()
                >
                    {move || {
                        if running() {
                            view! { {icon("square")} " STOP SESSION" }.into_any()
                        } else {
                            view! { {icon("play")} " START SHIFT" }.into_any()
                        }
                    }}
                </button>
            </div>
        </div>
    }
}

#[component]
fn StatCard(stat: DashboardStat) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__head">
                <span class=format!("stat-card__icon tone--{}", stat.tone)>{icon_sized(stat.icon, 24)}</span>
                <span class="stat-card__label">{stat.label}</span>
            </div>
            <div class="stat-card__value">{stat.value}</div>
            <div class=format!("stat-card__note tone--{}", stat.tone)>{stat.note}</div>
        </div>
    }
}

#[component]
fn UpcomingJobs() -> impl IntoView {
    let ctx = use_app_context();

    let upcoming = move || {
        ctx.jobs.with(|jobs| {
            upcoming_jobs(jobs, UPCOMING_LIMIT)
                .into_iter()
                .cloned()
                .collect::<Vec<Job>>()
        })
    };

    view! {
        <section class="upcoming">
            <div class="section-head">
                <h3 class="section-head__title">"UPCOMING JOBS"</h3>
                <button class="link-btn" on:click=move |_| ctx.set_view(ViewType::Jobs)>
                    "VIEW ALL"
                </button>
            </div>

            <div class="upcoming__list">
                <For each=upcoming key=|job| (job.id.clone(), job.status) let:job>
                    {{
                        let id = job.id.clone();
                        let is_active = job.is_active();
                        view! {
                            <div class="upcoming-row">
                                <div class="upcoming-row__main">
                                    <div class="upcoming-row__badge" class:upcoming-row__badge--active=is_active>
                                        {icon_sized("zap", 24)}
                                    </div>
                                    <div>
                                        <h4 class="upcoming-row__title">{job.title.clone()}</h4>
                                        <p class="upcoming-row__address">
                                            {icon_sized("map-pin", 10)}
                                            " "
                                            {job.address.clone()}
                                        </p>
                                    </div>
                                </div>
                                <div class="upcoming-row__actions">
                                    <span class="status-pill" class:status-pill--active=is_active>
                                        {job.status.as_str()}
                                    </span>
                                    <button
                                        class="icon-btn"
                                        title="Start job"
                                        on:click=move |_| ctx.start_job(&id)
                                    >
                                        {icon("chevron-right")}
                                    </button>
                                </div>
                            </div>
                        }
                    }}
                </For>
            </div>
        </section>
    }
}
