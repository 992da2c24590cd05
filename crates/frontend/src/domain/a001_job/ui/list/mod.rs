//! Реестр работ: фильтр по статусу, поиск, карточки с материалами

use crate::domain::a002_material::ui::details::MaterialDetails;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::{icon, icon_sized};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_job::aggregate::{search_jobs, Job, JobFilter, JobStatus};
use contracts::domain::a002_material::aggregate::Material;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

/// Цвет бейджа статуса
fn status_color(status: JobStatus) -> BadgeColor {
    match status {
        JobStatus::Active => BadgeColor::Success,
        JobStatus::OnHold => BadgeColor::Warning,
        JobStatus::Completed => BadgeColor::Informative,
        JobStatus::Pending => BadgeColor::Subtle,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn JobList() -> impl IntoView {
    let ctx = use_app_context();

    let visible_jobs = move || {
        let filter = ctx.job_filter.get();
        let query = ctx.job_query.get();
        ctx.jobs.with(|jobs| {
            search_jobs(jobs, filter, &query)
                .into_iter()
                .cloned()
                .collect::<Vec<Job>>()
        })
    };

    view! {
        <PageFrame page_id="a001_job--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2 class="page__title">"JOB REGISTRY"</h2>
                <button class="btn btn--primary" title="Job creation is not available yet" disabled=true>
                    {icon("plus")}
                    " CREATE NEW JOB"
                </button>
            </div>

            <div class="filter-bar">
                <div class="filter-bar__label">
                    {icon_sized("filter", 14)}
                    <span>"Filter"</span>
                </div>
                {JobFilter::chips()
                    .into_iter()
                    .map(|chip| {
                        view! {
                            <button
                                class="filter-chip"
                                class:filter-chip--selected=move || ctx.job_filter.get() == chip
                                on:click=move |_| ctx.job_filter.set(chip)
                            >
                                {chip.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="search-box">
                {icon("search")}
                <input
                    type="text"
                    placeholder="SEARCH CLIENTS, ADDRESSES, OR IDS..."
                    prop:value=move || ctx.job_query.get()
                    on:input=move |ev| ctx.job_query.set(event_target_value(&ev))
                />
            </div>

            <div class="page__content job-list">
                <Show
                    when=move || !visible_jobs().is_empty()
                    fallback=|| view! {
                        <div class="empty-state">
                            {icon_sized("file-text", 48)}
                            <p>"No jobs found in this category"</p>
                        </div>
                    }
                >
                    <For
                        each=visible_jobs
                        key=|job| (job.id.clone(), job.status, job.materials.len())
                        let:job
                    >
                        <JobCard job=job />
                    </For>
                </Show>
            </div>

            {move || {
                ctx.material_target.get().map(|job_id| {
                    view! { <MaterialDetails job_id=job_id /> }
                })
            }}
        </PageFrame>
    }
}

#[component]
fn JobCard(job: Job) -> impl IntoView {
    let ctx = use_app_context();
    let job_id = job.id.clone();
    let materials = job.materials.clone();

    view! {
        <div class="job-card">
            <div class="job-card__head">
                <div>
                    <span class="job-card__ref">{format!("REF: {}", job.code())}</span>
                    <h3 class="job-card__title">{job.title.clone()}</h3>
                </div>
                <Badge appearance=BadgeAppearance::Tint color=status_color(job.status)>
                    {job.status.as_str()}
                </Badge>
            </div>

            <div class="job-card__facts">
                <div class="job-card__fact">
                    {icon("map-pin")}
                    <div>
                        <p class="job-card__fact-title">{job.client_name.clone()}</p>
                        <p>{job.address.clone()}</p>
                    </div>
                </div>
                <div class="job-card__fact">
                    {icon("clock")}
                    <div>
                        <p class="job-card__fact-title">"SCHEDULED"</p>
                        <p>{job.scheduled_label()}</p>
                    </div>
                </div>
            </div>

            {(!materials.is_empty()).then(|| {
                view! {
                    <div class="job-card__parts">
                        <p class="job-card__parts-title">{format!("Logged Parts ({})", materials.len())}</p>
                        <div class="job-card__chips">
                            {materials.iter().map(|m| view! { <MaterialChip material=m.clone() /> }).collect_view()}
                        </div>
                    </div>
                }
            })}

            <div class="job-card__actions">
                <button class="btn btn--secondary">"View Specs"</button>
                <button
                    class="btn btn--outline"
                    on:click=move |_| ctx.open_material_modal(job_id.clone())
                >
                    "Log Materials"
                </button>
            </div>
        </div>
    }
}

#[component]
fn MaterialChip(material: Material) -> impl IntoView {
    let total = material.total_quantity();

    view! {
        <span class="material-chip" title=material.hint()>
            {material.name.clone()}
            <span class="material-chip__qty">{material.quantity_label()}</span>
            {material.has_pack_total().then(|| view! {
                <span class="material-chip__total">{format!("({} TOTAL)", total)}</span>
            })}
            {material.barcode.clone().map(|code| view! {
                <span class="material-chip__barcode">{icon_sized("barcode", 8)}" "{code}</span>
            })}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_color_per_status() {
        assert!(matches!(status_color(JobStatus::Active), BadgeColor::Success));
        assert!(matches!(status_color(JobStatus::OnHold), BadgeColor::Warning));
        assert!(matches!(status_color(JobStatus::Completed), BadgeColor::Informative));
        assert!(matches!(status_color(JobStatus::Pending), BadgeColor::Subtle));
    }
}
