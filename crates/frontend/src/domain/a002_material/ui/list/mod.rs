use crate::layout::global_context::use_app_context;
use crate::shared::icons::{icon, icon_sized};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_job::aggregate::recent_materials;
use contracts::domain::a002_material::aggregate::Material;
use contracts::shared::mock_data::{StockAlert, STOCK_ALERTS};
use contracts::shared::navigation::ViewType;
use leptos::prelude::*;
use thaw::*;

/// Сколько последних записей показывает RECENTLY USED
const RECENT_COUNT: usize = 5;

#[component]
#[allow(non_snake_case)]
pub fn MaterialList() -> impl IntoView {
    let ctx = use_app_context();

    let recent = move || {
        ctx.jobs.with(|jobs| {
            recent_materials(jobs, RECENT_COUNT)
                .into_iter()
                .cloned()
                .collect::<Vec<Material>>()
        })
    };

    view! {
        <PageFrame page_id="a002_material--list" category=PAGE_CAT_LIST>
            <div class="inventory-hero">
                <div class="inventory-hero__text">
                    <h2 class="page__title">"INVENTORY SYSTEMS"</h2>
                    <p>
                        "Scan parts directly from your phone camera or via Vision Link glasses. Barcodes are automatically tracked."
                    </p>
                </div>
                <div class="inventory-hero__actions">
                    <button class="btn btn--primary" title="Open the material form from a job card">
                        {icon("scan")}
                        " LAUNCH SCANNER"
                    </button>
                    <button class="btn btn--secondary" on:click=move |_| ctx.set_view(ViewType::VisionLink)>
                        {icon("eye")}
                        " VISION HUB (AR)"
                    </button>
                </div>
            </div>

            <div class="inventory-grid">
                <section class="panel">
                    <div class="panel__header">
                        <h3>"RECENTLY USED"</h3>
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>"LAST 5 ENTRIES"</Badge>
                    </div>
                    <Show
                        when=move || !recent().is_empty()
                        fallback=|| view! {
                            <div class="empty-state">
                                {icon_sized("package", 40)}
                                <p>"No materials logged today"</p>
                            </div>
                        }
                    >
                        <div class="recent-list">
                            {move || recent().into_iter().map(|m| view! { <RecentRow material=m /> }).collect_view()}
                        </div>
                    </Show>
                </section>

                <section class="panel">
                    <div class="panel__header">
                        <h3>"STOCK INTELLIGENCE"</h3>
                    </div>
                    <div class="alert-list">
                        {STOCK_ALERTS.into_iter().map(|alert| view! { <StockAlertCard alert=alert /> }).collect_view()}
                    </div>
                </section>
            </div>
        </PageFrame>
    }
}

#[component]
fn RecentRow(material: Material) -> impl IntoView {
    view! {
        <div class="recent-row">
            <div class="recent-row__icon">{icon("box")}</div>
            <div class="recent-row__body">
                <p class="recent-row__name">{material.name.clone()}</p>
                <p class="recent-row__meta">
                    {material.price_label()}
                    {material.barcode.clone().map(|code| view! {
                        <span class="recent-row__barcode">{icon_sized("barcode", 10)}" "{code}</span>
                    })}
                </p>
            </div>
            <div class="recent-row__qty">
                <p>{format!("{}{}", material.quantity, material.unit_label())}</p>
                <span>"Recorded"</span>
            </div>
        </div>
    }
}

#[component]
fn StockAlertCard(alert: StockAlert) -> impl IntoView {
    view! {
        <div class=format!("stock-alert stock-alert--{}", alert.tone)>
            <div class="stock-alert__icon">{icon(alert.icon)}</div>
            <div>
                <p class="stock-alert__title">{alert.title}</p>
                <p class="stock-alert__body">{alert.body}</p>
            </div>
        </div>
    }
}
