//! Боковая навигация (desktop)

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::shared::branding::{APP_VERSION, COMPANY_NAME};
use contracts::shared::navigation::NAV_ITEMS;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <aside class="app-sidebar">
            <div class="app-sidebar__brand">
                <div class="brand-logo">"CE"</div>
                <div class="app-sidebar__brand-text">
                    <span class="app-sidebar__company">{COMPANY_NAME}</span>
                    <span class="app-sidebar__version">{APP_VERSION}</span>
                </div>
            </div>

            <nav class="app-sidebar__content">
                {NAV_ITEMS
                    .into_iter()
                    .map(|item| {
                        view! {
                            <button
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || ctx.active_view.get() == item.view
                                on:click=move |_| ctx.set_view(item.view)
                            >
                                {icon(item.icon)}
                                <span>{item.label}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="app-sidebar__operator">
                <div class="app-sidebar__avatar">{icon("user")}</div>
                <div class="app-sidebar__operator-text">
                    <span class="app-sidebar__operator-name">"S. CRAIK"</span>
                    <span class="app-sidebar__operator-role">"MASTER ADMIN"</span>
                </div>
            </div>
        </aside>
    }
}
