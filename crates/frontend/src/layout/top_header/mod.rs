//! Верхняя панель: бренд на мобильных, индикатор записи времени, уведомления

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let is_recording = move || ctx.is_timer_running();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <div class="brand-logo brand-logo--small">"CE"</div>
                <span class="top-header__title">"CRAIK OP-CENTER"</span>
            </div>

            <div class="top-header__actions">
                <Show when=is_recording>
                    <div class="top-header__recording">
                        <div class="safety-pulse"></div>
                        <span>"RECORDING TIME"</span>
                    </div>
                </Show>
                <button class="top-header__icon-btn" title="Notifications">
                    {icon("bell")}
                    <span class="top-header__badge"></span>
                </button>
            </div>
        </header>
    }
}
