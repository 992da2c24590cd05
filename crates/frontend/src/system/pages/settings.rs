use crate::shared::icons::icon_sized;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;

/// Заглушка настроек
#[component]
#[allow(non_snake_case)]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM>
            <div class="empty-state empty-state--page">
                {icon_sized("settings", 48)}
                <p>"Settings Module Offline"</p>
            </div>
        </PageFrame>
    }
}
