use crate::dashboards::d400_shift_dashboard::ui::ShiftDashboard;
use crate::domain::a001_job::ui::list::JobList;
use crate::domain::a002_material::ui::list::MaterialList;
use crate::domain::a003_assistant_chat::ui::details::AssistantChatDetails;
use crate::layout::global_context::use_app_context;
use crate::marketing::future_tech::FutureTechPage;
use crate::system::pages::settings::SettingsPage;
use crate::usecases::u502_vision_link::VisionLinkView;
use contracts::shared::navigation::ViewType;
use leptos::prelude::*;

/// Содержимое активного экрана
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_app_context();

    move || match ctx.active_view.get() {
        ViewType::Dashboard => view! { <ShiftDashboard /> }.into_any(),
        ViewType::Jobs => view! { <JobList /> }.into_any(),
        ViewType::Materials => view! { <MaterialList /> }.into_any(),
        ViewType::VisionLink => view! { <VisionLinkView /> }.into_any(),
        ViewType::FutureTech => view! { <FutureTechPage /> }.into_any(),
        ViewType::AiAssistant => view! { <AssistantChatDetails /> }.into_any(),
        ViewType::Settings => view! { <SettingsPage /> }.into_any(),
    }
}
