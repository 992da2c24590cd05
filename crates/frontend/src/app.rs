use crate::layout::center::Center;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // Таймер смены живёт столько же, сколько приложение
    ctx.run_shift_ticker();

    view! {
        <Shell>
            <Center />
        </Shell>
    }
}
