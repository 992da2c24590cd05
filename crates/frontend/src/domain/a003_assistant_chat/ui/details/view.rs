use super::view_model::AssistantChatViewModel;
use crate::shared::icons::{icon, icon_sized};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a003_assistant_chat::aggregate::ChatMessage;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn AssistantChatDetails() -> impl IntoView {
    let vm = AssistantChatViewModel::new();
    let scroll_ref = NodeRef::<html::Div>::new();

    // Прокрутка к последнему сообщению
    Effect::new(move |_| {
        vm.transcript.track();
        vm.is_loading.track();
        if let Some(el) = scroll_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.send_command();
    };

    view! {
        <PageFrame page_id="a003_assistant_chat--detail" category=PAGE_CAT_DETAIL class="terminal">
            <div class="terminal__header">
                <div class="terminal__badge">{icon_sized("bot", 24)}</div>
                <div>
                    <h2 class="terminal__title">"AI FIELD TECH"</h2>
                    <p class="terminal__subtitle">"NICEIC KNOWLEDGE BASE INTEGRATED"</p>
                </div>
                <span class="terminal__status">"STATUS: NOMINAL"</span>
            </div>

            <div class="terminal__scroll" node_ref=scroll_ref>
                <For
                    each=move || vm.transcript.with(|t| t.messages.clone().into_iter().enumerate().collect::<Vec<_>>())
                    key=|(index, _)| *index
                    let:entry
                >
                    <MessageBubble message=entry.1 />
                </For>
                <Show when=move || vm.is_loading.get()>
                    <div class="bubble bubble--model bubble--loading">
                        <Spinner size=SpinnerSize::Tiny />
                    </div>
                </Show>
            </div>

            <div class="terminal__footer">
                <MessageBar intent=MessageBarIntent::Warning>
                    <span class="terminal__disclaimer">
                        {icon_sized("shield-check", 12)}
                        " AI advice is for reference only. Adhere to BS 7671 at all times."
                    </span>
                </MessageBar>
                <form class="terminal__input" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="FAULT DESCRIPTION OR SERVICE QUERY..."
                        prop:value=move || vm.input.get()
                        on:input=move |ev| vm.input.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn--primary" disabled=move || !vm.can_submit()>
                        {icon("send")}
                    </button>
                </form>
            </div>
        </PageFrame>
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.is_user();

    view! {
        <div class="bubble-row" class:bubble-row--user=is_user>
            <div class="bubble" class:bubble--user=is_user class:bubble--model=!is_user>
                {message.text}
            </div>
        </div>
    }
}
