use super::camera;
use crate::shared::icons::{icon, icon_sized};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::shared::branding::FIELD_OPERATOR;
use contracts::usecases::u502_vision_link::{VisionHud, VISION_SCAN_DELAY_MS, VOICE_HINT};
use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::MediaStream;

/// Количество полосок индикатора голосового ввода
const VOICE_BARS: usize = 5;

#[component]
#[allow(non_snake_case)]
pub fn VisionLinkView() -> impl IntoView {
    let hud = RwSignal::new(VisionHud::default());
    let video_ref = NodeRef::<html::Video>::new();
    let stream = StoredValue::new_local(None::<MediaStream>);

    Effect::new(move |_| {
        let Some(video) = video_ref.get() else {
            return;
        };
        spawn_local(async move {
            match camera::open_rear_camera().await {
                Ok(media) => {
                    video.set_src_object(Some(&media));
                    // Экран успели закрыть, пока браузер спрашивал разрешение
                    if stream.try_update_value(|slot| *slot = Some(media.clone())).is_none() {
                        camera::stop(&media);
                    }
                }
                Err(e) => log::error!("Camera access denied for Vision Link: {}", e),
            }
        });
    });

    on_cleanup(move || {
        stream.try_with_value(|slot| {
            if let Some(media) = slot {
                camera::stop(media);
            }
        });
    });

    let manual_trigger = move |_| {
        let Some(generation) = hud.try_update(|h| h.trigger()).flatten() else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(VISION_SCAN_DELAY_MS).await;
            hud.try_update(|h| h.finish(generation));
        });
    };

    let is_scanning = move || hud.with(|h| h.scan.is_scanning());

    view! {
        <PageFrame page_id="u502_vision_link--usecase" category=PAGE_CAT_USECASE class="vision">
            <video node_ref=video_ref class="vision__feed" autoplay=true playsinline=true muted=true></video>

            <div class="vision__hud">
                <div class="vision__telemetry">
                    <div>
                        <div class="vision__sync">
                            <span class="pulse-dot"></span>
                            "VISION-SYNC v1.1 ACTIVE"
                        </div>
                        <div class="vision__user">{format!("USER: {}", FIELD_OPERATOR)}</div>
                    </div>
                    <div class="vision__signals">
                        {icon_sized("wifi", 16)}
                        {icon_sized("battery", 16)}
                    </div>
                </div>

                <div class="vision__reticle-wrap">
                    <div class="vision__reticle" class:vision__reticle--scanning=is_scanning>
                        <span class="bracket bracket--tl"></span>
                        <span class="bracket bracket--tr"></span>
                        <span class="bracket bracket--bl"></span>
                        <span class="bracket bracket--br"></span>
                        <div class="vision__crosshair" class:spin=is_scanning>
                            {icon_sized("crosshair", 32)}
                        </div>
                        <div class="vision__scan-line"></div>
                    </div>
                </div>

                <div class="vision__bottom">
                    <div class="vision__card">
                        <div class="vision__card-title">
                            {icon_sized("package", 20)}
                            <span>"Part Recognition"</span>
                        </div>
                        {move || match hud.with(|h| h.last_scanned.clone()) {
                            Some(part) => view! {
                                <div class="vision__match">
                                    <p class="vision__part">{part}</p>
                                    <p class="vision__match-note">"MATCH FOUND IN INVENTORY"</p>
                                    <button class="btn btn--accent btn--block">"Confirm Log"</button>
                                </div>
                            }
                            .into_any(),
                            None => view! {
                                <p class="vision__idle">"Point glasses at barcode to identify"</p>
                            }
                            .into_any(),
                        }}
                    </div>

                    <div class="vision__controls">
                        <div class="vision__voice">
                            <div class="voice-bars">
                                {(0..VOICE_BARS)
                                    .map(|i| {
                                        let style = format!(
                                            "height: {:.0}%; animation-delay: {:.1}s",
                                            js_sys::Math::random() * 100.0,
                                            i as f64 * 0.1,
                                        );
                                        view! { <span class="voice-bars__bar" style=style></span> }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="vision__voice-text">
                                <p>"Voice Input Active"</p>
                                <p class="vision__voice-hint">{VOICE_HINT}</p>
                            </div>
                            <div class="vision__mic">{icon("mic")}</div>
                        </div>

                        <button class="btn btn--light vision__trigger" on:click=manual_trigger>
                            {icon_sized("scan", 20)}
                            " MANUAL TRIGGER"
                        </button>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
