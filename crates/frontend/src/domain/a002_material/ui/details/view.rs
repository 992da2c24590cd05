use super::view_model::MaterialDetailsViewModel;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::{icon, icon_sized};
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_job::aggregate::JobId;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_scan_barcode::ScanBarcode;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn MaterialDetails(job_id: JobId) -> impl IntoView {
    let ctx = use_app_context();
    let vm = MaterialDetailsViewModel::new();

    let close = Callback::new(move |_| {
        vm.reset();
        ctx.close_material_modal();
    });

    let job_ref = format!("JOB REF: {}", job_id.value());
    let submit_job_id = job_id.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command(ctx, &submit_job_id, close);
    };

    view! {
        <ModalFrame on_close=close modal_class="material-modal".to_string()>
            <div class="modal-header">
                <div>
                    <h3 class="modal-title">"LOG MATERIALS"</h3>
                    <p class="modal-subtitle">{job_ref}</p>
                </div>
                <button class="icon-button" title="Close" on:click=move |_| close.run(())>
                    {icon("x")}
                </button>
            </div>

            <form class="detail-form" on:submit=on_submit>
                <div class="form__group">
                    <label class="form__label">"PART NAME / DESCRIPTION"</label>
                    <input
                        class="form__input"
                        type="text"
                        required=true
                        placeholder="E.G. MK LOGIC 1-GANG SOCKET..."
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form__group">
                    <label class="form__label">"BARCODE [OPTIONAL]"</label>
                    <div class="form__input-row">
                        <input
                            class="form__input"
                            type="text"
                            placeholder="SCAN OR ENTER BARCODE ID..."
                            prop:value=move || vm.form.with(|f| f.barcode.clone())
                            on:input=move |ev| vm.form.update(|f| f.barcode = event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="scan-button"
                            class:scan-button--busy=move || vm.scan.with(|s| s.is_scanning())
                            class:scan-button--done=move || vm.scan.with(|s| s.is_succeeded())
                            title=ScanBarcode::display_name()
                            disabled=move || vm.scan.with(|s| s.is_scanning())
                            on:click=move |_| vm.scan_command()
                        >
                            {move || {
                                let scan = vm.scan.get();
                                if scan.is_scanning() {
                                    icon("activity")
                                } else if scan.is_succeeded() {
                                    icon("check-circle")
                                } else {
                                    icon("scan")
                                }
                            }}
                        </button>
                    </div>
                    <p class="form__hint">
                        {icon_sized("zap", 10)}
                        " AI-Vision Scanner Compatible [BETA]"
                    </p>
                </div>

                <div class="form__grid">
                    <div class="form__group">
                        <label class="form__label">"UNITS (QTY)"</label>
                        <input
                            class="form__input"
                            type="number"
                            min="1"
                            step="any"
                            required=true
                            prop:value=move || vm.form.with(|f| f.quantity.clone())
                            on:input=move |ev| vm.form.update(|f| f.quantity = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"QTY PER UNIT"</label>
                        <input
                            class="form__input"
                            type="number"
                            step="any"
                            placeholder="E.G. 100 (for 100m)"
                            prop:value=move || vm.form.with(|f| f.unit_quantity.clone())
                            on:input=move |ev| vm.form.update(|f| f.unit_quantity = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"UNIT COST (£) [OPTIONAL]"</label>
                        <input
                            class="form__input"
                            type="number"
                            step="0.01"
                            placeholder="0.00"
                            prop:value=move || vm.form.with(|f| f.unit_cost.clone())
                            on:input=move |ev| vm.form.update(|f| f.unit_cost = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"TOTAL LOGGED QTY"</label>
                        <div class="form__readout">
                            <span class="form__readout-tag">"CALCULATED"</span>
                            <span class="form__readout-value">{move || vm.total_quantity().to_string()}</span>
                        </div>
                    </div>
                </div>

                <div class="form__group">
                    <label class="form__label">"UNIT PRICE (£) [FOR INVOICING] [OPTIONAL]"</label>
                    <input
                        class="form__input"
                        type="number"
                        step="0.01"
                        placeholder="0.00"
                        prop:value=move || vm.form.with(|f| f.unit_price.clone())
                        on:input=move |ev| vm.form.update(|f| f.unit_price = event_target_value(&ev))
                    />
                </div>

                {move || vm.margin().map(|margin| view! {
                    <div class="margin-row">
                        <span class="margin-row__label">{icon_sized("trending-up", 12)}" Est. Margin"</span>
                        <span class="margin-row__value">
                            {margin.profit_label()}
                            <span
                                class="margin-row__percent"
                                class:margin-row__percent--healthy=margin.is_healthy()
                            >
                                {margin.margin_label()}
                            </span>
                        </span>
                    </div>
                })}

                <div class="form__group">
                    <label class="form__label">"JOB DESCRIPTION [OPTIONAL]"</label>
                    <textarea
                        class="form__textarea"
                        rows="3"
                        placeholder="ENTER SPECIFIC INSTALLATION DETAILS, LOCATION (E.G. KITCHEN), OR FAULT NOTES..."
                        prop:value=move || vm.form.with(|f| f.description.clone())
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>

                {move || vm.error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}

                <button type="submit" class="btn btn--primary btn--block">
                    "RECORD TO JOB LEDGER"
                </button>
            </form>
        </ModalFrame>
    }
}
