//! Lodging assistant: registry filters bound to the submission controller.

use leptos::prelude::*;

use crate::chat::assistant::Lodging;
use crate::chat::filters::LodgingForm;
use crate::chat::submit::submit;
use crate::config::ClientConfig;
use crate::net::api::HttpTransport;
use crate::state::panel::PanelState;
use crate::state::ui::Bot;

use super::chat_panel::ChatPanel;

/// Lodging panel with active-only, owner-type and multi-use filters.
#[component]
pub fn LodgingPanel() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let transport = HttpTransport::new(&config);
    let rules = config.input_rules;

    let panel = RwSignal::new(PanelState::default());
    let form = RwSignal::new(LodgingForm::default());

    let on_send = Callback::new(move |()| {
        let transport = transport.clone();
        let rules = rules.clone();
        let form = form.get_untracked();
        leptos::task::spawn_local(async move {
            submit::<Lodging, _, _>(&panel, &transport, &rules, &form).await;
        });
    });

    view! {
        <ChatPanel bot=Bot::Lodging panel=panel on_send=on_send>
            <label class="control control--check">
                <input
                    type="checkbox"
                    id="lodging-active-only"
                    prop:checked=move || form.with(|f| f.active_only)
                    on:change=move |ev| form.update(|f| f.active_only = event_target_checked(&ev))
                />
                <span class="control__label">"영업 중인 곳만"</span>
            </label>
            <label class="control">
                <span class="control__label">"소유 형태"</span>
                <input
                    type="text"
                    id="lodging-owner-type"
                    placeholder="예: 개인, 법인"
                    prop:value=move || form.with(|f| f.owner_type.clone())
                    on:input=move |ev| form.update(|f| f.owner_type = event_target_value(&ev))
                />
            </label>
            <label class="control">
                <span class="control__label">"다중 이용"</span>
                <select
                    id="lodging-multi-only"
                    prop:value=move || form.with(|f| f.multi_only.clone())
                    on:change=move |ev| form.update(|f| f.multi_only = event_target_value(&ev))
                >
                    <option value="">"전체"</option>
                    <option value="true">"다중이용업소만"</option>
                    <option value="false">"다중이용업소 제외"</option>
                </select>
            </label>
        </ChatPanel>
    }
}
