//! Shared chat window: filter row, transcript, question input and send button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both assistants render through this component. It owns no submission
//! logic; clicking send and pressing Enter both invoke the same `on_send`
//! callback, and the disabled state is read from the panel's in-flight flag.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::panel::PanelState;
use crate::state::ui::Bot;
use crate::util::keys::is_submit_key;

use super::message_list::MessageList;

/// Chat window for one assistant. `children` are the assistant's filter controls.
#[component]
pub fn ChatPanel(bot: Bot, panel: RwSignal<PanelState>, on_send: Callback<()>, children: Children) -> impl IntoView {
    let models = expect_context::<ClientConfig>().models;
    let in_flight = move || panel.with(|p| p.in_flight);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            on_send.run(());
        }
    };

    view! {
        <div class="chat-panel">
            <div class="chat-controls">
                <label class="control">
                    <span class="control__label">"모델"</span>
                    <select
                        id=format!("{bot}-model-select")
                        prop:value=move || panel.with(|p| p.model.clone())
                        on:change=move |ev| panel.update(|p| p.model = event_target_value(&ev))
                    >
                        {models
                            .into_iter()
                            .map(|m| view! { <option value=m.id>{m.label}</option> })
                            .collect_view()}
                    </select>
                </label>
                {children()}
            </div>

            <MessageList bot=bot panel=panel/>

            <div class="chat-input-row">
                <textarea
                    id=format!("input-{bot}")
                    class="chat-input"
                    rows="2"
                    placeholder="질문을 입력하세요 (Shift+Enter 줄바꿈)"
                    disabled=in_flight
                    prop:value=move || panel.with(|p| p.draft.clone())
                    on:input=move |ev| panel.update(|p| p.draft = event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button
                    id=format!("send-{bot}")
                    class="btn btn--primary chat-send"
                    disabled=in_flight
                    on:click=move |_| on_send.run(())
                >
                    "전송"
                </button>
            </div>
        </div>
    }
}
