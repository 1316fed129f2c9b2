//! Cheap-eats assistant: region, category and price filters.

use leptos::prelude::*;

use crate::chat::assistant::Cheap;
use crate::chat::filters::CheapForm;
use crate::chat::submit::submit;
use crate::config::ClientConfig;
use crate::net::api::HttpTransport;
use crate::state::panel::PanelState;
use crate::state::ui::Bot;

use super::chat_panel::ChatPanel;

#[component]
pub fn CheapPanel() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let transport = HttpTransport::new(&config);
    let rules = config.input_rules;

    let panel = RwSignal::new(PanelState::default());
    let form = RwSignal::new(CheapForm::default());

    let on_send = Callback::new(move |()| {
        let transport = transport.clone();
        let rules = rules.clone();
        let form = form.get_untracked();
        leptos::task::spawn_local(async move {
            submit::<Cheap, _, _>(&panel, &transport, &rules, &form).await;
        });
    });

    view! {
        <ChatPanel bot=Bot::Cheap panel=panel on_send=on_send>
            <label class="control">
                <span class="control__label">"시도"</span>
                <input
                    type="text"
                    id="cheap-sido"
                    placeholder="예: 서울특별시"
                    prop:value=move || form.with(|f| f.sido.clone())
                    on:input=move |ev| form.update(|f| f.sido = event_target_value(&ev))
                />
            </label>
            <label class="control">
                <span class="control__label">"시군구"</span>
                <input
                    type="text"
                    id="cheap-sigungu"
                    placeholder="예: 마포구"
                    prop:value=move || form.with(|f| f.sigungu.clone())
                    on:input=move |ev| form.update(|f| f.sigungu = event_target_value(&ev))
                />
            </label>
            <label class="control">
                <span class="control__label">"업종"</span>
                <input
                    type="text"
                    id="cheap-category"
                    placeholder="예: 한식, 미용업"
                    prop:value=move || form.with(|f| f.category.clone())
                    on:input=move |ev| form.update(|f| f.category = event_target_value(&ev))
                />
            </label>
            <label class="control">
                <span class="control__label">"최대 가격"</span>
                <input
                    type="number"
                    id="cheap-max-price"
                    min="0"
                    step="500"
                    placeholder="원"
                    prop:value=move || form.with(|f| f.max_price.clone())
                    on:input=move |ev| form.update(|f| f.max_price = event_target_value(&ev))
                />
            </label>
        </ChatPanel>
    }
}
