//! Header badge showing whether the backend answered `GET /health`.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn StatusBadge() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let status = move || ui.with(|u| u.backend);

    view! {
        <span class=move || status().css_class() title="백엔드 상태">
            {move || status().label()}
        </span>
    }
}
