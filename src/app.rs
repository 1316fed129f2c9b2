//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::bot_selector::{BotCards, BotTabs};
use crate::components::cheap_panel::CheapPanel;
use crate::components::lodging_panel::LodgingPanel;
use crate::components::status_badge::StatusBadge;
use crate::config::ClientConfig;
use crate::state::ui::{Bot, UiState};

/// Root application component.
///
/// Provides the client config and UI state, checks backend health once, and
/// renders both panels. Inactive panels stay mounted and are hidden by CSS so
/// their transcripts survive tab switches.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let ui = RwSignal::new(UiState::default());

    #[cfg(feature = "csr")]
    {
        use crate::net::api::{HttpTransport, check_health};
        use crate::state::ui::BackendStatus;

        let transport = HttpTransport::new(&config);
        leptos::task::spawn_local(async move {
            let result = check_health(&transport).await;
            match &result {
                Ok(true) => log::info!("backend health ok"),
                Ok(false) => log::warn!("backend health reported not ok"),
                Err(e) => log::warn!("backend health check failed: {e}"),
            }
            ui.update(|u| u.backend = BackendStatus::from_health(&result));
        });
    }

    provide_context(config);
    provide_context(ui);

    let is_active = move |bot: Bot| ui.with(|u| u.is_active(bot));

    view! {
        <Title text="Local RAG Lab"/>
        <Meta name="description" content="숙박 · 착한 가격 가게 공공데이터 RAG 챗봇"/>

        <header class="app-header">
            <h1 class="app-header__title">"Local RAG Lab"</h1>
            <StatusBadge/>
        </header>

        <main class="app-main">
            <BotCards/>
            <BotTabs/>

            <section id=Bot::Lodging.panel_id() class="panel" class:active=move || is_active(Bot::Lodging)>
                <LodgingPanel/>
            </section>
            <section id=Bot::Cheap.panel_id() class="panel" class:active=move || is_active(Bot::Cheap)>
                <CheapPanel/>
            </section>
        </main>
    }
}
