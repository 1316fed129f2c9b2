//! Selector cards and tabs that choose the visible assistant.

use leptos::prelude::*;

use crate::state::ui::{Bot, UiState};

/// Large selector cards at the top of the page.
#[component]
pub fn BotCards() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="bot-cards">
            {Bot::ALL
                .into_iter()
                .map(|bot| {
                    view! {
                        <button
                            class="bot-card"
                            class:active=move || ui.with(|u| u.is_active(bot))
                            data-bot=bot.as_str()
                            on:click=move |_| ui.update(|u| u.activate(bot))
                        >
                            <span class="bot-card__title">{bot.title()}</span>
                            <span class="bot-card__blurb">{bot.blurb()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Compact tab strip above the panels.
#[component]
pub fn BotTabs() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="bot-tabs">
            {Bot::ALL
                .into_iter()
                .map(|bot| {
                    view! {
                        <button
                            class="bot-tab"
                            class:active=move || ui.with(|u| u.is_active(bot))
                            data-bot=bot.as_str()
                            on:click=move |_| ui.update(|u| u.activate(bot))
                        >
                            {bot.title()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
