//! Scrollable chat window rendering a panel's transcript.

use leptos::prelude::*;

use crate::state::panel::{ChatMessage, PanelState};
use crate::state::ui::Bot;

/// Chat window for one panel. Scrolls to the newest message on every append.
#[component]
pub fn MessageList(bot: Bot, panel: RwSignal<PanelState>) -> impl IntoView {
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let messages = Memo::new(move |_| panel.with(|p| p.transcript.messages().to_vec()));

    Effect::new(move || {
        let _ = messages.with(Vec::len);

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div id=format!("chat-window-{bot}") class="chat-window" node_ref=messages_ref>
            {move || {
                let messages = messages.get();
                if messages.is_empty() {
                    return view! { <div class="chat-empty">{bot.blurb()}</div> }.into_any();
                }

                messages.into_iter().map(|msg| view! { <MessageBubble message=msg/> }).collect_view().into_any()
            }}
        </div>
    }
}

/// One `.chat-message` block: role label, text and optional meta line.
#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let class = message.css_class();
    let role = message.role.display_name();

    view! {
        <div class=class data-id=message.id.to_string()>
            <div class="chat-bubble">
                <div class="chat-role">{role}</div>
                <div class="chat-text">{message.text}</div>
                {message.meta.map(|meta| view! { <div class="chat-meta">{meta}</div> })}
            </div>
        </div>
    }
}
